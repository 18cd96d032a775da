#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn easypie_cmd() -> assert_cmd::Command {
	assert_cmd::Command::cargo_bin("easypie").unwrap()
}

fn easypie_with_store(store: &Path) -> assert_cmd::Command {
	let mut cmd = easypie_cmd();
	cmd.arg("--store").arg(store).env_remove("RUST_LOG");
	cmd
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	easypie_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("Render Easy Pie Chart shortcodes"));
}

#[test]
fn test_version_flag() {
	easypie_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("easypie"));
}

#[test]
fn test_no_args_shows_help() {
	easypie_cmd()
		.assert()
		.failure()
		.stderr(predicate::str::contains("Usage"));
}

// ============================================================================
// chart tests
// ============================================================================

#[test]
fn test_chart_offsets_percent() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.args(["chart", "--percent", "54"])
		.assert()
		.success()
		.stdout(predicate::str::contains(r#"data-percent="55""#))
		.stdout(predicate::str::contains(r#"<span class="percent">54%</span>"#))
		.stdout(predicate::str::contains("\t\t{}\n"));
}

#[test]
fn test_chart_merges_stored_options_and_attributes() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");
	fs::write(
		&store,
		"[\"wp-easypiechart\"]\nbarColor = \"#111111\"\nsize = 150\nscaleColor = \"#999\"\n",
	)
	.unwrap();

	easypie_with_store(&store)
		.args([
			"chart",
			"--percent",
			"30",
			"--label",
			"Progress",
			"size=90",
			"animate={duration: 500, enabled: true}",
		])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"{barColor:\"#111111\",size:90,animate:{duration: 500, enabled: true}}",
		))
		.stdout(predicate::str::contains(r##"data-scale-color="#999""##))
		.stdout(predicate::str::contains(r#"<div class="label">Progress</div>"#));
}

#[test]
fn test_chart_never_serializes_template_parameters() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.args(["chart", "--percent", "10", "scalecolor=#abc", "percent=99"])
		.assert()
		.success()
		.stdout(predicate::str::contains(r##"data-scale-color="#abc""##))
		.stdout(predicate::str::contains("percent:").not())
		.stdout(predicate::str::contains("scaleColor").not());
}

#[test]
fn test_chart_rejects_malformed_attribute() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.args(["chart", "size"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Invalid attribute assignment"));
}

// ============================================================================
// render tests
// ============================================================================

#[test]
fn test_render_content_enqueues_assets_once() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");
	let content = temp_dir.path().join("post.html");
	fs::write(
		&content,
		"<p>Intro</p>\n[easypiechart percent=\"25\"]\n[easypiechart percent=\"75\"]\n[[easypiechart]]\n",
	)
	.unwrap();

	let output = easypie_with_store(&store)
		.arg("render")
		.arg(&content)
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();
	let output = String::from_utf8(output).unwrap();

	assert!(output.starts_with(r#"<link rel="stylesheet" id="wp-easypiechart-css""#));
	assert_eq!(output.matches("jquery.easypiechart.min.js").count(), 1);
	assert_eq!(output.matches(r#"<div class="chart">"#).count(), 2);
	assert!(output.contains(r#"data-percent="26""#));
	assert!(output.contains(r#"data-percent="76""#));
	assert!(output.contains("<p>Intro</p>"));
	assert!(output.contains("\n[easypiechart]\n"));
}

#[test]
fn test_render_inline_content_with_asset_url() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.args([
			"render",
			"--asset-url",
			"https://cdn.example.com/easypie/",
			"--content",
			"[easypiechart percent=5]",
		])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"https://cdn.example.com/easypie/css/style.css?ver=1.0",
		));
}

#[test]
fn test_render_from_stdin() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.arg("render")
		.write_stdin("[easypiechart percent=\"40\" label=\"Stdin\"]")
		.assert()
		.success()
		.stdout(predicate::str::contains(r#"<div class="label">Stdin</div>"#));
}

#[test]
fn test_render_admin_localizes_options() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");
	fs::write(&store, "[\"wp-easypiechart\"]\nlineWidth = 4\n").unwrap();

	easypie_with_store(&store)
		.args(["render", "--admin", "--content", "[easypiechart percent=1]"])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			r#"var wp_easypiechart = {"selector":".wp-easypiechart","lineWidth":"4"};"#,
		));
}

#[test]
fn test_render_missing_file_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.arg("render")
		.arg(temp_dir.path().join("missing.html"))
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to read content"));
}

#[test]
fn test_render_with_broken_store_fails() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");
	fs::write(&store, "this is not [valid toml").unwrap();

	easypie_with_store(&store)
		.args(["render", "--content", "[easypiechart]"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to load options"));
}

// ============================================================================
// settings tests
// ============================================================================

#[test]
fn test_settings_path() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.args(["settings", "path"])
		.assert()
		.success()
		.stdout(predicate::str::contains("options.toml"));
}

#[test]
fn test_settings_show_form() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");
	fs::write(&store, "[\"wp-easypiechart\"]\nsize = 200\n").unwrap();

	easypie_with_store(&store)
		.args(["settings", "show"])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"<p>Configuration options for the WP Easy Pie Chart plugin.</p>",
		))
		.stdout(predicate::str::contains(
			r#"name="wp-easypiechart[size]" type="text" id="size" aria-describedby="size-description" value="200""#,
		))
		.stdout(predicate::str::contains(r##"placeholder="#ef1e25""##));
}

#[test]
fn test_settings_submit_numeric_value() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.args(["settings", "submit", "lineWidth=7"])
		.assert()
		.success()
		.stdout(predicate::str::contains("Saved 1 setting(s)"))
		.stderr(predicate::str::contains("Warning").not())
		.stderr(predicate::str::contains("rejected").not());

	let content = fs::read_to_string(&store).unwrap();
	assert!(content.contains("lineWidth = 7"));
}

#[test]
fn test_settings_submit_reports_invalid_numeric_value() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.args(["settings", "submit", "lineWidth=abc", "barColor=<b>#123</b>"])
		.assert()
		.success()
		.stderr(predicate::str::contains("lineWidth must be a numeric value."))
		.stderr(predicate::str::contains("1 field(s) rejected"))
		.stdout(predicate::str::contains("Saved 1 setting(s)"));

	let content = fs::read_to_string(&store).unwrap();
	assert!(!content.contains("lineWidth"));
	assert!(content.contains("barColor = \"#123\""));
}

#[test]
fn test_settings_submit_then_list() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");

	easypie_with_store(&store)
		.args(["settings", "submit", "size=80", "easing=easeOutBounce"])
		.assert()
		.success();

	easypie_with_store(&store)
		.args(["settings", "list"])
		.assert()
		.success()
		.stdout(predicate::str::contains("size = 80 (stored)"))
		.stdout(predicate::str::contains("easing = easeOutBounce (stored)"))
		.stdout(predicate::str::contains("barColor = #ef1e25 (default)"));
}

#[test]
fn test_settings_submit_recovers_broken_store() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");
	fs::write(&store, "not = [valid").unwrap();

	easypie_with_store(&store)
		.args(["settings", "submit", "rotate=90"])
		.assert()
		.success();

	easypie_with_store(&store)
		.args(["chart", "--percent", "1"])
		.assert()
		.success()
		.stdout(predicate::str::contains("{rotate:90}"));
}

#[test]
fn test_chart_zero_attribute_keeps_stored_value() {
	let temp_dir = tempfile::tempdir().unwrap();
	let store = temp_dir.path().join("options.toml");
	fs::write(&store, "[\"wp-easypiechart\"]\nrotate = 90\n").unwrap();

	easypie_with_store(&store)
		.args(["chart", "--percent", "1", "rotate=0"])
		.assert()
		.success()
		.stdout(predicate::str::contains("{rotate:90}"));
}
