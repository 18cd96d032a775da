use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use easypie_cli::EasyPieError;
use easypie_cli::config::{OptionsRecord, OverrideRecord, PluginInfo, default_store_path};
use easypie_cli::plugin::{DEFAULT_ASSET_BASE_URL, PluginContext};
use easypie_cli::render::AssetQueue;
use easypie_cli::shortcode::ChartAttributes;

#[derive(Parser)]
#[command(name = "easypie")]
#[command(
	author,
	version,
	about = "Render Easy Pie Chart shortcodes and manage their default settings"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	/// Options store file (defaults to the user config directory)
	#[arg(long, global = true, value_name = "PATH")]
	store: Option<PathBuf>,

	/// Base URL the plugin's css/ and js/ folders are served from
	#[arg(long, global = true, value_name = "URL", default_value = DEFAULT_ASSET_BASE_URL)]
	asset_url: String,

	/// Increase log verbosity (-v info, -vv debug)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
	/// Expand every [easypiechart] shortcode in the content
	Render {
		/// File to read content from (stdin when omitted)
		#[arg(value_name = "FILE", conflicts_with = "content")]
		file: Option<PathBuf>,

		/// Content given inline instead of a file
		#[arg(long)]
		content: Option<String>,

		/// Render as in the admin area
		#[arg(long)]
		admin: bool,
	},
	/// Render a single chart from attributes
	Chart {
		/// Percentage shown by the chart
		#[arg(long)]
		percent: Option<String>,

		/// Caption under the chart
		#[arg(long)]
		label: Option<String>,

		/// Extra shortcode attributes, e.g. barcolor=#000 size=80
		#[arg(value_name = "ATTR=VALUE")]
		attributes: Vec<String>,

		/// Render as in the admin area
		#[arg(long)]
		admin: bool,
	},
	/// Admin settings commands
	Settings {
		#[command(subcommand)]
		action: SettingsAction,
	},
}

#[derive(Subcommand)]
enum SettingsAction {
	/// Print the settings form
	Show,
	/// List every field with its effective value
	List,
	/// Validate and save settings; fields not submitted reset to defaults
	Submit {
		#[arg(value_name = "KEY=VALUE")]
		fields: Vec<String>,
	},
	/// Print the options store path
	Path,
}

fn main() -> ExitCode {
	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	if let Err(e) = easypie_cli::logging::init(cli.verbose) {
		eprintln!("Warning: failed to initialize logging: {}", e);
	}

	let store_path = match cli.store {
		Some(path) => path,
		None => default_store_path(PluginInfo::default().domain)
			.context("Failed to locate the options store")?,
	};

	// Submitting replaces the stored options, so a broken store must not
	// block it.
	if let Commands::Settings { action } = &cli.command {
		match action {
			SettingsAction::Path => {
				println!("{}", store_path.display());
				return Ok(ExitCode::SUCCESS);
			}
			SettingsAction::Submit { fields } => {
				let ctx = PluginContext::new(OptionsRecord::new());
				return handle_settings_submit(ctx, &store_path, fields);
			}
			SettingsAction::Show | SettingsAction::List => {}
		}
	}

	let ctx = PluginContext::load(&store_path)
		.with_context(|| format!("Failed to load options from {}", store_path.display()))?
		.with_asset_base_url(cli.asset_url);

	match cli.command {
		Commands::Render {
			file,
			content,
			admin,
		} => handle_render(ctx.with_admin(admin), file.as_deref(), content),
		Commands::Chart {
			percent,
			label,
			attributes,
			admin,
		} => handle_chart(ctx.with_admin(admin), percent, label, &attributes),
		Commands::Settings { action } => match action {
			SettingsAction::Show => handle_settings_show(&ctx),
			SettingsAction::List => handle_settings_list(&ctx),
			SettingsAction::Submit { .. } | SettingsAction::Path => Ok(ExitCode::SUCCESS),
		},
	}
}

/// Split `KEY=VALUE` at the first `=`.
fn parse_assignment(input: &str) -> easypie_cli::Result<(&str, &str)> {
	input
		.split_once('=')
		.filter(|(key, _)| !key.is_empty())
		.ok_or_else(|| EasyPieError::InvalidAssignment {
			input: input.to_string(),
		})
}

fn read_content(file: Option<&Path>, content: Option<String>) -> easypie_cli::Result<String> {
	if let Some(content) = content {
		return Ok(content);
	}

	match file {
		Some(path) => {
			std::fs::read_to_string(path).map_err(|source| EasyPieError::ContentReadError {
				path: path.to_path_buf(),
				source,
			})
		}
		None => {
			let mut buffer = String::new();
			std::io::stdin()
				.read_to_string(&mut buffer)
				.map_err(|source| EasyPieError::ContentReadError {
					path: PathBuf::from("-"),
					source,
				})?;
			Ok(buffer)
		}
	}
}

fn handle_render(
	ctx: PluginContext,
	file: Option<&Path>,
	content: Option<String>,
) -> Result<ExitCode> {
	let content = read_content(file, content).context("Failed to read content")?;

	let mut assets = AssetQueue::new();
	let body = ctx.render_content(&content, &mut assets);

	print!("{}{}", assets.render_tags(), body);
	Ok(ExitCode::SUCCESS)
}

fn handle_chart(
	ctx: PluginContext,
	percent: Option<String>,
	label: Option<String>,
	attributes: &[String],
) -> Result<ExitCode> {
	let mut overrides = OverrideRecord::new();
	for assignment in attributes {
		let (key, value) = parse_assignment(assignment)?;
		overrides.insert(key, value);
	}
	if let Some(percent) = percent {
		overrides.insert("percent", percent);
	}
	if let Some(label) = label {
		overrides.insert("label", label);
	}

	let attrs = ChartAttributes::from_overrides(overrides);
	let mut assets = AssetQueue::new();
	let body = ctx.render_chart(&attrs, &mut assets);

	print!("{}{}", assets.render_tags(), body);
	Ok(ExitCode::SUCCESS)
}

fn handle_settings_show(ctx: &PluginContext) -> Result<ExitCode> {
	print!("{}", ctx.settings_form());
	Ok(ExitCode::SUCCESS)
}

fn handle_settings_list(ctx: &PluginContext) -> Result<ExitCode> {
	for field in ctx.schema.fields() {
		let (value, source) = match ctx.options.get(field.key) {
			Some(value) => (value.to_string(), "stored"),
			None => (field.placeholder.to_string(), "default"),
		};
		println!("{} = {} ({})", field.key, value, source);
		println!("    {}", field.description);
	}
	Ok(ExitCode::SUCCESS)
}

fn handle_settings_submit(
	mut ctx: PluginContext,
	store_path: &Path,
	fields: &[String],
) -> Result<ExitCode> {
	let submission = fields
		.iter()
		.map(|field| parse_assignment(field))
		.collect::<easypie_cli::Result<Vec<_>>>()?;

	let report = ctx
		.submit(store_path, submission)
		.with_context(|| format!("Failed to save settings to {}", store_path.display()))?;

	if !report.is_valid() {
		for error in &report.errors {
			eprintln!("Warning: {}", error);
		}
		eprintln!(
			"{} field(s) rejected; they were reset to their defaults",
			report.errors.len()
		);
	}

	println!(
		"Saved {} setting(s) to {}",
		report.record.len(),
		store_path.display()
	);
	Ok(ExitCode::SUCCESS)
}
