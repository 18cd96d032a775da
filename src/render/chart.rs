use crate::escape::{escape_attr, escape_html};
use crate::plugin::PluginContext;
use crate::render::assets::{Asset, AssetQueue};
use crate::serialize::serialize_config;
use crate::shortcode::{ChartAttributes, format_number};
use serde_json::{Map, Value};
use std::fmt::Write;

/// Queue the chart stylesheet and library scripts unless a previous chart
/// on the page already did.
pub fn enqueue_chart_assets(ctx: &PluginContext, queue: &mut AssetQueue) {
	let domain = ctx.info.domain;
	let base = ctx.asset_base_url.trim_end_matches('/');

	if !queue.is_style_enqueued(domain) {
		queue.enqueue_style(
			Asset::new(domain)
				.src(format!("{}/css/style.css", base))
				.version(ctx.info.version),
		);
	}

	if queue.is_script_enqueued(domain) {
		tracing::debug!(handle = domain, "chart scripts already enqueued");
		return;
	}

	let library_handle = format!("jquery-{}", domain);
	let library_src = format!("{}/js/jquery.easypiechart.min.js", base);

	queue.enqueue_script(Asset::new("jquery"));
	queue.enqueue_script(
		Asset::new(library_handle.clone())
			.src(library_src.clone())
			.dep("jquery")
			.version(ctx.info.library_version),
	);
	if ctx.admin {
		queue.enqueue_script(
			Asset::new(domain)
				.src(library_src)
				.dep(library_handle)
				.version(ctx.info.version),
		);
	}

	let mut data = Map::new();
	data.insert("selector".to_string(), Value::String(format!(".{}", domain)));
	for (key, value) in ctx.options.iter() {
		data.insert(key.to_string(), Value::String(value.to_string()));
	}
	if !queue.localize_script(domain, &ctx.script_object_name(), data) {
		tracing::debug!(handle = domain, "no script to attach chart options to");
	}

	// Marks the page as done even when the admin script was not loaded.
	queue.enqueue_script(Asset::new(domain));
}

/// Render one chart: the markup, followed by the script that initializes
/// it with the merged configuration.
pub fn render_chart(
	ctx: &PluginContext,
	attrs: &ChartAttributes,
	queue: &mut AssetQueue,
) -> String {
	let config = ctx.resolve(attrs);
	let literal = serialize_config(&config);

	enqueue_chart_assets(ctx, queue);

	let mut out = String::new();
	let data_percent = format_number(attrs.percent_value() + 1.0);
	let percent_text = attrs.percent.as_deref().map(escape_html).unwrap_or_default();

	out.push_str("<div class=\"chart\">\n");
	let _ = write!(
		out,
		"\t<div class=\"percentage easyPieChart\" data-percent=\"{}\"",
		escape_attr(&data_percent)
	);
	if let Some(color) = ctx.scale_color(attrs) {
		let _ = write!(out, " data-scale-color=\"{}\"", escape_attr(&color));
	}
	out.push_str(">\n");
	let _ = writeln!(out, "\t\t<span class=\"percent\">{}%</span>", percent_text);
	out.push_str("\t</div>\n");
	if let Some(label) = &attrs.label {
		let _ = writeln!(out, "\t<div class=\"label\">{}</div>", escape_html(label));
	}
	out.push_str("</div>\n");

	out.push_str("<script type=\"text/javascript\">\n");
	out.push_str("jQuery( document ).ready( function () {\n");
	out.push_str("\tjQuery('.easyPieChart').easyPieChart(\n");
	let _ = writeln!(out, "\t\t{}", literal);
	out.push_str("\t);\n");
	out.push_str("} );\n");
	out.push_str("</script>\n");

	out
}
