use crate::config::FieldSpec;
use crate::escape::{escape_attr, escape_html};
use crate::plugin::PluginContext;
use std::fmt::Write;

/// Render the `<input>` and description for one settings field, pre-filled
/// with the stored value.
pub fn render_field(ctx: &PluginContext, field: &FieldSpec) -> String {
	let value = ctx
		.options
		.get(field.key)
		.map(|v| v.to_string())
		.unwrap_or_default();

	let attributes = [
		("name", format!("{}[{}]", ctx.info.domain, field.key)),
		("type", field.input_type.as_str().to_string()),
		("id", field.key.to_string()),
		("aria-describedby", format!("{}-description", field.key)),
		("value", value),
		("class", "regular-text".to_string()),
		("placeholder", field.placeholder.to_string()),
	];
	let attributes: Vec<_> = attributes
		.iter()
		.map(|(name, value)| format!("{}=\"{}\"", name, escape_attr(value)))
		.collect();

	let mut out = String::new();
	let _ = writeln!(out, "<input {} />", attributes.join(" "));
	let _ = writeln!(
		out,
		"<p class=\"description\" id=\"{}-description\">{}</p>",
		escape_attr(field.key),
		escape_html(field.description)
	);
	out
}

/// Render the settings section: heading, intro and one row per field.
pub fn render_settings_form(ctx: &PluginContext) -> String {
	let mut out = String::new();
	let name = escape_html(ctx.info.name);

	let _ = writeln!(out, "<h2>{}</h2>", name);
	let _ = writeln!(out, "<p>Configuration options for the {} plugin.</p>", name);
	out.push_str("<table class=\"form-table\" role=\"presentation\">\n");
	for field in ctx.schema.fields() {
		let _ = write!(
			out,
			"<tr>\n<th scope=\"row\"><label for=\"{id}\">{id}</label></th>\n<td>\n{}</td>\n</tr>\n",
			render_field(ctx, field),
			id = escape_attr(field.key)
		);
	}
	out.push_str("</table>\n");
	out
}
