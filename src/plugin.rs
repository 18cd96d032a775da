//! The plugin context passed to every render and settings operation.

use crate::config::{
	OptionsRecord, PluginInfo, ResolvedConfig, Schema, load_options, merge_config, save_options,
};
use crate::error::Result;
use crate::render::{AssetQueue, render_chart, render_settings_form};
use crate::shortcode::{ChartAttributes, SHORTCODE_TAG, replace_shortcodes};
use crate::validate::{ValidationReport, validate_submission};
use std::path::Path;

/// Base URL the plugin's `css/` and `js/` folders are served from.
pub const DEFAULT_ASSET_BASE_URL: &str = "/wp-content/plugins/wp-easypiechart/";

/// Everything a render or settings operation needs: plugin identity, the
/// field schema and the stored site-wide options.
#[derive(Debug, Clone)]
pub struct PluginContext {
	pub info: PluginInfo,
	pub schema: Schema,

	/// Site-wide chart defaults, as loaded at startup.
	pub options: OptionsRecord,

	pub asset_base_url: String,

	/// Whether the page is rendered in the admin area.
	pub admin: bool,
}

impl PluginContext {
	pub fn new(options: OptionsRecord) -> Self {
		Self {
			info: PluginInfo::default(),
			schema: Schema::default(),
			options,
			asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
			admin: false,
		}
	}

	/// Load the stored options from the options store at `path`.
	pub fn load(path: &Path) -> Result<Self> {
		let options = load_options(path, PluginInfo::default().domain)?;
		Ok(Self::new(options))
	}

	pub fn with_schema(mut self, schema: Schema) -> Self {
		self.schema = schema;
		self
	}

	pub fn with_asset_base_url(mut self, url: impl Into<String>) -> Self {
		self.asset_base_url = url.into();
		self
	}

	pub fn with_admin(mut self, admin: bool) -> Self {
		self.admin = admin;
		self
	}

	/// Name of the global JavaScript object holding the localized options.
	pub fn script_object_name(&self) -> String {
		self.info.domain.replace('-', "_")
	}

	/// Merge the stored options with a chart's attributes.
	pub fn resolve(&self, attrs: &ChartAttributes) -> ResolvedConfig {
		merge_config(&self.schema, &self.options, &attrs.overrides)
	}

	/// Scale color for the chart's data attribute: the shortcode's
	/// `scalecolor`, else the stored `scaleColor` option.
	pub fn scale_color(&self, attrs: &ChartAttributes) -> Option<String> {
		attrs.scale_color.clone().or_else(|| {
			self.options
				.get("scaleColor")
				.map(|v| v.to_string())
				.filter(|v| !v.is_empty())
		})
	}

	/// Render a single chart.
	pub fn render_chart(&self, attrs: &ChartAttributes, queue: &mut AssetQueue) -> String {
		render_chart(self, attrs, queue)
	}

	/// Expand every chart shortcode in the content.
	pub fn render_content(&self, content: &str, queue: &mut AssetQueue) -> String {
		replace_shortcodes(content, SHORTCODE_TAG, |overrides| {
			let attrs = ChartAttributes::from_overrides(overrides.clone());
			render_chart(self, &attrs, queue)
		})
	}

	pub fn settings_form(&self) -> String {
		render_settings_form(self)
	}

	/// Validate a settings submission against the schema.
	pub fn validate<'a, I>(&self, submission: I) -> ValidationReport
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		validate_submission(&self.schema, submission)
	}

	/// Validate a submission and persist the fields that passed, replacing
	/// the stored options.
	pub fn submit<'a, I>(&mut self, path: &Path, submission: I) -> Result<ValidationReport>
	where
		I: IntoIterator<Item = (&'a str, &'a str)>,
	{
		let report = self.validate(submission);
		save_options(path, self.info.domain, &report.record)?;
		self.options = report.record.clone();

		tracing::info!(
			path = %path.display(),
			saved = report.record.len(),
			rejected = report.errors.len(),
			"settings saved"
		);
		Ok(report)
	}
}
