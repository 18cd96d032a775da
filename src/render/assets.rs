use crate::escape::escape_attr;
use serde_json::{Map, Value};
use std::fmt::Write;

/// A stylesheet or script to load on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
	/// Unique handle, also used for the tag id.
	pub handle: String,

	/// URL of the file. `None` for handles the host page provides itself.
	pub src: Option<String>,

	/// Handles that must load first.
	pub deps: Vec<String>,

	/// Appended to the URL as `?ver=` for cache busting.
	pub version: Option<String>,
}

impl Asset {
	pub fn new(handle: impl Into<String>) -> Self {
		Self {
			handle: handle.into(),
			src: None,
			deps: Vec::new(),
			version: None,
		}
	}

	pub fn src(mut self, src: impl Into<String>) -> Self {
		self.src = Some(src.into());
		self
	}

	pub fn dep(mut self, handle: impl Into<String>) -> Self {
		self.deps.push(handle.into());
		self
	}

	pub fn version(mut self, version: impl Into<String>) -> Self {
		self.version = Some(version.into());
		self
	}

	fn url(&self) -> Option<String> {
		let src = self.src.as_deref()?;
		Some(match &self.version {
			Some(version) => format!("{}?ver={}", src, version),
			None => src.to_string(),
		})
	}
}

/// Data exposed to a script as a global JavaScript object.
#[derive(Debug, Clone, PartialEq)]
struct LocalizedData {
	handle: String,
	object_name: String,
	data: Map<String, Value>,
}

/// Styles and scripts requested while rendering one page.
///
/// Enqueueing a handle twice is a no-op, so any number of charts on a page
/// load the library once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetQueue {
	styles: Vec<Asset>,
	scripts: Vec<Asset>,
	localized: Vec<LocalizedData>,
}

impl AssetQueue {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_style_enqueued(&self, handle: &str) -> bool {
		self.styles.iter().any(|a| a.handle == handle)
	}

	pub fn is_script_enqueued(&self, handle: &str) -> bool {
		self.scripts.iter().any(|a| a.handle == handle)
	}

	/// Queue a stylesheet. Returns false if the handle was already queued.
	pub fn enqueue_style(&mut self, asset: Asset) -> bool {
		if self.is_style_enqueued(&asset.handle) {
			return false;
		}
		self.styles.push(asset);
		true
	}

	/// Queue a script. Returns false if the handle was already queued.
	pub fn enqueue_script(&mut self, asset: Asset) -> bool {
		if self.is_script_enqueued(&asset.handle) {
			return false;
		}
		self.scripts.push(asset);
		true
	}

	/// Attach `data` to a queued script as `var <object_name> = {...};`.
	///
	/// Returns false when the script is not queued yet. Scalar values are
	/// passed as strings, matching how the data reaches the browser.
	pub fn localize_script(
		&mut self,
		handle: &str,
		object_name: &str,
		data: Map<String, Value>,
	) -> bool {
		if !self.is_script_enqueued(handle) {
			return false;
		}

		let data = data
			.into_iter()
			.map(|(key, value)| {
				let value = match value {
					Value::Number(n) => Value::String(n.to_string()),
					Value::Bool(true) => Value::String("1".to_string()),
					Value::Bool(false) | Value::Null => Value::String(String::new()),
					other => other,
				};
				(key, value)
			})
			.collect();

		self.localized.push(LocalizedData {
			handle: handle.to_string(),
			object_name: object_name.to_string(),
			data,
		});
		true
	}

	pub fn styles(&self) -> &[Asset] {
		&self.styles
	}

	pub fn scripts(&self) -> &[Asset] {
		&self.scripts
	}

	/// Queued scripts with every queued dependency ahead of its dependents,
	/// otherwise in enqueue order. Dependencies that were never queued are
	/// ignored.
	pub fn scripts_in_load_order(&self) -> Vec<&Asset> {
		let mut ordered = Vec::with_capacity(self.scripts.len());
		let mut seen = Vec::with_capacity(self.scripts.len());
		for script in &self.scripts {
			self.visit_script(script, &mut seen, &mut ordered);
		}
		ordered
	}

	fn visit_script<'a>(
		&'a self,
		script: &'a Asset,
		seen: &mut Vec<&'a str>,
		ordered: &mut Vec<&'a Asset>,
	) {
		if seen.contains(&script.handle.as_str()) {
			return;
		}
		seen.push(&script.handle);

		for dep in &script.deps {
			match self.scripts.iter().find(|a| a.handle == *dep) {
				Some(asset) => self.visit_script(asset, seen, ordered),
				None => {
					tracing::debug!(handle = %script.handle, dep = %dep, "dependency not queued")
				}
			}
		}
		ordered.push(script);
	}

	/// Render `<link>` and `<script>` tags for the page head. Styles come
	/// first in enqueue order, then scripts in load order.
	pub fn render_tags(&self) -> String {
		let mut out = String::new();

		for style in &self.styles {
			let Some(url) = style.url() else { continue };
			let _ = writeln!(
				out,
				r#"<link rel="stylesheet" id="{}-css" href="{}" media="all" />"#,
				escape_attr(&style.handle),
				escape_attr(&url)
			);
		}

		for script in self.scripts_in_load_order() {
			for localized in self.localized.iter().filter(|l| l.handle == script.handle) {
				let _ = writeln!(
					out,
					"<script type=\"text/javascript\" id=\"{}-js-extra\">\nvar {} = {};\n</script>",
					escape_attr(&script.handle),
					localized.object_name,
					Value::Object(localized.data.clone())
				);
			}

			let Some(url) = script.url() else { continue };
			let _ = writeln!(
				out,
				r#"<script type="text/javascript" src="{}" id="{}-js"></script>"#,
				escape_attr(&url),
				escape_attr(&script.handle)
			);
		}

		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_enqueue_is_idempotent() {
		let mut queue = AssetQueue::new();

		assert!(queue.enqueue_script(Asset::new("lib").src("/lib.js")));
		assert!(!queue.enqueue_script(Asset::new("lib").src("/other.js")));
		assert_eq!(queue.scripts().len(), 1);
		assert_eq!(queue.scripts()[0].src.as_deref(), Some("/lib.js"));
	}

	#[test]
	fn test_styles_and_scripts_are_separate() {
		let mut queue = AssetQueue::new();
		queue.enqueue_style(Asset::new("chart").src("/style.css"));

		assert!(queue.is_style_enqueued("chart"));
		assert!(!queue.is_script_enqueued("chart"));
	}

	#[test]
	fn test_localize_requires_queued_script() {
		let mut queue = AssetQueue::new();
		let data = json!({"selector": ".chart"}).as_object().unwrap().clone();

		assert!(!queue.localize_script("chart", "chart_data", data.clone()));
		queue.enqueue_script(Asset::new("chart").src("/chart.js"));
		assert!(queue.localize_script("chart", "chart_data", data));
	}

	#[test]
	fn test_render_tags() {
		let mut queue = AssetQueue::new();
		queue.enqueue_style(Asset::new("chart").src("/css/style.css").version("1.0"));
		queue.enqueue_script(Asset::new("jquery"));
		queue.enqueue_script(Asset::new("chart").src("/js/chart.js").dep("jquery"));
		let data = json!({"selector": ".chart", "size": 90}).as_object().unwrap().clone();
		queue.localize_script("chart", "chart_data", data);

		let tags = queue.render_tags();

		assert_eq!(
			tags,
			concat!(
				"<link rel=\"stylesheet\" id=\"chart-css\" href=\"/css/style.css?ver=1.0\" media=\"all\" />\n",
				"<script type=\"text/javascript\" id=\"chart-js-extra\">\n",
				"var chart_data = {\"selector\":\".chart\",\"size\":\"90\"};\n",
				"</script>\n",
				"<script type=\"text/javascript\" src=\"/js/chart.js\" id=\"chart-js\"></script>\n",
			)
		);
	}
	#[test]
	fn test_scripts_load_after_their_dependencies() {
		let mut queue = AssetQueue::new();
		queue.enqueue_script(Asset::new("app").src("/app.js").dep("chart"));
		queue.enqueue_script(Asset::new("chart").src("/chart.js").dep("jquery"));
		queue.enqueue_script(Asset::new("jquery").src("/jquery.js"));
		queue.enqueue_script(Asset::new("extra").src("/extra.js").dep("missing"));

		let handles: Vec<_> = queue
			.scripts_in_load_order()
			.iter()
			.map(|a| a.handle.as_str())
			.collect();
		assert_eq!(handles, vec!["jquery", "chart", "app", "extra"]);

		let tags = queue.render_tags();
		let jquery = tags.find("/jquery.js").unwrap();
		let chart = tags.find("/chart.js").unwrap();
		let app = tags.find("/app.js").unwrap();
		assert!(jquery < chart && chart < app);
	}

	#[test]
	fn test_dependency_cycle_renders_each_script_once() {
		let mut queue = AssetQueue::new();
		queue.enqueue_script(Asset::new("a").src("/a.js").dep("b"));
		queue.enqueue_script(Asset::new("b").src("/b.js").dep("a"));

		let tags = queue.render_tags();
		assert_eq!(tags.matches("<script").count(), 2);
	}
}
