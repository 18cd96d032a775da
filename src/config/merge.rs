use crate::config::schema::Schema;
use crate::config::store::OptionsRecord;
use crate::escape::escape_attr;

/// Shortcode attributes that never take part in the merge. They are
/// rendered as direct template parameters instead.
pub const MERGE_DENYLIST: [&str; 2] = ["percent", "scalecolor"];

/// Per-invocation attribute values, keyed by shortcode attribute name, in
/// the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideRecord {
	entries: Vec<(String, String)>,
}

impl OverrideRecord {
	pub fn new() -> Self {
		Self::default()
	}

	/// Record an attribute. Names are case-insensitive; a repeated name
	/// replaces the earlier value.
	pub fn insert(&mut self, attribute: &str, value: impl Into<String>) {
		let attribute = attribute.to_ascii_lowercase();
		let value = value.into();
		match self.entries.iter_mut().find(|(a, _)| *a == attribute) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((attribute, value)),
		}
	}

	pub fn get(&self, attribute: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(a, _)| a.eq_ignore_ascii_case(attribute))
			.map(|(_, v)| v.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(a, v)| (a.as_str(), v.as_str()))
	}
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for OverrideRecord {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut record = OverrideRecord::new();
		for (attribute, value) in iter {
			record.insert(attribute.as_ref(), value);
		}
		record
	}
}

/// Final chart configuration for one render: schema key to escaped value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
	entries: Vec<(String, String)>,
}

impl ResolvedConfig {
	pub fn new() -> Self {
		Self::default()
	}

	fn set(&mut self, key: &str, value: String) {
		match self.entries.iter_mut().find(|(k, _)| k == key) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((key.to_string(), value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Whether a stored value means "not set" and must be left out of the merge.
fn is_unset(value: &str) -> bool {
	value.is_empty() || value == "false"
}

/// Shortcode attributes use loose truthiness, so `"0"` is unset as well.
fn is_falsy_attribute(value: &str) -> bool {
	is_unset(value) || value == "0"
}

fn is_denylisted(attribute: &str) -> bool {
	MERGE_DENYLIST
		.iter()
		.any(|denied| denied.eq_ignore_ascii_case(attribute))
}

/// Merge stored options and per-invocation overrides into one config.
///
/// Layer order is stored options first, then overrides (last wins).
/// Overridden keys keep their stored position, new keys are appended.
/// Unknown and denylisted attributes are skipped; field defaults are left
/// to the charting library, so they never appear here.
pub fn merge_config(
	schema: &Schema,
	stored: &OptionsRecord,
	overrides: &OverrideRecord,
) -> ResolvedConfig {
	let mut resolved = ResolvedConfig::new();

	for (key, value) in stored.iter() {
		let Some(field) = schema.field(key) else {
			tracing::debug!(key, "ignoring stored option outside the schema");
			continue;
		};
		if is_denylisted(&field.attribute()) {
			continue;
		}

		let value = value.to_string();
		if is_unset(&value) {
			continue;
		}
		resolved.set(field.key, escape_attr(&value));
	}

	for (attribute, value) in overrides.iter() {
		if is_denylisted(attribute) || is_falsy_attribute(value) {
			continue;
		}

		match schema.field_by_attribute(attribute) {
			Some(field) => resolved.set(field.key, escape_attr(value)),
			None => tracing::debug!(attribute, "ignoring unknown shortcode attribute"),
		}
	}

	resolved
}
