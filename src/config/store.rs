use crate::error::{EasyPieError, Result};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// A persisted option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
	Integer(i64),
	Text(String),
}

impl fmt::Display for OptionValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OptionValue::Integer(n) => write!(f, "{}", n),
			OptionValue::Text(s) => f.write_str(s),
		}
	}
}

impl From<i64> for OptionValue {
	fn from(value: i64) -> Self {
		OptionValue::Integer(value)
	}
}

impl From<String> for OptionValue {
	fn from(value: String) -> Self {
		OptionValue::Text(value)
	}
}

impl From<&str> for OptionValue {
	fn from(value: &str) -> Self {
		OptionValue::Text(value.to_string())
	}
}

/// Site-wide chart defaults, keyed by schema key, in insertion order.
///
/// (De)serializes as a plain table, keeping the document's key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionsRecord {
	entries: Vec<(String, OptionValue)>,
}

impl OptionsRecord {
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or replace a value. A replaced key keeps its position.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((key, value)),
		}
	}

	pub fn get(&self, key: &str) -> Option<&OptionValue> {
		self.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Serialize for OptionsRecord {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (key, value) in &self.entries {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

struct OptionsRecordVisitor;

impl<'de> Visitor<'de> for OptionsRecordVisitor {
	type Value = OptionsRecord;

	fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("a table of string or integer options")
	}

	fn visit_map<A>(self, mut access: A) -> std::result::Result<OptionsRecord, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut record = OptionsRecord::new();
		while let Some((key, value)) = access.next_entry::<String, OptionValue>()? {
			record.insert(key, value);
		}
		Ok(record)
	}
}

impl<'de> Deserialize<'de> for OptionsRecord {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		deserializer.deserialize_map(OptionsRecordVisitor)
	}
}

/// Get the default options store path: `<config dir>/<domain>/options.toml`.
pub fn default_store_path(domain: &str) -> Result<PathBuf> {
	let config_dir = dirs::config_dir().ok_or(EasyPieError::ConfigDirectoryNotFound)?;
	Ok(config_dir.join(domain).join("options.toml"))
}

/// Load the options stored under `domain` from the given file.
///
/// A missing file, or a file without a `[domain]` table, is an empty record.
pub fn load_options(path: &Path, domain: &str) -> Result<OptionsRecord> {
	if !path.exists() {
		return Ok(OptionsRecord::new());
	}

	let content = std::fs::read_to_string(path).map_err(|source| EasyPieError::StoreReadError {
		path: path.to_path_buf(),
		source,
	})?;

	parse_options_str(&content, path, domain)
}

/// Parse an options store from a string (useful for testing).
pub fn parse_options_str(content: &str, path: &Path, domain: &str) -> Result<OptionsRecord> {
	let parse_error = |source| EasyPieError::StoreParseError {
		path: path.to_path_buf(),
		source,
	};

	let mut table: toml::Table = toml::from_str(content).map_err(parse_error)?;
	match table.remove(domain) {
		Some(options) => options.try_into().map_err(parse_error),
		None => Ok(OptionsRecord::new()),
	}
}

/// Encode a record as an options store document.
pub fn options_to_string(record: &OptionsRecord, path: &Path, domain: &str) -> Result<String> {
	let encode_error = |source| EasyPieError::StoreEncodeError {
		path: path.to_path_buf(),
		source,
	};

	let mut table = toml::Table::new();
	table.insert(
		domain.to_string(),
		toml::Value::try_from(record).map_err(encode_error)?,
	);

	toml::to_string(&table).map_err(encode_error)
}

/// Persist the record under `domain`, replacing the whole file.
pub fn save_options(path: &Path, domain: &str, record: &OptionsRecord) -> Result<()> {
	let content = options_to_string(record, path, domain)?;

	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		std::fs::create_dir_all(parent).map_err(|source| EasyPieError::StoreWriteError {
			path: path.to_path_buf(),
			source,
		})?;
	}

	std::fs::write(path, content).map_err(|source| EasyPieError::StoreWriteError {
		path: path.to_path_buf(),
		source,
	})
}
