//! Serialization of a resolved chart config into the object literal passed
//! to `jQuery.fn.easyPieChart`.
//!
//! The config is first encoded as standard JSON, then two text rewrites turn
//! it into the literal the charting library is written against:
//! - `"key":` becomes `key:`
//! - a quoted inline object such as `"{duration: 1000, enabled: true}"`
//!   loses its quotes so it is passed as a live object

pub mod rewriter;

pub use rewriter::{Rewrite, apply_all};

use crate::config::ResolvedConfig;
use regex::Regex;
use serde_json::{Map, Number, Value};
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?\s*$")
		.expect("numeric pattern is valid")
});

static UNQUOTE_KEYS: LazyLock<Rewrite> = LazyLock::new(|| {
	Rewrite::new(
		Regex::new(r#""([^"]+)"\s*:\s*"#).expect("key pattern is valid"),
		"${1}:",
	)
});

static UNQUOTE_OBJECTS: LazyLock<Rewrite> = LazyLock::new(|| {
	Rewrite::new(
		Regex::new(r#""(\{[\w\s:,]+\})""#).expect("inline object pattern is valid"),
		"${1}",
	)
});

/// Encode a value as a JSON number when it reads as one.
///
/// Integers that fit in an `i64` stay integers; anything else numeric is a
/// float. Non-finite results are kept as strings.
pub fn numeric_value(value: &str) -> Option<Number> {
	if !NUMERIC.is_match(value) {
		return None;
	}

	let trimmed = value.trim();
	let is_integer = !trimmed.contains(['.', 'e', 'E']);
	if is_integer && let Ok(n) = trimmed.parse::<i64>() {
		return Some(Number::from(n));
	}

	trimmed.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Encode the config as a compact JSON object. Always an object, even when
/// empty.
pub fn to_json(config: &ResolvedConfig) -> String {
	let mut object = Map::new();
	for (key, value) in config.iter() {
		let value = match numeric_value(value) {
			Some(n) => Value::Number(n),
			None => Value::String(value.to_string()),
		};
		object.insert(key.to_string(), value);
	}

	Value::Object(object).to_string()
}

/// Serialize the config into the single-line object literal embedded in
/// the chart initialization script.
pub fn serialize_config(config: &ResolvedConfig) -> String {
	let json = to_json(config);
	apply_all(&json, &[&*UNQUOTE_KEYS, &*UNQUOTE_OBJECTS])
}
