//! Validation of a submitted settings form.
//!
//! Every submitted field is checked on its own. A field that fails is
//! dropped and reported; the rest of the submission is still saved.

use crate::config::{OptionValue, OptionsRecord, Schema, Validator};
use crate::escape::strip_tags;
use crate::serialize::numeric_value;
use std::fmt;

/// A rejected settings value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
	/// Schema key of the rejected field.
	pub key: String,

	/// Human-readable reason.
	pub message: String,
}

impl fmt::Display for ValidationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}

/// Outcome of validating one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
	/// The fields that passed, ready to persist.
	pub record: OptionsRecord,

	/// One entry per rejected field, in submission order.
	pub errors: Vec<ValidationError>,
}

impl ValidationReport {
	/// Whether every submitted field passed.
	pub fn is_valid(&self) -> bool {
		self.errors.is_empty()
	}

	/// All error messages as a single settings notice, or `None` when the
	/// submission was clean.
	pub fn notice(&self) -> Option<String> {
		if self.errors.is_empty() {
			return None;
		}
		let messages: Vec<_> = self.errors.iter().map(|e| e.message.as_str()).collect();
		Some(messages.join("<br />"))
	}
}

/// Coerce a submitted string into an integer the way the settings form
/// expects: any numeric text is accepted and truncated toward zero.
fn coerce_integer(value: &str) -> Option<i64> {
	let number = numeric_value(value)?;
	match number.as_i64() {
		Some(n) => Some(n),
		None => number.as_f64().map(|f| f.trunc() as i64),
	}
}

/// Apply one field's rule to a non-empty value.
fn apply_validator(
	validator: Validator,
	key: &str,
	value: &str,
) -> Result<OptionValue, ValidationError> {
	match validator {
		Validator::Numeric => coerce_integer(value)
			.map(OptionValue::Integer)
			.ok_or_else(|| ValidationError {
				key: key.to_string(),
				message: format!("{} must be a numeric value.", key),
			}),
		Validator::Freeform => Ok(OptionValue::Text(strip_tags(value))),
	}
}

/// Validate a submitted settings form.
///
/// - Keys outside the schema are dropped.
/// - Empty values are dropped, resetting the field to its default.
/// - Numeric fields must parse as a number and are stored as integers.
/// - Freeform fields have markup stripped.
pub fn validate_submission<'a, I>(schema: &Schema, submission: I) -> ValidationReport
where
	I: IntoIterator<Item = (&'a str, &'a str)>,
{
	let mut report = ValidationReport::default();

	for (key, value) in submission {
		let Some(field) = schema.field(key) else {
			tracing::debug!(key, "dropping submitted field outside the schema");
			continue;
		};

		if value.is_empty() {
			continue;
		}

		match apply_validator(field.validator, field.key, value) {
			Ok(value) => report.record.insert(field.key, value),
			Err(error) => {
				tracing::warn!(key = field.key, value, "rejected settings value");
				report.errors.push(error);
			}
		}
	}

	report
}
