use crate::config::OverrideRecord;
use crate::serialize::numeric_value;

/// Typed view over the attributes of one chart shortcode.
///
/// `percent`, `label` and `scalecolor` are template parameters; everything
/// else is left in `overrides` for the config merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartAttributes {
	/// Value shown by the chart. Missing renders as an empty chart.
	pub percent: Option<String>,

	/// Caption rendered under the chart.
	pub label: Option<String>,

	/// Scale line color, rendered as a data attribute.
	pub scale_color: Option<String>,

	/// All attributes as written, for the config merge.
	pub overrides: OverrideRecord,
}

impl ChartAttributes {
	pub fn from_overrides(overrides: OverrideRecord) -> Self {
		let lookup = |name: &str| {
			overrides
				.get(name)
				.filter(|v| !v.is_empty())
				.map(str::to_string)
		};

		let percent = lookup("percent");
		let label = lookup("label");
		let scale_color = lookup("scalecolor");

		Self {
			percent,
			label,
			scale_color,
			overrides,
		}
	}

	/// Numeric percent for the chart's data attribute. Missing or
	/// non-numeric values count as zero.
	pub fn percent_value(&self) -> f64 {
		self.percent
			.as_deref()
			.and_then(numeric_value)
			.and_then(|n| n.as_f64())
			.unwrap_or(0.0)
	}
}

/// Format a number the way it is written in markup: integers without a
/// fractional part, everything else in shortest form.
pub fn format_number(value: f64) -> String {
	if value.fract() == 0.0 && value.abs() < 1e15 {
		format!("{}", value as i64)
	} else {
		format!("{}", value)
	}
}
