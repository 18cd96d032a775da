/// Identity of the plugin: used for the options store table, form field
/// names, asset handles and the JavaScript selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginInfo {
	/// Unique identifier used by the options store and selector attributes.
	pub domain: &'static str,

	/// User friendly plugin name.
	pub name: &'static str,

	/// Current version of the plugin.
	pub version: &'static str,

	/// Version of the bundled jQuery charting library.
	pub library_version: &'static str,
}

impl Default for PluginInfo {
	fn default() -> Self {
		Self {
			domain: "wp-easypiechart",
			name: "WP Easy Pie Chart",
			version: "1.0",
			library_version: "2.1.7",
		}
	}
}

/// Coercion rule applied to a submitted settings value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validator {
	/// Must parse as a number; stored as an integer.
	Numeric,

	/// Any text, with markup tags stripped.
	#[default]
	Freeform,
}

/// Presentation hint for the settings form input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputType {
	#[default]
	Text,
	Number,
	Color,
}

impl InputType {
	/// Value of the `type` attribute on the rendered `<input>`.
	pub fn as_str(&self) -> &'static str {
		match self {
			InputType::Text => "text",
			InputType::Number => "number",
			InputType::Color => "color",
		}
	}
}

/// One configurable chart option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
	/// Option name as understood by the charting library, e.g. `barColor`.
	pub key: &'static str,

	/// Help text shown under the settings input.
	pub description: &'static str,

	pub validator: Validator,

	/// Library default, shown as the input placeholder.
	pub placeholder: &'static str,

	pub input_type: InputType,
}

impl FieldSpec {
	const fn new(key: &'static str, description: &'static str, placeholder: &'static str) -> Self {
		Self {
			key,
			description,
			validator: Validator::Freeform,
			placeholder,
			input_type: InputType::Text,
		}
	}

	const fn numeric(mut self) -> Self {
		self.validator = Validator::Numeric;
		self
	}

	/// Shortcode attribute name for this field (the key lowercased).
	pub fn attribute(&self) -> String {
		self.key.to_ascii_lowercase()
	}
}

const FIELDS: [FieldSpec; 10] = [
	FieldSpec::new(
		"barColor",
		"The color of the bar, or false to disable rendering.",
		"#ef1e25",
	),
	FieldSpec::new(
		"trackColor",
		"The color of the track, or false to disable rendering.",
		"#f2f2f2",
	),
	FieldSpec::new(
		"scaleColor",
		"The color of the scale lines, or false to disable rendering.",
		"#dfe0d0",
	),
	FieldSpec::new(
		"scaleLength",
		"Length of the scale lines (reduces the radius of the chart).",
		"5",
	)
	.numeric(),
	FieldSpec::new(
		"lineCap",
		"Defines how the ending of the bar line looks like. Possible values are: butt, round and square.",
		"round",
	),
	FieldSpec::new("lineWidth", "Width of the chart line in px.", "3").numeric(),
	FieldSpec::new(
		"size",
		"Size of the pie chart in px. It will always be a square.",
		"110",
	)
	.numeric(),
	FieldSpec::new("rotate", "Rotation of the complete chart in degrees.", "0").numeric(),
	FieldSpec::new(
		"animate",
		"Object with time in milliseconds and boolean for an animation of the bar growing, or false to deactivate animations.",
		"{duration: 1000, enabled: true}",
	),
	FieldSpec::new(
		"easing",
		"String with the name of a jQuery easing function.",
		"defaultEasing",
	),
];

/// The full, ordered set of configurable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
	fields: Vec<FieldSpec>,
}

impl Default for Schema {
	fn default() -> Self {
		Self {
			fields: FIELDS.to_vec(),
		}
	}
}

impl Schema {
	/// Build a schema from an explicit field list.
	pub fn new(fields: Vec<FieldSpec>) -> Self {
		Self { fields }
	}

	pub fn fields(&self) -> &[FieldSpec] {
		&self.fields
	}

	/// Look up a field by its schema key (case-sensitive).
	pub fn field(&self, key: &str) -> Option<&FieldSpec> {
		self.fields.iter().find(|f| f.key == key)
	}

	/// Look up a field by its shortcode attribute name (case-insensitive).
	pub fn field_by_attribute(&self, attribute: &str) -> Option<&FieldSpec> {
		self.fields
			.iter()
			.find(|f| f.key.eq_ignore_ascii_case(attribute))
	}
}
