use regex::Regex;

/// A global regex substitution applied to encoded text.
#[derive(Debug)]
pub struct Rewrite {
	/// The pattern to match.
	pub pattern: Regex,

	/// The replacement string, `$1`-style captures allowed.
	pub replacement: &'static str,
}

impl Rewrite {
	pub fn new(pattern: Regex, replacement: &'static str) -> Self {
		Self {
			pattern,
			replacement,
		}
	}

	/// Replace every match in the input.
	pub fn apply(&self, input: &str) -> String {
		self.pattern
			.replace_all(input, self.replacement)
			.into_owned()
	}
}

/// Apply rewrites in order, each one to the output of the previous.
pub fn apply_all(input: &str, rewrites: &[&Rewrite]) -> String {
	rewrites
		.iter()
		.fold(input.to_string(), |text, rewrite| rewrite.apply(&text))
}
