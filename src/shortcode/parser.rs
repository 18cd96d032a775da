use crate::config::OverrideRecord;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r#"([\w-]+)\s*=\s*"([^"]*)"(?:\s|$)|([\w-]+)\s*=\s*'([^']*)'(?:\s|$)|([\w-]+)\s*=\s*([^\s'"]+)(?:\s|$)|"[^"]*"(?:\s|$)|'[^']*'(?:\s|$)|\S+(?:\s|$)"#,
	)
	.expect("attribute pattern is valid")
});

/// Build the pattern matching `[tag ...]`, `[tag .../]` and the escaped
/// form `[[tag ...]]`.
fn shortcode_regex(tag: &str) -> Regex {
	let pattern = format!(
		r"\[(\[?)({})(\s[^\]]*?)?(/)?\](\]?)",
		regex::escape(tag)
	);
	Regex::new(&pattern).expect("escaped tag always forms a valid pattern")
}

/// Parse the attribute text of a shortcode, e.g. ` percent="54" size=80`.
///
/// Values may be double-quoted, single-quoted or bare. Names are
/// lowercased. Positional values without a name are ignored.
pub fn parse_attributes(text: &str) -> OverrideRecord {
	let mut record = OverrideRecord::new();

	for caps in ATTRIBUTE.captures_iter(text) {
		let pair = [(1, 2), (3, 4), (5, 6)]
			.into_iter()
			.find_map(|(name, value)| Some((caps.get(name)?, caps.get(value)?)));

		match pair {
			Some((name, value)) => record.insert(name.as_str(), value.as_str()),
			None => tracing::debug!(token = &caps[0], "ignoring positional shortcode attribute"),
		}
	}

	record
}

/// Replace every `[tag ...]` in the content with the output of `render`.
///
/// `[[tag ...]]` is an escape: it is emitted as the literal `[tag ...]`.
pub fn replace_shortcodes<F>(content: &str, tag: &str, mut render: F) -> String
where
	F: FnMut(&OverrideRecord) -> String,
{
	let regex = shortcode_regex(tag);

	regex
		.replace_all(content, |caps: &Captures| {
			let whole = &caps[0];
			let open = &caps[1];
			let close = &caps[5];

			if open == "[" && close == "]" {
				return whole[1..whole.len() - 1].to_string();
			}

			let attributes = parse_attributes(caps.get(3).map_or("", |m| m.as_str()));
			format!("{}{}{}", open, render(&attributes), close)
		})
		.into_owned()
}
