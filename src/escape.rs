//! Text escaping for embedding values into generated markup.

use regex::Regex;
use std::sync::LazyLock;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[A-Za-z][A-Za-z0-9]*);")
		.expect("entity pattern is valid")
});

static MARKUP: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"(?s)<!--.*?(?:-->|$)|<[^\s>][^>]*(?:>|$)")
		.expect("markup pattern is valid")
});

/// Escape a value for use inside a double-quoted HTML attribute.
///
/// `&`, `<`, `>`, `"` and `'` become entities. Ampersands that already start
/// a valid entity are left alone so values are never double encoded.
pub fn escape_attr(input: &str) -> String {
	let mut out = String::with_capacity(input.len());
	for (i, c) in input.char_indices() {
		match c {
			'&' if ENTITY.is_match(&input[i..]) => out.push('&'),
			'&' => out.push_str("&amp;"),
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#039;"),
			_ => out.push(c),
		}
	}
	out
}

/// Escape a value for use as HTML text content.
pub fn escape_html(input: &str) -> String {
	escape_attr(input)
}

/// Remove markup tags and comments. An unterminated tag swallows the rest
/// of the input; a `<` followed by whitespace is plain text.
pub fn strip_tags(input: &str) -> String {
	MARKUP.replace_all(input, "").into_owned()
}
