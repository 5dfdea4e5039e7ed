//! Title normalization and whole-word matching helpers.
//!
//! Page titles may embed inline markup tags (`<color=...>`, `<b>`, ...)
//! that must never participate in matching or ordering.

/// Removes inline markup tags from a title.
///
/// A tag is a `<` followed by at least one character and a closing `>`.
/// An unterminated `<` is kept verbatim rather than swallowing the rest
/// of the string.
pub fn strip_markup(title: &str) -> String {
	if !title.contains('<') {
		return title.to_string();
	}

	let mut cleaned = String::with_capacity(title.len());
	let mut rest = title;
	while let Some(open) = rest.find('<') {
		cleaned.push_str(&rest[..open]);
		let tail = &rest[open..];
		match tail.find('>') {
			Some(close) if close > 1 => rest = &tail[close + 1..],
			_ => {
				cleaned.push('<');
				rest = &tail[1..];
			}
		}
	}
	cleaned.push_str(rest);
	cleaned
}

/// Strips markup, trims, and lowercases a title or query for comparison.
pub fn normalize(text: &str) -> String {
	strip_markup(text).trim().to_lowercase()
}

/// Whether `needle` occurs in `haystack` bounded by non-alphanumeric
/// characters or string edges on both sides.
///
/// Both inputs are expected to be normalized already.
pub fn contains_whole_word(haystack: &str, needle: &str) -> bool {
	if needle.is_empty() {
		return false;
	}
	for (start, _) in haystack.match_indices(needle) {
		let end = start + needle.len();
		if boundary_before(haystack, start) && boundary_after(haystack, end) {
			return true;
		}
	}
	false
}

/// Whether `title` starts with `needle` followed by a word boundary.
pub fn starts_with_word(title: &str, needle: &str) -> bool {
	!needle.is_empty() && title.starts_with(needle) && boundary_after(title, needle.len())
}

/// Splits a normalized title into indexable words.
///
/// Single characters are skipped; they produce far too many incidental
/// matches to be useful as whole words.
pub fn title_words(title: &str) -> impl Iterator<Item = &str> {
	title
		.split(|c: char| !c.is_alphanumeric())
		.filter(|word| word.chars().count() >= 2)
}

fn boundary_before(text: &str, index: usize) -> bool {
	text[..index]
		.chars()
		.next_back()
		.is_none_or(|c| !c.is_alphanumeric())
}

fn boundary_after(text: &str, index: usize) -> bool {
	text[index..].chars().next().is_none_or(|c| !c.is_alphanumeric())
}
