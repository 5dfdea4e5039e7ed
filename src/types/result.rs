/// Handle to one row on the host's result surface.
///
/// Handles are opaque to the engine; the host mints them and they stay
/// valid until the row is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemHandle(pub u64);

/// Handle to a synthetic group header the engine asked the host to create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeaderHandle(pub u64);

/// One active row as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleItem {
	pub handle: ItemHandle,
	/// The title currently shown in the row, independent of the bound
	/// page's canonical title.
	pub title: String,
}

impl VisibleItem {
	#[must_use]
	pub fn new(handle: ItemHandle, title: impl Into<String>) -> Self {
		Self {
			handle,
			title: title.into(),
		}
	}
}

/// One element of the final render order handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
	Header(HeaderHandle),
	Item(ItemHandle),
}

/// Relevance tier for a result; lower ranks first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchPriority {
	/// The title is exactly the query.
	ExactTitle = 0,
	/// The title starts with the query as a whole word.
	TitleStartsWith = 1,
	/// The query occurs as a whole word somewhere in the title.
	TitleContains = 2,
	/// The query only occurs inside another word, e.g. `corn` in
	/// `corner`. Deliberately demoted below every whole-word tier.
	DescriptionContains = 3,
}

/// A scored, categorized result; rebuilt from scratch on every pass.
#[derive(Debug, Clone)]
pub struct ScoredResult {
	pub handle: ItemHandle,
	pub page_key: String,
	/// Markup-stripped canonical page title, used for ordering.
	pub title: String,
	pub priority: MatchPriority,
	pub category: String,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn priorities_rank_exact_above_everything() {
		assert!(MatchPriority::ExactTitle < MatchPriority::TitleStartsWith);
		assert!(MatchPriority::TitleStartsWith < MatchPriority::TitleContains);
		assert!(MatchPriority::TitleContains < MatchPriority::DescriptionContains);
	}
}
