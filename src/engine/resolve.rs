use std::collections::HashMap;

use log::debug;

use super::hide::should_hide;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::host::SearchHost;
use crate::text::{normalize, title_words};
use crate::types::{ItemHandle, Page, VisibleItem};

/// Lookup structures over the non-hidden part of the page registry.
///
/// Built lazily on the first pass and kept until [`crate::Engine::reset`];
/// the registry is expected to be immutable while queries run.
#[derive(Debug)]
pub(crate) struct RegistryIndex {
	pages: Vec<Page>,
	/// Normalized title → page indices, registry order preserved.
	by_title: HashMap<String, Vec<usize>>,
	/// Title word → page indices, for whole-word injection lookups.
	by_word: HashMap<String, Vec<usize>>,
}

impl RegistryIndex {
	pub(crate) fn build<H: SearchHost>(host: &H, config: &EngineConfig) -> Self {
		let mut pages = Vec::new();
		let mut by_title: HashMap<String, Vec<usize>> = HashMap::new();
		let mut by_word: HashMap<String, Vec<usize>> = HashMap::new();

		for page in host.pages() {
			if should_hide(host, &page, &config.debris_markers) {
				continue;
			}
			let title = normalize(&page.title);
			if title.is_empty() {
				continue;
			}

			let id = pages.len();
			by_title.entry(title.clone()).or_default().push(id);
			for word in title_words(&title) {
				let ids = by_word.entry(word.to_string()).or_default();
				// Pages are processed one at a time, so a repeated word
				// within one title shows up as an adjacent duplicate.
				if ids.last() != Some(&id) {
					ids.push(id);
				}
			}
			pages.push(page);
		}

		debug!(
			"built registry index: {} pages, {} titles, {} words",
			pages.len(),
			by_title.len(),
			by_word.len()
		);

		Self {
			pages,
			by_title,
			by_word,
		}
	}

	/// First page whose normalized title equals `title`, in registry
	/// iteration order. Registry titles are expected unique; duplicates
	/// resolve to the first.
	pub(crate) fn page_by_title(&self, title: &str) -> Option<&Page> {
		let ids = self.by_title.get(title)?;
		ids.first().map(|&id| &self.pages[id])
	}

	/// Pages whose whole normalized title equals the query.
	pub(crate) fn exact_matches(&self, query: &str) -> impl Iterator<Item = &Page> {
		self.by_title
			.get(query)
			.into_iter()
			.flatten()
			.map(|&id| &self.pages[id])
	}

	/// Pages containing the query as a whole title word.
	pub(crate) fn word_matches(&self, query: &str) -> impl Iterator<Item = &Page> {
		self.by_word
			.get(query)
			.into_iter()
			.flatten()
			.map(|&id| &self.pages[id])
	}
}

/// A surface row successfully mapped back to a registry page.
#[derive(Debug, Clone)]
pub(crate) struct ActiveResult {
	pub handle: ItemHandle,
	pub page: Page,
	/// The title the row actually displays, which may legitimately
	/// differ from the page's canonical title.
	pub display_title: String,
}

/// Outcome of mapping the visible rows back to registry pages.
#[derive(Debug, Default)]
pub(crate) struct Resolution {
	pub actives: Vec<ActiveResult>,
	/// Rows with no matching page. An unresolved title cannot be
	/// trusted for ranking or category lookup, so these are hidden.
	pub orphans: Vec<ItemHandle>,
}

/// Maps each visible row to a page by markup-stripped, case-insensitive
/// title equality.
pub(crate) fn resolve_items(items: Vec<VisibleItem>, index: &RegistryIndex) -> Resolution {
	let mut resolution = Resolution::default();

	for item in items {
		let title = normalize(&item.title);
		match index.page_by_title(&title) {
			Some(page) => resolution.actives.push(ActiveResult {
				handle: item.handle,
				page: page.clone(),
				display_title: item.title,
			}),
			None => {
				let error = EngineError::UnresolvedItem { title: item.title };
				debug!("hiding orphan result: {error}");
				resolution.orphans.push(item.handle);
			}
		}
	}

	resolution
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::host::mock::MockHost;

	fn index(pages: Vec<Page>) -> RegistryIndex {
		let host = MockHost::new(pages, Vec::new());
		RegistryIndex::build(&host, &EngineConfig::default())
	}

	#[test]
	fn resolves_by_cleaned_case_insensitive_title() {
		let index = index(vec![Page::new("A", "<color=orange>Corn</color>")]);
		let items = vec![VisibleItem::new(ItemHandle(1), "  CORN ")];

		let resolution = resolve_items(items, &index);
		assert_eq!(resolution.actives.len(), 1);
		assert_eq!(resolution.actives[0].page.key, "A");
		assert!(resolution.orphans.is_empty());
	}

	#[test]
	fn unmatched_rows_become_orphans() {
		let index = index(vec![Page::new("A", "Corn")]);
		let items = vec![
			VisibleItem::new(ItemHandle(1), "Corn"),
			VisibleItem::new(ItemHandle(2), "Mystery Debris"),
		];

		let resolution = resolve_items(items, &index);
		assert_eq!(resolution.actives.len(), 1);
		assert_eq!(resolution.orphans, vec![ItemHandle(2)]);
	}

	#[test]
	fn duplicate_titles_resolve_to_the_first_registry_entry() {
		let index = index(vec![Page::new("A", "Corn"), Page::new("B", "Corn")]);
		let items = vec![VisibleItem::new(ItemHandle(1), "corn")];

		let resolution = resolve_items(items, &index);
		assert_eq!(resolution.actives[0].page.key, "A");
	}

	#[test]
	fn hidden_and_debris_pages_are_not_indexed() {
		let index = index(vec![
			Page::new("A", "Corn").with_hidden(true),
			Page::new("B", "Burnt Corn"),
			Page::new("C", "Popped Corn"),
		]);

		assert!(index.page_by_title("corn").is_none());
		assert!(index.page_by_title("burnt corn").is_none());
		assert!(index.page_by_title("popped corn").is_some());
	}

	#[test]
	fn word_matches_find_whole_title_words_only() {
		let index = index(vec![
			Page::new("A", "Popped Corn"),
			Page::new("B", "Corner"),
			Page::new("C", "Corn-Fed Chicken"),
		]);

		let keys: Vec<_> = index.word_matches("corn").map(|p| p.key.as_str()).collect();
		assert_eq!(keys, vec!["A", "C"]);
	}
}
