use std::collections::HashSet;

use indexmap::IndexSet;
use log::{debug, warn};

use super::hide::should_hide;
use super::resolve::{ActiveResult, RegistryIndex};
use crate::error::EngineError;
use crate::host::SearchHost;
use crate::types::{ItemHandle, Page};

/// Pages the external search should have returned for `query` but did
/// not: exact title matches first, then whole-word matches, in registry
/// order, minus everything already on the surface.
///
/// Every candidate is re-checked against the hide rules; the cached
/// index predates host flags that changed since it was built.
pub(crate) fn find_missing<'a, H: SearchHost>(
	host: &H,
	index: &'a RegistryIndex,
	query: &str,
	actives: &[ActiveResult],
	markers: &[String],
) -> Vec<&'a Page> {
	let existing: HashSet<&str> = actives
		.iter()
		.map(|active| active.page.key.as_str())
		.collect();

	let mut seen: HashSet<&str> = HashSet::new();
	let mut missing = Vec::new();
	for page in index.exact_matches(query).chain(index.word_matches(query)) {
		if existing.contains(page.key.as_str())
			|| should_hide(host, page, markers)
			|| !seen.insert(page.key.as_str())
		{
			continue;
		}
		missing.push(page);
	}
	missing
}

/// Synthesizes result rows for omitted matches by cloning the visual
/// template of an existing row and binding the clone to the page.
///
/// Needs at least one resolved row to clone from; with none the injector
/// skips and the pass renders what it has. Every successful injection is
/// recorded in `injected` so the next pass can tear it down.
pub(crate) fn inject_missing<H: SearchHost>(
	host: &mut H,
	index: &RegistryIndex,
	query: &str,
	actives: &mut Vec<ActiveResult>,
	injected: &mut IndexSet<ItemHandle>,
	markers: &[String],
) {
	let missing = find_missing(host, index, query, actives, markers);
	if missing.is_empty() {
		return;
	}

	let Some(template) = actives.first().map(|active| active.handle) else {
		debug!(
			"{} omitted match(es) for {query:?} but no row to clone; skipping injection",
			missing.len()
		);
		return;
	};

	for page in missing {
		match synthesize(host, template, page) {
			Ok(handle) => {
				injected.insert(handle);
				actives.push(ActiveResult {
					handle,
					page: page.clone(),
					display_title: page.title.clone(),
				});
			}
			Err(error) => warn!("{error}"),
		}
	}
}

fn synthesize<H: SearchHost>(
	host: &mut H,
	template: ItemHandle,
	page: &Page,
) -> Result<ItemHandle, EngineError> {
	let injection_error = |source| EngineError::Injection {
		key: page.key.clone(),
		source,
	};

	let handle = host.clone_item_template(template).map_err(injection_error)?;
	if let Err(source) = host.bind_item_to_page(handle, page) {
		// Do not leave an unbound clone on the surface.
		host.destroy_item(handle);
		return Err(injection_error(source));
	}
	Ok(handle)
}
