use crate::host::SearchHost;
use crate::text::normalize;
use crate::types::Page;

/// Whether a page's key or title matches one of the configured debris
/// markers (ruptured/burnt/wreckage variants by default).
pub(crate) fn is_debris(page: &Page, markers: &[String]) -> bool {
	if markers.is_empty() {
		return false;
	}
	let key = page.key.to_lowercase();
	let title = normalize(&page.title);
	markers.iter().any(|marker| {
		let marker = marker.to_lowercase();
		key.contains(&marker) || title.contains(&marker)
	})
}

/// Whether a page must never surface in search results.
///
/// Checks the page's own flag, the host-side visibility lookup, and the
/// debris heuristics. Hidden pages are also excluded from indexing and
/// injection, so a hidden page can never reappear through either path.
pub(crate) fn should_hide<H: SearchHost>(host: &H, page: &Page, markers: &[String]) -> bool {
	page.hidden || host.is_explicitly_hidden(page) || is_debris(page, markers)
}
