use indexmap::IndexSet;

use super::group::RenderPlan;
use crate::error::EngineError;
use crate::host::SearchHost;
use crate::types::{HeaderHandle, ItemHandle, Slot};

/// Destroys every element the engine added to the surface in earlier
/// passes: injected rows and synthetic headers.
///
/// Runs before every fresh pass and on query-clear, so rebuilds always
/// start from a surface containing only host-owned elements.
pub(crate) fn teardown<H: SearchHost>(
	host: &mut H,
	injected: &mut IndexSet<ItemHandle>,
	headers: &mut IndexSet<HeaderHandle>,
) {
	for item in injected.drain(..) {
		host.destroy_item(item);
	}
	for header in headers.drain(..) {
		host.destroy_header(header);
	}
}

/// Writes the new order to the surface, interleaving freshly created
/// headers at section boundaries.
///
/// Headers are recorded in `headers` as they are created, so a failure
/// partway through leaves nothing untracked: whatever did attach is torn
/// down at the start of the next pass. No rollback beyond that.
pub(crate) fn commit<H: SearchHost>(
	host: &mut H,
	plan: &RenderPlan,
	headers: &mut IndexSet<HeaderHandle>,
) -> Result<(), EngineError> {
	let mut slots = Vec::new();
	for section in &plan.sections {
		let header = host
			.create_header(&section.label)
			.map_err(EngineError::Commit)?;
		headers.insert(header);
		slots.push(Slot::Header(header));
		slots.extend(section.items.iter().copied().map(Slot::Item));
	}

	host.apply_order(&slots).map_err(EngineError::Commit)
}
