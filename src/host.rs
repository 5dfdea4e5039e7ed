use anyhow::Result;

use crate::types::{HeaderHandle, ItemHandle, Page, Slot, VisibleItem};

/// Everything the engine needs from its host: the page registry and the
/// live result surface.
///
/// Read methods are snapshots of host state; mutating methods are only
/// ever called from a processing pass, which is the sole writer of the
/// result surface. Mutators that can fail return opaque host errors; the
/// engine logs them and recovers, it never propagates them back out.
pub trait SearchHost {
	/// Full registry snapshot. Expected to be immutable while a query is
	/// being processed.
	fn pages(&self) -> Vec<Page>;

	/// All currently active result rows, in surface order.
	fn visible_items(&self) -> Vec<VisibleItem>;

	/// Number of currently active result rows.
	fn count_visible_items(&self) -> usize;

	/// Host-side visibility flag for a page, beyond [`Page::hidden`].
	fn is_explicitly_hidden(&self, page: &Page) -> bool;

	/// Clones the visual template of an existing row for an injected
	/// result. The clone starts active but unbound.
	fn clone_item_template(&mut self, template: ItemHandle) -> Result<ItemHandle>;

	/// Binds a row to a page: sets its displayed title and click
	/// behavior.
	fn bind_item_to_page(&mut self, item: ItemHandle, page: &Page) -> Result<()>;

	/// Deactivates a row without destroying it; the row stays host-owned
	/// and disappears from [`SearchHost::visible_items`].
	fn deactivate_item(&mut self, item: ItemHandle);

	/// Creates a synthetic group header showing the given plain label.
	fn create_header(&mut self, label: &str) -> Result<HeaderHandle>;

	/// Applies the final ordering of rows and headers to the surface.
	fn apply_order(&mut self, slots: &[Slot]) -> Result<()>;

	/// Destroys a row the engine injected earlier.
	fn destroy_item(&mut self, item: ItemHandle);

	/// Destroys a synthetic header created earlier.
	fn destroy_header(&mut self, header: HeaderHandle);
}

#[cfg(test)]
pub(crate) mod mock {
	use std::collections::HashSet;

	use anyhow::{Result, bail};

	use super::SearchHost;
	use crate::types::{HeaderHandle, ItemHandle, Page, Slot, VisibleItem};

	#[derive(Debug, Clone)]
	pub(crate) struct MockRow {
		pub handle: ItemHandle,
		pub title: String,
		pub active: bool,
	}

	/// Scripted host backing the unit tests: a plain registry plus a
	/// vector-based result surface.
	#[derive(Debug, Default)]
	pub(crate) struct MockHost {
		pub pages: Vec<Page>,
		pub rows: Vec<MockRow>,
		pub headers: Vec<(HeaderHandle, String)>,
		pub order: Vec<Slot>,
		pub hidden_keys: HashSet<String>,
		pub fail_clones: bool,
		pub apply_calls: usize,
		next_id: u64,
	}

	impl MockHost {
		pub(crate) fn new(pages: Vec<Page>, titles: Vec<&str>) -> Self {
			let mut host = Self {
				pages,
				..Self::default()
			};
			host.next_id = 1;
			for title in titles {
				let handle = host.mint();
				host.rows.push(MockRow {
					handle,
					title: title.to_string(),
					active: true,
				});
			}
			host
		}

		fn mint(&mut self) -> ItemHandle {
			let handle = ItemHandle(self.next_id);
			self.next_id += 1;
			handle
		}

		pub(crate) fn row(&self, handle: ItemHandle) -> Option<&MockRow> {
			self.rows.iter().find(|row| row.handle == handle)
		}

		pub(crate) fn active_titles(&self) -> Vec<String> {
			self.rows
				.iter()
				.filter(|row| row.active)
				.map(|row| row.title.clone())
				.collect()
		}

		pub(crate) fn header_labels(&self) -> Vec<String> {
			self.headers.iter().map(|(_, label)| label.clone()).collect()
		}
	}

	impl SearchHost for MockHost {
		fn pages(&self) -> Vec<Page> {
			self.pages.clone()
		}

		fn visible_items(&self) -> Vec<VisibleItem> {
			self.rows
				.iter()
				.filter(|row| row.active)
				.map(|row| VisibleItem::new(row.handle, row.title.clone()))
				.collect()
		}

		fn count_visible_items(&self) -> usize {
			self.rows.iter().filter(|row| row.active).count()
		}

		fn is_explicitly_hidden(&self, page: &Page) -> bool {
			self.hidden_keys.contains(&page.key)
		}

		fn clone_item_template(&mut self, _template: ItemHandle) -> Result<ItemHandle> {
			if self.fail_clones {
				bail!("template instantiation failed");
			}
			let handle = self.mint();
			self.rows.push(MockRow {
				handle,
				title: String::new(),
				active: true,
			});
			Ok(handle)
		}

		fn bind_item_to_page(&mut self, item: ItemHandle, page: &Page) -> Result<()> {
			match self.rows.iter_mut().find(|row| row.handle == item) {
				Some(row) => {
					row.title = page.title.clone();
					Ok(())
				}
				None => bail!("unknown item handle"),
			}
		}

		fn deactivate_item(&mut self, item: ItemHandle) {
			if let Some(row) = self.rows.iter_mut().find(|row| row.handle == item) {
				row.active = false;
			}
		}

		fn create_header(&mut self, label: &str) -> Result<HeaderHandle> {
			let handle = HeaderHandle(self.next_id);
			self.next_id += 1;
			self.headers.push((handle, label.to_string()));
			Ok(handle)
		}

		fn apply_order(&mut self, slots: &[Slot]) -> Result<()> {
			self.apply_calls += 1;
			self.order = slots.to_vec();
			Ok(())
		}

		fn destroy_item(&mut self, item: ItemHandle) {
			self.rows.retain(|row| row.handle != item);
		}

		fn destroy_header(&mut self, header: HeaderHandle) {
			self.headers.retain(|(handle, _)| *handle != header);
		}
	}
}
