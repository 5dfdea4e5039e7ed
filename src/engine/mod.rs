mod commit;
mod group;
mod hide;
mod inject;
mod resolve;
mod schedule;
mod score;

pub use schedule::QueryTrigger;

use std::time::Instant;

use indexmap::IndexSet;
use log::{debug, error};

use crate::config::EngineConfig;
use crate::host::SearchHost;
use crate::text::normalize;
use crate::types::{HeaderHandle, ItemHandle};
use resolve::RegistryIndex;
use schedule::Stabilizer;

/// Everything a pass leaves behind, owned by the engine instance rather
/// than ambient statics so [`Engine::reset`] can drop it wholesale.
#[derive(Debug, Default)]
struct ProcessingState {
	last_query: Option<String>,
	/// Host-owned visible count at the last pass, i.e. the stabilized
	/// count minus rows this engine injected. Injections inflate later
	/// raw counts, so the guard compares net counts.
	last_count: Option<usize>,
	injected: IndexSet<ItemHandle>,
	headers: IndexSet<HeaderHandle>,
}

/// Re-ranks and re-groups the host's search results.
///
/// The host forwards query events to [`Engine::on_query_changed`] /
/// [`Engine::on_query_cleared`] and drives [`Engine::tick`] from its own
/// cooperative loop. Once the debounce elapses and the surface count
/// stabilizes, a pass runs: resolve rows to pages, drop debris and
/// orphans, inject omitted exact/whole-word matches, score, group, and
/// commit the new order. Failures are logged and contained; no call here
/// returns an error to the host.
pub struct Engine {
	config: EngineConfig,
	state: ProcessingState,
	stabilizer: Stabilizer,
	index: Option<RegistryIndex>,
}

impl Engine {
	#[must_use]
	pub fn new(config: EngineConfig) -> Self {
		Self {
			config,
			state: ProcessingState::default(),
			stabilizer: Stabilizer::new(),
			index: None,
		}
	}

	/// Schedules processing for a new query, replacing any pending run.
	///
	/// An empty query behaves like [`Engine::on_query_cleared`].
	/// Keystroke-triggered queries below the configured minimum length
	/// are ignored; they churn too much while the user is still typing.
	pub fn on_query_changed<H: SearchHost>(
		&mut self,
		host: &mut H,
		query: &str,
		trigger: QueryTrigger,
		now: Instant,
	) {
		let trimmed = query.trim();
		if trimmed.is_empty() {
			self.on_query_cleared(host);
			return;
		}
		if trigger == QueryTrigger::Keystroke
			&& trimmed.chars().count() < self.config.min_keystroke_len
		{
			return;
		}
		self.stabilizer.schedule(trimmed, trigger, &self.config, now);
	}

	/// Tears down injected rows and headers immediately and forgets the
	/// last processed query.
	pub fn on_query_cleared<H: SearchHost>(&mut self, host: &mut H) {
		self.stabilizer.cancel();
		commit::teardown(host, &mut self.state.injected, &mut self.state.headers);
		self.state.last_query = None;
		self.state.last_count = None;
	}

	/// Full reset for hot-reload scenarios: clears processing state and
	/// drops the registry index so it rebuilds on the next pass.
	pub fn reset<H: SearchHost>(&mut self, host: &mut H) {
		self.on_query_cleared(host);
		self.index = None;
	}

	/// Whether a debounce or stabilization task is currently pending.
	#[must_use]
	pub fn has_pending_work(&self) -> bool {
		!self.stabilizer.is_idle()
	}

	/// Advances the scheduler and runs a processing pass when the
	/// result surface has stabilized.
	///
	/// Call this from the host's frame loop or timer; between query
	/// events it is a cheap no-op.
	pub fn tick<H: SearchHost>(&mut self, host: &mut H, now: Instant) {
		let snapshot = self
			.stabilizer
			.tick(now, &self.config, || host.count_visible_items());
		if let Some(snapshot) = snapshot {
			self.process(host, &snapshot.query, snapshot.count);
		}
	}

	fn process<H: SearchHost>(&mut self, host: &mut H, query: &str, count: usize) {
		let query = normalize(query);
		if query.is_empty() {
			return;
		}

		let owned_count = count.saturating_sub(self.state.injected.len());
		if self.state.last_query.as_deref() == Some(query.as_str())
			&& self.state.last_count == Some(owned_count)
		{
			debug!("query {query:?} unchanged at {owned_count} host results; skipping");
			return;
		}
		self.state.last_query = Some(query.clone());
		self.state.last_count = Some(owned_count);

		// Drain leftovers from the previous pass before reading the
		// surface, so the rebuild starts from host-owned rows only.
		commit::teardown(host, &mut self.state.injected, &mut self.state.headers);

		if self.index.is_none() {
			self.index = Some(RegistryIndex::build(host, &self.config));
		}
		let Some(index) = self.index.as_ref() else {
			return;
		};

		let resolution = resolve::resolve_items(host.visible_items(), index);
		for orphan in &resolution.orphans {
			host.deactivate_item(*orphan);
		}

		// The index already excludes pages hidden at build time; this
		// re-check catches host flags that changed since.
		let mut actives = Vec::with_capacity(resolution.actives.len());
		for active in resolution.actives {
			if hide::should_hide(host, &active.page, &self.config.debris_markers) {
				host.deactivate_item(active.handle);
			} else {
				actives.push(active);
			}
		}

		inject::inject_missing(
			host,
			index,
			&query,
			&mut actives,
			&mut self.state.injected,
			&self.config.debris_markers,
		);

		if actives.is_empty() {
			return;
		}

		let scored = score::score_results(&actives, &query);
		let plan = group::build_plan(scored);
		if plan.is_empty() {
			return;
		}

		if let Err(commit_error) = commit::commit(host, &plan, &mut self.state.headers) {
			error!("leaving surface as-is: {commit_error}");
		}
	}
}

impl Default for Engine {
	fn default() -> Self {
		Self::new(EngineConfig::default())
	}
}
