use std::mem;
use std::time::Instant;

use crate::config::EngineConfig;

/// How a query event was produced; selects the debounce delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTrigger {
	/// Explicit submit; the external search is usually done quickly.
	Submit,
	/// Keystroke while typing; wait longer before reacting.
	Keystroke,
}

/// Stabilized view of the result surface handed to the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
	pub query: String,
	pub count: usize,
}

#[derive(Debug)]
enum Phase {
	Idle,
	Debouncing {
		query: String,
		deadline: Instant,
	},
	Polling {
		query: String,
		next_poll: Instant,
		polls_done: u32,
		last_count: Option<usize>,
	},
}

/// Waits out the debounce, then polls the visible-item count until it
/// stops changing or the poll budget runs out.
///
/// At most one task is ever pending: scheduling replaces whatever phase
/// is in flight, which is the engine's cancellation mechanism. The
/// machine owns no timers; the host drives it through [`Stabilizer::tick`]
/// from whatever cooperative scheduler it already runs.
#[derive(Debug)]
pub(crate) struct Stabilizer {
	phase: Phase,
}

impl Stabilizer {
	pub(crate) fn new() -> Self {
		Self { phase: Phase::Idle }
	}

	/// Replaces any pending task with a fresh debounce for `query`.
	pub(crate) fn schedule(
		&mut self,
		query: &str,
		trigger: QueryTrigger,
		config: &EngineConfig,
		now: Instant,
	) {
		let delay = match trigger {
			QueryTrigger::Submit => config.submit_debounce(),
			QueryTrigger::Keystroke => config.keystroke_debounce(),
		};
		self.phase = Phase::Debouncing {
			query: query.to_string(),
			deadline: now + delay,
		};
	}

	/// Drops any pending task without running it.
	pub(crate) fn cancel(&mut self) {
		self.phase = Phase::Idle;
	}

	pub(crate) fn is_idle(&self) -> bool {
		matches!(self.phase, Phase::Idle)
	}

	/// Advances the machine. Returns a snapshot once the surface has
	/// stabilized (or the poll budget is spent); the caller then runs
	/// the pipeline.
	///
	/// `current_count` is only invoked when a poll is actually due, so
	/// the host pays nothing for idle ticks.
	pub(crate) fn tick(
		&mut self,
		now: Instant,
		config: &EngineConfig,
		current_count: impl FnOnce() -> usize,
	) -> Option<Snapshot> {
		match &mut self.phase {
			Phase::Idle => None,
			Phase::Debouncing { deadline, .. } => {
				if now < *deadline {
					return None;
				}
				let Phase::Debouncing { query, .. } = mem::replace(&mut self.phase, Phase::Idle)
				else {
					return None;
				};
				self.poll(query, now, config, 0, None, current_count)
			}
			Phase::Polling { next_poll, .. } => {
				if now < *next_poll {
					return None;
				}
				let Phase::Polling {
					query,
					polls_done,
					last_count,
					..
				} = mem::replace(&mut self.phase, Phase::Idle)
				else {
					return None;
				};
				self.poll(query, now, config, polls_done, last_count, current_count)
			}
		}
	}

	fn poll(
		&mut self,
		query: String,
		now: Instant,
		config: &EngineConfig,
		polls_done: u32,
		last_count: Option<usize>,
		current_count: impl FnOnce() -> usize,
	) -> Option<Snapshot> {
		let count = current_count();
		let polls_done = polls_done + 1;

		let stabilized = count > 0 && last_count == Some(count);
		if stabilized || polls_done >= config.max_polls {
			return Some(Snapshot { query, count });
		}

		self.phase = Phase::Polling {
			query,
			next_poll: now + config.poll_interval(),
			polls_done,
			last_count: Some(count),
		};
		None
	}
}
