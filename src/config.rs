use std::time::Duration;

use serde::Deserialize;

/// Tunable knobs for the relevance engine.
///
/// Hosts usually deserialize this from their own settings file; every
/// field falls back to the defaults below when omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	/// Debounce before processing an explicitly submitted query, in ms.
	pub submit_debounce_ms: u64,
	/// Debounce before processing a keystroke-triggered query, in ms.
	pub keystroke_debounce_ms: u64,
	/// Interval between stabilization polls, in ms.
	pub poll_interval_ms: u64,
	/// Number of polls before giving up on a stable result count.
	pub max_polls: u32,
	/// Keystroke queries shorter than this never schedule processing.
	pub min_keystroke_len: usize,
	/// Case-insensitive substrings marking debris pages that should
	/// never surface in results.
	pub debris_markers: Vec<String>,
}

impl EngineConfig {
	#[must_use]
	pub fn submit_debounce(&self) -> Duration {
		Duration::from_millis(self.submit_debounce_ms)
	}

	#[must_use]
	pub fn keystroke_debounce(&self) -> Duration {
		Duration::from_millis(self.keystroke_debounce_ms)
	}

	#[must_use]
	pub fn poll_interval(&self) -> Duration {
		Duration::from_millis(self.poll_interval_ms)
	}
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			submit_debounce_ms: 300,
			keystroke_debounce_ms: 800,
			poll_interval_ms: 100,
			max_polls: 10,
			min_keystroke_len: 3,
			debris_markers: vec![
				"ruptured".to_string(),
				"burnt".to_string(),
				"wreckage".to_string(),
			],
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_documented_timings() {
		let config = EngineConfig::default();
		assert_eq!(config.submit_debounce(), Duration::from_millis(300));
		assert_eq!(config.keystroke_debounce(), Duration::from_millis(800));
		assert_eq!(config.poll_interval(), Duration::from_millis(100));
		assert_eq!(config.max_polls, 10);
		assert_eq!(config.min_keystroke_len, 3);
		assert_eq!(config.debris_markers.len(), 3);
	}

	#[test]
	fn partial_settings_fall_back_to_defaults() {
		let config: EngineConfig =
			serde_json::from_str(r#"{ "max_polls": 4, "debris_markers": ["junk"] }"#).unwrap();
		assert_eq!(config.max_polls, 4);
		assert_eq!(config.debris_markers, vec!["junk".to_string()]);
		assert_eq!(config.submit_debounce_ms, 300);
	}
}
