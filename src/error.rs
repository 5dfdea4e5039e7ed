use thiserror::Error;

/// Failures that can occur inside a processing pass.
///
/// None of these propagate to the host; the pipeline logs them and
/// recovers locally, at worst leaving a row absent or unstyled.
#[derive(Debug, Error)]
pub enum EngineError {
	/// A visible item's title did not resolve to any registry page.
	#[error("no page matches result title {title:?}")]
	UnresolvedItem { title: String },

	/// Synthesizing an injected result for a page failed.
	#[error("failed to inject result for page {key:?}: {source}")]
	Injection {
		key: String,
		source: anyhow::Error,
	},

	/// Writing the final order back to the result surface failed.
	#[error("render commit failed: {0}")]
	Commit(anyhow::Error),
}
