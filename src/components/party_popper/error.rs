//! Setup failures. None of these stop the page; the component logs them
//! once and carries on with whatever is left.

use thiserror::Error;

/// A browser resource the show wanted but could not get.
#[derive(Debug, Error)]
pub enum SetupError {
	#[error("no global window")]
	NoWindow,
	#[error("canvas 2d context unavailable: {0}")]
	ContextUnavailable(String),
	#[error("audio clip {src} unavailable: {reason}")]
	AudioUnavailable { src: String, reason: String },
}
