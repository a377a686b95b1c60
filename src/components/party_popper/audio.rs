//! Explosion sound cues.
//!
//! Playback is fire-and-forget: the simulation asks for a cue and moves on.
//! Nothing about a clip (missing file, autoplay policy, decode error) is
//! allowed to reach the animation loop.

use log::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::Closure;
use web_sys::HtmlAudioElement;

use super::error::SetupError;

/// Somewhere to play a numbered clip from a fixed roster.
pub trait CueSink {
	/// Number of clips in the roster.
	fn cue_count(&self) -> usize;
	/// Start clip `index` from the beginning. Never blocks, never fails.
	fn play(&mut self, index: usize);
}

/// A roster with no clips. Used when audio is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct Muted;

impl CueSink for Muted {
	fn cue_count(&self) -> usize {
		0
	}

	fn play(&mut self, _index: usize) {}
}

/// Browser audio elements, one per clip.
pub struct CueBank {
	clips: Vec<HtmlAudioElement>,
	// Catches rejected play() promises (autoplay policy, missing file).
	swallow: Closure<dyn FnMut(JsValue)>,
}

impl CueBank {
	/// Build a bank from clip URLs. Clips that cannot be created are left
	/// out and reported back so the caller can warn once.
	pub fn load(sources: &[String], volume: f64) -> (Self, Vec<SetupError>) {
		let mut clips = Vec::with_capacity(sources.len());
		let mut failures = Vec::new();

		for src in sources {
			match HtmlAudioElement::new_with_src(src) {
				Ok(clip) => {
					clip.set_volume(volume);
					clips.push(clip);
				}
				Err(e) => failures.push(SetupError::AudioUnavailable {
					src: src.clone(),
					reason: format!("{e:?}"),
				}),
			}
		}

		let swallow: Closure<dyn FnMut(JsValue)> = Closure::new(|e: JsValue| {
			debug!("party-popper: cue playback rejected: {:?}", e);
		});

		(Self { clips, swallow }, failures)
	}
}

impl CueSink for CueBank {
	fn cue_count(&self) -> usize {
		self.clips.len()
	}

	fn play(&mut self, index: usize) {
		let Some(clip) = self.clips.get(index) else {
			return;
		};
		clip.set_current_time(0.0);
		let playback: Result<js_sys::Promise, JsValue> = clip.play();
		match playback {
			Ok(promise) => {
				let _ = promise.catch(&self.swallow);
			}
			Err(e) => warn!("party-popper: cue {} failed to start: {:?}", index, e),
		}
	}
}
