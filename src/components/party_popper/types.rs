//! Configuration handed to the party popper by the host page.

use serde::Deserialize;

/// Tunables for a show. Every field is optional in JSON; missing fields
/// fall back to [`PopperConfig::default`].
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct PopperConfig {
	/// Chance of launching a bomb on any single tick, in `[0, 1]`.
	/// Applied per tick, not per second.
	pub spawn_chance: f64,
	/// Frame rate the per-frame motion constants were tuned for.
	pub reference_fps: f64,
	/// Horizontal distance from either edge kept clear of launches.
	pub launch_margin: f64,
	/// Height above the bottom edge at which bombs appear.
	pub launch_offset: f64,
	/// Explosion clip URLs, played on detonation.
	pub sounds: Vec<String>,
	/// Playback volume for the clips, in `[0, 1]`.
	pub volume: f64,
	/// Seed for a reproducible show. Entropy-seeded when absent.
	pub seed: Option<u64>,
}

impl Default for PopperConfig {
	fn default() -> Self {
		Self {
			spawn_chance: 0.01,
			reference_fps: 60.0,
			launch_margin: 100.0,
			launch_offset: 20.0,
			sounds: (1..=7)
				.map(|i| format!("sound/explosion-{i}.mp3"))
				.collect(),
			volume: 1.0,
			seed: None,
		}
	}
}

impl PopperConfig {
	/// Clamp out-of-range values coming from hand-written JSON.
	pub fn sanitized(mut self) -> Self {
		self.spawn_chance = if self.spawn_chance.is_nan() {
			0.0
		} else {
			self.spawn_chance.clamp(0.0, 1.0)
		};
		if !(self.reference_fps.is_finite() && self.reference_fps > 0.0) {
			self.reference_fps = 60.0;
		}
		self.launch_margin = self.launch_margin.max(0.0);
		self.launch_offset = self.launch_offset.max(0.0);
		self.volume = if self.volume.is_nan() {
			1.0
		} else {
			self.volume.clamp(0.0, 1.0)
		};
		self
	}
}
