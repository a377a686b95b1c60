//! Launching bombs and turning them into bursts.

use std::f64::consts::TAU;

use log::debug;

use super::audio::CueSink;
use super::bomb::Bomb;
use super::particles::{Archetype, Confetti, Particle, RadialSpark, ShellSpark, Spark};
use super::registry::SimulationRegistry;
use super::theme::{Color, Theme};
use super::types::PopperConfig;

/// Particles in a confetti or spark burst.
pub const FREE_BURST_SIZE: usize = 100;
/// Shell count range for shell-ring bursts.
pub const SHELL_RING_SHELLS: std::ops::RangeInclusive<u32> = 4..=6;
/// Per-shell particle count range for shell-ring bursts.
pub const SHELL_RING_PARTICLES: std::ops::RangeInclusive<usize> = 15..=19;
/// Shells in a radial spread.
pub const RADIAL_SHELLS: u32 = 2;
/// Per-shell particle count range for radial spreads.
pub const RADIAL_PARTICLES: std::ops::RangeInclusive<usize> = 31..=50;

/// Owns the show's randomness and decides what gets spawned where.
pub struct Emitter {
	rng: fastrand::Rng,
	theme: Theme,
	spawn_chance: f64,
	launch_margin: f64,
	launch_offset: f64,
}

impl Emitter {
	pub fn new(config: &PopperConfig, theme: Theme) -> Self {
		let rng = match config.seed {
			Some(seed) => fastrand::Rng::with_seed(seed),
			None => fastrand::Rng::new(),
		};
		Self::with_rng(config, theme, rng)
	}

	pub fn with_rng(config: &PopperConfig, theme: Theme, rng: fastrand::Rng) -> Self {
		let mut emitter = Self {
			rng,
			theme,
			spawn_chance: 0.0,
			launch_margin: config.launch_margin.max(0.0),
			launch_offset: config.launch_offset.max(0.0),
		};
		emitter.set_spawn_chance(config.spawn_chance);
		emitter
	}

	pub fn spawn_chance(&self) -> f64 {
		self.spawn_chance
	}

	/// Clamped to `[0, 1]`; NaN disables launching.
	pub fn set_spawn_chance(&mut self, chance: f64) {
		self.spawn_chance = if chance.is_nan() {
			0.0
		} else {
			chance.clamp(0.0, 1.0)
		};
	}

	/// Roll the per-tick launch chance and, on success, launch a bomb from
	/// a random point along the bottom edge. Returns whether one launched.
	pub fn maybe_launch(
		&mut self,
		registry: &mut SimulationRegistry,
		width: f64,
		height: f64,
	) -> bool {
		if self.rng.f64() >= self.spawn_chance {
			return false;
		}
		let margin = self.launch_margin.min(width.max(0.0) / 2.0);
		let x = margin + self.rng.f64() * (width - 2.0 * margin).max(0.0);
		let y = height - self.launch_offset;
		self.spawn_bomb(registry, x, y);
		true
	}

	/// Put a freshly launched bomb at `(x, y)`.
	pub fn spawn_bomb(&mut self, registry: &mut SimulationRegistry, x: f64, y: f64) {
		registry.push_bomb(Bomb::new(x, y, &mut self.rng, &self.theme));
	}

	/// Burst a random archetype at `(x, y)` and play one matching cue.
	pub fn detonate<A: CueSink + ?Sized>(
		&mut self,
		registry: &mut SimulationRegistry,
		x: f64,
		y: f64,
		audio: &mut A,
	) -> Archetype {
		let archetype = Archetype::random(&mut self.rng);
		self.detonate_as(registry, archetype, x, y, audio);
		archetype
	}

	/// Burst a specific archetype at `(x, y)` and play one matching cue.
	/// Returns how many particles were added.
	pub fn detonate_as<A: CueSink + ?Sized>(
		&mut self,
		registry: &mut SimulationRegistry,
		archetype: Archetype,
		x: f64,
		y: f64,
		audio: &mut A,
	) -> usize {
		let burst = self.burst(archetype, x, y);
		let count = burst.len();
		registry.extend_particles(burst);
		debug!(
			"party-popper: detonated {:?} at ({:.0}, {:.0}), {} particles",
			archetype, x, y, count
		);

		if let Some(cue) = self.pick_cue(archetype, audio.cue_count()) {
			audio.play(cue);
		}
		count
	}

	fn burst(&mut self, archetype: Archetype, x: f64, y: f64) -> Vec<Particle> {
		match archetype {
			Archetype::BurstConfetti => (0..FREE_BURST_SIZE)
				.map(|_| Particle::Confetti(Confetti::new(x, y, &mut self.rng, &self.theme)))
				.collect(),
			Archetype::Spark => (0..FREE_BURST_SIZE)
				.map(|_| Particle::Spark(Spark::new(x, y, &mut self.rng, &self.theme)))
				.collect(),
			Archetype::ShellRing => {
				let shells = self.rng.u32(SHELL_RING_SHELLS);
				let per_shell = self.rng.usize(SHELL_RING_PARTICLES);
				let color = self.theme.any_hue(&mut self.rng);
				let mut burst = Vec::with_capacity(shells as usize * per_shell);
				for shell in 1..=shells {
					burst.extend(self.ring(Archetype::ShellRing, x, y, shell, per_shell, color));
				}
				burst
			}
			Archetype::RadialSpread => {
				let mut burst = Vec::new();
				for shell in 1..=RADIAL_SHELLS {
					let per_shell = self.rng.usize(RADIAL_PARTICLES);
					let color = self.theme.any_hue(&mut self.rng);
					burst.extend(self.ring(Archetype::RadialSpread, x, y, shell, per_shell, color));
				}
				burst
			}
		}
	}

	/// One complete ring: `count` particles at angles `i * 2π / count`.
	pub fn ring(
		&mut self,
		archetype: Archetype,
		x: f64,
		y: f64,
		shell: u32,
		count: usize,
		color: Color,
	) -> Vec<Particle> {
		(0..count)
			.map(|i| {
				let angle = TAU / count as f64 * i as f64;
				match archetype {
					Archetype::RadialSpread => {
						let speed = self.rng.f64() * 3.0;
						Particle::Radial(RadialSpark::new(x, y, angle, speed, color, shell))
					}
					_ => Particle::ShellRing(ShellSpark::new(x, y, angle, color, shell)),
				}
			})
			.collect()
	}

	/// Archetype `k` plays clips whose index is `k` modulo the archetype
	/// count, falling back to the whole roster when that subset is empty.
	fn pick_cue(&mut self, archetype: Archetype, roster: usize) -> Option<usize> {
		if roster == 0 {
			return None;
		}
		let stride = Archetype::ALL.len();
		let offset = archetype.index();
		if offset >= roster {
			return Some(self.rng.usize(..roster));
		}
		let owned = (roster - offset).div_ceil(stride);
		Some(offset + stride * self.rng.usize(..owned))
	}
}
