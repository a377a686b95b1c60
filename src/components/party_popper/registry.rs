//! Live bombs and particles.
//!
//! Entities are owned here and nowhere else. The emitter inserts, the
//! per-tick cull removes; removed entities are dropped on the spot.

use super::bomb::Bomb;
use super::particles::Particle;
use super::scheduler::FrameStep;

/// Insertion-ordered collections of everything on screen.
#[derive(Debug, Default)]
pub struct SimulationRegistry {
	bombs: Vec<Bomb>,
	particles: Vec<Particle>,
}

impl SimulationRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn bombs(&self) -> &[Bomb] {
		&self.bombs
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn push_bomb(&mut self, bomb: Bomb) {
		self.bombs.push(bomb);
	}

	pub fn extend_particles<I: IntoIterator<Item = Particle>>(&mut self, particles: I) {
		self.particles.extend(particles);
	}

	/// Advance every bomb and return the points where bombs reached their
	/// apex this tick, in insertion order.
	pub fn update_bombs(&mut self, step: FrameStep) -> Vec<(f64, f64)> {
		let mut apexes = Vec::new();
		for bomb in &mut self.bombs {
			if bomb.update(step) {
				apexes.push((bomb.x, bomb.y));
			}
		}
		apexes
	}

	pub fn update_particles(&mut self, step: FrameStep) {
		for particle in &mut self.particles {
			particle.update(step);
		}
	}

	/// Drop expired particles and detonated bombs. Returns how many
	/// entities were removed.
	pub fn cull(&mut self) -> usize {
		let before = self.bombs.len() + self.particles.len();
		self.particles.retain(|p| !p.is_expired());
		self.bombs.retain(|b| !b.has_detonated());
		before - (self.bombs.len() + self.particles.len())
	}

	pub fn is_empty(&self) -> bool {
		self.bombs.is_empty() && self.particles.is_empty()
	}
}
