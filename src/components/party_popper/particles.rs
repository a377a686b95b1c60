//! Particle archetypes released by a detonation.
//!
//! Every archetype shares one lifecycle: [`Particle::update`] advances it by
//! a [`FrameStep`], [`Particle::draw`] paints it, and once its opacity falls
//! to [`EXPIRY_OPACITY`] it is expired and gets culled. All per-frame
//! constants are in reference-frame units and are multiplied by the step.

use std::f64::consts::TAU;

use super::scheduler::FrameStep;
use super::surface::Surface;
use super::theme::{Color, Theme};

/// Opacity at or below which a particle is gone for good.
pub const EXPIRY_OPACITY: f64 = 0.01;

/// Which motion model a burst uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Archetype {
	/// Tumbling squares and discs under gravity.
	BurstConfetti,
	/// Short-lived warm sparks.
	Spark,
	/// Concentric rings that swell as they expand.
	ShellRing,
	/// Concentric rings of fixed-size dots.
	RadialSpread,
}

impl Archetype {
	pub const ALL: [Archetype; 4] = [
		Archetype::BurstConfetti,
		Archetype::Spark,
		Archetype::ShellRing,
		Archetype::RadialSpread,
	];

	pub fn index(self) -> usize {
		match self {
			Archetype::BurstConfetti => 0,
			Archetype::Spark => 1,
			Archetype::ShellRing => 2,
			Archetype::RadialSpread => 3,
		}
	}

	/// Uniform pick over all archetypes.
	pub fn random(rng: &mut fastrand::Rng) -> Self {
		Self::ALL[rng.usize(..Self::ALL.len())]
	}
}

/// Confetti piece outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
	Square,
	Circle,
}

fn uniform(rng: &mut fastrand::Rng, min: f64, max: f64) -> f64 {
	min + rng.f64() * (max - min)
}

/// Alpha actually handed to the surface.
fn visible_alpha(opacity: f64) -> f64 {
	opacity.clamp(0.0, 1.0)
}

/// A tumbling confetti piece.
#[derive(Clone, Debug)]
pub struct Confetti {
	pub x: f64,
	pub y: f64,
	pub color: Color,
	pub shape: Shape,
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub gravity: f64,
	pub opacity: f64,
	/// Opacity lost per frame.
	pub fade: f64,
	pub rotation: f64,
	pub rotation_speed: f64,
}

impl Confetti {
	pub fn new(x: f64, y: f64, rng: &mut fastrand::Rng, theme: &Theme) -> Self {
		Self {
			x,
			y,
			color: theme.any_hue(rng),
			shape: if rng.bool() {
				Shape::Square
			} else {
				Shape::Circle
			},
			size: uniform(rng, 2.0, 7.0),
			speed_x: uniform(rng, -4.0, 4.0),
			speed_y: uniform(rng, -6.0, 0.0),
			gravity: 0.1,
			opacity: 1.0,
			fade: uniform(rng, 0.008, 0.010),
			rotation: uniform(rng, 0.0, TAU),
			rotation_speed: uniform(rng, -0.05, 0.15),
		}
	}

	fn update(&mut self, frames: f64) {
		self.x += self.speed_x * frames;
		self.y += self.speed_y * frames;
		self.speed_y += self.gravity * frames;
		self.opacity -= self.fade * frames;
		self.rotation += self.rotation_speed * frames;
	}

	fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.save();
		surface.set_global_alpha(visible_alpha(self.opacity));
		surface.set_fill_color(self.color);
		surface.translate(self.x, self.y);
		surface.rotate(self.rotation);
		match self.shape {
			Shape::Square => {
				let half = self.size / 2.0;
				surface.fill_rect(-half, -half, self.size, self.size);
			}
			Shape::Circle => surface.fill_circle(0.0, 0.0, self.size / 2.0),
		}
		surface.restore();
	}
}

/// A small warm spark. Lighter gravity and a faster fade than confetti.
#[derive(Clone, Debug)]
pub struct Spark {
	pub x: f64,
	pub y: f64,
	pub color: Color,
	pub size: f64,
	pub speed_x: f64,
	pub speed_y: f64,
	pub gravity: f64,
	pub opacity: f64,
	pub fade: f64,
}

impl Spark {
	pub fn new(x: f64, y: f64, rng: &mut fastrand::Rng, theme: &Theme) -> Self {
		Self {
			x,
			y,
			color: theme.warm_hue(rng),
			size: uniform(rng, 2.0, 7.0),
			speed_x: uniform(rng, -3.0, 3.0),
			speed_y: uniform(rng, -4.0, 2.0),
			gravity: 0.03,
			opacity: 1.0,
			fade: uniform(rng, 0.02, 0.03),
		}
	}

	fn update(&mut self, frames: f64) {
		self.x += self.speed_x * frames;
		self.y += self.speed_y * frames;
		self.speed_y += self.gravity * frames;
		self.opacity -= self.fade * frames;
	}

	fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.save();
		surface.set_global_alpha(visible_alpha(self.opacity));
		surface.set_fill_color(self.color);
		surface.fill_circle(self.x, self.y, self.size / 2.0);
		surface.restore();
	}
}

/// One dot of a shell ring. Accelerates and swells; outer shells faster.
#[derive(Clone, Debug)]
pub struct ShellSpark {
	pub x: f64,
	pub y: f64,
	pub angle: f64,
	pub speed: f64,
	pub color: Color,
	pub size: f64,
	pub opacity: f64,
	/// 1-based shell index within the burst.
	pub shell: u32,
}

impl ShellSpark {
	pub fn new(x: f64, y: f64, angle: f64, color: Color, shell: u32) -> Self {
		Self {
			x,
			y,
			angle,
			speed: 0.0,
			color,
			size: 0.5,
			opacity: 1.0,
			shell,
		}
	}

	fn update(&mut self, frames: f64) {
		let s = self.shell as f64;
		self.x += self.angle.cos() * self.speed * frames;
		self.y += self.angle.sin() * self.speed * frames;
		self.size += s / 50.0 * frames;
		self.speed += s / 100.0 * frames;
		self.opacity -= (0.008 + s / 1000.0) * frames;
	}

	fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.save();
		surface.set_global_alpha(visible_alpha(self.opacity));
		surface.set_fill_color(self.color);
		surface.fill_circle(self.x, self.y, self.size);
		surface.restore();
	}
}

/// One dot of a radial spread. Fixed radius; speed grows with the shell.
#[derive(Clone, Debug)]
pub struct RadialSpark {
	pub x: f64,
	pub y: f64,
	pub angle: f64,
	pub speed: f64,
	pub color: Color,
	pub radius: f64,
	pub opacity: f64,
	pub shell: u32,
}

impl RadialSpark {
	pub fn new(x: f64, y: f64, angle: f64, speed: f64, color: Color, shell: u32) -> Self {
		Self {
			x,
			y,
			angle,
			speed,
			color,
			radius: 2.0,
			opacity: 1.0,
			shell,
		}
	}

	fn update(&mut self, frames: f64) {
		self.x += self.speed * self.angle.cos() * frames;
		self.y += self.speed * self.angle.sin() * frames;
		self.speed += self.shell as f64 / 200.0 * frames;
		self.opacity -= 0.01 * frames;
	}

	fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.save();
		surface.set_global_alpha(visible_alpha(self.opacity));
		surface.set_fill_color(self.color);
		surface.fill_circle(self.x, self.y, self.radius);
		surface.restore();
	}
}

/// A live particle of any archetype.
#[derive(Clone, Debug)]
pub enum Particle {
	Confetti(Confetti),
	Spark(Spark),
	ShellRing(ShellSpark),
	Radial(RadialSpark),
}

impl Particle {
	pub fn archetype(&self) -> Archetype {
		match self {
			Particle::Confetti(_) => Archetype::BurstConfetti,
			Particle::Spark(_) => Archetype::Spark,
			Particle::ShellRing(_) => Archetype::ShellRing,
			Particle::Radial(_) => Archetype::RadialSpread,
		}
	}

	/// Advance by the elapsed time since the previous tick.
	pub fn update(&mut self, step: FrameStep) {
		let frames = step.frames();
		match self {
			Particle::Confetti(p) => p.update(frames),
			Particle::Spark(p) => p.update(frames),
			Particle::ShellRing(p) => p.update(frames),
			Particle::Radial(p) => p.update(frames),
		}
	}

	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		match self {
			Particle::Confetti(p) => p.draw(surface),
			Particle::Spark(p) => p.draw(surface),
			Particle::ShellRing(p) => p.draw(surface),
			Particle::Radial(p) => p.draw(surface),
		}
	}

	/// Raw opacity. May dip below zero between a fade and the next cull.
	pub fn opacity(&self) -> f64 {
		match self {
			Particle::Confetti(p) => p.opacity,
			Particle::Spark(p) => p.opacity,
			Particle::ShellRing(p) => p.opacity,
			Particle::Radial(p) => p.opacity,
		}
	}

	pub fn position(&self) -> (f64, f64) {
		match self {
			Particle::Confetti(p) => (p.x, p.y),
			Particle::Spark(p) => (p.x, p.y),
			Particle::ShellRing(p) => (p.x, p.y),
			Particle::Radial(p) => (p.x, p.y),
		}
	}

	/// Shell index and launch angle for ring archetypes.
	pub fn ring(&self) -> Option<(u32, f64)> {
		match self {
			Particle::ShellRing(p) => Some((p.shell, p.angle)),
			Particle::Radial(p) => Some((p.shell, p.angle)),
			_ => None,
		}
	}

	pub fn is_expired(&self) -> bool {
		self.opacity().max(0.0) <= EXPIRY_OPACITY
	}
}
