//! The rising shell that carries a burst up to its apex.

use super::scheduler::FrameStep;
use super::surface::Surface;
use super::theme::{Color, Theme};

/// A launched bomb, alive until it detonates.
#[derive(Clone, Debug)]
pub struct Bomb {
	pub x: f64,
	pub y: f64,
	/// Upward speed; shrinks under gravity until the apex.
	pub up_speed: f64,
	/// Constant sideways drift per frame.
	pub tilt: f64,
	pub color: Color,
	pub size: f64,
	pub opacity: f64,
	pub fade: f64,
	pub gravity: f64,
	detonated: bool,
}

impl Bomb {
	pub fn new(x: f64, y: f64, rng: &mut fastrand::Rng, theme: &Theme) -> Self {
		let up_speed = 4.0 + rng.f64() * 8.0;
		let tilt = rng.f64() * 4.0 - 2.0;
		let color = theme.any_hue(rng);
		let size = 4.0 + rng.f64() * 4.0;
		let fade = 0.01 + rng.f64() * 0.02;
		Self::with_motion(x, y, up_speed, tilt, 0.1)
			.colored(color)
			.sized(size)
			.fading(fade)
	}

	/// A bomb with explicit launch motion and default looks.
	pub fn with_motion(x: f64, y: f64, up_speed: f64, tilt: f64, gravity: f64) -> Self {
		Self {
			x,
			y,
			up_speed,
			tilt,
			color: Color::hsl(0.0, 100.0, 50.0),
			size: 6.0,
			opacity: 1.0,
			fade: 0.02,
			gravity,
			detonated: false,
		}
	}

	pub fn colored(self, color: Color) -> Self {
		Self { color, ..self }
	}

	pub fn sized(self, size: f64) -> Self {
		Self { size, ..self }
	}

	pub fn fading(self, fade: f64) -> Self {
		Self { fade, ..self }
	}

	/// Advance one tick. Returns `true` exactly once: on the tick the bomb
	/// first reaches its apex and should detonate.
	pub fn update(&mut self, step: FrameStep) -> bool {
		let frames = step.frames();
		self.x += self.tilt * frames;
		self.y -= self.up_speed * frames;
		self.up_speed -= self.gravity * frames;
		self.opacity -= self.fade * frames;

		if self.up_speed <= 0.0 && !self.detonated {
			self.detonated = true;
			return true;
		}
		false
	}

	pub fn has_detonated(&self) -> bool {
		self.detonated
	}

	/// Head plus two shrinking trail circles below it.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.save();
		surface.set_global_alpha(self.opacity.clamp(0.0, 1.0));
		surface.set_fill_color(self.color);
		for i in 0..3 {
			let i = i as f64;
			surface.fill_circle(
				self.x - i * self.tilt,
				self.y + self.up_speed * i * self.size / 2.0,
				self.size - i * self.size / 4.0,
			);
		}
		surface.restore();
	}
}
