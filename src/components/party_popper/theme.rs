//! Colors for bombs and particles.
//!
//! Everything in the show is drawn in fully saturated HSL; only the hue
//! varies between entities.

use std::ops::Range;

/// HSL color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Hue in degrees, `0.0..360.0`.
	pub hue: f64,
	/// Saturation in percent.
	pub saturation: f64,
	/// Lightness in percent.
	pub lightness: f64,
}

impl Color {
	pub const fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
		Self {
			hue,
			saturation,
			lightness,
		}
	}

	pub fn to_css(self) -> String {
		format!(
			"hsl({}, {}%, {}%)",
			self.hue, self.saturation, self.lightness
		)
	}
}

/// Hue bands and tone shared by every entity of a show.
#[derive(Clone, Debug)]
pub struct Theme {
	pub saturation: f64,
	pub lightness: f64,
	/// Hue range for bombs, confetti and ring bursts.
	pub full_wheel: Range<f64>,
	/// Narrow warm band used by sparks.
	pub warm_band: Range<f64>,
}

impl Theme {
	/// Bright party colors (default)
	pub fn party() -> Self {
		Self {
			saturation: 100.0,
			lightness: 50.0,
			full_wheel: 0.0..360.0,
			warm_band: 60.0..80.0,
		}
	}

	/// A color from the full wheel.
	pub fn any_hue(&self, rng: &mut fastrand::Rng) -> Color {
		self.in_band(rng, &self.full_wheel)
	}

	/// A color from the warm spark band.
	pub fn warm_hue(&self, rng: &mut fastrand::Rng) -> Color {
		self.in_band(rng, &self.warm_band)
	}

	fn in_band(&self, rng: &mut fastrand::Rng, band: &Range<f64>) -> Color {
		let hue = band.start + rng.f64() * (band.end - band.start);
		Color::hsl(hue, self.saturation, self.lightness)
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::party()
	}
}
