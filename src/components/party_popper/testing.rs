//! Deterministic stand-ins for the browser collaborators.

use super::audio::CueSink;
use super::scheduler::FrameRequester;
use super::surface::Surface;
use super::theme::Color;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
	Clear(f64, f64, f64, f64),
	FillRect(f64, f64, f64, f64),
	FillCircle(f64, f64, f64),
	Save,
	Restore,
	Alpha(f64),
	Fill(Color),
	Translate(f64, f64),
	Rotate(f64),
}

/// Records every paint call.
pub struct RecordingSurface {
	pub width: f64,
	pub height: f64,
	pub ops: Vec<Op>,
}

impl RecordingSurface {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width,
			height,
			ops: Vec::new(),
		}
	}

	pub fn clears(&self) -> usize {
		self.ops.iter().filter(|op| matches!(op, Op::Clear(..))).count()
	}

	pub fn alphas(&self) -> Vec<f64> {
		self.ops
			.iter()
			.filter_map(|op| match op {
				Op::Alpha(a) => Some(*a),
				_ => None,
			})
			.collect()
	}
}

impl Surface for RecordingSurface {
	fn width(&self) -> f64 {
		self.width
	}

	fn height(&self) -> f64 {
		self.height
	}

	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.ops.push(Op::Clear(x, y, w, h));
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.ops.push(Op::FillRect(x, y, w, h));
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.ops.push(Op::FillCircle(x, y, radius));
	}

	fn save(&mut self) {
		self.ops.push(Op::Save);
	}

	fn restore(&mut self) {
		self.ops.push(Op::Restore);
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ops.push(Op::Alpha(alpha));
	}

	fn set_fill_color(&mut self, color: Color) {
		self.ops.push(Op::Fill(color));
	}

	fn translate(&mut self, x: f64, y: f64) {
		self.ops.push(Op::Translate(x, y));
	}

	fn rotate(&mut self, angle: f64) {
		self.ops.push(Op::Rotate(angle));
	}
}

/// Counts frame requests; the test decides when callbacks are delivered.
#[derive(Debug, Default)]
pub struct ManualFrames {
	pub requested: usize,
	pub refuse: bool,
}

impl FrameRequester for ManualFrames {
	fn request_frame(&mut self) -> bool {
		if self.refuse {
			return false;
		}
		self.requested += 1;
		true
	}
}

/// Remembers which cues were played.
#[derive(Debug, Default)]
pub struct CueLog {
	pub roster: usize,
	pub played: Vec<usize>,
}

impl CueLog {
	pub fn with_roster(roster: usize) -> Self {
		Self {
			roster,
			played: Vec::new(),
		}
	}
}

impl CueSink for CueLog {
	fn cue_count(&self) -> usize {
		self.roster
	}

	fn play(&mut self, index: usize) {
		self.played.push(index);
	}
}
