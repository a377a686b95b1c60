//! Frame scheduling and elapsed-time normalization.
//!
//! The host owns the refresh-synchronized callback (`requestAnimationFrame`
//! in the browser). The scheduler only decides whether a tick should run,
//! how much time it covers, and when to ask the host for the next one.

/// Frame rate used when a configured one is unusable.
pub const DEFAULT_REFERENCE_FPS: f64 = 60.0;

/// Something that can ask the host for one more frame callback.
pub trait FrameRequester {
	/// Returns `false` if the host could not schedule the frame.
	fn request_frame(&mut self) -> bool;
}

/// Elapsed time expressed in reference frames.
///
/// The per-frame constants of the show were tuned for a fixed frame rate;
/// multiplying by `frames()` keeps motion speed independent of the actual
/// refresh rate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStep {
	seconds: f64,
	frames: f64,
}

impl FrameStep {
	pub const ZERO: FrameStep = FrameStep {
		seconds: 0.0,
		frames: 0.0,
	};

	pub fn new(elapsed_seconds: f64, reference_fps: f64) -> Self {
		let seconds = elapsed_seconds.max(0.0);
		Self {
			seconds,
			frames: seconds * reference_fps,
		}
	}

	pub fn seconds(self) -> f64 {
		self.seconds
	}

	pub fn frames(self) -> f64 {
		self.frames
	}
}

/// Start/stop state of the animation loop.
///
/// Tracks whether a frame request is outstanding so that a loop is never
/// doubled, even when the user stops and restarts before the in-flight
/// callback has fired.
#[derive(Debug)]
pub struct FrameScheduler {
	running: bool,
	pending: bool,
	previous_timestamp: Option<f64>,
	reference_fps: f64,
}

impl FrameScheduler {
	/// Non-finite or non-positive rates fall back to
	/// [`DEFAULT_REFERENCE_FPS`]; a negative rate would run time backwards.
	pub fn new(reference_fps: f64) -> Self {
		let reference_fps = if reference_fps.is_finite() && reference_fps > 0.0 {
			reference_fps
		} else {
			DEFAULT_REFERENCE_FPS
		};
		Self {
			running: false,
			pending: false,
			previous_timestamp: None,
			reference_fps,
		}
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Whether a frame callback has been requested and not yet delivered.
	pub fn is_pending(&self) -> bool {
		self.pending
	}

	/// Begin running. Returns `false` if the loop was already running with
	/// a frame on the way. A running loop whose last request was refused is
	/// revived by asking again.
	pub fn start<F: FrameRequester + ?Sized>(&mut self, frames: &mut F) -> bool {
		if self.running {
			if self.pending {
				return false;
			}
			self.pending = frames.request_frame();
			return self.pending;
		}
		self.running = true;
		self.previous_timestamp = None;
		if !self.pending {
			self.pending = frames.request_frame();
		}
		true
	}

	/// Stop running. The next delivered callback is a no-op.
	pub fn stop(&mut self) -> bool {
		let was_running = self.running;
		self.running = false;
		self.previous_timestamp = None;
		was_running
	}

	/// Called on each frame callback with the host timestamp in milliseconds.
	///
	/// Returns `None` when stopped; the loop then ends without requesting
	/// another frame. The first tick after a start covers zero time.
	pub fn begin_tick(&mut self, timestamp_ms: f64) -> Option<FrameStep> {
		self.pending = false;
		if !self.running {
			self.previous_timestamp = None;
			return None;
		}
		let elapsed = match self.previous_timestamp {
			Some(previous) => ((timestamp_ms - previous) / 1000.0).max(0.0),
			None => 0.0,
		};
		self.previous_timestamp = Some(timestamp_ms);
		Some(FrameStep::new(elapsed, self.reference_fps))
	}

	/// Request the next callback if still running.
	pub fn end_tick<F: FrameRequester + ?Sized>(&mut self, frames: &mut F) {
		if self.running && !self.pending {
			self.pending = frames.request_frame();
		}
	}
}
