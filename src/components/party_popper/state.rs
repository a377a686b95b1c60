//! The running show: registry, emitter and scheduler wired to a surface,
//! a cue sink and a frame requester.
//!
//! Created once when the component mounts, then driven by the host's frame
//! callback through [`Simulation::tick`]. Every tick runs the same sequence:
//! compute elapsed time, clear, maybe launch, advance bombs (detonating any
//! that peaked), advance particles, draw, cull, request the next frame.

use log::info;

use super::audio::CueSink;
use super::emitter::Emitter;
use super::registry::SimulationRegistry;
use super::render;
use super::scheduler::{FrameRequester, FrameScheduler};
use super::surface::Surface;
use super::theme::Theme;
use super::types::PopperConfig;

/// What a single frame callback did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
	/// The loop is stopped; nothing was drawn or scheduled.
	Halted,
	Rendered {
		/// Seconds covered by this tick.
		elapsed: f64,
		/// Whether a new bomb was launched.
		launched: bool,
		/// Bombs that reached their apex and burst.
		detonations: usize,
		/// Entities removed by the cull.
		culled: usize,
	},
}

/// Everything a show needs, generic over its browser collaborators.
pub struct Simulation<S, A, F> {
	pub registry: SimulationRegistry,
	pub emitter: Emitter,
	scheduler: FrameScheduler,
	surface: S,
	audio: A,
	frames: F,
}

impl<S: Surface, A: CueSink, F: FrameRequester> Simulation<S, A, F> {
	/// Out-of-range config values are clamped first.
	pub fn new(config: &PopperConfig, surface: S, audio: A, frames: F) -> Self {
		let config = config.clone().sanitized();
		let emitter = Emitter::new(&config, Theme::default());
		Self::with_emitter(emitter, config.reference_fps, surface, audio, frames)
	}

	pub fn with_emitter(
		emitter: Emitter,
		reference_fps: f64,
		surface: S,
		audio: A,
		frames: F,
	) -> Self {
		Self {
			registry: SimulationRegistry::new(),
			emitter,
			scheduler: FrameScheduler::new(reference_fps),
			surface,
			audio,
			frames,
		}
	}

	pub fn is_running(&self) -> bool {
		self.scheduler.is_running()
	}

	/// Start the loop. No-op if already running.
	pub fn start(&mut self) -> bool {
		let started = self.scheduler.start(&mut self.frames);
		if started {
			info!("party-popper: started");
		}
		started
	}

	/// Stop the loop; takes effect on the next frame callback.
	pub fn stop(&mut self) -> bool {
		let stopped = self.scheduler.stop();
		if stopped {
			info!(
				"party-popper: stopped with {} bombs, {} particles live",
				self.registry.bombs().len(),
				self.registry.particles().len()
			);
		}
		stopped
	}

	/// Flip between running and stopped. Returns the new running state.
	pub fn toggle(&mut self) -> bool {
		if self.is_running() {
			self.stop();
		} else {
			self.start();
		}
		self.is_running()
	}

	/// Handle one frame callback carrying the host timestamp in milliseconds.
	pub fn tick(&mut self, timestamp_ms: f64) -> TickOutcome {
		let Some(step) = self.scheduler.begin_tick(timestamp_ms) else {
			return TickOutcome::Halted;
		};

		let (width, height) = (self.surface.width(), self.surface.height());
		render::clear(&mut self.surface);

		let launched = self
			.emitter
			.maybe_launch(&mut self.registry, width, height);

		let apexes = self.registry.update_bombs(step);
		for &(x, y) in &apexes {
			self.emitter
				.detonate(&mut self.registry, x, y, &mut self.audio);
		}
		self.registry.update_particles(step);

		render::render(&self.registry, &mut self.surface);
		let culled = self.registry.cull();

		self.scheduler.end_tick(&mut self.frames);

		TickOutcome::Rendered {
			elapsed: step.seconds(),
			launched,
			detonations: apexes.len(),
			culled,
		}
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn audio(&self) -> &A {
		&self.audio
	}

	pub fn frames(&self) -> &F {
		&self.frames
	}

	pub fn frames_mut(&mut self) -> &mut F {
		&mut self.frames
	}
}
