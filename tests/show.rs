//! End-to-end runs of the simulation against recording collaborators.

#![allow(unused_crate_dependencies)]

use party_popper::{
	Bomb, Color, CueSink, FrameRequester, Muted, PopperConfig, Simulation, Surface, TickOutcome,
};

const FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Default)]
struct CountingSurface {
	clears: usize,
	circles: usize,
}

impl Surface for CountingSurface {
	fn width(&self) -> f64 {
		800.0
	}
	fn height(&self) -> f64 {
		600.0
	}
	fn clear_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {
		self.clears += 1;
	}
	fn fill_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {}
	fn fill_circle(&mut self, _: f64, _: f64, _: f64) {
		self.circles += 1;
	}
	fn save(&mut self) {}
	fn restore(&mut self) {}
	fn set_global_alpha(&mut self, alpha: f64) {
		assert!((0.0..=1.0).contains(&alpha), "alpha {alpha} escaped the clamp");
	}
	fn set_fill_color(&mut self, _: Color) {}
	fn translate(&mut self, _: f64, _: f64) {}
	fn rotate(&mut self, _: f64) {}
}

#[derive(Default)]
struct Cues {
	played: usize,
}

impl CueSink for Cues {
	fn cue_count(&self) -> usize {
		7
	}
	fn play(&mut self, _: usize) {
		self.played += 1;
	}
}

/// Frame queue the test drains by hand.
#[derive(Default)]
struct Frames {
	outstanding: usize,
	refuse: bool,
}

impl FrameRequester for Frames {
	fn request_frame(&mut self) -> bool {
		if self.refuse {
			return false;
		}
		self.outstanding += 1;
		true
	}
}

fn config(spawn_chance: f64) -> PopperConfig {
	PopperConfig {
		spawn_chance,
		seed: Some(1234),
		..PopperConfig::default()
	}
}

/// Deliver one outstanding frame if there is one.
fn deliver<S: Surface, A: CueSink>(
	sim: &mut Simulation<S, A, Frames>,
	timestamp: f64,
) -> Option<TickOutcome> {
	if sim.frames().outstanding == 0 {
		return None;
	}
	sim.frames_mut().outstanding -= 1;
	Some(sim.tick(timestamp))
}

#[test]
fn bomb_detonates_once_at_its_apex() {
	let mut sim = Simulation::new(
		&config(0.0),
		CountingSurface::default(),
		Cues::default(),
		Frames::default(),
	);
	sim.registry
		.push_bomb(Bomb::with_motion(400.0, 580.0, 10.0, 0.0, 0.1));
	sim.start();

	let mut detonated_on = None;
	let mut detonations = 0;
	for tick in 0..200 {
		let Some(outcome) = deliver(&mut sim, tick as f64 * FRAME_MS) else {
			panic!("loop stopped requesting frames");
		};
		if let TickOutcome::Rendered { detonations: n, .. } = outcome {
			if n > 0 {
				if detonated_on.is_none() {
					detonated_on = Some(tick);
				}
				assert!(sim.registry.bombs().is_empty(), "bomb outlived its detonation tick");
			}
			detonations += n;
		}
	}

	// First tick covers zero time, then ~100 frames of 0.1 gravity.
	let tick = detonated_on.expect("bomb never detonated");
	assert!((100..=102).contains(&tick), "detonated on tick {tick}");
	assert_eq!(detonations, 1);
	assert_eq!(sim.audio().played, 1);
}

#[test]
fn certain_spawn_adds_exactly_one_bomb_per_tick() {
	let mut sim = Simulation::new(&config(1.0), CountingSurface::default(), Muted, Frames::default());
	sim.start();

	for (i, timestamp) in [0.0, 0.0, 100.0, 100.5, 250.0, 250.0].into_iter().enumerate() {
		deliver(&mut sim, timestamp).expect("frame requested");
		assert_eq!(sim.registry.bombs().len(), i + 1);
	}
}

#[test]
fn double_start_keeps_one_loop() {
	let mut sim = Simulation::new(&config(0.0), CountingSurface::default(), Muted, Frames::default());
	sim.start();
	sim.start();
	assert_eq!(sim.frames().outstanding, 1);

	// One simulated second at 60 Hz.
	let mut ticks = 0;
	while ticks < 60 && deliver(&mut sim, ticks as f64 * FRAME_MS).is_some() {
		ticks += 1;
	}
	assert_eq!(sim.surface().clears, 60);
	assert_eq!(sim.frames().outstanding, 1);
}

#[test]
fn stopped_show_drains_and_restarts_cleanly() {
	let mut sim = Simulation::new(&config(0.5), CountingSurface::default(), Muted, Frames::default());
	sim.start();
	for tick in 0..30 {
		deliver(&mut sim, tick as f64 * FRAME_MS);
	}
	sim.stop();

	assert_eq!(deliver(&mut sim, 30.0 * FRAME_MS), Some(TickOutcome::Halted));
	assert_eq!(deliver(&mut sim, 31.0 * FRAME_MS), None);
	let clears = sim.surface().clears;

	sim.start();
	let outcome = deliver(&mut sim, 10_000.0).expect("restart requested a frame");
	assert!(matches!(outcome, TickOutcome::Rendered { elapsed, .. } if elapsed == 0.0));
	assert_eq!(sim.surface().clears, clears + 1);
}

#[test]
fn long_show_never_keeps_expired_particles() {
	let mut sim = Simulation::new(
		&config(0.05),
		CountingSurface::default(),
		Cues::default(),
		Frames::default(),
	);
	sim.start();

	let mut peak = 0;
	for tick in 0..3000 {
		deliver(&mut sim, tick as f64 * FRAME_MS).expect("loop kept running");
		assert!(sim.registry.particles().iter().all(|p| !p.is_expired()));
		assert!(sim.registry.bombs().iter().all(|b| !b.has_detonated()));
		peak = peak.max(sim.registry.particles().len());
	}
	assert!(peak > 0, "no bursts in 3000 ticks");
	assert!(sim.audio().played > 0);
}

#[test]
fn hostile_config_still_fades_and_detonates() {
	let config = PopperConfig {
		reference_fps: -60.0,
		spawn_chance: f64::NAN,
		seed: Some(99),
		..PopperConfig::default()
	};
	let mut sim = Simulation::new(&config, CountingSurface::default(), Cues::default(), Frames::default());
	sim.registry
		.push_bomb(Bomb::with_motion(400.0, 580.0, 10.0, 0.0, 0.1));
	sim.start();

	let mut launched_any = false;
	for tick in 0..600 {
		let outcome = deliver(&mut sim, tick as f64 * 16.0).expect("loop kept running");
		if let TickOutcome::Rendered { launched, .. } = outcome {
			launched_any |= launched;
		}
		for bomb in sim.registry.bombs() {
			assert!(bomb.opacity <= 1.0);
			assert!(bomb.y <= 580.0);
		}
		assert!(sim.registry.particles().iter().all(|p| p.opacity() <= 1.0));
	}

	assert!(!launched_any, "NaN spawn chance launched bombs");
	assert!(sim.registry.bombs().is_empty());
	assert_eq!(sim.audio().played, 1);
}

#[test]
fn start_after_a_refused_frame_resumes_the_loop() {
	let mut sim = Simulation::new(&config(0.0), CountingSurface::default(), Muted, Frames::default());
	sim.start();
	sim.frames_mut().refuse = true;
	deliver(&mut sim, 0.0).expect("first frame");
	assert_eq!(sim.frames().outstanding, 0);
	assert!(sim.is_running());

	sim.frames_mut().refuse = false;
	assert!(sim.start());
	assert!(deliver(&mut sim, 16.0).is_some());
	assert_eq!(sim.surface().clears, 2);
}
