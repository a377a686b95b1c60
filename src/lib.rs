//! party-popper: confetti fireworks on an HTML canvas.
//!
//! This crate provides a WASM canvas component that launches rising bombs
//! and bursts them into confetti, sparks and concentric rings, with a
//! start/stop trigger and explosion sounds.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::party_popper::{
	Archetype, Bomb, CanvasSurface, Color, CueBank, CueSink, Emitter, FrameRequester,
	FrameScheduler, FrameStep, Muted, Particle, PartyPopper, PopperConfig, SetupError,
	Simulation, SimulationRegistry, Surface, Theme, TickOutcome,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("party-popper: logging initialized");
}

/// Load show configuration from a script element with id="popper-config".
/// Expected format: JSON object with any subset of [`PopperConfig`] fields.
fn load_config() -> Option<PopperConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("popper-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<PopperConfig>(&json_text) {
		Ok(config) => {
			info!(
				"party-popper: loaded config, spawn chance {}, {} sounds",
				config.spawn_chance,
				config.sounds.len()
			);
			Some(config.sanitized())
		}
		Err(e) => {
			warn!("party-popper: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the show configuration from the DOM and renders the popper.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let config_signal = Signal::derive(move || config.clone());

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Party Popper" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-popper">
			<PartyPopper config=config_signal />
		</div>
	}
}
