//! Leptos component wrapping the party popper canvas.
//!
//! The component creates a canvas sized to its container plus the trigger
//! button. The simulation is driven by `requestAnimationFrame`; the button
//! starts and stops it, and a window resize listener keeps the canvas
//! matched to its container.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent, Window};

use super::audio::{CueBank, CueSink};
use super::error::SetupError;
use super::scheduler::FrameRequester;
use super::state::Simulation;
use super::surface::CanvasSurface;
use super::types::PopperConfig;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;
type ResizeCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules the stored frame callback with `requestAnimationFrame`.
struct AnimationFrames {
	callback: FrameCallback,
	// Id of the latest request, cancelled on unmount.
	handle: Rc<Cell<Option<i32>>>,
}

impl FrameRequester for AnimationFrames {
	fn request_frame(&mut self) -> bool {
		let Some(window) = web_sys::window() else {
			return false;
		};
		let Some(ref cb) = *self.callback.borrow() else {
			return false;
		};
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => {
				self.handle.set(Some(id));
				true
			}
			Err(_) => false,
		}
	}
}

type BrowserShow = Simulation<CanvasSurface, CueBank, AnimationFrames>;

/// Renders the fireworks canvas with its start/stop trigger.
///
/// The canvas fills its parent container and follows it on window resize.
/// Nothing animates until the trigger is pressed.
#[component]
pub fn PartyPopper(#[prop(into)] config: Signal<PopperConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let show: Rc<RefCell<Option<BrowserShow>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: ResizeCallback = Rc::new(RefCell::new(None));
	let frame_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let running = RwSignal::new(false);
	let (show_init, animate_init, resize_cb_init, handle_init) = (
		show.clone(),
		animate.clone(),
		resize_cb.clone(),
		frame_handle.clone(),
	);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if show_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window): Option<Window> = web_sys::window() else {
			warn!("party-popper: {}", SetupError::NoWindow);
			return;
		};

		let surface = match CanvasSurface::attach(canvas) {
			Ok(surface) => surface,
			Err(e) => {
				warn!("party-popper: {}", e);
				return;
			}
		};
		surface.fit_to_container();

		let config = config.get_untracked().sanitized();
		let (cues, failures) = CueBank::load(&config.sounds, config.volume);
		for failure in &failures {
			warn!("party-popper: {}", failure);
		}
		if cues.cue_count() == 0 {
			info!("party-popper: no sound cues available, running muted");
		}

		let frames = AnimationFrames {
			callback: animate_init.clone(),
			handle: handle_init.clone(),
		};
		*show_init.borrow_mut() = Some(Simulation::new(&config, surface, cues, frames));

		let show_anim = show_init.clone();
		*animate_init.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
			if let Some(ref mut s) = *show_anim.borrow_mut() {
				s.tick(timestamp);
			}
		}));

		let show_resize = show_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref s) = *show_resize.borrow() {
				s.surface().fit_to_container();
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	let teardown = SendWrapper::new((show.clone(), animate, resize_cb, frame_handle));
	on_cleanup(move || {
		let (show, animate, resize_cb, frame_handle) = teardown.take();
		if let Some(ref mut s) = *show.borrow_mut() {
			s.stop();
		}
		if let Some(window) = web_sys::window() {
			if let Some(id) = frame_handle.take() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
		resize_cb.borrow_mut().take();
		animate.borrow_mut().take();
		show.borrow_mut().take();
		debug!("party-popper: unmounted");
	});

	let show_click = show.clone();
	let on_toggle = move |_: MouseEvent| {
		if let Some(ref mut s) = *show_click.borrow_mut() {
			running.set(s.toggle());
		}
	};

	view! {
		<div class="party-popper">
			<canvas
				node_ref=canvas_ref
				class="party-popper-canvas"
				style="display: block; width: 100%; height: 100%;"
			/>
			<button class="party-popper-trigger" on:click=on_toggle>
				{move || if running.get() { "Stop" } else { "Start" }}
			</button>
		</div>
	}
}
