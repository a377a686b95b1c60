//! Confetti fireworks on an HTML canvas.
//!
//! Bombs rise from the bottom edge and burst at their apex into one of four
//! particle archetypes:
//! - burst confetti: tumbling squares and discs
//! - sparks: short-lived warm dots
//! - shell rings: concentric rings that swell as they expand
//! - radial spreads: concentric rings of fixed-size dots
//!
//! The simulation core ([`Simulation`] and everything it owns) only talks to
//! the browser through three seams, [`Surface`], [`CueSink`] and
//! [`FrameRequester`], so it can be driven deterministically off-browser.
//!
//! # Example
//!
//! ```ignore
//! use party_popper::{PartyPopper, PopperConfig};
//!
//! let config = PopperConfig { spawn_chance: 0.02, ..PopperConfig::default() };
//! view! { <PartyPopper config=config.into() /> }
//! ```

pub mod audio;
pub mod bomb;
mod component;
pub mod emitter;
pub mod error;
pub mod particles;
pub mod registry;
mod render;
pub mod scheduler;
pub mod state;
pub mod surface;
#[cfg(test)]
mod testing;
pub mod theme;
mod types;

pub use audio::{CueBank, CueSink, Muted};
pub use bomb::Bomb;
pub use component::PartyPopper;
pub use emitter::Emitter;
pub use error::SetupError;
pub use particles::{Archetype, Particle};
pub use registry::SimulationRegistry;
pub use scheduler::{FrameRequester, FrameScheduler, FrameStep};
pub use state::{Simulation, TickOutcome};
pub use surface::{CanvasSurface, Surface};
pub use theme::{Color, Theme};
pub use types::PopperConfig;
