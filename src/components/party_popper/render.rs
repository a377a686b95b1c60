//! Render pass: wipe the surface, then paint bombs under particles.

use super::registry::SimulationRegistry;
use super::surface::Surface;

/// Clear the whole surface to transparent.
pub fn clear<S: Surface + ?Sized>(surface: &mut S) {
	let (w, h) = (surface.width(), surface.height());
	surface.clear_rect(0.0, 0.0, w, h);
}

/// Paint every live entity. Expired particles are skipped; they are culled
/// at the end of the tick and must not flash one last time.
pub fn render<S: Surface + ?Sized>(registry: &SimulationRegistry, surface: &mut S) {
	for bomb in registry.bombs() {
		bomb.draw(surface);
	}
	for particle in registry.particles() {
		if !particle.is_expired() {
			particle.draw(surface);
		}
	}
}
