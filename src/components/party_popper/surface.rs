//! The 2D drawing surface the show paints on.
//!
//! [`Surface`] is the narrow slice of the canvas API the simulation needs.
//! [`CanvasSurface`] forwards it to a real `CanvasRenderingContext2d`; tests
//! substitute a recorder.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::error::SetupError;
use super::theme::Color;

/// Paint operations used by the render pass.
///
/// `save`/`restore` bracket the transient state (alpha, translation,
/// rotation, fill color) exactly as on a canvas context.
pub trait Surface {
	fn width(&self) -> f64;
	fn height(&self) -> f64;
	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
	fn save(&mut self);
	fn restore(&mut self);
	fn set_global_alpha(&mut self, alpha: f64);
	fn set_fill_color(&mut self, color: Color);
	fn translate(&mut self, x: f64, y: f64);
	fn rotate(&mut self, angle: f64);
}

/// An HTML canvas and its 2D context.
///
/// Width and height are read from the element on every call so that
/// resizes made by the host take effect on the next tick.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn attach(canvas: HtmlCanvasElement) -> Result<Self, SetupError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|e| SetupError::ContextUnavailable(format!("{e:?}")))?
			.ok_or_else(|| SetupError::ContextUnavailable("no 2d context".into()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SetupError::ContextUnavailable("unexpected context type".into()))?;
		Ok(Self { canvas, ctx })
	}

	/// Size the backing store to the canvas' parent content box.
	pub fn fit_to_container(&self) {
		if let Some(parent) = self.canvas.parent_element() {
			self.canvas.set_width(parent.client_width().max(0) as u32);
			self.canvas.set_height(parent.client_height().max(0) as u32);
		}
	}
}

impl Surface for CanvasSurface {
	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.ctx.clear_rect(x, y, w, h);
	}

	fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
		self.ctx.fill_rect(x, y, w, h);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius.max(0.0), 0.0, 2.0 * PI);
		self.ctx.fill();
	}

	fn save(&mut self) {
		self.ctx.save();
	}

	fn restore(&mut self) {
		self.ctx.restore();
	}

	fn set_global_alpha(&mut self, alpha: f64) {
		self.ctx.set_global_alpha(alpha);
	}

	fn set_fill_color(&mut self, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
	}

	fn translate(&mut self, x: f64, y: f64) {
		let _ = self.ctx.translate(x, y);
	}

	fn rotate(&mut self, angle: f64) {
		let _ = self.ctx.rotate(angle);
	}
}
