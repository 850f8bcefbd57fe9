//! [`Surface`] backed by an HTML canvas 2D context.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::surface::{Bounds, Surface};
use super::theme::Color;

/// Paints onto a canvas element. Dimensions are read live from the element,
/// so resizing the canvas is picked up on the next frame.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap a canvas and its 2D context.
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}

	/// Resize the backing store. Callers follow up with `Simulation::resize`.
	pub fn set_size(&self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}
}

impl Surface for CanvasSurface {
	fn size(&self) -> Bounds {
		Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(x, y, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.fill();
		self.ctx.close_path();
	}
}
