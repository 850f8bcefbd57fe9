//! The 2D paint surface the simulation draws onto.
//!
//! The simulation never touches the DOM directly; it paints through the
//! [`Surface`] trait, which the browser canvas implements in
//! [`super::canvas`]. Tests substitute a recorder.

use super::theme::Color;

/// Surface dimensions in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	/// Width in pixels.
	pub width: f64,
	/// Height in pixels.
	pub height: f64,
}

impl Bounds {
	/// Bounds of `width` by `height`.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Midpoint of the surface.
	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// The shorter side.
	pub fn min_side(&self) -> f64 {
		self.width.min(self.height)
	}

	/// The longer side.
	pub fn max_side(&self) -> f64 {
		self.width.max(self.height)
	}

	/// Nothing can be placed on a surface with a zero (or negative) side.
	pub fn is_degenerate(&self) -> bool {
		self.min_side() <= 0.0
	}
}

/// Paint operations consumed by the render loop.
pub trait Surface {
	/// Current dimensions. May change between frames when the host resizes.
	fn size(&self) -> Bounds;

	/// Fill an axis-aligned rectangle.
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Color);

	/// Fill a circle centered at `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
}
