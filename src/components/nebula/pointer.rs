//! Pointer tracking with a debounced "moving" flag.
//!
//! The flag behaves like a monostable timer: every move re-arms a deadline,
//! and the pointer counts as moving until that deadline passes unrefreshed.
//! The deadline is compared against the caller's clock when the state is
//! sampled, so no host timer is needed.

/// Snapshot of the pointer as seen by one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
	/// Surface-relative position, `None` while the pointer is outside.
	pub position: Option<(f64, f64)>,
	/// Whether a move arrived within the settle window.
	pub moving: bool,
}

/// Last known pointer position and move deadline.
#[derive(Clone, Debug)]
pub struct PointerState {
	position: Option<(f64, f64)>,
	moving_until: Option<f64>,
	settle_ms: f64,
}

impl PointerState {
	/// Absent pointer; moves stay "moving" for `settle_ms`.
	pub fn new(settle_ms: f64) -> Self {
		Self {
			position: None,
			moving_until: None,
			settle_ms,
		}
	}

	/// Record a move at time `now_ms`.
	pub fn on_move(&mut self, x: f64, y: f64, now_ms: f64) {
		self.position = Some((x, y));
		self.moving_until = Some(now_ms + self.settle_ms);
	}

	/// The pointer left the surface.
	pub fn on_leave(&mut self) {
		self.position = None;
		self.moving_until = None;
	}

	/// Last known position, if the pointer is over the surface.
	pub fn position(&self) -> Option<(f64, f64)> {
		self.position
	}

	/// True while `now_ms` is inside the window armed by the last move.
	pub fn is_moving(&self, now_ms: f64) -> bool {
		self.position.is_some() && self.moving_until.is_some_and(|deadline| now_ms < deadline)
	}

	/// Freeze the state for one frame.
	pub fn sample(&self, now_ms: f64) -> PointerSample {
		PointerSample {
			position: self.position,
			moving: self.is_moving(now_ms),
		}
	}
}
