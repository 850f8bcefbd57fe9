//! The nebula simulation: particles, pointer, and the surface they draw on.
//!
//! One `Simulation` is created when the canvas mounts. Pointer events, window
//! resizes, and animation frames all reach it on the browser's main thread,
//! so it is shared between those callbacks as `Rc<RefCell<Simulation<_>>>`.

use log::debug;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::config::NebulaConfig;
use super::field::ParticleField;
use super::particle::FrameContext;
use super::pointer::PointerState;
use super::render;
use super::surface::Surface;
use super::theme::Theme;

/// Owns all simulation state and the surface handle.
pub struct Simulation<S: Surface> {
	surface: S,
	field: ParticleField,
	pointer: PointerState,
	config: NebulaConfig,
	theme: Theme,
	rng: SmallRng,
}

impl<S: Surface> Simulation<S> {
	/// Create a simulation seeded from OS entropy and populate the field.
	pub fn new(surface: S, config: NebulaConfig, theme: Theme) -> Self {
		Self::with_rng(surface, config, theme, SmallRng::from_entropy())
	}

	/// Create a simulation with a fixed seed, for reproducible runs.
	pub fn seeded(surface: S, config: NebulaConfig, theme: Theme, seed: u64) -> Self {
		Self::with_rng(surface, config, theme, SmallRng::seed_from_u64(seed))
	}

	fn with_rng(surface: S, config: NebulaConfig, theme: Theme, rng: SmallRng) -> Self {
		let pointer = PointerState::new(config.pointer.settle_ms);
		let mut simulation = Self {
			surface,
			field: ParticleField::new(),
			pointer,
			config,
			theme,
			rng,
		};
		simulation.reseed();
		simulation
	}

	/// The host changed the surface dimensions; re-seed against the new size.
	pub fn resize(&mut self) {
		let bounds = self.surface.size();
		debug!("nebula: resized to {}x{}", bounds.width, bounds.height);
		self.reseed();
	}

	/// Forward a pointer move at `now_ms`.
	pub fn on_pointer_move(&mut self, x: f64, y: f64, now_ms: f64) {
		self.pointer.on_move(x, y, now_ms);
	}

	/// The pointer left the surface.
	pub fn on_pointer_leave(&mut self) {
		self.pointer.on_leave();
	}

	/// Render one frame at time `now_ms`.
	pub fn tick(&mut self, now_ms: f64) {
		let frame = FrameContext {
			bounds: self.surface.size(),
			pointer: self.pointer.sample(now_ms),
			config: &self.config,
			palette: &self.theme.palette,
		};
		render::render_frame(
			&mut self.surface,
			&mut self.field,
			&frame,
			self.theme.trail_overlay,
			&mut self.rng,
		);
	}

	/// The particle pool.
	pub fn field(&self) -> &ParticleField {
		&self.field
	}

	/// Current pointer state.
	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	/// The surface being painted.
	pub fn surface(&self) -> &S {
		&self.surface
	}

	/// Mutable access to the surface.
	pub fn surface_mut(&mut self) -> &mut S {
		&mut self.surface
	}

	fn reseed(&mut self) {
		let bounds = self.surface.size();
		self.field
			.init(bounds, &self.config, &self.theme.palette, &mut self.rng);
	}
}
