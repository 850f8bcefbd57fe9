//! The fixed-size pool of nebula particles.

use log::{info, warn};
use rand::Rng;

use super::config::NebulaConfig;
use super::particle::Particle;
use super::surface::Bounds;
use super::theme::Palette;

/// Owns every particle. Slots are recycled through [`Particle::reset`] and
/// never removed; the whole pool is rebuilt only by [`ParticleField::init`].
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	/// An empty field; call [`ParticleField::init`] to populate it.
	pub fn new() -> Self {
		Self::default()
	}

	/// Discard all particles and seed `config.particle_count` new ones around
	/// the center of `bounds`.
	///
	/// A degenerate surface leaves the field empty until the next init.
	pub fn init<R: Rng + ?Sized>(
		&mut self,
		bounds: Bounds,
		config: &NebulaConfig,
		palette: &Palette,
		rng: &mut R,
	) {
		self.particles.clear();

		if bounds.is_degenerate() {
			warn!(
				"nebula: surface is {}x{}, no particles seeded",
				bounds.width, bounds.height
			);
			return;
		}

		self.particles.reserve(config.particle_count);
		for _ in 0..config.particle_count {
			self.particles
				.push(Particle::spawn(bounds, &config.spawn, palette, rng));
		}

		info!(
			"nebula: seeded {} particles on {}x{}",
			self.particles.len(),
			bounds.width,
			bounds.height
		);
	}

	/// All particles, in slot order.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Mutable access for the per-frame update.
	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	/// Number of live slots.
	pub fn len(&self) -> usize {
		self.particles.len()
	}

	/// True before the first init or on a degenerate surface.
	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
