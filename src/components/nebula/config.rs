//! Tuning constants for the nebula simulation.
//!
//! Motion is measured in ticks (one per displayed frame); pointer debouncing
//! is measured in milliseconds.

use std::f64::consts::{PI, TAU};
use std::ops::Range;

/// Where and how particles are (re)born.
#[derive(Clone, Debug)]
pub struct SpawnConfig {
	/// Spawn radius as a fraction of the smaller surface side. Multiplied by
	/// the product of two unit uniforms, biasing spawns toward the center.
	pub central_bias: f64,
	/// Angle range for the spawn direction around the center.
	pub angle: Range<f64>,
	/// Initial speed along the outward heading.
	pub speed: Range<f64>,
	/// Jitter added to the spawn angle to get the velocity heading.
	pub heading_jitter: Range<f64>,
	/// Opacity at (re)spawn.
	pub opacity: Range<f64>,
	/// Drawn radius in pixels.
	pub radius: Range<f64>,
	/// Opacity lost per tick. Sampled once per particle, kept across resets.
	pub fade_speed: Range<f64>,
}

/// Per-tick motion parameters.
#[derive(Clone, Debug)]
pub struct MotionConfig {
	/// Velocity multiplier applied every tick.
	pub friction: f64,
	/// A particle further than `escape_factor * max(width, height)` from the
	/// center is respawned.
	pub escape_factor: f64,
}

/// Pointer interaction parameters.
#[derive(Clone, Debug)]
pub struct PointerConfig {
	/// No force is applied within this distance of the pointer.
	pub dead_zone: f64,
	/// Acceleration toward a moving pointer.
	pub pull: f64,
	/// Acceleration away from a resting pointer. Deliberately gentler than `pull`.
	pub push: f64,
	/// Quiet time after the last move before the pointer counts as resting.
	pub settle_ms: f64,
}

/// Complete simulation configuration.
#[derive(Clone, Debug)]
pub struct NebulaConfig {
	/// Size of the particle pool.
	pub particle_count: usize,
	/// Spawn placement and appearance.
	pub spawn: SpawnConfig,
	/// Friction and escape distance.
	pub motion: MotionConfig,
	/// Pointer force and debounce.
	pub pointer: PointerConfig,
}

impl Default for NebulaConfig {
	fn default() -> Self {
		Self {
			particle_count: 500,
			spawn: SpawnConfig {
				central_bias: 0.5,
				angle: 0.0..TAU,
				speed: 0.1..0.5,
				heading_jitter: -PI / 8.0..PI / 8.0,
				opacity: 0.5..1.0,
				radius: 0.5..2.5,
				fade_speed: 0.002..0.008,
			},
			motion: MotionConfig {
				friction: 0.97,
				escape_factor: 0.9,
			},
			pointer: PointerConfig {
				dead_zone: 20.0,
				pull: 0.1,
				push: 0.05,
				settle_ms: 150.0,
			},
		}
	}
}
