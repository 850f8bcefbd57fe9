//! A single nebula particle: spawn placement, per-tick motion, and drawing.

use rand::Rng;

use super::config::{NebulaConfig, SpawnConfig};
use super::pointer::PointerSample;
use super::random::{random_range, unit};
use super::surface::{Bounds, Surface};
use super::theme::{Color, Palette};

/// Everything a particle reads during one update.
#[derive(Clone, Copy, Debug)]
pub struct FrameContext<'a> {
	/// Surface size this frame.
	pub bounds: Bounds,
	/// Pointer as sampled at the start of the frame.
	pub pointer: PointerSample,
	/// Simulation constants.
	pub config: &'a NebulaConfig,
	/// Colors used on respawn.
	pub palette: &'a Palette,
}

/// A single glowing particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity, pixels per tick.
	pub vx: f64,
	/// Vertical velocity, pixels per tick.
	pub vy: f64,
	/// Surface center x as of the last update or reset.
	pub origin_x: f64,
	/// Surface center y as of the last update or reset.
	pub origin_y: f64,
	/// Drawn radius in pixels.
	pub radius: f64,
	/// Palette color; alpha comes from `opacity`.
	pub color: Color,
	/// Current opacity, only raised by a reset.
	pub opacity: f64,
	/// Opacity lost per tick.
	pub fade_speed: f64,
}

/// Position and velocity for a freshly (re)born particle.
struct Placement {
	origin: (f64, f64),
	x: f64,
	y: f64,
	vx: f64,
	vy: f64,
}

impl Placement {
	/// Center-biased placement heading roughly outward.
	///
	/// The spawn distance is `U1 * U2 * bias * min_side`: the product of two
	/// uniforms piles samples up near the center, giving the nebula a dense core.
	fn sample<R: Rng + ?Sized>(bounds: Bounds, spawn: &SpawnConfig, rng: &mut R) -> Self {
		let origin = bounds.center();
		let angle = random_range(rng, &spawn.angle);
		let reach = bounds.min_side().max(0.0) * spawn.central_bias;
		let distance = unit(rng) * unit(rng) * reach;

		let speed = random_range(rng, &spawn.speed);
		let heading = angle + random_range(rng, &spawn.heading_jitter);

		Self {
			origin,
			x: origin.0 + angle.cos() * distance,
			y: origin.1 + angle.sin() * distance,
			vx: heading.cos() * speed,
			vy: heading.sin() * speed,
		}
	}
}

impl Particle {
	/// Create a particle with a fresh placement, look, and fade speed.
	pub fn spawn<R: Rng + ?Sized>(
		bounds: Bounds,
		spawn: &SpawnConfig,
		palette: &Palette,
		rng: &mut R,
	) -> Self {
		let placement = Placement::sample(bounds, spawn, rng);
		Self {
			x: placement.x,
			y: placement.y,
			vx: placement.vx,
			vy: placement.vy,
			origin_x: placement.origin.0,
			origin_y: placement.origin.1,
			radius: random_range(rng, &spawn.radius),
			color: palette.choose(rng),
			opacity: random_range(rng, &spawn.opacity),
			fade_speed: random_range(rng, &spawn.fade_speed),
		}
	}

	/// Respawn in place. `fade_speed` survives the reset.
	pub fn reset<R: Rng + ?Sized>(
		&mut self,
		bounds: Bounds,
		spawn: &SpawnConfig,
		palette: &Palette,
		rng: &mut R,
	) {
		let placement = Placement::sample(bounds, spawn, rng);
		self.origin_x = placement.origin.0;
		self.origin_y = placement.origin.1;
		self.x = placement.x;
		self.y = placement.y;
		self.vx = placement.vx;
		self.vy = placement.vy;
		self.opacity = random_range(rng, &spawn.opacity);
		self.radius = random_range(rng, &spawn.radius);
		self.color = palette.choose(rng);
	}

	/// Advance one tick: pointer force, friction, motion, fade, and respawn.
	pub fn update<R: Rng + ?Sized>(&mut self, frame: &FrameContext<'_>, rng: &mut R) {
		let config = frame.config;
		(self.origin_x, self.origin_y) = frame.bounds.center();

		if let Some((px, py)) = frame.pointer.position {
			let (dx, dy) = (px - self.x, py - self.y);
			let distance = (dx * dx + dy * dy).sqrt();

			if distance > config.pointer.dead_zone {
				let (ux, uy) = (dx / distance, dy / distance);
				if frame.pointer.moving {
					self.vx += ux * config.pointer.pull;
					self.vy += uy * config.pointer.pull;
				} else {
					self.vx -= ux * config.pointer.push;
					self.vy -= uy * config.pointer.push;
				}
			}
		}

		self.vx *= config.motion.friction;
		self.vy *= config.motion.friction;
		self.x += self.vx;
		self.y += self.vy;

		if self.opacity > 0.0 {
			self.opacity = (self.opacity - self.fade_speed).max(0.0);
		}

		if self.opacity <= 0.0 || self.distance_from_origin() > self.escape_distance(frame) {
			self.reset(frame.bounds, &config.spawn, frame.palette, rng);
		}
	}

	/// Paint a filled circle at the current opacity.
	pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
		surface.fill_circle(
			self.x,
			self.y,
			self.radius,
			self.color.with_alpha(self.opacity),
		);
	}

	/// Distance from the last known surface center.
	pub fn distance_from_origin(&self) -> f64 {
		let (dx, dy) = (self.x - self.origin_x, self.y - self.origin_y);
		(dx * dx + dy * dy).sqrt()
	}

	fn escape_distance(&self, frame: &FrameContext<'_>) -> f64 {
		frame.bounds.max_side() * frame.config.motion.escape_factor
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::nebula::surface::recording::RecordingSurface;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn context<'a>(
		bounds: Bounds,
		pointer: PointerSample,
		config: &'a NebulaConfig,
		palette: &'a Palette,
	) -> FrameContext<'a> {
		FrameContext {
			bounds,
			pointer,
			config,
			palette,
		}
	}

	/// A particle at rest in the middle of an 800x600 surface.
	fn resting_particle() -> Particle {
		Particle {
			x: 400.0,
			y: 300.0,
			vx: 0.0,
			vy: 0.0,
			origin_x: 400.0,
			origin_y: 300.0,
			radius: 1.0,
			color: Color::rgb(255, 255, 255),
			opacity: 1.0,
			fade_speed: 0.002,
		}
	}

	#[test]
	fn test_spawn_ranges() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(42);
		let bounds = Bounds::new(800.0, 600.0);

		for _ in 0..1_000 {
			let p = Particle::spawn(bounds, &config.spawn, &palette, &mut rng);
			assert!((0.5..1.0).contains(&p.opacity));
			assert!((0.5..2.5).contains(&p.radius));
			assert!((0.002..0.008).contains(&p.fade_speed));
			assert!(p.distance_from_origin() <= 300.0);
			let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
			assert!(speed >= 0.1 - 1e-9 && speed < 0.5);
			assert!(palette.colors().contains(&p.color));
		}
	}

	#[test]
	fn test_velocity_points_outward() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(5);
		let bounds = Bounds::new(1000.0, 1000.0);

		for _ in 0..1_000 {
			let p = Particle::spawn(bounds, &config.spawn, &palette, &mut rng);
			let (ox, oy) = (p.x - p.origin_x, p.y - p.origin_y);
			let len = (ox * ox + oy * oy).sqrt();
			if len < 1e-6 {
				continue;
			}
			let speed = (p.vx * p.vx + p.vy * p.vy).sqrt();
			let cos = (ox * p.vx + oy * p.vy) / (len * speed);
			// Heading is within pi/8 of the spawn angle.
			assert!(cos >= (std::f64::consts::PI / 8.0).cos() - 1e-9);
		}
	}

	#[test]
	fn test_reset_is_center_biased() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(2024);
		let bounds = Bounds::new(1000.0, 1000.0);
		let mut particle = Particle::spawn(bounds, &config.spawn, &palette, &mut rng);

		let mut distances: Vec<f64> = (0..10_000)
			.map(|_| {
				particle.reset(bounds, &config.spawn, &palette, &mut rng);
				particle.distance_from_origin()
			})
			.collect();

		assert!(distances.iter().all(|&d| d <= 500.0 + 1e-9));

		distances.sort_by(|a, b| a.total_cmp(b));
		let median = distances[distances.len() / 2];
		let uniform_disk_median = 500.0 / 2f64.sqrt();
		assert!(
			median < uniform_disk_median,
			"median {median} not below {uniform_disk_median}"
		);
	}

	#[test]
	fn test_reset_keeps_fade_speed() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(9);
		let bounds = Bounds::new(800.0, 600.0);
		let mut particle = Particle::spawn(bounds, &config.spawn, &palette, &mut rng);
		let fade = particle.fade_speed;

		for _ in 0..50 {
			particle.reset(bounds, &config.spawn, &palette, &mut rng);
			assert_eq!(particle.fade_speed, fade);
		}
	}

	#[test]
	fn test_draw_has_no_side_effects() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(77);
		let mut surface = RecordingSurface::new(800.0, 600.0);
		let particle = Particle::spawn(surface.bounds, &config.spawn, &palette, &mut rng);
		let before = particle.clone();

		particle.draw(&mut surface);
		particle.draw(&mut surface);

		assert_eq!(surface.calls.len(), 2);
		assert_eq!(surface.calls[0], surface.calls[1]);
		assert_eq!(particle, before);
	}

	#[test]
	fn test_draw_uses_current_opacity() {
		use crate::components::nebula::surface::recording::Paint;

		let mut surface = RecordingSurface::new(800.0, 600.0);
		let mut particle = resting_particle();
		particle.opacity = 0.25;
		particle.draw(&mut surface);

		assert_eq!(
			surface.calls,
			vec![Paint::Circle {
				x: 400.0,
				y: 300.0,
				radius: 1.0,
				color: Color::rgba(255, 255, 255, 0.25),
			}]
		);
	}

	#[test]
	fn test_faded_particle_resets() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(13);
		let bounds = Bounds::new(800.0, 600.0);
		let frame = context(bounds, PointerSample::default(), &config, &palette);

		let mut particle = resting_particle();
		particle.opacity = 0.0001;
		particle.fade_speed = 0.0001;
		particle.update(&frame, &mut rng);

		assert!((0.5..1.0).contains(&particle.opacity));
		assert!(particle.distance_from_origin() <= 300.0);
		assert_eq!((particle.origin_x, particle.origin_y), (400.0, 300.0));
	}

	#[test]
	fn test_escaped_particle_resets() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(21);
		let bounds = Bounds::new(800.0, 600.0);
		let frame = context(bounds, PointerSample::default(), &config, &palette);

		// 0.9 * 800 = 720 from the center.
		let mut particle = resting_particle();
		particle.x = 400.0 + 730.0;
		particle.update(&frame, &mut rng);
		assert!(particle.distance_from_origin() <= 300.0);

		let mut inside = resting_particle();
		inside.x = 400.0 + 700.0;
		inside.update(&frame, &mut rng);
		assert!(inside.distance_from_origin() > 690.0);
	}

	#[test]
	fn test_moving_pointer_pulls() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(1);
		let pointer = PointerSample {
			position: Some((500.0, 300.0)),
			moving: true,
		};
		let frame = context(Bounds::new(800.0, 600.0), pointer, &config, &palette);

		let mut particle = resting_particle();
		particle.update(&frame, &mut rng);

		assert!(particle.vx > 0.0);
		assert!((particle.vx - 0.1 * 0.97).abs() < 1e-12);
		assert_eq!(particle.vy, 0.0);
	}

	#[test]
	fn test_resting_pointer_pushes() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(1);
		let pointer = PointerSample {
			position: Some((500.0, 300.0)),
			moving: false,
		};
		let frame = context(Bounds::new(800.0, 600.0), pointer, &config, &palette);

		let mut particle = resting_particle();
		particle.update(&frame, &mut rng);

		assert!(particle.vx < 0.0);
		assert!((particle.vx + 0.05 * 0.97).abs() < 1e-12);
	}

	#[test]
	fn test_dead_zone_has_no_force() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(1);
		let pointer = PointerSample {
			position: Some((415.0, 300.0)),
			moving: true,
		};
		let frame = context(Bounds::new(800.0, 600.0), pointer, &config, &palette);

		let mut particle = resting_particle();
		particle.update(&frame, &mut rng);

		assert_eq!((particle.vx, particle.vy), (0.0, 0.0));
		assert_eq!((particle.x, particle.y), (400.0, 300.0));
	}

	#[test]
	fn test_friction_and_integration() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(1);
		let frame = context(
			Bounds::new(800.0, 600.0),
			PointerSample::default(),
			&config,
			&palette,
		);

		let mut particle = resting_particle();
		particle.vx = 1.0;
		particle.vy = -2.0;
		particle.update(&frame, &mut rng);

		assert!((particle.vx - 0.97).abs() < 1e-12);
		assert!((particle.vy + 1.94).abs() < 1e-12);
		assert!((particle.x - 400.97).abs() < 1e-9);
		assert!((particle.y - 298.06).abs() < 1e-9);
		assert!((particle.opacity - 0.998).abs() < 1e-12);
	}

	#[test]
	fn test_origin_follows_surface() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(1);
		let frame = context(
			Bounds::new(1000.0, 700.0),
			PointerSample::default(),
			&config,
			&palette,
		);

		let mut particle = resting_particle();
		particle.update(&frame, &mut rng);
		assert_eq!((particle.origin_x, particle.origin_y), (500.0, 350.0));
	}

	#[test]
	fn test_opacity_never_increases_between_resets() {
		let config = NebulaConfig::default();
		let palette = Palette::nebula().unwrap();
		let mut rng = SmallRng::seed_from_u64(99);
		let bounds = Bounds::new(800.0, 600.0);
		let frame = context(bounds, PointerSample::default(), &config, &palette);
		let mut particle = Particle::spawn(bounds, &config.spawn, &palette, &mut rng);

		let mut resets = 0;
		for _ in 0..2_000 {
			let before = particle.opacity;
			particle.update(&frame, &mut rng);
			if particle.opacity > before {
				// Only a reset may raise opacity, and it lands in the spawn range.
				assert!((0.5..1.0).contains(&particle.opacity));
				resets += 1;
			}
			assert!((0.0..=1.0).contains(&particle.opacity));
			assert!((0.5..=2.5).contains(&particle.radius));
		}
		assert!(resets > 0);
	}
}
