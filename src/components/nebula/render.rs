//! Per-frame rendering for the nebula.
//!
//! Each frame is drawn in two passes:
//! 1. A translucent overlay over the whole surface, so earlier frames fade
//!    toward black and moving particles leave trails.
//! 2. Every particle is advanced one tick and painted at its new position.

use rand::Rng;

use super::field::ParticleField;
use super::particle::FrameContext;
use super::surface::Surface;
use super::theme::Color;

/// Renders one frame, advancing the simulation as it goes.
pub fn render_frame<S, R>(
	surface: &mut S,
	field: &mut ParticleField,
	frame: &FrameContext<'_>,
	overlay: Color,
	rng: &mut R,
) where
	S: Surface + ?Sized,
	R: Rng + ?Sized,
{
	draw_overlay(surface, frame, overlay);

	if frame.bounds.is_degenerate() {
		return;
	}

	for particle in field.particles_mut() {
		particle.update(frame, rng);
		particle.draw(surface);
	}
}

fn draw_overlay<S: Surface + ?Sized>(surface: &mut S, frame: &FrameContext<'_>, overlay: Color) {
	surface.fill_rect(0.0, 0.0, frame.bounds.width, frame.bounds.height, overlay);
}
