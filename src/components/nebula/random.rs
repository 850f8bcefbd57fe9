//! Uniform scalar sampling helpers.

use std::ops::Range;

use rand::Rng;

/// Sample uniformly from `[range.start, range.end)`.
///
/// An empty range yields `range.start` rather than panicking like `Rng::gen_range`.
pub fn random_range<R: Rng + ?Sized>(rng: &mut R, range: &Range<f64>) -> f64 {
	rng.r#gen::<f64>() * (range.end - range.start) + range.start
}

/// Sample a unit uniform in `[0, 1)`.
pub fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	rng.r#gen::<f64>()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	#[test]
	fn test_random_range_bounds() {
		let mut rng = SmallRng::seed_from_u64(7);
		for _ in 0..10_000 {
			let v = random_range(&mut rng, &(0.5..2.5));
			assert!((0.5..2.5).contains(&v));
		}
	}

	#[test]
	fn test_random_range_negative_span() {
		let mut rng = SmallRng::seed_from_u64(11);
		let jitter = std::f64::consts::PI / 8.0;
		for _ in 0..1_000 {
			let v = random_range(&mut rng, &(-jitter..jitter));
			assert!(v >= -jitter && v < jitter);
		}
	}

	#[test]
	fn test_degenerate_range() {
		let mut rng = SmallRng::seed_from_u64(3);
		assert_eq!(random_range(&mut rng, &(4.0..4.0)), 4.0);
	}
}
