//! Heart outline sampling.
//!
//! Uses the classic parametric heart
//! `x = 16 sin³t`, `y = 13 cos t − 5 cos 2t − 2 cos 3t − cos 4t`,
//! which spans roughly 32 × 30 units before scaling. Output is fully
//! deterministic for a given center and scale.

use std::f64::consts::TAU;

/// Angular step between samples.
const STEP: f64 = 0.1;

/// Viewport extent divided by this gives the heart scale.
const SCALE_DIVISOR: f64 = 60.0;

/// A point in canvas coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal position, growing right.
	pub x: f64,
	/// Vertical position, growing down.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

/// Scale factor for a viewport; zero for a degenerate viewport.
pub fn heart_scale(width: f64, height: f64) -> f64 {
	let extent = width.min(height);
	if extent > 0.0 { extent / SCALE_DIVISOR } else { 0.0 }
}

/// Unscaled curve point at parameter `t`, with y pointing up.
fn curve(t: f64) -> (f64, f64) {
	let x = 16.0 * t.sin().powi(3);
	let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
	(x, y)
}

/// Samples the heart outline around `center`, stopping after `max` points.
pub fn heart_points(center: Point, scale: f64, max: usize) -> Vec<Point> {
	(0..)
		.map(|i| i as f64 * STEP)
		.take_while(|&t| t < TAU)
		.take(max)
		.map(|t| {
			let (x, y) = curve(t);
			// Canvas y grows downward.
			Point::new(center.x + x * scale, center.y - y * scale)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn full_revolution_has_63_samples() {
		let points = heart_points(Point::new(0.0, 0.0), 1.0, usize::MAX);
		assert_eq!(points.len(), 63);
	}

	#[test]
	fn sampling_stops_at_max() {
		assert_eq!(heart_points(Point::new(0.0, 0.0), 1.0, 40).len(), 40);
		assert!(heart_points(Point::new(0.0, 0.0), 1.0, 0).is_empty());
	}

	#[test]
	fn first_point_is_top_notch() {
		// t = 0 gives (0, 5): the dip between the lobes, above center.
		let points = heart_points(Point::new(400.0, 300.0), 10.0, 1);
		assert_eq!(points, vec![Point::new(400.0, 250.0)]);
	}

	#[test]
	fn repeated_calls_are_identical() {
		let center = Point::new(512.0, 384.0);
		let scale = heart_scale(1024.0, 768.0);
		assert_eq!(heart_points(center, scale, 60), heart_points(center, scale, 60));
	}

	#[test]
	fn scale_uses_smaller_extent() {
		assert_eq!(heart_scale(1200.0, 600.0), 10.0);
		assert_eq!(heart_scale(300.0, 900.0), 5.0);
		assert_eq!(heart_scale(0.0, 900.0), 0.0);
	}
}
