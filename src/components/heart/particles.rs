//! Entity types and their constructors.
//!
//! Three independent kinds live side by side: anchored particles forming the
//! heart, a fixed pool of falling background dots, and short-lived sparkles
//! spawned in bursts. Anchored particles and dots are always rebuilt as a
//! whole; sparkles are the only kind added and removed one at a time.

use std::f64::consts::TAU;

use rand::Rng;

use super::geometry::{Point, heart_points};

/// Number of sparkles in a full click burst.
pub const BURST_SIZE: usize = 8;

/// Uniform sample in `[min, min + span)`. Safe for a zero span.
fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f64, span: f64) -> f64 {
	min + rng.random::<f64>() * span
}

/// One point of the heart silhouette.
#[derive(Clone, Debug, PartialEq)]
pub struct AnchoredParticle {
	/// Current horizontal position.
	pub x: f64,
	/// Current vertical position.
	pub y: f64,
	anchor: Point,
	/// Horizontal velocity in pixels per tick.
	pub vx: f64,
	/// Vertical velocity in pixels per tick.
	pub vy: f64,
	/// Base radius before pulsing.
	pub size: f64,
	/// Pulse offset in radians.
	pub phase: f64,
}

impl AnchoredParticle {
	/// A particle at rest on `anchor`.
	pub fn new(anchor: Point, size: f64, phase: f64) -> Self {
		Self {
			x: anchor.x,
			y: anchor.y,
			anchor,
			vx: 0.0,
			vy: 0.0,
			size,
			phase,
		}
	}

	/// Rest position; fixed for the particle's lifetime.
	pub fn anchor(&self) -> Point {
		self.anchor
	}

	/// Distance from the current position to the anchor.
	pub fn displacement(&self) -> f64 {
		(self.x - self.anchor.x).hypot(self.y - self.anchor.y)
	}
}

/// One ambient dot drifting down the background layer.
#[derive(Clone, Debug, PartialEq)]
pub struct FallingDot {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Drawn radius.
	pub radius: f64,
	/// Pixels fallen per tick.
	pub speed: f64,
	/// Fixed draw alpha.
	pub opacity: f64,
}

/// One fragment of a click burst.
#[derive(Clone, Debug, PartialEq)]
pub struct Sparkle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Glyph size in pixels.
	pub size: f64,
	/// Horizontal velocity in pixels per tick.
	pub vx: f64,
	/// Vertical velocity in pixels per tick.
	pub vy: f64,
	/// Current angle in radians.
	pub rotation: f64,
	/// Angle added per tick.
	pub spin: f64,
	/// Fades toward zero; the sparkle is removed at or below it.
	pub opacity: f64,
}

/// Builds the heart around `center`, at most `max` particles.
pub fn init_heart<R: Rng + ?Sized>(
	center: Point,
	scale: f64,
	max: usize,
	rng: &mut R,
) -> Vec<AnchoredParticle> {
	heart_points(center, scale, max)
		.into_iter()
		.map(|anchor| {
			let size = uniform(rng, 1.5, 2.0);
			let phase = uniform(rng, 0.0, TAU);
			AnchoredParticle::new(anchor, size, phase)
		})
		.collect()
}

/// Scatters `count` dots uniformly over a `width` × `height` area.
pub fn init_falling_dots<R: Rng + ?Sized>(
	width: f64,
	height: f64,
	count: usize,
	rng: &mut R,
) -> Vec<FallingDot> {
	(0..count)
		.map(|_| FallingDot {
			x: uniform(rng, 0.0, width),
			y: uniform(rng, 0.0, height),
			radius: uniform(rng, 0.8, 1.5),
			speed: uniform(rng, 0.3, 1.0),
			opacity: uniform(rng, 0.2, 0.4),
		})
		.collect()
}

/// Launch headings for a burst of `count` sparkles: evenly spread over a full
/// turn, each nudged forward by up to 0.3 rad.
pub fn burst_headings<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<f64> {
	(0..count)
		.map(|i| TAU * i as f64 / count as f64 + uniform(rng, 0.0, 0.3))
		.collect()
}

/// Appends a burst at `origin` without letting `sparkles` grow past `cap`.
///
/// Returns how many sparkles were added; zero when the cap is already reached.
pub fn burst<R: Rng + ?Sized>(
	sparkles: &mut Vec<Sparkle>,
	origin: Point,
	cap: usize,
	rng: &mut R,
) -> usize {
	let count = cap.min(BURST_SIZE);
	let room = cap.saturating_sub(sparkles.len());
	if room == 0 || count == 0 {
		return 0;
	}

	let headings = burst_headings(count, rng);
	let before = sparkles.len();
	for heading in headings.into_iter().take(room) {
		let speed = uniform(rng, 2.0, 3.0);
		sparkles.push(Sparkle {
			x: origin.x,
			y: origin.y,
			size: uniform(rng, 12.0, 6.0),
			vx: heading.cos() * speed,
			vy: heading.sin() * speed - uniform(rng, 0.0, 1.5),
			rotation: uniform(rng, 0.0, TAU),
			spin: uniform(rng, -0.075, 0.15),
			opacity: 1.0,
		});
	}
	sparkles.len() - before
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	#[test]
	fn heart_particles_start_at_rest_on_their_anchor() {
		let mut rng = SmallRng::seed_from_u64(1);
		let particles = init_heart(Point::new(400.0, 300.0), 10.0, 60, &mut rng);

		assert_eq!(particles.len(), 60);
		for p in &particles {
			assert_eq!(Point::new(p.x, p.y), p.anchor());
			assert_eq!((p.vx, p.vy), (0.0, 0.0));
			assert!((1.5..3.5).contains(&p.size));
			assert!((0.0..TAU).contains(&p.phase));
		}
	}

	#[test]
	fn heart_anchors_do_not_depend_on_rng() {
		let a = init_heart(Point::new(10.0, 20.0), 3.0, 60, &mut SmallRng::seed_from_u64(1));
		let b = init_heart(Point::new(10.0, 20.0), 3.0, 60, &mut SmallRng::seed_from_u64(99));
		let anchors = |ps: &[AnchoredParticle]| ps.iter().map(|p| p.anchor()).collect::<Vec<_>>();
		assert_eq!(anchors(&a), anchors(&b));
	}

	#[test]
	fn falling_dots_stay_in_their_ranges() {
		let mut rng = SmallRng::seed_from_u64(2);
		let dots = init_falling_dots(800.0, 600.0, 50, &mut rng);

		assert_eq!(dots.len(), 50);
		for d in &dots {
			assert!((0.0..800.0).contains(&d.x));
			assert!((0.0..600.0).contains(&d.y));
			assert!((0.8..2.3).contains(&d.radius));
			assert!((0.3..1.3).contains(&d.speed));
			assert!((0.2..0.6).contains(&d.opacity));
		}
	}

	#[test]
	fn burst_spawns_full_batch_at_origin() {
		let mut rng = SmallRng::seed_from_u64(3);
		let mut sparkles = Vec::new();
		let added = burst(&mut sparkles, Point::new(400.0, 300.0), 8, &mut rng);

		assert_eq!(added, 8);
		for s in &sparkles {
			assert_eq!((s.x, s.y), (400.0, 300.0));
			assert_eq!(s.opacity, 1.0);
			assert!((12.0..18.0).contains(&s.size));
			assert!(s.spin.abs() <= 0.075);
		}
	}

	#[test]
	fn burst_is_refused_at_cap() {
		let mut rng = SmallRng::seed_from_u64(4);
		let mut sparkles = Vec::new();
		burst(&mut sparkles, Point::new(0.0, 0.0), 5, &mut rng);
		assert_eq!(sparkles.len(), 5);

		let added = burst(&mut sparkles, Point::new(0.0, 0.0), 5, &mut rng);
		assert_eq!(added, 0);
		assert_eq!(sparkles.len(), 5);
	}

	#[test]
	fn burst_is_truncated_near_cap() {
		let mut rng = SmallRng::seed_from_u64(5);
		let mut sparkles = Vec::new();
		burst(&mut sparkles, Point::new(0.0, 0.0), 8, &mut rng);
		sparkles.truncate(5);

		assert_eq!(burst(&mut sparkles, Point::new(0.0, 0.0), 8, &mut rng), 3);
		assert_eq!(sparkles.len(), 8);
	}

	#[test]
	fn burst_headings_cover_a_full_turn() {
		let mut rng = SmallRng::seed_from_u64(6);
		let headings = burst_headings(8, &mut rng);
		let slot = TAU / 8.0;

		for (i, h) in headings.iter().enumerate() {
			let base = slot * i as f64;
			assert!(*h >= base && *h < base + 0.3, "heading {i} = {h}");
		}
		assert!(headings.windows(2).all(|w| w[1] > w[0]));
	}
}
