//! Per-tick physics for all three entity kinds.
//!
//! Anchored particles behave as damped springs tied to their anchor, with an
//! optional repulsion from the pointer. Per tick and per particle:
//!
//! 1. repulsion (if the pointer is within range) is added to velocity
//! 2. position advances by velocity
//! 3. velocity is damped
//! 4. the spring pull toward the anchor is added to velocity
//!
//! For the offset `e` from the anchor this is the linear map
//! `e' = e + v`, `v' = (d − k)·v − k·e`, whose eigenvalues have modulus
//! `√d` (≈ 0.985 for `d = 0.97`), so free motion decays geometrically.

use rand::Rng;

use super::config::PhysicsConfig;
use super::geometry::Point;
use super::particles::{AnchoredParticle, FallingDot, Sparkle};

/// Advances the heart particles by one tick.
pub fn step_particles(
	particles: &mut [AnchoredParticle],
	pointer: Option<Point>,
	config: &PhysicsConfig,
) {
	let radius_sq = config.repel_radius_sq();

	for p in particles.iter_mut() {
		if let Some(pointer) = pointer {
			let (dx, dy) = (p.x - pointer.x, p.y - pointer.y);
			let dist_sq = dx * dx + dy * dy;
			// A pointer exactly on the particle has no direction to push in.
			if dist_sq < radius_sq && dist_sq > 0.0 {
				let dist = dist_sq.sqrt();
				let force = (config.repel_radius - dist) / config.repel_radius * config.repel_strength;
				p.vx += dx / dist * force;
				p.vy += dy / dist * force;
			}
		}

		p.x += p.vx;
		p.y += p.vy;
		p.vx *= config.damping;
		p.vy *= config.damping;

		let anchor = p.anchor();
		p.vx += (anchor.x - p.x) * config.spring;
		p.vy += (anchor.y - p.y) * config.spring;
	}
}

/// Moves the background dots down, wrapping any that leave the bottom edge
/// back above the top at a fresh horizontal position.
pub fn step_falling_dots<R: Rng + ?Sized>(
	dots: &mut [FallingDot],
	width: f64,
	height: f64,
	config: &PhysicsConfig,
	rng: &mut R,
) {
	for dot in dots.iter_mut() {
		dot.y += dot.speed;
		if dot.y > height + config.dot_wrap_margin {
			dot.y = -config.dot_wrap_margin;
			dot.x = rng.random::<f64>() * width;
		}
	}
}

/// Advances sparkles and drops the ones that faded out or fell off-screen.
///
/// Returns the number of sparkles removed.
pub fn step_sparkles(sparkles: &mut Vec<Sparkle>, height: f64, config: &PhysicsConfig) -> usize {
	let before = sparkles.len();
	let floor = height + config.sparkle_cull_margin;

	sparkles.retain_mut(|s| {
		s.x += s.vx;
		s.y += s.vy;
		s.vy += config.sparkle_gravity;
		s.vx *= config.sparkle_drag;
		s.rotation += s.spin;
		s.opacity -= config.sparkle_fade;
		s.opacity > 0.0 && s.y <= floor
	});

	before - sparkles.len()
}
