//! Simulation state shared by the physics step and the renderer.
//!
//! `SimulationState` exclusively owns the three entity collections. Input is
//! fed in through plain method calls (pointer position, burst requests,
//! resizes); nothing outside this module mutates the collections directly.

use log::debug;
use rand::Rng;

use super::config::{Limits, PhysicsConfig};
use super::geometry::{Point, heart_scale};
use super::particles::{self, AnchoredParticle, FallingDot, Sparkle};
use super::physics;

/// Live entity state plus the viewport it is laid out for.
#[derive(Clone, Debug)]
pub struct SimulationState {
	/// Heart particles, replaced as a whole on resize.
	pub particles: Vec<AnchoredParticle>,
	/// Background dot pool, replaced as a whole on resize.
	pub dots: Vec<FallingDot>,
	/// Live sparkles in spawn order.
	pub sparkles: Vec<Sparkle>,
	/// Viewport width in CSS pixels.
	pub width: f64,
	/// Viewport height in CSS pixels.
	pub height: f64,
	/// Last known pointer position; `None` when the pointer left the canvas.
	pub pointer: Option<Point>,
	limits: Limits,
	physics: PhysicsConfig,
}

impl SimulationState {
	/// Lays out a fresh scene for a `width` × `height` viewport.
	pub fn new<R: Rng + ?Sized>(
		width: f64,
		height: f64,
		limits: Limits,
		physics: PhysicsConfig,
		rng: &mut R,
	) -> Self {
		let mut state = Self {
			particles: Vec::new(),
			dots: Vec::new(),
			sparkles: Vec::with_capacity(limits.max_sparkles),
			width: 0.0,
			height: 0.0,
			pointer: None,
			limits,
			physics,
		};
		state.resize(width, height, rng);
		state
	}

	/// True when the viewport has no drawable area.
	pub fn is_degenerate(&self) -> bool {
		!(self.width > 0.0 && self.height > 0.0)
	}

	/// Rebuilds the heart for the current viewport.
	pub fn init_heart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		if self.is_degenerate() {
			self.particles.clear();
			return;
		}
		let center = Point::new(self.width / 2.0, self.height / 2.0);
		let scale = heart_scale(self.width, self.height);
		self.particles = particles::init_heart(center, scale, self.limits.max_particles, rng);
	}

	/// Repopulates the falling-dot pool for the current viewport.
	pub fn init_falling_dots<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		if self.is_degenerate() {
			self.dots.clear();
			return;
		}
		self.dots =
			particles::init_falling_dots(self.width, self.height, self.limits.max_falling_dots, rng);
	}

	/// Adopts a new viewport size, fully reseeding the heart and the dots.
	/// Live sparkles are kept.
	pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
		self.init_heart(rng);
		self.init_falling_dots(rng);
		debug!(
			"heart-particles: layout {}x{} ({} particles, {} dots)",
			self.width,
			self.height,
			self.particles.len(),
			self.dots.len()
		);
	}

	/// Sets the repulsion source; `None` disables repulsion.
	pub fn set_pointer(&mut self, pointer: Option<Point>) {
		self.pointer = pointer;
	}

	/// Spawns a sparkle burst at `origin`; returns how many were added.
	pub fn spawn_burst<R: Rng + ?Sized>(&mut self, origin: Point, rng: &mut R) -> usize {
		let added = particles::burst(&mut self.sparkles, origin, self.limits.max_sparkles, rng);
		if added == 0 {
			debug!("heart-particles: sparkle cap reached, burst refused");
		}
		added
	}

	/// Advances every entity by one tick.
	pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
		physics::step_falling_dots(&mut self.dots, self.width, self.height, &self.physics, rng);
		physics::step_particles(&mut self.particles, self.pointer, &self.physics);
		physics::step_sparkles(&mut self.sparkles, self.height, &self.physics);
	}
}
