//! Top-level animation model.
//!
//! `HeartAnimation` owns the simulation state, the frame scheduler and the
//! random source. The host drives it through two entry points, both taking
//! `&mut self` so calls can never interleave:
//!
//! - [`HeartAnimation::handle`] for input events
//! - [`HeartAnimation::frame`] on every repaint opportunity

use log::debug;
use rand::Rng;

use super::config::HeartConfig;
use super::geometry::Point;
use super::input::{InputEvent, MessageRequest, PointerTracker};
use super::scheduler::FrameScheduler;
use super::state::SimulationState;

/// The whole animation: scene, frame pacing and randomness.
pub struct HeartAnimation<R: Rng> {
	/// Live entities, mutated only through `handle` and `frame`.
	pub state: SimulationState,
	/// Frame throttle and pause state.
	pub scheduler: FrameScheduler,
	/// Configuration the animation was started with.
	pub config: HeartConfig,
	pointer: PointerTracker,
	rng: R,
}

impl<R: Rng> HeartAnimation<R> {
	/// Lays out the scene for a `width` × `height` viewport and starts running.
	pub fn new(config: HeartConfig, width: f64, height: f64, mut rng: R) -> Self {
		let state = SimulationState::new(width, height, config.limits, config.physics, &mut rng);
		let mut scheduler = FrameScheduler::new(config.frame_interval_ms());
		scheduler.start();

		Self {
			state,
			scheduler,
			config,
			pointer: PointerTracker::default(),
			rng,
		}
	}

	/// Applies one input event. A click yields a message request for the host.
	pub fn handle(&mut self, event: InputEvent) -> Option<MessageRequest> {
		match event {
			InputEvent::PointerMove { .. } | InputEvent::PointerLeave => {
				if self.pointer.update(&event) {
					self.state.set_pointer(self.pointer.position());
				}
				None
			}
			InputEvent::Click { x, y } => {
				let origin = Point::new(x, y);
				self.state.spawn_burst(origin, &mut self.rng);
				Some(MessageRequest::from(origin))
			}
			InputEvent::Resize { width, height } => {
				self.state.resize(width, height, &mut self.rng);
				None
			}
			InputEvent::Visibility(visible) => {
				let changed = if visible {
					self.scheduler.resume()
				} else {
					self.scheduler.pause()
				};
				if changed {
					debug!(
						"heart-particles: animation {}",
						if visible { "resumed" } else { "paused" }
					);
				}
				None
			}
		}
	}

	/// Handles a repaint opportunity. Returns the animation time in ms when
	/// the simulation advanced and the scene should be redrawn.
	pub fn frame(&mut self, now_ms: f64) -> Option<f64> {
		let elapsed = self.scheduler.tick(now_ms)?;
		self.state.step(&mut self.rng);
		Some(elapsed)
	}
}
