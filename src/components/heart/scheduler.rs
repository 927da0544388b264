//! Frame throttling and pause/resume bookkeeping.
//!
//! The host calls [`FrameScheduler::tick`] on every repaint opportunity and
//! always re-arms the next one; the scheduler decides whether enough time has
//! passed to run a physics + render pass. Pacing is therefore capped by the
//! host repaint rate, never by a timer.

/// Scheduler lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchedulerState {
	/// Not started yet.
	Idle,
	/// Processing frames at the target rate.
	Running,
	/// Page hidden; ticks are ignored until resumed.
	Paused,
}

/// Throttles repaint callbacks to a minimum frame interval.
#[derive(Clone, Debug)]
pub struct FrameScheduler {
	state: SchedulerState,
	interval_ms: f64,
	/// Timestamp of the last processed frame in the current run.
	last_frame: Option<f64>,
	/// Timestamp of the first processed frame ever; origin of animation time.
	origin: Option<f64>,
}

impl FrameScheduler {
	/// Creates an idle scheduler with the given minimum frame interval.
	pub fn new(interval_ms: f64) -> Self {
		Self {
			state: SchedulerState::Idle,
			interval_ms: interval_ms.max(0.0),
			last_frame: None,
			origin: None,
		}
	}

	/// Current lifecycle state.
	pub fn state(&self) -> SchedulerState {
		self.state
	}

	/// True while frames are being processed.
	pub fn is_running(&self) -> bool {
		self.state == SchedulerState::Running
	}

	/// Leaves `Idle`; has no effect once started.
	pub fn start(&mut self) {
		if self.state == SchedulerState::Idle {
			self.state = SchedulerState::Running;
		}
	}

	/// Stops processing frames. Returns true if the state changed.
	pub fn pause(&mut self) -> bool {
		if self.state != SchedulerState::Running {
			return false;
		}
		self.state = SchedulerState::Paused;
		true
	}

	/// Re-arms from scratch: the first tick afterwards always runs a pass.
	/// Returns true if the state changed.
	pub fn resume(&mut self) -> bool {
		if self.state == SchedulerState::Running {
			return false;
		}
		self.state = SchedulerState::Running;
		self.last_frame = None;
		true
	}

	/// Handles a repaint opportunity at `now_ms`.
	///
	/// Returns the animation time (ms since the first processed frame) when a
	/// pass should run, `None` when throttled or not running.
	pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
		if !self.is_running() {
			return None;
		}
		if let Some(last) = self.last_frame {
			if now_ms - last < self.interval_ms {
				return None;
			}
		}
		self.last_frame = Some(now_ms);
		let origin = *self.origin.get_or_insert(now_ms);
		Some(now_ms - origin)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const INTERVAL: f64 = 1000.0 / 60.0;

	fn running() -> FrameScheduler {
		let mut s = FrameScheduler::new(INTERVAL);
		s.start();
		s
	}

	#[test]
	fn idle_scheduler_does_not_tick() {
		let mut s = FrameScheduler::new(INTERVAL);
		assert_eq!(s.state(), SchedulerState::Idle);
		assert_eq!(s.tick(0.0), None);
	}

	#[test]
	fn first_frame_runs_immediately() {
		let mut s = running();
		assert_eq!(s.tick(1234.0), Some(0.0));
	}

	#[test]
	fn frames_are_throttled_to_interval() {
		let mut s = running();
		assert!(s.tick(0.0).is_some());
		// 144Hz display: every other repaint is skipped.
		assert_eq!(s.tick(6.9), None);
		assert_eq!(s.tick(13.9), None);
		assert_eq!(s.tick(20.8), Some(20.8));
		assert_eq!(s.tick(27.8), None);
		assert_eq!(s.tick(37.5), Some(37.5));
	}

	#[test]
	fn paused_scheduler_ignores_ticks() {
		let mut s = running();
		s.tick(0.0);
		assert!(s.pause());
		assert!(!s.pause());
		assert_eq!(s.state(), SchedulerState::Paused);
		assert_eq!(s.tick(100.0), None);
		assert_eq!(s.tick(5000.0), None);
	}

	#[test]
	fn resume_rearms_immediately() {
		let mut s = running();
		s.tick(0.0);
		s.pause();
		assert!(s.resume());
		assert!(!s.resume());
		// Animation time keeps counting from the first frame.
		assert_eq!(s.tick(5000.0), Some(5000.0));
		assert_eq!(s.tick(5001.0), None);
	}
}
