//! Host input translated into simulation events.

use super::geometry::Point;

/// Everything the host page can tell the animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
	/// Pointer moved over the canvas.
	PointerMove { x: f64, y: f64 },
	/// Pointer left the canvas.
	PointerLeave,
	/// Click or tap at a point.
	Click { x: f64, y: f64 },
	/// Viewport changed size.
	Resize { width: f64, height: f64 },
	/// Page visibility changed; `true` when visible.
	Visibility(bool),
}

impl InputEvent {
	/// Pointer position carried by the event, if any.
	pub fn point(&self) -> Option<Point> {
		match *self {
			InputEvent::PointerMove { x, y } | InputEvent::Click { x, y } => Some(Point::new(x, y)),
			_ => None,
		}
	}
}

/// Request to show the click message, centered at the given point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MessageRequest {
	/// Horizontal center in canvas pixels.
	pub x: f64,
	/// Vertical center in canvas pixels.
	pub y: f64,
}

impl From<Point> for MessageRequest {
	fn from(p: Point) -> Self {
		Self { x: p.x, y: p.y }
	}
}

/// Tracks the last known pointer position over the interactive surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
	position: Option<Point>,
}

impl PointerTracker {
	pub fn position(&self) -> Option<Point> {
		self.position
	}

	/// Updates from a pointer event; returns true if the position changed.
	pub fn update(&mut self, event: &InputEvent) -> bool {
		let next = match *event {
			InputEvent::PointerMove { x, y } => Some(Point::new(x, y)),
			InputEvent::PointerLeave => None,
			_ => return false,
		};
		let changed = next != self.position;
		self.position = next;
		changed
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn move_then_leave_clears_pointer() {
		let mut tracker = PointerTracker::default();
		assert!(tracker.update(&InputEvent::PointerMove { x: 3.0, y: 4.0 }));
		assert_eq!(tracker.position(), Some(Point::new(3.0, 4.0)));

		assert!(tracker.update(&InputEvent::PointerLeave));
		assert_eq!(tracker.position(), None);
	}

	#[test]
	fn clicks_do_not_move_the_pointer() {
		let mut tracker = PointerTracker::default();
		assert!(!tracker.update(&InputEvent::Click { x: 1.0, y: 2.0 }));
		assert_eq!(tracker.position(), None);
	}

	#[test]
	fn click_carries_its_point() {
		let ev = InputEvent::Click { x: 400.0, y: 300.0 };
		assert_eq!(ev.point().map(MessageRequest::from), Some(MessageRequest { x: 400.0, y: 300.0 }));
		assert_eq!(InputEvent::Visibility(true).point(), None);
	}
}
