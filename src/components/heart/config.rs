//! Entity limits, physics constants and start-up configuration.
//!
//! Limits depend on the device class: phones and tablets get smaller pools so
//! the per-frame work stays cheap. Everything here can be partially overridden
//! by a JSON blob embedded in the page (see [`ConfigOverrides`]).

use serde::Deserialize;

use super::theme::Theme;

/// User-agent fragments that classify a browser as mobile.
const MOBILE_MARKERS: [&str; 8] = [
	"android",
	"webos",
	"iphone",
	"ipad",
	"ipod",
	"blackberry",
	"iemobile",
	"opera mini",
];

/// Largest collection limit a page override may request.
pub const MAX_OVERRIDE_LIMIT: usize = 1000;

/// Coarse device classification derived from the user agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
	/// Anything not recognised as mobile.
	Desktop,
	/// Phones and tablets.
	Mobile,
}

impl DeviceClass {
	/// Case-insensitive match against known mobile user-agent markers.
	pub fn from_user_agent(user_agent: &str) -> Self {
		let ua = user_agent.to_lowercase();
		if MOBILE_MARKERS.iter().any(|marker| ua.contains(marker)) {
			DeviceClass::Mobile
		} else {
			DeviceClass::Desktop
		}
	}
}

/// Upper bounds for the three entity collections.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
	/// Maximum anchored particles forming the heart.
	pub max_particles: usize,
	/// Size of the falling-dot pool.
	pub max_falling_dots: usize,
	/// Sparkle cap; bursts are refused once reached.
	pub max_sparkles: usize,
}

impl Limits {
	/// 60 particles, 50 dots, 8 sparkles.
	pub const fn desktop() -> Self {
		Self {
			max_particles: 60,
			max_falling_dots: 50,
			max_sparkles: 8,
		}
	}

	/// 40 particles, 30 dots, 5 sparkles.
	pub const fn mobile() -> Self {
		Self {
			max_particles: 40,
			max_falling_dots: 30,
			max_sparkles: 5,
		}
	}

	/// Limits for the given device class.
	pub fn for_device(device: DeviceClass) -> Self {
		match device {
			DeviceClass::Desktop => Self::desktop(),
			DeviceClass::Mobile => Self::mobile(),
		}
	}
}

impl Default for Limits {
	fn default() -> Self {
		Self::desktop()
	}
}

/// Constants driving the per-tick physics.
#[derive(Clone, Copy, Debug)]
pub struct PhysicsConfig {
	/// Pointer influence radius in pixels.
	pub repel_radius: f64,
	/// Repulsion strength at zero distance.
	pub repel_strength: f64,
	/// Spring constant pulling particles back to their anchor.
	pub spring: f64,
	/// Velocity decay applied to anchored particles every tick.
	pub damping: f64,
	/// How far below the bottom edge a falling dot travels before wrapping.
	pub dot_wrap_margin: f64,
	/// Downward acceleration applied to sparkles.
	pub sparkle_gravity: f64,
	/// Horizontal velocity decay for sparkles.
	pub sparkle_drag: f64,
	/// Opacity lost by a sparkle every tick.
	pub sparkle_fade: f64,
	/// How far below the viewport a sparkle may fall before it is culled.
	pub sparkle_cull_margin: f64,
}

impl PhysicsConfig {
	/// Squared repulsion radius, compared against squared distances.
	pub fn repel_radius_sq(&self) -> f64 {
		self.repel_radius * self.repel_radius
	}
}

impl Default for PhysicsConfig {
	fn default() -> Self {
		Self {
			repel_radius: 120.0,
			repel_strength: 1.2,
			spring: 0.025,
			damping: 0.97,
			dot_wrap_margin: 10.0,
			sparkle_gravity: 0.12,
			sparkle_drag: 0.998,
			sparkle_fade: 0.015,
			sparkle_cull_margin: 50.0,
		}
	}
}

/// Complete animation configuration.
#[derive(Clone, Debug)]
pub struct HeartConfig {
	/// Entity collection bounds.
	pub limits: Limits,
	/// Physics constants.
	pub physics: PhysicsConfig,
	/// Target frame rate; the host repaint rate caps the effective rate.
	pub target_fps: f64,
	/// How long the click message stays visible.
	pub message_duration_ms: u64,
	/// Colors and draw styles.
	pub theme: Theme,
}

impl HeartConfig {
	/// Defaults with limits chosen for `device`.
	pub fn for_device(device: DeviceClass) -> Self {
		Self {
			limits: Limits::for_device(device),
			..Self::default()
		}
	}

	/// Minimum time between processed frames, in milliseconds.
	pub fn frame_interval_ms(&self) -> f64 {
		1000.0 / self.target_fps.max(1.0)
	}

	/// Apply page-supplied overrides on top of the current values.
	/// Collection limits are clamped to [`MAX_OVERRIDE_LIMIT`].
	pub fn apply(&mut self, overrides: &ConfigOverrides) {
		if let Some(n) = overrides.max_particles {
			self.limits.max_particles = n.min(MAX_OVERRIDE_LIMIT);
		}
		if let Some(n) = overrides.max_falling_dots {
			self.limits.max_falling_dots = n.min(MAX_OVERRIDE_LIMIT);
		}
		if let Some(n) = overrides.max_sparkles {
			self.limits.max_sparkles = n.min(MAX_OVERRIDE_LIMIT);
		}
		if let Some(fps) = overrides.target_fps {
			self.target_fps = fps.max(1.0);
		}
		if let Some(ms) = overrides.message_duration_ms {
			self.message_duration_ms = ms;
		}
	}
}

impl Default for HeartConfig {
	fn default() -> Self {
		Self {
			limits: Limits::default(),
			physics: PhysicsConfig::default(),
			target_fps: 60.0,
			message_duration_ms: 1500,
			theme: Theme::default(),
		}
	}
}

/// Optional overrides read from the page. Missing fields keep their defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "snake_case")]
pub struct ConfigOverrides {
	/// See [`Limits::max_particles`].
	pub max_particles: Option<usize>,
	/// See [`Limits::max_falling_dots`].
	pub max_falling_dots: Option<usize>,
	/// See [`Limits::max_sparkles`].
	pub max_sparkles: Option<usize>,
	/// See [`HeartConfig::target_fps`].
	pub target_fps: Option<f64>,
	/// See [`HeartConfig::message_duration_ms`].
	pub message_duration_ms: Option<u64>,
}

impl ConfigOverrides {
	/// Parses overrides from the page's JSON blob.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn mobile_user_agents_are_detected() {
		let iphone = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) AppleWebKit/605.1.15";
		let android = "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36";
		let opera = "Opera/9.80 (J2ME/MIDP; Opera Mini/9.80 (S60; SymbOS; Opera Mobi/23.348; U; en)";
		assert_eq!(DeviceClass::from_user_agent(iphone), DeviceClass::Mobile);
		assert_eq!(DeviceClass::from_user_agent(android), DeviceClass::Mobile);
		assert_eq!(DeviceClass::from_user_agent(opera), DeviceClass::Mobile);
	}

	#[test]
	fn desktop_user_agent_keeps_desktop_limits() {
		let firefox = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
		let device = DeviceClass::from_user_agent(firefox);
		assert_eq!(device, DeviceClass::Desktop);
		assert_eq!(
			Limits::for_device(device),
			Limits {
				max_particles: 60,
				max_falling_dots: 50,
				max_sparkles: 8,
			}
		);
	}

	#[test]
	fn mobile_limits_are_lowered() {
		assert_eq!(
			Limits::for_device(DeviceClass::Mobile),
			Limits {
				max_particles: 40,
				max_falling_dots: 30,
				max_sparkles: 5,
			}
		);
	}

	#[test]
	fn overrides_apply_on_top_of_device_limits() {
		let overrides =
			ConfigOverrides::from_json(r#"{ "max_sparkles": 3, "target_fps": 0 }"#).unwrap();
		let mut config = HeartConfig::for_device(DeviceClass::Mobile);
		config.apply(&overrides);

		assert_eq!(config.limits.max_particles, 40);
		assert_eq!(config.limits.max_sparkles, 3);
		assert_eq!(config.target_fps, 1.0);
		assert_eq!(config.message_duration_ms, 1500);
	}

	#[test]
	fn oversized_override_limits_are_clamped() {
		let overrides = ConfigOverrides::from_json(
			r#"{ "max_particles": 5000, "max_falling_dots": 1000000000, "max_sparkles": 1001 }"#,
		)
		.unwrap();
		let mut config = HeartConfig::default();
		config.apply(&overrides);

		assert_eq!(
			config.limits,
			Limits {
				max_particles: MAX_OVERRIDE_LIMIT,
				max_falling_dots: MAX_OVERRIDE_LIMIT,
				max_sparkles: MAX_OVERRIDE_LIMIT,
			}
		);
	}

	#[test]
	fn malformed_overrides_are_an_error() {
		assert!(ConfigOverrides::from_json("{ max_particles: ").is_err());
	}

	#[test]
	fn frame_interval_follows_target_rate() {
		let config = HeartConfig::default();
		assert!((config.frame_interval_ms() - 1000.0 / 60.0).abs() < 1e-9);
	}
}
