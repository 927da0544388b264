//! Visual theming for the heart animation.
//!
//! Colors and draw styles for the three layers: falling dots on the
//! background canvas, the glowing heart and the sparkle glyphs on top.

/// Opaque RGB color; translucency comes from the canvas global alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel
	pub r: u8,
	/// Green channel
	pub g: u8,
	/// Blue channel
	pub b: u8,
}

impl Color {
	/// Color from its three channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Hex notation, e.g. `#ff3366`.
	pub fn to_css(self) -> String {
		format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}

/// Background falling-dot style.
#[derive(Clone, Debug)]
pub struct DotStyle {
	/// Fill color; per-dot opacity is applied via global alpha.
	pub color: Color,
}

/// Heart particle style.
#[derive(Clone, Debug)]
pub struct HeartStyle {
	/// Particle fill color
	pub color: Color,
	/// Shadow color used for the glow
	pub glow_color: Color,
	/// Shadow blur radius in pixels
	pub glow_blur: f64,
	/// Pulse size amplitude (0.08 = ±8%)
	pub pulse_amplitude: f64,
	/// Pulse angular frequency per millisecond
	pub pulse_frequency: f64,
}

/// Sparkle glyph style.
#[derive(Clone, Debug)]
pub struct SparkleStyle {
	/// Text drawn for each sparkle
	pub glyph: &'static str,
	/// Glyph fill color
	pub color: Color,
	/// Font family; the size comes from the sparkle
	pub font_family: &'static str,
}

impl SparkleStyle {
	/// CSS font shorthand for a sparkle of the given pixel size.
	pub fn font(&self, size: f64) -> String {
		format!("{}px {}", size, self.font_family)
	}
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	/// Background layer
	pub dots: DotStyle,
	/// Foreground heart particles
	pub heart: HeartStyle,
	/// Foreground sparkle glyphs
	pub sparkles: SparkleStyle,
}

impl Theme {
	/// Rose heart on a starfield of white dots (default)
	pub fn rose() -> Self {
		Self {
			dots: DotStyle {
				color: Color::rgb(255, 255, 255),
			},
			heart: HeartStyle {
				color: Color::rgb(255, 51, 102),
				glow_color: Color::rgb(255, 51, 102),
				glow_blur: 8.0,
				pulse_amplitude: 0.08,
				pulse_frequency: 0.002,
			},
			sparkles: SparkleStyle {
				glyph: "\u{2728}",
				color: Color::rgb(255, 255, 255),
				font_family: "Arial",
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::rose()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Theme::rose().heart.color.to_css(), "#ff3366");
	}

	#[test]
	fn css_hex_is_zero_padded() {
		assert_eq!(Color::rgb(0, 10, 255).to_css(), "#000aff");
	}

	#[test]
	fn sparkle_font_includes_size() {
		assert_eq!(Theme::rose().sparkles.font(14.5), "14.5px Arial");
	}
}
