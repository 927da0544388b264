//! Canvas rendering for the heart animation.
//!
//! Two layers are redrawn from scratch every processed frame:
//! 1. Background canvas: falling dots
//! 2. Foreground canvas: glowing heart particles, then sparkle glyphs on top

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::SimulationState;
use super::theme::Theme;

/// The two stacked drawing surfaces.
pub struct Layers {
	/// Falling dots.
	pub background: CanvasRenderingContext2d,
	/// Heart and sparkles.
	pub foreground: CanvasRenderingContext2d,
}

/// Size multiplier for a pulsing heart particle at animation time `elapsed_ms`.
pub fn pulse_multiplier(elapsed_ms: f64, phase: f64, amplitude: f64, frequency: f64) -> f64 {
	1.0 + (elapsed_ms * frequency + phase).sin() * amplitude
}

/// Renders the complete scene to both layers.
pub fn render(state: &SimulationState, layers: &Layers, theme: &Theme, elapsed_ms: f64) {
	layers
		.background
		.clear_rect(0.0, 0.0, state.width, state.height);
	layers
		.foreground
		.clear_rect(0.0, 0.0, state.width, state.height);

	if state.is_degenerate() {
		return;
	}

	draw_dots(state, &layers.background, theme);
	draw_heart(state, &layers.foreground, theme, elapsed_ms);
	draw_sparkles(state, &layers.foreground, theme);
}

fn draw_dots(state: &SimulationState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	ctx.set_fill_style_str(&theme.dots.color.to_css());

	for dot in &state.dots {
		ctx.set_global_alpha(dot.opacity);
		ctx.begin_path();
		let _ = ctx.arc(dot.x, dot.y, dot.radius, 0.0, PI * 2.0);
		ctx.fill();
	}

	ctx.set_global_alpha(1.0);
}

fn draw_heart(
	state: &SimulationState,
	ctx: &CanvasRenderingContext2d,
	theme: &Theme,
	elapsed_ms: f64,
) {
	let style = &theme.heart;

	ctx.set_fill_style_str(&style.color.to_css());
	ctx.set_shadow_color(&style.glow_color.to_css());
	ctx.set_shadow_blur(style.glow_blur);

	for p in &state.particles {
		let pulse = pulse_multiplier(elapsed_ms, p.phase, style.pulse_amplitude, style.pulse_frequency);
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size * pulse, 0.0, PI * 2.0);
		ctx.fill();
	}

	ctx.set_shadow_blur(0.0);
}

fn draw_sparkles(state: &SimulationState, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let style = &theme.sparkles;

	for s in &state.sparkles {
		ctx.save();
		ctx.set_global_alpha(s.opacity.clamp(0.0, 1.0));
		ctx.set_font(&style.font(s.size));
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		ctx.set_fill_style_str(&style.color.to_css());
		let _ = ctx.translate(s.x, s.y);
		let _ = ctx.rotate(s.rotation);
		let _ = ctx.fill_text(style.glyph, 0.0, 0.0);
		ctx.restore();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pulse_stays_within_amplitude() {
		for i in 0..1000 {
			let m = pulse_multiplier(i as f64 * 17.0, 1.3, 0.08, 0.002);
			assert!((0.92..=1.08).contains(&m));
		}
	}

	#[test]
	fn pulse_is_neutral_at_zero_phase_and_time() {
		assert_eq!(pulse_multiplier(0.0, 0.0, 0.08, 0.002), 1.0);
	}

	#[test]
	fn pulse_peaks_a_quarter_period_in() {
		// sin reaches 1 at t·f = π/2.
		let t = PI / 2.0 / 0.002;
		assert!((pulse_multiplier(t, 0.0, 0.08, 0.002) - 1.08).abs() < 1e-12);
	}
}
