//! heart-particles: Interactive heart-shaped particle animation.
//!
//! This crate provides a WASM-based canvas component that renders a pulsing
//! heart of particles reacting to the pointer, a drifting background of
//! falling dots, and sparkle bursts on click.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::heart::{
	ConfigOverrides, DeviceClass, HeartAnimation, HeartCanvas, HeartConfig, InputEvent, Theme,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("heart-particles: logging initialized");
}

/// Classify the running browser from its user agent.
fn detect_device(window: &Window) -> DeviceClass {
	window
		.navigator()
		.user_agent()
		.map(|ua| DeviceClass::from_user_agent(&ua))
		.unwrap_or(DeviceClass::Desktop)
}

/// Load config overrides from a script element with id="heart-config".
/// Expected format: JSON object with any of the `ConfigOverrides` fields.
fn load_config_overrides(window: &Window) -> Option<ConfigOverrides> {
	let document = window.document()?;
	let element = document.get_element_by_id("heart-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match ConfigOverrides::from_json(&json_text) {
		Ok(overrides) => {
			info!("heart-particles: loaded config overrides {:?}", overrides);
			Some(overrides)
		}
		Err(e) => {
			warn!("heart-particles: failed to parse config overrides: {}", e);
			None
		}
	}
}

/// Build the animation config for the current browser.
fn load_config() -> HeartConfig {
	let Some(window) = web_sys::window() else {
		return HeartConfig::default();
	};

	let device = detect_device(&window);
	let mut config = HeartConfig::for_device(device);
	if let Some(overrides) = load_config_overrides(&window) {
		config.apply(&overrides);
	}
	info!(
		"heart-particles: {:?} device, limits {:?}, {} fps",
		device, config.limits, config.target_fps
	);
	config
}

/// Main application component.
/// Reads the device class and page config, then mounts the heart animation.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Heart" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-heart">
			<HeartCanvas config=config />
		</div>
	}
}
