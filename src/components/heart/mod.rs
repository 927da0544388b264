//! Heart particle animation component.
//!
//! Renders a heart-shaped formation of particles on a pair of stacked canvases:
//! - Particles spring back to their place on the heart outline and scatter
//!   away from the pointer
//! - A background layer of slowly falling dots
//! - Sparkle bursts and a short message on click
//!
//! The simulation core ([`HeartAnimation`]) is independent of the browser and
//! is driven by [`InputEvent`]s and repaint timestamps.
//!
//! # Example
//!
//! ```ignore
//! use heart_particles::{HeartCanvas, HeartConfig};
//!
//! view! { <HeartCanvas config=HeartConfig::default() /> }
//! ```

mod animation;
mod component;
pub mod config;
pub mod geometry;
mod input;
pub mod particles;
mod physics;
mod render;
mod scheduler;
mod state;
pub mod theme;

pub use animation::HeartAnimation;
pub use component::HeartCanvas;
pub use config::{ConfigOverrides, DeviceClass, HeartConfig, Limits};
pub use input::{InputEvent, MessageRequest};
pub use scheduler::{FrameScheduler, SchedulerState};
pub use state::SimulationState;
pub use theme::Theme;
