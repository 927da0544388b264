//! Leptos component wrapping the two heart canvases.
//!
//! The component stacks a background canvas (falling dots) under a foreground
//! canvas (heart and sparkles), wires pointer handlers on the foreground, and
//! listens for window resizes and page visibility changes. Frames are driven
//! by `requestAnimationFrame`; the pending request is cancelled while the page
//! is hidden and re-armed when it becomes visible again.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{TimeoutHandle, set_timeout_with_handle};
use leptos::prelude::*;
use log::warn;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::animation::HeartAnimation;
use super::config::HeartConfig;
use super::input::{InputEvent, MessageRequest};
use super::render::{self, Layers};

/// Bundles the animation model with the surfaces it draws on.
struct HeartContext {
	animation: HeartAnimation<SmallRng>,
	layers: Layers,
	background: HtmlCanvasElement,
	foreground: HtmlCanvasElement,
}

impl HeartContext {
	fn handle(&mut self, event: InputEvent) -> Option<MessageRequest> {
		if let InputEvent::Resize { width, height } = event {
			for canvas in [&self.background, &self.foreground] {
				canvas.set_width(width as u32);
				canvas.set_height(height as u32);
			}
		}
		self.animation.handle(event)
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn viewport_size(window: &Window) -> (f64, f64) {
	let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dimension(window.inner_width()), dimension(window.inner_height()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

fn request_frame(window: &Window, callback: &FrameCallback, frame_id: &Cell<Option<i32>>) {
	if let Some(ref cb) = *callback.borrow() {
		frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
	}
}

fn seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Renders the interactive heart animation over the full viewport.
///
/// `config` carries the device-dependent limits; `message` is the text shown
/// at the click point for `config.message_duration_ms`.
#[component]
pub fn HeartCanvas(
	#[prop(into)] config: HeartConfig,
	#[prop(into, default = "I love you \u{2764}".to_string())] message: String,
) -> impl IntoView {
	let background_ref = NodeRef::<leptos::html::Canvas>::new();
	let foreground_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<HeartContext>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let visibility_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let (popup, set_popup) = signal(None::<MessageRequest>);
	let hide_timer: Rc<Cell<Option<TimeoutHandle>>> = Rc::new(Cell::new(None));
	let message_duration = Duration::from_millis(config.message_duration_ms);

	let (context_init, animate_init, frame_id_init) =
		(context.clone(), animate.clone(), frame_id.clone());
	let (resize_cb_init, visibility_cb_init) = (resize_cb.clone(), visibility_cb.clone());

	Effect::new(move |_| {
		let (Some(background), Some(foreground)) = (background_ref.get(), foreground_ref.get())
		else {
			return;
		};
		let (background, foreground): (HtmlCanvasElement, HtmlCanvasElement) =
			(background.into(), foreground.into());
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};

		let (w, h) = viewport_size(&window);
		for canvas in [&background, &foreground] {
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
		}

		let (Some(bg_ctx), Some(fg_ctx)) = (context_2d(&background), context_2d(&foreground)) else {
			warn!("heart-particles: 2d canvas context unavailable");
			return;
		};

		*context_init.borrow_mut() = Some(HeartContext {
			animation: HeartAnimation::new(
				config.clone(),
				w,
				h,
				SmallRng::seed_from_u64(seed()),
			),
			layers: Layers {
				background: bg_ctx,
				foreground: fg_ctx,
			},
			background,
			foreground,
		});

		let context_resize = context_init.clone();
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (width, height) = viewport_size(&win);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.handle(InputEvent::Resize { width, height });
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_vis, animate_vis, frame_id_vis) =
			(context_init.clone(), animate_init.clone(), frame_id_init.clone());
		let document_vis = document.clone();
		*visibility_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let visible = !document_vis.hidden();
			if let Some(ref mut c) = *context_vis.borrow_mut() {
				c.handle(InputEvent::Visibility(visible));
			}
			if let Some(id) = frame_id_vis.take() {
				let _ = win.cancel_animation_frame(id);
			}
			if visible {
				request_frame(&win, &animate_vis, &frame_id_vis);
			}
		}));
		if let Some(ref cb) = *visibility_cb_init.borrow() {
			let _ =
				document.add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref());
		}

		let (context_anim, animate_inner, frame_id_inner) =
			(context_init.clone(), animate_init.clone(), frame_id_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move |now: f64| {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				if let Some(elapsed) = c.animation.frame(now) {
					let theme = &c.animation.config.theme;
					render::render(&c.animation.state, &c.layers, theme, elapsed);
				}
			}
			if let Some(win) = web_sys::window() {
				request_frame(&win, &animate_inner, &frame_id_inner);
			}
		}));
		request_frame(&window, &animate_init, &frame_id_init);
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(foreground_ref, &ev) else {
			return;
		};
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.handle(InputEvent::PointerMove { x, y });
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.handle(InputEvent::PointerLeave);
		}
	};

	let context_click = context.clone();
	let on_click = move |ev: MouseEvent| {
		let Some((x, y)) = canvas_point(foreground_ref, &ev) else {
			return;
		};
		let request = match *context_click.borrow_mut() {
			Some(ref mut c) => c.handle(InputEvent::Click { x, y }),
			None => None,
		};
		let Some(request) = request else {
			return;
		};

		set_popup.set(Some(request));
		// Unlike a fire-and-forget timeout, the pending hide is cleared so a
		// repeat click keeps the message up for the full duration.
		if let Some(previous) = hide_timer.take() {
			previous.clear();
		}
		match set_timeout_with_handle(move || set_popup.set(None), message_duration) {
			Ok(handle) => hide_timer.set(Some(handle)),
			Err(_) => warn!("heart-particles: failed to schedule message hide"),
		}
	};

	view! {
		<canvas
			node_ref=background_ref
			class="heart-background"
			style="position: fixed; inset: 0; display: block;"
		/>
		<canvas
			node_ref=foreground_ref
			class="heart-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:click=on_click
			style="position: fixed; inset: 0; display: block; cursor: pointer;"
		/>
		<div class="heart-message" style=move || popup_style(popup.get())>
			{message}
		</div>
	}
}

fn popup_style(popup: Option<MessageRequest>) -> String {
	match popup {
		Some(m) => format!(
			"position: fixed; left: {}px; top: {}px; transform: translate(-50%, -50%); \
			 pointer-events: none; display: block;",
			m.x, m.y
		),
		None => "display: none;".to_string(),
	}
}

/// Converts a mouse event to canvas-relative coordinates.
fn canvas_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
