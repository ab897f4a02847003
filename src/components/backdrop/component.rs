//! Leptos component hosting the backdrop canvas.
//!
//! The component creates an HTML canvas element and wires up mouse handlers
//! for pointer repulsion. An animation loop runs via `requestAnimationFrame`,
//! stepping the particle field and repainting it each frame. Window resizes
//! (fullscreen mode) re-size the canvas and rebuild the population.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use rand::rngs::ThreadRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::BackdropConfig;
use super::field::ParticleField;
use super::render;
use super::theme::Theme;

/// Bundles the simulation with its style and the shared pointer cell.
struct BackdropContext {
	field: ParticleField,
	theme: Theme,
	/// Last known pointer position in canvas coordinates; cleared on leave.
	pointer: Option<(f64, f64)>,
	rng: ThreadRng,
}

/// Renders the animated particle backdrop on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and rebuild the particle
/// population automatically on window resizes. Explicit `width`/`height`
/// override automatic sizing. If the 2D context cannot be acquired the
/// canvas stays inert; the simulation never starts.
#[component]
pub fn BackdropCanvas(
	#[prop(optional)] config: BackdropConfig,
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<BackdropContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (context_init, animate_init, resize_cb_init) =
		(context.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let (w, h) = if fullscreen {
			viewport_size(&window)
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		// No 2D context, no simulation: leave the canvas inert.
		let Some(ctx) = context_2d(&canvas) else {
			warn!("backdrop: 2d canvas context unavailable, not starting");
			return;
		};

		let theme = config.resolve_theme();
		let mut rng = rand::thread_rng();
		let field = ParticleField::new(&theme, w, h, &mut rng);
		render::prime(&ctx, &theme, w, h);

		*context_init.borrow_mut() = Some(BackdropContext {
			field,
			theme,
			pointer: None,
			rng,
		});

		if fullscreen {
			let (context_resize, canvas_resize, ctx_resize) =
				(context_init.clone(), canvas.clone(), ctx.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = viewport_size(&win);
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					let BackdropContext {
						field, theme, rng, ..
					} = c;
					field.resize(theme, nw, nh, rng);
					render::prime(&ctx_resize, theme, nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				let dt = 0.016;
				let BackdropContext {
					field,
					theme,
					pointer,
					rng,
				} = c;
				field.step(theme, dt, *pointer, rng);
				render::render(field, &ctx, theme);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(w) = web_sys::window() {
					let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let context_mm = context.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		if let Some(ref mut c) = *context_mm.borrow_mut() {
			c.pointer = Some((
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			));
		}
	};

	let context_ml = context.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut c) = *context_ml.borrow_mut() {
			c.pointer = None;
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="backdrop-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; position: fixed; inset: 0; z-index: -1;"
		/>
	}
}

/// Current viewport size in CSS pixels.
fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

/// 2D context acquisition; `None` when the browser refuses the context or
/// hands back an unexpected object.
fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|obj| obj.dyn_into().ok())
}
