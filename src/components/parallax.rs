//! Pointer-driven parallax for page layers.
//!
//! Mirrors the pointer position into `--mouse-x`/`--mouse-y` custom
//! properties on the document root and translates designated layer elements
//! around their resting position, deeper layers moving further. The offset
//! math is separated from the DOM wiring so it stays host-testable.

use log::warn;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

/// Pointer parallax settings.
#[derive(Clone, Debug, Deserialize)]
pub struct ParallaxConfig {
	/// Whether to wire the document mousemove parallax at all.
	#[serde(default = "default_enabled")]
	pub enabled: bool,
	/// Pointer offset divisor; larger values move layers less.
	#[serde(default = "default_divisor")]
	pub divisor: f64,
	/// Elements to translate, resolved once at startup.
	#[serde(default = "default_layers")]
	pub layers: Vec<ParallaxLayer>,
}

/// A single parallax-translated element.
#[derive(Clone, Debug, Deserialize)]
pub struct ParallaxLayer {
	/// CSS selector for the element.
	pub selector: String,
	/// Offset multiplier relative to the base layer.
	pub depth: f64,
}

fn default_enabled() -> bool {
	true
}

fn default_divisor() -> f64 {
	50.0
}

fn default_layers() -> Vec<ParallaxLayer> {
	vec![
		ParallaxLayer {
			selector: ".layer-1".to_string(),
			depth: 1.0,
		},
		ParallaxLayer {
			selector: ".layer-2".to_string(),
			depth: 1.5,
		},
	]
}

impl Default for ParallaxConfig {
	fn default() -> Self {
		Self {
			enabled: default_enabled(),
			divisor: default_divisor(),
			layers: default_layers(),
		}
	}
}

/// Pointer position as a percentage of the viewport extent.
pub fn pointer_percent(client: f64, extent: f64) -> f64 {
	if extent <= 0.0 {
		return 50.0;
	}
	client / extent * 100.0
}

/// Base translation for a layer: the pointer offset from the viewport
/// center, scaled down by the configured divisor.
pub fn layer_offset(client: f64, extent: f64, divisor: f64) -> f64 {
	(client - extent / 2.0) / divisor.max(1.0)
}

/// Wires the document `mousemove` listener driving the parallax effect.
///
/// Layer selectors that match nothing are skipped; pages without layers
/// still get the custom properties. The listener lives as long as the page,
/// so the closure is leaked.
pub fn wire(document: &Document, config: &ParallaxConfig) {
	if !config.enabled {
		return;
	}

	let layers: Vec<(HtmlElement, f64)> = config
		.layers
		.iter()
		.filter_map(|layer| {
			document
				.query_selector(&layer.selector)
				.ok()
				.flatten()
				.and_then(|el| el.dyn_into::<HtmlElement>().ok())
				.map(|el| (el, layer.depth))
		})
		.collect();

	let root: Option<HtmlElement> = document
		.document_element()
		.and_then(|el| el.dyn_into().ok());

	let divisor = config.divisor;
	let closure = Closure::wrap(Box::new(move |ev: MouseEvent| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
		let (cx, cy) = (ev.client_x() as f64, ev.client_y() as f64);

		if let Some(root) = &root {
			let style = root.style();
			let _ = style.set_property("--mouse-x", &format!("{}%", pointer_percent(cx, width)));
			let _ = style.set_property("--mouse-y", &format!("{}%", pointer_percent(cy, height)));
		}

		let (mx, my) = (
			layer_offset(cx, width, divisor),
			layer_offset(cy, height, divisor),
		);
		for (el, depth) in &layers {
			let _ = el.style().set_property(
				"transform",
				&format!("translate({:.2}px, {:.2}px)", mx * depth, my * depth),
			);
		}
	}) as Box<dyn FnMut(_)>);

	if document
		.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())
		.is_err()
	{
		warn!("parallax: failed to attach mousemove listener");
	}
	closure.forget();
}
