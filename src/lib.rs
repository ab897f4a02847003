//! parallax-backdrop: decorative animated background for web pages.
//!
//! This crate provides a WASM-based backdrop: a full-viewport canvas
//! particle field with pointer repulsion, plus a pointer-driven parallax
//! shift for designated page layers. Four built-in themes vary the motion
//! strategy, trail style, and particle shape.

// Pulled in for its "js" feature so `rand` can seed on wasm targets.
use getrandom as _;

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::backdrop::{BackdropCanvas, BackdropConfig, ParticleField, Theme};
use components::parallax;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("parallax-backdrop: logging initialized");
}

/// Load backdrop configuration from a script element with
/// id="backdrop-config". Expected format: JSON matching [`BackdropConfig`].
fn load_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<BackdropConfig>(&json_text) {
		Ok(config) => {
			info!(
				"parallax-backdrop: loaded config, theme {:?}",
				config.theme.as_deref().unwrap_or("drift")
			);
			Some(config)
		}
		Err(e) => {
			warn!("parallax-backdrop: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads page configuration, wires the parallax layers, and mounts the
/// backdrop canvas behind the page content.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	if let Some(document) = web_sys::window().and_then(|w| w.document()) {
		parallax::wire(&document, &config.parallax);
	}

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Ambient Backdrop" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<BackdropCanvas config=config fullscreen=true />
	}
}
