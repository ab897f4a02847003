//! Page-supplied configuration for the backdrop.

use log::warn;
use serde::Deserialize;

use crate::components::parallax::ParallaxConfig;

use super::theme::{LayerGroup, Theme};

/// Backdrop settings, parsed from a `<script id="backdrop-config">` JSON
/// payload. Everything is optional; an absent or malformed payload yields
/// the defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BackdropConfig {
	/// Built-in theme name: "drift", "ember", "tide", or "swarm".
	pub theme: Option<String>,
	/// Optional population override, replacing the theme's layer groups.
	pub layers: Option<Vec<LayerGroupConfig>>,
	/// Parallax behavior for page elements outside the canvas.
	#[serde(default)]
	pub parallax: ParallaxConfig,
}

/// One population group: `count` particles at the given depth weight.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct LayerGroupConfig {
	pub count: usize,
	/// Depth weight in (0, 1]; larger reads closer to the viewer.
	pub depth: f64,
}

impl BackdropConfig {
	/// Resolves the configured theme, warning and falling back to the
	/// default on unknown names, then applies the population override.
	pub fn resolve_theme(&self) -> Theme {
		let mut theme = match self.theme.as_deref() {
			None => Theme::drift(),
			Some(name) => Theme::by_name(name).unwrap_or_else(|| {
				warn!("backdrop: unknown theme {name:?}, using drift");
				Theme::drift()
			}),
		};

		if let Some(groups) = &self.layers {
			theme.groups = groups
				.iter()
				.map(|g| LayerGroup {
					count: g.count,
					depth: g.depth,
				})
				.collect();
		}

		theme
	}
}
