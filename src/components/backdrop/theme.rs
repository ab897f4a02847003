//! Visual theming for the backdrop.
//!
//! Provides color palettes and the built-in theme presets. A [`Theme`] carries
//! everything that distinguishes one backdrop variant from another (motion
//! strategy, trail handling, particle shape, interaction radius, palette, and
//! population) so the simulation and renderer stay variant-agnostic.

use super::particle::Motion;

/// RGBA color representation.
#[derive(Clone, Copy, Debug)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// A curated color palette for particles.
#[derive(Clone, Debug)]
pub struct Palette {
	pub colors: Vec<Color>,
}

impl Palette {
	/// Cool star-like whites and blues (default)
	pub fn frost() -> Self {
		Self {
			colors: vec![
				Color::rgb(200, 215, 235), // Ice
				Color::rgb(170, 195, 225), // Powder blue
				Color::rgb(145, 175, 210), // Steel
				Color::rgb(190, 205, 220), // Silver
				Color::rgb(160, 190, 215), // Glacier
				Color::rgb(210, 220, 235), // Frost white
			],
		}
	}

	/// Warm sparks - oranges and golds
	pub fn embers() -> Self {
		Self {
			colors: vec![
				Color::rgb(230, 150, 90),  // Amber
				Color::rgb(215, 120, 75),  // Ember
				Color::rgb(240, 180, 110), // Gold
				Color::rgb(200, 105, 70),  // Rust
				Color::rgb(235, 165, 95),  // Marigold
				Color::rgb(220, 140, 85),  // Copper
			],
		}
	}

	/// Ocean depths - teals and sea greens
	pub fn tide() -> Self {
		Self {
			colors: vec![
				Color::rgb(95, 170, 175),  // Sea glass
				Color::rgb(80, 150, 165),  // Teal
				Color::rgb(110, 185, 180), // Aqua
				Color::rgb(90, 160, 170),  // Lagoon
				Color::rgb(75, 140, 155),  // Deep teal
				Color::rgb(120, 190, 185), // Foam
			],
		}
	}

	/// Dusk - violets and muted magentas
	pub fn dusk() -> Self {
		Self {
			colors: vec![
				Color::rgb(170, 140, 200), // Wisteria
				Color::rgb(150, 125, 185), // Violet
				Color::rgb(190, 150, 195), // Orchid
				Color::rgb(135, 120, 175), // Indigo gray
				Color::rgb(180, 135, 180), // Mauve
				Color::rgb(160, 145, 205), // Periwinkle
			],
		}
	}
}

/// Trail handling for the per-frame repaint.
#[derive(Clone, Copy, Debug)]
pub enum Trail {
	/// Repaint the full background every frame.
	Clear,
	/// Paint a translucent background overlay each frame, leaving motion
	/// trails that fade over time. The value is the overlay opacity.
	Fade(f64),
}

/// Particle glyph shape.
#[derive(Clone, Copy, Debug)]
pub enum Shape {
	/// Filled circle, opacity fixed by layer depth.
	Dot,
	/// Rotated rounded rectangle oriented along the velocity direction,
	/// opacity scaling with speed.
	Streak,
}

/// Background style configuration.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	/// Primary background color
	pub color: Color,
	/// Secondary color for gradients
	pub color_secondary: Color,
	/// Whether to use radial gradient on full repaints
	pub use_gradient: bool,
	/// Vignette intensity (0.0 = none, 1.0 = strong)
	pub vignette: f64,
}

/// One population group: `count` particles sharing a depth weight.
#[derive(Clone, Copy, Debug)]
pub struct LayerGroup {
	pub count: usize,
	/// Depth weight in (0, 1]; larger reads closer to the viewer.
	pub depth: f64,
}

/// Default population split: a dense near layer and two sparser far layers.
pub fn default_groups() -> Vec<LayerGroup> {
	vec![
		LayerGroup {
			count: 200,
			depth: 1.0,
		},
		LayerGroup {
			count: 150,
			depth: 0.6,
		},
		LayerGroup {
			count: 100,
			depth: 0.3,
		},
	]
}

/// Complete backdrop theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	/// Motion strategy applied to every particle.
	pub motion: Motion,
	pub trail: Trail,
	pub shape: Shape,
	/// Pointer interaction radius in pixels.
	pub interaction_radius: f64,
	pub background: BackgroundStyle,
	pub palette: Palette,
	/// Population groups rebuilt on every resize.
	pub groups: Vec<LayerGroup>,
}

impl Theme {
	/// Calm sinusoidal wander, full repaint each frame (default)
	pub fn drift() -> Self {
		Self {
			name: "drift",
			motion: Motion::Drift,
			trail: Trail::Clear,
			shape: Shape::Dot,
			interaction_radius: 140.0,
			background: BackgroundStyle {
				color: Color::rgb(16, 20, 30),
				color_secondary: Color::rgb(24, 30, 42),
				use_gradient: true,
				vignette: 0.15,
			},
			palette: Palette::frost(),
			groups: default_groups(),
		}
	}

	/// Drifting sparks with long fade trails
	pub fn ember() -> Self {
		Self {
			name: "ember",
			motion: Motion::Drift,
			trail: Trail::Fade(0.08),
			shape: Shape::Dot,
			interaction_radius: 140.0,
			background: BackgroundStyle {
				color: Color::rgb(26, 18, 14),
				color_secondary: Color::rgb(34, 24, 18),
				use_gradient: false,
				vignette: 0.0,
			},
			palette: Palette::embers(),
			groups: default_groups(),
		}
	}

	/// Inertial flow with soft trails
	pub fn tide() -> Self {
		Self {
			name: "tide",
			motion: Motion::Inertial,
			trail: Trail::Fade(0.12),
			shape: Shape::Dot,
			interaction_radius: 200.0,
			background: BackgroundStyle {
				color: Color::rgb(12, 22, 30),
				color_secondary: Color::rgb(16, 30, 40),
				use_gradient: false,
				vignette: 0.0,
			},
			palette: Palette::tide(),
			groups: default_groups(),
		}
	}

	/// Corner-seeking streaks with an occasional dwell at the pulsing center
	pub fn swarm() -> Self {
		Self {
			name: "swarm",
			motion: Motion::Steer,
			trail: Trail::Fade(0.1),
			shape: Shape::Streak,
			interaction_radius: 200.0,
			background: BackgroundStyle {
				color: Color::rgb(18, 14, 26),
				color_secondary: Color::rgb(26, 20, 36),
				use_gradient: false,
				vignette: 0.0,
			},
			palette: Palette::dusk(),
			groups: default_groups(),
		}
	}

	/// Looks up a built-in theme by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"drift" => Some(Self::drift()),
			"ember" => Some(Self::ember()),
			"tide" => Some(Self::tide()),
			"swarm" => Some(Self::swarm()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::drift()
	}
}
