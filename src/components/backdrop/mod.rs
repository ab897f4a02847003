//! Animated particle backdrop component.
//!
//! Renders a decorative particle field on an HTML canvas with:
//! - Three motion strategies: sinusoidal drift, damped inertial wander, and
//!   corner/center goal-steering with a coherent flow field
//! - Pointer repulsion within a per-theme interaction radius
//! - Full population rebuild on viewport resize
//! - Configurable themes: palette, trail fading, particle shape
//!
//! # Example
//!
//! ```ignore
//! use parallax_backdrop::BackdropCanvas;
//!
//! view! { <BackdropCanvas fullscreen=true /> }
//! ```

mod component;
pub mod config;
pub mod field;
pub mod particle;
mod render;
pub mod theme;

pub use component::BackdropCanvas;
pub use config::BackdropConfig;
pub use field::ParticleField;
pub use theme::Theme;
