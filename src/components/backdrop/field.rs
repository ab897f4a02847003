//! Particle population and the per-frame simulation step.
//!
//! [`ParticleField`] owns the drawing-surface dimensions, the global time
//! accumulator, and the particle collection. It is pure with respect to the
//! DOM: the component layer feeds it sizes, delta times, and pointer state,
//! so the whole simulation runs host-side in tests.

use rand::Rng;

use super::particle::{Bounds, Frame, Particle};
use super::theme::Theme;

/// Owns the surface bounds and the particle population.
pub struct ParticleField {
	/// Particles in draw order.
	pub particles: Vec<Particle>,
	width: f64,
	height: f64,
	time: f64,
}

impl ParticleField {
	/// Creates a field sized to the surface and populates it from the
	/// theme's layer groups.
	pub fn new<R: Rng>(theme: &Theme, width: f64, height: f64, rng: &mut R) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			width,
			height,
			time: 0.0,
		};
		field.init(theme, rng);
		field
	}

	/// Discards and rebuilds the whole population from the theme's groups.
	pub fn init<R: Rng>(&mut self, theme: &Theme, rng: &mut R) {
		let bounds = self.bounds();
		let total: usize = theme.groups.iter().map(|g| g.count).sum();
		let mut particles = Vec::with_capacity(total);
		for group in &theme.groups {
			for _ in 0..group.count {
				particles.push(Particle::spawn(
					group.depth,
					&theme.palette.colors,
					bounds,
					rng,
				));
			}
		}
		self.particles = particles;
	}

	/// Adopts new surface dimensions and rebuilds the population.
	///
	/// Particles are recreated, not migrated; identities do not survive a
	/// resize.
	pub fn resize<R: Rng>(&mut self, theme: &Theme, width: f64, height: f64, rng: &mut R) {
		self.width = width;
		self.height = height;
		self.init(theme, rng);
	}

	/// Advances the time accumulator and updates every particle once.
	pub fn step<R: Rng>(
		&mut self,
		theme: &Theme,
		dt: f64,
		pointer: Option<(f64, f64)>,
		rng: &mut R,
	) {
		self.time += dt;
		let frame = Frame {
			dt,
			time: self.time,
			pointer,
			bounds: self.bounds(),
			interaction_radius: theme.interaction_radius,
		};
		for particle in &mut self.particles {
			particle.update(theme.motion, &frame, rng);
		}
	}

	/// Current surface extent.
	pub fn bounds(&self) -> Bounds {
		Bounds {
			width: self.width,
			height: self.height,
		}
	}

	/// Monotonic time accumulator in seconds.
	pub fn time(&self) -> f64 {
		self.time
	}
}
