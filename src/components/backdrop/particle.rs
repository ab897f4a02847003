//! Particle state and per-frame motion.
//!
//! One particle struct serves every backdrop variant; the differences live in
//! [`Motion`], selected by the active theme. Updates consume an explicit
//! [`Frame`] context (delta time, global time, pointer, bounds) instead of
//! ambient globals, so a single particle's step is testable off the DOM.

use std::f64::consts::TAU;

use rand::Rng;

use super::theme::Color;

/// Width of the off-screen band a particle may occupy before wrapping.
pub const WRAP_MARGIN: f64 = 10.0;

/// Steering goal timer resample range, in 60 Hz frames.
pub const GOAL_TIMER_RANGE: std::ops::Range<f64> = 300.0..700.0;

/// Probability that an expired steering goal retargets the center.
pub const CENTER_CHANCE: f64 = 0.15;

/// Velocity retained per frame by the inertial and steering motions.
const DAMPING: f64 = 0.97;

/// Corner goals sit at this fraction of the surface dimensions (and its
/// complement), i.e. the 10%/90% points.
const CORNER_INSET: f64 = 0.1;

/// Peak displacement of the pointer push, in pixels per frame.
const PUSH_STRENGTH: f64 = 2.4;

/// Gain on the inverse-distance pointer repulsion used by steering.
const REPULSE_STRENGTH: f64 = 3.0;

/// Gain on the sinusoidal wander force for inertial motion.
const WANDER_FORCE: f64 = 0.05;

/// Gain on the flow-field acceleration for steering motion.
const FLOW_FORCE: f64 = 0.045;

/// Attraction gain toward a corner goal, per pixel of distance.
const CORNER_PULL: f64 = 0.0016;

/// Attraction gain toward the center goal, per pixel of distance.
const CENTER_PULL: f64 = 0.0024;

/// Speed ceiling (px/frame) while seeking a corner, scaled by layer.
const CORNER_SPEED_CAP: f64 = 3.2;

/// Speed ceiling (px/frame) while dwelling at the center, scaled by layer.
const CENTER_SPEED_CAP: f64 = 4.6;

/// Motion strategy applied by [`Particle::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
	/// Sinusoidal wander applied directly to position; exact edge wrap.
	Drift,
	/// Sinusoidal wander accumulated as a damped force on velocity;
	/// margin-band wrap.
	Inertial,
	/// Goal-seeking with a deterministic flow field; margin-band wrap.
	Steer,
}

/// Steering target selector.
///
/// The carried index is the position in the corner rotation: for
/// [`Goal::Corner`] it is the corner currently targeted, for [`Goal::Center`]
/// it is the corner the rotation resumes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Goal {
	/// Orbiting one of the four corner regions (index 0..=3, rotation order).
	Corner(u8),
	/// Dwelling at the pulsing center region.
	Center(u8),
}

/// Surface extent a particle moves within.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

/// Per-frame inputs shared by every particle update.
#[derive(Clone, Copy, Debug)]
pub struct Frame {
	/// Seconds since the previous frame.
	pub dt: f64,
	/// Monotonic time accumulator in seconds.
	pub time: f64,
	/// Last known pointer position, `None` after pointer-leave.
	pub pointer: Option<(f64, f64)>,
	pub bounds: Bounds,
	/// Radius within which the pointer pushes particles away.
	pub interaction_radius: f64,
}

/// A single animated particle.
///
/// Everything random about a particle is decided at [`Particle::spawn`] /
/// [`Particle::reset`]; `update` only draws randomness for steering goal
/// transitions.
#[derive(Clone, Debug)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Facing angle in radians, derived from velocity (streak rendering).
	pub heading: f64,
	/// Fixed depth weight; scales size, opacity, speed and force response.
	pub layer: f64,
	/// Radius of the dot, or half-height of the streak.
	pub size: f64,
	pub color: Color,
	/// Current steering target (ignored by the drift motions).
	pub goal: Goal,
	/// Frames until the next goal transition.
	pub goal_timer: f64,
	orbit_radius: f64,
	orbit_speed: f64,
	phase: f64,
	base_speed: f64,
}

impl Particle {
	/// Creates a particle with motion parameters fixed for its lifetime,
	/// then places it via [`Particle::reset`].
	pub fn spawn<R: Rng>(layer: f64, palette: &[Color], bounds: Bounds, rng: &mut R) -> Self {
		let mut particle = Self {
			x: 0.0,
			y: 0.0,
			vx: 0.0,
			vy: 0.0,
			heading: 0.0,
			layer,
			size: 0.0,
			color: palette[rng.gen_range(0..palette.len())],
			goal: Goal::Corner(0),
			goal_timer: 0.0,
			orbit_radius: rng.gen_range(20.0..80.0),
			orbit_speed: rng.gen_range(0.4..1.6),
			phase: rng.gen_range(0.0..TAU),
			base_speed: rng.gen_range(0.3..1.2),
		};
		particle.reset(bounds, rng);
		particle
	}

	/// Re-randomizes position, size, and steering state within `bounds`.
	pub fn reset<R: Rng>(&mut self, bounds: Bounds, rng: &mut R) {
		self.x = rng.gen_range(0.0..bounds.width.max(1.0));
		self.y = rng.gen_range(0.0..bounds.height.max(1.0));
		self.vx = 0.0;
		self.vy = 0.0;
		self.heading = 0.0;
		self.size = 0.5 + self.layer * rng.gen_range(1.0..2.8);
		self.goal = Goal::Corner(rng.gen_range(0..4));
		self.goal_timer = rng.gen_range(GOAL_TIMER_RANGE);
	}

	/// Advances one simulated step under the given motion strategy.
	pub fn update<R: Rng>(&mut self, motion: Motion, frame: &Frame, rng: &mut R) {
		match motion {
			Motion::Drift => self.update_drift(frame),
			Motion::Inertial => self.update_inertial(frame),
			Motion::Steer => self.update_steer(frame, rng),
		}
	}

	fn update_drift(&mut self, frame: &Frame) {
		let step = frame.dt * 60.0;
		let t = frame.time;

		self.x += (t * self.orbit_speed + self.phase + self.y * 0.004).sin()
			* self.base_speed
			* self.layer
			* step;
		self.y += (t * self.orbit_speed * 0.8 + self.phase + self.x * 0.004).cos()
			* self.base_speed
			* self.layer
			* step;

		if let Some((px, py)) = frame.pointer {
			let (ox, oy) = pointer_push(self.x, self.y, px, py, frame.interaction_radius);
			self.x += ox * self.layer * step;
			self.y += oy * self.layer * step;
		}

		self.x = wrap_exact(self.x, frame.bounds.width);
		self.y = wrap_exact(self.y, frame.bounds.height);
	}

	fn update_inertial(&mut self, frame: &Frame) {
		let step = frame.dt * 60.0;
		let t = frame.time;

		self.vx += (t * self.orbit_speed + self.phase + self.y * 0.004).sin()
			* self.base_speed
			* self.layer
			* WANDER_FORCE
			* step;
		self.vy += (t * self.orbit_speed * 0.8 + self.phase + self.x * 0.004).cos()
			* self.base_speed
			* self.layer
			* WANDER_FORCE
			* step;

		if let Some((px, py)) = frame.pointer {
			let (fx, fy) = pointer_push(self.x, self.y, px, py, frame.interaction_radius);
			self.vx += fx * self.layer * step;
			self.vy += fy * self.layer * step;
		}

		self.vx *= DAMPING;
		self.vy *= DAMPING;
		self.x += self.vx * step;
		self.y += self.vy * step;

		self.x = wrap_margin(self.x, frame.bounds.width);
		self.y = wrap_margin(self.y, frame.bounds.height);
	}

	fn update_steer<R: Rng>(&mut self, frame: &Frame, rng: &mut R) {
		let step = frame.dt * 60.0;

		self.goal_timer -= step;
		if self.goal_timer <= 0.0 {
			self.goal = next_goal(self.goal, rng);
			self.goal_timer = rng.gen_range(GOAL_TIMER_RANGE);
		}

		let (tx, ty) = self.goal_point(frame);
		let pull = self.layer
			* match self.goal {
				Goal::Corner(_) => CORNER_PULL,
				Goal::Center(_) => CENTER_PULL,
			};
		self.vx += (tx - self.x) * pull * step;
		self.vy += (ty - self.y) * pull * step;

		// Deterministic flow field: nearby particles accelerate coherently.
		let t = frame.time;
		self.vx += ((self.y * 0.006 + t * 0.7).sin() + (self.x * 0.004 - t * 0.3).cos())
			* FLOW_FORCE
			* step;
		self.vy += ((self.x * 0.006 - t * 0.5).cos() - (self.y * 0.004 + t * 0.4).sin())
			* FLOW_FORCE
			* step;

		if let Some((px, py)) = frame.pointer {
			let (fx, fy) = pointer_repulse(self.x, self.y, px, py, frame.interaction_radius);
			self.vx += fx * self.layer * step;
			self.vy += fy * self.layer * step;
		}

		self.vx *= DAMPING;
		self.vy *= DAMPING;

		let cap = self.layer
			* match self.goal {
				Goal::Corner(_) => CORNER_SPEED_CAP,
				Goal::Center(_) => CENTER_SPEED_CAP,
			};
		let speed = (self.vx * self.vx + self.vy * self.vy).sqrt();
		if speed > cap {
			let scale = cap / speed;
			self.vx *= scale;
			self.vy *= scale;
		}

		self.x += self.vx * step;
		self.y += self.vy * step;

		if self.vx != 0.0 || self.vy != 0.0 {
			self.heading = self.vy.atan2(self.vx);
		}

		self.x = wrap_margin(self.x, frame.bounds.width);
		self.y = wrap_margin(self.y, frame.bounds.height);
	}

	/// Current steering target: a corner anchor plus this particle's orbit,
	/// or the pulsing center.
	fn goal_point(&self, frame: &Frame) -> (f64, f64) {
		let Bounds { width, height } = frame.bounds;
		let t = frame.time;
		let angle = t * self.orbit_speed + self.phase;
		match self.goal {
			Goal::Corner(i) => {
				let (cx, cy) = corner_anchor(i, width, height);
				(
					cx + angle.cos() * self.orbit_radius,
					cy + angle.sin() * self.orbit_radius,
				)
			}
			Goal::Center(_) => {
				let pulse = self.orbit_radius * (0.4 + 0.6 * (t * 2.0 + self.phase).sin().abs());
				(
					width / 2.0 + angle.cos() * pulse,
					height / 2.0 + angle.sin() * pulse,
				)
			}
		}
	}

	/// Current speed in pixels per frame.
	pub fn speed(&self) -> f64 {
		(self.vx * self.vx + self.vy * self.vy).sqrt()
	}

	/// Opacity for depth-faded dot rendering.
	pub fn depth_alpha(&self) -> f64 {
		0.2 + 0.6 * self.layer
	}

	/// Opacity for streak rendering: faster particles read brighter.
	pub fn speed_alpha(&self) -> f64 {
		((0.12 + 0.16 * self.speed()) * (0.4 + 0.6 * self.layer)).min(0.85)
	}
}

/// Picks the next steering goal: a small chance to dwell at the center,
/// otherwise the next corner in rotation.
pub fn next_goal<R: Rng>(current: Goal, rng: &mut R) -> Goal {
	let i = match current {
		Goal::Corner(i) | Goal::Center(i) => i,
	};
	if rng.gen_bool(CENTER_CHANCE) {
		Goal::Center(i)
	} else {
		Goal::Corner((i + 1) % 4)
	}
}

/// Corner anchor positions, indexed clockwise from top-left, inset to the
/// 10%/90% points of the surface.
fn corner_anchor(i: u8, width: f64, height: f64) -> (f64, f64) {
	let (lo_x, hi_x) = (width * CORNER_INSET, width * (1.0 - CORNER_INSET));
	let (lo_y, hi_y) = (height * CORNER_INSET, height * (1.0 - CORNER_INSET));
	match i % 4 {
		0 => (lo_x, lo_y),
		1 => (hi_x, lo_y),
		2 => (hi_x, hi_y),
		_ => (lo_x, hi_y),
	}
}

/// Displacement pushing a point away from the pointer, with a
/// `(radius - dist) / radius` falloff. Zero at or beyond the radius; the
/// distance divisor is floored at 1.0 so coincident points stay finite.
pub fn pointer_push(x: f64, y: f64, px: f64, py: f64, radius: f64) -> (f64, f64) {
	let (dx, dy) = (x - px, y - py);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist >= radius {
		return (0.0, 0.0);
	}
	let falloff = (radius - dist) / radius;
	let inv = 1.0 / dist.max(1.0);
	(
		dx * inv * falloff * PUSH_STRENGTH,
		dy * inv * falloff * PUSH_STRENGTH,
	)
}

/// Repulsion force inversely related to the pointer distance, used by the
/// steering motion. Same finiteness guard as [`pointer_push`].
pub fn pointer_repulse(x: f64, y: f64, px: f64, py: f64, radius: f64) -> (f64, f64) {
	let (dx, dy) = (x - px, y - py);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist >= radius {
		return (0.0, 0.0);
	}
	let strength = (radius - dist) / dist.max(1.0) / radius * REPULSE_STRENGTH;
	let inv = 1.0 / dist.max(1.0);
	(dx * inv * strength, dy * inv * strength)
}

/// Wraps a coordinate that left `[0, max]` to the opposite edge.
pub fn wrap_exact(v: f64, max: f64) -> f64 {
	if v < 0.0 {
		max
	} else if v > max {
		0.0
	} else {
		v
	}
}

/// Wraps through the ±[`WRAP_MARGIN`] band: a coordinate leaving one side of
/// the band re-enters at the far side.
pub fn wrap_margin(v: f64, max: f64) -> f64 {
	if v < -WRAP_MARGIN {
		max + WRAP_MARGIN
	} else if v > max + WRAP_MARGIN {
		-WRAP_MARGIN
	} else {
		v
	}
}
