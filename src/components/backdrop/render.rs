//! Canvas painting for the backdrop.
//!
//! One pass per frame: the trail/clear paint, then every particle in
//! population order. Draw ordering between particles is cosmetic only; the
//! simulation never depends on it. Canvas calls that return `Result` are
//! discarded; a frame must never throw.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use super::particle::Particle;
use super::theme::{Shape, Theme, Trail};

/// Paints one frame of the field.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &Theme) {
	let bounds = field.bounds();
	let (width, height) = (bounds.width, bounds.height);

	match theme.trail {
		Trail::Clear => draw_background(ctx, theme, width, height),
		Trail::Fade(alpha) => {
			ctx.set_fill_style_str(&theme.background.color.with_alpha(alpha).to_css());
			ctx.fill_rect(0.0, 0.0, width, height);
		}
	}

	for particle in &field.particles {
		match theme.shape {
			Shape::Dot => draw_dot(ctx, particle),
			Shape::Streak => draw_streak(ctx, particle),
		}
	}

	if theme.background.vignette > 0.0 {
		draw_vignette(ctx, theme, width, height);
	}
}

/// Paints the background opaquely, regardless of trail mode.
///
/// Called once at startup and after resizes so fade trails accumulate on a
/// solid ground instead of a transparent canvas.
pub fn prime(ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64, height: f64) {
	draw_background(ctx, theme, width, height);
}

fn draw_background(ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64, height: f64) {
	if theme.background.use_gradient {
		let Ok(gradient) = ctx.create_radial_gradient(
			width / 2.0,
			height / 2.0,
			0.0,
			width / 2.0,
			height / 2.0,
			width.max(height) * 0.8,
		) else {
			ctx.set_fill_style_str(&theme.background.color.to_css());
			ctx.fill_rect(0.0, 0.0, width, height);
			return;
		};

		let _ = gradient.add_color_stop(0.0, &theme.background.color_secondary.to_css());
		let _ = gradient.add_color_stop(1.0, &theme.background.color.to_css());

		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
	} else {
		ctx.set_fill_style_str(&theme.background.color.to_css());
	}

	ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_vignette(ctx: &CanvasRenderingContext2d, theme: &Theme, width: f64, height: f64) {
	let Ok(gradient) = ctx.create_radial_gradient(
		width / 2.0,
		height / 2.0,
		width.min(height) * 0.3,
		width / 2.0,
		height / 2.0,
		width.max(height) * 0.7,
	) else {
		return;
	};

	let _ = gradient.add_color_stop(0.0, "rgba(0, 0, 0, 0)");
	let _ = gradient.add_color_stop(
		1.0,
		&format!("rgba(0, 0, 0, {})", theme.background.vignette),
	);

	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, width, height);
}

fn draw_dot(ctx: &CanvasRenderingContext2d, particle: &Particle) {
	let color = particle.color.with_alpha(particle.depth_alpha());
	ctx.set_fill_style_str(&color.to_css());

	ctx.begin_path();
	let _ = ctx.arc(particle.x, particle.y, particle.size, 0.0, PI * 2.0);
	ctx.fill();
}

fn draw_streak(ctx: &CanvasRenderingContext2d, particle: &Particle) {
	let color = particle.color.with_alpha(particle.speed_alpha());
	let (length, thickness) = (particle.size * 3.0, particle.size);

	ctx.save();
	let _ = ctx.translate(particle.x, particle.y);
	let _ = ctx.rotate(particle.heading);
	ctx.set_fill_style_str(&color.to_css());
	trace_rounded_rect(
		ctx,
		-length / 2.0,
		-thickness / 2.0,
		length,
		thickness,
		thickness / 2.0,
	);
	ctx.fill();
	ctx.restore();
}

/// Traces a rounded-rectangle path around the current origin.
fn trace_rounded_rect(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	width: f64,
	height: f64,
	radius: f64,
) {
	let radius = radius.min(width / 2.0).min(height / 2.0);
	ctx.begin_path();
	ctx.move_to(x + radius, y);
	let _ = ctx.arc_to(x + width, y, x + width, y + height, radius);
	let _ = ctx.arc_to(x + width, y + height, x, y + height, radius);
	let _ = ctx.arc_to(x, y + height, x, y, radius);
	let _ = ctx.arc_to(x, y, x + width, y, radius);
	ctx.close_path();
}
