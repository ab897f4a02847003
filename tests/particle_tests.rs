//! Host-side tests for particle motion. The rendering layer never runs here;
//! everything below drives the simulation with explicit frames and seeded
//! RNGs.

// Test target only exercises the simulation modules, silence noisy lint.
#![allow(unused_crate_dependencies)]

use parallax_backdrop::components::backdrop::particle::{
	Bounds, CENTER_CHANCE, Frame, Goal, Motion, Particle, WRAP_MARGIN, next_goal, pointer_push,
	pointer_repulse, wrap_exact, wrap_margin,
};
use parallax_backdrop::components::backdrop::theme::Palette;
use rand::SeedableRng;
use rand::rngs::StdRng;

const WIDTH: f64 = 1280.0;
const HEIGHT: f64 = 720.0;

fn bounds() -> Bounds {
	Bounds {
		width: WIDTH,
		height: HEIGHT,
	}
}

fn frame(time: f64, pointer: Option<(f64, f64)>) -> Frame {
	Frame {
		dt: 1.0 / 60.0,
		time,
		pointer,
		bounds: bounds(),
		interaction_radius: 140.0,
	}
}

fn spawn(layer: f64, rng: &mut StdRng) -> Particle {
	Particle::spawn(layer, &Palette::frost().colors, bounds(), rng)
}

#[test]
fn positions_stay_finite_and_bounded_under_all_motions() {
	let mut rng = StdRng::seed_from_u64(1);
	for motion in [Motion::Drift, Motion::Inertial, Motion::Steer] {
		let mut particles: Vec<Particle> = (0..40usize)
			.map(|i| spawn([1.0, 0.6, 0.3][i % 3], &mut rng))
			.collect();

		for step in 0..2000 {
			let t = step as f64 / 60.0;
			// Sweep the pointer across the surface so interaction kicks in.
			let pointer = Some((
				(t * 90.0) % WIDTH,
				(t * 55.0) % HEIGHT,
			));
			let f = frame(t, pointer);
			for p in &mut particles {
				p.update(motion, &f, &mut rng);
				assert!(p.x.is_finite() && p.y.is_finite(), "{motion:?} produced non-finite");
				assert!(
					(-WRAP_MARGIN..=WIDTH + WRAP_MARGIN).contains(&p.x),
					"{motion:?} x escaped: {}",
					p.x
				);
				assert!(
					(-WRAP_MARGIN..=HEIGHT + WRAP_MARGIN).contains(&p.y),
					"{motion:?} y escaped: {}",
					p.y
				);
			}
		}
	}
}

#[test]
fn layer_is_invariant_across_updates() {
	let mut rng = StdRng::seed_from_u64(2);
	for motion in [Motion::Drift, Motion::Inertial, Motion::Steer] {
		let mut p = spawn(0.6, &mut rng);
		for step in 0..500 {
			let f = frame(step as f64 / 60.0, Some((p.x + 5.0, p.y)));
			p.update(motion, &f, &mut rng);
			assert_eq!(p.layer, 0.6);
		}
	}
}

#[test]
fn wrap_exact_crosses_to_opposite_edge() {
	assert_eq!(wrap_exact(-0.5, 100.0), 100.0);
	assert_eq!(wrap_exact(100.5, 100.0), 0.0);
	assert_eq!(wrap_exact(50.0, 100.0), 50.0);
	assert_eq!(wrap_exact(0.0, 100.0), 0.0);
}

#[test]
fn wrap_margin_crosses_through_the_band() {
	assert_eq!(wrap_margin(-WRAP_MARGIN - 0.2, 100.0), 100.0 + WRAP_MARGIN);
	assert_eq!(wrap_margin(100.0 + WRAP_MARGIN + 0.5, 100.0), -WRAP_MARGIN);
	// Inside the band nothing happens.
	assert_eq!(wrap_margin(-5.0, 100.0), -5.0);
	assert_eq!(wrap_margin(104.0, 100.0), 104.0);
}

#[test]
fn wrap_leaves_complementary_coordinate_unchanged() {
	let mut rng = StdRng::seed_from_u64(3);

	// dt = 0 makes motion a no-op, leaving only the boundary handling.
	let zero_dt = Frame {
		dt: 0.0,
		time: 1.0,
		pointer: None,
		bounds: bounds(),
		interaction_radius: 140.0,
	};

	let mut p = spawn(1.0, &mut rng);
	p.x = WIDTH + 3.0;
	p.y = 42.0;
	p.update(Motion::Drift, &zero_dt, &mut rng);
	assert_eq!(p.x, 0.0);
	assert_eq!(p.y, 42.0);

	let mut p = spawn(1.0, &mut rng);
	p.x = -WRAP_MARGIN - 5.0;
	p.y = 42.0;
	p.update(Motion::Inertial, &zero_dt, &mut rng);
	assert_eq!(p.x, WIDTH + WRAP_MARGIN);
	assert_eq!(p.y, 42.0);
}

#[test]
fn absent_pointer_contributes_exactly_zero() {
	let mut rng = StdRng::seed_from_u64(4);
	let mut original = spawn(1.0, &mut rng);
	// Park it mid-surface so no wrap interferes with the comparison.
	original.x = WIDTH / 2.0;
	original.y = HEIGHT / 2.0;

	for motion in [Motion::Drift, Motion::Inertial] {
		let mut without = original.clone();
		let mut far = original.clone();
		without.update(motion, &frame(0.5, None), &mut rng);
		// A pointer beyond the interaction radius must be equivalent to none.
		far.update(
			motion,
			&frame(0.5, Some((original.x + 500.0, original.y + 500.0))),
			&mut rng,
		);
		assert_eq!(without.x, far.x);
		assert_eq!(without.y, far.y);

		let mut near = original.clone();
		near.update(motion, &frame(0.5, Some((original.x + 20.0, original.y))), &mut rng);
		assert_ne!((near.x, near.y), (without.x, without.y));
	}
}

#[test]
fn absent_pointer_is_inert_for_steering() {
	let seed_particle = {
		let mut rng = StdRng::seed_from_u64(5);
		let mut p = spawn(1.0, &mut rng);
		p.goal_timer = 1000.0; // no transition, so no RNG draw
		p
	};

	let mut r1 = StdRng::seed_from_u64(9);
	let mut r2 = StdRng::seed_from_u64(9);
	let mut without = seed_particle.clone();
	let mut far = seed_particle.clone();
	without.update(Motion::Steer, &frame(0.5, None), &mut r1);
	far.update(
		Motion::Steer,
		&frame(0.5, Some((seed_particle.x + 900.0, seed_particle.y))),
		&mut r2,
	);
	assert_eq!((without.x, without.y), (far.x, far.y));
	assert_eq!((without.vx, without.vy), (far.vx, far.vy));
}

#[test]
fn coincident_pointer_stays_finite() {
	let mut rng = StdRng::seed_from_u64(6);
	for motion in [Motion::Drift, Motion::Inertial, Motion::Steer] {
		let mut p = spawn(1.0, &mut rng);
		let on_top = Some((p.x, p.y));
		p.update(motion, &frame(0.25, on_top), &mut rng);
		assert!(p.x.is_finite() && p.y.is_finite());
		assert!(p.vx.is_finite() && p.vy.is_finite());
	}

	// The helpers themselves are total at distance zero.
	assert_eq!(pointer_push(10.0, 10.0, 10.0, 10.0, 140.0), (0.0, 0.0));
	let (fx, fy) = pointer_repulse(10.0, 10.0, 10.0, 10.0, 200.0);
	assert!(fx.is_finite() && fy.is_finite());
}

#[test]
fn pointer_push_is_zero_at_and_beyond_the_radius() {
	assert_eq!(pointer_push(0.0, 0.0, 140.0, 0.0, 140.0), (0.0, 0.0));
	assert_eq!(pointer_push(0.0, 0.0, 400.0, 0.0, 140.0), (0.0, 0.0));
	let (ox, _) = pointer_push(100.0, 0.0, 30.0, 0.0, 140.0);
	assert!(ox > 0.0, "inside the radius the push points away");
}

#[test]
fn expired_goal_timer_transitions_and_resamples() {
	let mut rng = StdRng::seed_from_u64(7);
	let base = spawn(1.0, &mut rng);

	let mut centers = 0usize;
	let trials = 1000;
	for _ in 0..trials {
		let mut p = base.clone();
		p.goal = Goal::Center(2);
		p.goal_timer = 0.0;
		p.update(Motion::Steer, &frame(1.0, None), &mut rng);

		match p.goal {
			Goal::Center(2) => centers += 1,
			Goal::Corner(3) => {}
			other => panic!("unexpected transition target: {other:?}"),
		}
		assert!(
			(300.0..700.0).contains(&p.goal_timer),
			"timer not resampled into range: {}",
			p.goal_timer
		);
	}

	// 15% center chance, with slack for a finite sample.
	let rate = centers as f64 / trials as f64;
	assert!(
		(CENTER_CHANCE - 0.07..CENTER_CHANCE + 0.07).contains(&rate),
		"center rate {rate} too far from {CENTER_CHANCE}"
	);
}

#[test]
fn corner_rotation_only_advances_to_the_successor() {
	let mut rng = StdRng::seed_from_u64(8);
	for _ in 0..200 {
		match next_goal(Goal::Corner(1), &mut rng) {
			Goal::Center(1) | Goal::Corner(2) => {}
			other => panic!("corner 1 jumped to {other:?}"),
		}
		// Rotation wraps after the last corner.
		match next_goal(Goal::Corner(3), &mut rng) {
			Goal::Center(3) | Goal::Corner(0) => {}
			other => panic!("corner 3 jumped to {other:?}"),
		}
	}
}

#[test]
fn steering_derives_heading_from_velocity() {
	let mut rng = StdRng::seed_from_u64(10);
	let mut p = spawn(1.0, &mut rng);
	p.goal_timer = 1000.0;
	for step in 0..120 {
		p.update(Motion::Steer, &frame(step as f64 / 60.0, None), &mut rng);
	}
	assert!(p.speed() > 0.0);
	let expected = p.vy.atan2(p.vx);
	assert!((p.heading - expected).abs() < 1e-9);
}

#[test]
fn reset_rerandomizes_within_bounds() {
	let mut rng = StdRng::seed_from_u64(11);
	let mut p = spawn(0.3, &mut rng);
	p.vx = 2.0;
	p.vy = -1.0;
	p.reset(bounds(), &mut rng);
	assert!((0.0..=WIDTH).contains(&p.x));
	assert!((0.0..=HEIGHT).contains(&p.y));
	assert_eq!((p.vx, p.vy), (0.0, 0.0));
	assert!(p.size > 0.0);
	assert!((300.0..700.0).contains(&p.goal_timer));
	assert_eq!(p.layer, 0.3);
}
