// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use std::collections::HashSet;

use fabric_field::components::fabric_field::theme::resolve_accent;
use fabric_field::components::fabric_field::{
	AnimationLoop, FieldConfig, FieldState, FrameRequester, LoopState, StaticAccent, Surface,
	Vec2, Viewport,
};

/// Records every drawing call in order.
#[derive(Default)]
struct Recorder {
	ops: Vec<Op>,
}

#[derive(Clone, Debug, PartialEq)]
enum Op {
	Clear(f64, f64),
	Circle { center: Vec2, radius: f64, color: String, alpha: f64 },
	Segments { segments: Vec<(Vec2, Vec2)>, color: String, alpha: f64 },
}

impl Surface for Recorder {
	fn clear(&mut self, width: f64, height: f64) {
		self.ops.push(Op::Clear(width, height));
	}

	fn fill_circle(&mut self, center: Vec2, radius: f64, color: &str, alpha: f64) {
		self.ops.push(Op::Circle {
			center,
			radius,
			color: color.to_string(),
			alpha,
		});
	}

	fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: &str, alpha: f64, _width: f64) {
		self.ops.push(Op::Segments {
			segments: segments.to_vec(),
			color: color.to_string(),
			alpha,
		});
	}
}

#[derive(Default)]
struct Counting {
	requested: i32,
	cancelled: usize,
}

impl FrameRequester for Counting {
	fn request_frame(&mut self) -> Option<i32> {
		self.requested += 1;
		Some(self.requested)
	}

	fn cancel_frame(&mut self, _handle: i32) {
		self.cancelled += 1;
	}
}

fn field(width: u32, height: u32) -> FieldState {
	let mut field = FieldState::new(FieldConfig::default());
	field.resize(Viewport::new(width, height), 3.0);
	field
}

// ==================================================================================
// Grid
// ==================================================================================

#[test]
fn grid_layout_is_deterministic() {
	let a = field(640, 480);
	let mut b = FieldState::new(FieldConfig::default());
	b.resize(Viewport::new(640, 480), 9001.0);

	assert_eq!(a.particles().len(), 16 * 12);
	let rests = |f: &FieldState| f.particles().iter().map(|p| p.rest).collect::<Vec<_>>();
	assert_eq!(rests(&a), rests(&b));
}

#[test]
fn resize_discards_motion() {
	let mut field = field(400, 300);
	field.pointer_moved(200.0, 150.0, 0.0, 0.0);
	for _ in 0..10 {
		field.step();
	}
	assert!(field.particles().iter().any(|p| p.position != p.rest));

	field.resize(Viewport::new(200, 120), 4.0);
	assert_eq!(field.viewport(), Viewport::new(200, 120));
	assert_eq!(field.particles().len(), 5 * 3);
	for p in field.particles() {
		assert_eq!(p.position, p.rest);
		assert_eq!(p.velocity, Vec2::ZERO);
		assert!(p.rest.x < 200.0 + 20.0 && p.rest.y < 120.0);
	}
}

#[test]
fn unchanged_viewport_keeps_motion() {
	let mut field = field(400, 300);
	field.pointer_moved(200.0, 150.0, 0.0, 0.0);
	field.step();
	let moved: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
	assert!(field.particles().iter().any(|p| p.position != p.rest));

	assert!(!field.resize_if_changed(Viewport::new(400, 300), 8.0));
	let kept: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
	assert_eq!(kept, moved);

	// A parent that shrank without a window resize.
	assert!(field.resize_if_changed(Viewport::new(400, 200), 8.0));
	assert_eq!(field.particles().len(), 10 * 5);
	assert!(field.particles().iter().all(|p| p.position == p.rest));
}

#[test]
fn tiny_configured_spacing_stays_bounded() {
	let config = FieldConfig::from_json(r#"{ "grid": { "spacing": 1e-9 } }"#).unwrap();
	let mut field = FieldState::new(config);
	assert_eq!(field.config().grid.spacing, 1.0);

	field.resize(Viewport::new(800, 600), 1.0);
	assert!(field.particles().is_empty());
	field.step();

	field.resize(Viewport::new(100, 50), 1.0);
	assert_eq!(field.particles().len(), 100 * 50);
}

#[test]
fn pointer_is_surface_local() {
	let mut field = field(400, 300);
	field.pointer_moved(130.0, 90.0, 100.0, 60.0);
	assert_eq!(field.pointer().position(), Some(Vec2::new(30.0, 30.0)));
	field.pointer_left();
	assert_eq!(field.pointer().position(), None);
}

// ==================================================================================
// Integration
// ==================================================================================

#[test]
fn untouched_field_stays_at_rest() {
	let mut field = field(400, 300);
	for _ in 0..50 {
		field.step();
	}
	for p in field.particles() {
		assert_eq!(p.position, p.rest);
	}
}

#[test]
fn pointer_only_moves_particles_in_range() {
	let mut field = field(800, 400);
	field.pointer_moved(400.0, 200.0, 0.0, 0.0);
	let pointer = Vec2::new(400.0, 200.0);
	let max_influence = field.config().forces.max_influence;
	field.step();

	for p in field.particles() {
		let d = p.rest.distance(pointer);
		if d >= max_influence {
			assert_eq!(p.velocity, Vec2::ZERO, "moved from {:?}", p.rest);
		} else if d > 0.0 {
			// Pushed away from the pointer.
			assert!(p.position.distance(pointer) > d, "pulled in at {:?}", p.rest);
		}
	}
}

#[test]
fn values_stay_finite_under_pointer_sweeps() {
	let mut field = field(300, 200);
	for frame in 0..600 {
		let t = frame as f64 * 0.05;
		field.pointer_moved(150.0 + 140.0 * t.cos(), 100.0 + 90.0 * t.sin(), 0.0, 0.0);
		field.step();
	}
	for p in field.particles() {
		assert!(p.position.is_finite() && p.velocity.is_finite());
	}
}

// ==================================================================================
// Rendering
// ==================================================================================

#[test]
fn frame_clears_then_draws_particles_then_lines() {
	let field = field(80, 40);
	let mut surface = Recorder::default();
	let stats = field.render(&mut surface, "#ff6600");

	assert_eq!(stats.particles, 2);
	assert_eq!(stats.connections, 1);
	assert_eq!(surface.ops[0], Op::Clear(80.0, 40.0));
	assert_eq!(surface.ops.len(), 4);
	match &surface.ops[1] {
		Op::Circle {
			center,
			radius,
			color,
			alpha,
		} => {
			assert_eq!(*center, Vec2::new(0.0, 0.0));
			assert!(*radius > 0.0);
			assert_eq!(color, "#ff6600");
			assert_eq!(*alpha, 0.4);
		}
		other => panic!("expected a circle, got {:?}", other),
	}
	assert_eq!(
		surface.ops[3],
		Op::Segments {
			segments: vec![(Vec2::new(0.0, 0.0), Vec2::new(40.0, 0.0))],
			color: "#ff6600".to_string(),
			alpha: 0.15,
		}
	);
}

#[test]
fn each_connection_is_drawn_once() {
	let field = field(200, 200);
	let mut surface = Recorder::default();
	let stats = field.render(&mut surface, "#000");

	let Some(Op::Segments {
		segments, alpha, ..
	}) = surface.ops.last()
	else {
		panic!("no segment batch");
	};
	assert_eq!(*alpha, 0.15);
	assert_eq!(segments.len(), stats.connections);
	assert!(stats.connections > 0);

	let key = |v: Vec2| (v.x.to_bits(), v.y.to_bits());
	let mut seen = HashSet::new();
	for (a, b) in segments {
		assert_ne!(a, b, "particle joined to itself");
		assert!(a.distance(*b) < 50.0);
		let (ka, kb) = (key(*a), key(*b));
		let pair = if ka < kb { (ka, kb) } else { (kb, ka) };
		assert!(seen.insert(pair), "duplicate segment {:?} - {:?}", a, b);
	}
}

#[test]
fn empty_viewport_draws_nothing() {
	let mut field = field(0, 0);
	assert!(field.particles().is_empty());
	field.pointer_moved(10.0, 10.0, 0.0, 0.0);
	field.step();

	let mut surface = Recorder::default();
	let stats = field.render(&mut surface, "#000");
	assert_eq!(stats.particles, 0);
	assert_eq!(surface.ops.len(), 2);
}

#[test]
fn accent_is_resolved_per_frame() {
	let field = field(80, 40);
	let fallback = field.config().style.fallback_accent.clone();

	let mut surface = Recorder::default();
	field.render(&mut surface, &resolve_accent(&StaticAccent(None), &fallback));
	field.render(
		&mut surface,
		&resolve_accent(&StaticAccent(Some("#22c55e".into())), &fallback),
	);

	let colors: Vec<&str> = surface
		.ops
		.iter()
		.filter_map(|op| match op {
			Op::Circle { color, .. } => Some(color.as_str()),
			_ => None,
		})
		.collect();
	assert_eq!(colors, vec!["#3b82f6", "#3b82f6", "#22c55e", "#22c55e"]);
}

// ==================================================================================
// Scheduling
// ==================================================================================

#[test]
fn loop_drives_step_and_render() {
	let mut field = field(400, 300);
	field.pointer_moved(200.0, 150.0, 0.0, 0.0);
	let mut surface = Recorder::default();
	let mut anim = AnimationLoop::new(Counting::default());

	assert!(anim.start());
	for _ in 0..5 {
		anim.run_frame(|| {
			field.step();
			field.render(&mut surface, "#fff");
		});
	}
	assert_eq!(anim.frames(), 5);
	assert_eq!(
		surface.ops.iter().filter(|op| matches!(op, Op::Clear(..))).count(),
		5
	);

	// Resizing mid-run does not touch the loop.
	field.resize(Viewport::new(100, 100), 1.0);
	assert_eq!(anim.state(), LoopState::Running);
}

#[test]
fn double_cancel_stops_scheduling() {
	let mut anim = AnimationLoop::new(Counting::default());
	anim.start();
	anim.run_frame(|| {});
	let requested = anim.requester().requested;

	assert!(anim.cancel());
	assert!(!anim.cancel());
	assert_eq!(anim.requester().cancelled, 1);

	let mut ran = false;
	assert!(!anim.run_frame(|| ran = true));
	assert!(!ran);
	assert_eq!(anim.requester().requested, requested);
	assert_eq!(anim.state(), LoopState::Cancelled);
}
