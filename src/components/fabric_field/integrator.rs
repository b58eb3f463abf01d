//! Per-frame force integration.
//!
//! Each frame, every particle is updated in this order:
//! 1. pointer repulsion (hard cutoff at `max_influence`),
//! 2. linear spring towards its rest position,
//! 3. damping of the accumulated velocity,
//! 4. explicit Euler step `position += velocity`.
//!
//! Damping runs after the forces, so it also attenuates this frame's new
//! forces. There is no time step: one call is one display frame.

use super::config::ForceParams;
use super::pointer::PointerState;
use super::types::{Particle, Vec2};

/// Normalized repulsion strength at pointer distance `d`: `1.0` at the
/// pointer, falling linearly to `0.0` at `max_influence` and exactly zero
/// from there on.
pub fn repulsion_strength(d: f64, max_influence: f64) -> f64 {
	if d < max_influence {
		(max_influence - d) / max_influence
	} else {
		0.0
	}
}

/// Velocity change caused by the pointer on a particle at `position`.
///
/// Points from the pointer towards the particle. A particle exactly under
/// the pointer has no defined direction and gets no push.
pub fn repulsion(position: Vec2, pointer: Vec2, params: &ForceParams) -> Vec2 {
	let away = position - pointer;
	let d = away.length();
	let strength = repulsion_strength(d, params.max_influence);
	if strength <= 0.0 || d <= f64::EPSILON {
		return Vec2::ZERO;
	}
	away * (strength * params.repulsion / d)
}

/// Advance one particle by one frame.
pub fn step_particle(particle: &mut Particle, pointer: &PointerState, params: &ForceParams) {
	if let Some(at) = pointer.position() {
		particle.velocity += repulsion(particle.position, at, params);
	}
	particle.velocity += (particle.rest - particle.position) * params.spring;
	particle.velocity *= params.damping;
	particle.position += particle.velocity;
}

/// Advance every particle by one frame. A no-op on an empty slice.
pub fn integrate(particles: &mut [Particle], pointer: &PointerState, params: &ForceParams) {
	for particle in particles {
		step_particle(particle, pointer, params);
	}
}
