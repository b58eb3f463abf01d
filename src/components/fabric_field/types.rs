//! Plain value records shared by the simulation, renderer and tests.

use std::ops::{AddAssign, Mul, MulAssign, Sub};

/// A 2D point or vector in drawing-surface coordinates (CSS pixels).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
	pub x: f64,
	pub y: f64,
}

impl Vec2 {
	/// The origin / zero vector.
	pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn length_squared(self) -> f64 {
		self.x * self.x + self.y * self.y
	}

	pub fn length(self) -> f64 {
		self.length_squared().sqrt()
	}

	pub fn distance(self, other: Vec2) -> f64 {
		(self - other).length()
	}

	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl AddAssign for Vec2 {
	fn add_assign(&mut self, rhs: Vec2) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl Sub for Vec2 {
	type Output = Vec2;

	fn sub(self, rhs: Vec2) -> Vec2 {
		Vec2::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Vec2 {
	type Output = Vec2;

	fn mul(self, rhs: f64) -> Vec2 {
		Vec2::new(self.x * rhs, self.y * rhs)
	}
}

impl MulAssign<f64> for Vec2 {
	fn mul_assign(&mut self, rhs: f64) {
		self.x *= rhs;
		self.y *= rhs;
	}
}

/// A single fabric particle.
///
/// `rest` and `radius` are fixed at creation; `position` and `velocity`
/// are mutated in place every frame by the integrator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub position: Vec2,
	/// Anchor the particle springs back towards.
	pub rest: Vec2,
	pub velocity: Vec2,
	/// Drawn radius, always > 0.
	pub radius: f64,
}

impl Particle {
	/// A particle sitting at rest on its anchor.
	pub fn at_rest(rest: Vec2, radius: f64) -> Self {
		Self {
			position: rest,
			rest,
			velocity: Vec2::ZERO,
			radius,
		}
	}

	/// Distance from the current position to the anchor.
	pub fn displacement(&self) -> f64 {
		self.position.distance(self.rest)
	}
}
