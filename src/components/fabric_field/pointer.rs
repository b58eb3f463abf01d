//! Last-known pointer position in drawing-surface coordinates.

use super::types::Vec2;

/// Pointer position relative to the drawing surface.
///
/// `None` means the pointer has not been seen yet (or a touch ended): the
/// field is then left alone by the integrator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	position: Option<Vec2>,
}

impl PointerState {
	pub fn at(x: f64, y: f64) -> Self {
		Self {
			position: Some(Vec2::new(x, y)),
		}
	}

	pub fn position(&self) -> Option<Vec2> {
		self.position
	}

	/// Record a pointer event given in client (viewport) coordinates,
	/// converting it to surface-local coordinates by subtracting the
	/// surface's on-screen offset. Non-finite input is ignored.
	pub fn move_client(&mut self, client_x: f64, client_y: f64, surface_left: f64, surface_top: f64) {
		let local = Vec2::new(client_x - surface_left, client_y - surface_top);
		if local.is_finite() {
			self.position = Some(local);
		}
	}

	/// Move the pointer off the surface.
	pub fn clear(&mut self) {
		self.position = None;
	}
}
