//! Simulation state owned by the animation loop.
//!
//! Event handlers never touch particles directly: they go through
//! [`FieldState::resize`] and the pointer setters, and the frame callback
//! calls [`FieldState::step`] followed by [`FieldState::render`].

use log::info;

use super::config::FieldConfig;
use super::grid::ParticleGrid;
use super::integrator::integrate;
use super::pointer::PointerState;
use super::render::{self, FrameStats, Surface};
use super::types::Particle;
use super::viewport::Viewport;

/// Everything the field needs between frames.
pub struct FieldState {
	config: FieldConfig,
	viewport: Viewport,
	grid: ParticleGrid,
	pointer: PointerState,
}

impl FieldState {
	/// An empty field. Call [`FieldState::resize`] before the first frame.
	pub fn new(config: FieldConfig) -> Self {
		Self {
			config: config.sanitized(),
			viewport: Viewport::default(),
			grid: ParticleGrid::default(),
			pointer: PointerState::default(),
		}
	}

	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	pub fn viewport(&self) -> Viewport {
		self.viewport
	}

	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	pub fn particles(&self) -> &[Particle] {
		&self.grid.particles
	}

	/// Adopt new surface dimensions and rebuild the grid from scratch.
	///
	/// All particle motion is discarded: every particle of the new grid sits
	/// on its rest position with zero velocity.
	pub fn resize(&mut self, viewport: Viewport, seed: f64) {
		self.viewport = viewport;
		self.grid = ParticleGrid::build(viewport, &self.config.grid, seed);
		let (columns, rows) = self.grid.dimensions();
		info!(
			"fabric-field: {}x{} viewport, {} particles ({}x{})",
			viewport.width,
			viewport.height,
			self.grid.len(),
			columns,
			rows
		);
	}

	/// Rebuild the grid only if `viewport` differs from the current one.
	/// Returns whether a rebuild happened.
	pub fn resize_if_changed(&mut self, viewport: Viewport, seed: f64) -> bool {
		if viewport == self.viewport {
			return false;
		}
		self.resize(viewport, seed);
		true
	}

	/// Record a pointer event in client coordinates.
	pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, surface_left: f64, surface_top: f64) {
		self.pointer
			.move_client(client_x, client_y, surface_left, surface_top);
	}

	/// The pointer left the surface (e.g. a touch ended).
	pub fn pointer_left(&mut self) {
		self.pointer.clear();
	}

	/// Advance every particle by one frame.
	pub fn step(&mut self) {
		integrate(&mut self.grid.particles, &self.pointer, &self.config.forces);
	}

	/// Draw the current frame in the given accent color.
	pub fn render(&self, surface: &mut impl Surface, accent: &str) -> FrameStats {
		render::render(surface, self.viewport, &self.grid, &self.config.style, accent)
	}
}
