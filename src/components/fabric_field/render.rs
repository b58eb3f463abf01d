//! Drawing the field.
//!
//! Each frame is drawn in two passes over a cleared surface:
//! 1. particles as filled circles in the accent color,
//! 2. connection lines between close particles, fainter, in the same color.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::FieldStyle;
use super::grid::ParticleGrid;
use super::types::Vec2;
use super::viewport::Viewport;

/// The drawing primitives the renderer needs from a raster surface.
pub trait Surface {
	/// Clear the rectangle `(0, 0, width, height)`.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle with `color` at opacity `alpha`.
	fn fill_circle(&mut self, center: Vec2, radius: f64, color: &str, alpha: f64);
	/// Stroke every segment as one batch with a shared style.
	fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: &str, alpha: f64, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, center: Vec2, radius: f64, color: &str, alpha: f64) {
		self.set_global_alpha(alpha);
		self.set_fill_style_str(color);
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, PI * 2.0);
		self.fill();
	}

	fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], color: &str, alpha: f64, width: f64) {
		if segments.is_empty() {
			return;
		}
		self.set_global_alpha(alpha);
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		for (from, to) in segments {
			self.move_to(from.x, from.y);
			self.line_to(to.x, to.y);
		}
		self.stroke();
		self.set_global_alpha(1.0);
	}
}

/// What a single frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
	pub particles: usize,
	pub connections: usize,
}

/// Clear the surface and draw the grid in `accent`.
pub fn render(
	surface: &mut impl Surface,
	viewport: Viewport,
	grid: &ParticleGrid,
	style: &FieldStyle,
	accent: &str,
) -> FrameStats {
	surface.clear(viewport.width_f64(), viewport.height_f64());

	for p in &grid.particles {
		surface.fill_circle(p.position, p.radius, accent, style.particle_alpha);
	}

	let segments: Vec<(Vec2, Vec2)> = grid
		.connections(style.connection_distance)
		.into_iter()
		.map(|(i, j)| (grid.particles[i].position, grid.particles[j].position))
		.collect();
	surface.stroke_segments(&segments, accent, style.connection_alpha, style.line_width);

	FrameStats {
		particles: grid.len(),
		connections: segments.len(),
	}
}
