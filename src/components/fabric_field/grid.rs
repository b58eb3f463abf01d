//! The particle grid: a staggered layout of rest positions covering the
//! viewport.

use log::warn;

use super::config::GridConfig;
use super::types::{Particle, Vec2};
use super::viewport::Viewport;

/// Largest grid [`ParticleGrid::build`] will lay out. Connection search is
/// quadratic, so anything bigger cannot be drawn in real time.
pub const MAX_PARTICLES: usize = 20_000;

/// All particles of the field, addressed by index.
///
/// The grid is never edited particle by particle: a resize replaces the
/// whole sequence through [`ParticleGrid::build`].
#[derive(Clone, Debug, Default)]
pub struct ParticleGrid {
	pub particles: Vec<Particle>,
	columns: usize,
	rows: usize,
}

impl ParticleGrid {
	/// Lay out one particle per cell of a brick-like grid.
	///
	/// Column `i` and row `j` get the rest position
	/// `(i * spacing + (j % 2) * spacing / 2, j * spacing)`, for
	/// `i < ceil(width / spacing)` and `j < ceil(height / spacing)`.
	/// Every particle starts at rest with zero velocity. Only radii depend
	/// on `seed`.
	///
	/// A layout of more than [`MAX_PARTICLES`] yields an empty grid.
	pub fn build(viewport: Viewport, config: &GridConfig, seed: f64) -> Self {
		let spacing = config.spacing;
		let columns = cells(viewport.width_f64(), spacing);
		let rows = cells(viewport.height_f64(), spacing);

		let count = match columns.checked_mul(rows) {
			Some(count) if count <= MAX_PARTICLES => count,
			_ => {
				warn!(
					"fabric-field: spacing {} gives a {}x{} grid, over {} particles, leaving it empty",
					spacing, columns, rows, MAX_PARTICLES
				);
				return Self::default();
			}
		};

		let mut particles = Vec::with_capacity(count);
		for i in 0..columns {
			for j in 0..rows {
				let stagger = (j % 2) as f64 * (spacing / 2.0);
				let rest = Vec2::new(i as f64 * spacing + stagger, j as f64 * spacing);
				let t = pseudo_random(seed + particles.len() as f64 * 1.37);
				let radius = config.radius_min + t * (config.radius_max - config.radius_min);
				particles.push(Particle::at_rest(rest, radius));
			}
		}

		Self {
			particles,
			columns,
			rows,
		}
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}

	/// `(columns, rows)` of the layout.
	pub fn dimensions(&self) -> (usize, usize) {
		(self.columns, self.rows)
	}

	/// Index pairs `(i, j)` with `i < j` whose particles are closer than
	/// `threshold`. Each unordered pair appears at most once.
	///
	/// This is quadratic in the particle count; the grid spacing keeps the
	/// count small enough for per-frame use.
	pub fn connections(&self, threshold: f64) -> Vec<(usize, usize)> {
		let limit = threshold * threshold;
		let mut pairs = Vec::new();
		for (i, a) in self.particles.iter().enumerate() {
			for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
				if (a.position - b.position).length_squared() < limit {
					pairs.push((i, j));
				}
			}
		}
		pairs
	}
}

fn cells(extent: f64, spacing: f64) -> usize {
	if extent <= 0.0 || spacing <= 0.0 {
		return 0;
	}
	(extent / spacing).ceil() as usize
}

/// Deterministic pseudo-random value in `[0, 1)`.
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}
