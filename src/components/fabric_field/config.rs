//! Tunable parameters for the fabric field.
//!
//! All values are in drawing-surface units (CSS pixels) and per-frame
//! quantities. The simulation is deliberately tied to the display refresh
//! rate: one integration step per animation frame, with no delta-time
//! scaling, so changing the refresh rate changes the perceived speed.
//!
//! Every struct deserializes with `#[serde(default)]`, so a partial JSON
//! object only overrides the fields it names:
//!
//! ```json
//! { "grid": { "spacing": 32 }, "forces": { "repulsion": 0.9 } }
//! ```

use log::warn;
use serde::Deserialize;

/// Smallest grid spacing accepted from configuration.
pub const MIN_SPACING: f64 = 1.0;

/// Layout of the staggered particle grid.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GridConfig {
	/// Distance between neighbouring rest positions. Odd rows are shifted
	/// right by half of this.
	pub spacing: f64,
	/// Smallest drawn particle radius.
	pub radius_min: f64,
	/// Largest drawn particle radius.
	pub radius_max: f64,
}

impl Default for GridConfig {
	fn default() -> Self {
		Self {
			spacing: 40.0,
			radius_min: 1.0,
			radius_max: 3.0,
		}
	}
}

/// Constants of the per-frame force model.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ForceParams {
	/// Pointer influence radius. Particles at or beyond it feel no repulsion.
	pub max_influence: f64,
	/// Scale applied to the normalized repulsion strength.
	pub repulsion: f64,
	/// Linear spring constant pulling particles back to rest.
	pub spring: f64,
	/// Velocity multiplier applied after forces accumulate (1.0 = no damping).
	pub damping: f64,
}

impl Default for ForceParams {
	fn default() -> Self {
		Self {
			max_influence: 150.0,
			repulsion: 0.6,
			spring: 0.05,
			damping: 0.85,
		}
	}
}

/// Visual style of particles and connection lines.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldStyle {
	/// Opacity of the particle dots.
	pub particle_alpha: f64,
	/// Opacity of connection lines.
	pub connection_alpha: f64,
	/// Particles closer than this are joined by a line.
	pub connection_distance: f64,
	/// Stroke width of connection lines.
	pub line_width: f64,
	/// CSS custom property holding the theme accent color.
	pub accent_property: String,
	/// Accent used when the theme provides none.
	pub fallback_accent: String,
}

impl Default for FieldStyle {
	fn default() -> Self {
		Self {
			particle_alpha: 0.4,
			connection_alpha: 0.15,
			connection_distance: 50.0,
			line_width: 0.5,
			accent_property: "--accent-primary".to_string(),
			fallback_accent: "#3b82f6".to_string(),
		}
	}
}

/// Complete fabric field configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
	pub grid: GridConfig,
	pub forces: ForceParams,
	pub style: FieldStyle,
}

impl FieldConfig {
	/// Parse a (possibly partial) JSON configuration.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Repair values that would break simulation invariants.
	///
	/// A non-finite spacing falls back to the default and a spacing below
	/// [`MIN_SPACING`] is raised to it. A non-positive radius would draw
	/// nothing, so it falls back to the default. Damping above 1 would make
	/// the system diverge.
	pub fn sanitized(mut self) -> Self {
		let grid_defaults = GridConfig::default();

		if !(self.grid.spacing.is_finite() && self.grid.spacing > 0.0) {
			warn!(
				"fabric-field: invalid grid spacing {}, using {}",
				self.grid.spacing, grid_defaults.spacing
			);
			self.grid.spacing = grid_defaults.spacing;
		} else if self.grid.spacing < MIN_SPACING {
			warn!(
				"fabric-field: grid spacing {} too small, using {}",
				self.grid.spacing, MIN_SPACING
			);
			self.grid.spacing = MIN_SPACING;
		}
		if !(self.grid.radius_min.is_finite() && self.grid.radius_min > 0.0) {
			warn!(
				"fabric-field: invalid minimum radius {}, using {}",
				self.grid.radius_min, grid_defaults.radius_min
			);
			self.grid.radius_min = grid_defaults.radius_min;
		}
		if !(self.grid.radius_max.is_finite() && self.grid.radius_max >= self.grid.radius_min) {
			warn!(
				"fabric-field: maximum radius {} below minimum, clamping",
				self.grid.radius_max
			);
			self.grid.radius_max = self.grid.radius_min;
		}

		let forces = &mut self.forces;
		if !(0.0..=1.0).contains(&forces.damping) {
			warn!("fabric-field: damping {} outside [0, 1], clamping", forces.damping);
			forces.damping = if forces.damping.is_nan() {
				ForceParams::default().damping
			} else {
				forces.damping.clamp(0.0, 1.0)
			};
		}
		for (name, value) in [
			("max_influence", &mut forces.max_influence),
			("repulsion", &mut forces.repulsion),
			("spring", &mut forces.spring),
			("connection_distance", &mut self.style.connection_distance),
			("line_width", &mut self.style.line_width),
		] {
			if !(value.is_finite() && *value >= 0.0) {
				warn!("fabric-field: invalid {} {}, using 0", name, value);
				*value = 0.0;
			}
		}

		self.style.particle_alpha = self.style.particle_alpha.clamp(0.0, 1.0);
		self.style.connection_alpha = self.style.connection_alpha.clamp(0.0, 1.0);
		self
	}
}
