//! Drawing-surface dimensions.

/// Backing-store size of the drawing surface, in pixels.
///
/// Kept equal to the on-screen (CSS) size so that drawing coordinates and
/// pointer coordinates share one space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
	pub width: u32,
	pub height: u32,
}

impl Viewport {
	pub const fn new(width: u32, height: u32) -> Self {
		Self { width, height }
	}

	/// Build a viewport from a measured on-screen size. Negative or
	/// non-finite measurements collapse to zero.
	pub fn from_measured(width: f64, height: f64) -> Self {
		let px = |v: f64| if v.is_finite() && v > 0.0 { v.round() as u32 } else { 0 };
		Self::new(px(width), px(height))
	}

	/// A collapsed or invisible surface. The grid built for it is empty.
	pub fn is_empty(&self) -> bool {
		self.width == 0 || self.height == 0
	}

	pub fn width_f64(&self) -> f64 {
		self.width as f64
	}

	pub fn height_f64(&self) -> f64 {
		self.height as f64
	}
}
