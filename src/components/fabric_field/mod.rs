//! Pointer-reactive particle fabric.
//!
//! A staggered grid of particles covers the canvas. Each frame the particles
//! are pushed away from the pointer, spring back towards their rest
//! positions and lose some velocity to damping. Particles are drawn as small
//! dots in the theme accent color, and close neighbours are joined by faint
//! lines.
//!
//! The simulation core (`grid`, `integrator`, `render`, `scheduler`,
//! `state`) has no DOM dependency beyond the canvas implementation of
//! [`Surface`], so it can be driven and tested natively.
//!
//! # Example
//!
//! ```ignore
//! use fabric_field::{FabricCanvas, FieldConfig};
//!
//! view! {
//!     <div class="hero">
//!         <FabricCanvas config=FieldConfig::default() />
//!     </div>
//! }
//! ```

mod component;
pub mod config;
pub mod grid;
pub mod integrator;
pub mod pointer;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod theme;
pub mod types;
pub mod viewport;

pub use component::FabricCanvas;
pub use config::{FieldConfig, FieldStyle, ForceParams, GridConfig};
pub use grid::ParticleGrid;
pub use pointer::PointerState;
pub use render::{FrameStats, Surface};
pub use scheduler::{AnimationLoop, FrameRequester, LoopState};
pub use state::FieldState;
pub use theme::{AccentSource, StaticAccent};
pub use types::{Particle, Vec2};
pub use viewport::Viewport;
