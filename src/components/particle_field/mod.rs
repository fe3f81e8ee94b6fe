//! Animated particle-field background component.
//!
//! Renders a drifting set of points on an HTML canvas with:
//! - Linear motion with edge reflection
//! - Distance-faded connection lines between nearby particles
//! - Container-driven sizing with a full reseed on resize
//! - Pause/resume tied to page visibility
//!
//! # Example
//!
//! ```ignore
//! use hero_field::ParticleFieldCanvas;
//!
//! view! { <ParticleFieldCanvas fullscreen=true /> }
//! ```

mod component;
mod config;
mod field;
mod particle;
pub mod random;
mod render;

pub use component::ParticleFieldCanvas;
pub use config::{Color, FieldConfig};
pub use field::Field;
pub use particle::{Particle, link_strength};
pub use random::{BrowserRandom, RandomSource, SplitMix64};
