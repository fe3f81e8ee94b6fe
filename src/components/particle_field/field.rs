//! Field state: the particle collection and its surface dimensions.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop. A resize replaces the whole particle set rather than
//! rescaling it; stretched spacing from the old bounds would survive a
//! rescale.

use super::config::FieldConfig;
use super::particle::{Particle, link_strength};
use super::random::RandomSource;

/// The aggregate owning all particles and surface dimensions.
pub struct Field {
	/// Current particle set. Order is stable within a frame; links are
	/// enumerated one-sided over it so each pair is visited once.
	pub particles: Vec<Particle>,
	/// Surface width, synchronized to the containing element.
	pub width: f64,
	/// Surface height, synchronized to the containing element.
	pub height: f64,
	/// Whether the simulation advances. The frame loop keeps scheduling
	/// while paused so flipping this back resumes immediately.
	pub running: bool,
	config: FieldConfig,
	rng: Box<dyn RandomSource>,
}

impl Field {
	/// Creates an idle field with no particles; call [`Field::reset`] with
	/// measured dimensions to populate it.
	pub fn new(config: FieldConfig, rng: Box<dyn RandomSource>) -> Self {
		Self {
			particles: Vec::new(),
			width: 0.0,
			height: 0.0,
			running: true,
			config,
			rng,
		}
	}

	/// The field's configuration.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Records freshly measured surface dimensions and rebuilds the whole
	/// particle set inside them. The collection length always equals the
	/// configured count afterwards, whatever the dimensions.
	pub fn reset(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.particles = (0..self.config.count)
			.map(|_| Particle::spawn(&self.config, width, height, self.rng.as_mut()))
			.collect();
	}

	/// Advances every particle by one frame, in collection order.
	///
	/// The canvas renderer advances particles itself, interleaved with
	/// drawing; this method drives the same motion without a surface.
	pub fn advance_all(&mut self) {
		for p in &mut self.particles {
			p.advance(self.width, self.height);
		}
	}

	/// All linked pairs for the current positions, each unordered pair
	/// exactly once, with the stroke opacity the renderer would use.
	pub fn links(&self) -> Vec<(usize, usize, f64)> {
		let mut links = Vec::new();
		for i in 0..self.particles.len() {
			for j in (i + 1)..self.particles.len() {
				let d = self.particles[i].distance_to(&self.particles[j]);
				if let Some(strength) = link_strength(d, &self.config) {
					links.push((i, j, strength));
				}
			}
		}
		links
	}
}
