//! The particle entity: spawning, motion, and link strength.

use super::config::FieldConfig;
use super::random::RandomSource;

/// One drifting point. Radius and opacity are fixed at spawn; velocity only
/// ever changes sign, on reflection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Horizontal velocity, units per frame.
	pub vx: f64,
	/// Vertical velocity, units per frame.
	pub vy: f64,
	/// Radius.
	pub size: f64,
	/// Opacity.
	pub alpha: f64,
}

impl Particle {
	/// Spawns a particle at a uniformly random position inside the surface.
	///
	/// Velocity components are uniform in `[-max_speed / 2, +max_speed / 2]`;
	/// a zero component is a legal draw and gets no special handling.
	pub fn spawn(
		config: &FieldConfig,
		width: f64,
		height: f64,
		rng: &mut dyn RandomSource,
	) -> Self {
		Self {
			x: rng.next_f64() * width,
			y: rng.next_f64() * height,
			vx: (rng.next_f64() - 0.5) * config.max_speed,
			vy: (rng.next_f64() - 0.5) * config.max_speed,
			size: config.size_min + rng.next_f64() * (config.size_max - config.size_min),
			alpha: config.alpha_min + rng.next_f64() * (config.alpha_max - config.alpha_min),
		}
	}

	/// Moves one frame and reflects off the surface edges.
	///
	/// The bounds check runs on the post-move position, so a particle can sit
	/// outside the surface for one frame before its reflected velocity
	/// carries it back. Positions are never clamped.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}

	/// Euclidean distance to another particle.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Link opacity for a pair at `distance`, or `None` when the pair is out of
/// range. The threshold is strict: a pair at exactly `connection_distance`
/// is not linked. A coincident pair gets the full `link_alpha`.
pub fn link_strength(distance: f64, config: &FieldConfig) -> Option<f64> {
	if distance < config.connection_distance {
		Some((1.0 - distance / config.connection_distance) * config.link_alpha)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn still_particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			size: 2.0,
			alpha: 0.5,
		}
	}

	#[test]
	fn reflection_flips_sign_once_and_keeps_magnitude() {
		let mut p = still_particle(199.9, 50.0);
		p.vx = 0.5;

		p.advance(200.0, 100.0);
		assert_eq!(p.x, 200.4); // overshoot is rendered for one frame
		assert_eq!(p.vx, -0.5);

		p.advance(200.0, 100.0);
		assert_eq!(p.x, 199.9); // back toward the interior, no second flip
		assert_eq!(p.vx, -0.5);
	}

	#[test]
	fn reflection_is_independent_per_axis() {
		let mut p = still_particle(100.0, 0.05);
		p.vx = 0.2;
		p.vy = -0.3;

		p.advance(200.0, 100.0);
		assert_eq!(p.vx, 0.2);
		assert_eq!(p.vy, 0.3);
	}

	#[test]
	fn stationary_particle_is_legal() {
		let mut p = still_particle(10.0, 20.0);
		for _ in 0..100 {
			p.advance(200.0, 100.0);
		}
		assert_eq!((p.x, p.y), (10.0, 20.0));
	}

	#[test]
	fn link_threshold_is_strict() {
		let config = FieldConfig::default();
		assert!(link_strength(149.999, &config).is_some());
		assert!(link_strength(150.0, &config).is_none());
		assert!(link_strength(150.001, &config).is_none());
	}

	#[test]
	fn link_strength_decreases_with_distance() {
		let config = FieldConfig::default();
		let near = link_strength(10.0, &config).unwrap();
		let far = link_strength(100.0, &config).unwrap();
		assert!(near > far);
	}

	#[test]
	fn coincident_pair_gets_full_link_alpha() {
		let config = FieldConfig::default();
		assert_eq!(link_strength(0.0, &config), Some(0.2));
	}

	#[test]
	fn spawned_values_respect_configured_ranges() {
		use super::super::random::SplitMix64;

		let config = FieldConfig::default();
		let mut rng = SplitMix64::new(99);
		for _ in 0..500 {
			let p = Particle::spawn(&config, 640.0, 480.0, &mut rng);
			assert!((0.0..640.0).contains(&p.x));
			assert!((0.0..480.0).contains(&p.y));
			assert!(p.vx.abs() <= config.max_speed / 2.0);
			assert!(p.vy.abs() <= config.max_speed / 2.0);
			assert!((config.size_min..=config.size_max).contains(&p.size));
			assert!((config.alpha_min..=config.alpha_max).contains(&p.alpha));
		}
	}
}
