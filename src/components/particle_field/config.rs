//! Field configuration: particle counts, speeds, ranges, and colors.
//!
//! All values are deserializable so a hosting page can override any subset
//! via an embedded JSON block; missing fields fall back to the canonical
//! hero-background look.

use serde::Deserialize;

/// RGB hue shared by particles and their connection lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
}

impl Color {
	/// Builds a color from its channels.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// CSS `rgba()` string at the given opacity.
	pub fn to_css(self, alpha: f64) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
	}
}

/// Tunable parameters for the particle field.
///
/// The defaults reproduce the landing-page hero background: 80 light-blue
/// particles linked below 150px, drifting at under half a pixel per frame.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of particles in the field.
	pub count: usize,
	/// Distance below which two particles are linked.
	pub connection_distance: f64,
	/// Per-axis speed bound; velocity components are drawn from
	/// `[-max_speed / 2, +max_speed / 2]`.
	pub max_speed: f64,
	/// Smallest particle radius.
	pub size_min: f64,
	/// Largest particle radius.
	pub size_max: f64,
	/// Lowest particle opacity.
	pub alpha_min: f64,
	/// Highest particle opacity.
	pub alpha_max: f64,
	/// Hue for particles and links.
	pub color: Color,
	/// Stroke width of a connection line.
	pub link_width: f64,
	/// Scale applied to the distance-derived link opacity; a coincident
	/// pair is stroked at exactly this value.
	pub link_alpha: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			count: 80,
			connection_distance: 150.0,
			max_speed: 0.8,
			size_min: 1.5,
			size_max: 3.5,
			alpha_min: 0.4,
			alpha_max: 0.9,
			color: Color::rgb(173, 216, 230),
			link_width: 0.5,
			link_alpha: 0.2,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_json_keeps_defaults_for_missing_fields() {
		let config: FieldConfig =
			serde_json::from_str(r#"{"count": 40, "max_speed": 1.2}"#).unwrap();
		assert_eq!(config.count, 40);
		assert_eq!(config.max_speed, 1.2);
		assert_eq!(config.connection_distance, 150.0);
		assert_eq!(config.color, Color::rgb(173, 216, 230));
	}

	#[test]
	fn color_overrides_deserialize() {
		let config: FieldConfig =
			serde_json::from_str(r#"{"color": {"r": 10, "g": 20, "b": 30}}"#).unwrap();
		assert_eq!(config.color, Color::rgb(10, 20, 30));
	}

	#[test]
	fn css_string_carries_alpha() {
		assert_eq!(
			Color::rgb(173, 216, 230).to_css(0.5),
			"rgba(173, 216, 230, 0.5)"
		);
	}
}
