//! Canvas drawing for the particle field.
//!
//! One pass per frame: clear the surface, then for each particle advance it,
//! paint its disk, and stroke links to every particle later in the vector.
//! Later particles are linked at their previous-frame position; they advance
//! when their own turn comes. The one-sided scan visits each unordered pair
//! exactly once.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::Field;
use super::particle::link_strength;

/// Renders one frame, advancing the simulation as it goes.
pub fn render(field: &mut Field, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width, field.height);

	let (width, height) = (field.width, field.height);
	let color = field.config().color;
	ctx.set_line_width(field.config().link_width);

	for i in 0..field.particles.len() {
		field.particles[i].advance(width, height);
		let p = field.particles[i];

		ctx.set_fill_style_str(&color.to_css(p.alpha));
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();

		for j in (i + 1)..field.particles.len() {
			let q = field.particles[j];
			let Some(strength) = link_strength(p.distance_to(&q), field.config()) else {
				continue;
			};

			ctx.set_stroke_style_str(&color.to_css(strength));
			ctx.begin_path();
			ctx.move_to(p.x, p.y);
			ctx.line_to(q.x, q.y);
			ctx.stroke();
		}
	}
}
