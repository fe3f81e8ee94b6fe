//! Leptos component wrapping the particle-field canvas.
//!
//! The component creates an HTML canvas element, sizes it to its container,
//! and wires up the resize and visibility listeners. An animation loop runs
//! via `requestAnimationFrame`, advancing and rendering the field each frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, VisibilityState, Window};

use super::config::FieldConfig;
use super::field::Field;
use super::random::BrowserRandom;
use super::render;

/// Measures the drawing surface from its surroundings and applies the result
/// to the canvas. Fullscreen fields track the window's inner size; embedded
/// fields track their containing element's content box. Returns `None` when
/// there is nothing to measure, in which case the surface keeps its previous
/// dimensions.
fn measure(canvas: &HtmlCanvasElement, window: &Window, fullscreen: bool) -> Option<(f64, f64)> {
	let (w, h) = if fullscreen {
		(
			window.inner_width().ok()?.as_f64()?,
			window.inner_height().ok()?.as_f64()?,
		)
	} else {
		let parent = canvas.parent_element()?;
		(parent.client_width() as f64, parent.client_height() as f64)
	};
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	Some((w, h))
}

/// Renders an animated particle field on a canvas element.
///
/// The component sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport instead. A resize reseeds the
/// whole field inside the new bounds. The simulation pauses while the page
/// is hidden and resumes when it becomes visible again.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(default = None)] config: Option<FieldConfig>,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field_init: Rc<RefCell<Option<Field>>> = Rc::new(RefCell::new(None));
	let animate_init: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb_init: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let visibility_cb_init: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
		Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		// A missing 2d context is the one startup failure mode: the field
		// stays idle and the page renders without a background.
		let Ok(Some(context)) = canvas.get_context("2d") else {
			warn!("particle field: no 2d context, not starting");
			return;
		};
		let Ok(ctx) = context.dyn_into::<CanvasRenderingContext2d>() else {
			return;
		};

		let mut initial = Field::new(
			config.clone().unwrap_or_default(),
			Box::new(BrowserRandom),
		);
		let (w, h) = measure(&canvas, &window, fullscreen).unwrap_or((0.0, 0.0));
		initial.reset(w, h);
		*field_init.borrow_mut() = Some(initial);

		let (field_resize, canvas_resize, window_resize) =
			(field_init.clone(), canvas.clone(), window.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				// Full reseed, not a rescale: coordinates drawn for the
				// old bounds would render stretched in the new ones.
				let (nw, nh) = measure(&canvas_resize, &window_resize, fullscreen)
					.unwrap_or((f.width, f.height));
				f.reset(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let field_vis = field_init.clone();
		*visibility_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(document) = web_sys::window().and_then(|w| w.document()) else {
				return;
			};
			if let Some(ref mut f) = *field_vis.borrow_mut() {
				f.running = document.visibility_state() == VisibilityState::Visible;
			}
		}));
		if let Some(ref cb) = *visibility_cb_init.borrow() {
			if let Some(document) = window.document() {
				let _ = document
					.add_event_listener_with_callback("visibilitychange", cb.as_ref().unchecked_ref());
			}
		}

		let (field_anim, animate_inner) = (field_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				if f.running {
					render::render(f, &ctx);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				let _ = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			style="display: block;"
		/>
	}
}
