//! hero-field: animated particle background for the landing page hero.
//!
//! This crate provides a WASM canvas component that renders a field of
//! drifting particles joined by distance-faded lines, sized to its
//! containing element and fully reseeded whenever the layout resizes.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{
	BrowserRandom, Color, Field, FieldConfig, Particle, ParticleFieldCanvas, RandomSource,
	SplitMix64, link_strength,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("hero-field: logging initialized");
}

/// Load field configuration overrides from a script element with
/// id="field-config". Expected format: JSON with any subset of
/// [`FieldConfig`]'s fields.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!("hero-field: loaded config, {} particles", config.count);
			Some(config)
		}
		Err(e) => {
			warn!("hero-field: failed to parse field config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads configuration from the DOM and renders the hero background.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Particle Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="hero">
			<ParticleFieldCanvas config=config fullscreen=true />
			<div class="hero-overlay">
				<h1>"Particle Field"</h1>
				<p class="subtitle">"A drifting constellation behind the landing page hero."</p>
			</div>
		</div>
	}
}
