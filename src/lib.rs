//! fabric-field: pointer-reactive particle backdrop for static sites.
//!
//! This crate provides a WASM canvas component that animates a grid of
//! particles pushed around by the pointer and pulled back by springs, joined
//! by faint lines when they come close.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::fabric_field::{FabricCanvas, FieldConfig, FieldState};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("fabric-field: logging initialized");
}

/// Load field configuration from a script element with id="fabric-config".
/// Expected format: JSON matching [`FieldConfig`]; omitted fields keep
/// their defaults.
fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("fabric-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match FieldConfig::from_json(&json_text) {
		Ok(config) => {
			info!("fabric-field: loaded config (spacing {})", config.grid.spacing);
			Some(config)
		}
		Err(e) => {
			warn!("fabric-field: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads configuration from the DOM and renders the fabric backdrop.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Fabric Field" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fabric-backdrop" style="position: fixed; inset: 0;">
			<FabricCanvas config=config />
		</div>
	}
}
