//! Theme accent lookup.
//!
//! The accent color is owned by the page (a CSS custom property switched by
//! the site's light/dark theme). It is read fresh every frame so a theme
//! change shows up without restarting the animation.

/// Something that can report the current theme accent color.
pub trait AccentSource {
	/// The current accent as a CSS color string, if the theme defines one.
	fn accent(&self) -> Option<String>;
}

/// A fixed accent, or none at all.
#[derive(Clone, Debug, Default)]
pub struct StaticAccent(pub Option<String>);

impl AccentSource for StaticAccent {
	fn accent(&self) -> Option<String> {
		self.0.clone()
	}
}

/// Reads a CSS custom property from the computed style of the document
/// root element.
#[derive(Clone, Debug)]
pub struct CssAccent {
	property: String,
}

impl CssAccent {
	pub fn new(property: impl Into<String>) -> Self {
		Self {
			property: property.into(),
		}
	}
}

impl AccentSource for CssAccent {
	fn accent(&self) -> Option<String> {
		let window = web_sys::window()?;
		let root = window.document()?.document_element()?;
		let style = window.get_computed_style(&root).ok()??;
		style.get_property_value(&self.property).ok()
	}
}

/// Resolve the accent to draw with, falling back when the source has no
/// value or only whitespace.
pub fn resolve_accent(source: &impl AccentSource, fallback: &str) -> String {
	source
		.accent()
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
		.unwrap_or_else(|| fallback.to_string())
}
