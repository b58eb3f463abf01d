//! Leptos component wiring the fabric field to a canvas element.
//!
//! The component creates a canvas, sizes its backing store to its on-screen
//! size and starts a `requestAnimationFrame` loop that steps and draws the
//! field. Window listeners feed resize, mouse and touch input into the
//! field state; `beforeunload`, a detached canvas, or unmounting the
//! component stop the loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent, TouchEvent, Window,
};

use super::config::FieldConfig;
use super::scheduler::{AnimationLoop, BrowserFrames, FrameCallback, weak_frame};
use super::state::FieldState;
use super::theme::{CssAccent, resolve_accent};
use super::viewport::Viewport;

/// Field state together with the DOM handles it draws through.
struct FieldDriver {
	field: FieldState,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	accent: CssAccent,
	anim: AnimationLoop<BrowserFrames>,
}

impl FieldDriver {
	fn measure(&self) -> Viewport {
		Viewport::from_measured(
			self.canvas.offset_width() as f64,
			self.canvas.offset_height() as f64,
		)
	}

	/// Match the backing store to the on-screen size and rebuild the grid.
	fn resize(&mut self) {
		let viewport = self.measure();
		self.canvas.set_width(viewport.width);
		self.canvas.set_height(viewport.height);
		self.field.resize(viewport, js_sys::Math::random() * 10_000.0);
	}

	/// Rebuild only if the canvas size drifted since the last rebuild.
	fn follow_layout(&mut self) {
		let viewport = self.measure();
		if self
			.field
			.resize_if_changed(viewport, js_sys::Math::random() * 10_000.0)
		{
			self.canvas.set_width(viewport.width);
			self.canvas.set_height(viewport.height);
		}
	}

	fn pointer_moved(&mut self, client_x: i32, client_y: i32) {
		let rect = self.canvas.get_bounding_client_rect();
		self.field
			.pointer_moved(client_x as f64, client_y as f64, rect.left(), rect.top());
	}

	fn frame(&mut self) {
		if !self.canvas.is_connected() {
			self.anim.cancel();
			return;
		}
		// The parent can change size without a window resize.
		self.follow_layout();
		let Self {
			field,
			ctx,
			accent,
			anim,
			..
		} = self;
		anim.run_frame(|| {
			field.step();
			let color = resolve_accent(&*accent, &field.config().style.fallback_accent);
			field.render(ctx, &color);
		});
	}
}

/// Window listeners and the running loop for one mounted canvas.
///
/// Dropping it detaches the listeners and cancels the loop.
struct Wiring {
	window: Window,
	driver: Rc<RefCell<FieldDriver>>,
	listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

impl Wiring {
	/// Set up the field on `canvas` and start animating.
	///
	/// Fails before anything is drawn when there is no window or the canvas
	/// has no 2D context.
	fn attach(canvas: HtmlCanvasElement, config: FieldConfig) -> Result<Self, JsValue> {
		let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or_else(|| JsValue::from_str("no 2d context"))?
			.dyn_into()?;

		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let driver = Rc::new(RefCell::new(FieldDriver {
			accent: CssAccent::new(config.style.accent_property.clone()),
			field: FieldState::new(config),
			canvas,
			ctx,
			anim: AnimationLoop::new(BrowserFrames::new(callback.clone())),
		}));
		driver.borrow_mut().resize();

		*callback.borrow_mut() = Some(Closure::new(weak_frame(&driver, FieldDriver::frame)));

		let mut wiring = Self {
			window,
			driver: driver.clone(),
			listeners: Vec::new(),
		};

		let d = driver.clone();
		wiring.listen("resize", move |_| d.borrow_mut().resize())?;

		let d = driver.clone();
		wiring.listen("mousemove", move |ev| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				d.borrow_mut().pointer_moved(ev.client_x(), ev.client_y());
			}
		})?;

		for name in ["touchstart", "touchmove"] {
			let d = driver.clone();
			wiring.listen(name, move |ev| {
				let touch = ev
					.dyn_ref::<TouchEvent>()
					.and_then(|ev| ev.touches().get(0));
				if let Some(touch) = touch {
					d.borrow_mut().pointer_moved(touch.client_x(), touch.client_y());
				}
			})?;
		}

		for name in ["touchend", "touchcancel"] {
			let d = driver.clone();
			wiring.listen(name, move |_| d.borrow_mut().field.pointer_left())?;
		}

		let d = driver.clone();
		wiring.listen("beforeunload", move |_| {
			d.borrow_mut().anim.cancel();
		})?;

		driver.borrow_mut().anim.start();
		Ok(wiring)
	}

	fn listen(
		&mut self,
		name: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<(), JsValue> {
		let closure = Closure::<dyn FnMut(Event)>::new(handler);
		self.window
			.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
		self.listeners.push((name, closure));
		Ok(())
	}
}

impl Drop for Wiring {
	fn drop(&mut self) {
		for (name, closure) in &self.listeners {
			let _ = self
				.window
				.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
		}
		if let Ok(mut driver) = self.driver.try_borrow_mut() {
			driver.anim.cancel();
		}
	}
}

/// Renders the pointer-reactive particle fabric on a canvas element.
///
/// The canvas fills its parent (size the parent with CSS) and ignores
/// pointer events itself, so it can sit behind page content; pointer
/// movement is tracked on the window. The grid is rebuilt on window resize
/// and whenever the canvas is found to have a new size at the start of a
/// frame, so the parent does not have to follow the window. If the browser
/// cannot provide a 2D context the canvas simply stays blank.
#[component]
pub fn FabricCanvas(
	#[prop(default = FieldConfig::default())] config: FieldConfig,
	#[prop(default = "fabric-canvas")] class: &'static str,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let wiring: Rc<RefCell<Option<Wiring>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if wiring.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		match Wiring::attach(canvas, config.clone()) {
			Ok(attached) => *wiring.borrow_mut() = Some(attached),
			Err(e) => debug!("fabric-field: canvas unavailable, staying inert: {:?}", e),
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class=class
			style="display: block; width: 100%; height: 100%; pointer-events: none;"
		/>
	}
}
