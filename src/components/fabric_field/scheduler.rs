//! Cancellable per-frame animation loop.
//!
//! The loop is an explicit state machine:
//!
//! ```text
//! Uninitialized --start--> Running --cancel--> Cancelled
//!                            |  ^
//!                            +--+ frame
//! ```
//!
//! Every frame asks the [`FrameRequester`] for the next one. The handle of
//! that pending request is stored so cancellation can revoke it, and the
//! state is checked again at the start of each frame, so no work runs after
//! a cancel even if a request slipped through.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

/// Lifecycle of an [`AnimationLoop`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
	Uninitialized,
	Running,
	/// Terminal.
	Cancelled,
}

/// Schedules a callback for the next display refresh.
pub trait FrameRequester {
	/// Request one more frame. Returns a handle for cancellation, or `None`
	/// if the request could not be made.
	fn request_frame(&mut self) -> Option<i32>;
	/// Revoke a pending request.
	fn cancel_frame(&mut self, handle: i32);
}

/// The frame loop driving the simulation.
pub struct AnimationLoop<R> {
	requester: R,
	state: LoopState,
	pending: Option<i32>,
	frames: u64,
}

impl<R: FrameRequester> AnimationLoop<R> {
	pub fn new(requester: R) -> Self {
		Self {
			requester,
			state: LoopState::Uninitialized,
			pending: None,
			frames: 0,
		}
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	/// Number of frames run so far.
	pub fn frames(&self) -> u64 {
		self.frames
	}

	/// Handle of the outstanding frame request, if any.
	pub fn pending(&self) -> Option<i32> {
		self.pending
	}

	pub fn requester(&self) -> &R {
		&self.requester
	}

	/// Enter `Running` and request the first frame. Returns `false` if the
	/// loop was already started or cancelled.
	pub fn start(&mut self) -> bool {
		if self.state != LoopState::Uninitialized {
			return false;
		}
		self.state = LoopState::Running;
		self.schedule();
		true
	}

	/// Run one frame, then request the next one.
	///
	/// Called from the frame callback. Does nothing and returns `false`
	/// unless the loop is running.
	pub fn run_frame(&mut self, frame: impl FnOnce()) -> bool {
		self.pending = None;
		if self.state != LoopState::Running {
			return false;
		}
		frame();
		self.frames += 1;
		self.schedule();
		true
	}

	/// Stop the loop and revoke the pending request.
	///
	/// Safe to call any number of times; only the first call on a running
	/// loop has an effect, and the return value says whether it did.
	pub fn cancel(&mut self) -> bool {
		if self.state != LoopState::Running {
			return false;
		}
		self.state = LoopState::Cancelled;
		if let Some(handle) = self.pending.take() {
			self.requester.cancel_frame(handle);
		}
		info!("fabric-field: animation cancelled after {} frames", self.frames);
		true
	}

	fn schedule(&mut self) {
		self.pending = self.requester.request_frame();
		if self.pending.is_none() {
			warn!("fabric-field: could not request an animation frame");
		}
	}
}

/// Shared slot for the per-frame callback. The callback itself needs the
/// loop that owns the requester, so the slot is filled after construction.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Build a frame callback body that runs `frame` on `target`.
///
/// The body holds only a weak reference: the callback is reachable from
/// `target` itself (through the loop's requester) and must not keep it
/// alive. Once the last strong reference drops the body does nothing.
pub fn weak_frame<T: 'static>(
	target: &Rc<RefCell<T>>,
	mut frame: impl FnMut(&mut T) + 'static,
) -> impl FnMut() + 'static {
	let target: Weak<RefCell<T>> = Rc::downgrade(target);
	move || {
		if let Some(target) = target.upgrade() {
			frame(&mut *target.borrow_mut());
		}
	}
}

/// [`FrameRequester`] backed by `window.requestAnimationFrame`.
pub struct BrowserFrames {
	callback: FrameCallback,
}

impl BrowserFrames {
	pub fn new(callback: FrameCallback) -> Self {
		Self { callback }
	}
}

impl FrameRequester for BrowserFrames {
	fn request_frame(&mut self) -> Option<i32> {
		let window = web_sys::window()?;
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.ok()
	}

	fn cancel_frame(&mut self, handle: i32) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(handle);
		}
	}
}
