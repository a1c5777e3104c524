//! Frame scheduling: `requestAnimationFrame` when the host has it, a ~16ms
//! timer otherwise.

use std::cell::Cell;

use js_sys::{Function, Reflect};
use wasm_bindgen::JsValue;
use web_sys::Window;

/// Target frame interval for the timer fallback
pub const FALLBACK_FRAME_MS: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameHandle {
    Animation(i32),
    Timeout(i32),
}

pub struct FrameScheduler {
    window: Window,
    has_animation_frame: bool,
    /// When the last fallback frame was due (ms)
    last_due_ms: Cell<f64>,
}

impl FrameScheduler {
    pub fn new(window: Window) -> Self {
        let has_animation_frame = Reflect::get(&window, &JsValue::from_str("requestAnimationFrame"))
            .map(|f| f.is_function())
            .unwrap_or(false);
        if !has_animation_frame {
            log::warn!("requestAnimationFrame unavailable, falling back to {}ms timer", FALLBACK_FRAME_MS);
        }

        Self {
            window,
            has_animation_frame,
            last_due_ms: Cell::new(0.0),
        }
    }

    /// Run `callback` before the next repaint.
    pub fn request(&self, callback: &Function) -> Result<FrameHandle, JsValue> {
        if self.has_animation_frame {
            return self.window.request_animation_frame(callback).map(FrameHandle::Animation);
        }

        let now = js_sys::Date::now();
        let delay = fallback_delay(now, self.last_due_ms.get());
        self.last_due_ms.set(now + delay);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback, delay as i32)
            .map(FrameHandle::Timeout)
    }

    pub fn cancel(&self, handle: FrameHandle) {
        match handle {
            FrameHandle::Animation(id) => {
                let _ = self.window.cancel_animation_frame(id);
            }
            FrameHandle::Timeout(id) => self.window.clear_timeout_with_handle(id),
        }
    }
}

/// Delay that keeps timer frames on a fixed cadence.
pub fn fallback_delay(now_ms: f64, last_due_ms: f64) -> f64 {
    (FALLBACK_FRAME_MS - (now_ms - last_due_ms)).max(0.0)
}
