use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::error::{window, HostError};

struct FrameState {
    handle: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

/// A per-frame task driven by `requestAnimationFrame`. The task keeps
/// rescheduling itself while its handler returns `true`. Dropping the loop
/// cancels the pending frame.
///
/// Must not be dropped from inside its own handler.
pub struct FrameLoop {
    state: Rc<RefCell<FrameState>>,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, HostError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let state = Rc::new(RefCell::new(FrameState {
            handle: None,
            callback: None,
        }));

        let weak = Rc::downgrade(&state);
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.borrow_mut().handle = None;
            if on_frame(timestamp) {
                if let Err(e) = schedule(&state) {
                    log::warn!("Failed to schedule animation frame: {}", e);
                }
            }
        }) as Box<dyn FnMut(f64)>);

        state.borrow_mut().callback = Some(callback);
        schedule(&state)?;
        Ok(Self { state })
    }

    pub fn cancel(&self) {
        let handle = self.state.borrow_mut().handle.take();
        if let Some(handle) = handle {
            match window() {
                Ok(window) => {
                    if let Err(e) = window.cancel_animation_frame(handle) {
                        log::warn!("Failed to cancel animation frame: {:?}", e);
                    }
                }
                Err(e) => log::warn!("Failed to cancel animation frame: {}", e),
            }
        }
    }
}

fn schedule(state: &Rc<RefCell<FrameState>>) -> Result<(), HostError> {
    let window = window()?;
    let mut state = state.borrow_mut();
    let handle = match state.callback.as_ref() {
        Some(callback) => window.request_animation_frame(callback.as_ref().unchecked_ref())?,
        None => return Ok(()),
    };
    state.handle = Some(handle);
    Ok(())
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
        self.state.borrow_mut().callback = None;
    }
}

/// Milliseconds on the same clock as animation-frame timestamps.
pub fn now() -> Result<f64, HostError> {
    window()?
        .performance()
        .map(|performance| performance.now())
        .ok_or(HostError::Unavailable("performance clock"))
}
