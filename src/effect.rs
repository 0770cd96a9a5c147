//! Browser-facing snow effect
//!
//! Exposes [`SnowEffect`] to JS: construct with a plain options object, then
//! `start()` / `stop()`. Ticks ride `requestAnimationFrame`, so motion is
//! expressed in pixels per frame, and the pool rebalances on window resize.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::SnowConfig;
use crate::dom::DomSurface;
use crate::field::SnowField;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Running {
    surface: DomSurface,
    field: SnowField<DomSurface>,
    raf_id: Option<i32>,
}

struct Active {
    running: Rc<RefCell<Running>>,
    frame: FrameClosure,
    on_resize: Closure<dyn FnMut()>,
}

/// Falling-snow effect bound to a container element.
#[wasm_bindgen]
pub struct SnowEffect {
    config: SnowConfig,
    active: Option<Active>,
}

#[wasm_bindgen]
impl SnowEffect {
    /// Accepts a plain options object; missing fields fall back to defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> SnowEffect {
        let config = if options.is_undefined() || options.is_null() {
            SnowConfig::default()
        } else {
            serde_wasm_bindgen::from_value(options).unwrap_or_else(|err| {
                log::warn!("invalid snow options, falling back to defaults: {err}");
                SnowConfig::default()
            })
        };
        SnowEffect {
            config,
            active: None,
        }
    }

    /// Attach to the configured container, seed the pool and begin animating.
    ///
    /// Skips with a warning when no browser environment exists, and aborts
    /// with an error when the container selector matches nothing. Calling
    /// `start` while already running is a no-op.
    pub fn start(&mut self) {
        if self.active.is_some() {
            return;
        }

        let mut surface = match DomSurface::new() {
            Ok(surface) => surface,
            Err(err) => {
                log::warn!("snow effect skipped: {err}");
                return;
            }
        };
        let mut field = SnowField::new(self.config.clone());
        if let Err(err) = field.start(&mut surface) {
            log::error!("snow effect not started: {err}");
            return;
        }

        let running = Rc::new(RefCell::new(Running {
            surface,
            field,
            raf_id: None,
        }));

        // Per-frame tick, rescheduling itself until stop() cancels it
        let frame: FrameClosure = Rc::new(RefCell::new(None));
        let handle = running.clone();
        let next = frame.clone();
        *frame.borrow_mut() = Some(Closure::new(move || {
            let mut run = handle.borrow_mut();
            let Running {
                surface,
                field,
                raf_id,
            } = &mut *run;
            field.tick(surface);
            *raf_id = next.borrow().as_ref().and_then(request_frame);
        }));
        running.borrow_mut().raf_id = frame.borrow().as_ref().and_then(request_frame);

        // Rebalance the pool whenever the window resizes
        let handle = running.clone();
        let on_resize = Closure::<dyn FnMut()>::new(move || {
            let mut run = handle.borrow_mut();
            let Running { surface, field, .. } = &mut *run;
            field.rebalance(surface);
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
        }

        self.active = Some(Active {
            running,
            frame,
            on_resize,
        });
    }

    /// Cancel the pending frame, detach the resize listener and remove every
    /// flake. Idempotent; safe to call before `start`.
    pub fn stop(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        let window = web_sys::window();

        {
            let mut run = active.running.borrow_mut();
            if let (Some(id), Some(window)) = (run.raf_id.take(), window.as_ref()) {
                let _ = window.cancel_animation_frame(id);
            }
            let Running { surface, field, .. } = &mut *run;
            field.stop(surface);
        }

        if let Some(window) = window.as_ref() {
            let _ = window.remove_event_listener_with_callback(
                "resize",
                active.on_resize.as_ref().unchecked_ref(),
            );
        }

        // The frame closure holds a clone of its own cell; clear the cell so
        // the closure actually drops
        active.frame.borrow_mut().take();
    }
}

fn request_frame(callback: &Closure<dyn FnMut()>) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}
