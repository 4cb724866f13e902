// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained DOM event listeners.
//!
//! [`EventBinding`] owns the JS closure registered with
//! `addEventListener` and removes the listener on drop, so a binding lives
//! exactly as long as the Rust value holding it. Dropping the binding (or
//! `mem::forget`-ing it for page-lifetime listeners) is the caller's choice.

use alloc::boxed::Box;
use alloc::string::String;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

type EventClosure = Closure<dyn FnMut(Event)>;

/// A registered DOM event listener, removed on drop.
pub struct EventBinding {
    target: EventTarget,
    event: String,
    closure: EventClosure,
}

impl core::fmt::Debug for EventBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventBinding")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

impl EventBinding {
    /// Registers `callback` for `event` on `target`.
    ///
    /// Registration failures (detached targets) leave a binding whose drop
    /// is a harmless no-op.
    pub fn new(target: &EventTarget, event: &str, callback: impl FnMut(Event) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let _ = target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event: String::from(event),
            closure,
        }
    }

    /// Registers a click listener that calls `preventDefault()` before
    /// delegating.
    ///
    /// The swap trigger elements are anchors; without this the browser
    /// navigates instead of animating.
    pub fn on_click(target: &EventTarget, mut callback: impl FnMut() + 'static) -> Self {
        Self::new(target, "click", move |e: Event| {
            e.prevent_default();
            callback();
        })
    }

    /// Registers a `resize` listener on `target` (typically the window).
    pub fn on_resize(target: &EventTarget, mut callback: impl FnMut() + 'static) -> Self {
        Self::new(target, "resize", move |_e: Event| callback())
    }
}

impl Drop for EventBinding {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            &self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
