// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser wiring for the portfolio page swap.
//!
//! Connects the swap controller to the page's `#nav-logo` and `#profile-pic`
//! elements: click triggers on both, resize resync, a `requestAnimationFrame`
//! tick loop that runs only while an animation is in flight, and theme
//! persistence on completion. Pages without the swap markup load fine — the
//! whole feature quietly no-ops.
//!
//! The small page conveniences that have nothing to do with the swap
//! (hamburger menu, grid/list view toggle, aura pulse) are plain class
//! toggles, wired independently so each survives the others' markup being
//! absent.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::rc::Rc;
use core::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use flipline_backend_web::{
    ConsoleSink, DomSwapSurface, EventBinding, LocalThemeStore, RafLoop, now_ms,
    system_prefers_dark,
};
use flipline_core::controller::{SwapConfig, SwapController, SwapState};
use flipline_core::surface::SwapSurface as _;
use flipline_core::theme::{Theme, ThemeColors, ThemeStore as _, resolve_initial};
use flipline_core::trace::Tracer;

struct App {
    controller: SwapController,
    surface: DomSwapSurface,
    store: LocalThemeStore,
    sink: ConsoleSink,
}

/// Page entry point, run once when the wasm module loads.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    wire_class_toggle(&document, "menu-toggle", "site-nav", "open");
    wire_class_toggle(&document, "view-toggle", "project-grid", "list-view");

    let Some(mut surface) = DomSwapSurface::from_ids(&document, "nav-logo", "profile-pic") else {
        return;
    };

    let store = LocalThemeStore::open();
    let initial_theme = resolve_initial(store.load(), system_prefers_dark());
    let initial_state = match initial_theme {
        Theme::Dark => SwapState::Swapped,
        Theme::Light => SwapState::Original,
    };

    surface.apply_theme(&ThemeColors::for_theme(initial_theme));
    if initial_state == SwapState::Swapped {
        // Content carries the swap, so a dark load starts exchanged.
        surface.swap_content();
    }

    let aura = document.get_element_by_id("hero-aura");
    let app = Rc::new(RefCell::new(App {
        controller: SwapController::with_state(SwapConfig::portfolio(), initial_state),
        surface,
        store,
        sink: ConsoleSink::new(),
    }));

    // The loop and its tick closure reference each other through this slot
    // so completion can stop the loop. The resulting cycle intentionally
    // pins the wiring for the page's lifetime.
    let raf_slot: Rc<RefCell<Option<RafLoop>>> = Rc::new(RefCell::new(None));
    let raf = RafLoop::new({
        let app = Rc::clone(&app);
        let raf_slot = Rc::clone(&raf_slot);
        move |now| {
            let mut app = app.borrow_mut();
            let App {
                controller,
                surface,
                store,
                sink,
            } = &mut *app;
            let mut tracer = Tracer::new(sink);
            if let Some(done) = controller.tick(now, surface, &mut tracer) {
                if let Some(theme) = done.theme {
                    store.store(theme);
                }
                if let Some(aura) = &aura {
                    let _ = aura.class_list().toggle("pulse");
                }
                if let Some(raf) = raf_slot.borrow().as_ref() {
                    raf.stop();
                }
            }
        }
    });
    *raf_slot.borrow_mut() = Some(raf);

    let trigger = Rc::new({
        let app = Rc::clone(&app);
        let raf_slot = Rc::clone(&raf_slot);
        move || {
            let mut app = app.borrow_mut();
            let App {
                controller,
                surface,
                sink,
                ..
            } = &mut *app;
            let mut tracer = Tracer::new(sink);
            controller.trigger(now_ms(), surface, &mut tracer);
            if controller.is_animating()
                && let Some(raf) = raf_slot.borrow().as_ref()
            {
                raf.start();
            }
        }
    });

    // Both elements trigger the same swap.
    for id in ["nav-logo", "profile-pic"] {
        if let Some(el) = document.get_element_by_id(id) {
            let trigger = Rc::clone(&trigger);
            core::mem::forget(EventBinding::on_click(&el, move || (*trigger)()));
        }
    }

    if let Some(window) = web_sys::window() {
        let app = Rc::clone(&app);
        core::mem::forget(EventBinding::on_resize(&window, move || {
            let mut app = app.borrow_mut();
            let App {
                controller,
                surface,
                sink,
                ..
            } = &mut *app;
            let mut tracer = Tracer::new(sink);
            controller.resync(surface, &mut tracer);
        }));
    }
}

/// Wires a click on `#trigger_id` to toggle `class` on `#target_id`.
///
/// Either element being absent skips the wiring.
fn wire_class_toggle(document: &Document, trigger_id: &str, target_id: &str, class: &'static str) {
    let (Some(trigger), Some(target)) = (
        document.get_element_by_id(trigger_id),
        document.get_element_by_id(target_id),
    ) else {
        return;
    };
    core::mem::forget(EventBinding::on_click(&trigger, move || {
        let _ = target.class_list().toggle(class);
    }));
}
