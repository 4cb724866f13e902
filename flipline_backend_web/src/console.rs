// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser-console [`TraceSink`].

use alloc::format;

use wasm_bindgen::JsValue;

use flipline_core::trace::{
    CompletionEvent, DegenerateGeometryEvent, ResyncEvent, TraceSink, TriggerDroppedEvent,
    TriggerEvent,
};

/// A [`TraceSink`] that writes swap-loop events to the browser console.
///
/// Degenerate geometry is a warning (it means the page never gets the swap
/// it asked for); everything else goes to the debug channel.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Creates the sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TraceSink for ConsoleSink {
    fn on_trigger(&mut self, e: &TriggerEvent) {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "flipline: trigger at {:.1}ms from {:?}",
            e.now_ms, e.from_state,
        )));
    }

    fn on_trigger_dropped(&mut self, e: &TriggerDroppedEvent) {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "flipline: trigger dropped at {:.1}ms (animation in flight)",
            e.now_ms,
        )));
    }

    fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "flipline: degenerate geometry, swap skipped: {:?}",
            e.deltas,
        )));
    }

    fn on_completion(&mut self, e: &CompletionEvent) {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "flipline: completed at {:.1}ms in {:?}",
            e.now_ms, e.state,
        )));
    }

    fn on_resync(&mut self, e: &ResyncEvent) {
        web_sys::console::debug_1(&JsValue::from_str(&format!(
            "flipline: resync in {:?} (reapplied: {})",
            e.state, e.reapplied,
        )));
    }
}
