// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable in-memory test doubles for flipline.
//!
//! - [`ScriptedSurface`]: a [`SwapSurface`] whose natural rectangles are set
//!   by the test, recording every transform write, content swap, and theme
//!   application.
//! - [`ManualClock`]: a millisecond clock advanced by hand.
//! - [`RecordingSink`]: a [`TraceSink`] capturing event kinds in order.
//!
//! Together they let the full swap loop run headless: script rects, trigger,
//! advance the clock, tick, and assert on what the surface saw.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Rect;

use flipline_core::surface::{Slot, SwapSurface};
use flipline_core::theme::{Theme, ThemeColors, ThemeStore};
use flipline_core::trace::{
    CompletionEvent, DegenerateGeometryEvent, DeltasEvent, ResyncEvent, TraceSink,
    TriggerDroppedEvent, TriggerEvent,
};
use flipline_core::transform::SwapTransform;

/// One recorded write against a [`ScriptedSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceWrite {
    /// `set_transform(slot, transform)`.
    SetTransform(Slot, SwapTransform),
    /// `clear_transform(slot)`.
    ClearTransform(Slot),
    /// `swap_content()`.
    SwapContent,
    /// `apply_theme(colors)`.
    ApplyTheme(ThemeColors),
}

/// An in-memory [`SwapSurface`] with scripted geometry.
///
/// Natural rectangles are whatever the test last set; applied transforms,
/// content handles, and the full write log are exposed for assertions.
#[derive(Clone, Debug)]
pub struct ScriptedSurface {
    rects: [Rect; 2],
    transforms: [SwapTransform; 2],
    content: [u32; 2],
    /// Every mutation, in call order.
    pub writes: Vec<SurfaceWrite>,
}

impl ScriptedSurface {
    /// Creates a surface with the given natural rectangles and content
    /// handles `[1, 2]`.
    #[must_use]
    pub fn new(primary: Rect, secondary: Rect) -> Self {
        Self {
            rects: [primary, secondary],
            transforms: [SwapTransform::IDENTITY; 2],
            content: [1, 2],
            writes: Vec::new(),
        }
    }

    const fn idx(slot: Slot) -> usize {
        match slot {
            Slot::Primary => 0,
            Slot::Secondary => 1,
        }
    }

    /// Replaces a slot's natural rectangle (simulating a layout change).
    pub fn set_rect(&mut self, slot: Slot, rect: Rect) {
        self.rects[Self::idx(slot)] = rect;
    }

    /// The currently applied transform for `slot`.
    #[must_use]
    pub const fn transform(&self, slot: Slot) -> SwapTransform {
        self.transforms[Self::idx(slot)]
    }

    /// The slot's content handle.
    #[must_use]
    pub const fn content(&self, slot: Slot) -> u32 {
        self.content[Self::idx(slot)]
    }

    /// The slot's effective on-screen rectangle: the natural rectangle with
    /// the applied translation and scale (about the center).
    #[must_use]
    pub fn effective_rect(&self, slot: Slot) -> Rect {
        let natural = self.rects[Self::idx(slot)];
        let t = self.transforms[Self::idx(slot)];
        let center = natural.center();
        let w = natural.width() * t.scale;
        let h = natural.height() * t.scale;
        let cx = center.x + t.dx;
        let cy = center.y + t.dy;
        Rect::new(cx - w / 2.0, cy - h / 2.0, cx + w / 2.0, cy + h / 2.0)
    }

    /// Number of content swaps performed so far.
    #[must_use]
    pub fn content_swaps(&self) -> usize {
        self.writes
            .iter()
            .filter(|w| matches!(w, SurfaceWrite::SwapContent))
            .count()
    }
}

impl SwapSurface for ScriptedSurface {
    fn natural_rect(&mut self, slot: Slot) -> Rect {
        self.rects[Self::idx(slot)]
    }

    fn set_transform(&mut self, slot: Slot, transform: SwapTransform) {
        self.transforms[Self::idx(slot)] = transform;
        self.writes.push(SurfaceWrite::SetTransform(slot, transform));
    }

    fn clear_transform(&mut self, slot: Slot) {
        self.transforms[Self::idx(slot)] = SwapTransform::IDENTITY;
        self.writes.push(SurfaceWrite::ClearTransform(slot));
    }

    fn swap_content(&mut self) {
        self.content.swap(0, 1);
        self.writes.push(SurfaceWrite::SwapContent);
    }

    fn apply_theme(&mut self, colors: &ThemeColors) {
        self.writes.push(SurfaceWrite::ApplyTheme(*colors));
    }
}

/// A millisecond clock advanced by hand.
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    /// Creates a clock at time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { now_ms: 0.0 }
    }

    /// The current time, in milliseconds.
    #[must_use]
    pub const fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Advances the clock and returns the new time.
    pub const fn advance(&mut self, delta_ms: f64) -> f64 {
        self.now_ms += delta_ms;
        self.now_ms
    }
}

/// An in-memory [`ThemeStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryThemeStore {
    stored: Option<Theme>,
}

impl MemoryThemeStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { stored: None }
    }

    /// Creates a store with a pre-seeded preference.
    #[must_use]
    pub const fn with(theme: Theme) -> Self {
        Self {
            stored: Some(theme),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<Theme> {
        self.stored
    }

    fn store(&mut self, theme: Theme) {
        self.stored = Some(theme);
    }
}

/// The kind of a recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceEventKind {
    /// A trigger was accepted.
    Trigger,
    /// A re-entrant trigger was dropped.
    TriggerDropped,
    /// A fresh delta pair was measured.
    Deltas,
    /// Degenerate geometry was detected and skipped.
    DegenerateGeometry,
    /// An animation completed.
    Completion,
    /// A resize resync ran.
    Resync,
}

/// A [`TraceSink`] recording event kinds in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    /// Recorded kinds, oldest first.
    pub events: Vec<TraceEventKind>,
}

impl RecordingSink {
    /// Creates an empty sink.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// How many events of `kind` were recorded.
    #[must_use]
    pub fn count(&self, kind: TraceEventKind) -> usize {
        self.events.iter().filter(|&&k| k == kind).count()
    }
}

impl TraceSink for RecordingSink {
    fn on_trigger(&mut self, _e: &TriggerEvent) {
        self.events.push(TraceEventKind::Trigger);
    }

    fn on_trigger_dropped(&mut self, _e: &TriggerDroppedEvent) {
        self.events.push(TraceEventKind::TriggerDropped);
    }

    fn on_deltas(&mut self, _e: &DeltasEvent) {
        self.events.push(TraceEventKind::Deltas);
    }

    fn on_degenerate_geometry(&mut self, _e: &DegenerateGeometryEvent) {
        self.events.push(TraceEventKind::DegenerateGeometry);
    }

    fn on_completion(&mut self, _e: &CompletionEvent) {
        self.events.push(TraceEventKind::Completion);
    }

    fn on_resync(&mut self, _e: &ResyncEvent) {
        self.events.push(TraceEventKind::Resync);
    }
}
