// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the swap loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! the controller calls at each decision point. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! No failure is ever surfaced to the end user (suppressed re-entrant
//! triggers and degenerate geometry both degrade to "nothing visibly
//! happens"), so these events are the only way those paths are observable.

use crate::controller::SwapState;
use crate::geometry::DeltaPair;

/// Emitted when a trigger is accepted and an animation starts.
#[derive(Clone, Copy, Debug)]
pub struct TriggerEvent {
    /// Timestamp of the trigger, in milliseconds.
    pub now_ms: f64,
    /// The idle state the animation leaves from.
    pub from_state: SwapState,
}

/// Emitted when a trigger arrives while an animation is in flight.
///
/// The trigger is dropped, not queued; this event is the only record of it.
#[derive(Clone, Copy, Debug)]
pub struct TriggerDroppedEvent {
    /// Timestamp of the dropped trigger, in milliseconds.
    pub now_ms: f64,
}

/// Emitted after a fresh [`DeltaPair`] is measured.
#[derive(Clone, Copy, Debug)]
pub struct DeltasEvent {
    /// The freshly measured pair.
    pub deltas: DeltaPair,
}

/// Emitted when a measured pair is non-finite and the write is skipped.
///
/// This is the degenerate-geometry warning path: a zero-width element makes
/// the scale ratio undefined, and the controller refuses to let a NaN or
/// infinite transform reach the surface.
#[derive(Clone, Copy, Debug)]
pub struct DegenerateGeometryEvent {
    /// The offending pair.
    pub deltas: DeltaPair,
}

/// Emitted when an animation completes and the state flips.
#[derive(Clone, Copy, Debug)]
pub struct CompletionEvent {
    /// Completion timestamp, in milliseconds.
    pub now_ms: f64,
    /// The new idle state.
    pub state: SwapState,
}

/// Emitted when a resize resync recomputes deltas.
#[derive(Clone, Copy, Debug)]
pub struct ResyncEvent {
    /// The state at the moment of the resync.
    pub state: SwapState,
    /// Whether swapped-position transforms were instantly re-applied.
    pub reapplied: bool,
}

/// Receives trace events from the swap loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a trigger is accepted.
    fn on_trigger(&mut self, e: &TriggerEvent) {
        _ = e;
    }

    /// Called when a re-entrant trigger is dropped.
    fn on_trigger_dropped(&mut self, e: &TriggerDroppedEvent) {
        _ = e;
    }

    /// Called after a fresh delta pair is measured.
    fn on_deltas(&mut self, e: &DeltasEvent) {
        _ = e;
    }

    /// Called when degenerate geometry is detected and skipped.
    fn on_degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        _ = e;
    }

    /// Called when an animation completes.
    fn on_completion(&mut self, e: &CompletionEvent) {
        _ = e;
    }

    /// Called when a resize resync runs.
    fn on_resync(&mut self, e: &ResyncEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`TriggerEvent`].
    #[inline]
    pub fn trigger(&mut self, e: &TriggerEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_trigger(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TriggerDroppedEvent`].
    #[inline]
    pub fn trigger_dropped(&mut self, e: &TriggerDroppedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_trigger_dropped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DeltasEvent`].
    #[inline]
    pub fn deltas(&mut self, e: &DeltasEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_deltas(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DegenerateGeometryEvent`].
    #[inline]
    pub fn degenerate_geometry(&mut self, e: &DegenerateGeometryEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_degenerate_geometry(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`CompletionEvent`].
    #[inline]
    pub fn completion(&mut self, e: &CompletionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_completion(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResyncEvent`].
    #[inline]
    pub fn resync(&mut self, e: &ResyncEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resync(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
