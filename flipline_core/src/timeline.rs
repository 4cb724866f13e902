// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The single logical timeline shared by both tracked elements.
//!
//! Both elements of a swap sample their transforms from one [`Timeline`]
//! value, so they start and finish at the same instant by construction.
//! There is deliberately no per-element clock: two independent timelines
//! could drift apart under variable frame rates.
//!
//! Times are `f64` milliseconds, matching the resolution of browser
//! `DOMHighResTimeStamp` values delivered by `requestAnimationFrame`.

use crate::easing::Ease;

/// Duration of the position swap, in milliseconds (1.5 seconds).
pub const SWAP_DURATION_MS: f64 = 1500.0;

/// A fixed-duration animation timeline with an easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timeline {
    /// Timestamp of the first frame, in milliseconds.
    pub start_ms: f64,
    /// Total duration, in milliseconds.
    pub duration_ms: f64,
    /// Easing curve applied to normalized time.
    pub ease: Ease,
}

impl Timeline {
    /// Creates a timeline starting at `start_ms`.
    #[must_use]
    pub const fn new(start_ms: f64, duration_ms: f64, ease: Ease) -> Self {
        Self {
            start_ms,
            duration_ms,
            ease,
        }
    }

    /// Eased progress at `now_ms`.
    ///
    /// Normalized time is clamped to `[0, 1]` before easing: times before
    /// the start report `ease(0)` and times at or past the end report
    /// `ease(1)` exactly. A zero (or negative) duration reports completion
    /// immediately, so a degenerate timeline cannot divide by zero or stall.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return self.ease.apply(1.0);
        }
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0);
        self.ease.apply(t)
    }

    /// Whether the timeline has run to completion at `now_ms`.
    #[must_use]
    pub fn is_complete(&self, now_ms: f64) -> bool {
        self.duration_ms <= 0.0 || now_ms - self.start_ms >= self.duration_ms
    }
}
