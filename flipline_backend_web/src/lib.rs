// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for flipline.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`RafLoop`]: `requestAnimationFrame` tick source
//! - [`DomSwapSurface`]: the DOM-backed [`SwapSurface`]
//! - [`EventBinding`]: retained click/resize listeners
//! - [`LocalThemeStore`]: theme persistence over `localStorage`
//! - [`ConsoleSink`]: swap-loop tracing to the browser console
//!
//! [`SwapSurface`]: flipline_core::surface::SwapSurface

#![no_std]

extern crate alloc;

mod console;
mod events;
mod raf;
mod storage;
mod surface;

pub use console::ConsoleSink;
pub use events::EventBinding;
pub use flipline_core::surface::SwapSurface;
pub use raf::RafLoop;
pub use storage::{LocalThemeStore, system_prefers_dark};
pub use surface::DomSwapSurface;

/// Returns the current time from `performance.now()`, in milliseconds.
///
/// This is the same clock `requestAnimationFrame` timestamps come from, so
/// a timeline anchored here and ticked from a [`RafLoop`] never jumps.
#[must_use]
pub fn now_ms() -> f64 {
    raf::performance_now()
}
