// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core state machine and geometry for reversible position-swap animations.
//!
//! `flipline_core` drives the exchange of two on-screen elements' visual
//! positions with a synchronized move/scale/rotate animation, optionally
//! bundled with a light/dark theme flip. It is `no_std` compatible (with
//! `alloc`) and knows nothing about any particular rendering surface:
//! backends implement the [`SwapSurface`](surface::SwapSurface) trait.
//!
//! # Architecture
//!
//! The crate is organized around an event-driven loop owned by the host:
//!
//! ```text
//!   click ──► SwapController::trigger ──► measure DeltaPair
//!                                              │
//!                       ┌──────────────────────┘
//!                       ▼
//!   frame tick ──► SwapController::tick ──► SwapSurface writes
//!                       │
//!                       ▼ (timeline complete)
//!   SwapCompleted ──► caller persists ThemePreference
//!
//!   resize ──► SwapController::resync ──► instant re-apply (if swapped)
//! ```
//!
//! **[`geometry`]** — [`DeltaPair`](geometry::DeltaPair) measurement: the
//! center-to-center translation and width-ratio scale moving each element
//! onto the other's slot, recomputed as a unit and validated for finiteness.
//!
//! **[`transform`]** — The applied translate/scale/rotate value and its
//! interpolation.
//!
//! **[`easing`]** / **[`timeline`]** — The single shared timeline both
//! elements sample, with the overshoot-and-settle back ease.
//!
//! **[`controller`]** — The swap state machine: re-entrancy guard, fresh
//! delta measurement on every trigger, completion content-swap, resize
//! resync.
//!
//! **[`surface`]** — The [`SwapSurface`](surface::SwapSurface) trait that
//! backends implement.
//!
//! **[`theme`]** — Light/dark preference, palettes, and the
//! [`ThemeStore`](theme::ThemeStore) persistence seam.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! swap-loop instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod controller;
pub mod easing;
pub mod geometry;
pub mod surface;
pub mod theme;
pub mod timeline;
pub mod trace;
pub mod transform;
