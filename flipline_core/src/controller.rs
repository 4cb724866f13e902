// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The swap state machine.
//!
//! [`SwapController`] owns the logical state of the two-element position
//! swap: whether the elements are in their original or exchanged slots,
//! whether an animation is in flight, and the freshly measured
//! [`DeltaPair`] the animation targets are built from.
//!
//! # State machine
//!
//! ```text
//!              trigger                    tick (timeline complete)
//! Idle(Original) ──────► Animating(plan) ────────────────────────► Idle(Swapped)
//!        ▲                    │    ▲                                    │
//!        │                    └────┘ trigger: dropped                   │
//!        └──────────────────────────────────────────────────────────────┘
//!                     (second trigger + completion, symmetric)
//! ```
//!
//! A trigger while animating is silently dropped — not queued, not an error
//! (the only record is a trace event). The state flag flips exclusively in
//! the completion path, and the in-flight [`FlightPlan`] is the one-shot
//! lease guaranteeing at most one animation at a time: it is constructed
//! only in [`trigger`](SwapController::trigger) and consumed exactly once in
//! [`tick`](SwapController::tick).
//!
//! # Variants
//!
//! [`SwapConfig::content_swap`] selects between the two historical
//! behaviors:
//!
//! - **Transform-carried** (off): the swapped state holds the delta
//!   transforms, and a viewport resize while swapped must instantly re-apply
//!   freshly measured deltas so the elements track their target slots
//!   instead of a stale pixel offset.
//! - **Content-swap** (on): completion exchanges the two elements' displayed
//!   content and resets both transforms to identity, leaving the surface
//!   indistinguishable from a fresh load in the new configuration. All
//!   visual difference is carried by content, not by transform, which keeps
//!   stacking contexts and scroll regions correct.

use crate::easing::Ease;
use crate::geometry::DeltaPair;
use crate::surface::{Slot, SwapSurface};
use crate::theme::{Theme, ThemeColors};
use crate::timeline::{SWAP_DURATION_MS, Timeline};
use crate::trace::{
    CompletionEvent, DegenerateGeometryEvent, DeltasEvent, ResyncEvent, Tracer, TriggerDroppedEvent,
    TriggerEvent,
};
use crate::transform::SwapTransform;

/// Which slot each element currently occupies, logically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SwapState {
    /// Elements are in their original slots.
    #[default]
    Original,
    /// Elements occupy each other's slots.
    Swapped,
}

impl SwapState {
    /// Returns the other state.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Original => Self::Swapped,
            Self::Swapped => Self::Original,
        }
    }
}

/// Configuration for a [`SwapController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapConfig {
    /// Animation duration in milliseconds.
    pub duration_ms: f64,
    /// Easing curve for the shared timeline.
    pub ease: Ease,
    /// Decorative rotation in degrees: the primary element spins by
    /// `+spin_deg`, the secondary by `-spin_deg`. Purely cosmetic.
    pub spin_deg: f64,
    /// Exchange content handles on completion instead of leaving the swap
    /// carried by transforms.
    pub content_swap: bool,
    /// Bundle a light/dark theme flip with the swap.
    pub theme_linked: bool,
}

impl SwapConfig {
    /// The portfolio-page preset: 1.5 s back-ease swap with two full spins,
    /// content exchange on completion, linked to the theme.
    #[must_use]
    pub const fn portfolio() -> Self {
        Self {
            duration_ms: SWAP_DURATION_MS,
            ease: Ease::SWAP,
            spin_deg: 720.0,
            content_swap: true,
            theme_linked: true,
        }
    }

    /// The transform-carried variant: no content exchange, no theme link.
    #[must_use]
    pub const fn transform_only() -> Self {
        Self {
            duration_ms: SWAP_DURATION_MS,
            ease: Ease::SWAP,
            spin_deg: 720.0,
            content_swap: false,
            theme_linked: false,
        }
    }
}

/// The one-shot lease for an in-flight animation.
///
/// Holds the shared timeline and both elements' start/target transforms.
/// Both elements sample the same timeline, so they cannot drift apart under
/// variable frame rates.
#[derive(Clone, Copy, Debug)]
struct FlightPlan {
    timeline: Timeline,
    primary_from: SwapTransform,
    primary_to: SwapTransform,
    secondary_from: SwapTransform,
    secondary_to: SwapTransform,
    /// The state that becomes current when the timeline completes.
    lands_in: SwapState,
}

#[derive(Clone, Copy, Debug)]
enum Phase {
    Idle(SwapState),
    Animating(FlightPlan),
}

/// Event returned by [`SwapController::tick`] when an animation completes.
///
/// The caller consumes this to perform side effects the core cannot
/// (persisting the theme preference): the animation-timing concern and the
/// persistence concern stay decoupled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapCompleted {
    /// The new idle state.
    pub state: SwapState,
    /// The theme to persist, when the controller is theme-linked.
    pub theme: Option<Theme>,
}

/// Drives a reversible two-element position swap over a [`SwapSurface`].
#[derive(Debug)]
pub struct SwapController {
    config: SwapConfig,
    phase: Phase,
    /// Last successfully measured pair. Kept so a degenerate re-measure can
    /// fall back to the previous known-good swapped transforms.
    deltas: Option<DeltaPair>,
    /// Rotation currently applied in the transform-carried swapped state.
    /// A completed forward animation leaves `spin_deg` applied; an instant
    /// resize re-apply resets it to zero (visually identical — the spin is
    /// whole turns).
    applied_spin_deg: f64,
}

impl SwapController {
    /// Creates a controller idle in the original state.
    #[must_use]
    pub const fn new(config: SwapConfig) -> Self {
        Self::with_state(config, SwapState::Original)
    }

    /// Creates a controller idle in the given state.
    ///
    /// Used at startup when a persisted theme preference decides the initial
    /// configuration. The caller is responsible for the matching initial
    /// content assignment; no transforms are applied.
    #[must_use]
    pub const fn with_state(config: SwapConfig, state: SwapState) -> Self {
        Self {
            config,
            phase: Phase::Idle(state),
            deltas: None,
            applied_spin_deg: 0.0,
        }
    }

    /// The logical state: the current idle state, or while animating, the
    /// state the animation left from.
    #[must_use]
    pub const fn state(&self) -> SwapState {
        match self.phase {
            Phase::Idle(state) => state,
            Phase::Animating(ref plan) => plan.lands_in.toggled(),
        }
    }

    /// Whether an animation is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Animating(_))
    }

    /// The last successfully measured delta pair, if any.
    #[must_use]
    pub const fn deltas(&self) -> Option<DeltaPair> {
        self.deltas
    }

    /// The controller's configuration.
    #[must_use]
    pub const fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// Requests a swap (or un-swap).
    ///
    /// While animating this is a no-op: the trigger is dropped, not queued.
    /// Otherwise deltas are always re-measured immediately before animating
    /// (never reused from a previous resize), the theme palette is written
    /// when theme-linked, and a single timeline starts for both elements.
    ///
    /// If the fresh measurement is degenerate (non-finite), no animation
    /// starts and nothing visibly happens beyond a trace warning.
    pub fn trigger<S: SwapSurface>(&mut self, now_ms: f64, surface: &mut S, tracer: &mut Tracer<'_>) {
        let state = match self.phase {
            Phase::Animating(_) => {
                tracer.trigger_dropped(&TriggerDroppedEvent { now_ms });
                return;
            }
            Phase::Idle(state) => state,
        };

        let Some(pair) = self.measure(surface, tracer) else {
            return;
        };

        if self.config.theme_linked {
            let lands_in = state.toggled();
            let theme = Self::theme_for(lands_in);
            surface.apply_theme(&ThemeColors::for_theme(theme));
        }

        let plan = self.plan(now_ms, state, &pair);
        surface.set_transform(Slot::Primary, plan.primary_from);
        surface.set_transform(Slot::Secondary, plan.secondary_from);
        self.phase = Phase::Animating(plan);
        tracer.trigger(&TriggerEvent {
            now_ms,
            from_state: state,
        });
    }

    /// Advances an in-flight animation to `now_ms`.
    ///
    /// Writes the interpolated transforms for both elements, and on
    /// completion performs the content swap (in the content-swap variant),
    /// settles both transforms, flips the state, and returns the
    /// [`SwapCompleted`] event. Ticking while idle returns `None`.
    pub fn tick<S: SwapSurface>(
        &mut self,
        now_ms: f64,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Option<SwapCompleted> {
        let plan = match self.phase {
            Phase::Idle(_) => return None,
            Phase::Animating(plan) => plan,
        };

        if !plan.timeline.is_complete(now_ms) {
            let p = plan.timeline.progress(now_ms);
            surface.set_transform(Slot::Primary, plan.primary_from.lerp(&plan.primary_to, p));
            surface.set_transform(
                Slot::Secondary,
                plan.secondary_from.lerp(&plan.secondary_to, p),
            );
            return None;
        }

        // Completion path: the only place the state flag flips and the only
        // place the flight-plan lease is released.
        if self.config.content_swap {
            surface.swap_content();
            surface.clear_transform(Slot::Primary);
            surface.clear_transform(Slot::Secondary);
            self.applied_spin_deg = 0.0;
        } else {
            // Settle on the exact targets, free of interpolation residue.
            surface.set_transform(Slot::Primary, plan.primary_to);
            surface.set_transform(Slot::Secondary, plan.secondary_to);
            self.applied_spin_deg = plan.primary_to.rotation_deg;
        }

        self.phase = Phase::Idle(plan.lands_in);
        tracer.completion(&CompletionEvent {
            now_ms,
            state: plan.lands_in,
        });

        Some(SwapCompleted {
            state: plan.lands_in,
            theme: self.config.theme_linked.then(|| Self::theme_for(plan.lands_in)),
        })
    }

    /// Re-measures after a viewport resize and keeps the applied transforms
    /// geometrically correct.
    ///
    /// In the transform-carried swapped state the freshly measured deltas
    /// are re-applied instantly (no animation, no spin) — otherwise the
    /// elements would stay pinned to the pre-resize pixel offsets. An
    /// in-flight animation is retargeted so it still lands on the
    /// post-resize slots. A degenerate measurement skips the write.
    pub fn resync<S: SwapSurface>(&mut self, surface: &mut S, tracer: &mut Tracer<'_>) {
        let Some(pair) = self.measure(surface, tracer) else {
            return;
        };

        match self.phase {
            Phase::Idle(SwapState::Swapped) if !self.config.content_swap => {
                self.applied_spin_deg = 0.0;
                surface.set_transform(Slot::Primary, SwapTransform::from_delta(&pair.primary, 0.0));
                surface.set_transform(
                    Slot::Secondary,
                    SwapTransform::from_delta(&pair.secondary, 0.0),
                );
                tracer.resync(&ResyncEvent {
                    state: SwapState::Swapped,
                    reapplied: true,
                });
            }
            Phase::Idle(state) => {
                // Content-swap idle states sit at identity; the measurement
                // cleared the (identity) transforms, which is a no-op.
                tracer.resync(&ResyncEvent {
                    state,
                    reapplied: false,
                });
            }
            Phase::Animating(mut plan) => {
                // Retarget the moving legs; identity targets stay identity.
                if plan.primary_to != SwapTransform::IDENTITY {
                    plan.primary_to =
                        SwapTransform::from_delta(&pair.primary, plan.primary_to.rotation_deg);
                    plan.secondary_to =
                        SwapTransform::from_delta(&pair.secondary, plan.secondary_to.rotation_deg);
                }
                let state = plan.lands_in.toggled();
                self.phase = Phase::Animating(plan);
                tracer.resync(&ResyncEvent {
                    state,
                    reapplied: false,
                });
            }
        }
    }

    /// Clears both transforms, measures natural rects, and validates the
    /// pair. On degenerate geometry the previous applied state is restored
    /// from the cached pair where possible and `None` is returned.
    fn measure<S: SwapSurface>(
        &mut self,
        surface: &mut S,
        tracer: &mut Tracer<'_>,
    ) -> Option<DeltaPair> {
        surface.clear_transform(Slot::Primary);
        surface.clear_transform(Slot::Secondary);
        let primary = surface.natural_rect(Slot::Primary);
        let secondary = surface.natural_rect(Slot::Secondary);
        let pair = DeltaPair::measure(primary, secondary);

        if !pair.is_finite() {
            tracer.degenerate_geometry(&DegenerateGeometryEvent { deltas: pair });
            self.restore_applied(surface);
            return None;
        }

        self.deltas = Some(pair);
        tracer.deltas(&DeltasEvent { deltas: pair });
        Some(pair)
    }

    /// Puts back the transforms the measurement cleared, using the cached
    /// pair. Only the transform-carried swapped state has anything to
    /// restore.
    fn restore_applied<S: SwapSurface>(&self, surface: &mut S) {
        if self.config.content_swap {
            return;
        }
        if let (Phase::Idle(SwapState::Swapped), Some(pair)) = (self.phase, self.deltas) {
            surface.set_transform(
                Slot::Primary,
                SwapTransform::from_delta(&pair.primary, self.applied_spin_deg),
            );
            surface.set_transform(
                Slot::Secondary,
                SwapTransform::from_delta(&pair.secondary, -self.applied_spin_deg),
            );
        }
    }

    /// Builds the flight plan for a trigger leaving `state`.
    fn plan(&self, now_ms: f64, state: SwapState, pair: &DeltaPair) -> FlightPlan {
        let timeline = Timeline::new(now_ms, self.config.duration_ms, self.config.ease);
        let spin = self.config.spin_deg;

        let forward = state == SwapState::Original || self.config.content_swap;
        if forward {
            // Move each element onto the other's slot, with opposite spins.
            FlightPlan {
                timeline,
                primary_from: SwapTransform::IDENTITY,
                primary_to: SwapTransform::from_delta(&pair.primary, spin),
                secondary_from: SwapTransform::IDENTITY,
                secondary_to: SwapTransform::from_delta(&pair.secondary, -spin),
                lands_in: state.toggled(),
            }
        } else {
            // Transform-carried reverse: start from the freshly measured
            // swapped transforms (carrying whatever spin is still applied)
            // and unwind to identity.
            let applied = self.applied_spin_deg;
            FlightPlan {
                timeline,
                primary_from: SwapTransform::from_delta(&pair.primary, applied),
                primary_to: SwapTransform::IDENTITY,
                secondary_from: SwapTransform::from_delta(&pair.secondary, -applied),
                secondary_to: SwapTransform::IDENTITY,
                lands_in: SwapState::Original,
            }
        }
    }

    /// Swapped is the dark configuration; original is light.
    const fn theme_for(state: SwapState) -> Theme {
        match state {
            SwapState::Swapped => Theme::Dark,
            SwapState::Original => Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::Rect;

    /// Minimal in-memory surface double.
    struct TestSurface {
        rects: [Rect; 2],
        transforms: [SwapTransform; 2],
        content: [u32; 2],
        content_swaps: u32,
        themes_applied: Vec<ThemeColors>,
    }

    impl TestSurface {
        fn new(primary: Rect, secondary: Rect) -> Self {
            Self {
                rects: [primary, secondary],
                transforms: [SwapTransform::IDENTITY; 2],
                content: [1, 2],
                content_swaps: 0,
                themes_applied: Vec::new(),
            }
        }

        fn idx(slot: Slot) -> usize {
            match slot {
                Slot::Primary => 0,
                Slot::Secondary => 1,
            }
        }

        fn transform(&self, slot: Slot) -> SwapTransform {
            self.transforms[Self::idx(slot)]
        }
    }

    impl SwapSurface for TestSurface {
        fn natural_rect(&mut self, slot: Slot) -> Rect {
            self.rects[Self::idx(slot)]
        }

        fn set_transform(&mut self, slot: Slot, transform: SwapTransform) {
            self.transforms[Self::idx(slot)] = transform;
        }

        fn clear_transform(&mut self, slot: Slot) {
            self.transforms[Self::idx(slot)] = SwapTransform::IDENTITY;
        }

        fn swap_content(&mut self) {
            self.content.swap(0, 1);
            self.content_swaps += 1;
        }

        fn apply_theme(&mut self, colors: &ThemeColors) {
            self.themes_applied.push(*colors);
        }
    }

    fn rect(left: f64, top: f64, w: f64, h: f64) -> Rect {
        Rect::new(left, top, left + w, top + h)
    }

    fn surface() -> TestSurface {
        TestSurface::new(rect(0.0, 0.0, 40.0, 40.0), rect(200.0, 100.0, 120.0, 120.0))
    }

    /// Runs an animation to completion with intermediate ticks.
    fn run_to_completion(
        ctl: &mut SwapController,
        s: &mut TestSurface,
        start_ms: f64,
    ) -> SwapCompleted {
        let mut tracer = Tracer::none();
        let mut now = start_ms;
        loop {
            now += 100.0;
            if let Some(done) = ctl.tick(now, s, &mut tracer) {
                return done;
            }
            assert!(now < start_ms + 10_000.0, "animation never completed");
        }
    }

    #[test]
    fn reentrant_trigger_is_dropped() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::portfolio());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        assert!(ctl.is_animating());

        // Mid-flight triggers change nothing.
        let _ = ctl.tick(700.0, &mut s, &mut tracer);
        let mid = s.transform(Slot::Primary);
        ctl.trigger(750.0, &mut s, &mut tracer);
        assert!(ctl.is_animating());
        assert_eq!(s.transform(Slot::Primary), mid);
        assert_eq!(s.content_swaps, 0);

        // A trigger after completion is accepted.
        let done = run_to_completion(&mut ctl, &mut s, 750.0);
        assert_eq!(done.state, SwapState::Swapped);
        ctl.trigger(3000.0, &mut s, &mut tracer);
        assert!(ctl.is_animating());
    }

    #[test]
    fn content_identity_invariant() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::portfolio());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        let done = run_to_completion(&mut ctl, &mut s, 0.0);

        assert_eq!(done.state, SwapState::Swapped);
        assert_eq!(done.theme, Some(Theme::Dark));
        // Transforms are exactly identity; content handles are exchanged.
        assert_eq!(s.transform(Slot::Primary), SwapTransform::IDENTITY);
        assert_eq!(s.transform(Slot::Secondary), SwapTransform::IDENTITY);
        assert_eq!(s.content, [2, 1]);
    }

    #[test]
    fn two_triggers_round_trip() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::portfolio());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        let first = run_to_completion(&mut ctl, &mut s, 0.0);
        assert_eq!(first.state, SwapState::Swapped);

        ctl.trigger(5000.0, &mut s, &mut tracer);
        let second = run_to_completion(&mut ctl, &mut s, 5000.0);

        assert_eq!(second.state, SwapState::Original);
        assert_eq!(second.theme, Some(Theme::Light));
        assert_eq!(ctl.state(), SwapState::Original);
        assert!(!ctl.is_animating());
        assert_eq!(s.transform(Slot::Primary), SwapTransform::IDENTITY);
        assert_eq!(s.transform(Slot::Secondary), SwapTransform::IDENTITY);
        // Content handles are back where they started.
        assert_eq!(s.content, [1, 2]);
        assert_eq!(s.content_swaps, 2);
    }

    #[test]
    fn both_elements_sample_one_timeline() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig {
            ease: Ease::Linear,
            spin_deg: 0.0,
            ..SwapConfig::portfolio()
        });
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        let _ = ctl.tick(750.0, &mut s, &mut tracer);

        // At the linear midpoint both elements are exactly half-way along
        // their (opposite) deltas.
        let p = s.transform(Slot::Primary);
        let q = s.transform(Slot::Secondary);
        assert_eq!(p.dx, 110.0);
        assert_eq!(p.dy, 60.0);
        assert_eq!(q.dx, -110.0);
        assert_eq!(q.dy, -60.0);
        assert_eq!(p.scale, (1.0 + 3.0) / 2.0);
        assert_eq!(q.scale, (1.0 + 1.0 / 3.0) / 2.0);
    }

    #[test]
    fn transform_carried_swap_lands_on_deltas() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::transform_only());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        let done = run_to_completion(&mut ctl, &mut s, 0.0);
        assert_eq!(done.state, SwapState::Swapped);
        assert_eq!(done.theme, None);

        let p = s.transform(Slot::Primary);
        assert_eq!(p.dx, 220.0);
        assert_eq!(p.dy, 120.0);
        assert_eq!(p.scale, 3.0);
        assert_eq!(p.rotation_deg, 720.0);
        assert_eq!(s.transform(Slot::Secondary).rotation_deg, -720.0);
        // No content exchange in this variant.
        assert_eq!(s.content, [1, 2]);
    }

    #[test]
    fn transform_carried_reverse_unwinds_to_identity() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::transform_only());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        let _ = run_to_completion(&mut ctl, &mut s, 0.0);
        ctl.trigger(5000.0, &mut s, &mut tracer);
        let done = run_to_completion(&mut ctl, &mut s, 5000.0);

        assert_eq!(done.state, SwapState::Original);
        assert_eq!(s.transform(Slot::Primary), SwapTransform::IDENTITY);
        assert_eq!(s.transform(Slot::Secondary), SwapTransform::IDENTITY);
    }

    #[test]
    fn resize_while_swapped_reapplies_fresh_deltas() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::transform_only());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        let _ = run_to_completion(&mut ctl, &mut s, 0.0);

        // Viewport change: both natural rects move and resize.
        s.rects = [rect(10.0, 5.0, 30.0, 30.0), rect(400.0, 250.0, 90.0, 90.0)];
        ctl.resync(&mut s, &mut tracer);

        // Each element's effective center lands on the *other's* new natural
        // center: natural center + applied delta == other center.
        let p = s.transform(Slot::Primary);
        assert_eq!(25.0 + p.dx, 445.0);
        assert_eq!(20.0 + p.dy, 295.0);
        assert_eq!(p.scale, 3.0);
        // Instant re-apply carries no spin.
        assert_eq!(p.rotation_deg, 0.0);

        let q = s.transform(Slot::Secondary);
        assert_eq!(445.0 + q.dx, 25.0);
        assert_eq!(295.0 + q.dy, 20.0);
        assert_eq!(q.scale, 30.0 / 90.0);
    }

    #[test]
    fn resize_while_original_applies_nothing() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::portfolio());
        let mut tracer = Tracer::none();

        ctl.resync(&mut s, &mut tracer);
        assert_eq!(s.transform(Slot::Primary), SwapTransform::IDENTITY);
        assert_eq!(s.transform(Slot::Secondary), SwapTransform::IDENTITY);
        assert!(ctl.deltas().is_some());
    }

    #[test]
    fn resize_mid_flight_retargets() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig {
            ease: Ease::Linear,
            spin_deg: 0.0,
            ..SwapConfig::portfolio()
        });
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        let _ = ctl.tick(300.0, &mut s, &mut tracer);

        s.rects = [rect(0.0, 0.0, 40.0, 40.0), rect(600.0, 300.0, 120.0, 120.0)];
        ctl.resync(&mut s, &mut tracer);
        assert!(ctl.is_animating());

        let done = run_to_completion(&mut ctl, &mut s, 300.0);
        assert_eq!(done.state, SwapState::Swapped);
        // Landed on the post-resize slot, then content-swapped to identity.
        assert_eq!(s.transform(Slot::Primary), SwapTransform::IDENTITY);
        assert_eq!(s.content, [2, 1]);
    }

    #[test]
    fn degenerate_geometry_aborts_trigger() {
        let mut s = TestSurface::new(rect(0.0, 0.0, 0.0, 40.0), rect(200.0, 100.0, 120.0, 120.0));
        let mut ctl = SwapController::new(SwapConfig::portfolio());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        assert!(!ctl.is_animating());
        assert_eq!(ctl.state(), SwapState::Original);
        assert!(ctl.deltas().is_none());
        assert_eq!(s.transform(Slot::Primary), SwapTransform::IDENTITY);
        assert!(s.themes_applied.is_empty());
    }

    #[test]
    fn degenerate_resync_restores_swapped_transforms() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::transform_only());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        let _ = run_to_completion(&mut ctl, &mut s, 0.0);
        let applied = s.transform(Slot::Primary);

        // The primary collapses to zero width mid-session; the fresh pair is
        // unusable, so the previous known-good transforms come back.
        s.rects[0] = rect(0.0, 0.0, 0.0, 40.0);
        ctl.resync(&mut s, &mut tracer);
        assert_eq!(s.transform(Slot::Primary), applied);
        assert_eq!(ctl.state(), SwapState::Swapped);
    }

    #[test]
    fn theme_palette_written_at_trigger() {
        let mut s = surface();
        let mut ctl = SwapController::new(SwapConfig::portfolio());
        let mut tracer = Tracer::none();

        ctl.trigger(0.0, &mut s, &mut tracer);
        assert_eq!(s.themes_applied, [ThemeColors::DARK]);

        let _ = run_to_completion(&mut ctl, &mut s, 0.0);
        ctl.trigger(5000.0, &mut s, &mut tracer);
        assert_eq!(s.themes_applied, [ThemeColors::DARK, ThemeColors::LIGHT]);
    }

    #[test]
    fn starts_in_persisted_state() {
        let ctl = SwapController::with_state(SwapConfig::portfolio(), SwapState::Swapped);
        assert_eq!(ctl.state(), SwapState::Swapped);
        assert!(!ctl.is_animating());
    }
}
