// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves for the swap timeline.
//!
//! The swap uses a "back" ease-in-out: the motion pulls back slightly before
//! launching and overshoots slightly before settling, symmetric around the
//! midpoint. The curve is the cubic-polynomial form of the classic back ease
//! with a configurable overshoot amount, so evaluation needs no float
//! intrinsics and the module stays `no_std`-clean.

/// A normalized-time easing curve.
///
/// Maps `t ∈ [0, 1]` to eased progress. Progress may leave `[0, 1]`
/// mid-curve (that is the overshoot), but `apply(0) == 0` and
/// `apply(1) == 1` exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    /// Straight-line progress.
    Linear,
    /// Back ease-in-out: pull back, accelerate, overshoot, settle.
    BackInOut {
        /// Overshoot amount. Larger values pull back and overshoot further;
        /// `0.0` degenerates to a plain cubic ease-in-out.
        overshoot: f64,
    },
}

impl Ease {
    /// The curve used by the position swap, matching a back in-out ease with
    /// overshoot 1.5.
    pub const SWAP: Self = Self::BackInOut { overshoot: 1.5 };

    /// Evaluates the curve at normalized time `t`.
    #[must_use]
    pub fn apply(&self, t: f64) -> f64 {
        match *self {
            Self::Linear => t,
            Self::BackInOut { overshoot } => back_in_out(t, overshoot),
        }
    }
}

/// Back ease-in-out with overshoot `s`.
///
/// First half: `((2t)² · ((s+1)·2t − s)) / 2`.
/// Second half: mirrored around the midpoint.
fn back_in_out(t: f64, s: f64) -> f64 {
    // The classic scaled overshoot constant (s · 1.525 for the in-out form).
    let s = s * 1.525;
    if t < 0.5 {
        let u = 2.0 * t;
        (u * u * ((s + 1.0) * u - s)) / 2.0
    } else {
        let u = 2.0 * t - 2.0;
        (u * u * ((s + 1.0) * u + s) + 2.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for ease in [Ease::Linear, Ease::SWAP, Ease::BackInOut { overshoot: 0.0 }] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
        }
    }

    #[test]
    fn linear_is_identity() {
        assert_eq!(Ease::Linear.apply(0.25), 0.25);
        assert_eq!(Ease::Linear.apply(0.75), 0.75);
    }

    #[test]
    fn midpoint_is_half() {
        // Both halves meet at exactly 0.5 regardless of overshoot.
        assert!((Ease::SWAP.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn pulls_back_near_start() {
        // Early in the curve, a back ease dips below zero.
        let v = Ease::SWAP.apply(0.1);
        assert!(v < 0.0, "expected pull-back, got {v}");
    }

    #[test]
    fn overshoots_near_end() {
        let v = Ease::SWAP.apply(0.9);
        assert!(v > 1.0, "expected overshoot, got {v}");
    }

    #[test]
    fn symmetric_around_midpoint() {
        // back.inOut is odd-symmetric about (0.5, 0.5).
        for &t in &[0.05, 0.15, 0.3, 0.45] {
            let lo = Ease::SWAP.apply(t);
            let hi = Ease::SWAP.apply(1.0 - t);
            assert!((lo + hi - 1.0).abs() < 1e-12, "asymmetric at t={t}");
        }
    }

    #[test]
    fn zero_overshoot_stays_in_range() {
        let ease = Ease::BackInOut { overshoot: 0.0 };
        for i in 0..=20 {
            let t = f64::from(i) / 20.0;
            let v = ease.apply(t);
            assert!((-1e-12..=1.0 + 1e-12).contains(&v), "out of range at t={t}");
        }
    }
}
