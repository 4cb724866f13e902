// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform deltas between two measured rectangles.
//!
//! A [`TransformDelta`] is the translation and scale that moves one element's
//! visual footprint onto another's. Deltas are computed center-to-center so
//! that elements of different aspect ratios still land visually centered on
//! the target, and the scale factor is the ratio of the *widths*.
//!
//! [`DeltaPair`] bundles both directions (primary → secondary's slot and
//! secondary → primary's slot). The pair is always measured as a unit from
//! the same pair of rectangles, so the two directions can never be stale
//! relative to each other.

use kurbo::Rect;

/// The translation and scale moving one rectangle's footprint onto another's.
///
/// `dx`/`dy` are the center-to-center offsets; `scale` is
/// `to.width() / from.width()`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct TransformDelta {
    /// Horizontal center offset, in surface units.
    pub dx: f64,
    /// Vertical center offset, in surface units.
    pub dy: f64,
    /// Width ratio of target over source.
    pub scale: f64,
}

impl TransformDelta {
    /// Computes the delta that moves `from`'s footprint onto `to`'s.
    ///
    /// A zero-width `from` rectangle produces a non-finite `scale`; callers
    /// must check [`is_finite`](Self::is_finite) before applying the result
    /// to a surface.
    #[must_use]
    pub fn between(from: Rect, to: Rect) -> Self {
        let from_center = from.center();
        let to_center = to.center();
        Self {
            dx: to_center.x - from_center.x,
            dy: to_center.y - from_center.y,
            scale: to.width() / from.width(),
        }
    }

    /// Is every component [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.dx.is_finite() && self.dy.is_finite() && self.scale.is_finite()
    }
}

/// Both directions of a swap, measured as a unit.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DeltaPair {
    /// Delta moving the primary element onto the secondary's slot.
    pub primary: TransformDelta,
    /// Delta moving the secondary element onto the primary's slot.
    pub secondary: TransformDelta,
}

impl DeltaPair {
    /// Measures both directions from the two natural rectangles.
    ///
    /// The rectangles must reflect *untransformed* layout positions; see
    /// [`SwapSurface::natural_rect`](crate::surface::SwapSurface::natural_rect).
    #[must_use]
    pub fn measure(primary: Rect, secondary: Rect) -> Self {
        Self {
            primary: TransformDelta::between(primary, secondary),
            secondary: TransformDelta::between(secondary, primary),
        }
    }

    /// Is every component of both deltas [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.primary.is_finite() && self.secondary.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f64, top: f64, w: f64, h: f64) -> Rect {
        Rect::new(left, top, left + w, top + h)
    }

    #[test]
    fn spec_example_deltas() {
        // Primary 40×40 at the origin, secondary 120×120 at (200, 100).
        let pair = DeltaPair::measure(rect(0.0, 0.0, 40.0, 40.0), rect(200.0, 100.0, 120.0, 120.0));

        assert!((pair.primary.dx - 220.0).abs() < 1e-9);
        assert!((pair.primary.dy - 120.0).abs() < 1e-9);
        assert!((pair.primary.scale - 3.0).abs() < 1e-9);

        assert!((pair.secondary.dx + 220.0).abs() < 1e-9);
        assert!((pair.secondary.dy + 120.0).abs() < 1e-9);
        assert!((pair.secondary.scale - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn measurement_is_idempotent() {
        let a = rect(10.0, 20.0, 64.0, 48.0);
        let b = rect(300.0, 150.0, 128.0, 96.0);
        assert_eq!(DeltaPair::measure(a, b), DeltaPair::measure(a, b));
    }

    #[test]
    fn translation_is_antisymmetric() {
        let a = rect(5.0, 7.0, 50.0, 20.0);
        let b = rect(400.0, 90.0, 75.0, 60.0);
        let ab = TransformDelta::between(a, b);
        let ba = TransformDelta::between(b, a);
        assert_eq!(ab.dx, -ba.dx);
        assert_eq!(ab.dy, -ba.dy);
    }

    #[test]
    fn scale_is_exact_width_ratio() {
        let a = rect(0.0, 0.0, 40.0, 10.0);
        let b = rect(100.0, 100.0, 120.0, 300.0);
        assert_eq!(TransformDelta::between(a, b).scale, 120.0 / 40.0);
        assert_eq!(TransformDelta::between(b, a).scale, 40.0 / 120.0);
    }

    #[test]
    fn centers_not_edges() {
        // Same top-left corner, different sizes: the delta is the difference
        // of the centers, not zero.
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(0.0, 0.0, 30.0, 30.0);
        let d = TransformDelta::between(a, b);
        assert_eq!(d.dx, 10.0);
        assert_eq!(d.dy, 10.0);
    }

    #[test]
    fn zero_width_source_is_not_finite() {
        let degenerate = rect(0.0, 0.0, 0.0, 10.0);
        let b = rect(100.0, 100.0, 50.0, 50.0);
        let pair = DeltaPair::measure(degenerate, b);
        assert!(!pair.primary.is_finite());
        assert!(!pair.is_finite());
        // The other direction degenerates to scale 0 but stays finite.
        assert!(pair.secondary.is_finite());
        assert_eq!(pair.secondary.scale, 0.0);
    }
}
