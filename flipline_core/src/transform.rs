// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The applied transform written onto a tracked element.
//!
//! [`SwapTransform`] covers exactly the properties the swap animation drives
//! (translation, uniform scale, rotation) without pulling in a full matrix
//! type. Rotation is stored in degrees because it is a derived decorative
//! constant, never measured geometry.

use crate::geometry::TransformDelta;

/// A translate/scale/rotate transform applied to one tracked element.
///
/// The identity transform leaves the element at its natural layout position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwapTransform {
    /// Horizontal translation, in surface units.
    pub dx: f64,
    /// Vertical translation, in surface units.
    pub dy: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees (clockwise positive).
    pub rotation_deg: f64,
}

impl SwapTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        dx: 0.0,
        dy: 0.0,
        scale: 1.0,
        rotation_deg: 0.0,
    };

    /// Creates a transform from a measured delta plus a decorative rotation.
    #[inline]
    #[must_use]
    pub const fn from_delta(delta: &TransformDelta, rotation_deg: f64) -> Self {
        Self {
            dx: delta.dx,
            dy: delta.dy,
            scale: delta.scale,
            rotation_deg,
        }
    }

    /// Component-wise linear interpolation toward `other`.
    ///
    /// `t = 0` yields `self` and `t = 1` yields `other` exactly. Values
    /// outside `[0, 1]` extrapolate, which is how an overshooting ease
    /// produces its bounce.
    #[inline]
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            dx: self.dx + (other.dx - self.dx) * t,
            dy: self.dy + (other.dy - self.dy) * t,
            scale: self.scale + (other.scale - self.scale) * t,
            rotation_deg: self.rotation_deg + (other.rotation_deg - self.rotation_deg) * t,
        }
    }

    /// Is every component [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.dx.is_finite()
            && self.dy.is_finite()
            && self.scale.is_finite()
            && self.rotation_deg.is_finite()
    }

    /// Is any component [NaN]?
    ///
    /// [NaN]: f64::is_nan
    #[inline]
    #[must_use]
    pub const fn is_nan(&self) -> bool {
        self.dx.is_nan() || self.dy.is_nan() || self.scale.is_nan() || self.rotation_deg.is_nan()
    }
}

impl Default for SwapTransform {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert_eq!(SwapTransform::default(), SwapTransform::IDENTITY);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = SwapTransform::IDENTITY;
        let b = SwapTransform {
            dx: 220.0,
            dy: 120.0,
            scale: 3.0,
            rotation_deg: 720.0,
        };
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = SwapTransform::IDENTITY;
        let b = SwapTransform {
            dx: 100.0,
            dy: -50.0,
            scale: 3.0,
            rotation_deg: 720.0,
        };
        let mid = a.lerp(&b, 0.5);
        assert_eq!(mid.dx, 50.0);
        assert_eq!(mid.dy, -25.0);
        assert_eq!(mid.scale, 2.0);
        assert_eq!(mid.rotation_deg, 360.0);
    }

    #[test]
    fn lerp_extrapolates_beyond_one() {
        // An overshooting ease hands in t > 1; translation keeps going.
        let a = SwapTransform::IDENTITY;
        let b = SwapTransform {
            dx: 100.0,
            dy: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
        };
        assert_eq!(a.lerp(&b, 1.1).dx, 110.0);
    }

    #[test]
    fn nan_detected() {
        let mut t = SwapTransform::IDENTITY;
        t.scale = f64::NAN;
        assert!(!t.is_finite());
        assert!(t.is_nan());
    }

    #[test]
    fn infinity_detected() {
        let mut t = SwapTransform::IDENTITY;
        t.dx = f64::INFINITY;
        assert!(!t.is_finite());
        assert!(!t.is_nan());
    }
}
