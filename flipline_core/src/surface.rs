// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for rendering surfaces.
//!
//! Flipline splits platform-specific work into *backend* crates. A backend
//! owns the two tracked elements and exposes them to the core through the
//! [`SwapSurface`] trait: the core reads natural rectangles and writes
//! transforms, content swaps, and theme variables; everything else about the
//! elements (markup, styling, layout) belongs to the backend.
//!
//! # Crate boundaries
//!
//! `flipline_core` owns the data model, the swap state machine, and this
//! contract module. Backend crates depend on `flipline_core` and provide
//! platform glue (DOM elements, event listeners, storage). Application code
//! depends on both and wires them together.

use kurbo::Rect;

use crate::theme::ThemeColors;
use crate::transform::SwapTransform;

/// Identifies one of the two tracked elements.
///
/// There are exactly two: the swap exchanges their visual positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The navigation-logo element.
    Primary,
    /// The hero-picture element.
    Secondary,
}

impl Slot {
    /// Returns the other slot.
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }
}

/// A rendering surface holding the two tracked elements.
///
/// Both the DOM-backed surface and the in-memory test double implement this
/// trait, enabling a generic controller and headless state-machine tests.
///
/// None of these operations can fail: a surface whose elements are missing
/// is never constructed (the backend's constructor guards existence), and
/// every other failure mode degrades to "nothing visibly happens".
pub trait SwapSurface {
    /// Returns the slot's *untransformed* layout rectangle.
    ///
    /// Implementations must clear any applied transform before measuring.
    /// Measuring with a stale transform still applied yields wrong deltas,
    /// which is the primary correctness bug this contract exists to avoid.
    fn natural_rect(&mut self, slot: Slot) -> Rect;

    /// Writes a transform onto the slot, instantly.
    fn set_transform(&mut self, slot: Slot, transform: SwapTransform);

    /// Removes any applied transform, returning the slot to natural layout.
    fn clear_transform(&mut self, slot: Slot);

    /// Exchanges the two slots' displayed-content handles.
    fn swap_content(&mut self);

    /// Writes the color-scheme variables onto the surface.
    ///
    /// How (and whether) the change is animated is the surface's concern;
    /// the DOM surface lets a CSS transition of matching duration carry it.
    fn apply_theme(&mut self, colors: &ThemeColors);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_is_involutive() {
        assert_eq!(Slot::Primary.other(), Slot::Secondary);
        assert_eq!(Slot::Secondary.other().other(), Slot::Secondary);
    }
}
