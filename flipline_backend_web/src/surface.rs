// Copyright 2026 the Flipline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM-backed [`SwapSurface`].
//!
//! [`DomSwapSurface`] tracks two `HtmlElement`s resolved by id and maps the
//! core's surface operations onto CSS: transforms become a
//! `translate(..) scale(..) rotate(..)` value, the content swap exchanges
//! `src` attributes (falling back to `innerHTML` for non-media elements),
//! and theme palettes become CSS custom properties on the document root.
//! The page stylesheet owns how theme changes fade in.

use alloc::format;
use alloc::string::String;

use kurbo::Rect;
use wasm_bindgen::JsCast as _;
use web_sys::{Document, HtmlElement};

use flipline_core::surface::{Slot, SwapSurface};
use flipline_core::theme::ThemeColors;
use flipline_core::transform::SwapTransform;

/// A [`SwapSurface`] over two live DOM elements.
pub struct DomSwapSurface {
    root: HtmlElement,
    elements: [HtmlElement; 2],
}

impl core::fmt::Debug for DomSwapSurface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomSwapSurface").finish_non_exhaustive()
    }
}

impl DomSwapSurface {
    /// Resolves the two tracked elements by id.
    ///
    /// Returns `None` when either element (or the document root) is missing,
    /// so pages without the swap markup skip the whole feature instead of
    /// panicking.
    #[must_use]
    pub fn from_ids(document: &Document, primary_id: &str, secondary_id: &str) -> Option<Self> {
        let primary: HtmlElement = document.get_element_by_id(primary_id)?.dyn_into().ok()?;
        let secondary: HtmlElement = document.get_element_by_id(secondary_id)?.dyn_into().ok()?;
        let root: HtmlElement = document.document_element()?.dyn_into().ok()?;
        Some(Self {
            root,
            elements: [primary, secondary],
        })
    }

    const fn element(&self, slot: Slot) -> &HtmlElement {
        match slot {
            Slot::Primary => &self.elements[0],
            Slot::Secondary => &self.elements[1],
        }
    }

    /// The tracked element for `slot`.
    #[must_use]
    pub const fn html_element(&self, slot: Slot) -> &HtmlElement {
        self.element(slot)
    }
}

impl SwapSurface for DomSwapSurface {
    fn natural_rect(&mut self, slot: Slot) -> Rect {
        // Measuring with a transform still applied yields the transformed
        // box; clear first so the rect is the natural layout position.
        self.clear_transform(slot);
        let r = self.element(slot).get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.right(), r.bottom())
    }

    fn set_transform(&mut self, slot: Slot, transform: SwapTransform) {
        let css = format!(
            "translate({}px, {}px) rotate({}deg) scale({})",
            transform.dx, transform.dy, transform.rotation_deg, transform.scale,
        );
        let _ = self.element(slot).style().set_property("transform", &css);
    }

    fn clear_transform(&mut self, slot: Slot) {
        let _ = self.element(slot).style().remove_property("transform");
    }

    fn swap_content(&mut self) {
        let [a, b] = &self.elements;
        match (a.get_attribute("src"), b.get_attribute("src")) {
            (Some(src_a), Some(src_b)) => {
                let _ = a.set_attribute("src", &src_b);
                let _ = b.set_attribute("src", &src_a);
            }
            _ => {
                let html_a: String = a.inner_html();
                a.set_inner_html(&b.inner_html());
                b.set_inner_html(&html_a);
            }
        }
    }

    fn apply_theme(&mut self, colors: &ThemeColors) {
        let style = self.root.style();
        for (name, value) in colors.variables() {
            let _ = style.set_property(name, value);
        }
    }
}
