//! A single slot in a sizer.

use glam::Vec2;
use trellis_core::{Axis, Border, Rect, SizerFlags};

use crate::element::{SizerElement, UiElement};

/// Proportions at or below this are treated as zero (fixed-size entries).
pub const PROPORTION_EPSILON: f32 = 0.0001;

/// One entry of a sizer: an optional element plus how it is sized and placed.
///
/// An entry without an element is a spacer. It still takes part in size
/// accounting through its border and proportion.
#[derive(Debug)]
pub struct LayoutEntry {
    element: Option<SizerElement>,
    proportion: f32,
    border: Border,
    flags: SizerFlags,
}

impl LayoutEntry {
    pub fn new(
        element: Option<SizerElement>,
        proportion: f32,
        border: Border,
        flags: SizerFlags,
    ) -> Self {
        Self {
            element,
            proportion,
            border,
            flags,
        }
    }

    /// A fixed spacer whose extent is carried by `border`.
    pub fn spacer(border: Border) -> Self {
        Self::new(None, 0.0, border, SizerFlags::empty())
    }

    /// A flexible spacer sharing leftover space with weight `proportion`.
    pub fn stretch(proportion: f32) -> Self {
        Self::new(None, proportion, Border::ZERO, SizerFlags::empty())
    }

    pub fn proportion(&self) -> f32 {
        self.proportion
    }

    /// Whether this entry shares leftover space instead of keeping its minimum.
    pub fn is_proportional(&self) -> bool {
        self.proportion > PROPORTION_EPSILON
    }

    /// Minimum size of the wrapped element, or zero for a spacer.
    pub fn minimum_size(&self) -> Vec2 {
        self.element
            .as_ref()
            .map_or(Vec2::ZERO, UiElement::compute_minimum_size)
    }

    /// Place the element inside `rect`, which is already net of this
    /// entry's border.
    ///
    /// The element keeps `min_size` unless a fill flag stretches it to the
    /// cell, and is then anchored by the alignment flags. The resulting
    /// position is snapped to whole pixels.
    pub fn place_inside(&self, rect: Rect, min_size: Vec2) {
        let cell_size = rect.size();
        let mut size = min_size;
        if self.flags.fills(Axis::Horizontal) {
            size.x = cell_size.x;
        }
        if self.flags.fills(Axis::Vertical) {
            size.y = cell_size.y;
        }

        let anchor = Vec2::new(
            self.flags.anchor(Axis::Horizontal),
            self.flags.anchor(Axis::Vertical),
        );
        let pos = (rect.top_left() + (cell_size - size) * anchor).round();

        if let Some(element) = &self.element {
            element.set_rect(Rect::from_origin_size(pos, size));
        }
    }

    pub fn element(&self) -> Option<&SizerElement> {
        self.element.as_ref()
    }

    pub fn border(&self) -> Border {
        self.border
    }

    pub fn flags(&self) -> SizerFlags {
        self.flags
    }
}
