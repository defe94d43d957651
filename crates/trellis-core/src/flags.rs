//! Alignment and fill flags for sizer entries.

use bitflags::bitflags;

use crate::geometry::Axis;

bitflags! {
    /// How an element is aligned and stretched inside its sizer cell.
    ///
    /// At most one alignment per axis is meaningful. When several are set
    /// the one checked last wins: `BOTTOM` over `CENTRE_VERTICAL` over `TOP`,
    /// and `RIGHT` over `CENTRE_HORIZONTAL` over `LEFT`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct SizerFlags: u32 {
        const TOP = 1 << 0;
        const CENTRE_VERTICAL = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const CENTRE_HORIZONTAL = 1 << 4;
        const RIGHT = 1 << 5;
        /// Stretch the element to the cell width.
        const FILL_HORIZONTAL = 1 << 6;
        /// Stretch the element to the cell height.
        const FILL_VERTICAL = 1 << 7;

        const CENTRE = Self::CENTRE_VERTICAL.bits() | Self::CENTRE_HORIZONTAL.bits();
        const FILL = Self::FILL_HORIZONTAL.bits() | Self::FILL_VERTICAL.bits();
    }
}

impl SizerFlags {
    const VERTICAL_ALIGN: SizerFlags = SizerFlags::TOP
        .union(SizerFlags::CENTRE_VERTICAL)
        .union(SizerFlags::BOTTOM);
    const HORIZONTAL_ALIGN: SizerFlags = SizerFlags::LEFT
        .union(SizerFlags::CENTRE_HORIZONTAL)
        .union(SizerFlags::RIGHT);

    /// Anchor fraction on `axis`: 0 for the leading edge, 0.5 for centre,
    /// 1 for the trailing edge.
    pub fn anchor(self, axis: Axis) -> f32 {
        let (leading, centre, trailing) = match axis {
            Axis::Horizontal => (Self::LEFT, Self::CENTRE_HORIZONTAL, Self::RIGHT),
            Axis::Vertical => (Self::TOP, Self::CENTRE_VERTICAL, Self::BOTTOM),
        };

        let mut anchor = 0.0;
        if self.contains(leading) {
            anchor = 0.0;
        }
        if self.contains(centre) {
            anchor = 0.5;
        }
        if self.contains(trailing) {
            anchor = 1.0;
        }
        anchor
    }

    /// Whether the element is stretched to the cell size on `axis`.
    pub fn fills(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.contains(Self::FILL_HORIZONTAL),
            Axis::Vertical => self.contains(Self::FILL_VERTICAL),
        }
    }

    /// The first axis carrying more than one alignment flag, if any.
    pub fn conflicting_axis(self) -> Option<Axis> {
        if self.intersection(Self::HORIZONTAL_ALIGN).bits().count_ones() > 1 {
            Some(Axis::Horizontal)
        } else if self.intersection(Self::VERTICAL_ALIGN).bits().count_ones() > 1 {
            Some(Axis::Vertical)
        } else {
            None
        }
    }
}
