//! Sizer - one-axis box layout.
//!
//! A sizer stacks its entries along a main axis and stretches every cell
//! across the cross axis. Fixed entries keep their minimum size on the main
//! axis; proportional entries split whatever space is left in ratio to their
//! weights. Nesting sizers composes the two axes.
//!
//! A layout pass is two traversals: [`Sizer::compute_minimum_size`] walks the
//! tree bottom-up, then [`Sizer::set_rect`] distributes the allotted
//! rectangle top-down. Neither mutates the tree, so repeating `set_rect` with
//! the same rectangle places every element identically.

use std::cell::RefCell;
use std::ops::Index;
use std::rc::Rc;

use glam::Vec2;
use smallvec::SmallVec;
use tracing::{debug, trace, warn};
use trellis_core::{Axis, Border, LayoutError, Rect, SizerConfig, SizerFlags, SizerType};

use crate::element::{SizerElement, SizerHandle, UiElement, UiParent, Widget};
use crate::entry::LayoutEntry;

/// An ordered, one-axis arrangement of widgets, nested sizers and spacers.
#[derive(Debug, Default)]
pub struct Sizer {
    sizer_type: SizerType,
    gap: f32,
    entries: SmallVec<[LayoutEntry; 4]>,
}

impl Sizer {
    /// Create an empty sizer.
    pub fn new(sizer_type: SizerType, gap: f32) -> Self {
        Self {
            sizer_type,
            gap,
            entries: SmallVec::new(),
        }
    }

    /// Create an empty sizer, rejecting a negative or non-finite gap.
    pub fn try_new(sizer_type: SizerType, gap: f32) -> Result<Self, LayoutError> {
        let config = SizerConfig { sizer_type, gap };
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Create an empty sizer that stacks entries left to right.
    pub fn horizontal(gap: f32) -> Self {
        Self::new(SizerType::Horizontal, gap)
    }

    /// Create an empty sizer that stacks entries top to bottom.
    pub fn vertical(gap: f32) -> Self {
        Self::new(SizerType::Vertical, gap)
    }

    /// Create an empty sizer from a loaded configuration.
    pub fn from_config(config: SizerConfig) -> Self {
        Self::new(config.sizer_type, config.gap)
    }

    /// Wrap the sizer in a shared handle so it can be nested and still
    /// reached from outside.
    pub fn into_handle(self) -> SizerHandle {
        Rc::new(RefCell::new(self))
    }

    /// The direction entries are stacked in.
    pub fn sizer_type(&self) -> SizerType {
        self.sizer_type
    }

    /// Space inserted between consecutive entries.
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Number of entries, spacers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sizer has no entries, spacers included.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&LayoutEntry> {
        self.entries.get(index)
    }

    /// Iterate over entries in layout order.
    pub fn entries(&self) -> impl Iterator<Item = &LayoutEntry> {
        self.entries.iter()
    }

    // =====================================================================
    // Building
    // =====================================================================

    /// Append an element.
    ///
    /// Conflicting alignment flags are accepted and resolved by precedence
    /// (see [`SizerFlags`]); use [`Sizer::try_add`] to reject them.
    pub fn add(
        &mut self,
        element: impl Into<SizerElement>,
        proportion: f32,
        border: Border,
        flags: SizerFlags,
    ) {
        if let Some(axis) = flags.conflicting_axis() {
            warn!(?axis, ?flags, "sizer entry has conflicting alignment flags");
        }
        self.entries.push(LayoutEntry::new(
            Some(element.into()),
            proportion,
            border,
            flags,
        ));
    }

    /// Append a leaf widget.
    pub fn add_widget(
        &mut self,
        widget: Rc<dyn Widget>,
        proportion: f32,
        border: Border,
        flags: SizerFlags,
    ) {
        self.add(SizerElement::Widget(widget), proportion, border, flags);
    }

    /// Append a nested sizer.
    pub fn add_sizer(
        &mut self,
        sizer: SizerHandle,
        proportion: f32,
        border: Border,
        flags: SizerFlags,
    ) {
        self.add(SizerElement::Sizer(sizer), proportion, border, flags);
    }

    /// Append an element after validating its parameters.
    ///
    /// Fails on more than one alignment flag per axis, and on a proportion
    /// or border inset that is negative or not finite. Nothing is appended
    /// on failure.
    pub fn try_add(
        &mut self,
        element: impl Into<SizerElement>,
        proportion: f32,
        border: Border,
        flags: SizerFlags,
    ) -> Result<(), LayoutError> {
        if let Some(axis) = flags.conflicting_axis() {
            return Err(LayoutError::ConflictingAlignment { axis });
        }
        if !proportion.is_finite() || proportion < 0.0 {
            return Err(LayoutError::InvalidProportion { value: proportion });
        }
        if let Some(&value) = border
            .sides()
            .iter()
            .find(|side| !side.is_finite() || **side < 0.0)
        {
            return Err(LayoutError::InvalidBorder { value });
        }

        self.add(element, proportion, border, flags);
        Ok(())
    }

    /// Append a fixed gap of `size` along the main axis.
    pub fn add_spacer(&mut self, size: f32) {
        let border = Border::along(self.main_axis(), size);
        self.entries.push(LayoutEntry::spacer(border));
    }

    /// Append a flexible gap that takes a `proportion` share of spare space.
    pub fn add_stretch_spacer(&mut self, proportion: f32) {
        self.entries.push(LayoutEntry::stretch(proportion));
    }

    // =====================================================================
    // Layout
    // =====================================================================

    /// Minimum size needed to give every entry at least its own minimum.
    pub fn compute_minimum_size(&self) -> Vec2 {
        self.measure(true)
    }

    /// Distribute `rect` among the entries and place their elements.
    ///
    /// A rectangle smaller than the minimum size is not an error: the
    /// proportional cells go negative and elements overlap.
    pub fn set_rect(&self, rect: Rect) {
        let main = self.main_axis().index();
        let cross = self.cross_axis();

        let mut total_proportion = self.total_proportion();
        let fixed = self.measure(false);
        let mut spare = rect.size()[main] - fixed[main];

        trace!(?rect, spare, entries = self.entries.len(), "sizer layout pass");
        if spare < 0.0 {
            debug!(spare, "sizer rect is smaller than its fixed content");
        }

        let mut pos = rect.top_left();
        for (entry, border) in self.bordered_entries() {
            let min_size = entry.minimum_size();
            let mut cell_size = min_size;

            if entry.is_proportional() {
                // Floor each share and carry the remainder to later entries
                let share = (spare * entry.proportion() / total_proportion).floor();
                spare -= share;
                total_proportion -= entry.proportion();
                cell_size[main] = share;
            }
            cell_size[cross.index()] = rect.size()[cross.index()] - border.total(cross);

            let origin = pos + border.top_left();
            entry.place_inside(Rect::from_origin_size(origin, cell_size), min_size);

            pos[main] += cell_size[main] + border.total(self.main_axis());
        }
    }

    /// Measure the sizer. Without proportional accounting, proportional
    /// entries contribute only their borders and gaps, which gives the
    /// fixed footprint that `set_rect` subtracts before splitting.
    fn measure(&self, include_proportional: bool) -> Vec2 {
        let main_axis = self.main_axis();
        let cross_axis = self.cross_axis();
        let main = main_axis.index();
        let cross = cross_axis.index();

        let mut main_size = 0.0_f32;
        let mut cross_size = 0.0_f32;
        let mut biggest_proportional = 0.0_f32;

        for (entry, border) in self.bordered_entries() {
            let size = entry.minimum_size();
            cross_size = cross_size.max(size[cross] + border.total(cross_axis));

            if entry.is_proportional() {
                biggest_proportional = biggest_proportional.max(size[main] / entry.proportion());
            } else {
                main_size += size[main];
            }
            main_size += border.total(main_axis);
        }

        if include_proportional {
            main_size += biggest_proportional * self.total_proportion();
        }

        let mut result = Vec2::ZERO;
        result[main] = main_size;
        result[cross] = cross_size;
        result
    }

    /// Entries paired with their borders, with the gap folded into the
    /// leading main-axis border of every entry after the first.
    fn bordered_entries(&self) -> impl Iterator<Item = (&LayoutEntry, Border)> {
        let main = self.main_axis();
        let gap = self.gap;
        self.entries.iter().enumerate().map(move |(i, entry)| {
            let mut border = entry.border();
            if i > 0 {
                *border.leading_mut(main) += gap;
            }
            (entry, border)
        })
    }

    fn total_proportion(&self) -> f32 {
        self.entries.iter().map(LayoutEntry::proportion).sum()
    }

    fn main_axis(&self) -> Axis {
        self.sizer_type.main_axis()
    }

    fn cross_axis(&self) -> Axis {
        self.sizer_type.cross_axis()
    }

    // =====================================================================
    // Tree operations
    // =====================================================================

    /// Register every leaf widget of this sizer tree with `parent`.
    ///
    /// Nested sizers are walked, never registered themselves.
    pub fn reparent<P: UiParent + ?Sized>(&self, parent: &mut P) {
        debug!(entries = self.entries.len(), "reparenting sizer");
        for element in self.entries.iter().filter_map(LayoutEntry::element) {
            match element {
                SizerElement::Widget(widget) => parent.add_child(Rc::clone(widget)),
                SizerElement::Sizer(sizer) => sizer.borrow().reparent(&mut *parent),
            }
        }
    }

    /// Destroy every widget, clear every nested sizer, then drop all entries.
    pub fn clear(&mut self) {
        debug!(entries = self.entries.len(), "clearing sizer");
        for element in self.entries.iter().filter_map(LayoutEntry::element) {
            match element {
                SizerElement::Widget(widget) => widget.destroy(),
                SizerElement::Sizer(sizer) => sizer.borrow_mut().clear(),
            }
        }
        self.entries.clear();
    }
}

impl UiElement for Sizer {
    fn compute_minimum_size(&self) -> Vec2 {
        Sizer::compute_minimum_size(self)
    }

    fn set_rect(&self, rect: Rect) {
        Sizer::set_rect(self, rect)
    }
}

impl Index<usize> for Sizer {
    type Output = LayoutEntry;

    fn index(&self, index: usize) -> &LayoutEntry {
        &self.entries[index]
    }
}

impl From<SizerConfig> for Sizer {
    fn from(config: SizerConfig) -> Self {
        Self::from_config(config)
    }
}
