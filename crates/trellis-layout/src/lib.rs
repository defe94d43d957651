//! Recursive sizer layout for Trellis UI trees.
//!
//! A [`Sizer`] arranges widgets, nested sizers and spacers along one axis,
//! splitting space between fixed-size and proportional entries.
//!
//! # Architecture
//!
//! 1. **Measure**: `compute_minimum_size` asks every entry for its minimum,
//!    recursing into nested sizers
//! 2. **Distribute**: `set_rect` hands each entry a cell and lets the entry
//!    align or stretch its element inside it
//! 3. **Tree operations**: `reparent` registers leaf widgets with a
//!    container, `clear` tears the whole subtree down
//!
//! # Example
//!
//! ```ignore
//! use trellis_layout::{Sizer, Border, SizerFlags, Rect, Vec2};
//!
//! let mut row = Sizer::horizontal(4.0);
//! row.add_widget(icon, 0.0, Border::ZERO, SizerFlags::CENTRE_VERTICAL);
//! row.add_widget(label, 1.0, Border::ZERO, SizerFlags::FILL);
//!
//! let size = row.compute_minimum_size();
//! row.set_rect(Rect::from_origin_size(Vec2::ZERO, size.max(window_size)));
//! ```

mod element;
mod entry;
mod sizer;

pub use element::{SizerElement, SizerHandle, UiElement, UiParent, Widget};
pub use entry::{LayoutEntry, PROPORTION_EPSILON};
pub use sizer::Sizer;

pub use glam::Vec2;
pub use trellis_core::{Axis, Border, LayoutError, Rect, SizerConfig, SizerFlags, SizerType};
