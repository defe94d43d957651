//! Capabilities the layout engine requires from the UI tree.
//!
//! Widgets are shared with whatever container displays them, so every call
//! takes `&self`; implementors keep their placed rectangle behind interior
//! mutability.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use glam::Vec2;
use trellis_core::Rect;

use crate::sizer::Sizer;

/// Something that can be measured and placed by a sizer.
pub trait UiElement {
    /// Smallest size the element can be laid out at.
    fn compute_minimum_size(&self) -> Vec2;

    /// Assign the element its final rectangle.
    fn set_rect(&self, rect: Rect);
}

/// A leaf UI element.
pub trait Widget: UiElement {
    /// Ask the widget to tear itself down.
    ///
    /// This is a signal to the owning UI tree, not a memory release; other
    /// holders of the widget keep it alive until they drop it.
    fn destroy(&self);
}

/// A container that leaf widgets can be registered with.
pub trait UiParent {
    fn add_child(&mut self, widget: Rc<dyn Widget>);
}

impl UiParent for Vec<Rc<dyn Widget>> {
    fn add_child(&mut self, widget: Rc<dyn Widget>) {
        self.push(widget);
    }
}

/// Shared handle to a nested sizer.
pub type SizerHandle = Rc<RefCell<Sizer>>;

/// The element held by a sizer entry.
#[derive(Clone)]
pub enum SizerElement {
    Widget(Rc<dyn Widget>),
    Sizer(SizerHandle),
}

impl SizerElement {
    /// The wrapped widget, if this is a leaf.
    pub fn as_widget(&self) -> Option<&Rc<dyn Widget>> {
        match self {
            SizerElement::Widget(widget) => Some(widget),
            SizerElement::Sizer(_) => None,
        }
    }

    /// The wrapped sizer, if this is a nested sizer.
    pub fn as_sizer(&self) -> Option<&SizerHandle> {
        match self {
            SizerElement::Widget(_) => None,
            SizerElement::Sizer(sizer) => Some(sizer),
        }
    }
}

impl UiElement for SizerElement {
    fn compute_minimum_size(&self) -> Vec2 {
        match self {
            SizerElement::Widget(widget) => widget.compute_minimum_size(),
            SizerElement::Sizer(sizer) => sizer.borrow().compute_minimum_size(),
        }
    }

    fn set_rect(&self, rect: Rect) {
        match self {
            SizerElement::Widget(widget) => widget.set_rect(rect),
            SizerElement::Sizer(sizer) => sizer.borrow().set_rect(rect),
        }
    }
}

impl From<Rc<dyn Widget>> for SizerElement {
    fn from(widget: Rc<dyn Widget>) -> Self {
        SizerElement::Widget(widget)
    }
}

impl From<SizerHandle> for SizerElement {
    fn from(sizer: SizerHandle) -> Self {
        SizerElement::Sizer(sizer)
    }
}

impl From<Sizer> for SizerElement {
    fn from(sizer: Sizer) -> Self {
        SizerElement::Sizer(sizer.into_handle())
    }
}

impl fmt::Debug for SizerElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizerElement::Widget(widget) => f
                .debug_tuple("Widget")
                .field(&Rc::as_ptr(widget).cast::<()>())
                .finish(),
            SizerElement::Sizer(sizer) => match sizer.try_borrow() {
                Ok(sizer) => f.debug_tuple("Sizer").field(&*sizer).finish(),
                Err(_) => f.write_str("Sizer(<borrowed>)"),
            },
        }
    }
}
