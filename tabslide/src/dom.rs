//! Host document abstraction.
//!
//! The widget never owns the document. Every lookup, class toggle, geometry
//! read, style write and frame request goes through [`Dom`], which a host
//! implements on top of its real document (or [`crate::memory::MemoryDom`]
//! for tests).

use std::time::Instant;

use crate::error::ScrollError;
use crate::scroll::{Axis, ScrollOptions};

/// What kind of node an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The browsing context itself.
    Window,
    /// The `<html>` element.
    DocumentElement,
    /// The `<body>` element.
    Body,
    /// Any other element.
    Element,
    /// Text, comment and other non-element nodes.
    Text,
}

impl NodeKind {
    /// True for the nodes that scroll the whole page.
    pub fn is_page(self) -> bool {
        matches!(
            self,
            NodeKind::Window | NodeKind::DocumentElement | NodeKind::Body
        )
    }
}

/// Layout geometry of an element, as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometry {
    pub offset_top: f64,
    pub offset_left: f64,
    pub offset_width: f64,
    pub offset_height: f64,
    pub client_width: f64,
    pub client_height: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
}

impl Geometry {
    /// Offset position along an axis.
    pub fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Top => self.offset_top,
            Axis::Left => self.offset_left,
        }
    }

    /// Outer size along an axis.
    pub fn offset_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Top => self.offset_height,
            Axis::Left => self.offset_width,
        }
    }

    /// Visible size along an axis.
    pub fn client_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Top => self.client_height,
            Axis::Left => self.client_width,
        }
    }

    /// Content size along an axis.
    pub fn scroll_size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Top => self.scroll_height,
            Axis::Left => self.scroll_width,
        }
    }
}

/// Operations the host document provides.
///
/// Selectors are lists of class names that must all be present on a
/// descendant of `root`, in document order.
pub trait Dom {
    /// Kind of the node, or `None` if the id is unknown.
    fn node_kind(&self, id: &str) -> Option<NodeKind>;

    /// Id of the `<body>` element, if the document has one.
    fn body(&self) -> Option<String>;

    /// Id of the `<html>` element, if the document has one.
    fn document_element(&self) -> Option<String>;

    fn query_selector(&self, root: &str, classes: &[&str]) -> Option<String> {
        self.query_selector_all(root, classes).into_iter().next()
    }

    fn query_selector_all(&self, root: &str, classes: &[&str]) -> Vec<String>;

    /// Create a detached element and return its id.
    fn create_element(&mut self, tag: &str) -> String;

    fn append_child(&mut self, parent: &str, child: &str);

    fn has_class(&self, id: &str, class: &str) -> bool;
    fn add_class(&mut self, id: &str, class: &str);
    fn remove_class(&mut self, id: &str, class: &str);

    fn geometry(&self, id: &str) -> Geometry;

    fn scroll_offset(&self, id: &str, axis: Axis) -> f64;
    fn set_scroll_offset(&mut self, id: &str, axis: Axis, value: f64);

    /// Set an inline style property. `None` removes it.
    fn set_style(&mut self, id: &str, property: &str, value: Option<&str>);

    /// Remove the whole inline style of an element.
    fn clear_style(&mut self, id: &str);

    /// Wall clock used to time animation frames.
    fn now(&self) -> Instant {
        Instant::now()
    }

    /// Ask the host to present another frame and call back into the animator.
    fn request_frame(&mut self);

    /// True when the host scrolls smoothly on its own.
    fn supports_smooth_scroll(&self) -> bool {
        false
    }

    /// Native scroll-to call, used by [`crate::scroll::NativeScroll`].
    /// The default jumps straight to the requested offsets.
    fn native_scroll_to(&mut self, id: &str, options: &ScrollOptions) -> Result<(), ScrollError> {
        for (axis, value) in options.targets() {
            self.set_scroll_offset(id, axis, value);
        }
        Ok(())
    }
}
