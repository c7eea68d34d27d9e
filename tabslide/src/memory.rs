//! In-memory [`Dom`] for tests and headless demos.
//!
//! Layout is not computed: geometry is whatever the caller assigns with
//! [`MemoryDom::set_geometry`]. Scroll offsets are stored as written, without
//! clamping to the scrollable range. Time only moves when the caller advances
//! the clock.

use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use log::warn;

use crate::dom::{Dom, Geometry, NodeKind};
use crate::error::ScrollError;
use crate::scroll::{Axis, ScrollOptions};

/// Upper bound for [`MemoryDom::run_frames`].
pub const MAX_FRAMES: usize = 10_000;

pub const WINDOW: &str = "window";
pub const HTML: &str = "html";
pub const BODY: &str = "body";

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub tag: String,
    pub classes: Vec<String>,
    pub parent: Option<String>,
    pub children: Vec<String>,
    pub style: BTreeMap<String, String>,
    pub geometry: Geometry,
    pub scroll_top: f64,
    pub scroll_left: f64,
}

impl Node {
    fn new(kind: NodeKind, tag: &str) -> Self {
        Self {
            kind,
            tag: tag.to_string(),
            classes: Vec::new(),
            parent: None,
            children: Vec::new(),
            style: BTreeMap::new(),
            geometry: Geometry::default(),
            scroll_top: 0.0,
            scroll_left: 0.0,
        }
    }
}

/// One scroll offset write, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollWrite {
    pub id: String,
    pub axis: Axis,
    pub value: f64,
}

#[derive(Debug)]
pub struct MemoryDom {
    nodes: HashMap<String, Node>,
    body: Option<String>,
    document_element: Option<String>,
    now: Instant,
    frame_requested: bool,
    frame_requests: usize,
    writes: Vec<ScrollWrite>,
    native_smooth_scroll: bool,
    native_calls: Vec<(String, ScrollOptions)>,
    next_id: u64,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// A document with `window`, `html` and `body` nodes.
    pub fn new() -> Self {
        let mut dom = Self::empty();
        dom.nodes
            .insert(WINDOW.to_string(), Node::new(NodeKind::Window, "#window"));
        dom.nodes
            .insert(HTML.to_string(), Node::new(NodeKind::DocumentElement, "html"));
        dom.nodes
            .insert(BODY.to_string(), Node::new(NodeKind::Body, "body"));
        dom.link(HTML, BODY);
        dom.body = Some(BODY.to_string());
        dom.document_element = Some(HTML.to_string());
        dom
    }

    /// A document with no nodes at all.
    pub fn empty() -> Self {
        Self {
            nodes: HashMap::new(),
            body: None,
            document_element: None,
            now: Instant::now(),
            frame_requested: false,
            frame_requests: 0,
            writes: Vec::new(),
            native_smooth_scroll: false,
            native_calls: Vec::new(),
            next_id: 0,
        }
    }

    /// Pretend the host scrolls smoothly on its own.
    pub fn with_native_smooth_scroll(mut self, enabled: bool) -> Self {
        self.native_smooth_scroll = enabled;
        self
    }

    /// Insert an element with a fixed id under `parent`.
    pub fn add_element(&mut self, parent: &str, id: &str, classes: &[&str]) -> String {
        let mut node = Node::new(NodeKind::Element, "div");
        node.classes = classes.iter().map(|c| c.to_string()).collect();
        self.nodes.insert(id.to_string(), node);
        self.link(parent, id);
        id.to_string()
    }

    /// Insert a text node under `parent`.
    pub fn add_text(&mut self, parent: &str, id: &str) -> String {
        self.nodes
            .insert(id.to_string(), Node::new(NodeKind::Text, "#text"));
        self.link(parent, id);
        id.to_string()
    }

    pub fn set_geometry(&mut self, id: &str, geometry: Geometry) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.geometry = geometry;
        }
    }

    /// Set an offset without recording it as a write.
    pub fn preset_scroll(&mut self, id: &str, axis: Axis, value: f64) {
        if let Some(node) = self.nodes.get_mut(id) {
            match axis {
                Axis::Top => node.scroll_top = value,
                Axis::Left => node.scroll_left = value,
            }
        }
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.nodes
            .get(id)
            .and_then(|node| node.style.get(property))
            .map(String::as_str)
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.nodes
            .get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn current_time(&self) -> Instant {
        self.now
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    /// Every scroll write so far.
    pub fn writes(&self) -> &[ScrollWrite] {
        &self.writes
    }

    /// Writes to one element along one axis.
    pub fn writes_to(&self, id: &str, axis: Axis) -> Vec<f64> {
        self.writes
            .iter()
            .filter(|w| w.id == id && w.axis == axis)
            .map(|w| w.value)
            .collect()
    }

    pub fn clear_writes(&mut self) {
        self.writes.clear();
    }

    /// Total number of frame requests received.
    pub fn frame_requests(&self) -> usize {
        self.frame_requests
    }

    /// True if a frame was requested since the last call. Clears the flag.
    pub fn take_frame_request(&mut self) -> bool {
        std::mem::take(&mut self.frame_requested)
    }

    /// Calls to [`Dom::native_scroll_to`].
    pub fn native_calls(&self) -> &[(String, ScrollOptions)] {
        &self.native_calls
    }

    /// Present frames `interval` apart for as long as they are requested,
    /// calling `step` on each. Returns the number of frames presented.
    pub fn run_frames(&mut self, interval: Duration, mut step: impl FnMut(&mut Self)) -> usize {
        let mut frames = 0;
        while self.take_frame_request() {
            if frames == MAX_FRAMES {
                warn!("frame loop still requesting frames after {MAX_FRAMES} frames, stopping");
                break;
            }
            self.advance(interval);
            step(self);
            frames += 1;
        }
        frames
    }

    fn link(&mut self, parent: &str, child: &str) {
        if let Some(old) = self.nodes.get(child).and_then(|n| n.parent.clone()) {
            if let Some(old) = self.nodes.get_mut(&old) {
                old.children.retain(|c| c != child);
            }
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child.to_string());
        } else {
            warn!("append to unknown node {parent:?}");
            return;
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent.to_string());
        }
    }

    fn collect_matching(&self, id: &str, classes: &[&str], out: &mut Vec<String>) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        for child in &node.children {
            if let Some(child_node) = self.nodes.get(child) {
                let is_match = child_node.kind == NodeKind::Element
                    && classes
                        .iter()
                        .all(|class| child_node.classes.iter().any(|c| c == class));
                if is_match {
                    out.push(child.clone());
                }
            }
            self.collect_matching(child, classes, out);
        }
    }
}

impl Dom for MemoryDom {
    fn node_kind(&self, id: &str) -> Option<NodeKind> {
        self.nodes.get(id).map(|node| node.kind)
    }

    fn body(&self) -> Option<String> {
        self.body.clone()
    }

    fn document_element(&self) -> Option<String> {
        self.document_element.clone()
    }

    fn query_selector_all(&self, root: &str, classes: &[&str]) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_matching(root, classes, &mut out);
        out
    }

    fn create_element(&mut self, tag: &str) -> String {
        let id = loop {
            let id = format!("{tag}-{}", self.next_id);
            self.next_id += 1;
            if !self.nodes.contains_key(&id) {
                break id;
            }
        };
        self.nodes
            .insert(id.clone(), Node::new(NodeKind::Element, tag));
        id
    }

    fn append_child(&mut self, parent: &str, child: &str) {
        self.link(parent, child);
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.nodes
            .get(id)
            .is_some_and(|node| node.classes.iter().any(|c| c == class))
    }

    fn add_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.classes.retain(|c| c != class);
        }
    }

    fn geometry(&self, id: &str) -> Geometry {
        self.nodes
            .get(id)
            .map(|node| node.geometry)
            .unwrap_or_default()
    }

    fn scroll_offset(&self, id: &str, axis: Axis) -> f64 {
        self.nodes
            .get(id)
            .map(|node| match axis {
                Axis::Top => node.scroll_top,
                Axis::Left => node.scroll_left,
            })
            .unwrap_or(0.0)
    }

    fn set_scroll_offset(&mut self, id: &str, axis: Axis, value: f64) {
        self.preset_scroll(id, axis, value);
        self.writes.push(ScrollWrite {
            id: id.to_string(),
            axis,
            value,
        });
    }

    fn set_style(&mut self, id: &str, property: &str, value: Option<&str>) {
        if let Some(node) = self.nodes.get_mut(id) {
            match value {
                Some(value) => {
                    node.style.insert(property.to_string(), value.to_string());
                }
                None => {
                    node.style.remove(property);
                }
            }
        }
    }

    fn clear_style(&mut self, id: &str) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.style.clear();
        }
    }

    fn now(&self) -> Instant {
        self.now
    }

    fn request_frame(&mut self) {
        self.frame_requested = true;
        self.frame_requests += 1;
    }

    fn supports_smooth_scroll(&self) -> bool {
        self.native_smooth_scroll
    }

    fn native_scroll_to(&mut self, id: &str, options: &ScrollOptions) -> Result<(), ScrollError> {
        self.native_calls.push((id.to_string(), *options));
        for (axis, value) in options.targets() {
            self.set_scroll_offset(id, axis, value);
        }
        Ok(())
    }
}
