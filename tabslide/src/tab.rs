//! Tab bar with a sliding active indicator.
//!
//! Expected markup, all classes on descendants of the widget root:
//!
//! - `.tab-item` for every tab, one of them optionally `.active`
//! - `.tab__slider` for the indicator (created when missing)
//! - `.tab__scroll` for the scrolling container when `auto_scroll` is on
//!
//! Item offsets are read from the host as-is, so the scroll container (or
//! the root, without one) should be the items' offset parent.

use log::{debug, info};

use crate::dom::{Dom, Geometry};
use crate::error::TabError;
use crate::event::Event;
use crate::options::TabOptions;
use crate::scroll::{scroll_provider, Axis, ScrollOptions, ScrollProvider, ScrollTarget};
use crate::types::{add_unit, Direction};
use crate::VERSION;

pub const ITEM_CLASS: &str = "tab-item";
pub const ACTIVE_CLASS: &str = "active";
pub const SLIDER_CLASS: &str = "tab__slider";
pub const SCROLL_CLASS: &str = "tab__scroll";

/// Inline style of the slider element. `None` leaves a property unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SliderStyle {
    pub width: Option<String>,
    pub height: Option<String>,
    pub top: Option<String>,
    pub left: Option<String>,
    pub background_color: String,
}

impl SliderStyle {
    /// Size and place the slider for the active item.
    ///
    /// Horizontal bars span the item's width at the configured thickness and
    /// follow its left offset. Vertical bars are the mirror image.
    pub fn compute(options: &TabOptions, active: &Geometry) -> Self {
        let background_color = options.background_color.to_css();
        match options.direction {
            Direction::Horizontal => Self {
                width: Some(add_unit(active.scroll_width)),
                height: Some(options.height.to_css()),
                top: None,
                left: Some(add_unit(active.offset_left)),
                background_color,
            },
            Direction::Vertical => Self {
                width: Some(options.width.to_css()),
                height: Some(add_unit(active.scroll_height)),
                top: Some(add_unit(active.offset_top)),
                left: None,
                background_color,
            },
        }
    }

    /// CSS property names paired with their values.
    pub fn properties(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("width", self.width.as_deref()),
            ("height", self.height.as_deref()),
            ("top", self.top.as_deref()),
            ("left", self.left.as_deref()),
            ("background-color", Some(self.background_color.as_str())),
        ]
    }
}

/// Offset that brings an item fully into view, or `None` if it already is.
///
/// The item is centred in the container where the scroll range allows.
pub fn scroll_into_view_offset(
    item: &Geometry,
    container: &Geometry,
    current: f64,
    axis: Axis,
) -> Option<f64> {
    let start = item.offset(axis);
    let size = item.offset_size(axis);
    let view = container.client_size(axis);

    if start >= current && start + size <= current + view {
        return None;
    }

    let max = (container.scroll_size(axis) - view).max(0.0);
    let target = (start - (view - size) / 2.0).clamp(0.0, max);
    (target != current).then_some(target)
}

/// A tab bar bound to a root element in the host document.
#[derive(Debug)]
pub struct Tab {
    root: String,
    items: Vec<String>,
    active: String,
    slider: String,
    slider_style: SliderStyle,
    options: TabOptions,
    scroller: Box<dyn ScrollProvider>,
}

impl Tab {
    /// Bind to `root`, using native smooth scrolling when the host has it.
    pub fn new(dom: &mut dyn Dom, root: &str, options: TabOptions) -> Result<Self, TabError> {
        let scroller = scroll_provider(dom);
        Self::with_scroller(dom, root, options, scroller)
    }

    /// Bind to `root` with an explicit scroll provider.
    pub fn with_scroller(
        dom: &mut dyn Dom,
        root: &str,
        options: TabOptions,
        scroller: Box<dyn ScrollProvider>,
    ) -> Result<Self, TabError> {
        let items = dom.query_selector_all(root, &[ITEM_CLASS]);
        let Some(first) = items.first().cloned() else {
            return Err(TabError::NoItems {
                root: root.to_string(),
            });
        };

        let active = match dom.query_selector(root, &[ITEM_CLASS, ACTIVE_CLASS]) {
            Some(active) => active,
            None => {
                dom.add_class(&first, ACTIVE_CLASS);
                first
            }
        };

        let slider = match dom.query_selector(root, &[SLIDER_CLASS]) {
            Some(slider) => slider,
            None => {
                let slider = dom.create_element("div");
                dom.add_class(&slider, SLIDER_CLASS);
                dom.append_child(root, &slider);
                slider
            }
        };

        let mut tab = Self {
            root: root.to_string(),
            items,
            active,
            slider,
            slider_style: SliderStyle::default(),
            options,
            scroller,
        };
        tab.init(dom);

        info!(
            "tab widget {:?} ready with {} items (tabslide {VERSION})",
            tab.root,
            tab.items.len()
        );
        Ok(tab)
    }

    fn init(&mut self, dom: &mut dyn Dom) {
        if !self.options.hide_slider {
            self.apply_slider_style(dom);
            self.apply_active_item_style(dom);
        }

        if self.options.auto_scroll {
            if let Some(container) = self.scroll_container(dom) {
                self.hide_scrollbar(dom, &container);
            }
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn active_item(&self) -> &str {
        &self.active
    }

    /// Id of the slider element.
    pub fn slider(&self) -> &str {
        &self.slider
    }

    /// Slider style as last applied.
    pub fn slider_style(&self) -> &SliderStyle {
        &self.slider_style
    }

    pub fn options(&self) -> &TabOptions {
        &self.options
    }

    pub fn version(&self) -> &'static str {
        VERSION
    }

    pub fn is_animating(&self) -> bool {
        self.scroller.is_animating()
    }

    /// Handle a host event. Returns true if the widget changed state or has
    /// animation work pending.
    pub fn handle_event(&mut self, dom: &mut dyn Dom, event: &Event) -> Result<bool, TabError> {
        match event {
            Event::Click { target } => self.select(dom, target),
            Event::Frame => Ok(self.tick(dom)),
        }
    }

    /// Advance scroll animation by one frame.
    pub fn tick(&mut self, dom: &mut dyn Dom) -> bool {
        self.scroller.tick(dom)
    }

    /// Make `item` the active tab. Returns false if it already was.
    ///
    /// Nothing in the document changes when this fails.
    pub fn select(&mut self, dom: &mut dyn Dom, item: &str) -> Result<bool, TabError> {
        if !self.items.iter().any(|i| i == item) {
            return Err(TabError::UnknownItem {
                id: item.to_string(),
            });
        }
        if dom.has_class(item, ACTIVE_CLASS) {
            return Ok(false);
        }

        // Scroll before touching classes: a rejected request keeps the old tab.
        if self.options.auto_scroll {
            let container =
                self.scroll_container(dom)
                    .ok_or_else(|| TabError::MissingScrollContainer {
                        root: self.root.clone(),
                    })?;
            ScrollTarget::resolve(dom, &container)?;
            if let Some(request) = self.scroll_request(dom, item, &container) {
                self.scroller.scroll_to(dom, &container, &request)?;
            }
        }

        debug!("tab {:?}: {:?} -> {:?}", self.root, self.active, item);
        dom.remove_class(&self.active, ACTIVE_CLASS);
        dom.clear_style(&self.active);
        dom.add_class(item, ACTIVE_CLASS);
        self.active = item.to_string();

        if !self.options.hide_slider {
            self.apply_slider_style(dom);
            self.apply_active_item_style(dom);
        }
        Ok(true)
    }

    fn scroll_container(&self, dom: &dyn Dom) -> Option<String> {
        if dom.has_class(&self.root, SCROLL_CLASS) {
            return Some(self.root.clone());
        }
        dom.query_selector(&self.root, &[SCROLL_CLASS])
    }

    /// Request that brings `item` into view in `container`, if it is not.
    fn scroll_request(&self, dom: &dyn Dom, item: &str, container: &str) -> Option<ScrollOptions> {
        let axis = self.options.direction.axis();
        let item = dom.geometry(item);
        let view = dom.geometry(container);
        let current = dom.scroll_offset(container, axis);

        scroll_into_view_offset(&item, &view, current, axis).map(|offset| {
            ScrollOptions::new()
                .axis(axis, offset)
                .behavior(self.options.scroll_behavior)
        })
    }

    /// Pull the container's scrollbar out of sight with a negative margin.
    fn hide_scrollbar(&self, dom: &mut dyn Dom, container: &str) {
        let geometry = dom.geometry(container);
        let (property, thickness) = match self.options.direction {
            Direction::Horizontal => (
                "margin-bottom",
                geometry.offset_height - geometry.client_height,
            ),
            Direction::Vertical => ("margin-right", geometry.offset_width - geometry.client_width),
        };
        if thickness > 0.0 {
            dom.set_style(container, property, Some(add_unit(-thickness).as_str()));
        }
    }

    fn apply_slider_style(&mut self, dom: &mut dyn Dom) {
        let geometry = dom.geometry(&self.active);
        self.slider_style = SliderStyle::compute(&self.options, &geometry);
        for (property, value) in self.slider_style.properties() {
            dom.set_style(&self.slider, property, value);
        }
    }

    fn apply_active_item_style(&self, dom: &mut dyn Dom) {
        let color = self.options.background_color.to_css();
        dom.set_style(&self.active, "color", Some(color.as_str()));
    }
}
