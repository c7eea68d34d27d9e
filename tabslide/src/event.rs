/// Events the host delivers to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Click on an element the widget listens to. `target` is the element
    /// the listener is attached to, not the innermost node hit.
    Click { target: String },
    /// The host presented a frame requested through `Dom::request_frame`.
    Frame,
}

impl Event {
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }
}
