//! Error types

use thiserror::Error;

use crate::scroll::Axis;

/// Errors raised by a scroll request before any position is written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScrollError {
    #[error(
        "scroller does not support an easing option of \"{name}\". Supported options are {}",
        .supported.join(",")
    )]
    UnsupportedEasing {
        name: String,
        supported: Vec<&'static str>,
    },
    #[error("element passed to scroll_to() must be either the window or a DOM element, you passed {target:?}")]
    InvalidTarget { target: String },
    #[error("cannot scroll {axis} to non-finite offset {value}")]
    NonFiniteOffset { axis: Axis, value: f64 },
}

/// Errors raised by the tab widget.
#[derive(Debug, Error)]
pub enum TabError {
    #[error("tab root {root:?} contains no .tab-item elements")]
    NoItems { root: String },
    #[error("auto_scroll is enabled but tab root {root:?} has no .tab__scroll container")]
    MissingScrollContainer { root: String },
    #[error("{id:?} is not an item of this tab widget")]
    UnknownItem { id: String },
    #[error("scroll error: {0}")]
    Scroll(#[from] ScrollError),
}

/// Errors raised while loading widget options.
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid tab options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read options file: {0}")]
    Io(#[from] std::io::Error),
}
