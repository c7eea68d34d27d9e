pub mod dom;
pub mod easing;
pub mod error;
pub mod event;
pub mod memory;
pub mod options;
pub mod scroll;
pub mod tab;
pub mod types;

pub use dom::{Dom, Geometry, NodeKind};
pub use easing::Easing;
pub use error::{OptionsError, ScrollError, TabError};
pub use event::Event;
pub use memory::MemoryDom;
pub use options::TabOptions;
pub use scroll::{
    scroll_provider, AnimationRun, Axis, NativeScroll, ScrollAnimator, ScrollBehavior,
    ScrollOptions, ScrollProvider, ScrollTarget,
};
pub use tab::{SliderStyle, Tab};
pub use types::*;

/// Crate version, reported by [`Tab::version`].
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
