use serde::{Deserialize, Serialize};

use crate::scroll::Axis;

/// Orientation of the tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "DirectionRepr")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Direction {
    /// Axis the slider moves along and the scroll container scrolls on.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Horizontal => Axis::Left,
            Direction::Vertical => Axis::Top,
        }
    }
}

/// Accepted spellings: `"horizontal"`, `"vertical"`, or a bool where
/// `true` means horizontal.
#[derive(Deserialize)]
#[serde(untagged)]
enum DirectionRepr {
    Horizontal(bool),
    Name(String),
}

impl TryFrom<DirectionRepr> for Direction {
    type Error = String;

    fn try_from(repr: DirectionRepr) -> Result<Self, Self::Error> {
        match repr {
            DirectionRepr::Horizontal(true) => Ok(Direction::Horizontal),
            DirectionRepr::Horizontal(false) => Ok(Direction::Vertical),
            DirectionRepr::Name(name) => match name.as_str() {
                "horizontal" => Ok(Direction::Horizontal),
                "vertical" => Ok(Direction::Vertical),
                other => Err(format!(
                    "unknown direction {other:?}, expected \"horizontal\" or \"vertical\""
                )),
            },
        }
    }
}
