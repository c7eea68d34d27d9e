mod color;
mod enums;
mod length;

pub use color::{Color, ColorParseError, Rgb};
pub use enums::Direction;
pub use length::{add_unit, Length};
