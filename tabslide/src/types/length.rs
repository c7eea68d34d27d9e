use std::fmt;

use serde::{Deserialize, Serialize};

/// A CSS length. Numbers are pixels, strings are used verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Px(f64),
    Raw(String),
}

impl Length {
    pub fn px(value: f64) -> Self {
        Self::Px(value)
    }

    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    pub fn to_css(&self) -> String {
        match self {
            Self::Px(value) => format!("{value}px"),
            Self::Raw(value) => value.clone(),
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Self::Px(value)
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

/// Render a length as a CSS value, adding `px` to bare numbers.
pub fn add_unit(value: impl Into<Length>) -> String {
    value.into().to_css()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_gain_px() {
        assert_eq!(add_unit(2.0), "2px");
        assert_eq!(add_unit(10.5), "10.5px");
    }

    #[test]
    fn strings_pass_through() {
        assert_eq!(add_unit("50%"), "50%");
        assert_eq!(add_unit(String::from("3em")), "3em");
    }
}
