use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A CSS color used for the slider and the active tab text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    /// Named colors, `var(...)`, `currentColor` and anything else the host
    /// understands. Passed through verbatim.
    Keyword(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color {input:?}: {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: &'static str,
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Resolve to sRGB. Keywords cannot be resolved without the host.
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Keyword(_) => None,
        }
    }

    /// CSS value for a style write. OKLCH is converted to `rgb()` so older
    /// hosts understand it.
    pub fn to_css(&self) -> String {
        match self {
            Self::Keyword(name) => name.clone(),
            other => match other.to_rgb() {
                Some(Rgb { r, g, b }) => format!("rgb({r}, {g}, {b})"),
                None => String::new(),
            },
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = |reason| ColorParseError {
            input: s.to_string(),
            reason,
        };

        if input.is_empty() {
            return Err(err("empty color"));
        }

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| err("expected #rgb or #rrggbb"));
        }

        if let Some(args) = function_args(input, "rgb") {
            let [r, g, b] = parse_components::<u8>(args).ok_or_else(|| err("expected rgb(r, g, b)"))?;
            return Ok(Color::rgb(r, g, b));
        }

        if let Some(args) = function_args(input, "oklch") {
            let [l, c, h] =
                parse_components::<f32>(args).ok_or_else(|| err("expected oklch(l, c, h)"))?;
            return Ok(Color::oklch(l, c, h));
        }

        Ok(Color::Keyword(input.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Serialized form. Unlike [`Color::to_css`], OKLCH stays in OKLCH.
impl From<Color> for String {
    fn from(color: Color) -> Self {
        match color {
            Color::Oklch { l, c, h } => format!("oklch({l} {c} {h})"),
            other => other.to_css(),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|ch| ch.to_digit(16).map(|d| (d * 17) as u8));
            let r = digits.next()??;
            let g = digits.next()??;
            let b = digits.next()??;
            Some(Color::rgb(r, g, b))
        }
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// `name(args)` -> `args`.
fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Three comma or space separated components.
fn parse_components<T: FromStr>(args: &str) -> Option<[T; 3]> {
    let mut parts = args
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<T>().ok());
    let values = [parts.next()??, parts.next()??, parts.next()??];
    if parts.next().is_some() {
        return None;
    }
    Some(values)
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
