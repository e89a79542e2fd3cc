use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

/// Fill style handed straight to the surface, e.g. `"red"` or `"#88f"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Color(s.to_owned())
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Color(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Crosses the port as a `[position, color]` pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(Position, Color)", into = "(Position, Color)")]
pub struct Drawable {
    pub position: Position,
    pub color: Color,
}

impl Drawable {
    pub fn new(x: i32, y: i32, color: impl Into<Color>) -> Self {
        Drawable {
            position: Position::new(x, y),
            color: color.into(),
        }
    }
}

impl From<(Position, Color)> for Drawable {
    fn from((position, color): (Position, Color)) -> Self {
        Drawable { position, color }
    }
}

impl From<Drawable> for (Position, Color) {
    fn from(d: Drawable) -> Self {
        (d.position, d.color)
    }
}

pub type Batch = Vec<Drawable>;

pub fn decode_batch(json: &str) -> Result<Batch, RenderError> {
    Ok(serde_json::from_str(json)?)
}

pub fn encode_batch(batch: &[Drawable]) -> Result<String, RenderError> {
    Ok(serde_json::to_string(batch)?)
}
