use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: i32 },

    #[error("`{field}` must not be negative, got {value}")]
    Negative { field: &'static str, value: i32 },

    #[error("surface of {width}x{height} cells at {cellwidth}px per cell does not fit in u32 pixels")]
    SurfaceTooLarge {
        width: i32,
        height: i32,
        cellwidth: i32,
    },

    #[error("malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("drawable at ({x}, {y}) lies outside the {grid_width}x{grid_height} grid")]
    InvalidPosition {
        x: i32,
        y: i32,
        grid_width: i32,
        grid_height: i32,
    },

    #[error("surface is {actual:?} pixels, expected {expected:?}")]
    SurfaceSize {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("malformed batch: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("surface unavailable: {0}")]
    Surface(String),
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
