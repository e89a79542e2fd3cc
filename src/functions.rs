use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::RenderError;

pub fn window() -> Result<Window, RenderError> {
    web_sys::window().ok_or_else(|| RenderError::Surface("no global `window` exists".into()))
}

pub fn get_canvas(window: &Window, id: &str) -> Result<HtmlCanvasElement, RenderError> {
    let document = window
        .document()
        .ok_or_else(|| RenderError::Surface("should have a document on window".into()))?;
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| RenderError::Surface(format!("document has no #{} element", id)))?;
    canvas
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| RenderError::Surface(format!("#{} is not a canvas", id)))
}

pub fn size_canvas(canvas: &HtmlCanvasElement, width: u32, height: u32) {
    canvas.set_width(width);
    canvas.set_height(height);
}

pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, RenderError> {
    canvas
        .get_context("2d")
        .map_err(|_| RenderError::Surface("getContext(\"2d\") threw".into()))?
        .ok_or_else(|| RenderError::Surface("canvas has no 2d context".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| RenderError::Surface("context is not a CanvasRenderingContext2d".into()))
}
