use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{
    config::Config,
    drawable::Color,
    error::RenderError,
    functions::{get_2d_context, get_canvas, size_canvas, window},
};

/// A pixel-addressable target the renderer fills rectangles on.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_fill_style(&mut self, color: &Color);
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32);
    fn clear(&mut self);

    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Finds `#id`, resizes it to the configured grid and takes its 2d context.
    pub fn attach(id: &str, config: &Config) -> Result<Self, RenderError> {
        let (width, height) = config.surface_size()?;
        let canvas = get_canvas(&window()?, id)?;
        size_canvas(&canvas, width, height);
        let ctx = get_2d_context(&canvas)?;
        Ok(CanvasSurface { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> u32 {
        self.canvas.width()
    }

    fn height(&self) -> u32 {
        self.canvas.height()
    }

    #[allow(deprecated)]
    fn set_fill_style(&mut self, color: &Color) {
        self.ctx.set_fill_style(&JsValue::from_str(color.as_str()));
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        self.ctx.fill_rect(x.into(), y.into(), w.into(), h.into());
    }

    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width().into(), self.height().into());
    }
}
