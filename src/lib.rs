use wasm_bindgen::prelude::*;
mod bench;
mod buffer;
mod config;
mod consts;
mod drawable;
mod error;
mod functions;
mod helpers;
mod ports;
mod renderer;
mod surface;

pub use buffer::PixelBuffer;
pub use config::Config;
pub use drawable::{decode_batch, encode_batch, Batch, Color, Drawable, Position};
pub use error::{ConfigError, RenderError};
pub use ports::Ports;
pub use renderer::Renderer;
pub use surface::{CanvasSurface, Surface};

use consts::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() {
    helpers::init_logging();
}

/// Canvas-backed renderer handed to the host page. The application's drawing
/// port subscribes to `draw`; everything else on the boundary goes through
/// `send`, `drain` and `outbox`.
#[wasm_bindgen]
pub struct App {
    ports: Ports<CanvasSurface>,
}

#[wasm_bindgen]
impl App {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, config_json: &str) -> Result<App, JsValue> {
        let config = Config::from_json(config_json).map_err(RenderError::from)?;
        App::attach(canvas_id, config)
    }

    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(canvas_id: &str, config: &JsValue) -> Result<App, JsValue> {
        let json = stringify(config)?;
        App::new(canvas_id, &json)
    }

    pub fn draw(&mut self, batch_json: &str) -> Result<(), JsValue> {
        Ok(self.ports.receive_batch(batch_json)?)
    }

    #[wasm_bindgen(js_name = drawValue)]
    pub fn draw_value(&mut self, batch: &JsValue) -> Result<(), JsValue> {
        let json = stringify(batch)?;
        self.draw(&json)
    }

    pub fn clear(&mut self) {
        self.ports.renderer_mut().clear();
    }

    pub fn send(&mut self, message: String) {
        self.ports.send(message);
    }

    pub fn drain(&mut self) -> js_sys::Array {
        self.ports.drain().map(|m| JsValue::from_str(&m)).collect()
    }

    pub fn outbox(&mut self, message: &str) {
        self.ports.outbox(message);
    }

    pub fn width(&self) -> u32 {
        self.ports.renderer().surface().width()
    }

    pub fn height(&self) -> u32 {
        self.ports.renderer().surface().height()
    }
}

impl App {
    fn attach(canvas_id: &str, config: Config) -> Result<App, JsValue> {
        let surface = CanvasSurface::attach(canvas_id, &config)?;
        let renderer = Renderer::new(config, surface)?;
        let (width, height) = (renderer.surface().width(), renderer.surface().height());
        log::info!(
            "attached to #{}: {}x{} cells at {}px, {}x{} pixels",
            canvas_id,
            config.grid_width,
            config.grid_height,
            config.cellwidth,
            width,
            height
        );
        Ok(App {
            ports: Ports::new(renderer),
        })
    }
}

/// Attaches to `#canvas` with the default host flags.
#[wasm_bindgen]
pub fn run() -> Result<App, JsValue> {
    App::attach(CANVAS_ID, Config::default())
}

#[wasm_bindgen(js_name = benchPaint)]
pub fn bench_paint(cells: usize) -> String {
    bench::bench_paint(Config::default(), cells)
}

fn stringify(value: &JsValue) -> Result<String, JsValue> {
    Ok(js_sys::JSON::stringify(value)?.into())
}
