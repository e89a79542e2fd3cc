use crate::{consts::DEFAULT_FILL, drawable::Color, surface::Surface};

/// In-memory raster. Each pixel holds an index into a palette of the
/// colours that have been filled so far, `0` being blank.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    palette: Vec<Color>,
    fill: u32,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let mut buffer = PixelBuffer {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            palette: Vec::new(),
            fill: 0,
        };
        buffer.fill = buffer.intern(&Color::from(DEFAULT_FILL));
        buffer
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<&Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        match self.pixels[self.idx(x, y)] {
            0 => None,
            i => self.palette.get(i as usize - 1),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| p == 0)
    }

    /// True when every pixel of the given rectangle holds `color`.
    pub fn region_is(&self, x: u32, y: u32, w: u32, h: u32, color: &Color) -> bool {
        (y..y + h).all(|py| (x..x + w).all(|px| self.pixel(px, py) == Some(color)))
    }

    fn idx(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn intern(&mut self, color: &Color) -> u32 {
        match self.palette.iter().position(|c| c == color) {
            Some(i) => i as u32 + 1,
            None => {
                self.palette.push(color.clone());
                self.palette.len() as u32
            }
        }
    }
}

impl PartialEq for PixelBuffer {
    // Compares what is on screen, independent of palette order.
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && (0..self.height)
                .all(|y| (0..self.width).all(|x| self.pixel(x, y) == other.pixel(x, y)))
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_fill_style(&mut self, color: &Color) {
        self.fill = self.intern(color);
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y..y_end {
            let row = self.idx(0, py);
            for px in x..x_end {
                self.pixels[row + px as usize] = self.fill;
            }
        }
    }

    fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = 0);
    }
}
