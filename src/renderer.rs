use crate::{
    buffer::PixelBuffer,
    config::Config,
    drawable::{decode_batch, Drawable},
    error::RenderError,
    surface::Surface,
};

/// Paints batches of drawables onto a surface, one `cellwidth` square per cell.
///
/// Nothing is cleared between batches: each batch is laid over whatever the
/// previous ones left behind, and later drawables win where positions collide.
#[derive(Clone, Debug)]
pub struct Renderer<S: Surface> {
    config: Config,
    surface: S,
    batches_painted: u64,
    cells_painted: u64,
}

impl<S: Surface> Renderer<S> {
    pub fn new(config: Config, surface: S) -> Result<Self, RenderError> {
        let expected = config.surface_size()?;
        let actual = surface.size();
        if expected != actual {
            return Err(RenderError::SurfaceSize { expected, actual });
        }
        Ok(Renderer {
            config,
            surface,
            batches_painted: 0,
            cells_painted: 0,
        })
    }

    /// Paints every drawable in order. The batch is checked against the grid
    /// first; a rejected batch leaves the surface untouched.
    pub fn paint(&mut self, batch: &[Drawable]) -> Result<(), RenderError> {
        if let Some(bad) = batch
            .iter()
            .find(|d| !self.config.contains(d.position.x, d.position.y))
        {
            log::warn!(
                "rejecting batch of {}: ({}, {}) is off the grid",
                batch.len(),
                bad.position.x,
                bad.position.y
            );
            return Err(RenderError::InvalidPosition {
                x: bad.position.x,
                y: bad.position.y,
                grid_width: self.config.grid_width,
                grid_height: self.config.grid_height,
            });
        }

        let cell = self.config.cellwidth as u32;
        for drawable in batch {
            self.surface.set_fill_style(&drawable.color);
            self.surface.fill_rect(
                drawable.position.x as u32 * cell,
                drawable.position.y as u32 * cell,
                cell,
                cell,
            );
        }

        self.batches_painted += 1;
        self.cells_painted += batch.len() as u64;
        log::debug!("painted batch of {} cells", batch.len());
        Ok(())
    }

    pub fn paint_json(&mut self, json: &str) -> Result<(), RenderError> {
        let batch = decode_batch(json)?;
        self.paint(&batch)
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn batches_painted(&self) -> u64 {
        self.batches_painted
    }

    pub fn cells_painted(&self) -> u64 {
        self.cells_painted
    }
}

impl Renderer<PixelBuffer> {
    pub fn headless(config: Config) -> Result<Self, RenderError> {
        let (width, height) = config.surface_size()?;
        Renderer::new(config, PixelBuffer::new(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::Color;
    use rand::prelude::*;
    use rand_xoshiro::rand_core::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    const COLORS: [&str; 5] = ["red", "green", "blue", "#88f", "#fff"];

    fn config(w: i32, h: i32, cell: i32) -> Config {
        Config::new(255, 10, w, h, cell).unwrap()
    }

    fn random_batch(rng: &mut Xoshiro256Plus, config: &Config, len: usize) -> Vec<Drawable> {
        (0..len)
            .map(|_| {
                Drawable::new(
                    rng.gen_range(0..config.grid_width),
                    rng.gen_range(0..config.grid_height),
                    *COLORS.choose(rng).unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn paints_cells_at_scaled_origins() {
        let mut renderer = Renderer::headless(config(4, 4, 5)).unwrap();
        renderer
            .paint(&[Drawable::new(0, 0, "red"), Drawable::new(1, 0, "blue")])
            .unwrap();

        let surface = renderer.surface();
        assert!(surface.region_is(0, 0, 5, 5, &Color::from("red")));
        assert!(surface.region_is(5, 0, 5, 5, &Color::from("blue")));
        assert_eq!(surface.pixel(10, 0), None);
        assert_eq!(surface.pixel(0, 5), None);
    }

    #[test]
    fn later_drawables_win_on_collision() {
        let mut renderer = Renderer::headless(config(3, 3, 2)).unwrap();
        renderer
            .paint(&[Drawable::new(1, 1, "red"), Drawable::new(1, 1, "green")])
            .unwrap();
        assert!(renderer
            .surface()
            .region_is(2, 2, 2, 2, &Color::from("green")));
    }

    #[test]
    fn empty_batch_leaves_surface_unchanged() {
        let mut renderer = Renderer::headless(config(3, 3, 2)).unwrap();
        renderer.paint(&[Drawable::new(2, 2, "red")]).unwrap();
        let before = renderer.surface().clone();
        renderer.paint(&[]).unwrap();
        assert_eq!(renderer.surface(), &before);
        assert_eq!(renderer.batches_painted(), 2);
        assert_eq!(renderer.cells_painted(), 1);
    }

    #[test]
    fn same_batch_after_clear_gives_same_pixels() {
        let config = config(16, 12, 3);
        let mut rng = Xoshiro256Plus::seed_from_u64(7);
        let mut renderer = Renderer::headless(config).unwrap();

        for _ in 0..10 {
            let batch = random_batch(&mut rng, &config, 40);
            renderer.clear();
            renderer.paint(&batch).unwrap();
            let first = renderer.surface().clone();
            renderer.clear();
            renderer.paint(&batch).unwrap();
            assert_eq!(renderer.surface(), &first);
        }
    }

    #[test]
    fn batches_accumulate_without_clear() {
        let config = config(10, 10, 2);
        let mut rng = Xoshiro256Plus::seed_from_u64(42);

        for _ in 0..10 {
            let a = random_batch(&mut rng, &config, 30);
            let b = random_batch(&mut rng, &config, 30);

            let mut split = Renderer::headless(config).unwrap();
            split.paint(&a).unwrap();
            split.paint(&b).unwrap();

            let mut joined = Renderer::headless(config).unwrap();
            let both: Vec<Drawable> = a.iter().chain(b.iter()).cloned().collect();
            joined.paint(&both).unwrap();

            assert_eq!(split.surface(), joined.surface());

            for d in &b {
                let (x, y) = (d.position.x as u32 * 2, d.position.y as u32 * 2);
                let last = b.iter().rev().find(|o| o.position == d.position).unwrap();
                assert!(split.surface().region_is(x, y, 2, 2, &last.color));
            }
        }
    }

    #[test]
    fn rejects_off_grid_batches_before_painting() {
        let mut renderer = Renderer::headless(config(4, 3, 2)).unwrap();
        for (x, y) in [(4, 0), (0, 3), (-1, 0), (0, -1)] {
            let err = renderer
                .paint(&[Drawable::new(0, 0, "red"), Drawable::new(x, y, "blue")])
                .unwrap_err();
            assert!(matches!(
                err,
                RenderError::InvalidPosition { grid_width: 4, grid_height: 3, .. }
            ));
        }
        assert!(renderer.surface().is_blank());
        assert_eq!(renderer.batches_painted(), 0);
    }

    #[test]
    fn rejects_mismatched_surface() {
        let err = Renderer::new(config(4, 4, 5), PixelBuffer::new(20, 19)).unwrap_err();
        assert!(matches!(
            err,
            RenderError::SurfaceSize { expected: (20, 20), actual: (20, 19) }
        ));
    }

    #[test]
    fn paints_json_batches() {
        let mut renderer = Renderer::headless(config(2, 2, 1)).unwrap();
        renderer
            .paint_json(r##"[[{"x":1,"y":1},"#88f"]]"##)
            .unwrap();
        assert_eq!(renderer.surface().pixel(1, 1), Some(&Color::from("#88f")));
        assert!(matches!(
            renderer.paint_json("[[1, 2]]"),
            Err(RenderError::Decode(_))
        ));
    }
}
