use rand::prelude::*;
use rand_xoshiro::rand_core::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use crate::{
    config::Config,
    consts::{BENCH_COLORS, BENCH_SEED},
    drawable::{Batch, Drawable},
    renderer::Renderer,
};

/// Seeded batch of `len` drawables spread over the whole grid.
pub fn random_batch(config: &Config, len: usize, seed: u64) -> Batch {
    let mut rng = Xoshiro256Plus::seed_from_u64(seed);
    (0..len)
        .map(|i| {
            Drawable::new(
                rng.gen_range(0..config.grid_width),
                rng.gen_range(0..config.grid_height),
                BENCH_COLORS[i % BENCH_COLORS.len()],
            )
        })
        .collect()
}

/// Times painting a random batch into a fresh headless surface.
pub fn bench_paint(config: Config, len: usize) -> String {
    let batch = random_batch(&config, len, BENCH_SEED);
    let stats = easybench_wasm::bench(|| {
        let mut renderer = match Renderer::headless(config) {
            Ok(renderer) => renderer,
            Err(_) => return 0,
        };
        match renderer.paint(&batch) {
            Ok(()) => renderer.cells_painted(),
            Err(_) => 0,
        }
    });
    format!("paint {} cells: {}", len, stats)
}
