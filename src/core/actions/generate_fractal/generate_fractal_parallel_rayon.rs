use rayon::prelude::*;

use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::progress::SharedProgressTracker;
use crate::core::data::point::Point;

pub fn generate_fractal_parallel_rayon<Alg, C, F>(
    algorithm: &Alg,
    cancel: &C,
    progress: &SharedProgressTracker<F>,
) -> Result<Vec<Alg::Success>, Cancelled>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
    C: CancelToken,
    F: Fn(u8) + Sync,
{
    let pixel_rect = algorithm.pixel_rect();
    let width = pixel_rect.width();
    let row_width = width as usize;

    let rows: Result<Vec<Vec<Alg::Success>>, Cancelled> = (0..pixel_rect.height())
        .into_par_iter()
        .map(|y| {
            let mut row = Vec::with_capacity(row_width);

            for (i, x) in (0..width).enumerate() {
                if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                row.push(algorithm.compute(Point { x, y }));
            }

            progress.pixels_done(row_width);

            Ok(row)
        })
        .collect();

    rows.map(|rows| rows.into_iter().flatten().collect())
}
