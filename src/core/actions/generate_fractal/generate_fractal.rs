use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::progress::ProgressTracker;

pub fn generate_fractal<Alg, C, F>(
    algorithm: &Alg,
    cancel: &C,
    progress: &mut ProgressTracker<F>,
) -> Result<Vec<Alg::Success>, Cancelled>
where
    Alg: FractalAlgorithm,
    C: CancelToken,
    F: FnMut(u8),
{
    let pixel_rect = algorithm.pixel_rect();
    let mut results = Vec::with_capacity(pixel_rect.size());

    for (i, pixel) in pixel_rect.points().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(Cancelled);
        }

        results.push(algorithm.compute(pixel));
        progress.pixel_done();
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct StubAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;

        fn compute(&self, pixel: Point) -> u64 {
            u64::from(pixel.y) * 1000 + u64::from(pixel.x)
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    fn stub(width: u32, height: u32) -> StubAlgorithm {
        StubAlgorithm {
            pixel_rect: PixelRect::new(width, height).unwrap(),
        }
    }

    #[test]
    fn test_results_are_row_major() {
        let algorithm = stub(3, 2);
        let mut progress = ProgressTracker::new(6, |_| {});

        let results = generate_fractal(&algorithm, &NeverCancel, &mut progress).unwrap();

        assert_eq!(results, vec![0, 1, 2, 1000, 1001, 1002]);
    }

    #[test]
    fn test_progress_reported_every_thousand_pixels() {
        let algorithm = stub(50, 50);
        let reports = RefCell::new(Vec::new());
        let mut progress = ProgressTracker::new(2500, |p| reports.borrow_mut().push(p));

        generate_fractal(&algorithm, &NeverCancel, &mut progress).unwrap();
        drop(progress);

        assert_eq!(reports.into_inner(), vec![40, 80]);
    }

    #[test]
    fn test_returns_cancelled_when_token_is_set() {
        let algorithm = stub(10, 10);
        let cancelled = AtomicBool::new(true);
        let cancel_token = || cancelled.load(Ordering::Relaxed);
        let mut progress = ProgressTracker::new(100, |_| {});

        let result = generate_fractal(&algorithm, &cancel_token, &mut progress);

        assert_eq!(result, Err(Cancelled));
    }

    #[test]
    fn test_cancellation_polled_on_interval() {
        let algorithm = stub(3000, 1);
        let polls = AtomicUsize::new(0);
        let cancel_token = || {
            polls.fetch_add(1, Ordering::Relaxed);
            false
        };
        let mut progress = ProgressTracker::new(3000, |_| {});

        generate_fractal(&algorithm, &cancel_token, &mut progress).unwrap();

        // 0, 1024, 2048
        assert_eq!(polls.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn test_cancellation_mid_render_stops_early() {
        let algorithm = stub(3000, 1);
        let polls = AtomicUsize::new(0);
        let cancel_token = || polls.fetch_add(1, Ordering::Relaxed) >= 1;
        let computed = RefCell::new(0usize);
        let mut progress = ProgressTracker::new(3000, |_| *computed.borrow_mut() += 1);

        let result = generate_fractal(&algorithm, &cancel_token, &mut progress);
        drop(progress);

        assert_eq!(result, Err(Cancelled));
        // only the 1000-pixel boundary was crossed before the second poll
        assert_eq!(computed.into_inner(), 1);
    }
}
