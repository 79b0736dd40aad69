use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

pub const PROGRESS_INTERVAL_PIXELS: usize = 1000;

pub const PROGRESS_COMPLETE: u8 = 100;

/// `floor(processed * 100 / total)`, computed in integers. Dividing in floating
/// point first, `floor(processed / total * 100)`, can land one below an exact
/// percentage: 29000 of 100000 gives 28 that way and 29 here.
#[must_use]
pub fn progress_percent(processed: usize, total: usize) -> u8 {
    if total == 0 {
        return PROGRESS_COMPLETE;
    }

    let percent = (processed as u128 * 100) / total as u128;

    percent.min(u128::from(PROGRESS_COMPLETE)) as u8
}

pub struct ProgressTracker<F: FnMut(u8)> {
    total: usize,
    processed: usize,
    on_progress: F,
}

impl<F: FnMut(u8)> ProgressTracker<F> {
    pub fn new(total: usize, on_progress: F) -> Self {
        Self {
            total,
            processed: 0,
            on_progress,
        }
    }

    #[inline]
    pub fn pixel_done(&mut self) {
        self.processed += 1;

        if self.processed % PROGRESS_INTERVAL_PIXELS == 0 {
            (self.on_progress)(progress_percent(self.processed, self.total));
        }
    }

    pub fn finish(mut self) {
        (self.on_progress)(PROGRESS_COMPLETE);
    }
}

pub struct SharedProgressTracker<F: Fn(u8) + Sync> {
    total: usize,
    processed: AtomicUsize,
    last_reported: Mutex<Option<u8>>,
    on_progress: F,
}

impl<F: Fn(u8) + Sync> SharedProgressTracker<F> {
    pub fn new(total: usize, on_progress: F) -> Self {
        Self {
            total,
            processed: AtomicUsize::new(0),
            last_reported: Mutex::new(None),
            on_progress,
        }
    }

    pub fn pixels_done(&self, count: usize) {
        let before = self.processed.fetch_add(count, Ordering::AcqRel);
        let after = before + count;

        if before / PROGRESS_INTERVAL_PIXELS == after / PROGRESS_INTERVAL_PIXELS {
            return;
        }

        self.report(progress_percent(after, self.total));
    }

    pub fn finish(&self) {
        self.report(PROGRESS_COMPLETE);
    }

    fn report(&self, percent: u8) {
        let mut last = self
            .last_reported
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if last.is_some_and(|last| last >= percent) {
            return;
        }

        *last = Some(percent);
        (self.on_progress)(percent);
    }
}
