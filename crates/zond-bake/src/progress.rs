//! Load-progress session counters.
//!
//! One `LoadProgress` is shared between the bake calls of a loading session
//! and whatever displays the loading indicator. Each bake increments
//! `started` synchronously when it is requested and `finished` once its
//! volume has been written, so the indicator can report
//! `finished / started` at any point in between.

use std::sync::atomic::{AtomicU32, Ordering};

#[derive(Debug, Default)]
pub struct LoadProgress {
    started: AtomicU32,
    finished: AtomicU32,
}

impl LoadProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a bake has been requested.
    pub fn begin(&self) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record that a bake has completed.
    pub fn complete(&self) {
        self.finished.fetch_add(1, Ordering::Relaxed);
    }

    pub fn started(&self) -> u32 {
        self.started.load(Ordering::Relaxed)
    }

    pub fn finished(&self) -> u32 {
        self.finished.load(Ordering::Relaxed)
    }

    /// Completed fraction in `[0, 1]`; an idle session reads as complete.
    pub fn fraction(&self) -> f32 {
        let started = self.started();
        if started == 0 {
            return 1.0;
        }
        self.finished() as f32 / started as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn fraction_tracks_counters() {
        let progress = LoadProgress::new();
        assert_relative_eq!(progress.fraction(), 1.0);

        progress.begin();
        progress.begin();
        assert_relative_eq!(progress.fraction(), 0.0);

        progress.complete();
        assert_relative_eq!(progress.fraction(), 0.5);

        progress.complete();
        assert_relative_eq!(progress.fraction(), 1.0);
    }
}
