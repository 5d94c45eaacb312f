//! Frame pacing
//!
//! Caps the frame rate with a target interval: at the end of each frame the
//! loop sleeps only for whatever remains of the interval after the work the
//! frame actually did.

use std::thread;
use std::time::{Duration, Instant};

/// Frame-rate cap with a fixed target interval
#[derive(Debug)]
pub struct FramePacer {
    target: Duration,
    last_frame: Instant,
}

impl FramePacer {
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            last_frame: Instant::now(),
        }
    }

    pub fn target(&self) -> Duration {
        self.target
    }

    /// Time left in the current frame interval, measured at `now`
    fn remaining(&self, now: Instant) -> Duration {
        self.target
            .saturating_sub(now.duration_since(self.last_frame))
    }

    /// Sleeps out the rest of the current frame interval and starts the next
    pub fn pace(&mut self) {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
        self.last_frame = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_frame_waits_out_the_interval() {
        let pacer = FramePacer::new(Duration::from_millis(10));
        let now = pacer.last_frame + Duration::from_millis(2);
        assert_eq!(pacer.remaining(now), Duration::from_millis(8));
    }

    #[test]
    fn slow_frame_does_not_wait() {
        let pacer = FramePacer::new(Duration::from_millis(10));
        let now = pacer.last_frame + Duration::from_millis(25);
        assert_eq!(pacer.remaining(now), Duration::ZERO);
    }

    #[test]
    fn pace_starts_a_new_interval() {
        let mut pacer = FramePacer::new(Duration::from_millis(1));
        let before = pacer.last_frame;
        pacer.pace();
        assert!(pacer.last_frame > before);
    }
}
