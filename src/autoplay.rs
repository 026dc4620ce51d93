use std::time::Duration;
use tracing::{debug, warn};

/// Repeating timer fed with frame time.
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
}

impl Autoplay {
    /// Returns `None` when there is nothing to cycle through.
    pub fn arm(interval: Duration, total: usize) -> Option<Self> {
        if total == 0 {
            debug!("no slides, autoplay not armed");
            return None;
        }
        if interval.is_zero() {
            warn!("autoplay interval is zero, autoplay not armed");
            return None;
        }

        debug!(interval_ms = interval.as_millis() as u64, "autoplay armed");
        Some(Self {
            interval,
            elapsed: Duration::ZERO,
        })
    }

    /// Adds `dt` and returns how many whole intervals have elapsed since the last firing.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_SECONDS: Duration = Duration::from_millis(5000);

    #[test]
    fn not_armed_without_slides() {
        assert!(Autoplay::arm(FIVE_SECONDS, 0).is_none());
    }

    #[test]
    fn not_armed_with_zero_interval() {
        assert!(Autoplay::arm(Duration::ZERO, 3).is_none());
    }

    #[test]
    fn fires_once_per_interval() {
        let mut timer = Autoplay::arm(FIVE_SECONDS, 3).unwrap();
        assert_eq!(timer.advance(Duration::from_millis(4999)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(Duration::from_millis(4999)), 0);
    }

    #[test]
    fn carries_remainder_across_frames() {
        let mut timer = Autoplay::arm(FIVE_SECONDS, 3).unwrap();
        let frame = Duration::from_millis(16);
        let mut fired = 0;
        // 313 * 16ms = 5008ms
        for _ in 0..313 {
            fired += timer.advance(frame);
        }
        assert_eq!(fired, 1);
        assert_eq!(timer.advance(Duration::from_millis(4992)), 1);
    }

    #[test]
    fn long_frame_fires_multiple_times() {
        let mut timer = Autoplay::arm(FIVE_SECONDS, 1).unwrap();
        assert_eq!(timer.advance(Duration::from_secs(10)), 2);
    }
}
