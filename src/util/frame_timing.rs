use web_time::{Duration, Instant};

/// Interval between ms/frame reports.
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Result of one [`FrameTiming::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// Seconds since the previous tick (zero on the first).
    pub elapsed_seconds: f32,
    /// Average milliseconds per frame over the last full second, present
    /// once per second.
    pub ms_per_frame: Option<f64>,
}

/// Frame clock with per-frame deltas and a once-per-second ms/frame figure
pub struct FrameTiming {
    /// Last frame timestamp
    last_frame: Instant,
    /// Start of the current reporting window
    window_start: Instant,
    /// Frames counted in the current window
    frames_in_window: u32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Start timing now.
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start timing from an explicit instant.
    pub fn starting_at(now: Instant) -> Self {
        Self {
            last_frame: now,
            window_start: now,
            frames_in_window: 0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once per frame.
    pub fn tick(&mut self) -> FrameTick {
        self.tick_at(Instant::now())
    }

    /// Call once per frame with an explicit timestamp.
    pub fn tick_at(&mut self, now: Instant) -> FrameTick {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        self.frames_in_window += 1;
        let mut ms_per_frame = None;
        if now.saturating_duration_since(self.window_start) >= REPORT_INTERVAL {
            ms_per_frame = Some(1000.0 / f64::from(self.frames_in_window));
            self.frames_in_window = 0;
            // Advance by whole intervals so the windows stay aligned
            self.window_start += REPORT_INTERVAL;
        }

        FrameTick {
            elapsed_seconds: frame_time,
            ms_per_frame,
        }
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_has_zero_elapsed() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(start);
        let tick = timing.tick_at(start);
        assert_eq!(tick.elapsed_seconds, 0.0);
        assert_eq!(tick.ms_per_frame, None);
    }

    #[test]
    fn elapsed_is_time_between_ticks() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(start);
        let tick = timing.tick_at(start + Duration::from_millis(250));
        assert!((tick.elapsed_seconds - 0.25).abs() < 1e-6);
        let tick = timing.tick_at(start + Duration::from_millis(300));
        assert!((tick.elapsed_seconds - 0.05).abs() < 1e-6);
    }

    #[test]
    fn reports_ms_per_frame_once_per_second() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(start);
        let mut reports = Vec::new();
        // 50 frames per second for two seconds
        for i in 1..=100 {
            let tick = timing.tick_at(start + Duration::from_millis(20 * i));
            if let Some(ms) = tick.ms_per_frame {
                reports.push(ms);
            }
        }
        assert_eq!(reports.len(), 2);
        for ms in reports {
            assert!((ms - 20.0).abs() < 1e-9, "{ms}");
        }
    }

    #[test]
    fn fps_moves_toward_frame_rate() {
        let start = Instant::now();
        let mut timing = FrameTiming::starting_at(start);
        for i in 1..=200 {
            let _ = timing.tick_at(start + Duration::from_millis(10 * i));
        }
        assert!((timing.fps() - 100.0).abs() < 1.0, "{}", timing.fps());
    }
}
