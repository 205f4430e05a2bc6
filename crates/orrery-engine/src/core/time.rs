/// Frame clock.
/// Turns raw host frame deltas into the elapsed time handed to the game:
/// never negative, never NaN, and capped so a suspended tab does not make
/// every body jump half an orbit on resume.
///
/// The cap means simulated time falls behind wall-clock time after a stall
/// longer than `max_dt`; orbits resume from where they paused instead of
/// catching up. `GameConfig::max_frame_dt` sets the cap.
pub struct FrameClock {
    /// Longest delta a single frame may report.
    max_dt: f32,
    /// Total sanitized time since start, in seconds.
    elapsed: f64,
    /// Frames advanced so far.
    frames: u64,
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            max_dt: max_dt.max(0.0),
            elapsed: 0.0,
            frames: 0,
        }
    }

    /// Advance by one host frame. Returns the sanitized delta in seconds.
    pub fn advance(&mut self, frame_dt: f32) -> f32 {
        let dt = if frame_dt.is_finite() && frame_dt > 0.0 {
            frame_dt.min(self.max_dt)
        } else {
            0.0
        };
        self.elapsed += dt as f64;
        self.frames += 1;
        dt
    }

    /// Total sanitized time since start.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of frames advanced.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_normal_frames_through() {
        let mut clock = FrameClock::new(0.25);
        let dt = clock.advance(1.0 / 60.0);
        assert!((dt - 1.0 / 60.0).abs() < 1e-7);
        assert_eq!(clock.frames(), 1);
    }

    #[test]
    fn negative_and_nan_become_zero() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.advance(-0.5), 0.0);
        assert_eq!(clock.advance(f32::NAN), 0.0);
        assert_eq!(clock.advance(f32::INFINITY), 0.0);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frames(), 3);
    }

    #[test]
    fn long_stalls_are_capped() {
        let mut clock = FrameClock::new(0.25);
        assert_eq!(clock.advance(5.0), 0.25);
        assert!((clock.elapsed() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn elapsed_accumulates() {
        let mut clock = FrameClock::new(1.0);
        for _ in 0..4 {
            clock.advance(0.5);
        }
        assert!((clock.elapsed() - 2.0).abs() < 1e-9);
    }
}
