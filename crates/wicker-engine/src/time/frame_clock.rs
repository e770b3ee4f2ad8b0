use std::time::{Duration, Instant};

/// Timing snapshot handed to widgets on each update.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,
    /// Seconds since the clock was created or last reset.
    pub elapsed: f32,
    /// Monotonic timestamp taken at the tick.
    pub now: Instant,
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces [`FrameTime`] snapshots, one per update.
///
/// Delta time is clamped so a debugger pause or a minimized window does not
/// hand animation code a multi-second step, and a tight loop never sees zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    /// Clock with custom delta-time clamps. Inverted bounds are swapped.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        let (dt_min, dt_max) = if dt_min <= dt_max {
            (dt_min, dt_max)
        } else {
            log::warn!("frame clock clamps inverted ({dt_min:?} > {dt_max:?}); swapping");
            (dt_max, dt_min)
        };
        let now = Instant::now();
        Self { start: now, last: now, frame_index: 0, dt_min, dt_max }
    }

    /// Restarts the baseline; the next tick measures from here.
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last = now;
    }

    /// Frames ticked so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_index
    }

    /// Advances the clock.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).clamp(self.dt_min, self.dt_max);
        self.last = now;

        let time = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_from_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn dt_respects_clamps() {
        let min = Duration::from_millis(5);
        let max = Duration::from_millis(10);
        let mut clock = FrameClock::with_clamps(min, max);

        let fast = clock.tick();
        assert!(fast.dt >= min.as_secs_f32());

        std::thread::sleep(Duration::from_millis(30));
        let slow = clock.tick();
        assert!(slow.dt <= max.as_secs_f32() + f32::EPSILON);
    }

    #[test]
    fn inverted_clamps_are_swapped() {
        let min = Duration::from_millis(1);
        let max = Duration::from_millis(10);
        let mut clock = FrameClock::with_clamps(max, min);

        let t = clock.tick();
        assert!(t.dt >= min.as_secs_f32() && t.dt <= max.as_secs_f32());
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = FrameClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b.elapsed >= a.elapsed);
    }
}
