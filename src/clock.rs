use instant::{Duration, Instant};

/// Frame timer that also keeps a running average of frames per second.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    report_start: Instant,
    frames_since_report: u32,
    report_interval: Duration,
}

impl FrameClock {
    pub fn new(report_interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            report_start: now,
            frames_since_report: 0,
            report_interval,
        }
    }

    /// Count a frame and return the seconds since the clock started.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.last = now;
        self.frames_since_report += 1;
        (now - self.start).as_secs_f32()
    }

    /// Average frames per second since the last report, once every report
    /// interval.
    pub fn average_fps(&mut self) -> Option<f64> {
        let window = self.last - self.report_start;
        if window < self.report_interval || window.is_zero() {
            return None;
        }
        let fps = self.frames_since_report as f64 / window.as_secs_f64();
        self.report_start = self.last;
        self.frames_since_report = 0;
        Some(fps)
    }
}
