// file: src/utils/timing.rs
// description: wall-clock phase timer for latency measurements

use std::time::{Duration, Instant};
use tracing::debug;

/// Times one phase of a test step. The elapsed wall-clock time includes the
/// full round trip, which is exactly what the harness is measuring.
pub struct PhaseTimer {
    phase: &'static str,
    start: Instant,
}

impl PhaseTimer {
    pub fn start(phase: &'static str) -> Self {
        debug!("Starting phase: {}", phase);
        Self {
            phase,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> Duration {
        let elapsed = self.elapsed();
        debug!(
            "Completed phase: {} in {:.4}s",
            self.phase,
            elapsed.as_secs_f64()
        );
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_timer_measures_elapsed() {
        let timer = PhaseTimer::start("test");
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = timer.finish();
        assert!(elapsed >= Duration::from_millis(10));
    }
}
