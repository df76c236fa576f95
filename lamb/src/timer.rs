use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use tracing::debug;

pub struct Timer {
    label: &'static str,
    start: Instant,
}

impl Timer {
    pub fn start(label: &'static str) -> Timer {
        Timer {
            label,
            start: Instant::now(),
        }
    }

    pub fn stop(self) -> PhaseTiming {
        let elapsed = self.start.elapsed();
        debug!(phase = self.label, ?elapsed, "phase finished");

        PhaseTiming {
            label: self.label,
            elapsed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTiming {
    pub label: &'static str,
    pub elapsed: Duration,
}

impl Display for PhaseTiming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} took: {}s", self.label, self.elapsed.as_secs_f64())
    }
}
