use std::time::{Duration, Instant};

/// Wall-clock pacing between steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pace {
    /// Run steps back to back
    #[default]
    Unpaced,
    /// At least this much wall time between consecutive steps
    Interval(Duration),
}

impl Pace {
    /// `0` means unpaced
    pub fn from_millis(ms: u64) -> Self {
        if ms == 0 {
            Pace::Unpaced
        } else {
            Pace::Interval(Duration::from_millis(ms))
        }
    }
}

/// Throttles a step loop to a fixed interval
#[derive(Debug)]
pub struct Pacer {
    pace: Pace,
    last: Option<Instant>,
}

impl Pacer {
    pub fn new(pace: Pace) -> Self {
        Self { pace, last: None }
    }

    pub fn pace(&self) -> Pace {
        self.pace
    }

    /// Block until one interval has passed since the previous call
    ///
    /// The first call never blocks.
    pub fn wait(&mut self) {
        if let Pace::Interval(interval) = self.pace {
            if let Some(last) = self.last {
                let elapsed = last.elapsed();
                if elapsed < interval {
                    std::thread::sleep(interval - elapsed);
                }
            }
            self.last = Some(Instant::now());
        }
    }
}
