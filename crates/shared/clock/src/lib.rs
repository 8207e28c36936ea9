//! Agora Clock Infrastructure
//!
//! Provides time abstractions for the marketplace:
//!
//! - [`StepClock`]: discrete simulated time plus the cooldown `T` that governs
//!   both busy periods (`busy_until = now + T`) and arrival steps (`offset * T`)
//! - [`Pacer`]: optional wall-clock throttling between steps
//!
//! ## Usage
//!
//! ```ignore
//! use agora_clock::{Pace, Pacer, StepClock};
//! use std::time::Duration;
//!
//! let mut clock = StepClock::new(3);
//! assert_eq!(clock.busy_until(), 3);
//! clock.advance();
//!
//! let mut pacer = Pacer::new(Pace::Interval(Duration::from_secs(1)));
//! pacer.wait(); // returns immediately the first time
//! pacer.wait(); // blocks until a second has passed
//! ```

mod pacer;
mod step;

pub use pacer::{Pace, Pacer};
pub use step::StepClock;

// Re-export the Clock trait for convenience
pub use agora_ports::Clock;
