use agora_core::Step;

/// Port for simulated time
///
/// The marketplace only needs the current step; pacing against wall time is a
/// separate concern of the runner.
pub trait Clock: Send + Sync {
    /// Current step according to this clock
    fn now(&self) -> Step;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
