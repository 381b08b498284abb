#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// One-shot timers. Firing is reported back to the session with the same id.
pub trait Timers {
    fn schedule(&mut self, id: TimerId, delay_ms: u32);
    /// Cancelling an unknown or already fired id is a no-op.
    fn cancel(&mut self, id: TimerId);
}
