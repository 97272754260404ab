use chrono::Utc;
use shared::domain::ContactId;

/// Hands out identifiers for newly created contacts.
pub trait IdSource {
    fn next_id(&mut self) -> ContactId;
}

/// Wall-clock millisecond ids that never repeat or go backwards, even when two
/// contacts are created inside the same tick or the clock steps back.
#[derive(Debug, Clone)]
pub struct MonotonicIdSource {
    last: i64,
    clock: fn() -> i64,
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

impl MonotonicIdSource {
    pub fn new() -> Self {
        Self::starting_after(ContactId(0))
    }

    /// Every id issued is strictly greater than `floor`.
    pub fn starting_after(floor: ContactId) -> Self {
        Self::with_clock(floor, now_millis)
    }

    pub fn with_clock(floor: ContactId, clock: fn() -> i64) -> Self {
        Self {
            last: floor.0,
            clock,
        }
    }
}

impl Default for MonotonicIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for MonotonicIdSource {
    fn next_id(&mut self) -> ContactId {
        let now = (self.clock)();
        self.last = now.max(self.last.saturating_add(1));
        ContactId(self.last)
    }
}

/// Plain counter; deterministic, used by tests and scripted sessions.
#[derive(Debug, Clone)]
pub struct SequentialIdSource {
    next: i64,
}

impl SequentialIdSource {
    pub fn starting_at(first: ContactId) -> Self {
        Self { next: first.0 }
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> ContactId {
        let id = ContactId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

#[cfg(test)]
#[path = "tests/ids_tests.rs"]
mod tests;
