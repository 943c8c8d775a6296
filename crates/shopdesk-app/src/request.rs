//! Request generation counters
//!
//! Every load flow takes a fresh [`RequestId`] from its [`RequestSeq`]. The
//! id travels with the background task and comes back on the result message;
//! a result whose id is no longer current is dropped.

/// Identifies one issued request within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Monotonic generation counter for one kind of request.
#[derive(Debug, Default)]
pub struct RequestSeq {
    current: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new id, making every earlier one stale.
    pub fn next_id(&mut self) -> RequestId {
        self.current += 1;
        RequestId(self.current)
    }

    /// Make every issued id stale without issuing a new one.
    pub fn invalidate(&mut self) {
        self.current += 1;
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.current
    }
}
