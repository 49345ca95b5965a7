use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing ticket issued per generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks the latest issued request so that responses arriving for
/// superseded requests can be discarded (last-issued-wins).
#[derive(Debug, Default)]
pub struct RequestFence {
    latest: AtomicU64,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// True while no newer ticket has been issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_is_current() {
        let fence = RequestFence::new();
        let ticket = fence.issue();
        assert!(fence.is_current(ticket));
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let fence = RequestFence::new();
        let first = fence.issue();
        let second = fence.issue();
        assert!(!fence.is_current(first));
        assert!(fence.is_current(second));
    }
}
