//! Per-screen request gating.
//!
//! A [`RequestGate`] combines the busy flag that blocks re-submission with an
//! epoch counter. Leaving a screen bumps the epoch, so a response that arrives
//! afterwards carries a stale ticket and is dropped instead of being applied
//! to a screen the user has moved away from. In-flight requests themselves are
//! never cancelled.

/// Proof that a request was started under a particular epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct RequestTicket {
    epoch: u64,
}

impl RequestTicket {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}

#[derive(Debug, Default)]
pub struct RequestGate {
    busy: bool,
    epoch: u64,
}

impl RequestGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a request. Returns `None` while another request is in flight.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.busy {
            return None;
        }
        self.busy = true;
        Some(RequestTicket { epoch: self.epoch })
    }

    /// Finish a request. Returns `false` when the ticket is stale, in which
    /// case the response must be discarded and the gate is left alone.
    pub fn finish(&mut self, ticket: RequestTicket) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.busy = false;
        true
    }

    /// Invalidate outstanding tickets (the screen was left)
    pub fn invalidate(&mut self) {
        self.epoch += 1;
        self.busy = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_busy_blocks_resubmission() {
        let mut gate = RequestGate::new();
        let ticket = gate.begin().unwrap();
        assert!(gate.is_busy());
        assert!(gate.begin().is_none());
        assert!(gate.finish(ticket));
        assert!(!gate.is_busy());
        assert!(gate.begin().is_some());
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut gate = RequestGate::new();
        let stale = gate.begin().unwrap();
        gate.invalidate();
        assert!(!gate.is_busy());

        let fresh = gate.begin().unwrap();
        assert!(!gate.finish(stale));
        // The newer request is still in flight
        assert!(gate.is_busy());
        assert!(gate.finish(fresh));
    }
}
