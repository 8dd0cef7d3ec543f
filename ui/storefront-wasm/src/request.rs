//! Generation counters for in-flight requests.
//!
//! Requests can't be aborted, so each one takes a ticket when it starts and
//! checks it when the response lands. Only the most recent ticket may apply
//! its result.

use std::cell::Cell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct RequestGate {
    latest: Cell<u64>,
}

impl RequestGate {
    pub fn begin(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
