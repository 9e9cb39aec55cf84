//! In-memory ticket store.
//!
//! Newest-first ordered collection plus the submission contract. One
//! owned instance per server (or per test); handlers share it behind
//! `Arc<RwLock<_>>`, so submissions serialize through the write lock
//! and ids stay unique under concurrent requests.

use std::collections::VecDeque;
use tracing::debug;
use vigil_common::ticket::{NewTicket, Ticket};
use vigil_common::VigilError;

/// Seed for the ticket id counter; the first ticket is RPT-1001.
const TICKET_SEQ_SEED: u64 = 1000;

pub struct TicketStore {
    tickets: VecDeque<Ticket>,
    next_seq: u64,
}

impl TicketStore {
    pub fn new() -> Self {
        Self {
            tickets: VecDeque::new(),
            next_seq: TICKET_SEQ_SEED + 1,
        }
    }

    /// Validate and store a new submission.
    ///
    /// Id assignment and insertion happen together, so a caller holding
    /// the write lock observes them as one step.
    pub fn create(&mut self, submission: &NewTicket) -> Result<Ticket, VigilError> {
        submission.validate()?;

        let ticket_id = format!("RPT-{}", self.next_seq);
        self.next_seq += 1;

        let ticket = Ticket::new(ticket_id, submission);
        debug!("created {}", ticket.ticket_id);
        self.append(ticket.clone());
        Ok(ticket)
    }

    /// Insert at the front (newest-first)
    pub fn append(&mut self, ticket: Ticket) {
        self.tickets.push_front(ticket);
    }

    /// One page of tickets, 1-indexed. Out-of-range pages are empty,
    /// never an error.
    pub fn page(&self, page: usize, page_size: usize) -> Vec<Ticket> {
        let start = page.saturating_sub(1).saturating_mul(page_size);
        self.tickets
            .iter()
            .skip(start)
            .take(page_size)
            .cloned()
            .collect()
    }

    /// Total tickets stored
    pub fn count(&self) -> usize {
        self.tickets.len()
    }
}

impl Default for TicketStore {
    fn default() -> Self {
        Self::new()
    }
}
