//! Read-through copy of one backend collection, guarded by a generation counter.
//!
//! Each fetch is dispatched with a [`Ticket`] holding the generation current at dispatch time.
//! Starting another load, or resetting because a parent selection changed, bumps the
//! generation, so a response that resolves late for a superseded selection is recognised as
//! stale and dropped instead of overwriting newer state.

/// Generation a fetch was dispatched with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Monotonic counter issuing [`Ticket`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Invalidate all outstanding tickets and issue a new one.
    pub fn advance(&mut self) -> Ticket {
        self.0 += 1;
        Ticket(self.0)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.0 == ticket.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    loading: bool,
    generation: Generation,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            generation: Generation::default(),
        }
    }
}

impl<T> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.generation.is_current(ticket)
    }

    /// Clear the items and start a fresh load.
    pub fn begin_load(mut self) -> (Self, Ticket) {
        let ticket = self.generation.advance();
        self.items.clear();
        self.loading = true;
        (self, ticket)
    }

    /// Start a reload that keeps the current items visible until it resolves.
    pub fn begin_refresh(mut self) -> (Self, Ticket) {
        let ticket = self.generation.advance();
        self.loading = true;
        (self, ticket)
    }

    /// Drop the items and invalidate in-flight fetches without starting a new one.
    pub fn reset(mut self) -> Self {
        self.generation.advance();
        self.items.clear();
        self.loading = false;
        self
    }

    /// Replace the items wholesale with a fetch result, unless `ticket` is stale.
    pub fn accept(mut self, ticket: Ticket, items: Vec<T>) -> Self {
        if self.is_current(ticket) {
            self.items = items;
            self.loading = false;
        }
        self
    }

    /// Settle a failed fetch, keeping whatever items are shown.
    pub fn fail(mut self, ticket: Ticket) -> Self {
        if self.is_current(ticket) {
            self.loading = false;
        }
        self
    }
}
