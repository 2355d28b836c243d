//! Latest-request-wins bookkeeping for a single view.

use crate::LoadState;
use shoppy_data::FetchError;
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::warn;

/// Proof that a request was started from a [`LoadSlot`].
///
/// Only the ticket from the most recent [`LoadSlot::begin`] may store its
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Generation number of this ticket.
    pub fn generation(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
struct SlotInner<T> {
    generation: u64,
    state: LoadState<T>,
}

/// Holds the [`LoadState`] of one logical piece of data (the product list,
/// the product being viewed) and decides which response gets to fill it.
///
/// Starting a request bumps the slot's generation. When a response arrives
/// it is stored only if no newer request was started in the meantime;
/// otherwise it is dropped. Requests are never cancelled.
#[derive(Debug)]
pub struct LoadSlot<T> {
    inner: Mutex<SlotInner<T>>,
}

impl<T> Default for LoadSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LoadSlot<T> {
    /// Create a slot with no request made yet. Its state reads as loading.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(SlotInner {
                generation: 0,
                state: LoadState::Loading,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SlotInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Start a request: supersede any outstanding one and mark the slot as
    /// loading.
    pub fn begin(&self) -> RequestTicket {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = LoadState::Loading;
        RequestTicket(inner.generation)
    }

    /// Whether `ticket` is still the latest request.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.lock().generation == ticket.0
    }

    /// Store a response if `ticket` is still current.
    ///
    /// Returns false, leaving the state alone, when the ticket is stale.
    pub fn settle(&self, ticket: RequestTicket, result: Result<T, FetchError>) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.0 {
            warn!(
                ticket = ticket.0,
                latest = inner.generation,
                "discarding stale catalog response"
            );
            return false;
        }
        if let Err(e) = &result {
            warn!(error = %e, "catalog request failed");
        }
        inner.state = result.into();
        true
    }

    /// Begin a request, await it and settle it.
    ///
    /// Returns whether the result was kept.
    pub async fn run<F>(&self, request: F) -> bool
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        let ticket = self.begin();
        let result = request.await;
        self.settle(ticket, result)
    }
}

impl<T: Clone> LoadSlot<T> {
    /// Copy of the current state.
    pub fn state(&self) -> LoadState<T> {
        self.lock().state.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_slot_is_loading() {
        let slot: LoadSlot<u32> = LoadSlot::new();
        assert!(slot.state().is_loading());
    }

    #[test]
    fn test_current_ticket_settles() {
        let slot = LoadSlot::new();
        let ticket = slot.begin();
        assert!(slot.is_current(ticket));
        assert!(slot.settle(ticket, Ok(7)));
        assert_eq!(slot.state(), LoadState::Ready(7));
    }

    #[test]
    fn test_stale_ticket_is_discarded_when_it_resolves_last() {
        let slot = LoadSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        assert!(!slot.is_current(first));

        assert!(slot.settle(second, Ok(2)));
        assert!(!slot.settle(first, Ok(1)));
        assert_eq!(slot.state(), LoadState::Ready(2));
    }

    #[test]
    fn test_stale_ticket_is_discarded_when_it_resolves_first() {
        let slot = LoadSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert!(!slot.settle(first, Ok(1)));
        assert!(slot.state().is_loading());
        assert!(slot.settle(second, Ok(2)));
        assert_eq!(slot.state(), LoadState::Ready(2));
    }

    #[test]
    fn test_stale_error_does_not_replace_data() {
        let slot = LoadSlot::new();
        let first = slot.begin();
        let second = slot.begin();
        slot.settle(second, Ok(2));
        slot.settle(first, Err(FetchError::Timeout));
        assert_eq!(slot.state(), LoadState::Ready(2));
    }

    #[test]
    fn test_begin_resets_to_loading() {
        let slot = LoadSlot::new();
        let ticket = slot.begin();
        slot.settle(ticket, Ok(1));
        let next = slot.begin();
        assert!(slot.state().is_loading());
        assert!(next > ticket);
        assert_eq!(next.generation(), 2);
    }
}
