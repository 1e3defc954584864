//! Event storage
//!
//! The calendar talks to storage only through [`EventStore`]. Every method
//! is a single atomic step: implementations must not let a caller observe a
//! half-applied mutation.

mod memory;

pub use memory::InMemoryStore;

use crate::types::{Event, EventId};

/// Storage backend for events
pub trait EventStore: Send + Sync {
    /// Store a new event under the next sequential id (starting at 1).
    /// The `id` of the given event is ignored. Returns the stored record.
    fn insert(&self, event: Event) -> Event;

    /// Look up an event by id
    fn get(&self, id: EventId) -> Option<Event>;

    /// Mutate an event in place while holding exclusive access.
    /// Returns the updated record, or `None` if the id does not exist.
    fn update(&self, id: EventId, apply: &mut dyn FnMut(&mut Event)) -> Option<Event>;

    /// Hard-delete an event. Returns whether a record was removed.
    fn remove(&self, id: EventId) -> bool;

    /// Clone every event accepted by `filter`, in insertion order
    fn scan(&self, filter: &mut dyn FnMut(&Event) -> bool) -> Vec<Event>;

    /// Number of stored events
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
