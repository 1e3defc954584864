//! In-memory event store

use parking_lot::RwLock;

use super::EventStore;
use crate::types::{Event, EventId};

#[derive(Debug)]
struct Inner {
    events: Vec<Event>,
    next_id: EventId,
}

/// Process-lifetime store backed by a `Vec` behind a single lock
#[derive(Debug)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                events: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore for InMemoryStore {
    fn insert(&self, mut event: Event) -> Event {
        let mut inner = self.inner.write();
        event.id = inner.next_id;
        inner.next_id += 1;
        inner.events.push(event.clone());
        event
    }

    fn get(&self, id: EventId) -> Option<Event> {
        self.inner.read().events.iter().find(|e| e.id == id).cloned()
    }

    fn update(&self, id: EventId, apply: &mut dyn FnMut(&mut Event)) -> Option<Event> {
        let mut inner = self.inner.write();
        let event = inner.events.iter_mut().find(|e| e.id == id)?;
        apply(event);
        Some(event.clone())
    }

    fn remove(&self, id: EventId) -> bool {
        let mut inner = self.inner.write();
        match inner.events.iter().position(|e| e.id == id) {
            Some(index) => {
                inner.events.remove(index);
                true
            }
            None => false,
        }
    }

    fn scan(&self, filter: &mut dyn FnMut(&Event) -> bool) -> Vec<Event> {
        self.inner
            .read()
            .events
            .iter()
            .filter(|e| filter(e))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.inner.read().events.len()
    }
}
