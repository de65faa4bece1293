use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::models::Event;

/// In-memory event storage keyed by event id.
///
/// Every operation takes the same lock for its whole body, so inserts,
/// listings and soft-deletes never observe a partially updated map.
/// Callers only ever receive clones of stored events.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Mutex<HashMap<String, Event>>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the single demo event the service used to ship with.
    pub fn with_sample_event() -> Self {
        let store = Self::new();
        store.insert(Event {
            id: "id1".to_string(),
            name: "Ultimate Frisbee".to_string(),
            on_going: true,
            ..Event::default()
        });
        store
    }

    // A panic while holding the guard cannot leave the map half-written,
    // so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stores `event` under its id, replacing any entry with the same key.
    pub fn insert(&self, event: Event) -> Event {
        let mut events = self.lock();
        debug!(id = %event.id, "Storing event");
        events.insert(event.id.clone(), event.clone());
        event
    }

    /// All events that have not been soft-deleted, in no particular order.
    pub fn list_visible(&self) -> Vec<Event> {
        self.lock()
            .values()
            .filter(|event| !event.soft_deleted)
            .cloned()
            .collect()
    }

    /// Looks up an event by id. Soft-deleted events are still returned.
    pub fn get(&self, id: &str) -> Option<Event> {
        self.lock().get(id).cloned()
    }

    /// Marks the event as soft-deleted and returns its updated state.
    ///
    /// Returns `None` without touching the map when the id is unknown.
    pub fn soft_delete(&self, id: &str) -> Option<Event> {
        let mut events = self.lock();
        let event = events.get_mut(id)?;
        event.soft_deleted = true;
        debug!(id = %id, "Soft-deleted event");
        Some(event.clone())
    }

    /// Number of stored events, soft-deleted ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn event(id: &str, name: &str) -> Event {
        Event {
            id: id.to_string(),
            name: name.to_string(),
            ..Event::default()
        }
    }

    #[test]
    fn test_insert_then_get() {
        let store = EventStore::new();
        let stored = store.insert(event("1", "Board games"));

        assert_eq!(store.get("1"), Some(stored));
        assert_eq!(store.get("2"), None);
    }

    #[test]
    fn test_insert_overwrites_same_key() {
        let store = EventStore::new();
        store.insert(event("1", "First"));
        store.insert(event("1", "Second"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("1").unwrap().name, "Second");
    }

    #[test]
    fn test_list_visible_on_empty_store() {
        let store = EventStore::new();
        assert!(store.list_visible().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_soft_delete_hides_from_list_but_not_get() {
        let store = EventStore::new();
        store.insert(event("1", "Karaoke"));
        store.insert(event("2", "Hike"));

        let deleted = store.soft_delete("1").unwrap();
        assert!(deleted.soft_deleted);

        let visible = store.list_visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");

        assert!(store.get("1").unwrap().soft_deleted);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_soft_delete_is_idempotent() {
        let store = EventStore::new();
        store.insert(event("1", "Karaoke"));

        let first = store.soft_delete("1").unwrap();
        let second = store.soft_delete("1").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_soft_delete_unknown_id_does_not_insert() {
        let store = EventStore::new();
        assert!(store.soft_delete("missing").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_returned_events_are_copies() {
        let store = EventStore::new();
        store.insert(event("1", "Karaoke"));

        let mut copy = store.get("1").unwrap();
        copy.name = "Changed".to_string();

        assert_eq!(store.get("1").unwrap().name, "Karaoke");
    }

    #[test]
    fn test_sample_event_is_seeded() {
        let store = EventStore::with_sample_event();
        let sample = store.get("id1").unwrap();

        assert_eq!(sample.name, "Ultimate Frisbee");
        assert!(sample.on_going);
    }

    #[test]
    fn test_concurrent_inserts_and_deletes() {
        let store = Arc::new(EventStore::new());

        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for n in 0..50 {
                        let id = format!("{worker}-{n}");
                        store.insert(event(&id, "Meetup"));
                        if n % 2 == 0 {
                            store.soft_delete(&id);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 400);
        assert_eq!(store.list_visible().len(), 200);
    }
}
