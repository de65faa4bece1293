//! Event operations independent of the HTTP framework.
//!
//! Handlers hand in already-read request parts (content type, body bytes,
//! id or raw path) and get back either an [`Event`] or an [`AppError`]
//! that maps onto the response status.

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::Event;
use crate::services::ids::IdGenerator;
use crate::store::EventStore;
use crate::utils::error::AppError;
use crate::utils::response::APPLICATION_JSON;

/// Collection prefix of the single-event path, `/events/{id}`.
const EVENTS_SEGMENT: &str = "events";

pub struct EventService {
    store: Arc<EventStore>,
    ids: IdGenerator,
}

impl EventService {
    pub fn new(store: Arc<EventStore>) -> Self {
        Self {
            store,
            ids: IdGenerator::new(),
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Every event that has not been soft-deleted.
    pub fn list(&self) -> Vec<Event> {
        let events = self.store.list_visible();
        debug!(count = events.len(), "Listed events");
        events
    }

    /// Decodes a new event from `body` and stores it under a fresh id.
    ///
    /// `content_type` is the raw header value, `None` when the header is
    /// absent. Any client-supplied `id` is discarded.
    pub fn create(&self, content_type: Option<&str>, body: &[u8]) -> Result<Event, AppError> {
        let actual = content_type.unwrap_or_default();
        if !is_json_media_type(actual) {
            return Err(AppError::UnsupportedMediaType {
                expected: APPLICATION_JSON,
                actual: actual.to_string(),
            });
        }

        let mut event: Event =
            serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))?;
        event.id = self.ids.next_id();

        let event = self.store.insert(event);
        info!(id = %event.id, name = %event.name, "Created event");
        Ok(event)
    }

    pub fn get(&self, id: &str) -> Result<Event, AppError> {
        self.store.get(id).ok_or_else(|| not_found(id))
    }

    pub fn soft_delete(&self, id: &str) -> Result<Event, AppError> {
        let event = self.store.soft_delete(id).ok_or_else(|| not_found(id))?;
        info!(id = %id, "Soft-deleted event");
        Ok(event)
    }

    /// Same as [`EventService::get`], taking the raw request path.
    pub fn get_by_path(&self, path: &str) -> Result<Event, AppError> {
        let id = event_id_from_path(path).ok_or_else(|| path_not_found(path))?;
        self.get(id)
    }

    /// Same as [`EventService::soft_delete`], taking the raw request path.
    pub fn soft_delete_by_path(&self, path: &str) -> Result<Event, AppError> {
        let id = event_id_from_path(path).ok_or_else(|| path_not_found(path))?;
        self.soft_delete(id)
    }
}

/// Extracts `{id}` from a path shaped exactly like `/events/{id}`.
pub fn event_id_from_path(path: &str) -> Option<&str> {
    let mut parts = path.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(""), Some(EVENTS_SEGMENT), Some(id), None) => Some(id),
        _ => None,
    }
}

fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case(APPLICATION_JSON)
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Event with id '{}' was not found", id))
}

fn path_not_found(path: &str) -> AppError {
    AppError::NotFound(format!("No event at path '{}'", path))
}
