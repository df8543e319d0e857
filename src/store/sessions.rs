use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::SessionRecord;

/// In-memory session records, keyed by session identifier. Records are
/// created lazily on first lookup and live for the process lifetime.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<String, Arc<Mutex<SessionRecord>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record for `id`, creating a fully-unset one on first
    /// contact. Callers lock the returned handle to serialize mutation
    /// per identifier.
    pub fn get(&self, id: &str) -> Arc<Mutex<SessionRecord>> {
        let mut map = self.inner.lock().unwrap();
        map.entry(id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(SessionRecord::new())))
            .clone()
    }
}
