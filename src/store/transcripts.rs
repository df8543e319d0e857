use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::services::ai::Message;

/// Per-identifier conversation transcripts for the LLM chat mode and the
/// voice flow. The record mutex is a tokio mutex: a transcript stays locked
/// across the hosted-model round trip, so turns for one identifier are
/// handled in arrival order.
#[derive(Default)]
pub struct TranscriptStore {
    inner: Mutex<HashMap<String, Arc<tokio::sync::Mutex<Vec<Message>>>>>,
}

impl TranscriptStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Arc<tokio::sync::Mutex<Vec<Message>>> {
        let mut map = self.inner.lock().unwrap();
        map.entry(id.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(Vec::new())))
            .clone()
    }
}
