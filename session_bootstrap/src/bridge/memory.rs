use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::content::ContentDocument;

use super::errors::BridgeError;
use super::types::{ContentService, SessionService};

/// In-process stand-in for the host backend, for tests and demos.
///
/// Identifiers are v4 UUIDs, registered sessions live in an in-memory set,
/// and documents are served from a seeded map instead of disk.
#[derive(Default)]
pub struct InMemoryBridge {
    sessions: Mutex<Vec<String>>,
    documents: Mutex<HashMap<String, ContentDocument>>,
}

impl InMemoryBridge {
    pub fn new() -> Self {
        tracing::debug!("Creating new in-memory host bridge");
        Self::default()
    }

    /// Make `file_name` resolvable through `read_from_file`.
    pub fn seed_document(&self, file_name: &str, document: ContentDocument) {
        self.documents
            .lock()
            .expect("bridge lock poisoned")
            .insert(file_name.to_string(), document);
    }

    /// Seed a document from its JSON source, as the real backend would read
    /// it from disk.
    pub fn seed_document_json(&self, file_name: &str, json: &str) -> Result<(), BridgeError> {
        let document: ContentDocument =
            serde_json::from_str(json).map_err(|e| BridgeError::Rejected(e.to_string()))?;
        self.seed_document(file_name, document);
        Ok(())
    }

    /// Whether `session_id` has been registered through `start_session`.
    pub fn is_registered(&self, session_id: &str) -> bool {
        self.sessions
            .lock()
            .expect("bridge lock poisoned")
            .iter()
            .any(|id| id == session_id)
    }
}

#[async_trait]
impl SessionService for InMemoryBridge {
    async fn get_uuid(&self) -> Result<String, BridgeError> {
        Ok(Uuid::new_v4().to_string())
    }

    async fn start_session(&self, session_id: &str) -> Result<(), BridgeError> {
        let mut sessions = self.sessions.lock().expect("bridge lock poisoned");

        // Re-registering a known id is a no-op success
        if !sessions.iter().any(|id| id == session_id) {
            sessions.push(session_id.to_string());
            tracing::debug!("Registered session {session_id}");
        }

        Ok(())
    }
}

#[async_trait]
impl ContentService for InMemoryBridge {
    async fn read_from_file(&self, file_name: &str) -> Result<ContentDocument, BridgeError> {
        self.documents
            .lock()
            .expect("bridge lock poisoned")
            .get(file_name)
            .cloned()
            .ok_or_else(|| BridgeError::Rejected(format!("No such document: {file_name}")))
    }
}
