use std::sync::Arc;

use async_trait::async_trait;

use crate::content::ContentDocument;

use super::errors::BridgeError;

/// Session half of the host bridge.
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Mint a fresh opaque session identifier.
    async fn get_uuid(&self) -> Result<String, BridgeError>;

    /// Register `session_id` with the backend. Any result payload is
    /// ignored by callers.
    async fn start_session(&self, session_id: &str) -> Result<(), BridgeError>;
}

/// Content half of the host bridge.
#[async_trait]
pub trait ContentService: Send + Sync {
    /// Fetch one named document from the backend.
    async fn read_from_file(&self, file_name: &str) -> Result<ContentDocument, BridgeError>;
}

#[async_trait]
impl<S: SessionService + ?Sized> SessionService for Arc<S> {
    async fn get_uuid(&self) -> Result<String, BridgeError> {
        (**self).get_uuid().await
    }

    async fn start_session(&self, session_id: &str) -> Result<(), BridgeError> {
        (**self).start_session(session_id).await
    }
}

#[async_trait]
impl<C: ContentService + ?Sized> ContentService for Arc<C> {
    async fn read_from_file(&self, file_name: &str) -> Result<ContentDocument, BridgeError> {
        (**self).read_from_file(file_name).await
    }
}
