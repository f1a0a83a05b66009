use thiserror::Error;

use crate::bridge::BridgeError;

#[derive(Debug, Error, Clone)]
pub enum SessionError {
    /// The host bridge rejected a handshake call.
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),
}
