use thiserror::Error;

/// Failure of a host-bridge call. The bridge reports a single generic
/// rejection kind; callers log it or propagate it, never match on it.
#[derive(Debug, Error, Clone)]
pub enum BridgeError {
    #[error("Bridge call rejected: {0}")]
    Rejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_display() {
        let error = BridgeError::Rejected("backend unreachable".to_string());

        assert_eq!(error.to_string(), "Bridge call rejected: backend unreachable");
    }

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<BridgeError>();
    }
}
