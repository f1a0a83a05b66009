use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// One named document served by the host bridge. Backends may attach more
/// fields; only these two are consumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDocument {
    pub title: String,
    pub content: String,
}

/// Target page regions, addressed by element id. Writes are verbatim; no
/// sanitization happens on either side of this seam.
pub trait PageSink: Send + Sync {
    fn write_region(&self, id: &str, html: &str);
}

/// Collects region writes, for tests and demos.
#[derive(Default)]
pub struct InMemoryPage {
    regions: Mutex<HashMap<String, String>>,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current contents of a region, or `None` if nothing has been
    /// written to it.
    pub fn region(&self, id: &str) -> Option<String> {
        self.regions
            .lock()
            .expect("page lock poisoned")
            .get(id)
            .cloned()
    }
}

impl PageSink for InMemoryPage {
    fn write_region(&self, id: &str, html: &str) {
        self.regions
            .lock()
            .expect("page lock poisoned")
            .insert(id.to_string(), html.to_string());
    }
}
