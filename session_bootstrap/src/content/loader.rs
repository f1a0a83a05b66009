use crate::bridge::ContentService;

use super::config::CONTENT_FILE_NAME;
use super::types::{ContentDocument, PageSink};

/// Fetches one named content document from the host bridge and writes its
/// `title` and `content` fields into the page.
pub struct ContentLoader<C: ContentService> {
    service: C,
}

impl<C: ContentService> ContentLoader<C> {
    pub fn new(service: C) -> Self {
        Self { service }
    }

    /// Fetch and render the configured document. A bridge rejection is
    /// logged and leaves the page regions untouched.
    pub async fn populate(&self, page: &dyn PageSink) {
        self.populate_from(&CONTENT_FILE_NAME, page).await
    }

    /// Same as [`populate`](Self::populate), for an explicit document name.
    pub async fn populate_from(&self, file_name: &str, page: &dyn PageSink) {
        match self.service.read_from_file(file_name).await {
            Ok(document) => render(&document, page),
            Err(e) => tracing::error!("Failed to load content {file_name}: {e}"),
        }
    }
}

fn render(document: &ContentDocument, page: &dyn PageSink) {
    page.write_region("title", &document.title);
    page.write_region("content", &document.content);
}

#[cfg(test)]
mod tests {
    use crate::bridge::InMemoryBridge;
    use crate::content::InMemoryPage;

    use super::*;

    #[tokio::test]
    async fn test_populate_writes_title_and_content_regions() {
        // Given a bridge serving the requested document
        let bridge = InMemoryBridge::new();
        bridge.seed_document(
            "cap1.json",
            ContentDocument {
                title: "Chapter 1".to_string(),
                content: "<p>Hello</p>".to_string(),
            },
        );
        let page = InMemoryPage::new();

        // When populating the page
        ContentLoader::new(bridge).populate_from("cap1.json", &page).await;

        // Then both regions hold the document fields verbatim
        assert_eq!(page.region("title"), Some("Chapter 1".to_string()));
        assert_eq!(page.region("content"), Some("<p>Hello</p>".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_failure_leaves_regions_unpopulated() {
        // Given a bridge with no documents
        let bridge = InMemoryBridge::new();
        let page = InMemoryPage::new();

        // When populating the page
        ContentLoader::new(bridge).populate_from("missing.json", &page).await;

        // Then the rejection was logged and nothing was written
        assert_eq!(page.region("title"), None);
        assert_eq!(page.region("content"), None);
    }
}
