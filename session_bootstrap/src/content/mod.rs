mod config;
mod loader;
mod types;

pub use config::CONTENT_FILE_NAME;
pub use loader::ContentLoader;
pub use types::{ContentDocument, InMemoryPage, PageSink};
