//! session-bootstrap - Page-load bootstrap for a desktop application shell
//!
//! On page load this crate (a) establishes or resumes a session identifier
//! through a browser-style cookie plus an obtain/register handshake against
//! a host bridge, and (b) fetches one named content document and writes it
//! into the page. The cookie jar and the bridge are injected capabilities,
//! so everything here runs without a real browser environment.

mod bridge;
mod content;
mod cookie;
mod session;

pub use bridge::{BridgeError, ContentService, InMemoryBridge, SessionService};
pub use content::{CONTENT_FILE_NAME, ContentDocument, ContentLoader, InMemoryPage, PageSink};
pub use cookie::{CookieJar, CookieStore, InMemoryCookieJar};
pub use session::{
    BootstrapOutcome, SESSION_COOKIE_MAX_AGE_DAYS, SESSION_COOKIE_NAME, SessionBootstrapper,
    SessionError,
};
