mod errors;
mod memory;
mod types;

pub use errors::BridgeError;
pub use memory::InMemoryBridge;
pub use types::{ContentService, SessionService};
