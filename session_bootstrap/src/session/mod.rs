mod bootstrap;
mod config;
mod errors;

pub use bootstrap::{BootstrapOutcome, SessionBootstrapper};
pub use config::{SESSION_COOKIE_MAX_AGE_DAYS, SESSION_COOKIE_NAME};
pub use errors::SessionError;
