mod jar;
mod store;

pub use jar::{CookieJar, InMemoryCookieJar};
pub use store::CookieStore;
