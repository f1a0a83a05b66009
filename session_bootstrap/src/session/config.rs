use std::sync::LazyLock;

pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("RUST_SESSION_ID".to_string())
});

pub static SESSION_COOKIE_MAX_AGE_DAYS: LazyLock<u32> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_MAX_AGE_DAYS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(30) // Default to 30 days if not set or invalid
});
