use std::sync::LazyLock;

pub static CONTENT_FILE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("CONTENT_FILE_NAME")
        .ok()
        .unwrap_or("cap1.json".to_string())
});
