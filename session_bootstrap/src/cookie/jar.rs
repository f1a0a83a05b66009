use std::sync::{Arc, Mutex};

/// The ambient cookie jar, injected so the bootstrap logic can run without a
/// real browser environment.
///
/// Reads return the jar in `document.cookie` shape: `name=value` pairs
/// joined by `"; "`, attributes stripped. Writes take one full cookie entry
/// (`name=value; expires=...; path=/`) and are fire-and-forget: a rejected
/// write is not observable from this side of the boundary.
pub trait CookieJar: Send + Sync {
    /// Full raw jar string. Empty string for an empty jar.
    fn raw_cookies(&self) -> String;

    /// Store one cookie entry. Everything past the first `;` is an
    /// attribute, consumed by the jar and never surfaced in reads.
    fn write_cookie(&self, entry: &str);
}

impl<J: CookieJar + ?Sized> CookieJar for &J {
    fn raw_cookies(&self) -> String {
        (**self).raw_cookies()
    }

    fn write_cookie(&self, entry: &str) {
        (**self).write_cookie(entry)
    }
}

impl<J: CookieJar + ?Sized> CookieJar for Arc<J> {
    fn raw_cookies(&self) -> String {
        (**self).raw_cookies()
    }

    fn write_cookie(&self, entry: &str) {
        (**self).write_cookie(entry)
    }
}

/// In-memory jar with browser read-back semantics: only the `name=value`
/// part of a written entry is retained, and a write replaces an existing
/// entry with the same name (last-write-wins).
#[derive(Default)]
pub struct InMemoryCookieJar {
    entries: Mutex<Vec<(String, String)>>,
}

impl InMemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar from a raw `"a=1; b=2"` string. Duplicate names are kept
    /// as-is; the jar permits them (other scripts may write cookies under
    /// paths this store never touches).
    pub fn with_raw(raw: &str) -> Self {
        let entries = raw
            .split(';')
            .filter(|segment| !segment.trim().is_empty())
            .filter_map(|segment| {
                segment
                    .trim_start_matches(' ')
                    .split_once('=')
                    .map(|(name, value)| (name.to_string(), value.to_string()))
            })
            .collect();

        Self {
            entries: Mutex::new(entries),
        }
    }
}

impl CookieJar for InMemoryCookieJar {
    fn raw_cookies(&self) -> String {
        self.entries
            .lock()
            .expect("cookie jar lock poisoned")
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write_cookie(&self, entry: &str) {
        let pair = entry.split(';').next().unwrap_or("");
        let Some((name, value)) = pair.split_once('=') else {
            tracing::debug!("Discarding malformed cookie entry: {entry}");
            return;
        };

        let mut entries = self.entries.lock().expect("cookie jar lock poisoned");
        if let Some(slot) = entries.iter_mut().find(|(n, _)| n == name) {
            slot.1 = value.to_string();
        } else {
            entries.push((name.to_string(), value.to_string()));
        }
    }
}
