use chrono::{Duration, Utc};

use super::jar::CookieJar;

/// Get/set access to named cookies in an injected cookie jar.
///
/// No escaping is performed: callers must keep `;` and `=` out of names and
/// values. Writes are fire-and-forget, and reads return the empty string as
/// the not-found sentinel rather than an error.
pub struct CookieStore<J: CookieJar> {
    jar: J,
}

impl<J: CookieJar> CookieStore<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    /// Write `name=value` with `path=/` and an expiry `days` days from now,
    /// formatted as an RFC 1123 date.
    pub fn set_cookie(&self, name: &str, value: &str, days: u32) {
        let expires_at = Utc::now() + Duration::milliseconds(i64::from(days) * 86_400_000);
        let expires = expires_at.format("%a, %d %b %Y %H:%M:%S GMT");

        self.jar
            .write_cookie(&format!("{name}={value}; expires={expires}; path=/"));
    }

    /// Return the value of the leftmost jar entry named `name`, or `""` if
    /// no such entry exists.
    ///
    /// Each `;`-separated segment has its leading spaces trimmed before the
    /// `name=` prefix match; later duplicates are ignored. The empty-string
    /// sentinel and the scan order are relied upon by the session check in
    /// [`SessionBootstrapper`](crate::SessionBootstrapper).
    pub fn get_cookie(&self, name: &str) -> String {
        let prefix = format!("{name}=");
        let raw = self.jar.raw_cookies();

        for segment in raw.split(';') {
            let segment = segment.trim_start_matches(' ');
            if let Some(value) = segment.strip_prefix(&prefix) {
                return value.to_string();
            }
        }

        String::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use proptest::prelude::*;

    use super::super::jar::InMemoryCookieJar;
    use super::*;

    /// Jar that records written entries verbatim, for asserting on the
    /// serialized cookie format.
    #[derive(Default)]
    struct CapturingJar {
        written: Mutex<Vec<String>>,
    }

    impl CookieJar for CapturingJar {
        fn raw_cookies(&self) -> String {
            String::new()
        }

        fn write_cookie(&self, entry: &str) {
            self.written.lock().unwrap().push(entry.to_string());
        }
    }

    #[test]
    fn test_set_cookie_entry_format() {
        // Given a store over a capturing jar
        let jar = CapturingJar::default();
        let store = CookieStore::new(&jar);

        // When setting a cookie
        store.set_cookie("sid", "abc", 7);

        // Then the written entry has the name=value; expires=...; path=/ shape
        let written = jar.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].starts_with("sid=abc; expires="));
        assert!(written[0].ends_with("; path=/"));
        assert!(written[0].contains("GMT"));
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = CookieStore::new(InMemoryCookieJar::new());

        store.set_cookie("sid", "abc-123", 30);

        assert_eq!(store.get_cookie("sid"), "abc-123");
    }

    #[test]
    fn test_set_with_zero_days_still_readable() {
        // days = 0 expires the cookie "now"; the jar model does not enforce
        // expiry, so the write itself must still round-trip
        let store = CookieStore::new(InMemoryCookieJar::new());

        store.set_cookie("sid", "abc", 0);

        assert_eq!(store.get_cookie("sid"), "abc");
    }

    #[test]
    fn test_get_on_empty_jar_returns_sentinel() {
        let store = CookieStore::new(InMemoryCookieJar::new());

        assert_eq!(store.get_cookie("sid"), "");
    }

    #[test]
    fn test_get_missing_name_returns_sentinel() {
        let store = CookieStore::new(InMemoryCookieJar::with_raw("a=1; b=2"));

        assert_eq!(store.get_cookie("c"), "");
    }

    #[test]
    fn test_get_trims_leading_spaces() {
        // Jar segments after the first carry a leading space
        let store = CookieStore::new(InMemoryCookieJar::with_raw("a=1; b=2"));

        assert_eq!(store.get_cookie("b"), "2");
    }

    #[test]
    fn test_get_leftmost_duplicate_wins() {
        let store = CookieStore::new(InMemoryCookieJar::with_raw("x=1; x=2"));

        assert_eq!(store.get_cookie("x"), "1");
    }

    #[test]
    fn test_get_requires_exact_name_prefix() {
        // "sid2=..." must not match a lookup for "sid"
        let store = CookieStore::new(InMemoryCookieJar::with_raw("sid2=other; sid=mine"));

        assert_eq!(store.get_cookie("sid"), "mine");
    }

    #[test]
    fn test_get_empty_value_is_indistinguishable_from_absent() {
        // "name=" stores an empty value, which reads back as the sentinel;
        // the session check treats both the same way
        let store = CookieStore::new(InMemoryCookieJar::with_raw("sid="));

        assert_eq!(store.get_cookie("sid"), "");
    }

    proptest! {
        #[test]
        fn prop_set_then_get_round_trips(
            name in "[A-Za-z][A-Za-z0-9_]{0,15}",
            value in "[A-Za-z0-9_-]{1,24}",
            days in 0u32..4000,
        ) {
            let store = CookieStore::new(InMemoryCookieJar::new());
            store.set_cookie(&name, &value, days);
            prop_assert_eq!(store.get_cookie(&name), value);
        }
    }
}
