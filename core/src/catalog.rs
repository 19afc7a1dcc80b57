/// Message returned for any language code the catalog does not know.
pub const FALLBACK_MESSAGE: &str = "Unsupported language";

const ENTRIES: &[(&str, &str)] = &[
    ("en", "Hello World"),
    ("es", "Hola Mundo"),
    ("fr", "Bonjour le monde"),
    ("de", "Hallo Welt"),
    ("it", "Ciao mondo"),
];

/// The fixed mapping from language code to greeting.
///
/// The table is compiled in and read-only; there is no way to add or change
/// entries at runtime, so the catalog can be shared freely across invocations.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCatalog;

impl MessageCatalog {
    pub const fn new() -> Self {
        Self
    }

    /// Resolves `code` to its greeting, or [`FALLBACK_MESSAGE`] when unknown.
    ///
    /// Matching is exact and case-sensitive.
    pub fn lookup(&self, code: &str) -> &'static str {
        ENTRIES
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, message)| *message)
            .unwrap_or(FALLBACK_MESSAGE)
    }

    pub fn supports(&self, code: &str) -> bool {
        ENTRIES.iter().any(|(key, _)| *key == code)
    }

    /// Known codes, in table order.
    pub fn codes(&self) -> impl Iterator<Item = &'static str> {
        ENTRIES.iter().map(|(key, _)| *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_codes() {
        let catalog = MessageCatalog::new();
        assert_eq!(catalog.lookup("en"), "Hello World");
        assert_eq!(catalog.lookup("es"), "Hola Mundo");
        assert_eq!(catalog.lookup("fr"), "Bonjour le monde");
        assert_eq!(catalog.lookup("de"), "Hallo Welt");
        assert_eq!(catalog.lookup("it"), "Ciao mondo");
    }

    #[test]
    fn test_lookup_unknown_codes_fall_back() {
        let catalog = MessageCatalog::new();
        for code in ["", "xx", "EN", "en-US", " en", "english"] {
            assert_eq!(catalog.lookup(code), FALLBACK_MESSAGE, "code {code:?}");
        }
    }

    #[test]
    fn test_entries_are_non_empty_and_distinct_from_fallback() {
        for (key, message) in ENTRIES {
            assert!(!key.is_empty());
            assert!(!message.is_empty());
            assert_ne!(*message, FALLBACK_MESSAGE);
        }
    }

    #[test]
    fn test_supports_matches_lookup() {
        let catalog = MessageCatalog::new();
        for code in catalog.codes() {
            assert!(catalog.supports(code));
            assert_ne!(catalog.lookup(code), FALLBACK_MESSAGE);
        }
        assert!(!catalog.supports("xx"));
        assert!(!catalog.supports(""));
    }

    #[test]
    fn test_codes_in_table_order() {
        let codes: Vec<_> = MessageCatalog::new().codes().collect();
        assert_eq!(codes, vec!["en", "es", "fr", "de", "it"]);
    }
}
