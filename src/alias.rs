use std::collections::HashMap;

use crate::error::{PunchcardError, Result};

/// Canonicalization table for author display names. Built once at startup and
/// passed around immutably; lookups are exact-match and case-sensitive, and
/// names without an entry pass through unchanged.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

/// Display-name variants known to belong to a single identity.
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("Mitch J.", "toBeOfUse"),
    ("Mitchell Jacobs", "toBeOfUse"),
];

impl AliasTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Self {
        Self::from_pairs(
            BUILTIN_ALIASES
                .iter()
                .map(|(raw, canonical)| (raw.to_string(), canonical.to_string())),
        )
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Layer extra pairs on top, replacing builtin entries on key collision.
    pub fn extend_from_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.entries.extend(pairs);
        self
    }

    pub fn resolve<'a>(&'a self, raw: &'a str) -> &'a str {
        self.entries.get(raw).map(String::as_str).unwrap_or(raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse a `RAW=CANONICAL` pair as given on the command line.
pub fn parse_alias_pair(s: &str) -> Result<(String, String)> {
    match s.split_once('=') {
        Some((raw, canonical)) if !raw.is_empty() && !canonical.is_empty() => {
            Ok((raw.to_string(), canonical.to_string()))
        }
        _ => Err(PunchcardError::Config(format!(
            "invalid alias '{s}', expected RAW=CANONICAL"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_variant_resolves_to_canonical_handle() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("Mitch J."), "toBeOfUse");
    }

    #[test]
    fn unknown_name_passes_through_unchanged() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("Linus Torvalds"), "Linus Torvalds");
    }

    #[test]
    fn resolution_is_idempotent_over_canonical_names() {
        let table = AliasTable::builtin();
        let once = table.resolve("Mitch J.");
        assert_eq!(table.resolve(once), once);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve("mitch j."), "mitch j.");
    }

    #[test]
    fn extension_pairs_replace_builtin_entries() {
        let table = AliasTable::builtin()
            .extend_from_pairs([("Mitch J.".to_string(), "someone-else".to_string())]);
        assert_eq!(table.resolve("Mitch J."), "someone-else");
    }

    #[test]
    fn alias_pair_parses_and_rejects() {
        assert_eq!(
            parse_alias_pair("A B=c").unwrap(),
            ("A B".to_string(), "c".to_string())
        );
        assert!(parse_alias_pair("no-equals").is_err());
        assert!(parse_alias_pair("=empty-raw").is_err());
        assert!(parse_alias_pair("empty-canonical=").is_err());
    }
}
