//! Centralized identifier handling so every generated name goes through
//! one sanitizer and one escaping rule.
//!
//! Naming hints arrive from callers and can contain anything; rendered
//! variable names must be plain Cypher identifiers. Labels, relationship
//! types and property keys are rendered verbatim when they already have
//! identifier shape and backtick-escaped otherwise.

use std::collections::HashSet;

// Reserved openCypher keywords, upper-cased for lookup
lazy_static::lazy_static! {
    static ref RESERVED_WORDS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        for word in [
            "ALL", "AND", "AS", "ASC", "ASCENDING", "BY", "CALL", "CASE",
            "CONTAINS", "CREATE", "DELETE", "DESC", "DESCENDING", "DETACH",
            "DISTINCT", "ELSE", "END", "ENDS", "EXISTS", "FALSE", "FOREACH",
            "IN", "IS", "LIMIT", "MATCH", "MERGE", "NONE", "NOT", "NULL",
            "ON", "OPTIONAL", "OR", "ORDER", "REMOVE", "RETURN", "SET",
            "SINGLE", "SKIP", "STARTS", "THEN", "TRUE", "UNION", "UNWIND",
            "WHEN", "WHERE", "WITH", "XOR", "YIELD",
        ] {
            s.insert(word);
        }
        s
    };
}

/// Check whether a word is a reserved Cypher keyword (case-insensitive).
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.contains(word.to_uppercase().as_str())
}

/// Reduce a naming hint to a valid identifier.
///
/// Every character outside `[A-Za-z0-9_]` becomes `_`, a leading digit
/// gets an underscore prefix, and an empty hint falls back to `var`.
/// Reserved-word hints are NOT rewritten here; the environment resolves
/// them with a numeric suffix so the hint stays recognizable.
pub fn sanitize_identifier(hint: &str) -> String {
    let mut out: String = hint
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if out.is_empty() {
        return "var".to_string();
    }
    if out.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    out
}

/// Escape a label, relationship type or property key for query text.
///
/// Plain identifiers pass through untouched; anything else is wrapped in
/// backticks with embedded backticks doubled.
pub fn escape_identifier(name: &str) -> String {
    let plain = !name.is_empty()
        && !name.chars().next().is_some_and(|c| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        name.to_string()
    } else {
        format!("`{}`", name.replace('`', "``"))
    }
}
