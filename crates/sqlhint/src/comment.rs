//! The metadata comment grammar and the three codec operations.
//!
//! The carrier is a single structured comment prefixed to the statement:
//!
//! ```text
//! /*OLAP:user=admin;transaction=12345;*/ SELECT * FROM users WHERE id = 1
//! ```
//!
//! The body may contain any characters except `*`, so the comment always
//! terminates at the first `*/` after the `OLAP:` marker and cannot nest.
//! The grammar does not validate the body's key/value structure; malformed
//! segments are tolerated and skipped by [`parse_metadata`].

use std::sync::OnceLock;

use crate::metadata::Metadata;

/// Literal prefix of the metadata comment.
pub const COMMENT_PREFIX: &str = "/*OLAP:";

/// Literal suffix of the metadata comment.
pub const COMMENT_SUFFIX: &str = "*/";

/// The compiled comment pattern, initialized once per process.
fn metadata_pattern() -> &'static regex::Regex {
    static PATTERN: OnceLock<regex::Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        regex::Regex::new(r"/\*OLAP:([^*]*)\*/").expect("invalid built-in metadata regex")
    })
}

/// Prepend a metadata comment to a SQL statement.
///
/// Entries are emitted as `key=value;` in the map's insertion order, stored
/// verbatim with no escaping. An empty map still produces the recognizable
/// `/*OLAP:*/ ` prefix. The comment and the statement are separated by
/// exactly one space.
///
/// Keys and values containing `;`, `=`, or `*` are the caller's
/// responsibility; see [`Metadata::try_insert`] for a checked alternative.
///
/// # Example
/// ```
/// use sqlhint::{Metadata, wrap_sql};
///
/// let mut m = Metadata::new();
/// m.insert("user", "admin");
/// assert_eq!(wrap_sql("SELECT 1", &m), "/*OLAP:user=admin;*/ SELECT 1");
/// ```
pub fn wrap_sql(sql: &str, metadata: &Metadata) -> String {
    let mut cap = COMMENT_PREFIX.len() + COMMENT_SUFFIX.len() + 1 + sql.len();
    for (key, value) in metadata.iter() {
        cap += key.len() + value.len() + 2; // '=' and ';'
    }
    let mut out = String::with_capacity(cap);
    out.push_str(COMMENT_PREFIX);
    for (key, value) in metadata.iter() {
        out.push_str(key);
        out.push('=');
        out.push_str(value);
        out.push(';');
    }
    out.push_str(COMMENT_SUFFIX);
    out.push(' ');
    out.push_str(sql);
    out
}

/// Extract the metadata map from the first metadata comment in `sql`.
///
/// The body of the comment is split on `;`; segments that are empty after
/// trimming are discarded, and a segment is accepted only if it contains
/// exactly one `=` (key left of it, value right, both trimmed). Everything
/// else is silently ignored, and a duplicate key overwrites the earlier
/// entry. A string without the comment pattern yields an empty map; this
/// function never fails.
pub fn parse_metadata(sql: &str) -> Metadata {
    let mut metadata = Metadata::new();
    let Some(captures) = metadata_pattern().captures(sql) else {
        return metadata;
    };
    let body = captures.get(1).map_or("", |m| m.as_str());
    for segment in body.split(';') {
        if segment.trim().is_empty() {
            continue;
        }
        let mut parts = segment.split('=');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(key), Some(value), None) => {
                metadata.insert(key.trim(), value.trim());
            }
            _ => {
                #[cfg(feature = "tracing")]
                tracing::debug!(target: "sqlhint", segment, "skipping malformed metadata segment");
            }
        }
    }
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "sqlhint", entries = metadata.len(), "parsed metadata comment");
    metadata
}

/// Remove every metadata comment from `sql` and trim the ends of the result.
///
/// All matches of the pattern are removed, not just the first (unlike
/// [`parse_metadata`], which reads only the first). Interior whitespace is
/// preserved; only leading and trailing whitespace is trimmed. This function
/// never fails.
pub fn strip_metadata(sql: &str) -> String {
    metadata_pattern().replace_all(sql, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_empty_metadata() {
        let m = Metadata::new();
        assert_eq!(wrap_sql("SELECT 1", &m), "/*OLAP:*/ SELECT 1");
    }

    #[test]
    fn parse_finds_comment_anywhere() {
        let m = parse_metadata("SELECT 1 /*OLAP:user=admin;*/");
        assert_eq!(m.get("user"), Some("admin"));
    }

    #[test]
    fn parse_trims_keys_and_values() {
        let m = parse_metadata("/*OLAP: user = admin ; tag = x ;*/ SELECT 1");
        assert_eq!(m.get("user"), Some("admin"));
        assert_eq!(m.get("tag"), Some("x"));
    }

    #[test]
    fn parse_accepts_empty_value() {
        let m = parse_metadata("/*OLAP:flag=;*/ SELECT 1");
        assert_eq!(m.get("flag"), Some(""));
    }

    #[test]
    fn parse_rejects_multi_equals_segment() {
        let m = parse_metadata("/*OLAP:a=b=c;ok=1;*/ SELECT 1");
        assert!(!m.contains_key("a"));
        assert_eq!(m.get("ok"), Some("1"));
    }

    #[test]
    fn unterminated_comment_is_not_recognized() {
        let sql = "/*OLAP:user=admin; SELECT 1";
        assert!(parse_metadata(sql).is_empty());
        assert_eq!(strip_metadata(sql), sql.trim());
    }

    #[test]
    fn body_cannot_contain_star() {
        // The leading "/*OLAP:" is not a valid comment because its body
        // would have to cross a '*'; only the second marker matches.
        let m = parse_metadata("/*OLAP:/*OLAP:a=1;*/ SELECT 1");
        assert_eq!(m.get("a"), Some("1"));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn strip_preserves_interior_whitespace() {
        let out = strip_metadata("/*OLAP:a=1;*/ SELECT  1\n FROM t ");
        assert_eq!(out, "SELECT  1\n FROM t");
    }

    #[test]
    fn strip_comment_only_yields_empty() {
        assert_eq!(strip_metadata("/*OLAP:a=1;*/"), "");
    }
}
