//! # sqlhint
//!
//! Embed and recover a small key/value metadata map inside a SQL statement
//! by carrying it in a structured comment prefix. The SQL engine ignores the
//! comment, so callers can propagate side-channel hints (user identity,
//! transaction id, routing tags) through systems that only accept raw SQL
//! text without changing what the statement means.
//!
//! ## Operations
//!
//! - [`wrap_sql`]: prepend a `/*OLAP:k=v;...*/ ` comment to a statement
//! - [`parse_metadata`]: read the map back from the first such comment
//! - [`strip_metadata`]: remove every such comment and trim the ends
//!
//! All three are pure functions over their inputs and are safe to call from
//! any number of threads.
//!
//! ## Example
//!
//! ```
//! use sqlhint::{Metadata, parse_metadata, strip_metadata, wrap_sql};
//!
//! let mut hints = Metadata::new();
//! hints.insert("user", "admin");
//! hints.insert("transaction", "12345");
//!
//! let wrapped = wrap_sql("SELECT * FROM users WHERE id = 1", &hints);
//! assert_eq!(
//!     wrapped,
//!     "/*OLAP:user=admin;transaction=12345;*/ SELECT * FROM users WHERE id = 1"
//! );
//!
//! assert_eq!(parse_metadata(&wrapped), hints);
//! assert_eq!(strip_metadata(&wrapped), "SELECT * FROM users WHERE id = 1");
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` impls for [`Metadata`] (map shaped)
//! - `tracing`: debug events from [`parse_metadata`] under target `sqlhint`

pub mod comment;
pub mod error;
pub mod metadata;

pub use comment::{COMMENT_PREFIX, COMMENT_SUFFIX, parse_metadata, strip_metadata, wrap_sql};
pub use error::{HintError, HintResult};
pub use metadata::Metadata;
