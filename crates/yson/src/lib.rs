//! docboard-yson — formatting for YSON document snapshots.
//!
//! YSON is the superset-of-JSON serialization used for document
//! snapshots: plain JSON objects, arrays and string literals, extended
//! with typed value constructors such as `Counter(...)`, `Text(...)` and
//! `Tree(...)`. Snapshots arrive over RPC as compact single-line
//! strings; this crate re-indents them for display.

pub mod error;
pub mod format;
pub mod types;

pub use error::YsonFormatError;
pub use format::{format, format_with_indent, strip_whitespace, YsonFormatter, YsonFormatterOptions};
pub use types::YsonType;
