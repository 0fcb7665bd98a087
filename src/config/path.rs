//! Dotted path handling.
//!
//! A path such as `"server.tls.port"` names a location in the document by
//! descending through object keys. There is no escape syntax, so a key that
//! itself contains a `.` cannot be addressed.

/// Separator between path segments.
pub const DELIMITER: char = '.';

/// Splits a dotted path into its segments.
///
/// The empty path yields no segments and refers to the document root.
/// Consecutive delimiters produce empty segments, which address literal
/// empty-string keys.
pub fn split_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(DELIMITER).collect()
}
