//! Record normalizers: one spreadsheet row in, one validated record out.
//!
//! Every free-text field has a maximum persisted length; values over
//! the cap are silently truncated. This is a deliberate lossy
//! transform inherited from the destination schema, not an error.

pub mod article;
pub mod institution;
pub mod journal;

pub use article::ArticleRecord;
pub use institution::InstitutionRecord;
pub use journal::JournalRecord;

use crate::sheet::Row;

/// ISSN and E-ISSN columns are capped at 10 characters; no checksum or
/// format validation beyond the length cap.
const ISSN_MAX: usize = 10;

/// Cut `value` to at most `max_chars` characters.
pub(crate) fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

/// Optional-null ISSN/E-ISSN column: absent cell stores NULL, anything
/// present is stringified and capped, even when not valid ISSN syntax.
pub(crate) fn issn(row: &Row, header: &str) -> Option<String> {
    row.optional_text(header).map(|s| truncate(&s, ISSN_MAX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::Scalar;

    #[test]
    fn test_issn_truncated_to_ten_chars() {
        let mut row = Row::new();
        row.set("ISSN", Scalar::Text("123456789012".into()));
        assert_eq!(issn(&row, "ISSN").unwrap(), "1234567890");
    }

    #[test]
    fn test_short_issn_unchanged() {
        let mut row = Row::new();
        row.set("ISSN", Scalar::Text("1234-5678".into()));
        assert_eq!(issn(&row, "ISSN").unwrap(), "1234-5678");
    }

    #[test]
    fn test_numeric_issn_cell_stringified() {
        let mut row = Row::new();
        row.set("ISSN", Scalar::Float(1525.5555));
        assert_eq!(issn(&row, "ISSN").unwrap(), "1525.5555");
    }

    #[test]
    fn test_absent_issn_is_null() {
        let row = Row::new();
        assert_eq!(issn(&row, "ISSN"), None);
    }
}
