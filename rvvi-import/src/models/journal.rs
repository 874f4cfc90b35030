//! Journal list normalization ("Priloha_2_casopisy_*" files)

use crate::error::RowError;
use crate::sheet::Row;

use super::issn;

/// One evaluated journal for one year and FORD classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalRecord {
    pub year: i64,
    pub name: String,
    pub issn: Option<String>,
    pub eissn: Option<String>,
    pub article_count: Option<i64>,
    pub zone: String,
    pub czech_or_slovak: String,
    pub fid: i64,
}

impl JournalRecord {
    /// Normalize one sheet row. The classification comes from the
    /// file's directory, not from the row.
    pub fn from_row(row: &Row, fid: i64) -> Result<JournalRecord, RowError> {
        Ok(JournalRecord {
            year: row.require_int("Rok uplatnění")?,
            name: row.require_text("Název")?,
            issn: issn(row, "ISSN"),
            eissn: issn(row, "E-ISSN"),
            article_count: row.optional_int("Počet dokumentů")?,
            zone: row.require_text("Pásmo")?,
            czech_or_slovak: row.require_text("Český nebo slovenský časopis")?,
            fid,
        })
    }
}
