//! Article results normalization ("Priloha_3_vysledky_*" files)

use crate::classify::FordClass;
use crate::error::RowError;
use crate::sheet::Row;

use super::{issn, truncate};

const NAME_MAX: usize = 8000;
const AUTHORS_MAX: usize = 8000;
const CORRESPONDING_AUTHOR_MAX: usize = 8000;
const INSTITUTIONS_MAX: usize = 4000;

/// One evaluated article (WoS result) for one FORD classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleRecord {
    pub year: i64,
    pub ut_wos: String,
    pub name: String,
    pub doc_type: String,
    pub journal_name: String,
    pub issn: Option<String>,
    pub eissn: Option<String>,
    pub fid: i64,
    pub authors: String,
    pub vo_corresponding_author: Option<String>,
    pub author_count: Option<i64>,
    pub czech_or_slovak: String,
    /// Affiliated Czech institutions, semicolon-separated source text
    pub vo: String,
    /// Always 0. The upstream pipeline never computes this; preserved
    /// literally rather than silently corrected.
    pub institution_count: i64,
    pub zone: String,
}

impl ArticleRecord {
    /// Normalize one sheet row. The zone column header depends on the
    /// file's classification ("Pásmo v 3.1"); a sheet lacking that
    /// exact header fails the row.
    pub fn from_row(row: &Row, class: &FordClass) -> Result<ArticleRecord, RowError> {
        Ok(ArticleRecord {
            year: row.require_int("Rok uplatnění")?,
            ut_wos: row.require_text("UT WoS")?,
            name: truncate(&row.require_text("Výsledek")?, NAME_MAX),
            doc_type: row.require_text("Druh dokumentu")?,
            journal_name: row.require_text("Název časopisu")?,
            issn: issn(row, "ISSN"),
            eissn: issn(row, "E-ISSN"),
            fid: class.fid,
            authors: truncate(&row.require_text("Autor/ka")?, AUTHORS_MAX),
            vo_corresponding_author: row
                .optional_text("VO korespondenční/ho autora/autorky z ČR")
                .map(|s| truncate(&s, CORRESPONDING_AUTHOR_MAX)),
            author_count: row.optional_int("Celkový počet autorů/autorek")?,
            czech_or_slovak: row.require_text("Český/slovenský časopis")?,
            vo: truncate(&row.require_text("Seznam CZ institucí")?, INSTITUTIONS_MAX),
            institution_count: 0,
            zone: row.require_text(&class.zone_column())?,
        })
    }
}
