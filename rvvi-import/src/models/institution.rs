//! Institution register normalization (MŠMT list of research organisations)

use chrono::NaiveDate;

use crate::error::RowError;
use crate::sheet::Row;

use super::truncate;

const NAME_MAX: usize = 1000;
const STREET_MAX: usize = 500;
const TOWN_MAX: usize = 200;
const LEGAL_FORM_MAX: usize = 500;
const MAIN_GOAL_MAX: usize = 2000;

/// One registered research organisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionRecord {
    pub name: String,
    /// Company registration number (IČO)
    pub ico: i64,
    pub street: String,
    /// Postal code with interior spaces stripped ("170 00" -> 17000)
    pub psc: i64,
    pub town: String,
    pub legal_form: String,
    pub main_goal: String,
    pub created: NaiveDate,
}

impl InstitutionRecord {
    pub fn from_row(row: &Row) -> Result<InstitutionRecord, RowError> {
        Ok(InstitutionRecord {
            name: truncate(&row.require_text("Nazev_vyzkumne_organizace")?, NAME_MAX),
            ico: row.require_int("ICO")?,
            street: truncate(&row.require_text("Sidlo")?, STREET_MAX),
            psc: parse_psc(&row.require_text("PSC")?)?,
            town: truncate(&row.require_text("Mesto")?, TOWN_MAX),
            legal_form: truncate(&row.require_text("Pravni_forma")?, LEGAL_FORM_MAX),
            main_goal: truncate(&row.require_text("Hlavni_cil_cinnosti")?, MAIN_GOAL_MAX),
            created: row.require_date("Datum_zapisu")?,
        })
    }
}

fn parse_psc(raw: &str) -> Result<i64, RowError> {
    raw.replace(' ', "")
        .parse()
        .map_err(|_| RowError::InvalidValue {
            column: "PSC".to_string(),
            reason: format!("not a postal code: '{}'", raw),
        })
}
