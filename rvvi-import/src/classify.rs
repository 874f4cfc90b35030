//! FORD classification derived from a file's directory location.
//!
//! The evaluation corpus encodes classification metadata in directory
//! names rather than in the data itself:
//!
//! ```text
//! 2. Engineering and Technology/2.2 Electrical engineering/Priloha_3_vysledky_x.xlsx
//! ```
//!
//! The field-of-study directory carries an ordinal prefix (`"2. "`),
//! the sub-field directory a `major.minor` FORD pair. Some sub-fields
//! nest the data files one level deeper under a `WoS` directory.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

static FORD_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)").unwrap());
static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*").unwrap());

/// Sub-directory level used by some FORD sub-fields; classification
/// directories sit one level higher for files underneath it.
const WOS_DIR: &str = "WoS";

/// Classification of a single corpus file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FordClass {
    /// Numeric FORD code, major * 10 + minor
    pub fid: i64,
    /// Sub-field directory name as found on disk, e.g. "2.2 Electrical engineering"
    pub ford_name: String,
    /// First three characters of `"major.minor"`. The upstream XLSX
    /// export embeds at most three characters of the pair in zone
    /// column headers, so "3.12" becomes "3.1".
    pub truncated: String,
    /// Field-of-study directory name with its ordinal prefix stripped
    pub field_of_study: String,
}

impl FordClass {
    /// Derive the classification for a data file from its enclosing
    /// directory names. Returns `None` when the sub-field directory
    /// does not start with a `major.minor` pair.
    pub fn from_path(file: &Path) -> Option<FordClass> {
        let mut dir = file.parent()?;
        if dir.file_name()?.to_str() == Some(WOS_DIR) {
            dir = dir.parent()?;
        }
        let ford_dir = dir.file_name()?.to_str()?;
        let field_dir = dir.parent()?.file_name()?.to_str()?;
        Self::derive(field_dir, ford_dir)
    }

    /// Core derivation from the two directory names, independent of any
    /// real directory tree.
    pub fn derive(field_dir: &str, ford_dir: &str) -> Option<FordClass> {
        let caps = FORD_PREFIX.captures(ford_dir)?;
        let major: i64 = caps[1].parse().ok()?;
        let minor: i64 = caps[2].parse().ok()?;
        let truncated = format!("{}.{}", major, minor).chars().take(3).collect();
        Some(FordClass {
            fid: major * 10 + minor,
            ford_name: ford_dir.to_string(),
            truncated,
            field_of_study: strip_ordinal_prefix(field_dir),
        })
    }

    /// Column header carrying this classification's zone in article
    /// sheets, e.g. "Pásmo v 3.1". The 3-character truncation lives
    /// behind this one seam.
    pub fn zone_column(&self) -> String {
        format!("Pásmo v {}", self.truncated)
    }
}

/// Strip a leading `"N. "` ordinal from a field-of-study directory name.
pub fn strip_ordinal_prefix(name: &str) -> String {
    ORDINAL_PREFIX.replace(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fid_from_major_minor() {
        let class = FordClass::derive("1. Natural Sciences", "1.4 Chemical sciences").unwrap();
        assert_eq!(class.fid, 14);
        assert_eq!(class.ford_name, "1.4 Chemical sciences");
    }

    #[test]
    fn test_single_digit_pair() {
        let class = FordClass::derive("9. X", "9.9").unwrap();
        assert_eq!(class.fid, 99);
        assert_eq!(class.truncated, "9.9");
    }

    #[test]
    fn test_double_digit_minor_truncates() {
        let class = FordClass::derive("3. Medical and Health Sciences", "3.12 Some FORD").unwrap();
        assert_eq!(class.fid, 3 * 10 + 12);
        assert_eq!(class.truncated, "3.1");
        assert_eq!(class.zone_column(), "Pásmo v 3.1");
    }

    #[test]
    fn test_truncated_never_longer_than_three() {
        for (field, ford) in [("1. A", "1.1 x"), ("2. B", "2.10 y"), ("3. C", "12.34 z")] {
            let class = FordClass::derive(field, ford).unwrap();
            assert!(class.truncated.chars().count() <= 3, "{:?}", class);
        }
    }

    #[test]
    fn test_not_derivable_without_digit_prefix() {
        assert!(FordClass::derive("2. Engineering", "Miscellaneous").is_none());
        assert!(FordClass::derive("2. Engineering", "").is_none());
    }

    #[test]
    fn test_strip_ordinal_prefix() {
        assert_eq!(
            strip_ordinal_prefix("2. Engineering and Technology"),
            "Engineering and Technology"
        );
        assert_eq!(strip_ordinal_prefix("No prefix"), "No prefix");
    }

    #[test]
    fn test_from_path() {
        let path = Path::new(
            "corpus/2. Engineering and Technology/2.2 Electrical engineering/Priloha_3_vysledky_x.xlsx",
        );
        let class = FordClass::from_path(path).unwrap();
        assert_eq!(class.fid, 22);
        assert_eq!(class.field_of_study, "Engineering and Technology");
    }

    #[test]
    fn test_from_path_wos_subdirectory() {
        let path = Path::new(
            "corpus/1. Natural Sciences/1.4 Chemical sciences/WoS/Priloha_2_casopisy_x.xlsx",
        );
        let class = FordClass::from_path(path).unwrap();
        assert_eq!(class.fid, 14);
        assert_eq!(class.field_of_study, "Natural Sciences");
        assert_eq!(class.ford_name, "1.4 Chemical sciences");
    }
}
