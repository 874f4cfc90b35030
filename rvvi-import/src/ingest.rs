//! Ingestion orchestrator.
//!
//! Walks the extracted corpus, dispatches each candidate file by its
//! filename prefix, normalizes rows and persists them with one commit
//! per sheet. Per-file and per-row failures are logged and counted,
//! never fatal; database errors end the run.

use std::path::Path;

use sqlx::SqlitePool;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::classify::FordClass;
use crate::db;
use crate::error::{IngestError, Result};
use crate::models::{ArticleRecord, InstitutionRecord, JournalRecord};
use crate::sheet::WorkbookOpener;

const JOURNAL_PREFIX: &str = "Priloha_2_casopisy_";
const ARTICLE_PREFIX: &str = "Priloha_3_vysledky_";
const SPREADSHEET_EXT: &str = "xlsx";

/// What a candidate file contains, decided once per file from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Journals,
    Articles,
}

impl SourceKind {
    fn from_file_name(name: &str) -> Option<SourceKind> {
        if name.starts_with(JOURNAL_PREFIX) {
            Some(SourceKind::Journals)
        } else if name.starts_with(ARTICLE_PREFIX) {
            Some(SourceKind::Articles)
        } else {
            None
        }
    }
}

/// Run summary: how much went in, how much was skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    pub files_processed: u64,
    pub files_skipped: u64,
    pub rows_inserted: u64,
    pub rows_skipped: u64,
}

impl IngestStats {
    pub fn merge(&mut self, other: IngestStats) {
        self.files_processed += other.files_processed;
        self.files_skipped += other.files_skipped;
        self.rows_inserted += other.rows_inserted;
        self.rows_skipped += other.rows_skipped;
    }
}

/// Walk `root` and ingest every journal/article file found.
///
/// The walk is sorted by file name so runs are deterministic.
pub async fn ingest_corpus(
    pool: &SqlitePool,
    root: &Path,
    opener: &dyn WorkbookOpener,
) -> Result<IngestStats> {
    let mut stats = IngestStats::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Error accessing entry: {}", e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some(SPREADSHEET_EXT) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(kind) = SourceKind::from_file_name(name) else {
            continue;
        };

        match ingest_file(pool, path, kind, opener).await {
            Ok(file_stats) => {
                stats.files_processed += 1;
                stats.rows_inserted += file_stats.rows_inserted;
                stats.rows_skipped += file_stats.rows_skipped;
            }
            // Store failures are fatal to the run
            Err(IngestError::Database(e)) => return Err(IngestError::Database(e)),
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                stats.files_skipped += 1;
            }
        }
    }

    info!(
        "Corpus ingestion complete: {} files processed, {} skipped, {} rows inserted, {} rejected",
        stats.files_processed, stats.files_skipped, stats.rows_inserted, stats.rows_skipped
    );
    Ok(stats)
}

/// Ingest one candidate file: classify from its path, make sure the
/// reference row exists, then persist sheet by sheet.
async fn ingest_file(
    pool: &SqlitePool,
    path: &Path,
    kind: SourceKind,
    opener: &dyn WorkbookOpener,
) -> Result<IngestStats> {
    let class = FordClass::from_path(path)
        .ok_or_else(|| IngestError::Unclassifiable(path.to_path_buf()))?;

    let sid = db::fields::field_of_study_id(pool, &class.field_of_study)
        .await?
        .ok_or_else(|| IngestError::UnknownFieldOfStudy(class.field_of_study.clone()))?;

    db::fields::ensure_field_ford(pool, class.fid, sid, &class.ford_name).await?;

    info!("Processing {:?} file: {}", kind, path.display());
    let mut workbook = opener.open(path)?;

    let mut stats = IngestStats::default();
    for sheet in workbook.sheet_names() {
        let rows = workbook.rows(&sheet)?;

        let mut tx = pool.begin().await?;
        let mut inserted = 0u64;
        for row in &rows {
            let result = match kind {
                SourceKind::Journals => match JournalRecord::from_row(row, class.fid) {
                    Ok(record) => {
                        db::records::insert_journal(&mut *tx, &record).await?;
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
                SourceKind::Articles => match ArticleRecord::from_row(row, &class) {
                    Ok(record) => {
                        db::records::insert_article(&mut *tx, &record).await?;
                        Ok(())
                    }
                    Err(e) => Err(e),
                },
            };
            match result {
                Ok(()) => inserted += 1,
                Err(e) => {
                    warn!("Rejected row in sheet '{}': {}", sheet, e);
                    stats.rows_skipped += 1;
                }
            }
        }
        tx.commit().await?;

        stats.rows_inserted += inserted;
        debug!("Committed sheet '{}' ({} rows)", sheet, inserted);
    }

    Ok(stats)
}

/// Ingest the institution register workbook (first sheet), one
/// transaction for the whole file.
pub async fn ingest_institutions(
    pool: &SqlitePool,
    path: &Path,
    opener: &dyn WorkbookOpener,
) -> Result<IngestStats> {
    info!("Processing institution register: {}", path.display());
    let mut workbook = opener.open(path)?;

    let sheet_names = workbook.sheet_names();
    let Some(sheet) = sheet_names.first() else {
        warn!("Institution register has no sheets: {}", path.display());
        return Ok(IngestStats {
            files_skipped: 1,
            ..Default::default()
        });
    };
    let rows = workbook.rows(sheet)?;

    let mut stats = IngestStats {
        files_processed: 1,
        ..Default::default()
    };
    let mut tx = pool.begin().await?;
    for row in &rows {
        match InstitutionRecord::from_row(row) {
            Ok(record) => {
                db::records::insert_institution(&mut *tx, &record).await?;
                stats.rows_inserted += 1;
            }
            Err(e) => {
                warn!("Rejected institution row: {}", e);
                stats.rows_skipped += 1;
            }
        }
    }
    tx.commit().await?;

    info!("Institution register ingested: {} rows", stats.rows_inserted);
    Ok(stats)
}
