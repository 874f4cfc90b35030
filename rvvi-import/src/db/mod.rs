//! Persistence layer: SQLite via sqlx.
//!
//! One pool for the whole run; the pipeline is a single logical writer
//! (one file, one sheet, one row at a time), so there is no contention
//! to manage.

pub mod fields;
pub mod records;

use std::path::Path;

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::Result;

/// The six top-level scientific domains of the evaluation methodology.
/// Seeded once; read-only to the pipeline afterwards.
const FIELDS_OF_STUDY: [&str; 6] = [
    "Natural Sciences",
    "Engineering and Technology",
    "Medical and Health Sciences",
    "Agricultural and Veterinary Sciences",
    "Social Sciences",
    "Humanities and the Arts",
];

/// Open (or create) the database file and bring the schema up.
pub async fn init_pool(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // mode=rwc: read, write, create
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    debug!("Connecting to database: {}", db_url);

    let pool = SqlitePool::connect(&db_url).await?;
    init_schema(&pool).await?;

    Ok(pool)
}

/// Create the destination tables if missing and seed `field_of_study`.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS field_of_study (
            sid INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS field_ford (
            fid INTEGER PRIMARY KEY,
            sid INTEGER NOT NULL REFERENCES field_of_study(sid),
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS journal (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year INTEGER NOT NULL,
            name TEXT NOT NULL,
            issn TEXT,
            eissn TEXT,
            article_count INTEGER,
            zone TEXT NOT NULL,
            czech_or_slovak TEXT NOT NULL,
            fid INTEGER NOT NULL REFERENCES field_ford(fid)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS article (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            year INTEGER NOT NULL,
            ut_wos TEXT NOT NULL,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            journal_name TEXT NOT NULL,
            issn TEXT,
            eissn TEXT,
            fid INTEGER NOT NULL REFERENCES field_ford(fid),
            authors TEXT NOT NULL,
            vo_corresponding_author TEXT,
            author_count INTEGER,
            czech_or_slovak TEXT NOT NULL,
            vo TEXT NOT NULL,
            institution_count INTEGER NOT NULL,
            zone TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS institution (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            ico INTEGER NOT NULL,
            street TEXT NOT NULL,
            psc INTEGER NOT NULL,
            town TEXT NOT NULL,
            legal_form TEXT NOT NULL,
            main_goal TEXT NOT NULL,
            created TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    seed_fields_of_study(pool).await?;

    info!("Database schema initialized");
    Ok(())
}

async fn seed_fields_of_study(pool: &SqlitePool) -> Result<()> {
    for name in FIELDS_OF_STUDY {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM field_of_study WHERE name = ?)")
                .bind(name)
                .fetch_one(pool)
                .await?;

        if !exists {
            sqlx::query("INSERT INTO field_of_study (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await?;
            debug!("Seeded field of study '{}'", name);
        }
    }
    Ok(())
}
