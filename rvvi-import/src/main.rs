//! rvvi-import - loads the RVVI "Hodnocení" bibliometric evaluation
//! dataset (journals, articles, institutions) into a SQLite database.

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::SqlitePool;
use tracing::info;

use rvvi_import::config::Args;
use rvvi_import::ingest;
use rvvi_import::sheet::XlsxOpener;
use rvvi_import::{db, IngestStats};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    info!("Starting rvvi-import v{}", env!("CARGO_PKG_VERSION"));
    info!("Database: {}", args.database.display());
    info!("Corpus: {}", args.corpus_dir.display());

    let pool = db::init_pool(&args.database)
        .await
        .context("Failed to open database")?;
    info!("Database connection established");

    let mut stats = IngestStats::default();
    let result = run(&pool, &args, &mut stats).await;

    // The pool is released whether the run succeeded or not
    pool.close().await;

    info!(
        "Run finished: {} files processed, {} files skipped, {} rows inserted, {} rows rejected",
        stats.files_processed, stats.files_skipped, stats.rows_inserted, stats.rows_skipped
    );
    result
}

async fn run(pool: &SqlitePool, args: &Args, stats: &mut IngestStats) -> Result<()> {
    let opener = XlsxOpener;

    if let Some(path) = &args.institutions_file {
        let phase = ingest::ingest_institutions(pool, path, &opener)
            .await
            .context("Institution ingestion failed")?;
        stats.merge(phase);
    }

    let phase = ingest::ingest_corpus(pool, &args.corpus_dir, &opener)
        .await
        .context("Corpus ingestion failed")?;
    stats.merge(phase);

    Ok(())
}
