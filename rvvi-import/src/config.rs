//! Command-line configuration for rvvi-import

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments
///
/// The corpus is expected to be downloaded and extracted already; the
/// pipeline only reads the local directory tree.
#[derive(Parser, Debug)]
#[command(name = "rvvi-import")]
#[command(about = "Loads the RVVI bibliometric evaluation dataset into SQLite")]
#[command(version)]
pub struct Args {
    /// SQLite database file (created if missing)
    #[arg(short, long, env = "RVVI_DATABASE")]
    pub database: PathBuf,

    /// Root directory of the extracted evaluation corpus
    #[arg(short, long, env = "RVVI_CORPUS_DIR")]
    pub corpus_dir: PathBuf,

    /// XLSX register of research organisations; skipped when absent
    #[arg(short, long, env = "RVVI_INSTITUTIONS_FILE")]
    pub institutions_file: Option<PathBuf>,
}
