//! Record normalization and classification pipeline for the RVVI
//! bibliometric evaluation dataset.
//!
//! The corpus arrives as nested directories of XLSX exports, one
//! directory per FORD sub-field; classification metadata lives in the
//! directory names, not in the data. This crate reconciles that
//! directory convention, the Czech column headers and the pre-seeded
//! reference table into validated journal, article and institution
//! rows in a SQLite database.

pub mod classify;
pub mod config;
pub mod db;
pub mod error;
pub mod ingest;
pub mod models;
pub mod sheet;

pub use classify::FordClass;
pub use error::{IngestError, Result, RowError, SheetError};
pub use ingest::IngestStats;
