//! Row inserts for journal, article and institution records.
//!
//! All inserts are append-only and parameterized. They take any SQLite
//! executor so the orchestrator can run them inside its per-sheet
//! transactions.

use sqlx::{Executor, Sqlite};

use crate::error::Result;
use crate::models::{ArticleRecord, InstitutionRecord, JournalRecord};

pub async fn insert_journal<'e, E>(executor: E, record: &JournalRecord) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO journal (year, name, issn, eissn, article_count, zone, czech_or_slovak, fid)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(record.year)
    .bind(&record.name)
    .bind(&record.issn)
    .bind(&record.eissn)
    .bind(record.article_count)
    .bind(&record.zone)
    .bind(&record.czech_or_slovak)
    .bind(record.fid)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn insert_article<'e, E>(executor: E, record: &ArticleRecord) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO article (year, ut_wos, name, type, journal_name, issn, eissn, fid,
                             authors, vo_corresponding_author, author_count,
                             czech_or_slovak, vo, institution_count, zone)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(record.year)
    .bind(&record.ut_wos)
    .bind(&record.name)
    .bind(&record.doc_type)
    .bind(&record.journal_name)
    .bind(&record.issn)
    .bind(&record.eissn)
    .bind(record.fid)
    .bind(&record.authors)
    .bind(&record.vo_corresponding_author)
    .bind(record.author_count)
    .bind(&record.czech_or_slovak)
    .bind(&record.vo)
    .bind(record.institution_count)
    .bind(&record.zone)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn insert_institution<'e, E>(executor: E, record: &InstitutionRecord) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r#"
        INSERT INTO institution (name, ico, street, psc, town, legal_form, main_goal, created)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.name)
    .bind(record.ico)
    .bind(&record.street)
    .bind(record.psc)
    .bind(&record.town)
    .bind(&record.legal_form)
    .bind(&record.main_goal)
    .bind(record.created)
    .execute(executor)
    .await?;

    Ok(())
}
