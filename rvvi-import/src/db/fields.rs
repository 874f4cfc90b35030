//! Reference data: field_of_study lookups and lazy field_ford inserts

use sqlx::SqlitePool;
use tracing::info;

use crate::error::Result;

/// Exact-name lookup of a field of study. `None` means the name is not
/// in the reference data and the caller should skip the file.
pub async fn field_of_study_id(pool: &SqlitePool, name: &str) -> Result<Option<i64>> {
    let sid = sqlx::query_scalar::<_, i64>("SELECT sid FROM field_of_study WHERE name = ?")
        .bind(name)
        .fetch_optional(pool)
        .await?;
    Ok(sid)
}

/// Insert the `field_ford` row for `fid` unless it already exists.
///
/// Runs directly on the pool, outside any sheet transaction, so the
/// row is committed before dependent journal/article rows reference
/// it — later files in the same run can rely on it. An existing fid is
/// left untouched.
pub async fn ensure_field_ford(pool: &SqlitePool, fid: i64, sid: i64, name: &str) -> Result<()> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM field_ford WHERE fid = ?)")
        .bind(fid)
        .fetch_one(pool)
        .await?;

    if !exists {
        sqlx::query("INSERT INTO field_ford (fid, sid, name) VALUES (?, ?, ?)")
            .bind(fid)
            .bind(sid)
            .bind(name)
            .execute(pool)
            .await?;
        info!("Registered FORD classification {} ('{}')", fid, name);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_lookup_seeded_field_of_study() {
        let pool = setup_test_db().await;
        let sid = field_of_study_id(&pool, "Engineering and Technology")
            .await
            .unwrap();
        assert!(sid.is_some());

        let missing = field_of_study_id(&pool, "Astrology").await.unwrap();
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn test_ensure_field_ford_inserts_once() {
        let pool = setup_test_db().await;
        let sid = field_of_study_id(&pool, "Natural Sciences")
            .await
            .unwrap()
            .unwrap();

        ensure_field_ford(&pool, 14, sid, "1.4 Chemical sciences")
            .await
            .unwrap();
        ensure_field_ford(&pool, 14, sid, "1.4 Chemical sciences")
            .await
            .unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM field_ford WHERE fid = 14")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
