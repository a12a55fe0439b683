use anyhow::{Context, Result};
use shared::config::ConnectionPool;
use tracing::info;

pub async fn init(pool: &ConnectionPool) -> Result<()> {
    ensure_schema(pool)
        .await
        .context("Failed to ensure flights table")?;

    seed_if_empty(pool)
        .await
        .context("Failed to seed flights table")?;

    Ok(())
}

async fn ensure_schema(pool: &ConnectionPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS flights (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            number INTEGER NOT NULL,
            source TEXT,
            destination TEXT,
            price REAL NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn seed_if_empty(pool: &ConnectionPool) -> Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM flights")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO flights (number, source, destination, price)
        VALUES
            (5, 'Mysore', 'Delhi', 5000.0),
            (6, 'Banglore', 'NewYork', 58000.0)
        "#,
    )
    .execute(pool)
    .await?;

    info!("🌱 Seeded flights table with sample rows");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::ConnectionManager;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn row_count(pool: &ConnectionPool) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM flights")
            .fetch_one(pool)
            .await
            .unwrap();
        count
    }

    #[tokio::test]
    async fn fresh_store_seeds_exactly_two_flights() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        init(&pool).await.unwrap();

        assert_eq!(row_count(&pool).await, 2);
    }

    #[tokio::test]
    async fn reinit_does_not_reseed() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        init(&pool).await.unwrap();
        init(&pool).await.unwrap();

        assert_eq!(row_count(&pool).await, 2);
    }

    #[tokio::test]
    async fn store_file_is_created_and_rows_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("flights_test.sqlite");
        let url = format!("sqlite://{}", db_path.display());

        {
            let pool = ConnectionManager::new_pool(&url, 1).await.unwrap();
            init(&pool).await.unwrap();

            sqlx::query("INSERT INTO flights (number, price) VALUES (9, 120.0)")
                .execute(&pool)
                .await
                .unwrap();

            pool.close().await;
        }

        assert!(db_path.exists());

        let pool = ConnectionManager::new_pool(&url, 1).await.unwrap();
        init(&pool).await.unwrap();

        assert_eq!(row_count(&pool).await, 3);
    }
}
