use anyhow::{Context, Result};
use shared::config::ConnectionPool;
use tracing::info;

pub async fn init(pool: &ConnectionPool) -> Result<()> {
    ensure_schema(pool)
        .await
        .context("Failed to ensure products table")?;

    seed_if_empty(pool)
        .await
        .context("Failed to seed products table")?;

    Ok(())
}

async fn ensure_schema(pool: &ConnectionPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            description TEXT,
            stock INTEGER NOT NULL DEFAULT 0,
            price REAL NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn seed_if_empty(pool: &ConnectionPool) -> Result<()> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO products (name, description, stock, price)
        VALUES
            ('Sample Product A', 'Demo product A', 10, 19.99),
            ('Sample Product B', 'Demo product B', 5, 49.50)
        "#,
    )
    .execute(pool)
    .await?;

    info!("🌱 Seeded products table with sample rows");

    Ok(())
}
