//! Schema bootstrap for the pokemon table

use sqlx::PgPool;

/// Create the `pokemon` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS pokemon (
            id SERIAL PRIMARY KEY,
            name VARCHAR(50) NOT NULL,
            type VARCHAR(50) NOT NULL,
            level INT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("pokemon table is ready");
    Ok(())
}
