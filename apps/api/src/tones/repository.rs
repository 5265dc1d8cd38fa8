//! SQL access for custom tones. Errors stay as `sqlx::Error` so the HTTP
//! layer can sanitize them.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::tones::models::{CustomToneRow, ToneInput};

pub async fn list_tones(pool: &PgPool) -> Result<Vec<CustomToneRow>, sqlx::Error> {
    sqlx::query_as::<_, CustomToneRow>("SELECT * FROM custom_tones ORDER BY name ASC")
        .fetch_all(pool)
        .await
}

pub async fn get_tone(pool: &PgPool, id: Uuid) -> Result<Option<CustomToneRow>, sqlx::Error> {
    sqlx::query_as::<_, CustomToneRow>("SELECT * FROM custom_tones WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_tone(pool: &PgPool, input: &ToneInput) -> Result<CustomToneRow, sqlx::Error> {
    let id = Uuid::new_v4();
    let row = sqlx::query_as::<_, CustomToneRow>(
        r#"
        INSERT INTO custom_tones (id, name, description, example_post)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.example_post)
    .fetch_one(pool)
    .await?;

    info!("Created custom tone {id} ({})", input.name);
    Ok(row)
}

/// Replaces a tone's definition. `None` when the tone doesn't exist.
pub async fn update_tone(
    pool: &PgPool,
    id: Uuid,
    input: &ToneInput,
) -> Result<Option<CustomToneRow>, sqlx::Error> {
    sqlx::query_as::<_, CustomToneRow>(
        r#"
        UPDATE custom_tones
        SET name = $2, description = $3, example_post = $4, updated_at = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(&input.example_post)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted.
pub async fn delete_tone(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM custom_tones WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_tones(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM custom_tones")
        .fetch_one(pool)
        .await
}
