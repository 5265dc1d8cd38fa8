//! SQL access for saved posts.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::saved_posts::models::{NewSavedPost, SavedPostRow};

/// Newest first.
pub async fn list_posts(pool: &PgPool, limit: i64) -> Result<Vec<SavedPostRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedPostRow>("SELECT * FROM saved_posts ORDER BY saved_at DESC LIMIT $1")
        .bind(limit)
        .fetch_all(pool)
        .await
}

pub async fn get_post(pool: &PgPool, id: Uuid) -> Result<Option<SavedPostRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedPostRow>("SELECT * FROM saved_posts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn create_post(pool: &PgPool, post: &NewSavedPost) -> Result<SavedPostRow, sqlx::Error> {
    let id = Uuid::new_v4();
    let row = sqlx::query_as::<_, SavedPostRow>(
        r#"
        INSERT INTO saved_posts
            (id, content, author_name, post_url, likes, comments, reposts, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&post.content)
    .bind(&post.author_name)
    .bind(&post.post_url)
    .bind(post.likes)
    .bind(post.comments)
    .bind(post.reposts)
    .bind(&post.notes)
    .fetch_one(pool)
    .await?;

    info!("Saved post {id}");
    Ok(row)
}

pub async fn update_notes(
    pool: &PgPool,
    id: Uuid,
    notes: Option<&str>,
) -> Result<Option<SavedPostRow>, sqlx::Error> {
    sqlx::query_as::<_, SavedPostRow>(
        "UPDATE saved_posts SET notes = $2 WHERE id = $1 RETURNING *",
    )
    .bind(id)
    .bind(notes)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted.
pub async fn delete_post(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM saved_posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

pub async fn count_posts(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM saved_posts")
        .fetch_one(pool)
        .await
}
