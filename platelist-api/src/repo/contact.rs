//! Contact submission inbox repository

use crate::validate::NewContact;
use platelist_common::models::ContactSubmission;
use platelist_common::Result;
use sqlx::SqlitePool;

pub async fn create(pool: &SqlitePool, input: &NewContact) -> Result<ContactSubmission> {
    let result = sqlx::query("INSERT INTO contact_submissions (name, email, message) VALUES (?, ?, ?)")
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.message)
        .execute(pool)
        .await?;

    let row = sqlx::query_as("SELECT * FROM contact_submissions WHERE id = ?")
        .bind(result.last_insert_rowid())
        .fetch_one(pool)
        .await?;
    Ok(row)
}

/// Newest submissions first
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<ContactSubmission>> {
    let rows = sqlx::query_as("SELECT * FROM contact_submissions ORDER BY created_at DESC, id DESC")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn mark_read(pool: &SqlitePool, id: i64) -> Result<Option<ContactSubmission>> {
    let result = sqlx::query("UPDATE contact_submissions SET read = 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    let row = sqlx::query_as("SELECT * FROM contact_submissions WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM contact_submissions WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
