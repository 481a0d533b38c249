//! Database initialization
//!
//! Creates the SQLite database on first run and brings the schema up to
//! date idempotently. Every `create_*_table` call is safe to repeat.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_schema(&pool).await?;

    Ok(pool)
}

/// Create all tables and indexes (idempotent - safe to call multiple times)
///
/// Also enables foreign key enforcement; the join tables and list items
/// rely on `ON DELETE CASCADE` for referential cleanup.
pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query("PRAGMA foreign_keys = ON").execute(pool).await?;

    create_reviews_table(pool).await?;
    create_cuisines_table(pool).await?;
    create_nyc_eats_categories_table(pool).await?;
    create_regions_table(pool).await?;
    create_location_categories_table(pool).await?;

    // Tag relations (pure join tables)
    create_review_cuisines_table(pool).await?;
    create_review_nyc_categories_table(pool).await?;
    create_review_location_categories_table(pool).await?;

    // Curated lists
    create_top_ten_lists_table(pool).await?;
    create_top_ten_list_items_table(pool).await?;

    // Site plumbing
    create_contact_submissions_table(pool).await?;
    create_social_settings_table(pool).await?;
    create_social_embeds_table(pool).await?;
    create_page_headers_table(pool).await?;

    Ok(())
}

/// Create the reviews table
///
/// `highlights` and `must_try` hold JSON arrays of strings as TEXT.
pub async fn create_reviews_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reviews (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            slug TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            cuisine TEXT NOT NULL,
            location TEXT NOT NULL,
            rating REAL NOT NULL,
            excerpt TEXT NOT NULL,
            image TEXT,
            price_range TEXT NOT NULL,
            full_review TEXT,
            highlights TEXT,
            atmosphere TEXT,
            must_try TEXT,
            visit_date TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_reviews_slug ON reviews(slug)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_cuisines_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cuisines (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            image TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_nyc_eats_categories_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS nyc_eats_categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            image TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_regions_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS regions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            image TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the location_categories table
///
/// A category may exist before being assigned to a region; deleting a
/// region removes the categories it owns.
async fn create_location_categories_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS location_categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            image TEXT,
            region_id INTEGER REFERENCES regions(id) ON DELETE CASCADE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_location_categories_region ON location_categories(region_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_review_cuisines_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS review_cuisines (
            review_id INTEGER NOT NULL REFERENCES reviews(id) ON DELETE CASCADE,
            cuisine_id INTEGER NOT NULL REFERENCES cuisines(id) ON DELETE CASCADE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (review_id, cuisine_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_review_cuisines_review ON review_cuisines(review_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_review_cuisines_cuisine ON review_cuisines(cuisine_id)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_review_nyc_categories_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS review_nyc_categories (
            review_id INTEGER NOT NULL REFERENCES reviews(id) ON DELETE CASCADE,
            category_id INTEGER NOT NULL REFERENCES nyc_eats_categories(id) ON DELETE CASCADE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (review_id, category_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_review_nyc_categories_review ON review_nyc_categories(review_id)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_review_nyc_categories_category ON review_nyc_categories(category_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_review_location_categories_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS review_location_categories (
            review_id INTEGER NOT NULL REFERENCES reviews(id) ON DELETE CASCADE,
            category_id INTEGER NOT NULL REFERENCES location_categories(id) ON DELETE CASCADE,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (review_id, category_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_review_location_categories_review ON review_location_categories(review_id)",
    )
    .execute(pool)
    .await?;
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_review_location_categories_category ON review_location_categories(category_id)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_top_ten_lists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS top_ten_lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            slug TEXT NOT NULL UNIQUE,
            description TEXT,
            image TEXT,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the top_ten_list_items table
///
/// The composite primary key keeps a review from appearing twice in one
/// list; the rank uniqueness and range checks back up the application-level
/// contiguity validation.
async fn create_top_ten_list_items_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS top_ten_list_items (
            list_id INTEGER NOT NULL REFERENCES top_ten_lists(id) ON DELETE CASCADE,
            review_id INTEGER NOT NULL REFERENCES reviews(id) ON DELETE CASCADE,
            rank INTEGER NOT NULL,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (list_id, review_id),
            UNIQUE (list_id, rank),
            CHECK (rank >= 1 AND rank <= 10)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_top_ten_list_items_list ON top_ten_list_items(list_id, rank)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_contact_submissions_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_submissions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT NOT NULL,
            read INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (read IN (0, 1))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_social_settings_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS social_settings (
            platform TEXT PRIMARY KEY,
            url TEXT,
            handle TEXT,
            enabled INTEGER NOT NULL DEFAULT 1,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            CHECK (enabled IN (0, 1))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_social_embeds_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS social_embeds (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            platform TEXT NOT NULL,
            title TEXT,
            url TEXT,
            embed_code TEXT NOT NULL,
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_social_embeds_platform ON social_embeds(platform, sort_order)",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_page_headers_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS page_headers (
            page TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            subtitle TEXT,
            image TEXT,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
