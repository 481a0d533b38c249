//! Ranked list engine
//!
//! Maintains the ordered membership of each top-ten list. All mutations
//! arrive as a bulk replace: the caller sends the entire desired ordered
//! set and the engine reconciles storage to match it in one transaction.
//! Rank values must form a contiguous 1..=N range; anything else is
//! rejected outright rather than repaired.

use crate::repo::reviews;
use platelist_common::models::Review;
use platelist_common::{Error, Result};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::BTreeSet;

/// Hard capacity of a top-ten list
pub const MAX_ITEMS: usize = 10;

/// One desired list entry in a bulk replace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSpec {
    pub review_id: i64,
    pub rank: i64,
}

/// A list entry joined against its full review row, ready for rendering
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedItem {
    pub review: Review,
    pub rank: i64,
}

/// Validate a desired item set: capacity, rank contiguity, unique members
///
/// Fail closed: a non-contiguous or duplicate-rank array rejects the whole
/// replace, it is never auto-repaired.
fn validate_items(items: &[ItemSpec]) -> Result<()> {
    if items.len() > MAX_ITEMS {
        return Err(Error::InvalidInput(format!(
            "a list holds at most {} items, got {}",
            MAX_ITEMS,
            items.len()
        )));
    }

    let mut ranks = BTreeSet::new();
    let mut members = BTreeSet::new();
    for item in items {
        if !ranks.insert(item.rank) {
            return Err(Error::InvalidInput(format!("duplicate rank {}", item.rank)));
        }
        if !members.insert(item.review_id) {
            return Err(Error::InvalidInput(format!(
                "review {} appears more than once",
                item.review_id
            )));
        }
    }

    // With unique ranks, 1..=N contiguity reduces to the right min and max
    let n = items.len() as i64;
    if n > 0 && (ranks.first() != Some(&1) || ranks.last() != Some(&n)) {
        return Err(Error::InvalidInput(format!(
            "ranks must form a contiguous 1..{} range",
            n
        )));
    }

    Ok(())
}

/// Atomically replace the membership and order of a list
///
/// Deletes all existing items and inserts the provided set inside one
/// transaction, so no reader observes a partially-written list. The prior
/// state survives any validation or storage failure.
pub async fn replace_items(pool: &SqlitePool, list_id: i64, items: &[ItemSpec]) -> Result<()> {
    validate_items(items)?;

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM top_ten_list_items WHERE list_id = ?")
        .bind(list_id)
        .execute(&mut *tx)
        .await?;

    for item in items {
        sqlx::query("INSERT INTO top_ten_list_items (list_id, review_id, rank) VALUES (?, ?, ?)")
            .bind(list_id)
            .bind(item.review_id)
            .bind(item.rank)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;

    Ok(())
}

/// Current items of a list, rank ascending, joined against full reviews
pub async fn get_items(pool: &SqlitePool, list_id: i64) -> Result<Vec<RankedItem>> {
    let specs: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT review_id, rank FROM top_ten_list_items WHERE list_id = ? ORDER BY rank",
    )
    .bind(list_id)
    .fetch_all(pool)
    .await?;

    let mut items = Vec::with_capacity(specs.len());
    for (review_id, rank) in specs {
        if let Some(review) = reviews::get_by_id(pool, review_id).await? {
            items.push(RankedItem { review, rank });
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(review_id: i64, rank: i64) -> ItemSpec {
        ItemSpec { review_id, rank }
    }

    #[test]
    fn test_validate_accepts_contiguous_ranks() {
        assert!(validate_items(&[]).is_ok());
        assert!(validate_items(&[spec(7, 1)]).is_ok());
        assert!(validate_items(&[spec(7, 1), spec(9, 2), spec(3, 3)]).is_ok());
        // Order of arrival does not matter, only the rank set
        assert!(validate_items(&[spec(3, 3), spec(7, 1), spec(9, 2)]).is_ok());
    }

    #[test]
    fn test_validate_rejects_over_capacity() {
        let items: Vec<ItemSpec> = (1..=11).map(|i| spec(i, i)).collect();
        assert!(validate_items(&items).is_err());
    }

    #[test]
    fn test_validate_rejects_gaps() {
        assert!(validate_items(&[spec(7, 1), spec(9, 3)]).is_err());
        assert!(validate_items(&[spec(7, 2)]).is_err());
        assert!(validate_items(&[spec(7, 0), spec(9, 1)]).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_ranks() {
        assert!(validate_items(&[spec(7, 1), spec(9, 1)]).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_members() {
        assert!(validate_items(&[spec(7, 1), spec(7, 2)]).is_err());
    }
}
