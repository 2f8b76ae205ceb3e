//! Review repository for database operations.
//!
//! Queries use the runtime `query_as` API (no compile-time checked macros),
//! so the crate builds without a live database.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use urban_elephant_core::ReviewId;

use super::RepositoryError;
use crate::models::review::{NewReview, Review};

/// Raw row shape for the `reviews` table.
#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i32,
    name: String,
    email: String,
    rating: i32,
    comment: String,
    product: Option<String>,
    verified: bool,
    created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: ReviewId::new(row.id),
            name: row.name,
            email: row.email,
            rating: row.rating,
            comment: row.comment,
            product: row.product,
            verified: row.verified,
            created_at: row.created_at,
        }
    }
}

/// Repository for review database operations.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All reviews, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Review>, RepositoryError> {
        let rows = sqlx::query_as::<_, ReviewRow>(
            r"
            SELECT id, name, email, rating, comment, product, verified, created_at
            FROM reviews
            ORDER BY created_at DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    /// Insert a validated review.
    ///
    /// `verified` is always stored false; it is flipped manually once the
    /// purchase is confirmed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, review: &NewReview) -> Result<Review, RepositoryError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r"
            INSERT INTO reviews (name, email, rating, comment, product, verified)
            VALUES ($1, $2, $3, $4, $5, FALSE)
            RETURNING id, name, email, rating, comment, product, verified, created_at
            ",
        )
        .bind(&review.name)
        .bind(&review.email)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(&review.product)
        .fetch_one(self.pool)
        .await?;

        Ok(Review::from(row))
    }
}
