//! Repository for the `reimbursements` table.
//!
//! Rows are insert-only: nothing in the system edits or removes a request
//! once it has been recorded.

use reimburse_core::types::DbId;
use sqlx::PgPool;

use crate::models::reimbursement::{CreateReimbursement, Reimbursement};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, date, amount, description, receipt_file, created_at";

/// Provides insert and lookup operations for reimbursement requests.
pub struct ReimbursementRepo;

impl ReimbursementRepo {
    /// Insert a new reimbursement request, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReimbursement,
    ) -> Result<Reimbursement, sqlx::Error> {
        let query = format!(
            "INSERT INTO reimbursements (date, amount, description, receipt_file)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reimbursement>(&query)
            .bind(input.date)
            .bind(input.amount)
            .bind(&input.description)
            .bind(&input.receipt_file)
            .fetch_one(pool)
            .await
    }

    /// Find a reimbursement request by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Reimbursement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reimbursements WHERE id = $1");
        sqlx::query_as::<_, Reimbursement>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of recorded requests.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reimbursements")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
