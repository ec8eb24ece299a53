//! Reimbursement request entity model and DTOs.

use chrono::NaiveDate;
use reimburse_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reimbursements` table.
///
/// Serialized in camelCase, which is the shape returned to clients.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reimbursement {
    pub id: DbId,
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    /// Public path of the stored receipt, e.g. `/uploads/receipt-1.png`.
    pub receipt_file: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new reimbursement request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReimbursement {
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub receipt_file: String,
}
