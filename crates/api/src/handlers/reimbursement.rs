//! Handler for submitting reimbursement requests.
//!
//! A submission is a single multipart request carrying the form fields and
//! the receipt file. The receipt is written to the upload directory before
//! the row is inserted; if the insert then fails the file is left in place.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use reimburse_core::receipt;
use reimburse_core::submission::{ReceiptUpload, SubmissionFields};
use reimburse_db::models::reimbursement::{CreateReimbursement, Reimbursement};
use reimburse_db::repositories::ReimbursementRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/reimbursements
///
/// Accepts `multipart/form-data` with `date`, `amount`, `description` and a
/// `receipt` file. Returns 201 with the created record.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Reimbursement>)> {
    let submission = read_fields(multipart).await?.into_submission()?;

    let filename = receipt::receipt_filename(
        &submission.receipt.file_name,
        chrono::Utc::now().timestamp_millis(),
    );
    let receipt_file = state.store.save(&filename, &submission.receipt.data).await?;

    let input = CreateReimbursement {
        date: submission.date,
        amount: submission.amount,
        description: submission.description,
        receipt_file,
    };
    let record = ReimbursementRepo::create(&state.pool, &input)
        .await
        .inspect_err(|_| {
            tracing::warn!(
                file = %filename,
                "Receipt stored but reimbursement insert failed; file left in place"
            );
        })?;

    tracing::info!(
        id = record.id,
        amount = record.amount,
        receipt_file = %record.receipt_file,
        "Reimbursement request created"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// Collect the known multipart parts. Unknown parts are ignored; a repeated
/// part replaces the earlier value.
async fn read_fields(mut multipart: Multipart) -> AppResult<SubmissionFields> {
    let mut fields = SubmissionFields::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(multipart_error)?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "receipt" => {
                let file_name = field.file_name().unwrap_or("").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                fields.receipt = Some(ReceiptUpload {
                    file_name,
                    data: data.to_vec(),
                });
            }
            "date" => fields.date = Some(read_text(field).await?),
            "amount" => fields.amount = Some(read_text(field).await?),
            "description" => fields.description = Some(read_text(field).await?),
            _ => {} // ignore unknown fields
        }
    }

    Ok(fields)
}

async fn read_text(field: Field<'_>) -> AppResult<String> {
    field
        .text()
        .await
        .map_err(multipart_error)
}

/// Oversized bodies keep their 413; any other multipart failure is a 400.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
