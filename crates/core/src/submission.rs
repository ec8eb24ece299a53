//! Server-side validation of a submitted reimbursement request.
//!
//! The HTTP handler collects multipart parts into [`SubmissionFields`] and
//! calls [`SubmissionFields::into_submission`] before touching the disk or
//! the database, so a rejected request has no side effects.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::error::CoreError;

/// Message returned when any of the four required fields is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Missing required fields";

/// Date format produced by an HTML `<input type="date">`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// An uploaded receipt file as received from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReceiptUpload {
    /// File name reported by the client, including its extension.
    pub file_name: String,
    /// Raw file content.
    pub data: Vec<u8>,
}

impl ReceiptUpload {
    /// A browser sends an empty, unnamed part when no file was chosen.
    pub fn is_empty(&self) -> bool {
        self.file_name.is_empty() && self.data.is_empty()
    }
}

/// Raw fields of a submission. Each is `None` until its part is seen.
#[derive(Debug, Clone, Default)]
pub struct SubmissionFields {
    pub date: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
    pub receipt: Option<ReceiptUpload>,
}

/// A submission whose fields are all present and parsed.
#[derive(Debug, Clone)]
pub struct Submission {
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub receipt: ReceiptUpload,
}

impl SubmissionFields {
    /// Check presence of every field, then parse `date` and `amount`.
    ///
    /// Empty text values and an empty receipt part count as absent.
    pub fn into_submission(self) -> Result<Submission, CoreError> {
        let (Some(date), Some(amount), Some(description), Some(receipt)) = (
            non_empty(self.date),
            non_empty(self.amount),
            non_empty(self.description),
            self.receipt.filter(|r| !r.is_empty()),
        ) else {
            return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.into()));
        };

        Ok(Submission {
            date: parse_date(&date)?,
            amount: parse_amount(&amount)?,
            description,
            receipt,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Parse a purchase date.
///
/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp whose UTC calendar date
/// is used.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CoreError> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| CoreError::Validation(format!("Invalid date '{raw}'")))
}

/// Parse an amount and require it to be a finite, positive number.
pub fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    let raw = raw.trim();
    let amount: f64 = raw
        .parse()
        .map_err(|_| CoreError::Validation(format!("Invalid amount '{raw}'")))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(CoreError::Validation(
            "Amount must be greater than zero".into(),
        ));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn png() -> ReceiptUpload {
        ReceiptUpload {
            file_name: "lunch.png".into(),
            data: vec![0x89, b'P', b'N', b'G'],
        }
    }

    fn complete() -> SubmissionFields {
        SubmissionFields {
            date: Some("2024-03-01".into()),
            amount: Some("42.50".into()),
            description: Some("Lunch with client team".into()),
            receipt: Some(png()),
        }
    }

    fn assert_missing(fields: SubmissionFields) {
        assert_matches!(
            fields.into_submission(),
            Err(CoreError::Validation(msg)) if msg == MISSING_FIELDS_MESSAGE
        );
    }

    #[test]
    fn complete_fields_parse() {
        let submission = complete().into_submission().unwrap();
        assert_eq!(submission.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(submission.amount, 42.5);
        assert_eq!(submission.description, "Lunch with client team");
        assert_eq!(submission.receipt, png());
    }

    #[test]
    fn each_missing_field_is_rejected() {
        assert_missing(SubmissionFields { date: None, ..complete() });
        assert_missing(SubmissionFields { amount: None, ..complete() });
        assert_missing(SubmissionFields { description: None, ..complete() });
        assert_missing(SubmissionFields { receipt: None, ..complete() });
    }

    #[test]
    fn empty_values_count_as_missing() {
        assert_missing(SubmissionFields {
            date: Some(String::new()),
            ..complete()
        });
        assert_missing(SubmissionFields {
            receipt: Some(ReceiptUpload {
                file_name: String::new(),
                data: Vec::new(),
            }),
            ..complete()
        });
    }

    #[test]
    fn empty_file_with_name_is_accepted() {
        let fields = SubmissionFields {
            receipt: Some(ReceiptUpload {
                file_name: "blank.pdf".into(),
                data: Vec::new(),
            }),
            ..complete()
        };
        assert!(fields.into_submission().is_ok());
    }

    #[test]
    fn rfc3339_date_uses_utc_day() {
        assert_eq!(
            parse_date("2024-03-01T23:30:00-02:00").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }

    #[test]
    fn invalid_date_rejected() {
        assert_matches!(parse_date("03/01/2024"), Err(CoreError::Validation(_)));
        assert_matches!(parse_date("2024-02-30"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn amount_parsing() {
        assert_eq!(parse_amount("42.50").unwrap(), 42.5);
        assert_eq!(parse_amount(" 0.01 ").unwrap(), 0.01);
    }

    #[test]
    fn non_positive_or_garbage_amount_rejected() {
        assert_matches!(parse_amount("0"), Err(CoreError::Validation(_)));
        assert_matches!(parse_amount("-5"), Err(CoreError::Validation(_)));
        assert_matches!(parse_amount("abc"), Err(CoreError::Validation(_)));
        assert_matches!(parse_amount("NaN"), Err(CoreError::Validation(_)));
        assert_matches!(parse_amount("inf"), Err(CoreError::Validation(_)));
    }
}
