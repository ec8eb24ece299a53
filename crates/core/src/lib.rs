//! Domain rules for receipt reimbursement requests.
//!
//! Holds the pieces shared by the HTTP server and the submission client:
//! receipt file naming, server-side field validation, and the form rules
//! and UI state used when filling in a request.

pub mod error;
pub mod form;
pub mod receipt;
pub mod submission;
pub mod types;
