//! Submission client for the reimbursement API.
//!
//! Plays the part of the request form outside the browser: input is checked
//! with the form rules from `reimburse_core` before anything is sent, then
//! posted as one multipart request.

pub mod client;

pub use client::{ClientError, ReimbursementClient, SubmittedReimbursement};
