//! Request handlers.
//!
//! Handlers delegate persistence to the repositories in `reimburse_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod pages;
pub mod reimbursement;
