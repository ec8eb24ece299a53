//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod reimbursement_repo;

pub use reimbursement_repo::ReimbursementRepo;
