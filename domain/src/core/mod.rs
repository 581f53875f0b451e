//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`error::ValidationError`] - submission validation failures

pub mod error;
