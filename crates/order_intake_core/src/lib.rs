//! Shared order intake domain primitives.
//!
//! This crate owns the order record, request/response contracts, and the
//! validation rules applied to incoming order requests. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.

pub mod contract;
pub mod intake;
pub mod stamp;
