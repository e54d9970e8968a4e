//! AWS-oriented adapters and handlers for flower order intake.
//!
//! This crate owns runtime integration details (the API Gateway handler,
//! configuration, logging, and store adapters) on top of the domain rules in
//! `order_intake_core`.

pub mod adapters;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
