//! Header Audit - HTTP security header checker
//!
//! Requests a single URL and verifies that the response carries the expected
//! security headers and does not advertise its server technology.

pub mod auditor;
pub mod config;
pub mod error;
pub mod http;
pub mod models;
pub mod report;
