//! Records embedded in or returned by the portfolio API payloads.

pub mod project;
pub mod types;
pub mod user;
