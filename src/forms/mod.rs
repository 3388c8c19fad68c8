//! Validated request bodies submitted to the backend.

pub mod login;
