//! Wire payloads exchanged with the portfolio backend.

pub mod api;
pub mod auth;
pub mod search;
