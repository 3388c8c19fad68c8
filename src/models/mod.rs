//! Client-side settings.

pub mod config;
