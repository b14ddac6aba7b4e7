//! Shared modules for the query submission site.

pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
