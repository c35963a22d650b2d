//! directory-api: employee directory REST service
//!
//! - `GET /health`: liveness check
//! - `GET /employees`: every employee record
//! - `POST /employees`: validate and insert one record
//!
//! Routes are also served under `/api`. Records live in a MySQL table
//! reached through a bounded connection pool.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod state;

pub use config::Config;
pub use state::AppState;
