//! Data models
//!
//! Shared between the directory API and its clients.
//! Row decoding is behind the `db` feature.

pub mod employee;

pub use employee::{Employee, EmployeeCreate, EmployeeStatus, UnknownStatus};
