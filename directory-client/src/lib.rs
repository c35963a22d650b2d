//! Directory Client - HTTP client and creation form for the directory API
//!
//! - [`HttpClient`]: reqwest-based [`EmployeeApi`] implementation
//! - [`FormFlow`]: the "add employee" form as an explicit state machine

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod http;

pub use api::EmployeeApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use form::{Draft, DraftField, FormError, FormFlow, FormState, IdScheme, Notification, NotificationKind};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{Employee, EmployeeCreate, EmployeeCreated, EmployeeStatus, HealthResponse};
