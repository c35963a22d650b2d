//! "Add employee" form
//!
//! ```text
//! Editing --begin_submit--> Submitting --finish(Ok)--> Editing (draft cleared)
//!                                      --finish(Err)-> Editing (draft kept)
//! ```
//!
//! The flow does no client-side validation: whatever the user typed is sent,
//! and the API decides.

mod draft;
mod flow;
mod id;

pub use draft::{Draft, DraftField};
pub use flow::{FormError, FormFlow, FormState, Notification, NotificationKind};
pub use id::IdScheme;
