//! Application services.

pub mod auth;
pub mod lead_intake;
pub mod lead_relay_http;
pub mod store_task;

pub use auth::{AdminAuthService, AuthError};
pub use lead_intake::{submit_lead, IntakeError, LeadSubmission, SubmissionOutcome};
pub use lead_relay_http::HttpLeadRelay;
pub use store_task::run_blocking;
