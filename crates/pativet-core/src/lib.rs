// Public fallible APIs in this crate share one concrete error contract
// (`ClinicError`); per-function `# Errors` boilerplate would restate it.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod advisory;
pub mod clinic;
pub mod config;
pub mod error;
pub(crate) mod ids;
pub mod models;
pub mod notify;
pub mod search;
pub mod seed;
pub mod state;
pub mod store;
pub mod views;

pub use clinic::Clinic;
pub use error::{ClinicError, Result};
pub use state::ClinicState;
pub use views::{Role, Section};
