//! Networking modules for the widget backend contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the seam the shell talks to, and `api` implements it
//! over browser HTTP. Wire types live in the shared `protocol` crate.

pub mod api;
pub mod backend;

pub use api::HttpBackend;
pub use backend::{ApiError, Backend};
