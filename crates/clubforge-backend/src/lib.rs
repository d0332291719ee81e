//! Clubforge Backend Client
//!
//! Producer side of the collaborator contract: one atomic remote
//! procedure creating an event together with its application-form
//! schema, plus the reads the public listing and admin review use.
//!
//! ## Features
//! - `create_event_with_form`: all-or-nothing event + field-row creation
//! - Published-event and admin event listings
//! - Form-schema and application reads, applications joined with profiles
//! - Registration-status updates for review decisions
//! - Uniform error surface: backend messages verbatim, transport
//!   failures as a generic message, never a retry

pub mod client;
pub mod error;

pub use client::{BackendClient, ClientConfig, DEFAULT_TIMEOUT};
pub use error::{BackendError, Result};
