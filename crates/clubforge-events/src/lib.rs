//! Clubforge Event Domain
//!
//! Event drafts, the flat attribute payload assembled at submission
//! time, and the registration records the admin review path reads back.

pub mod event;
pub mod registration;

pub use event::{
    ApplicationMethod, ApplicationType, EventAttributes, EventDraft, EventStatus, EventType,
};
pub use registration::{EventRecord, RegistrantProfile, RegistrationRecord, RegistrationStatus};
