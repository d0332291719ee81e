//! Registration Records
//!
//! Read-path types: persisted events as listed publicly, and
//! registrations joined with registrant identity for admin review.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::event::{ApplicationType, EventStatus, EventType};

/// Review state of a single application.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Waitlisted,
    Cancelled,
    Attended,
}

/// A persisted event as read back from the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub title: String,
    pub status: EventStatus,
    #[serde(default)]
    pub event_type: EventType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub is_registration_open: bool,
    #[serde(default = "default_application_type")]
    pub application_type: ApplicationType,
    #[serde(default)]
    pub application_link: Option<String>,
}

fn default_application_type() -> ApplicationType {
    ApplicationType::Form
}

/// Registrant identity attributes joined onto an application.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RegistrantProfile {
    pub full_name: String,
    #[serde(default)]
    pub roll_number: Option<String>,
    pub email: String,
}

/// One application to an event, with answers keyed by field name.
#[derive(Clone, Debug, Deserialize)]
pub struct RegistrationRecord {
    pub id: Uuid,
    pub event_id: Uuid,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
    #[serde(default)]
    pub responses: HashMap<String, serde_json::Value>,
    // Joined via the profiles relation; absent if the join was not selected.
    #[serde(default, rename = "profiles")]
    pub profile: Option<RegistrantProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_wire_names() {
        assert_eq!(
            serde_json::to_value(RegistrationStatus::Waitlisted).unwrap(),
            "waitlisted"
        );
        assert_eq!(
            serde_json::from_value::<RegistrationStatus>(json!("approved")).unwrap(),
            RegistrationStatus::Approved
        );
    }

    #[test]
    fn registration_decodes_joined_profile() {
        let record: RegistrationRecord = serde_json::from_value(json!({
            "id": "4f9c1f1e-8a3a-4f6e-9a43-0d6a4a6a1b2c",
            "event_id": "7f6e5d4c-3b2a-4918-8765-4321fedcba98",
            "status": "pending",
            "registered_at": "2026-09-01T10:00:00Z",
            "responses": { "t_shirt_size": "M" },
            "profiles": {
                "full_name": "Asha Rao",
                "roll_number": "22CS114",
                "email": "asha@example.edu"
            }
        }))
        .unwrap();

        assert_eq!(record.status, RegistrationStatus::Pending);
        assert_eq!(record.responses["t_shirt_size"], json!("M"));
        let profile = record.profile.unwrap();
        assert_eq!(profile.full_name, "Asha Rao");
        assert_eq!(profile.roll_number.as_deref(), Some("22CS114"));
    }

    #[test]
    fn registration_tolerates_missing_join() {
        let record: RegistrationRecord = serde_json::from_value(json!({
            "id": "4f9c1f1e-8a3a-4f6e-9a43-0d6a4a6a1b2c",
            "event_id": "7f6e5d4c-3b2a-4918-8765-4321fedcba98",
            "status": "approved",
            "registered_at": "2026-09-01T10:00:00Z"
        }))
        .unwrap();

        assert!(record.profile.is_none());
        assert!(record.responses.is_empty());
    }
}
