//! Event Draft & Payload Assembly
//!
//! The in-progress representation of a new event and the flat attribute
//! object the backend's transactional procedure expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed capacity defaults for this flow; not admin-configurable.
pub const MAX_PARTICIPANTS: u32 = 100;
pub const MIN_PARTICIPANTS: u32 = 1;
/// Individual registration only.
pub const TEAM_SIZE_MIN: u32 = 1;
pub const TEAM_SIZE_MAX: u32 = 1;

/// Venue placeholder when the event is not online.
pub const VENUE_TBD: &str = "TBD";
pub const VENUE_ONLINE: &str = "Online";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Other,
    Workshop,
    Hackathon,
    Seminar,
    Competition,
    Meetup,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
}

/// Wire value for how applicants apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationType {
    Form,
    External,
}

/// How applicants apply, as held in the draft.
///
/// An external link is part of the variant, so "external requires a
/// link" holds by construction; the field list is still transmitted but
/// ignored by applicant-facing rendering in that case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplicationMethod {
    InbuiltForm,
    ExternalLink(String),
}

impl ApplicationMethod {
    pub fn wire_type(&self) -> ApplicationType {
        match self {
            Self::InbuiltForm => ApplicationType::Form,
            Self::ExternalLink(_) => ApplicationType::External,
        }
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            Self::InbuiltForm => None,
            Self::ExternalLink(link) => Some(link),
        }
    }
}

impl Default for ApplicationMethod {
    fn default() -> Self {
        Self::InbuiltForm
    }
}

/// The not-yet-persisted event as composed by an administrator.
#[derive(Clone, Debug, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub event_type: EventType,
    pub status: EventStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub banner_url: Option<String>,
    pub is_online: bool,
    pub is_registration_open: bool,
    pub application: ApplicationMethod,
}

/// Flat attribute object sent as the first argument of the creation
/// procedure. Derived attributes and fixed defaults are computed here,
/// once, at submission time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventAttributes {
    pub title: String,
    pub description: String,
    pub short_description: String,
    pub event_type: EventType,
    pub status: EventStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub registration_deadline: DateTime<Utc>,
    pub venue: String,
    pub is_online: bool,
    pub max_participants: u32,
    pub min_participants: u32,
    pub team_size_min: u32,
    pub team_size_max: u32,
    pub is_registration_open: bool,
    pub requires_approval: bool,
    pub banner_url: Option<String>,
    pub application_type: ApplicationType,
    pub application_link: Option<String>,
}

impl EventAttributes {
    /// Assemble the submission attributes from a draft.
    ///
    /// Registration deadline defaults to the end date; venue is
    /// "Online" for online events and a placeholder otherwise; capacity
    /// and team-size bounds are fixed; approval is always required.
    pub fn from_draft(draft: &EventDraft) -> Self {
        Self {
            title: draft.title.clone(),
            description: draft.description.clone(),
            short_description: draft.short_description.clone(),
            event_type: draft.event_type,
            status: draft.status,
            start_date: draft.start_date,
            end_date: draft.end_date,
            registration_deadline: draft.end_date,
            venue: if draft.is_online {
                VENUE_ONLINE.to_string()
            } else {
                VENUE_TBD.to_string()
            },
            is_online: draft.is_online,
            max_participants: MAX_PARTICIPANTS,
            min_participants: MIN_PARTICIPANTS,
            team_size_min: TEAM_SIZE_MIN,
            team_size_max: TEAM_SIZE_MAX,
            is_registration_open: draft.is_registration_open,
            requires_approval: true,
            banner_url: draft.banner_url.clone(),
            application_type: draft.application.wire_type(),
            application_link: draft.application.link().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn draft() -> EventDraft {
        EventDraft {
            title: "Intro to Systems".into(),
            description: "A weekend workshop.".into(),
            short_description: "Systems 101".into(),
            event_type: EventType::Workshop,
            status: EventStatus::Published,
            start_date: Utc.with_ymd_and_hms(2026, 9, 12, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2026, 9, 13, 17, 0, 0).unwrap(),
            banner_url: None,
            is_online: false,
            is_registration_open: true,
            application: ApplicationMethod::InbuiltForm,
        }
    }

    #[test]
    fn deadline_defaults_to_end_date() {
        let attrs = EventAttributes::from_draft(&draft());
        assert_eq!(attrs.registration_deadline, attrs.end_date);
    }

    #[test]
    fn venue_follows_online_flag() {
        let mut d = draft();
        assert_eq!(EventAttributes::from_draft(&d).venue, "TBD");
        d.is_online = true;
        assert_eq!(EventAttributes::from_draft(&d).venue, "Online");
    }

    #[test]
    fn capacity_defaults_are_fixed() {
        let attrs = EventAttributes::from_draft(&draft());
        assert_eq!(attrs.max_participants, 100);
        assert_eq!(attrs.min_participants, 1);
        assert_eq!(attrs.team_size_min, 1);
        assert_eq!(attrs.team_size_max, 1);
        assert!(attrs.requires_approval);
    }

    #[test]
    fn inbuilt_form_has_null_link() {
        let attrs = EventAttributes::from_draft(&draft());
        assert_eq!(attrs.application_type, ApplicationType::Form);
        assert_eq!(attrs.application_link, None);
    }

    #[test]
    fn external_method_carries_its_link() {
        let mut d = draft();
        d.application = ApplicationMethod::ExternalLink("https://forms.example.com/x".into());
        let attrs = EventAttributes::from_draft(&d);
        assert_eq!(attrs.application_type, ApplicationType::External);
        assert_eq!(
            attrs.application_link.as_deref(),
            Some("https://forms.example.com/x")
        );
    }

    #[test]
    fn enum_wire_spellings() {
        assert_eq!(
            serde_json::to_value(EventType::Hackathon).unwrap(),
            "hackathon"
        );
        assert_eq!(
            serde_json::to_value(EventStatus::Published).unwrap(),
            "published"
        );
        assert_eq!(
            serde_json::to_value(ApplicationType::External).unwrap(),
            "external"
        );
    }
}
