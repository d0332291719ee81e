//! Form Field Definitions
//!
//! One configurable question in an event's application form, plus the
//! normalized row shape the backend procedure expects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Client-generated identifier for a field while it lives in the editor.
///
/// Unique within one form, never persisted: it only keys editor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(Uuid);

impl FieldId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Question type. Closed set matching the backend schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Phone,
    Number,
    Select,
    MultiSelect,
    Radio,
    Checkbox,
    Date,
    Time,
    File,
    Url,
}

impl FieldType {
    /// Choice types are the only ones that carry an options list.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Self::Select | Self::MultiSelect | Self::Radio | Self::Checkbox
        )
    }
}

impl Default for FieldType {
    fn default() -> Self {
        Self::Text
    }
}

/// One question as it exists in the editor.
///
/// `options` holds the raw comma-split segments exactly as typed,
/// including empty ones; trimming and deduping happen at normalization.
/// `display_order` is the value assigned when the field was added and
/// may go stale after removals; the submitted order is always the list
/// position at normalization time.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub id: FieldId,
    pub field_name: String,
    pub field_label: String,
    pub field_type: FieldType,
    pub is_required: bool,
    pub options: Vec<String>,
    pub placeholder: String,
    pub display_order: u32,
    pub auto_fill_from: Option<String>,
    pub is_editable: bool,
}

/// Normalized field row as transmitted to the backend procedure, and as
/// read back when rendering an event's form schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldRow {
    pub field_name: String,
    pub field_label: String,
    pub field_type: FieldType,
    pub is_required: bool,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub placeholder: String,
    pub display_order: u32,
    // Serialized even when unset; the procedure expects an explicit null.
    #[serde(default)]
    pub auto_fill_from: Option<String>,
    #[serde(default = "default_editable")]
    pub is_editable: bool,
}

fn default_editable() -> bool {
    true
}

/// Derive the machine key for a field from its human label.
///
/// Lowercases the label and replaces every run of non-alphanumeric
/// characters with a single underscore. The label is the source of
/// truth; the name is always recomputed when the label changes.
pub fn slugify(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut last_was_separator = false;
    for ch in label.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_was_separator = false;
        } else if !last_was_separator {
            out.push('_');
            last_was_separator = true;
        }
    }
    out
}
