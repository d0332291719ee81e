//! Form Schema Editor
//!
//! Single-owner, in-memory list of field definitions with four
//! synchronous transitions: add, remove, update, set-options. There is
//! exactly one mutator (the administrator's own session), so the list
//! sits behind a plain `&mut` handle with no locking.
//!
//! Render order is array order. The `display_order` stored on each
//! field is recomputed only when the list is normalized for submission.

use std::collections::HashSet;

use crate::field::{slugify, FieldDefinition, FieldId, FieldType};
use crate::normalize::{normalize, FieldRow};

/// Partial update applied to a single field.
///
/// `auto_fill_from` is doubly optional: the outer `Option` means
/// "leave untouched", the inner one allows clearing the source key.
#[derive(Clone, Debug, Default)]
pub struct FieldPatch {
    pub field_label: Option<String>,
    pub field_type: Option<FieldType>,
    pub is_required: Option<bool>,
    pub placeholder: Option<String>,
    pub auto_fill_from: Option<Option<String>>,
    pub is_editable: Option<bool>,
}

impl FieldPatch {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            field_label: Some(label.into()),
            ..Default::default()
        }
    }

    pub fn field_type(field_type: FieldType) -> Self {
        Self {
            field_type: Some(field_type),
            ..Default::default()
        }
    }
}

/// Schema invariant violations reported by [`SchemaEditor::check_names`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("field has an empty name (label: {label:?})")]
    EmptyName { label: String },

    #[error("duplicate field name: {name}")]
    DuplicateName { name: String },
}

/// The working list of questions for a draft event.
#[derive(Clone, Debug, Default)]
pub struct SchemaEditor {
    fields: Vec<FieldDefinition>,
}

impl SchemaEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Append a new question with defaults. Always succeeds.
    ///
    /// The auto-generated name is `field_<n+1>` where n is the current
    /// count; the admin is expected to replace the label, which rederives
    /// the name.
    pub fn add_field(&mut self) -> FieldId {
        let field = FieldDefinition {
            id: FieldId::new(),
            field_name: format!("field_{}", self.fields.len() + 1),
            field_label: "New Question".to_string(),
            field_type: FieldType::Text,
            is_required: true,
            options: Vec::new(),
            placeholder: String::new(),
            display_order: self.fields.len() as u32,
            auto_fill_from: None,
            is_editable: true,
        };
        let id = field.id;
        self.fields.push(field);
        id
    }

    /// Delete the field with the given id. Absent ids are a no-op.
    ///
    /// Remaining `display_order` values are deliberately left stale;
    /// only normalization renumbers.
    pub fn remove_field(&mut self, id: FieldId) {
        self.fields.retain(|f| f.id != id);
    }

    /// Merge a partial patch into the matching field.
    ///
    /// A label change rederives `field_name`: the label is the source of
    /// truth and the machine key is always its slug.
    pub fn update_field(&mut self, id: FieldId, patch: FieldPatch) {
        let Some(field) = self.fields.iter_mut().find(|f| f.id == id) else {
            return;
        };
        if let Some(label) = patch.field_label {
            field.field_name = slugify(&label);
            field.field_label = label;
        }
        if let Some(field_type) = patch.field_type {
            field.field_type = field_type;
        }
        if let Some(required) = patch.is_required {
            field.is_required = required;
        }
        if let Some(placeholder) = patch.placeholder {
            field.placeholder = placeholder;
        }
        if let Some(source) = patch.auto_fill_from {
            field.auto_fill_from = source;
        }
        if let Some(editable) = patch.is_editable {
            field.is_editable = editable;
        }
    }

    /// Replace a field's options from a comma-separated string.
    ///
    /// Segments are stored exactly as typed, empty ones included, so a
    /// trailing comma survives while the admin is still typing. Trim and
    /// drop happen at normalization.
    pub fn set_options(&mut self, id: FieldId, raw: &str) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.id == id) {
            field.options = raw.split(',').map(str::to_string).collect();
        }
    }

    /// Verify the derived-name invariants: non-empty and unique within
    /// the form. Submission does not gate on this; it surfaces problems
    /// to the admin before the collaborator rejects them.
    pub fn check_names(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.field_name.is_empty() {
                return Err(SchemaError::EmptyName {
                    label: field.field_label.clone(),
                });
            }
            if !seen.insert(field.field_name.as_str()) {
                return Err(SchemaError::DuplicateName {
                    name: field.field_name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Freeze the current list into the wire rows for submission.
    pub fn normalize(&self) -> Vec<FieldRow> {
        normalize(&self.fields)
    }
}
