//! Normalization & Answer Alignment
//!
//! The deterministic transform from editor state to the exact row list
//! the backend procedure expects, and the read-path helper that pairs a
//! stored schema with a registrant's answers for display.

use std::collections::HashMap;

use crate::field::FieldDefinition;

pub use crate::field::FieldRow;

/// Freeze an ordered field list into wire rows.
///
/// Pure function of the list: options are trimmed and empty entries
/// dropped, non-choice types always get an empty options list, and
/// `display_order` becomes the position in the list regardless of any
/// stale stored value.
pub fn normalize(fields: &[FieldDefinition]) -> Vec<FieldRow> {
    fields
        .iter()
        .enumerate()
        .map(|(position, field)| FieldRow {
            field_name: field.field_name.clone(),
            field_label: field.field_label.clone(),
            field_type: field.field_type,
            is_required: field.is_required,
            options: if field.field_type.is_choice() {
                field
                    .options
                    .iter()
                    .map(|o| o.trim())
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect()
            } else {
                Vec::new()
            },
            placeholder: field.placeholder.clone(),
            display_order: position as u32,
            auto_fill_from: field.auto_fill_from.clone(),
            is_editable: field.is_editable,
        })
        .collect()
}

/// One question paired with whatever the registrant answered, if anything.
#[derive(Clone, Debug, PartialEq)]
pub struct AlignedAnswer<'a> {
    pub row: &'a FieldRow,
    pub value: Option<&'a serde_json::Value>,
}

/// Pair schema rows with a registrant's answers, ordered by
/// `display_order`. Answers are keyed by `field_name`; a missing key
/// yields `None` (the question was skipped or added after submission).
pub fn align_answers<'a>(
    schema: &'a [FieldRow],
    responses: &'a HashMap<String, serde_json::Value>,
) -> Vec<AlignedAnswer<'a>> {
    let mut rows: Vec<&FieldRow> = schema.iter().collect();
    rows.sort_by_key(|r| r.display_order);
    rows.into_iter()
        .map(|row| AlignedAnswer {
            row,
            value: responses.get(&row.field_name),
        })
        .collect()
}
