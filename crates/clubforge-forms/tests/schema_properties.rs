//! Property tests for slug derivation and normalization.

use clubforge_forms::{normalize, slugify, FieldPatch, FieldType, SchemaEditor};
use proptest::prelude::*;

proptest! {
    #[test]
    fn slug_contains_only_lowercase_alnum_and_underscores(label in "[ -~]{0,64}") {
        let slug = slugify(&label);
        prop_assert!(slug
            .chars()
            .all(|c| c == '_' || c.is_ascii_lowercase() || c.is_ascii_digit()));
        prop_assert!(!slug.contains("__"));
    }

    #[test]
    fn slug_is_deterministic_and_idempotent(label in "[ -~]{0,64}") {
        let first = slugify(&label);
        prop_assert_eq!(&slugify(&label), &first);
        prop_assert_eq!(slugify(&first), first);
    }

    #[test]
    fn alnum_labels_slug_to_their_lowercase(label in "[a-zA-Z0-9]{1,32}") {
        prop_assert_eq!(slugify(&label), label.to_ascii_lowercase());
    }

    #[test]
    fn normalized_options_are_trimmed_and_non_empty(raw in "[ a-zA-Z,]{0,64}") {
        let mut editor = SchemaEditor::new();
        let id = editor.add_field();
        editor.update_field(id, FieldPatch::field_type(FieldType::Select));
        editor.set_options(id, &raw);

        let rows = editor.normalize();
        for option in &rows[0].options {
            prop_assert!(!option.is_empty());
            prop_assert_eq!(option.trim(), option.as_str());
        }
    }

    #[test]
    fn display_order_is_dense_after_any_removals(
        labels in proptest::collection::vec("[a-z ]{1,16}", 1..8),
        remove_mask in proptest::collection::vec(any::<bool>(), 1..8),
    ) {
        let mut editor = SchemaEditor::new();
        let mut ids = Vec::new();
        for label in &labels {
            let id = editor.add_field();
            editor.update_field(id, FieldPatch::label(label.clone()));
            ids.push(id);
        }
        for (id, remove) in ids.iter().zip(&remove_mask) {
            if *remove {
                editor.remove_field(*id);
            }
        }

        let rows = normalize(editor.fields());
        for (position, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.display_order, position as u32);
        }
    }
}
