//! Clubforge Form Builder
//!
//! Application-form schema editing for club events.
//!
//! ## Features
//! - In-memory schema editor with add/remove/update/set-options
//! - Label-derived machine keys (lowercase underscore slugs)
//! - Deterministic normalization into the backend's field-row shape
//! - Answer alignment for rendering submissions against a schema

pub mod editor;
pub mod field;
pub mod normalize;

pub use editor::{FieldPatch, SchemaEditor, SchemaError};
pub use field::{slugify, FieldDefinition, FieldId, FieldRow, FieldType};
pub use normalize::{align_answers, normalize, AlignedAnswer};
