pub mod field_path;
pub mod issues;

pub use field_path::{FieldPath, FieldPathSegment};
pub use issues::{has_errors, IssueSeverity, StructuredIssue};
