use crate::field_path::FieldPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

impl Display for IssueSeverity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            IssueSeverity::Error => "error",
            IssueSeverity::Warning => "warning",
            IssueSeverity::Info => "info",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredIssue {
    pub kind: String,
    pub severity: IssueSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameter_key: Option<String>,
    pub field_path: FieldPath,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Value>,
}

impl StructuredIssue {
    pub fn error(
        kind: &str,
        field_path: FieldPath,
        message: impl Into<String>,
        reference: &str,
    ) -> Self {
        Self::new(IssueSeverity::Error, kind, field_path, message.into(), reference)
    }

    pub fn warning(
        kind: &str,
        field_path: FieldPath,
        message: impl Into<String>,
        reference: &str,
    ) -> Self {
        Self::new(IssueSeverity::Warning, kind, field_path, message.into(), reference)
    }

    fn new(
        severity: IssueSeverity,
        kind: &str,
        field_path: FieldPath,
        message: String,
        reference: &str,
    ) -> Self {
        Self {
            kind: kind.to_string(),
            severity,
            parameter_key: None,
            field_path,
            message,
            reference: Some(reference.to_string()),
            related: None,
        }
    }

    pub fn with_parameter_key(mut self, key: impl Into<String>) -> Self {
        self.parameter_key = Some(key.into());
        self
    }

    pub fn with_related(mut self, related: Value) -> Self {
        self.related = Some(related);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    pub fn sort_stable(issues: &mut [Self]) {
        issues.sort_by(|left, right| {
            (
                left.severity,
                &left.kind,
                &left.field_path,
                &left.message,
                &left.parameter_key,
            )
                .cmp(&(
                    right.severity,
                    &right.kind,
                    &right.field_path,
                    &right.message,
                    &right.parameter_key,
                ))
        });
    }
}

impl Display for StructuredIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.severity, self.field_path, self.message)?;
        if let Some(reference) = &self.reference {
            write!(f, " ({reference})")?;
        }
        Ok(())
    }
}

pub fn has_errors(issues: &[StructuredIssue]) -> bool {
    issues.iter().any(StructuredIssue::is_error)
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
