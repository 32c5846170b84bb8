use flowdeck_core::{FieldPath, StructuredIssue};
use flowdeck_sdk::{
    parse_document_value, workflow_resource_from_value, DocumentFormat, WorkflowResource,
};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads a workflow resource from disk. A document that is empty or decodes
/// to null (`null`, `~`, `---\nnull`) is a fetch that settled without data
/// and yields `Ok(None)`.
pub fn load_workflow_resource(
    path: impl AsRef<Path>,
) -> Result<Option<WorkflowResource>, Vec<StructuredIssue>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|error| {
        vec![StructuredIssue::error(
            "workflow_io_error",
            FieldPath::root(),
            format!("read file failed: {error}"),
            "runner.workflow.read_file_failed",
        )
        .with_related(json!({ "file": path.display().to_string() }))]
    })?;

    if text.trim().is_empty() {
        debug!("workflow file `{}` is empty", path.display());
        return Ok(None);
    }

    let with_file = |issues: Vec<StructuredIssue>| -> Vec<StructuredIssue> {
        issues
            .into_iter()
            .map(|issue| attach_issue_file(issue, path))
            .collect()
    };
    let value = parse_document_value(text.as_str(), format_for_path(path)).map_err(with_file)?;
    if value.is_null() {
        debug!("workflow file `{}` holds no workflow", path.display());
        return Ok(None);
    }

    workflow_resource_from_value(value, true)
        .map(Some)
        .map_err(with_file)
}

fn format_for_path(path: &Path) -> DocumentFormat {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => DocumentFormat::Json,
        Some("yaml") | Some("yml") => DocumentFormat::Yaml,
        _ => DocumentFormat::Auto,
    }
}

fn attach_issue_file(mut issue: StructuredIssue, path: &Path) -> StructuredIssue {
    let file = Value::String(path.display().to_string());
    issue.related = Some(match issue.related.take() {
        Some(Value::Object(mut object)) => {
            object.insert("file".to_string(), file);
            Value::Object(object)
        }
        Some(other) => {
            let mut object = Map::new();
            object.insert("file".to_string(), file);
            object.insert("details".to_string(), other);
            Value::Object(object)
        }
        None => {
            let mut object = Map::new();
            object.insert("file".to_string(), file);
            Value::Object(object)
        }
    });
    issue
}

#[cfg(test)]
#[path = "read_workflow_test.rs"]
mod tests;
