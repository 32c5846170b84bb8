mod json;
mod yaml;

use crate::documents::{WorkflowResource, PARAMETER_TYPE_TAGS};
use flowdeck_core::{FieldPath, StructuredIssue};
use flowdeck_schema::validate_schema_instance;
use flowdeck_schema::versions::SCHEMA_WORKFLOW_RESOURCE_1;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Auto,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseDocumentOptions {
    pub format: DocumentFormat,
    pub validate_schema: bool,
}

impl Default for ParseDocumentOptions {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Auto,
            validate_schema: true,
        }
    }
}

pub fn parse_workflow_resource(input: &str) -> Result<WorkflowResource, Vec<StructuredIssue>> {
    parse_workflow_resource_with_options(input, ParseDocumentOptions::default())
}

pub fn parse_workflow_resource_with_options(
    input: &str,
    options: ParseDocumentOptions,
) -> Result<WorkflowResource, Vec<StructuredIssue>> {
    let value = parse_document_value(input, options.format)?;
    workflow_resource_from_value(value, options.validate_schema)
}

pub fn parse_document_value(
    input: &str,
    format: DocumentFormat,
) -> Result<Value, Vec<StructuredIssue>> {
    match format {
        DocumentFormat::Auto => {
            if looks_like_json(input) {
                json::parse_json(input)
            } else {
                yaml::parse_yaml(input)
            }
        }
        DocumentFormat::Json => json::parse_json(input),
        DocumentFormat::Yaml => yaml::parse_yaml(input),
    }
}

// Unknown parameter tags are caught before serde so the issue can point at the parameter.
pub fn workflow_resource_from_value(
    value: Value,
    validate_schema: bool,
) -> Result<WorkflowResource, Vec<StructuredIssue>> {
    let mut issues = if validate_schema {
        validate_schema_instance(SCHEMA_WORKFLOW_RESOURCE_1, &value)
    } else {
        Vec::new()
    };
    issues.extend(check_parameter_tags(&value));
    if !issues.is_empty() {
        StructuredIssue::sort_stable(&mut issues);
        return Err(issues);
    }

    serde_json::from_value::<WorkflowResource>(value).map_err(|err| {
        vec![StructuredIssue::error(
            "parse_error",
            FieldPath::root(),
            format!("typed parse failed for {SCHEMA_WORKFLOW_RESOURCE_1}: {err}"),
            "parse.typed_deserialize_error",
        )]
    })
}

fn looks_like_json(input: &str) -> bool {
    let trimmed = input.trim_start();
    trimmed.starts_with('{') || trimmed.starts_with('[')
}

fn check_parameter_tags(value: &Value) -> Vec<StructuredIssue> {
    let Some(parameters) = value
        .get("workflow_definition")
        .and_then(|definition| definition.get("parameters"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    let mut issues = Vec::new();
    for (index, parameter) in parameters.iter().enumerate() {
        let Some(tag) = parameter.get("parameter_type").and_then(Value::as_str) else {
            continue;
        };
        if PARAMETER_TYPE_TAGS.contains(&tag) {
            continue;
        }
        let path = FieldPath::root()
            .key("workflow_definition")
            .key("parameters")
            .index(index)
            .key("parameter_type");
        let mut issue = StructuredIssue::error(
            "parse_error",
            path,
            format!("unsupported parameter_type `{tag}`"),
            "parse.unknown_parameter_type",
        );
        if let Some(key) = parameter.get("key").and_then(Value::as_str) {
            issue = issue.with_parameter_key(key);
        }
        issues.push(issue);
    }
    issues
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
