use flowdeck_core::{FieldPath, StructuredIssue};
use jsonschema::JSONSchema;
use serde_json::Value;

use crate::registry::get_json_schema;

pub fn validate_schema_instance(schema_id: &str, instance: &Value) -> Vec<StructuredIssue> {
    let Some(schema) = get_json_schema(schema_id) else {
        return vec![schema_issue(
            FieldPath::root(),
            format!("unknown schema id: {schema_id}"),
            "schema_registry.unknown_schema",
        )];
    };

    let schema_json: Value = match serde_json::from_str(schema.json) {
        Ok(value) => value,
        Err(err) => {
            return vec![schema_issue(
                FieldPath::root(),
                format!("embedded schema json parse failed: {err}"),
                "schema_registry.invalid_embedded_schema",
            )];
        }
    };

    let compiled = match JSONSchema::options().compile(&schema_json) {
        Ok(compiled) => compiled,
        Err(err) => {
            return vec![schema_issue(
                FieldPath::root(),
                format!("schema compile failed for {schema_id}: {err}"),
                "schema_registry.compile_failed",
            )];
        }
    };

    let mut issues = Vec::new();
    if let Err(errors) = compiled.validate(instance) {
        for error in errors {
            issues.push(schema_issue(
                FieldPath::from_json_pointer(error.instance_path.to_string().as_str()),
                error.to_string(),
                "json_schema.validation",
            ));
        }
    }
    StructuredIssue::sort_stable(&mut issues);
    issues
}

fn schema_issue(field_path: FieldPath, message: String, reference: &str) -> StructuredIssue {
    StructuredIssue::error("schema_error", field_path, message, reference)
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
