use super::validate_schema_instance;
use crate::versions::SCHEMA_WORKFLOW_RESOURCE_1;
use flowdeck_core::FieldPathSegment;
use crate::get_json_schema;
use jsonschema::JSONSchema;
use serde_json::{json, Value};

#[test]
fn unknown_schema_returns_error_issue() {
    let issues = validate_schema_instance("flowdeck-unknown/1", &json!({}));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, "schema_error");
    assert_eq!(
        issues[0].reference.as_deref(),
        Some("schema_registry.unknown_schema")
    );
}

#[test]
fn minimal_workflow_resource_passes_validation() {
    let workflow = json!({
        "title": "Invoice download",
        "workflow_definition": {"blocks": [], "parameters": []}
    });
    let issues = validate_schema_instance(SCHEMA_WORKFLOW_RESOURCE_1, &workflow);
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn missing_title_is_reported() {
    let workflow = json!({
        "workflow_definition": {"blocks": [], "parameters": []}
    });
    let issues = validate_schema_instance(SCHEMA_WORKFLOW_RESOURCE_1, &workflow);
    assert!(!issues.is_empty());
    assert!(issues.iter().all(|issue| issue.is_error()));
}

#[test]
fn parameter_without_key_points_at_parameter_index() {
    let workflow = json!({
        "title": "t",
        "workflow_definition": {
            "blocks": [],
            "parameters": [
                {"key": "ok", "parameter_type": "workflow"},
                {"parameter_type": "context"}
            ]
        }
    });
    let issues = validate_schema_instance(SCHEMA_WORKFLOW_RESOURCE_1, &workflow);
    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].field_path.segments().last(),
        Some(&FieldPathSegment::Index(1))
    );
}

#[test]
fn embedded_workflow_schema_compiles() {
    let schema = get_json_schema(SCHEMA_WORKFLOW_RESOURCE_1).expect("schema must exist");
    let schema_json: Value = serde_json::from_str(schema.json).expect("schema must be json");
    assert!(JSONSchema::options().compile(&schema_json).is_ok());
}

#[test]
fn valid_resource_reports_no_compile_failure() {
    let workflow = json!({
        "title": "t",
        "workflow_definition": {
            "blocks": [],
            "parameters": [{"key": "k", "parameter_type": "output"}]
        }
    });
    let issues = validate_schema_instance(SCHEMA_WORKFLOW_RESOURCE_1, &workflow);
    assert!(issues
        .iter()
        .all(|issue| issue.reference.as_deref() != Some("schema_registry.compile_failed")));
    assert!(issues.is_empty());
}
