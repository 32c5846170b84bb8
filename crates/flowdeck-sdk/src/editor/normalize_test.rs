use super::{is_displayed_in_editor, normalize_parameter, normalize_parameters};
use crate::documents::WorkflowParameter;
use crate::editor::{DisplayParameter, EditorParameterType};
use crate::documents::WorkflowParameterType;
use serde_json::{json, Value};

fn parameters(values: Value) -> Vec<WorkflowParameter> {
    serde_json::from_value(values).expect("fixture parameters must decode")
}

fn mixed_parameters() -> Vec<WorkflowParameter> {
    parameters(json!([
        {"parameter_type": "workflow", "key": "url", "workflow_parameter_type": "string", "default_value": "foo", "description": "start page"},
        {"parameter_type": "aws_secret", "key": "bw_client_id", "aws_key": "prod/bw_client_id"},
        {"parameter_type": "context", "key": "derived", "source": {"key": "A"}},
        {"parameter_type": "bitwarden_sensitive_information", "key": "identity", "bitwarden_collection_id": "col_1", "bitwarden_identity_key": "ssn", "bitwarden_identity_fields": ["number", "expiry"]},
        {"parameter_type": "output", "key": "block_1_output"},
        {"parameter_type": "bitwarden_credit_card_data", "key": "card", "bitwarden_collection_id": "col_2", "bitwarden_item_id": "item_9"},
        {"parameter_type": "bitwarden_login_credential", "key": "login", "bitwarden_collection_id": "col_3", "url_parameter_key": "url"}
    ]))
}

#[test]
fn output_contains_one_record_per_visible_parameter_in_order() {
    let input = mixed_parameters();
    let visible = input
        .iter()
        .filter(|parameter| is_displayed_in_editor(parameter))
        .collect::<Vec<_>>();

    let output = normalize_parameters(&input);

    assert_eq!(output.len(), visible.len());
    assert_eq!(output.len(), 5);
    for (display, source) in output.iter().zip(visible) {
        assert_eq!(display.key(), source.key());
    }
}

#[test]
fn pre_filtered_input_maps_one_to_one() {
    let input = mixed_parameters()
        .into_iter()
        .filter(is_displayed_in_editor)
        .collect::<Vec<_>>();
    let output = normalize_parameters(&input);
    assert_eq!(output.len(), input.len());
    assert_eq!(
        output.iter().map(DisplayParameter::key).collect::<Vec<_>>(),
        vec!["url", "derived", "identity", "card", "login"]
    );
}

#[test]
fn workflow_parameter_keeps_default_value() {
    let output = normalize_parameters(&mixed_parameters());
    assert_eq!(
        output[0],
        DisplayParameter::Workflow {
            key: "url".to_string(),
            data_type: WorkflowParameterType::String,
            default_value: Some(json!("foo")),
            description: Some("start page".to_string()),
        }
    );
    assert_eq!(output[0].parameter_type(), EditorParameterType::Workflow);
}

#[test]
fn context_parameter_exposes_source_key() {
    let output = normalize_parameters(&mixed_parameters());
    match &output[1] {
        DisplayParameter::Context {
            source_parameter_key,
            description,
            ..
        } => {
            assert_eq!(source_parameter_key, "A");
            assert_eq!(description, &None);
        }
        other => panic!("expected context, got {other:?}"),
    }
}

#[test]
fn sensitive_information_becomes_secret_with_identity_verbatim() {
    let output = normalize_parameters(&mixed_parameters());
    assert_eq!(output[2].parameter_type(), EditorParameterType::Secret);
    match &output[2] {
        DisplayParameter::Secret {
            collection_id,
            identity_key,
            identity_fields,
            ..
        } => {
            assert_eq!(collection_id, "col_1");
            assert_eq!(identity_key, "ssn");
            assert_eq!(identity_fields, &vec!["number".to_string(), "expiry".to_string()]);
        }
        other => panic!("expected secret, got {other:?}"),
    }
}

#[test]
fn credit_card_and_login_credential_have_distinct_shapes() {
    let output = normalize_parameters(&mixed_parameters());
    assert_eq!(output[3].parameter_type(), EditorParameterType::CreditCardData);
    assert_eq!(output[4].parameter_type(), EditorParameterType::Credential);
    match &output[4] {
        DisplayParameter::Credential {
            collection_id,
            url_parameter_key,
            ..
        } => {
            assert_eq!(collection_id.as_deref(), Some("col_3"));
            assert_eq!(url_parameter_key, "url");
        }
        other => panic!("expected credential, got {other:?}"),
    }
}

#[test]
fn hidden_parameters_do_not_normalize() {
    let hidden = parameters(json!([
        {"parameter_type": "aws_secret", "key": "k", "aws_key": "a"},
        {"parameter_type": "output", "key": "o"}
    ]));
    for parameter in &hidden {
        assert!(!is_displayed_in_editor(parameter));
        assert_eq!(normalize_parameter(parameter), None);
    }
    assert!(normalize_parameters(&hidden).is_empty());
}

#[test]
fn display_parameters_serialize_with_editor_field_names() {
    let output = normalize_parameters(&mixed_parameters());
    let encoded = serde_json::to_value(&output).expect("must encode");
    assert_eq!(encoded[0]["parameterType"], "workflow");
    assert_eq!(encoded[0]["dataType"], "string");
    assert_eq!(encoded[0]["defaultValue"], "foo");
    assert_eq!(encoded[1]["sourceParameterKey"], "A");
    assert!(encoded[1].get("description").is_none());
    assert_eq!(encoded[2]["identityFields"], json!(["number", "expiry"]));
    assert_eq!(encoded[3]["parameterType"], "credit-card-data");
    assert_eq!(encoded[3]["itemId"], "item_9");
    assert_eq!(encoded[4]["urlParameterKey"], "url");
    assert_eq!(encoded[4]["collectionId"], "col_3");
}

#[test]
fn absent_default_value_stays_absent() {
    let input = parameters(json!([
        {"parameter_type": "workflow", "key": "n", "workflow_parameter_type": "integer"}
    ]));
    let output = normalize_parameters(&input);
    let encoded = serde_json::to_value(&output[0]).expect("must encode");
    assert!(encoded.get("defaultValue").is_none());
    assert_eq!(encoded["dataType"], "integer");
}
