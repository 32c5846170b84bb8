use super::{prepare_editor, EditorLoadState};
use crate::documents::{ProxyLocation, WorkflowResource};
use crate::editor::EditorParameterType;
use serde_json::json;

fn workflow() -> WorkflowResource {
    serde_json::from_value(json!({
        "title": "Renew licence",
        "persist_browser_session": null,
        "proxy_location": "US-NY",
        "webhook_callback_url": "https://hooks.example/done",
        "workflow_definition": {
            "blocks": [{"block_type": "task", "label": "open"}, {"block_type": "task", "label": "submit"}],
            "parameters": [
                {"parameter_type": "output", "key": "open_output"},
                {"parameter_type": "workflow", "key": "plate", "workflow_parameter_type": "string"}
            ]
        }
    }))
    .expect("fixture must decode")
}

#[test]
fn prepare_editor_carries_title_settings_blocks_and_visible_parameters() {
    let state = prepare_editor(&workflow());

    assert_eq!(state.title, "Renew licence");
    assert!(!state.settings.persist_browser_session);
    assert_eq!(state.settings.proxy_location, Some(ProxyLocation::UsNy));
    assert_eq!(
        state.settings.webhook_callback_url.as_deref(),
        Some("https://hooks.example/done")
    );
    assert_eq!(state.blocks.len(), 2);
    assert_eq!(state.parameters.len(), 1);
    assert_eq!(state.parameters[0].parameter_type(), EditorParameterType::Workflow);
}

#[test]
fn loading_takes_precedence_over_data() {
    let workflow = workflow();
    assert_eq!(
        EditorLoadState::from_fetch(true, Some(&workflow)),
        EditorLoadState::Loading
    );
    assert_eq!(EditorLoadState::from_fetch(true, None), EditorLoadState::Loading);
}

#[test]
fn settled_fetch_without_data_is_missing() {
    let state = EditorLoadState::from_fetch(false, None);
    assert_eq!(state, EditorLoadState::Missing);
    assert!(state.ready().is_none());
}

#[test]
fn settled_fetch_with_data_is_ready() {
    let workflow = workflow();
    let state = EditorLoadState::from_fetch(false, Some(&workflow));
    let ready = state.ready().expect("must be ready");
    assert_eq!(ready.title, "Renew licence");
}

#[test]
fn initial_state_serializes_for_the_canvas() {
    let encoded = serde_json::to_value(prepare_editor(&workflow())).expect("must encode");
    assert_eq!(encoded["title"], "Renew licence");
    assert_eq!(encoded["settings"]["proxyLocation"], "US-NY");
    assert_eq!(encoded["parameters"][0]["key"], "plate");
}
