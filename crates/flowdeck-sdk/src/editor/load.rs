use super::display::DisplayParameter;
use super::normalize::normalize_parameters;
use crate::documents::{WorkflowResource, WorkflowSettings};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorInitialState {
    pub title: String,
    pub settings: WorkflowSettings,
    pub blocks: Vec<Value>,
    pub parameters: Vec<DisplayParameter>,
}

pub fn prepare_editor(workflow: &WorkflowResource) -> EditorInitialState {
    EditorInitialState {
        title: workflow.title.clone(),
        settings: workflow.settings(),
        blocks: workflow.workflow_definition.blocks.clone(),
        parameters: normalize_parameters(&workflow.workflow_definition.parameters),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorLoadState {
    Loading,
    Missing,
    Ready(EditorInitialState),
}

impl EditorLoadState {
    pub fn from_fetch(is_loading: bool, workflow: Option<&WorkflowResource>) -> Self {
        if is_loading {
            return EditorLoadState::Loading;
        }
        match workflow {
            Some(workflow) => EditorLoadState::Ready(prepare_editor(workflow)),
            None => EditorLoadState::Missing,
        }
    }

    pub fn ready(&self) -> Option<&EditorInitialState> {
        match self {
            EditorLoadState::Ready(state) => Some(state),
            EditorLoadState::Loading | EditorLoadState::Missing => None,
        }
    }
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
