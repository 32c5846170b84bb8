use super::parameter::WorkflowParameter;
use super::settings::{ProxyLocation, WorkflowSettings};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowResource {
    #[serde(default)]
    pub workflow_id: Option<String>,
    #[serde(default)]
    pub workflow_permanent_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub persist_browser_session: Option<bool>,
    #[serde(default)]
    pub proxy_location: Option<ProxyLocation>,
    #[serde(default)]
    pub webhook_callback_url: Option<String>,
    pub workflow_definition: WorkflowDefinition,
}

impl WorkflowResource {
    pub fn settings(&self) -> WorkflowSettings {
        WorkflowSettings {
            persist_browser_session: self.persist_browser_session.unwrap_or(false),
            proxy_location: self.proxy_location,
            webhook_callback_url: self.webhook_callback_url.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowDefinition {
    pub blocks: Vec<Value>,
    pub parameters: Vec<WorkflowParameter>,
}
