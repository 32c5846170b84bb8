use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderState {
    pub workflow_permanent_id: String,
    pub is_global_workflow: bool,
}

impl HeaderState {
    pub fn new(workflow_permanent_id: impl Into<String>, global_workflow_ids: &[String]) -> Self {
        let workflow_permanent_id = workflow_permanent_id.into();
        let is_global_workflow = global_workflow_ids
            .iter()
            .any(|id| id == &workflow_permanent_id);
        Self {
            workflow_permanent_id,
            is_global_workflow,
        }
    }

    pub fn save_enabled(&self) -> bool {
        !self.is_global_workflow
    }

    pub fn run_route(&self) -> String {
        format!("/workflows/{}/run", self.workflow_permanent_id)
    }
}

#[cfg(test)]
#[path = "header_test.rs"]
mod tests;
