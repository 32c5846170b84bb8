use super::display::DisplayParameter;
use crate::documents::WorkflowParameter;

pub fn is_displayed_in_editor(parameter: &WorkflowParameter) -> bool {
    !matches!(
        parameter,
        WorkflowParameter::AwsSecret(_) | WorkflowParameter::Output(_)
    )
}

pub fn normalize_parameter(parameter: &WorkflowParameter) -> Option<DisplayParameter> {
    let display = match parameter {
        WorkflowParameter::Workflow(parameter) => DisplayParameter::Workflow {
            key: parameter.key.clone(),
            data_type: parameter.workflow_parameter_type,
            default_value: parameter.default_value.clone(),
            description: parameter.description.clone(),
        },
        WorkflowParameter::Context(parameter) => DisplayParameter::Context {
            key: parameter.key.clone(),
            source_parameter_key: parameter.source.key.clone(),
            description: parameter.description.clone(),
        },
        WorkflowParameter::BitwardenSensitiveInformation(parameter) => DisplayParameter::Secret {
            key: parameter.key.clone(),
            collection_id: parameter.bitwarden_collection_id.clone(),
            identity_key: parameter.bitwarden_identity_key.clone(),
            identity_fields: parameter.bitwarden_identity_fields.clone(),
            description: parameter.description.clone(),
        },
        WorkflowParameter::BitwardenCreditCardData(parameter) => {
            DisplayParameter::CreditCardData {
                key: parameter.key.clone(),
                collection_id: parameter.bitwarden_collection_id.clone(),
                item_id: parameter.bitwarden_item_id.clone(),
                description: parameter.description.clone(),
            }
        }
        WorkflowParameter::BitwardenLoginCredential(parameter) => DisplayParameter::Credential {
            key: parameter.key.clone(),
            collection_id: parameter.bitwarden_collection_id.clone(),
            url_parameter_key: parameter.url_parameter_key.clone(),
            description: parameter.description.clone(),
        },
        WorkflowParameter::AwsSecret(_) | WorkflowParameter::Output(_) => return None,
    };
    Some(display)
}

pub fn normalize_parameters(parameters: &[WorkflowParameter]) -> Vec<DisplayParameter> {
    parameters
        .iter()
        .filter(|parameter| is_displayed_in_editor(parameter))
        .filter_map(normalize_parameter)
        .collect()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
