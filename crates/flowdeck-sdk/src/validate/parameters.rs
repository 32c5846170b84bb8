use crate::documents::WorkflowParameter;
use flowdeck_core::{FieldPath, StructuredIssue};
use std::collections::{HashMap, HashSet};

pub fn validate_workflow_parameters(parameters: &[WorkflowParameter]) -> Vec<StructuredIssue> {
    let mut issues = Vec::new();
    let mut first_index_by_key: HashMap<&str, usize> = HashMap::new();

    for (index, parameter) in parameters.iter().enumerate() {
        let key = parameter.key();
        if key.trim().is_empty() {
            issues.push(StructuredIssue::error(
                "parameter_error",
                parameter_path(index).key("key"),
                "parameter key must not be empty",
                "parameter.key.empty",
            ));
            continue;
        }
        if let Some(first_index) = first_index_by_key.get(key) {
            issues.push(
                StructuredIssue::error(
                    "parameter_error",
                    parameter_path(index).key("key"),
                    format!("duplicate parameter key `{key}` (first at parameters[{first_index}])"),
                    "parameter.key.duplicate",
                )
                .with_parameter_key(key),
            );
            continue;
        }
        first_index_by_key.insert(key, index);
    }

    let known_keys: HashSet<&str> = first_index_by_key.keys().copied().collect();
    for (index, parameter) in parameters.iter().enumerate() {
        let WorkflowParameter::Context(context) = parameter else {
            continue;
        };
        let source_key = context.source.key.as_str();
        let path = parameter_path(index).key("source").key("key");
        if source_key == context.key {
            issues.push(
                StructuredIssue::error(
                    "parameter_error",
                    path,
                    format!("context parameter `{}` cannot source itself", context.key),
                    "parameter.context.self_source",
                )
                .with_parameter_key(context.key.as_str()),
            );
        } else if !known_keys.contains(source_key) {
            issues.push(
                StructuredIssue::error(
                    "parameter_error",
                    path,
                    format!("context source `{source_key}` does not name a parameter"),
                    "parameter.context.unknown_source",
                )
                .with_parameter_key(context.key.as_str()),
            );
        }
    }

    StructuredIssue::sort_stable(&mut issues);
    issues
}

fn parameter_path(index: usize) -> FieldPath {
    FieldPath::root()
        .key("workflow_definition")
        .key("parameters")
        .index(index)
}

#[cfg(test)]
#[path = "parameters_test.rs"]
mod tests;
