use crate::embedded::EmbeddedSchema;
use crate::versions::SCHEMA_WORKFLOW_RESOURCE_1;

const WORKFLOW_RESOURCE_SCHEMA: &str = include_str!("../schemas/workflow.schema.json");

pub fn get_json_schema(schema_id: &str) -> Option<EmbeddedSchema> {
    match schema_id {
        SCHEMA_WORKFLOW_RESOURCE_1 => Some(EmbeddedSchema {
            id: SCHEMA_WORKFLOW_RESOURCE_1,
            json: WORKFLOW_RESOURCE_SCHEMA,
        }),
        _ => None,
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
