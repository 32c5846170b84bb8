pub const SCHEMA_WORKFLOW_RESOURCE_1: &str = "flowdeck-workflow/1";
