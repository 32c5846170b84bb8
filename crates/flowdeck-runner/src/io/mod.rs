mod read_workflow;

pub use read_workflow::load_workflow_resource;
