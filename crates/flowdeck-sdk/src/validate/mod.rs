mod parameters;

pub use parameters::validate_workflow_parameters;
