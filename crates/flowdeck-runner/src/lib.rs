mod cli;
mod config;
mod io;
mod logging;
mod run;

pub use cli::{
    Cli, Commands, ConfigCommand, EditorCommand, EditorLoadCommand, OutputFormat,
    ParametersCommand, ValidateCommand,
};
pub use config::{
    parse_global_workflow_ids, EditorConfig, EditorConfigLoad, ENV_API_BASE_URL,
    ENV_API_CREDENTIAL, ENV_API_PATH_PREFIX, ENV_ARTIFACT_API_BASE_URL, ENV_ENVIRONMENT,
    ENV_GLOBAL_WORKFLOW_IDS,
};
pub use io::load_workflow_resource;
pub use logging::init_logging;
pub use run::{execute_config, execute_editor_load, execute_parameters, execute_validate, RunnerError};
