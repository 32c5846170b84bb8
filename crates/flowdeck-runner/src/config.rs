use flowdeck_core::{FieldPath, StructuredIssue};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

pub const ENV_API_BASE_URL: &str = "VITE_API_BASE_URL";
pub const ENV_ENVIRONMENT: &str = "VITE_ENVIRONMENT";
pub const ENV_API_CREDENTIAL: &str = "VITE_SKYVERN_API_KEY";
pub const ENV_ARTIFACT_API_BASE_URL: &str = "VITE_ARTIFACT_API_BASE_URL";
pub const ENV_API_PATH_PREFIX: &str = "VITE_API_PATH_PREFIX";
pub const ENV_GLOBAL_WORKFLOW_IDS: &str = "VITE_GLOBAL_WORKFLOW_IDS";

const MASKED_CREDENTIAL: &str = "********";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct EditorConfig {
    pub api_base_url: Option<String>,
    pub environment: Option<String>,
    pub api_credential: Option<String>,
    pub artifact_api_base_url: Option<String>,
    pub api_path_prefix: String,
    pub global_workflow_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfigLoad {
    pub config: EditorConfig,
    pub issues: Vec<StructuredIssue>,
}

impl EditorConfig {
    pub fn from_env() -> EditorConfigLoad {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> EditorConfigLoad
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let config = EditorConfig {
            api_base_url: read(ENV_API_BASE_URL),
            environment: read(ENV_ENVIRONMENT),
            api_credential: read(ENV_API_CREDENTIAL),
            artifact_api_base_url: read(ENV_ARTIFACT_API_BASE_URL),
            api_path_prefix: read(ENV_API_PATH_PREFIX).unwrap_or_default(),
            global_workflow_ids: parse_global_workflow_ids(read(ENV_GLOBAL_WORKFLOW_IDS).as_deref()),
        };

        let mut issues = Vec::new();
        for (name, value) in [
            (ENV_API_BASE_URL, &config.api_base_url),
            (ENV_ENVIRONMENT, &config.environment),
            (ENV_ARTIFACT_API_BASE_URL, &config.artifact_api_base_url),
        ] {
            if value.is_none() {
                issues.push(StructuredIssue::warning(
                    "config_warning",
                    FieldPath::root().key(name),
                    format!("environment variable `{name}` was not set"),
                    "runner.config.missing_env",
                ));
            }
        }
        StructuredIssue::sort_stable(&mut issues);

        EditorConfigLoad { config, issues }
    }

    pub fn masked(&self) -> Self {
        Self {
            api_credential: self
                .api_credential
                .as_ref()
                .map(|_| MASKED_CREDENTIAL.to_string()),
            ..self.clone()
        }
    }
}

pub fn parse_global_workflow_ids(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        return Vec::new();
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(id) => Some(id),
                _ => None,
            })
            .collect(),
        Ok(_) => {
            debug!("{ENV_GLOBAL_WORKFLOW_IDS} is not a JSON array; ignoring");
            Vec::new()
        }
        Err(error) => {
            debug!("{ENV_GLOBAL_WORKFLOW_IDS} is not valid JSON ({error}); ignoring");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
