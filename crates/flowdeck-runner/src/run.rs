use crate::cli::{ConfigCommand, EditorLoadCommand, OutputFormat, ParametersCommand, ValidateCommand};
use crate::config::{EditorConfig, EditorConfigLoad};
use crate::io::load_workflow_resource;
use flowdeck_core::{has_errors, StructuredIssue};
use flowdeck_sdk::{
    normalize_parameters, validate_workflow_parameters, DisplayParameter, EditorInitialState,
    EditorLoadState, HeaderState,
};
use serde_json::json;
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("workflow load failed:\n{0}")]
    WorkflowLoad(String),
    #[error("workflow validation failed:\n{0}")]
    WorkflowValidate(String),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

pub fn execute_editor_load(
    command: &EditorLoadCommand,
    config: &EditorConfig,
) -> Result<String, RunnerError> {
    let workflow = load_workflow_resource(&command.workflow)
        .map_err(|issues| RunnerError::WorkflowLoad(render_issues(&issues)))?;

    let state = EditorLoadState::from_fetch(false, workflow.as_ref());
    let Some(editor) = state.ready() else {
        debug!("no workflow data in `{}`; nothing to render", command.workflow.display());
        return Ok(String::new());
    };

    let header = command
        .workflow_permanent_id
        .clone()
        .or_else(|| workflow.as_ref().and_then(|w| w.workflow_permanent_id.clone()))
        .map(|id| HeaderState::new(id, &config.global_workflow_ids));
    info!(
        "loaded workflow `{}` with {} blocks and {} editable parameters",
        editor.title,
        editor.blocks.len(),
        editor.parameters.len()
    );

    match command.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "editor": editor,
            "header": header,
        }))?),
        OutputFormat::Text => Ok(render_editor_text(editor, header.as_ref())),
    }
}

pub fn execute_parameters(command: &ParametersCommand) -> Result<String, RunnerError> {
    let workflow = load_workflow_resource(&command.workflow)
        .map_err(|issues| RunnerError::WorkflowLoad(render_issues(&issues)))?;
    let parameters = workflow
        .map(|workflow| normalize_parameters(&workflow.workflow_definition.parameters))
        .unwrap_or_default();

    match command.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&parameters)?),
        OutputFormat::Text => Ok(parameters
            .iter()
            .map(render_parameter_line)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn execute_validate(command: &ValidateCommand) -> Result<String, RunnerError> {
    let workflow = match load_workflow_resource(&command.workflow) {
        Ok(Some(workflow)) => workflow,
        Ok(None) => {
            return Err(RunnerError::WorkflowValidate(
                "workflow file contains no workflow".to_string(),
            ))
        }
        Err(issues) => return Err(RunnerError::WorkflowValidate(render_issues(&issues))),
    };

    let issues = validate_workflow_parameters(&workflow.workflow_definition.parameters);
    if has_errors(&issues) {
        return Err(RunnerError::WorkflowValidate(render_issues(&issues)));
    }

    match command.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "valid": true,
            "title": workflow.title,
            "parameters": workflow.workflow_definition.parameters.len(),
            "blocks": workflow.workflow_definition.blocks.len(),
            "issues": issues,
        }))?),
        OutputFormat::Text => Ok(format!(
            "ok: `{}` ({} parameters, {} blocks)",
            workflow.title,
            workflow.workflow_definition.parameters.len(),
            workflow.workflow_definition.blocks.len()
        )),
    }
}

pub fn execute_config(command: &ConfigCommand, loaded: &EditorConfigLoad) -> Result<String, RunnerError> {
    let masked = loaded.config.masked();
    match command.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
            "config": masked,
            "issues": loaded.issues,
        }))?),
        OutputFormat::Text => {
            let mut lines = vec![
                format!("api_base_url: {}", or_unset(masked.api_base_url.as_deref())),
                format!("environment: {}", or_unset(masked.environment.as_deref())),
                format!("api_credential: {}", or_unset(masked.api_credential.as_deref())),
                format!(
                    "artifact_api_base_url: {}",
                    or_unset(masked.artifact_api_base_url.as_deref())
                ),
                format!("api_path_prefix: {:?}", masked.api_path_prefix),
                format!("global_workflow_ids: [{}]", masked.global_workflow_ids.join(", ")),
            ];
            if !loaded.issues.is_empty() {
                lines.push("warnings:".to_string());
                lines.push(render_issues(&loaded.issues));
            }
            Ok(lines.join("\n"))
        }
    }
}

fn render_editor_text(editor: &EditorInitialState, header: Option<&HeaderState>) -> String {
    let mut lines = vec![
        format!("title: {}", editor.title),
        format!(
            "settings: persist_browser_session={} proxy_location={} webhook_callback_url={}",
            editor.settings.persist_browser_session,
            editor
                .settings
                .proxy_location
                .map(|location| location.as_str())
                .unwrap_or("-"),
            editor.settings.webhook_callback_url.as_deref().unwrap_or("-")
        ),
        format!("blocks: {}", editor.blocks.len()),
    ];
    if let Some(header) = header {
        let save = if header.save_enabled() {
            "enabled"
        } else {
            "disabled (global workflow)"
        };
        lines.push(format!("save: {save}"));
        lines.push(format!("run: {}", header.run_route()));
    }
    lines.push(format!("parameters: {}", editor.parameters.len()));
    lines.extend(
        editor
            .parameters
            .iter()
            .map(|parameter| format!("  {}", render_parameter_line(parameter))),
    );
    lines.join("\n")
}

fn render_parameter_line(parameter: &DisplayParameter) -> String {
    let detail = match parameter {
        DisplayParameter::Workflow {
            data_type,
            default_value,
            ..
        } => match default_value {
            Some(value) => format!("dataType={} default={value}", data_type.as_str()),
            None => format!("dataType={}", data_type.as_str()),
        },
        DisplayParameter::Context {
            source_parameter_key,
            ..
        } => format!("source={source_parameter_key}"),
        DisplayParameter::Secret {
            collection_id,
            identity_key,
            identity_fields,
            ..
        } => format!(
            "collection={collection_id} identityKey={identity_key} identityFields={}",
            identity_fields.join(",")
        ),
        DisplayParameter::CreditCardData {
            collection_id,
            item_id,
            ..
        } => format!("collection={collection_id} item={item_id}"),
        DisplayParameter::Credential {
            collection_id,
            url_parameter_key,
            ..
        } => format!(
            "collection={} urlParameterKey={url_parameter_key}",
            collection_id.as_deref().unwrap_or("-")
        ),
    };
    let line = format!(
        "- {} [{}] {detail}",
        parameter.key(),
        parameter.parameter_type()
    );
    match parameter.description() {
        Some(description) => format!("{line} # {description}"),
        None => line,
    }
}

fn render_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  {issue}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn or_unset(value: Option<&str>) -> &str {
    value.unwrap_or("<unset>")
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
