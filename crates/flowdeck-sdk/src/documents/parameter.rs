use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const PARAMETER_TYPE_TAGS: [&str; 7] = [
    "workflow",
    "context",
    "bitwarden_sensitive_information",
    "bitwarden_credit_card_data",
    "bitwarden_login_credential",
    "aws_secret",
    "output",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "parameter_type", rename_all = "snake_case")]
pub enum WorkflowParameter {
    Workflow(WorkflowInputParameter),
    Context(ContextParameter),
    BitwardenSensitiveInformation(BitwardenSensitiveInformationParameter),
    BitwardenCreditCardData(BitwardenCreditCardDataParameter),
    BitwardenLoginCredential(BitwardenLoginCredentialParameter),
    AwsSecret(AwsSecretParameter),
    Output(OutputParameter),
}

impl WorkflowParameter {
    pub fn key(&self) -> &str {
        match self {
            WorkflowParameter::Workflow(parameter) => &parameter.key,
            WorkflowParameter::Context(parameter) => &parameter.key,
            WorkflowParameter::BitwardenSensitiveInformation(parameter) => &parameter.key,
            WorkflowParameter::BitwardenCreditCardData(parameter) => &parameter.key,
            WorkflowParameter::BitwardenLoginCredential(parameter) => &parameter.key,
            WorkflowParameter::AwsSecret(parameter) => &parameter.key,
            WorkflowParameter::Output(parameter) => &parameter.key,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            WorkflowParameter::Workflow(parameter) => parameter.description.as_deref(),
            WorkflowParameter::Context(parameter) => parameter.description.as_deref(),
            WorkflowParameter::BitwardenSensitiveInformation(parameter) => {
                parameter.description.as_deref()
            }
            WorkflowParameter::BitwardenCreditCardData(parameter) => parameter.description.as_deref(),
            WorkflowParameter::BitwardenLoginCredential(parameter) => {
                parameter.description.as_deref()
            }
            WorkflowParameter::AwsSecret(parameter) => parameter.description.as_deref(),
            WorkflowParameter::Output(parameter) => parameter.description.as_deref(),
        }
    }

    pub fn parameter_type(&self) -> &'static str {
        match self {
            WorkflowParameter::Workflow(_) => "workflow",
            WorkflowParameter::Context(_) => "context",
            WorkflowParameter::BitwardenSensitiveInformation(_) => "bitwarden_sensitive_information",
            WorkflowParameter::BitwardenCreditCardData(_) => "bitwarden_credit_card_data",
            WorkflowParameter::BitwardenLoginCredential(_) => "bitwarden_login_credential",
            WorkflowParameter::AwsSecret(_) => "aws_secret",
            WorkflowParameter::Output(_) => "output",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowParameterType {
    String,
    Integer,
    Float,
    Boolean,
    Json,
    FileUrl,
    CredentialId,
}

impl WorkflowParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowParameterType::String => "string",
            WorkflowParameterType::Integer => "integer",
            WorkflowParameterType::Float => "float",
            WorkflowParameterType::Boolean => "boolean",
            WorkflowParameterType::Json => "json",
            WorkflowParameterType::FileUrl => "file_url",
            WorkflowParameterType::CredentialId => "credential_id",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowInputParameter {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    pub workflow_parameter_type: WorkflowParameterType,
    #[serde(default)]
    pub default_value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextSource {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextParameter {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    pub source: ContextSource,
    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitwardenSensitiveInformationParameter {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    pub bitwarden_collection_id: String,
    pub bitwarden_identity_key: String,
    #[serde(default)]
    pub bitwarden_identity_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitwardenCreditCardDataParameter {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    pub bitwarden_collection_id: String,
    pub bitwarden_item_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitwardenLoginCredentialParameter {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bitwarden_collection_id: Option<String>,
    pub url_parameter_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsSecretParameter {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
    pub aws_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputParameter {
    pub key: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
