use crate::documents::WorkflowParameterType;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditorParameterType {
    #[serde(rename = "workflow")]
    Workflow,
    #[serde(rename = "context")]
    Context,
    #[serde(rename = "secret")]
    Secret,
    #[serde(rename = "credit-card-data")]
    CreditCardData,
    #[serde(rename = "credential")]
    Credential,
}

impl EditorParameterType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorParameterType::Workflow => "workflow",
            EditorParameterType::Context => "context",
            EditorParameterType::Secret => "secret",
            EditorParameterType::CreditCardData => "credit-card-data",
            EditorParameterType::Credential => "credential",
        }
    }
}

impl Display for EditorParameterType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "parameterType", rename_all_fields = "camelCase")]
pub enum DisplayParameter {
    #[serde(rename = "workflow")]
    Workflow {
        key: String,
        data_type: WorkflowParameterType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        default_value: Option<Value>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "context")]
    Context {
        key: String,
        source_parameter_key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "secret")]
    Secret {
        key: String,
        collection_id: String,
        identity_key: String,
        identity_fields: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "credit-card-data")]
    CreditCardData {
        key: String,
        collection_id: String,
        item_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    #[serde(rename = "credential")]
    Credential {
        key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        collection_id: Option<String>,
        url_parameter_key: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl DisplayParameter {
    pub fn key(&self) -> &str {
        match self {
            DisplayParameter::Workflow { key, .. }
            | DisplayParameter::Context { key, .. }
            | DisplayParameter::Secret { key, .. }
            | DisplayParameter::CreditCardData { key, .. }
            | DisplayParameter::Credential { key, .. } => key,
        }
    }

    pub fn parameter_type(&self) -> EditorParameterType {
        match self {
            DisplayParameter::Workflow { .. } => EditorParameterType::Workflow,
            DisplayParameter::Context { .. } => EditorParameterType::Context,
            DisplayParameter::Secret { .. } => EditorParameterType::Secret,
            DisplayParameter::CreditCardData { .. } => EditorParameterType::CreditCardData,
            DisplayParameter::Credential { .. } => EditorParameterType::Credential,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            DisplayParameter::Workflow { description, .. }
            | DisplayParameter::Context { description, .. }
            | DisplayParameter::Secret { description, .. }
            | DisplayParameter::CreditCardData { description, .. }
            | DisplayParameter::Credential { description, .. } => description.as_deref(),
        }
    }
}
