mod parameter;
mod settings;
mod workflow;

pub use parameter::{
    AwsSecretParameter, BitwardenCreditCardDataParameter, BitwardenLoginCredentialParameter,
    BitwardenSensitiveInformationParameter, ContextParameter, ContextSource, OutputParameter,
    WorkflowInputParameter, WorkflowParameter, WorkflowParameterType, PARAMETER_TYPE_TAGS,
};
pub use settings::{ProxyLocation, WorkflowSettings};
pub use workflow::{WorkflowDefinition, WorkflowResource};
