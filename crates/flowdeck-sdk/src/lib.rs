pub mod documents;
pub mod editor;
pub mod parse;
pub mod validate;

pub use documents::{
    AwsSecretParameter, BitwardenCreditCardDataParameter, BitwardenLoginCredentialParameter,
    BitwardenSensitiveInformationParameter, ContextParameter, ContextSource, OutputParameter,
    ProxyLocation, WorkflowDefinition, WorkflowInputParameter, WorkflowParameter,
    WorkflowParameterType, WorkflowResource, WorkflowSettings, PARAMETER_TYPE_TAGS,
};
pub use editor::{
    is_displayed_in_editor, normalize_parameter, normalize_parameters, prepare_editor,
    DisplayParameter, EditorInitialState, EditorLoadState, EditorParameterType, HeaderState,
};
pub use parse::{
    parse_document_value, parse_workflow_resource, parse_workflow_resource_with_options,
    workflow_resource_from_value, DocumentFormat, ParseDocumentOptions,
};
pub use validate::validate_workflow_parameters;
