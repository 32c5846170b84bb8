mod display;
mod header;
mod load;
mod normalize;

pub use display::{DisplayParameter, EditorParameterType};
pub use header::HeaderState;
pub use load::{prepare_editor, EditorInitialState, EditorLoadState};
pub use normalize::{is_displayed_in_editor, normalize_parameter, normalize_parameters};
