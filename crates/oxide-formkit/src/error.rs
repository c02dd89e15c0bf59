//! Error types for path resolution, input naming and theme configuration.

use thiserror::Error;

use crate::value::ValueKind;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// The property path contains forbidden characters or has no segments.
    #[error("invalid property path: {0:?}")]
    InvalidPath(String),

    /// A keyed container has no element under the requested key.
    #[error("undefined element: {path}")]
    UndefinedElement { path: String },

    /// A record has no field with the requested name.
    #[error("undefined field {path} on {type_name}")]
    UndefinedField { path: String, type_name: String },

    /// A record field exists but is shared by the type, not per instance.
    #[error("field {path} on {type_name} is static")]
    StaticField { path: String, type_name: String },

    /// A segment was applied to a value that cannot be navigated further.
    #[error("cannot read {segment:?} from {kind} value at {path}")]
    NotNestable {
        path: String,
        segment: String,
        kind: ValueKind,
    },

    /// The attribute expression does not match `[prefix]key[suffix]`.
    #[error("attribute name must contain word characters only: {0:?}")]
    InvalidAttributeExpression(String),

    /// A tabular expression was used without a form name.
    #[error("form name cannot be empty for tabular inputs: {0:?}")]
    EmptyFormNameForTabularInput(String),

    /// Theme configuration could not be deserialized.
    #[error("invalid theme configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl FormError {
    /// Returns the diagnostic path carried by a path-resolution error.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::UndefinedElement { path }
            | Self::UndefinedField { path, .. }
            | Self::StaticField { path, .. }
            | Self::NotNestable { path, .. } => Some(path.as_str()),
            Self::InvalidPath(expression) => Some(expression.as_str()),
            _ => None,
        }
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
