//! Error types for form rendering and schema fetching.

use thiserror::Error;

/// Errors raised while fetching a schema or rendering a form.
#[derive(Debug, Error)]
pub enum FormError {
    /// A record carried a `Type` outside the supported set.
    #[error("field {field}: unsupported field type {type_name:?}")]
    UnsupportedFieldType { field: String, type_name: String },

    /// A mandatory attribute is missing or has the wrong shape.
    #[error("field {field}: missing or malformed attribute {attribute}")]
    MalformedFieldRecord { field: String, attribute: String },

    /// The HTTP request could not be completed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API rejected the credentials.
    #[error("authentication rejected with status {status}")]
    Auth { status: u16 },

    /// The API answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not a valid schema document.
    #[error("failed to decode schema: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FormError {
    pub(crate) fn unsupported(field: &str, type_name: &str) -> Self {
        Self::UnsupportedFieldType {
            field: field.to_string(),
            type_name: type_name.to_string(),
        }
    }

    pub(crate) fn malformed(field: &str, attribute: &str) -> Self {
        Self::MalformedFieldRecord {
            field: field.to_string(),
            attribute: attribute.to_string(),
        }
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FormError::UnsupportedFieldType {
            field: "Field3".to_string(),
            type_name: "likert".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"field Field3: unsupported field type "likert""#
        );

        let err = FormError::malformed("Field1", "Title");
        assert_eq!(
            err.to_string(),
            "field Field1: missing or malformed attribute Title"
        );
    }
}
