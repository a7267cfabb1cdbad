use thiserror::Error;

/// Failure to read an expected shape out of a native event payload.
///
/// Paths are dotted, relative to the value handed to the decoder
/// (e.g. `dataTransfer.files.2.size`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("missing field `{path}`")]
    MissingField { path: String },

    #[error("field `{path}` is not a {expected}")]
    WrongType { path: String, expected: &'static str },

    #[error("file list is empty")]
    NoFiles,

    #[error("event target `{found}` is not `{expected}`")]
    TargetMismatch { expected: String, found: String },
}

impl DecodeError {
    pub fn missing(path: impl Into<String>) -> Self {
        DecodeError::MissingField { path: path.into() }
    }

    pub fn wrong_type(path: impl Into<String>, expected: &'static str) -> Self {
        DecodeError::WrongType {
            path: path.into(),
            expected,
        }
    }

    /// Prefix the error path with the field the failing value was read from.
    pub fn within(self, parent: &str) -> Self {
        match self {
            DecodeError::MissingField { path } => DecodeError::MissingField {
                path: join_path(parent, &path),
            },
            DecodeError::WrongType { path, expected } => DecodeError::WrongType {
                path: join_path(parent, &path),
                expected,
            },
            other => other,
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else if child.is_empty() {
        parent.to_string()
    } else {
        format!("{}.{}", parent, child)
    }
}
