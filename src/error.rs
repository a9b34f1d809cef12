use std::fmt;

/// Error types for manifest loading and identity resolution
#[derive(Debug)]
pub enum ManifestError {
    /// Segment is not valid YAML
    Decode(String),

    /// Document root is not a mapping
    NotAnObject,

    /// Required type attribute (`apiVersion`, `kind`) is missing or empty
    MissingField(&'static str),

    /// Attribute exists but has the wrong shape
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },

    /// `apiVersion` is not of the form `version` or `group/version`
    InvalidApiVersion(String),

    /// Canonical re-serialization failed
    Normalize(String),

    /// Failure while processing the n-th document (1-based) of an input
    Document {
        position: usize,
        cause: Box<ManifestError>,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Decode(msg) => {
                write!(f, "Failed to decode document: {}", msg)
            }
            ManifestError::NotAnObject => {
                write!(f, "Document is not a mapping")
            }
            ManifestError::MissingField(field) => {
                write!(f, "Object '{}' is missing or empty", field)
            }
            ManifestError::TypeMismatch { field, expected } => {
                write!(f, "Attribute '{}' must be {}", field, expected)
            }
            ManifestError::InvalidApiVersion(value) => {
                write!(f, "Unexpected apiVersion '{}'", value)
            }
            ManifestError::Normalize(msg) => {
                write!(f, "Failed to normalize document: {}", msg)
            }
            ManifestError::Document { position, .. } => {
                write!(f, "Document #{}", position)
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Document { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

impl ManifestError {
    /// Attach the position of the failing document within its input
    pub fn at_document(self, position: usize) -> Self {
        ManifestError::Document {
            position,
            cause: Box::new(self),
        }
    }
}

impl From<serde_yaml::Error> for ManifestError {
    fn from(err: serde_yaml::Error) -> Self {
        ManifestError::Decode(err.to_string())
    }
}

impl From<serde_json::Error> for ManifestError {
    fn from(err: serde_json::Error) -> Self {
        ManifestError::Normalize(err.to_string())
    }
}

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;
