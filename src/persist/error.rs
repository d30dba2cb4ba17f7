use std::fmt;

#[derive(Debug)]
pub enum PersistError {
    /// The form has neither an identifier override nor an element id, so no
    /// storage key can be derived
    MissingIdentity,

    /// Record failed to encode for storage
    Encode { source: serde_json::Error },

    /// Stored text under this key is not a valid record
    Decode { key: String, source: serde_json::Error },
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::MissingIdentity => {
                write!(
                    f,
                    "form has no element id and no identifier override; cannot derive a storage key"
                )
            }
            PersistError::Encode { source } => {
                write!(f, "failed to encode record: {}", source)
            }
            PersistError::Decode { key, source } => {
                write!(f, "stored record under '{}' is malformed: {}", key, source)
            }
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::Encode { source } => Some(source),
            PersistError::Decode { source, .. } => Some(source),
            PersistError::MissingIdentity => None,
        }
    }
}
