//! Error types for the osskit serde layer.

/// Errors raised while converting between models and their wire form.
///
/// All variants are terminal for the current call. The client layer above
/// decides whether to retry or wrap them.
#[derive(Debug, thiserror::Error)]
pub enum SerdeError {
    /// A value has no wire encoding, or the request could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A field marked `required` was unset when the request was serialized.
    #[error("missing required field, {field}")]
    ParamRequired {
        /// Attribute name of the missing field.
        field: String,
    },

    /// A response, document, or value could not be decoded.
    #[error("deserialization error: {0}")]
    Deserialization(String),

    /// Failure raised by a caller-supplied serializer or deserializer hook.
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

impl SerdeError {
    /// Build a [`SerdeError::Serialization`].
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Build a [`SerdeError::Deserialization`].
    #[must_use]
    pub fn deserialization(message: impl Into<String>) -> Self {
        Self::Deserialization(message.into())
    }

    /// Build a [`SerdeError::ParamRequired`] naming `field`.
    #[must_use]
    pub fn param_required(field: impl Into<String>) -> Self {
        Self::ParamRequired {
            field: field.into(),
        }
    }
}

/// Convenience result type for serde operations.
pub type SerdeResult<T> = Result<T, SerdeError>;
