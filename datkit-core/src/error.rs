use crate::variant::Variant;

/// Errors raised when a record would violate its variant's schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("field '{field}' is not valid for {variant} records")]
    UnknownField { variant: Variant, field: String },

    #[error("unknown record type: '{0}'")]
    UnknownVariant(String),
}

impl RecordError {
    pub fn unknown_field(variant: Variant, field: impl Into<String>) -> Self {
        Self::UnknownField {
            variant,
            field: field.into(),
        }
    }
}
