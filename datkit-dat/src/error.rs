use datkit_core::Variant;

/// Why a field manipulation declined to change anything.
///
/// These are expected outcomes rather than faults: the record is always left
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationFailure {
    #[error("field name is empty")]
    EmptyFieldName,

    #[error("{variant} record has no '{field}' field")]
    MissingField { variant: Variant, field: String },

    #[error("cannot copy between {from} and {to} records")]
    VariantMismatch { from: Variant, to: Variant },
}

impl OperationFailure {
    pub fn missing_field(variant: Variant, field: impl Into<String>) -> Self {
        Self::MissingField {
            variant,
            field: field.into(),
        }
    }
}
