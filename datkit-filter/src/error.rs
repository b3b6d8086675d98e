/// Errors raised while parsing field keys and filter expressions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("empty field key")]
    EmptyKey,

    #[error("invalid field key '{0}': expected scope.field")]
    InvalidKey(String),

    #[error("unknown scope '{0}'")]
    UnknownScope(String),

    #[error("field '{field}' is not valid in scope '{scope}'")]
    UnknownField { scope: String, field: String },

    #[error("no comparison operator in filter '{0}'")]
    MissingOperator(String),

    #[error("invalid character '{ch}' in filter '{input}'")]
    InvalidCharacter { input: String, ch: char },
}

impl FilterError {
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey(key.into())
    }

    pub fn missing_operator(input: impl Into<String>) -> Self {
        Self::MissingOperator(input.into())
    }
}
