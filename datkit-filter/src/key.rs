use datkit_core::Scope;

use crate::error::FilterError;

/// A validated `scope.field` reference.
///
/// Both halves are normalized: the scope alias is resolved to its canonical
/// [`Scope`] and the field is stored under its schema spelling. A `FieldKey`
/// only exists if the field is legal in its scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldKey {
    scope: Scope,
    field: &'static str,
}

impl FieldKey {
    /// Build a key from an already split scope and field.
    pub fn new(scope: &str, field: &str) -> Result<Self, FilterError> {
        let scope_name = scope.trim();
        let field_name = field.trim();
        if scope_name.is_empty() || field_name.is_empty() {
            return Err(FilterError::invalid_key(format!("{scope}.{field}")));
        }

        let resolved = Scope::resolve(scope_name)
            .ok_or_else(|| FilterError::UnknownScope(scope_name.to_string()))?;
        let canonical =
            resolved
                .canonical_field(field_name)
                .ok_or_else(|| FilterError::UnknownField {
                    scope: resolved.name().to_string(),
                    field: field_name.to_string(),
                })?;

        Ok(Self {
            scope: resolved,
            field: canonical,
        })
    }

    /// Parse a `scope.field` string. Exactly one dot is allowed.
    pub fn parse(key: &str) -> Result<Self, FilterError> {
        if key.trim().is_empty() {
            return Err(FilterError::EmptyKey);
        }

        let mut parts = key.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(scope), Some(field), None) => Self::new(scope, field),
            _ => Err(FilterError::invalid_key(key)),
        }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn field(&self) -> &'static str {
        self.field
    }
}

impl std::str::FromStr for FieldKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.scope, self.field)
    }
}
