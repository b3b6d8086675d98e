use std::cmp::Ordering;

/// Comparison operator of a filter predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    /// An unrecognized operator token. Never matches anything.
    Invalid,
}

/// Characters that may appear in an operator token.
pub(crate) fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '!' | ':' | '<' | '>')
}

impl Operator {
    /// Map an operator token to its operator.
    ///
    /// Unknown combinations such as `=>` or `<>` become [`Operator::Invalid`]
    /// rather than an error.
    pub fn from_token(token: &str) -> Self {
        match token {
            "==" | "::" | "=" | ":" => Self::Equals,
            "!=" | "!:" | "!" => Self::NotEquals,
            ">=" => Self::GreaterThanOrEqual,
            ">" => Self::GreaterThan,
            "<=" => Self::LessThanOrEqual,
            "<" => Self::LessThan,
            _ => Self::Invalid,
        }
    }

    /// Canonical token, or `None` for [`Operator::Invalid`].
    pub fn token(&self) -> Option<&'static str> {
        match self {
            Self::Equals => Some("=="),
            Self::NotEquals => Some("!="),
            Self::GreaterThan => Some(">"),
            Self::GreaterThanOrEqual => Some(">="),
            Self::LessThan => Some("<"),
            Self::LessThanOrEqual => Some("<="),
            Self::Invalid => None,
        }
    }

    /// Whether this is one of the four ordering operators.
    pub fn is_ordering(&self) -> bool {
        matches!(
            self,
            Self::GreaterThan | Self::GreaterThanOrEqual | Self::LessThan | Self::LessThanOrEqual
        )
    }

    /// Whether `actual.cmp(pattern) == ordering` satisfies this operator.
    pub fn holds(&self, ordering: Ordering) -> bool {
        match self {
            Self::Equals => ordering == Ordering::Equal,
            Self::NotEquals => ordering != Ordering::Equal,
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::GreaterThanOrEqual => ordering != Ordering::Less,
            Self::LessThan => ordering == Ordering::Less,
            Self::LessThanOrEqual => ordering != Ordering::Greater,
            Self::Invalid => false,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token().unwrap_or("<invalid>"))
    }
}
