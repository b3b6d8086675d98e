use datkit_core::{Record, Variant};
use regex::Regex;

use crate::error::FilterError;
use crate::key::FieldKey;
use crate::operator::{Operator, is_operator_char};

/// A single `scope.field<op>value` comparison.
///
/// The pattern is compiled as a regular expression up front when it is one;
/// patterns that fail to compile are compared literally.
#[derive(Debug, Clone)]
pub struct FilterPredicate {
    key: FieldKey,
    operator: Operator,
    pattern: Option<String>,
    regex: Option<Regex>,
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

/// Interpret `yes`/`true` and `no`/`false` (case-insensitive) as booleans.
fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("yes") || s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("no") || s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

impl FilterPredicate {
    pub fn new(key: FieldKey, pattern: Option<&str>, operator: Operator) -> Self {
        let regex = pattern.and_then(|p| Regex::new(p).ok());
        Self {
            key,
            operator,
            pattern: pattern.map(str::to_string),
            regex,
        }
    }

    /// Parse a combined `scope.field<op>value` expression.
    ///
    /// Anything after the operator is the value, dots included. An empty
    /// value means "no data". Unknown operator tokens parse successfully
    /// as [`Operator::Invalid`].
    pub fn parse(input: &str) -> Result<Self, FilterError> {
        let key_end = input
            .find(|c: char| !is_key_char(c))
            .ok_or_else(|| FilterError::missing_operator(input))?;
        let (key, rest) = input.split_at(key_end);

        // Operator characters are ASCII, so the char count is the byte length.
        let token_len = rest
            .chars()
            .take(2)
            .take_while(|c| is_operator_char(*c))
            .count();
        if token_len == 0 {
            let ch = rest.chars().next().unwrap_or_default();
            return Err(FilterError::InvalidCharacter {
                input: input.to_string(),
                ch,
            });
        }
        let (token, value) = rest.split_at(token_len);

        let key = FieldKey::parse(key)?;
        let operator = Operator::from_token(token);
        if operator == Operator::Invalid {
            log::debug!("unrecognized operator '{token}' in filter '{input}'");
        }

        Ok(Self::new(
            key,
            Some(value).filter(|v| !v.is_empty()),
            operator,
        ))
    }

    /// Parse a legacy `key:value` pair.
    ///
    /// The key may carry a `!`, `~` or `not-` prefix, which turns the
    /// comparison into [`Operator::NotEquals`].
    pub fn parse_legacy(input: &str) -> Result<Self, FilterError> {
        let trimmed = input.trim();
        let (negated, rest) = if let Some(rest) = trimmed
            .strip_prefix('!')
            .or_else(|| trimmed.strip_prefix('~'))
        {
            (true, rest)
        } else if trimmed
            .get(..4)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("not-"))
        {
            (true, &trimmed[4..])
        } else {
            (false, trimmed)
        };

        let (key, value) = rest
            .split_once(':')
            .ok_or_else(|| FilterError::missing_operator(input))?;
        let key = FieldKey::parse(key)?;
        let operator = if negated {
            Operator::NotEquals
        } else {
            Operator::Equals
        };

        Ok(Self::new(
            key,
            Some(value).filter(|v| !v.is_empty()),
            operator,
        ))
    }

    pub fn key(&self) -> FieldKey {
        self.key
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Whether this predicate's scope addresses records of `variant`.
    pub fn applies_to(&self, variant: Variant) -> bool {
        self.key.scope().applies_to(variant)
    }

    /// Compare the record's value for this predicate's field.
    pub fn matches(&self, record: &Record) -> bool {
        let actual = record.get_string(self.key.field());
        self.matches_value(actual.as_deref())
    }

    /// Compare a raw value (`None` for "no data") against the pattern.
    pub fn matches_value(&self, actual: Option<&str>) -> bool {
        match (actual, self.pattern.as_deref()) {
            (None, None) => self.operator == Operator::Equals,
            (None, Some(_)) | (Some(_), None) => false,
            (Some(actual), Some(pattern)) => self.compare(actual, pattern),
        }
    }

    fn compare(&self, actual: &str, pattern: &str) -> bool {
        if self.operator == Operator::Invalid {
            return false;
        }

        if let (Some(a), Some(b)) = (parse_bool(actual), parse_bool(pattern)) {
            return match self.operator {
                Operator::Equals => a == b,
                Operator::NotEquals => a != b,
                _ => false,
            };
        }

        if let (Ok(a), Ok(b)) = (actual.parse::<i64>(), pattern.parse::<i64>()) {
            return self.operator.holds(a.cmp(&b));
        }

        // NaN has no ordering; such values fall through to string comparison.
        let ordering = match (actual.parse::<f64>(), pattern.parse::<f64>()) {
            (Ok(a), Ok(b)) => a.partial_cmp(&b),
            _ => None,
        };
        if let Some(ordering) = ordering {
            return self.operator.holds(ordering);
        }

        if self.operator.is_ordering() {
            return false;
        }

        // Names like `Game (USA).sfc` compile as regexes that do not match
        // themselves, so an exact match always counts.
        let equal = actual == pattern
            || self
                .regex
                .as_ref()
                .is_some_and(|regex| regex.is_match(actual));
        match self.operator {
            Operator::Equals => equal,
            _ => !equal,
        }
    }
}

impl std::str::FromStr for FilterPredicate {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for FilterPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.key,
            self.operator,
            self.pattern.as_deref().unwrap_or_default()
        )
    }
}
