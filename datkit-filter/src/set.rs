use datkit_core::Record;

use crate::error::FilterError;
use crate::predicate::FilterPredicate;

/// An ordered list of predicates evaluated together against each record.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    predicates: Vec<FilterPredicate>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every expression in order. The first parse error is returned.
    pub fn from_strings<I, S>(filters: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        filters
            .into_iter()
            .map(|filter| FilterPredicate::parse(filter.as_ref()))
            .collect()
    }

    pub fn push(&mut self, predicate: FilterPredicate) {
        self.predicates.push(predicate);
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterPredicate> {
        self.predicates.iter()
    }

    /// Whether `record` passes every predicate whose scope applies to it.
    ///
    /// Predicates scoped to other record kinds are skipped, so a record no
    /// predicate applies to passes.
    pub fn run(&self, record: &Record) -> bool {
        let variant = record.variant();
        for predicate in &self.predicates {
            if !predicate.applies_to(variant) {
                log::trace!("skipping '{predicate}' for {variant} record");
                continue;
            }
            if !predicate.matches(record) {
                log::trace!("{variant} record rejected by '{predicate}'");
                return false;
            }
        }
        true
    }
}

impl FromIterator<FilterPredicate> for FilterSet {
    fn from_iter<T: IntoIterator<Item = FilterPredicate>>(iter: T) -> Self {
        Self {
            predicates: iter.into_iter().collect(),
        }
    }
}

impl Extend<FilterPredicate> for FilterSet {
    fn extend<T: IntoIterator<Item = FilterPredicate>>(&mut self, iter: T) {
        self.predicates.extend(iter);
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a FilterPredicate;
    type IntoIter = std::slice::Iter<'a, FilterPredicate>;

    fn into_iter(self) -> Self::IntoIter {
        self.predicates.iter()
    }
}
