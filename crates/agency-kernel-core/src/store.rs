use std::collections::BTreeSet;
use std::sync::Arc;

use crate::filter::{filter, TextField};
use crate::record::{Record, RecordId, Searchable};
use crate::summary::Summarize;
use crate::KernelError;

/// Immutable, ordered snapshot of one record kind.
///
/// Clones share the same backing slice. There are no mutation operations; a screen that
/// needs different data builds a new store.
#[derive(Debug, Clone)]
pub struct RecordStore<R> {
    records: Arc<[R]>,
}

impl<R: Record> RecordStore<R> {
    /// Build a store from records in display order.
    ///
    /// # Errors
    /// Returns [`KernelError::DuplicateId`] when two records share an id.
    pub fn new(records: Vec<R>) -> Result<Self, KernelError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                tracing::warn!(record_id = %record.id(), "duplicate record id in store literal");
                return Err(KernelError::DuplicateId(record.id().to_string()));
            }
        }
        tracing::debug!(records = records.len(), "record store built");
        Ok(Self { records: records.into() })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Filter on caller-chosen text fields.
    ///
    /// # Errors
    /// Returns [`KernelError::EmptyFieldList`] when `fields` is empty.
    pub fn filter_by(
        &self,
        query: &str,
        fields: &[TextField<R>],
    ) -> Result<Vec<&R>, KernelError> {
        filter(&self.records, query, fields)
    }
}

impl<R: Searchable> RecordStore<R> {
    /// Filter on the record kind's search-box fields.
    ///
    /// # Errors
    /// Returns [`KernelError::EmptyFieldList`] when the kind declares no search fields.
    pub fn search(&self, query: &str) -> Result<Vec<&R>, KernelError> {
        filter(&self.records, query, R::SEARCH_FIELDS)
    }
}

impl<R: Summarize> RecordStore<R> {
    #[must_use]
    pub fn summarize(&self) -> R::Summary {
        R::summarize(&self.records)
    }
}

impl<'a, R> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
