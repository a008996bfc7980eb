use crate::KernelError;

/// Accessor for one searchable text column of a record.
pub type TextField<R> = fn(&R) -> &str;

/// Keep the records where at least one of `fields` contains `query`, ignoring case.
///
/// The query is matched as a literal substring: no trimming, no pattern syntax. An
/// empty query keeps every record. Output order follows `records`.
///
/// # Errors
/// Returns [`KernelError::EmptyFieldList`] when `fields` is empty.
pub fn filter<'a, R>(
    records: &'a [R],
    query: &str,
    fields: &[TextField<R>],
) -> Result<Vec<&'a R>, KernelError> {
    if fields.is_empty() {
        return Err(KernelError::EmptyFieldList);
    }
    if query.is_empty() {
        return Ok(records.iter().collect());
    }

    let needle = query.to_lowercase();
    Ok(records.iter().filter(|record| matches_lowered(*record, &needle, fields)).collect())
}

/// Single-record form of [`filter`]; an empty `fields` list never matches.
#[must_use]
pub fn matches<R>(record: &R, query: &str, fields: &[TextField<R>]) -> bool {
    if fields.is_empty() {
        return false;
    }
    query.is_empty() || matches_lowered(record, &query.to_lowercase(), fields)
}

fn matches_lowered<R>(record: &R, needle: &str, fields: &[TextField<R>]) -> bool {
    fields.iter().any(|field| field(record).to_lowercase().contains(needle))
}
