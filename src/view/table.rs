use crate::bit::BitValue;

/// One row of the result table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRow {
    /// 1-based iteration number, the newest value has the highest.
    pub iteration: usize,
    pub value: BitValue,
}

/// Turns a newest-first result list into table rows, newest first.
///
/// Row `i` of a list of length `n` is iteration `n - i`.
pub fn result_rows<'a, I>(results: I) -> impl Iterator<Item = ResultRow> + 'a
where
    I: IntoIterator<Item = &'a BitValue>,
    I::IntoIter: ExactSizeIterator + 'a,
{
    let results = results.into_iter();
    let n = results.len();
    results
        .enumerate()
        .map(move |(i, &value)| ResultRow {
            iteration: n - i,
            value,
        })
}
