//! Inclusive ranges and the compaction pass.

use crate::entry::YearEntry;
use crate::error::InvalidInputError;
use std::fmt;
use std::ops::RangeInclusive;

/// An inclusive run of consecutive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    /// Create a range. Panics if `start > end`.
    pub fn new(start: i64, end: i64) -> Self {
        assert!(start <= end, "range start {start} is after end {end}");
        Self { start, end }
    }

    /// A range covering exactly one value.
    pub fn single(value: i64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// Number of values covered.
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Every value covered, in ascending order.
    pub fn values(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl From<Range> for RangeInclusive<i64> {
    fn from(range: Range) -> Self {
        range.start..=range.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Collapse a collection of integers into the minimal ascending list of
/// inclusive ranges covering exactly the same values.
///
/// Order and duplicates in the input do not affect the result. Empty input
/// yields an empty list.
pub fn compact<I>(values: I) -> Vec<Range>
where
    I: IntoIterator,
    I::Item: Into<i64>,
{
    let mut values: Vec<i64> = values.into_iter().map(Into::into).collect();
    values.sort_unstable();
    values.dedup();

    let mut ranges: Vec<Range> = Vec::new();
    for value in values {
        match ranges.last_mut() {
            // checked_add keeps i64::MAX from wrapping into a false neighbour
            Some(current) if current.end.checked_add(1) == Some(value) => current.end = value,
            _ => ranges.push(Range::single(value)),
        }
    }

    ranges
}

/// Like [`compact`], but for loosely-typed input. Fails on the first entry
/// that does not hold an integer.
pub fn try_compact<I>(entries: I) -> Result<Vec<Range>, InvalidInputError>
where
    I: IntoIterator,
    I::Item: YearEntry,
{
    let values = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            entry.as_year().ok_or_else(|| InvalidInputError {
                index,
                value: entry.describe(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(compact(values))
}

/// Render ranges as `2019-2021, 2023`, joined by `separator`.
pub fn format(ranges: &[Range], separator: &str) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

/// [`format`] with the `", "` separator.
pub fn format_default(ranges: &[Range]) -> String {
    format(ranges, crate::DEFAULT_SEPARATOR)
}
