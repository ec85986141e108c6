//! Search and ordering over record sequences.
//!
//! These functions are the filter and sort stages of the store's projection
//! pipeline. They borrow records and never reorder the input slice.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::record::{Record, RecordField};

/// Ordering direction of a sorted column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The other direction.
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortConfig {
    pub key: RecordField,
    pub direction: SortDirection,
}

impl SortConfig {
    /// Ascending order on `key`.
    pub const fn ascending(key: RecordField) -> Self {
        Self {
            key,
            direction: SortDirection::Asc,
        }
    }

    /// Next configuration after the user picks `key`: the same key flips
    /// direction, a different key starts ascending.
    pub fn toggled(current: Option<Self>, key: RecordField) -> Self {
        match current {
            Some(active) if active.key == key => Self {
                key,
                direction: active.direction.flipped(),
            },
            _ => Self::ascending(key),
        }
    }
}

/// Rows containing `query` in any field, ignoring case.
///
/// An empty query keeps every row. Input order is preserved.
pub fn search<'a>(records: &'a [Record], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return records.iter().collect();
    }
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record
                .searchable_values()
                .any(|value| value.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Stable sort of `rows` on the text of `config.key`.
///
/// Comparison is case-sensitive and lexicographic; equal keys keep their
/// relative order in both directions.
pub fn sort_rows(rows: &mut [&Record], config: SortConfig) {
    rows.sort_by(|left, right| {
        config
            .direction
            .apply(left.field(config.key).cmp(right.field(config.key)))
    });
}
