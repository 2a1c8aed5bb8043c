// src/core/selection.rs

use crate::constants::RUN_ALL_TOKEN;
use std::collections::HashSet;
use thiserror::Error;

/// Why a numeric selection was rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// A segment that is not a base-10 integer.
    #[error("invalid number: \"{0}\"")]
    InvalidNumber(String),
    /// An integer outside `1..=max`.
    #[error("choice out of range: {value} (valid choices are 1-{max})")]
    OutOfRange {
        /// The offending value.
        value: i64,
        /// The catalog size at parse time.
        max: usize,
    },
}

/// An ordered, duplicate-free list of catalog entries chosen for one run.
///
/// Internally every entry is a 0-based catalog index. Operators only ever see
/// 1-based positions, so the conversion happens in `parse_numbers`,
/// `from_positions` and `positions` and nowhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    indices: Vec<usize>,
}

impl Selection {
    /// Every catalog entry, in catalog order.
    pub fn all(catalog_len: usize) -> Self {
        Self {
            indices: (0..catalog_len).collect(),
        }
    }

    /// Builds a selection from 0-based indices, dropping repeats.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: dedupe(indices),
        }
    }

    /// Builds a selection from stored 1-based positions.
    ///
    /// Positions below 1 have no catalog entry and are returned in the second
    /// element so the caller can report them. Positions past the end of the
    /// catalog are kept; the executor skips them.
    pub fn from_positions(positions: &[i64]) -> (Self, Vec<i64>) {
        let mut rejected = Vec::new();
        let mut indices = Vec::with_capacity(positions.len());
        for &position in positions {
            match usize::try_from(position).ok().and_then(|p| p.checked_sub(1)) {
                Some(index) => indices.push(index),
                None => rejected.push(position),
            }
        }
        (Self { indices }, rejected)
    }

    /// The 1-based positions, as persisted and as typed with `--numbers`.
    pub fn positions(&self) -> Vec<i64> {
        self.indices
            .iter()
            .filter_map(|&i| i64::try_from(i + 1).ok())
            .collect()
    }

    /// The 0-based catalog indices, in run order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of selected entries.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// True when every entry of a catalog of `catalog_len` items is selected.
    pub fn covers_all(&self, catalog_len: usize) -> bool {
        if catalog_len == 0 {
            return false;
        }
        let chosen: HashSet<usize> = self.indices.iter().copied().collect();
        (0..catalog_len).all(|i| chosen.contains(&i))
    }
}

/// Parses a comma-separated list of 1-based positions.
///
/// Empty segments are ignored. A `0` segment anywhere selects the whole
/// catalog and stops parsing. Any other segment must be an integer in
/// `1..=max`; the first one that is not fails the whole parse.
pub fn parse_numbers(input: &str, max: usize) -> Result<Selection, SelectionError> {
    let mut picked = Vec::new();
    for segment in input.split(',') {
        let token = segment.trim();
        if token.is_empty() {
            continue;
        }
        if token == RUN_ALL_TOKEN {
            return Ok(Selection::all(max));
        }
        let value: i64 = token
            .parse()
            .map_err(|_| SelectionError::InvalidNumber(token.to_string()))?;
        let index = usize::try_from(value)
            .ok()
            .filter(|&n| (1..=max).contains(&n))
            .ok_or(SelectionError::OutOfRange { value, max })?;
        picked.push(index - 1);
    }
    Ok(Selection::from_indices(picked))
}

/// Removes repeated values, keeping the first occurrence of each.
fn dedupe(values: impl IntoIterator<Item = usize>) -> Vec<usize> {
    let mut seen = HashSet::new();
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}
