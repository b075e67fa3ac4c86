//! Brute-force search for two or three distinct values with a given sum.
//!
//! Values are tried in the insertion order of the [`ValueSet`], so the
//! result is deterministic: the first qualifying subset in that order wins.
//! A value never pairs with itself. When `target - v == v` the candidate is
//! skipped, because a set cannot hold `v` twice.

use std::fmt;

use tracing::{debug, trace};

use crate::{EntrySumError, SearchStats, Subset, ValueSet};

/// Number of entries a search combines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubsetSize {
    Pair,
    Triple,
}

impl SubsetSize {
    pub fn get(self) -> usize {
        match self {
            SubsetSize::Pair => 2,
            SubsetSize::Triple => 3,
        }
    }
}

impl TryFrom<usize> for SubsetSize {
    type Error = EntrySumError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            2 => Ok(SubsetSize::Pair),
            3 => Ok(SubsetSize::Triple),
            other => Err(EntrySumError::InvalidSize(other)),
        }
    }
}

impl fmt::Display for SubsetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Find two distinct values in `values` summing to `target`.
pub fn find_pair(values: &ValueSet, target: i64) -> Option<Subset> {
    find_pair_counted(values, target, &mut SearchStats::new())
}

/// Find three distinct values in `values` summing to `target`.
pub fn find_triple(values: &ValueSet, target: i64) -> Option<Subset> {
    find_triple_counted(values, target, &mut SearchStats::new())
}

/// [`find_pair`], recording the work done into `stats`.
pub fn find_pair_counted(
    values: &ValueSet,
    target: i64,
    stats: &mut SearchStats,
) -> Option<Subset> {
    stats.tick_pair_scan();
    for v in values.iter() {
        stats.tick_candidate();
        // No i64 partner exists when the complement overflows.
        let Some(complement) = target.checked_sub(v) else {
            trace!(v, target, "complement out of range");
            continue;
        };
        if complement == v {
            continue;
        }
        stats.tick_probe();
        if values.contains(complement) {
            debug!(v, complement, target, "pair found");
            return Some(Subset::pair(v, complement));
        }
    }
    None
}

/// [`find_triple`], recording the work done into `stats`.
///
/// For each value `v` the remaining values are searched for a pair summing
/// to `target - v`, so at most `values.len()` pair scans run.
pub fn find_triple_counted(
    values: &ValueSet,
    target: i64,
    stats: &mut SearchStats,
) -> Option<Subset> {
    for v in values.iter() {
        stats.tick_candidate();
        let Some(rest_target) = target.checked_sub(v) else {
            trace!(v, target, "remaining target out of range");
            continue;
        };
        let remaining = values.without(v);
        if let Some(pair) = find_pair_counted(&remaining, rest_target, stats) {
            debug!(v, %pair, target, "triple found");
            return Some(pair.with(v));
        }
    }
    None
}

/// Search for a subset of `size` entries summing to `target`.
pub fn find_subset(values: &ValueSet, target: i64, size: SubsetSize) -> Option<Subset> {
    find_subset_counted(values, target, size, &mut SearchStats::new())
}

pub fn find_subset_counted(
    values: &ValueSet,
    target: i64,
    size: SubsetSize,
    stats: &mut SearchStats,
) -> Option<Subset> {
    match size {
        SubsetSize::Pair => find_pair_counted(values, target, stats),
        SubsetSize::Triple => find_triple_counted(values, target, stats),
    }
}

/// Like [`find_subset`] but takes a raw size, rejecting anything other
/// than 2 or 3.
pub fn find_subset_of_len(
    values: &ValueSet,
    target: i64,
    size: usize,
) -> Result<Option<Subset>, EntrySumError> {
    let size = SubsetSize::try_from(size)?;
    Ok(find_subset(values, target, size))
}
