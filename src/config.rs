use crate::{EntrySumError, SubsetSize, ValueSet};

/// Expense report entries searched when no values are given.
pub const DEFAULT_VALUES: [i64; 6] = [1721, 979, 366, 299, 675, 1456];
/// Sum searched for when no target is given.
pub const DEFAULT_TARGET: i64 = 2020;

/// Parameters of a single search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Candidate values, searched in insertion order.
    pub values: ValueSet,
    /// Sum the subset must reach.
    pub target: i64,
    /// Number of entries to combine.
    pub size: SubsetSize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            values: ValueSet::new(DEFAULT_VALUES),
            target: DEFAULT_TARGET,
            size: SubsetSize::Triple,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), EntrySumError> {
        if self.values.is_empty() {
            return Err(EntrySumError::Config("value set is empty".into()));
        }
        Ok(())
    }
}
