//! Distinct candidate values searched by [`crate::search`].
//!
//! A [`ValueSet`] keeps set semantics (each value appears once) but also
//! remembers the order in which values were first inserted. Searches walk
//! the values in that order, so the subset they report is reproducible.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::EntrySumError;

#[derive(Debug, Clone, Default)]
pub struct ValueSet {
    order: Vec<i64>,
    members: HashSet<i64>,
}

impl ValueSet {
    /// Build a set from `values`. Later duplicates are dropped.
    pub fn new<I: IntoIterator<Item = i64>>(values: I) -> Self {
        let mut set = Self::default();
        for v in values {
            set.insert(v);
        }
        set
    }

    fn insert(&mut self, value: i64) -> bool {
        if self.members.insert(value) {
            self.order.push(value);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.members.contains(&value)
    }

    /// Values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.order.iter().copied()
    }

    /// Copy of this set with `value` removed. The remaining values keep
    /// their relative order.
    pub fn without(&self, value: i64) -> Self {
        Self::new(self.iter().filter(|&v| v != value))
    }
}

impl FromIterator<i64> for ValueSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl PartialEq for ValueSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for ValueSet {}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}

/// Parse a list such as `"1721, 979 366"`. Commas and whitespace both
/// separate values.
impl FromStr for ValueSet {
    type Err = EntrySumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| {
                tok.parse::<i64>()
                    .map_err(|e| EntrySumError::Parse(format!("invalid value '{tok}': {e}")))
            })
            .collect()
    }
}
