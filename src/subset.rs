//! A found combination of distinct entries.

use serde::Serialize;
use std::fmt;

/// Two or three distinct values, stored in ascending order.
///
/// Serialises as a plain JSON array, e.g. `[366, 675, 979]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Subset {
    values: Vec<i64>,
}

impl Subset {
    pub(crate) fn pair(a: i64, b: i64) -> Self {
        debug_assert_ne!(a, b);
        Self {
            values: if a < b { vec![a, b] } else { vec![b, a] },
        }
    }

    /// Union with one more value not already present.
    pub(crate) fn with(mut self, value: i64) -> Self {
        debug_assert!(!self.contains(value));
        let at = self.values.partition_point(|&v| v < value);
        self.values.insert(at, value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn contains(&self, value: i64) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Sum widened to `i128` so it never wraps.
    pub fn sum(&self) -> i128 {
        self.values.iter().map(|&v| v as i128).sum()
    }

    /// Product of the values, `None` on `i128` overflow.
    pub fn product(&self) -> Option<i128> {
        self.values
            .iter()
            .try_fold(1i128, |acc, &v| acc.checked_mul(v as i128))
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}
