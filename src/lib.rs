//! Brute-force search for two or three distinct entries of a small value
//! set whose sum matches a target.
//!
//! ```
//! use entrysum::{find_triple, ValueSet};
//!
//! let entries = ValueSet::new([1721, 979, 366, 299, 675, 1456]);
//! let triple = find_triple(&entries, 2020).expect("triple exists");
//! assert_eq!(triple.to_string(), "{366, 675, 979}");
//! ```

mod config;
mod error;
pub mod io_utils;
pub mod logger;
mod output;
mod search;
mod stats;
mod subset;
mod value_set;

pub use config::{SearchConfig, DEFAULT_TARGET, DEFAULT_VALUES};
pub use error::EntrySumError;
pub use output::{render, OutputFormat};
pub use search::{
    find_pair, find_pair_counted, find_subset, find_subset_counted, find_subset_of_len,
    find_triple, find_triple_counted, SubsetSize,
};
pub use stats::SearchStats;
pub use subset::Subset;
pub use value_set::ValueSet;
