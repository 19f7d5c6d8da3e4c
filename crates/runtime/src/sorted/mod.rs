//! Algorithms for vectors that are kept sorted by key
//!
//! Keys are ints, floats, or strings. A vector can also be used as a key, in which case its first
//! element is compared, which allows sorted vectors of `[key, value...]` entries to act as maps
//! or multimaps.

mod compare;
mod search;

pub use self::{
    compare::compare_keys,
    search::{SearchResult, search_equal_run},
};
