#![warn(missing_docs)]

//! Quick-open style fuzzy sorting of string collections.
//!
//! `fuzzysort` scores candidate strings against a query by ordered
//! subsequence matching, rewarding matches at word starts, camel-case humps
//! and runs of adjacent letters, and sorts collections so the best matches
//! come first. Diacritics are ignored when the query has none.
//!
//! ```
//! use fuzzysort::sort_strings;
//!
//! let mut names = ["Joe Gomez", "Trent Alexander-Arnold", "Takumi Minamino"];
//! sort_strings(&mut names, "taa");
//! assert_eq!(names[0], "Trent Alexander-Arnold");
//! ```
//!
//! Sorting **reorders the collection in place**. Use [`rank`] to compute
//! the order without touching the data.

/// Fuzzy scoring of one candidate against one query.
pub mod matcher;

/// Tunable bonuses and penalties.
pub mod options;

/// Ranking and in-place reordering of whole collections.
pub mod sort;

/// The capability trait collections implement to be sortable.
pub mod sortable;

/// Sorting string-like items without an adapter.
pub mod strings;

// Re-export primary public API types and functions at the crate root.
pub use matcher::{Match, match_str};
pub use options::SortOptions;
pub use sort::{Ranking, Sorter, compare_matches, rank, sort, sort_with_options};
pub use sortable::Sortable;
pub use strings::{AsMatchStr, sort_strings};
