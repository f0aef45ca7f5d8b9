//! Sorting string-like items directly.
//!
//! When items are themselves strings there is no need to write a
//! [`Sortable`] adapter. The [`AsMatchStr`] trait exposes a `&str` from any
//! string-like type, and slices and `Vec`s of such items are [`Sortable`]
//! with the string serving as both comparison key and tie-break order.

use std::borrow::Cow;

use crate::matcher::Match;
use crate::sort::sort;
use crate::sortable::Sortable;

/// Trait for types that can be sorted directly as strings.
///
/// # Built-in Implementations
///
/// - [`String`] -- delegates to [`String::as_str`]
/// - [`str`] -- returns `self`
/// - [`&str`] -- dereferences and returns `self`
/// - [`Cow<'_, str>`] -- delegates to [`AsRef::as_ref`]
/// - [`Box<str>`] -- dereferences
///
/// # Examples
///
/// ```
/// use fuzzysort::AsMatchStr;
///
/// let owned = String::from("hello");
/// assert_eq!(owned.as_match_str(), "hello");
///
/// let borrowed: &str = "world";
/// assert_eq!(borrowed.as_match_str(), "world");
/// ```
pub trait AsMatchStr {
    /// Returns the string representation of this item for matching.
    fn as_match_str(&self) -> &str;
}

impl AsMatchStr for String {
    fn as_match_str(&self) -> &str {
        self.as_str()
    }
}

impl AsMatchStr for str {
    fn as_match_str(&self) -> &str {
        self
    }
}

// Needed so that `T = &str` satisfies `AsMatchStr` without the caller
// double-referencing.
impl AsMatchStr for &str {
    fn as_match_str(&self) -> &str {
        self
    }
}

impl AsMatchStr for Cow<'_, str> {
    fn as_match_str(&self) -> &str {
        self.as_ref()
    }
}

impl AsMatchStr for Box<str> {
    fn as_match_str(&self) -> &str {
        self
    }
}

impl<T: AsMatchStr> Sortable for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn keywords(&self, i: usize) -> Cow<'_, str> {
        Cow::Borrowed(self[i].as_match_str())
    }

    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self[i].as_match_str() < self[j].as_match_str()
    }
}

impl<T: AsMatchStr> Sortable for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn keywords(&self, i: usize) -> Cow<'_, str> {
        self.as_slice().keywords(i)
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j);
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.as_slice().less(i, j)
    }
}

/// Fuzzy-sort a slice of strings in place with default options.
///
/// The slice is **reordered** so that the best matches come first. The
/// returned results are parallel to the reordered slice.
///
/// # Examples
///
/// ```
/// use fuzzysort::sort_strings;
///
/// let mut names = ["Joe Gomez", "Divock Origi", "Alex Oxlade-Chamberlain"];
/// let results = sort_strings(&mut names, "ox");
/// assert_eq!(names[0], "Alex Oxlade-Chamberlain");
/// assert!(results[0].matched);
/// assert!(!results[2].matched);
/// ```
pub fn sort_strings<T: AsMatchStr>(data: &mut [T], query: &str) -> Vec<Match> {
    sort(data, query)
}
