//! The capability a collection needs to be fuzzy-sorted.
//!
//! [`Sortable`] is the contract between the ranker and a caller's data:
//! report a size, hand out a comparison key per position, swap two positions,
//! and order two positions for tie-breaking. Slices and `Vec`s of string-like
//! items implement it out of the box (see [`crate::strings`]); any other
//! collection gets it through a small adapter.

use std::borrow::Cow;

/// A positionally indexed collection that can be fuzzy-sorted in place.
///
/// # Examples
///
/// Sorting a collection of structs by a derived name:
///
/// ```
/// use std::borrow::Cow;
/// use fuzzysort::{Sortable, sort};
///
/// struct Player { first: String, last: String }
///
/// impl Player {
///     fn name(&self) -> String {
///         format!("{} {}", self.first, self.last).trim().to_owned()
///     }
/// }
///
/// struct Team(Vec<Player>);
///
/// impl Sortable for Team {
///     fn len(&self) -> usize { self.0.len() }
///     fn keywords(&self, i: usize) -> Cow<'_, str> { Cow::Owned(self.0[i].name()) }
///     fn swap(&mut self, i: usize, j: usize) { self.0.swap(i, j) }
///     fn less(&self, i: usize, j: usize) -> bool { self.0[i].name() < self.0[j].name() }
/// }
///
/// let mut team = Team(vec![
///     Player { first: "Joe".into(), last: "Gomez".into() },
///     Player { first: "Trent".into(), last: "Alexander-Arnold".into() },
/// ]);
/// sort(&mut team, "taa");
/// assert_eq!(team.0[0].first, "Trent");
/// ```
pub trait Sortable {
    /// Number of items in the collection.
    fn len(&self) -> usize;

    /// Whether the collection has no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The string the query is compared to for the item at position `i`.
    fn keywords(&self, i: usize) -> Cow<'_, str>;

    /// Swap the items at positions `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// Whether the item at `i` orders before the item at `j`.
    ///
    /// Only consulted when two items score exactly the same.
    fn less(&self, i: usize, j: usize) -> bool;
}
