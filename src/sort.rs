//! Ranking a whole collection and reordering it by match quality.
//!
//! [`rank`] scores every item of a [`Sortable`] collection and computes the
//! sorted order as an index permutation, leaving the collection untouched.
//! [`Ranking::apply`] then reorders the collection in place, swapping the
//! result cache in lockstep. [`Sorter`] bundles the two behind a reusable
//! session over one collection.
//!
//! The order is:
//!
//! 1. **Matches first** -- items that matched precede those that didn't.
//! 2. **Higher score first.**
//! 3. **Intrinsic order** -- exact score ties fall back to
//!    [`Sortable::less`], then to the original position.

use std::cmp::Ordering;

use tracing::{debug, instrument, trace};

use crate::matcher::{Match, PreparedQuery};
use crate::options::SortOptions;
use crate::sortable::Sortable;

/// Compare two results by match status, then score (both descending).
///
/// Items that are equal here are tie-broken by the collection itself.
/// Scores are compared with [`f64::total_cmp`], so the order stays total even
/// if a weight was set to NaN.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use fuzzysort::{SortOptions, compare_matches, match_str};
///
/// let opts = SortOptions::default();
/// let hit = match_str("apple", "ap", &opts);
/// let miss = match_str("banana", "ap", &opts);
/// assert_eq!(compare_matches(&hit, &miss), Ordering::Less);
/// ```
pub fn compare_matches(a: &Match, b: &Match) -> Ordering {
    b.matched
        .cmp(&a.matched)
        .then_with(|| b.score.total_cmp(&a.score))
}

/// Order positions `i` and `j` by the collection's own `less`.
fn intrinsic_order<S: Sortable + ?Sized>(data: &S, i: usize, j: usize) -> Ordering {
    if data.less(i, j) {
        Ordering::Less
    } else if data.less(j, i) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// The sorted order of a collection against one query.
///
/// Produced by [`rank`]. Holds one [`Match`] per item in the collection's
/// original order, plus the permutation that sorts them.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// `order[k]` is the original index of the item ranked `k`-th.
    order: Vec<usize>,
    results: Vec<Match>,
}

impl Ranking {
    /// Original indices, best match first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Results in the collection's original order.
    pub fn results(&self) -> &[Match] {
        &self.results
    }

    /// Number of ranked items.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// `(original index, result)` pairs, best match first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Match)> + '_ {
        self.order.iter().map(|&i| (i, &self.results[i]))
    }

    /// The top-ranked item, if it matched.
    pub fn best(&self) -> Option<(usize, &Match)> {
        self.iter().next().filter(|(_, m)| m.matched)
    }

    /// Collect references to `items` in ranked order, without moving them.
    ///
    /// # Panics
    ///
    /// Panics if `items` is shorter than the ranked collection.
    ///
    /// # Examples
    ///
    /// ```
    /// use fuzzysort::{SortOptions, rank};
    ///
    /// let items = vec!["Joe Gomez", "Xherdan Shaqiri"];
    /// let ranking = rank(items.as_slice(), "x", &SortOptions::default());
    /// assert_eq!(ranking.into_sorted(&items), vec![&"Xherdan Shaqiri", &"Joe Gomez"]);
    /// // The original is unchanged.
    /// assert_eq!(items[0], "Joe Gomez");
    /// ```
    pub fn into_sorted<'d, T>(&self, items: &'d [T]) -> Vec<&'d T> {
        self.order.iter().map(|&i| &items[i]).collect()
    }

    /// Reorder `data` in place to match this ranking.
    ///
    /// Returns the results permuted in lockstep, so that `results[k]`
    /// describes the item now at position `k`. Uses at most `len() - 1`
    /// swaps.
    ///
    /// # Panics
    ///
    /// Panics if `data` does not have the length of the ranked collection.
    pub fn apply<S: Sortable + ?Sized>(self, data: &mut S) -> Vec<Match> {
        let Ranking { order, mut results } = self;
        let n = order.len();
        assert_eq!(
            data.len(),
            n,
            "ranking computed for {n} items applied to {}",
            data.len()
        );

        // at[p]: original index of the item currently at position p.
        // position[o]: current position of the item with original index o.
        let mut at: Vec<usize> = (0..n).collect();
        let mut position: Vec<usize> = (0..n).collect();
        let mut swaps = 0usize;

        for (target, &wanted) in order.iter().enumerate() {
            let current = position[wanted];
            if current == target {
                continue;
            }
            data.swap(target, current);
            results.swap(target, current);

            let displaced = at[target];
            at.swap(target, current);
            position[wanted] = target;
            position[displaced] = current;
            swaps += 1;
        }

        trace!(target: "fuzzysort.sort", swaps, "applied ranking");
        results
    }
}

/// Score every item of `data` against `query` and compute the sorted order.
///
/// The collection is only read. Apply the result with [`Ranking::apply`],
/// or read it through [`Ranking::iter`] / [`Ranking::into_sorted`].
///
/// # Arguments
///
/// * `data` - The collection to rank
/// * `query` - The search query
/// * `options` - Scoring weights and the diacritics switch
///
/// # Examples
///
/// ```
/// use fuzzysort::{SortOptions, rank};
///
/// let items = ["Andy Robertson", "Andy Lonergan", "Alisson Becker"];
/// let ranking = rank(&items[..], "al", &SortOptions::default());
/// let (index, best) = ranking.best().unwrap();
/// assert_eq!(items[index], "Andy Lonergan");
/// assert!(best.matched);
/// ```
#[instrument(
    name = "fuzzysort::rank",
    skip_all,
    fields(items = data.len(), query_len = query.chars().count())
)]
pub fn rank<S: Sortable + ?Sized>(data: &S, query: &str, options: &SortOptions) -> Ranking {
    let prepared = PreparedQuery::new(query, options);

    let results: Vec<Match> = (0..data.len())
        .map(|i| prepared.score(&data.keywords(i), options))
        .collect();

    let mut order: Vec<usize> = (0..results.len()).collect();
    order.sort_by(|&a, &b| {
        compare_matches(&results[a], &results[b]).then_with(|| intrinsic_order(data, a, b))
    });

    debug!(
        target: "fuzzysort.rank",
        matched = results.iter().filter(|m| m.matched).count(),
        strip_diacritics = prepared.strips_diacritics(),
        "ranking complete"
    );

    Ranking { order, results }
}

/// Fuzzy-sort `data` in place with default options.
///
/// `data` is **reordered** as a side effect. The returned results are
/// parallel to the reordered collection.
///
/// # Examples
///
/// ```
/// use fuzzysort::sort;
///
/// let mut items = vec!["Sepp van den Berg", "Trent Alexander-Arnold"];
/// let results = sort(&mut items, "taa");
/// assert_eq!(items[0], "Trent Alexander-Arnold");
/// assert_eq!(results[0].sort_key, "Trent Alexander-Arnold");
/// ```
pub fn sort<S: Sortable + ?Sized>(data: &mut S, query: &str) -> Vec<Match> {
    sort_with_options(data, query, &SortOptions::default())
}

/// Fuzzy-sort `data` in place with the given options.
///
/// `data` is **reordered** as a side effect; see [`sort`].
pub fn sort_with_options<S: Sortable + ?Sized>(
    data: &mut S,
    query: &str,
    options: &SortOptions,
) -> Vec<Match> {
    rank(&*data, query, options).apply(data)
}

/// A reusable fuzzy-sorting session over one collection.
///
/// **Sorting mutates the collection**: every call to [`Sorter::sort`]
/// reorders the borrowed data in place. The results of the latest sort are
/// kept and stay parallel to the reordered data.
///
/// # Examples
///
/// ```
/// use fuzzysort::{SortOptions, Sorter};
///
/// let mut names = vec!["Sadio Man\u{00e9}", "Neco Williams", "Naby Keita"];
/// let mut sorter = Sorter::new(&mut names);
///
/// assert!(sorter.sort("mane")[0].matched);
/// assert_eq!(sorter.data()[0], "Sadio Man\u{00e9}");
///
/// // Options can be swapped between sorts; the old ones are handed back.
/// let previous = sorter.configure(SortOptions::default().with_strip_diacritics(false));
/// assert!(previous.strip_diacritics);
/// assert!(!sorter.sort("mane")[0].matched);
/// ```
#[derive(Debug)]
pub struct Sorter<'a, S: Sortable + ?Sized> {
    data: &'a mut S,
    options: SortOptions,
    results: Vec<Match>,
}

impl<'a, S: Sortable + ?Sized> Sorter<'a, S> {
    /// Create a sorter over `data` with default options.
    pub fn new(data: &'a mut S) -> Self {
        Self::with_options(data, SortOptions::default())
    }

    /// Create a sorter over `data` with the given options.
    pub fn with_options(data: &'a mut S, options: SortOptions) -> Self {
        Self {
            data,
            options,
            results: Vec::new(),
        }
    }

    /// The options used by the next sort.
    pub fn options(&self) -> &SortOptions {
        &self.options
    }

    /// Replace the options, returning the previous ones.
    ///
    /// Passing the returned value back to `configure` undoes the change.
    pub fn configure(&mut self, options: SortOptions) -> SortOptions {
        std::mem::replace(&mut self.options, options)
    }

    /// Sort the collection against `query`, reordering it in place.
    ///
    /// Returns the results, parallel to the reordered collection. Whether
    /// diacritics are stripped is decided afresh for each query.
    pub fn sort(&mut self, query: &str) -> &[Match] {
        let ranking = rank(&*self.data, query, &self.options);
        self.results = ranking.apply(&mut *self.data);
        &self.results
    }

    /// Results of the latest sort; empty before the first one.
    pub fn results(&self) -> &[Match] {
        &self.results
    }

    /// The collection, in its current order.
    pub fn data(&self) -> &S {
        &*self.data
    }

    /// Release the borrow on the collection.
    pub fn into_inner(self) -> &'a mut S {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(matched: bool, score: f64) -> Match {
        Match {
            matched,
            query: String::new(),
            score,
            sort_key: String::new(),
        }
    }

    // --- compare_matches ---

    #[test]
    fn matched_beats_unmatched() {
        assert_eq!(
            compare_matches(&result(true, -50.0), &result(false, 10.0)),
            Ordering::Less
        );
        assert_eq!(
            compare_matches(&result(false, 10.0), &result(true, -50.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn higher_score_first() {
        assert_eq!(
            compare_matches(&result(true, 8.0), &result(true, 2.0)),
            Ordering::Less
        );
        assert_eq!(
            compare_matches(&result(false, -1.0), &result(false, -3.0)),
            Ordering::Less
        );
    }

    #[test]
    fn equal_results_compare_equal() {
        assert_eq!(
            compare_matches(&result(true, 4.0), &result(true, 4.0)),
            Ordering::Equal
        );
    }

    #[test]
    fn nan_scores_still_ordered() {
        let nan = result(true, f64::NAN);
        assert_eq!(compare_matches(&nan, &nan), Ordering::Equal);
        assert_ne!(compare_matches(&nan, &result(true, 1.0)), Ordering::Equal);
    }

    // --- rank ---

    #[test]
    fn rank_leaves_collection_untouched() {
        let items = ["zzz", "abc"];
        let ranking = rank(&items[..], "a", &SortOptions::default());
        assert_eq!(items, ["zzz", "abc"]);
        assert_eq!(ranking.order(), &[1, 0]);
        assert!(ranking.results()[1].matched);
        assert!(!ranking.results()[0].matched);
    }

    #[test]
    fn rank_iter_yields_sorted_pairs() {
        let items = ["zzz", "abc"];
        let ranking = rank(&items[..], "a", &SortOptions::default());
        let pairs: Vec<(usize, bool)> = ranking.iter().map(|(i, m)| (i, m.matched)).collect();
        assert_eq!(pairs, vec![(1, true), (0, false)]);
    }

    #[test]
    fn best_is_none_without_matches() {
        let items = ["zzz", "yyy"];
        let ranking = rank(&items[..], "a", &SortOptions::default());
        assert!(ranking.best().is_none());
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn rank_empty_collection() {
        let items: [&str; 0] = [];
        let ranking = rank(&items[..], "a", &SortOptions::default());
        assert!(ranking.is_empty());
        assert!(ranking.best().is_none());
    }

    #[test]
    fn identical_items_keep_original_order() {
        // Same key and no intrinsic order between them: positions decide.
        let items = ["same", "same", "other"];
        let ranking = rank(&items[..], "s", &SortOptions::default());
        assert_eq!(&ranking.order()[..2], &[0, 1]);
    }

    // --- apply ---

    #[test]
    fn apply_reorders_data_and_results_in_lockstep() {
        let mut items = vec!["d", "c", "b", "a"];
        let results = items
            .iter()
            .map(|s| Match {
                sort_key: (*s).to_owned(),
                ..result(true, 0.0)
            })
            .collect();
        let ranking = Ranking {
            order: vec![3, 0, 2, 1],
            results,
        };
        let results = ranking.apply(&mut items);
        assert_eq!(items, vec!["a", "d", "b", "c"]);
        let keys: Vec<&str> = results.iter().map(|m| m.sort_key.as_str()).collect();
        assert_eq!(keys, vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn apply_identity_is_noop() {
        let mut items = vec!["x", "y"];
        let ranking = Ranking {
            order: vec![0, 1],
            results: vec![result(true, 1.0), result(true, 0.0)],
        };
        ranking.apply(&mut items);
        assert_eq!(items, vec!["x", "y"]);
    }

    #[test]
    #[should_panic(expected = "applied to")]
    fn apply_rejects_length_mismatch() {
        let mut items = vec!["x"];
        let ranking = Ranking {
            order: vec![0, 1],
            results: vec![result(true, 0.0), result(true, 0.0)],
        };
        ranking.apply(&mut items);
    }

    // --- Sorter ---

    #[test]
    fn sorter_results_follow_data() {
        let mut items = vec!["grape", "banana", "apple"];
        let mut sorter = Sorter::new(&mut items);
        assert!(sorter.results().is_empty());
        sorter.sort("ap");
        assert_eq!(sorter.data()[0], "apple");
        assert_eq!(sorter.results()[0].sort_key, "apple");
        assert_eq!(sorter.results()[1].sort_key, "grape");
        assert!(!sorter.results()[2].matched);
    }

    #[test]
    fn sorter_configure_round_trips() {
        let mut items = vec!["a"];
        let mut sorter = Sorter::new(&mut items);
        let custom = SortOptions::default().with_camel_bonus(0.0);
        let previous = sorter.configure(custom.clone());
        assert_eq!(previous, SortOptions::default());
        assert_eq!(sorter.options(), &custom);
        sorter.configure(previous);
        assert_eq!(sorter.options(), &SortOptions::default());
    }

    #[test]
    fn sorter_recomputes_diacritic_gate_per_query() {
        let mut items = vec!["Neco Williams", "Sadio Man\u{00e9}"];
        let mut sorter = Sorter::new(&mut items);
        assert_eq!(sorter.sort("mane")[0].sort_key, "Sadio Mane");
        // The accented query must see the accented key again.
        assert_eq!(sorter.sort("n\u{00e9}")[0].sort_key, "Sadio Man\u{00e9}");
    }

    #[test]
    fn sorter_into_inner_returns_reordered_data() {
        let mut items = vec!["b", "a"];
        let mut sorter = Sorter::new(&mut items);
        sorter.sort("a");
        let data = sorter.into_inner();
        assert_eq!(data[0], "a");
    }

    #[test]
    fn sort_with_options_uses_weights() {
        let mut items = vec!["xxxxab", "axxxxb"];
        sort_with_options(&mut items, "ab", &SortOptions::default());
        assert_eq!(items[0], "axxxxb");

        // A big adjacency bonus outweighs the leading-letter penalty.
        let opts = SortOptions::default().with_adjacency_bonus(50.0);
        sort_with_options(&mut items, "ab", &opts);
        assert_eq!(items[0], "xxxxab");
    }
}
