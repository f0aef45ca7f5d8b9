//! Fuzzy scoring of a single candidate string against a query.
//!
//! The scorer makes one left-to-right pass over the candidate with a single
//! query cursor. A query character may be matched by several candidate
//! characters in a row (e.g. the `b` in `"fooBar"` vs `"foobar"`), so the best
//! scoring one is held as a *pending* letter and only committed to the total
//! once the cursor moves past it. Bonuses reward matches after separators,
//! at camel-case humps and next to other matches; penalties apply to leading
//! and unmatched characters.

use std::borrow::Cow;

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_normalization::UnicodeNormalization;

use crate::options::SortOptions;

/// The outcome of scoring one candidate against a query.
///
/// # Examples
///
/// ```
/// use fuzzysort::{SortOptions, match_str};
///
/// let m = match_str("abc", "abc", &SortOptions::default());
/// assert!(m.matched);
/// assert_eq!(m.score, 20.0);
/// assert_eq!(m.sort_key, "abc");
///
/// let m = match_str("abc", "x", &SortOptions::default());
/// assert!(!m.matched);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    /// Whether every query character occurs in the candidate, in order.
    pub matched: bool,
    /// The query the candidate was scored against.
    pub query: String,
    /// How well the candidate matched. Higher is better.
    pub score: f64,
    /// The string the query was compared to: the candidate, with diacritics
    /// removed if stripping was in effect.
    pub sort_key: String,
}

/// Remove diacritics from `s` by NFD decomposition and dropping nonspacing
/// marks.
///
/// Spacing marks (such as Devanagari vowel signs) and enclosing marks are
/// kept: they are part of the letter, not an accent on it.
///
/// Returns [`Cow::Borrowed`] when nothing changes, which includes every ASCII
/// string.
///
/// # Examples
///
/// ```
/// use fuzzysort::matcher::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Man\u{00e9}"), "Mane");
/// assert!(matches!(strip_diacritics("Mane"), std::borrow::Cow::Borrowed(_)));
/// ```
pub fn strip_diacritics(s: &str) -> Cow<'_, str> {
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let stripped: String = s.nfd().filter(|&c| !is_nonspacing_mark(c)).collect();

    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// Whether `query` is unaffected by diacritics stripping.
///
/// Only such queries enable stripping of candidates: a query that spells out
/// an accent wants it matched literally.
///
/// # Examples
///
/// ```
/// use fuzzysort::matcher::is_plain;
///
/// assert!(is_plain("mane"));
/// assert!(!is_plain("n\u{00e9}"));
/// ```
pub fn is_plain(query: &str) -> bool {
    matches!(strip_diacritics(query), Cow::Borrowed(_))
}

/// Score `candidate` against `query` in one call.
///
/// This prepares the query from scratch on every call. To score many
/// candidates against the same query, sort them through a
/// [`Sorter`](crate::Sorter) or [`rank`](crate::rank) instead.
///
/// # Arguments
///
/// * `candidate` - The string being evaluated
/// * `query` - The search query whose characters must appear in order
/// * `options` - Bonuses, penalties and the diacritics switch
///
/// # Examples
///
/// ```
/// use fuzzysort::{SortOptions, match_str};
///
/// let opts = SortOptions::default();
///
/// // Camel-case hump beats a plain letter.
/// let hump = match_str("fooBar", "b", &opts);
/// let flat = match_str("foobar", "b", &opts);
/// assert!(hump.score > flat.score);
///
/// // Diacritics are ignored for plain queries.
/// assert!(match_str("Sadio Man\u{00e9}", "mane", &opts).matched);
/// ```
pub fn match_str(candidate: &str, query: &str, options: &SortOptions) -> Match {
    PreparedQuery::new(query, options).score(candidate, options)
}

/// A query readied for scoring many candidates.
///
/// Holds the case-folded query characters and whether candidates should be
/// stripped of diacritics for this query.
#[derive(Debug, Clone)]
pub(crate) struct PreparedQuery {
    text: String,
    folded: Vec<char>,
    strip: bool,
}

impl PreparedQuery {
    pub(crate) fn new(query: &str, options: &SortOptions) -> Self {
        Self {
            text: query.to_owned(),
            folded: query.chars().map(to_lower).collect(),
            strip: options.strip_diacritics && is_plain(query),
        }
    }

    /// Whether candidates are stripped of diacritics before comparison.
    pub(crate) fn strips_diacritics(&self) -> bool {
        self.strip
    }

    pub(crate) fn score(&self, candidate: &str, options: &SortOptions) -> Match {
        let key = if self.strip {
            strip_diacritics(candidate)
        } else {
            Cow::Borrowed(candidate)
        };

        // An empty query matches everything at the baseline score, leaving
        // the order to the collection's tie-break.
        if self.folded.is_empty() {
            return Match {
                matched: true,
                query: self.text.clone(),
                score: 0.0,
                sort_key: key.into_owned(),
            };
        }

        let mut state = ScanState::new();
        for (index, c) in key.chars().enumerate() {
            state.step(index, c, &self.folded, options);
        }
        let (matched, score) = state.finish(self.folded.len());

        Match {
            matched,
            query: self.text.clone(),
            score,
            sort_key: key.into_owned(),
        }
    }
}

/// A candidate character held back as the best match so far for one query
/// position.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    lower: char,
    score: f64,
}

/// Everything the scanner carries from one candidate character to the next.
#[derive(Debug, Clone, PartialEq)]
struct ScanState {
    /// Index of the next query character to match.
    query_idx: usize,
    /// Committed score.
    score: f64,
    /// Best uncommitted letter, if any.
    best: Option<Pending>,
    prev_matched: bool,
    prev_lower: bool,
    /// Starts `true`: the start of the string counts as a word boundary.
    prev_separator: bool,
}

impl ScanState {
    fn new() -> Self {
        Self {
            query_idx: 0,
            score: 0.0,
            best: None,
            prev_matched: false,
            prev_lower: false,
            prev_separator: true,
        }
    }

    /// Advance the scan over candidate character `c` at char index `index`.
    fn step(&mut self, index: usize, c: char, query: &[char], options: &SortOptions) {
        let lower = to_lower(c);
        let upper = to_upper(c);
        let query_lower = query.get(self.query_idx).copied();

        let next_match = query_lower == Some(lower);
        let rematch = self.best.is_some_and(|b| b.lower == lower);
        let advanced = next_match && self.best.is_some();
        let query_repeat = matches!((self.best, query_lower), (Some(b), Some(q)) if b.lower == q);

        if advanced || query_repeat {
            if let Some(best) = self.best.take() {
                self.score += best.score;
            }
        }

        if next_match || rematch {
            let mut letter_score = 0.0;

            if self.query_idx == 0 {
                self.score += options.leading_penalty(index);
            }
            if self.prev_matched {
                letter_score += options.adjacency_bonus;
            }
            if self.prev_separator {
                letter_score += options.separator_bonus;
            }
            if self.prev_lower && c == upper && lower != upper {
                letter_score += options.camel_bonus;
            }

            if next_match {
                self.query_idx += 1;
            }

            // A later letter may take over the pending slot; the one it
            // displaces is charged as unmatched.
            if letter_score >= self.best.map_or(0.0, |b| b.score) {
                if self.best.is_some() {
                    self.score += options.unmatched_letter_penalty;
                }
                self.best = Some(Pending {
                    lower,
                    score: letter_score,
                });
            }

            self.prev_matched = true;
        } else {
            self.score += options.unmatched_letter_penalty;
            self.prev_matched = false;
        }

        self.prev_lower = c == lower && lower != upper;
        self.prev_separator = is_separator(c);
    }

    /// Flush the pending letter and report `(matched, score)`.
    fn finish(self, query_len: usize) -> (bool, f64) {
        let score = match self.best {
            Some(best) => self.score + best.score,
            None => self.score,
        };
        (self.query_idx == query_len, score)
    }
}

fn is_separator(c: char) -> bool {
    matches!(c, '_' | ' ' | '.' | '-' | '/')
}

fn is_nonspacing_mark(c: char) -> bool {
    get_general_category(c) == GeneralCategory::NonspacingMark
}

/// Simple (one-to-one) lowercase mapping.
///
/// `char::to_lowercase` gives the full mapping, which only expands for
/// `'\u{0130}'` (`'İ'` -> `"i\u{0307}"`). The simple mapping is the base
/// letter without the trailing nonspacing marks.
fn to_lower(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match lower.next() {
        Some(l) if lower.all(is_nonspacing_mark) => l,
        _ => c,
    }
}

/// Simple (one-to-one) uppercase mapping. Characters whose uppercase form
/// is several letters (`'ß'` -> `"SS"`) have no simple mapping and are left
/// as they are.
fn to_upper(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_uppercase();
    }
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
