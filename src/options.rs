//! Tunable weights for the fuzzy scoring algorithm.
//!
//! [`SortOptions`] holds the bonuses and penalties applied while scanning a
//! candidate, plus the switch controlling diacritics stripping. It is read
//! once per sort and may be swapped between sorts via
//! [`Sorter::configure`](crate::Sorter::configure).

/// Bonus when the previous candidate character also matched.
pub const DEFAULT_ADJACENCY_BONUS: f64 = 5.0;
/// Bonus when the match follows a separator (`_`, `-`, `.`, `/`, space).
pub const DEFAULT_SEPARATOR_BONUS: f64 = 10.0;
/// Bonus when the match is uppercase and the previous character lowercase.
pub const DEFAULT_CAMEL_BONUS: f64 = 10.0;
/// Penalty per candidate character before the first match.
pub const DEFAULT_LEADING_LETTER_PENALTY: f64 = -3.0;
/// Floor for the total leading-letter penalty.
pub const DEFAULT_MAX_LEADING_LETTER_PENALTY: f64 = -9.0;
/// Penalty for every candidate character that doesn't match.
pub const DEFAULT_UNMATCHED_LETTER_PENALTY: f64 = -1.0;
/// Strip diacritics from sort keys when the query is plain.
pub const DEFAULT_STRIP_DIACRITICS: bool = true;

/// Weights and switches controlling how candidates are scored.
///
/// Penalties are negative numbers. `max_leading_letter_penalty` is a floor:
/// the leading-letter penalty never goes below it, so it must be at least as
/// negative as `leading_letter_penalty` to have any effect.
///
/// # Defaults
///
/// | Field                        | Default |
/// |------------------------------|---------|
/// | `adjacency_bonus`            | `5.0`   |
/// | `separator_bonus`            | `10.0`  |
/// | `camel_bonus`                | `10.0`  |
/// | `leading_letter_penalty`     | `-3.0`  |
/// | `max_leading_letter_penalty` | `-9.0`  |
/// | `unmatched_letter_penalty`   | `-1.0`  |
/// | `strip_diacritics`           | `true`  |
///
/// # Examples
///
/// ```
/// use fuzzysort::SortOptions;
///
/// let opts = SortOptions::default();
/// assert_eq!(opts.adjacency_bonus, 5.0);
/// assert!(opts.strip_diacritics);
///
/// // Override a subset; the rest keep their defaults.
/// let opts = SortOptions { camel_bonus: 0.0, ..Default::default() };
/// assert_eq!(opts.separator_bonus, 10.0);
///
/// // Or with the builder setters.
/// let opts = SortOptions::default().with_strip_diacritics(false);
/// assert!(!opts.strip_diacritics);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SortOptions {
    /// Bonus for a match immediately following another match.
    pub adjacency_bonus: f64,
    /// Bonus for a match immediately following a separator character.
    pub separator_bonus: f64,
    /// Bonus for an uppercase match immediately following a lowercase letter.
    pub camel_bonus: f64,
    /// Penalty per character preceding the first match.
    pub leading_letter_penalty: f64,
    /// Most negative value the leading-letter penalty may reach.
    pub max_leading_letter_penalty: f64,
    /// Penalty for each candidate character not used by the match.
    pub unmatched_letter_penalty: f64,
    /// When `true`, candidates are compared with diacritics removed, but only
    /// if the query itself contains none.
    pub strip_diacritics: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            adjacency_bonus: DEFAULT_ADJACENCY_BONUS,
            separator_bonus: DEFAULT_SEPARATOR_BONUS,
            camel_bonus: DEFAULT_CAMEL_BONUS,
            leading_letter_penalty: DEFAULT_LEADING_LETTER_PENALTY,
            max_leading_letter_penalty: DEFAULT_MAX_LEADING_LETTER_PENALTY,
            unmatched_letter_penalty: DEFAULT_UNMATCHED_LETTER_PENALTY,
            strip_diacritics: DEFAULT_STRIP_DIACRITICS,
        }
    }
}

impl SortOptions {
    /// Set the adjacency bonus.
    #[must_use]
    pub fn with_adjacency_bonus(mut self, bonus: f64) -> Self {
        self.adjacency_bonus = bonus;
        self
    }

    /// Set the separator bonus.
    #[must_use]
    pub fn with_separator_bonus(mut self, bonus: f64) -> Self {
        self.separator_bonus = bonus;
        self
    }

    /// Set the camel-case bonus.
    #[must_use]
    pub fn with_camel_bonus(mut self, bonus: f64) -> Self {
        self.camel_bonus = bonus;
        self
    }

    /// Set the per-character leading-letter penalty.
    #[must_use]
    pub fn with_leading_letter_penalty(mut self, penalty: f64) -> Self {
        self.leading_letter_penalty = penalty;
        self
    }

    /// Set the floor for the leading-letter penalty.
    #[must_use]
    pub fn with_max_leading_letter_penalty(mut self, penalty: f64) -> Self {
        self.max_leading_letter_penalty = penalty;
        self
    }

    /// Set the unmatched-letter penalty.
    #[must_use]
    pub fn with_unmatched_letter_penalty(mut self, penalty: f64) -> Self {
        self.unmatched_letter_penalty = penalty;
        self
    }

    /// Enable or disable diacritics stripping.
    #[must_use]
    pub fn with_strip_diacritics(mut self, strip: bool) -> Self {
        self.strip_diacritics = strip;
        self
    }

    /// Leading-letter penalty for a first match at char index `index`,
    /// clamped to `max_leading_letter_penalty`.
    pub(crate) fn leading_penalty(&self, index: usize) -> f64 {
        let penalty = index as f64 * self.leading_letter_penalty;
        if penalty <= self.max_leading_letter_penalty {
            self.max_leading_letter_penalty
        } else {
            penalty
        }
    }
}
