//! Daily word selection
//!
//! The word of the day is the solution list entry at the number of whole days since
//! the epoch, wrapping around the list.

use chrono::NaiveDate;

/// Served when no index can be computed
pub const FALLBACK_WORD: &str = "crane";

/// First day of the rotation (2025-01-01)
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Index into a list of `len` words for `today`
///
/// `None` before the epoch or for an empty list.
#[must_use]
pub fn day_index(today: NaiveDate, epoch: NaiveDate, len: usize) -> Option<usize> {
    let days = usize::try_from(today.signed_duration_since(epoch).num_days()).ok()?;
    days.checked_rem(len)
}

/// The solution for `today`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordle_daily::server::daily::{daily_word, default_epoch};
///
/// let words = ["crane", "apple", "flint"];
/// let jan_2 = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
/// assert_eq!(daily_word(jan_2, default_epoch(), &words), "apple");
/// ```
#[must_use]
pub fn daily_word<'a>(today: NaiveDate, epoch: NaiveDate, words: &[&'a str]) -> &'a str {
    match day_index(today, epoch, words.len()) {
        Some(index) => words[index],
        None => {
            tracing::warn!(%today, %epoch, words = words.len(), "no daily index, using fallback");
            FALLBACK_WORD
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const WORDS: [&str; 3] = ["crane", "apple", "flint"];

    #[test]
    fn epoch_day_is_first_word() {
        assert_eq!(daily_word(default_epoch(), default_epoch(), &WORDS), "crane");
    }

    #[test]
    fn rotation_wraps_around() {
        assert_eq!(daily_word(date(2025, 1, 3), default_epoch(), &WORDS), "flint");
        assert_eq!(daily_word(date(2025, 1, 4), default_epoch(), &WORDS), "crane");
        // 2025-02-01 is day 31; 31 % 3 == 1
        assert_eq!(daily_word(date(2025, 2, 1), default_epoch(), &WORDS), "apple");
    }

    #[test]
    fn before_epoch_falls_back() {
        assert_eq!(day_index(date(2024, 12, 31), default_epoch(), 3), None);
        assert_eq!(
            daily_word(date(2024, 12, 31), default_epoch(), &WORDS),
            FALLBACK_WORD
        );
    }

    #[test]
    fn empty_list_falls_back() {
        assert_eq!(daily_word(date(2025, 6, 1), default_epoch(), &[]), FALLBACK_WORD);
    }

    #[test]
    fn same_day_same_word() {
        let today = date(2026, 10, 18);
        assert_eq!(
            daily_word(today, default_epoch(), &WORDS),
            daily_word(today, default_epoch(), &WORDS)
        );
    }
}
