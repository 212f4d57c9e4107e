//! Pure aggregation over session collections.
//!
//! Every function here reads its input, allocates a fresh result, and never
//! fails. Grouping and counting keep first-occurrence key order, which is the
//! display order of grouped views.

use chrono::Month;
use serde::Serialize;

use crate::buckets::Buckets;
use crate::types::{Session, Theme, ThemeFilter};

/// Hours assumed for a duration label with no usable number in it.
pub const DEFAULT_SESSION_HOURS: f64 = 2.0;

/// Range labels mapped to their midpoint, checked before numeric parsing.
/// Both the ASCII hyphen and the en dash spellings are recognised.
const RANGE_MIDPOINTS: [(&str, &str, f64); 2] = [("1-2", "1\u{2013}2", 1.5), ("2-3", "2\u{2013}3", 2.5)];

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Bucket sessions by theme. Lossless: every input lands in exactly one bucket.
pub fn group_by_theme<'a, I>(sessions: I) -> Buckets<Theme, &'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    let buckets: Buckets<Theme, &Session> = sessions.into_iter().map(|s| (s.theme, s)).collect();
    tracing::debug!(buckets = buckets.len(), sessions = buckets.total(), "grouped by theme");
    buckets
}

/// Bucket sessions by their month label.
pub fn group_by_month<'a, I>(sessions: I) -> Buckets<String, &'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions.into_iter().map(|s| (s.month.clone(), s)).collect()
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep the sessions matching `filter`, preserving order. `All` keeps everything.
pub fn filter_by_theme<'a, I>(sessions: I, filter: &ThemeFilter) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions.into_iter().filter(|s| filter.matches(s.theme)).collect()
}

/// Sessions whose `scheduled_date` is exactly `iso_date`. Undated sessions never match.
pub fn sessions_on_date<'a, I>(sessions: I, iso_date: &str) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions
        .into_iter()
        .filter(|s| s.scheduled_date.as_deref() == Some(iso_date))
        .collect()
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// `100 * |completed| / |all|`, where `all` is the full pool including the
/// completed sessions. An empty pool yields 0.
pub fn completion_rate<T>(completed: &[T], all: &[T]) -> f64 {
    if all.is_empty() {
        return 0.0;
    }
    let rate = 100.0 * completed.len() as f64 / all.len() as f64;
    if rate > 100.0 {
        tracing::warn!(
            completed = completed.len(),
            all = all.len(),
            "completed pool larger than the full pool, clamping rate"
        );
        return 100.0;
    }
    rate
}

/// Hours represented by a free-text duration label.
///
/// Checked in order: the `1-2` range (1.5), the `2-3` range (2.5), a leading
/// number (`"1.5h"` is 1.5), and finally [`DEFAULT_SESSION_HOURS`].
pub fn normalize_duration_to_hours(label: &str) -> f64 {
    for (ascii, dashed, midpoint) in RANGE_MIDPOINTS {
        if label.contains(ascii) || label.contains(dashed) {
            return midpoint;
        }
    }
    match leading_number(label) {
        Some(hours) => hours,
        None => {
            tracing::trace!(label, "no numeric duration, using default hours");
            DEFAULT_SESSION_HOURS
        }
    }
}

/// Parse the longest numeric prefix (optional sign, digits, one decimal point).
fn leading_number(label: &str) -> Option<f64> {
    let s = label.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let mut seen_digit = false;
    let mut seen_dot = false;
    while let Some(&b) = bytes.get(end) {
        match b {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return None;
    }
    s[..end].parse::<f64>().ok()
}

/// Sum of normalised hours. Empty input sums to 0.
pub fn sum_hours<'a, I>(sessions: I) -> f64
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions.into_iter().map(Session::hours).sum()
}

pub fn leadership_count<'a, I>(sessions: I) -> usize
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions.into_iter().filter(|s| s.is_leadership).count()
}

/// Sessions per trainer, in first-occurrence order.
pub fn count_by_trainer<'a, I>(sessions: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions
        .into_iter()
        .map(|s| (s.trainer.clone(), ()))
        .collect::<Buckets<String, ()>>()
        .counts()
}

/// Sessions per theme, in first-occurrence order.
pub fn count_by_theme<'a, I>(sessions: I) -> Vec<(Theme, usize)>
where
    I: IntoIterator<Item = &'a Session>,
{
    group_by_theme(sessions).counts()
}

/// Trainer counts, busiest first; ties stay in first-occurrence order.
pub fn trainer_workload<'a, I>(sessions: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut counts = count_by_trainer(sessions);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// One bar of the theme distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeShare {
    pub theme: Theme,
    pub count: usize,
    /// Share of the input, in `[0, 100]`.
    pub percentage: f64,
}

pub fn theme_distribution<'a, I>(sessions: I) -> Vec<ThemeShare>
where
    I: IntoIterator<Item = &'a Session>,
{
    let counts = count_by_theme(sessions);
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    counts
        .into_iter()
        .map(|(theme, count)| ThemeShare {
            theme,
            count,
            percentage: 100.0 * count as f64 / total as f64,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// List view order: calendar month of the `month` label (unknown labels
/// last), then dated before undated, then by ISO date, then input order.
pub fn sort_for_list<'a, I>(sessions: I) -> Vec<&'a Session>
where
    I: IntoIterator<Item = &'a Session>,
{
    let mut sorted: Vec<&Session> = sessions.into_iter().collect();
    sorted.sort_by(|a, b| list_key(a).cmp(&list_key(b)));
    sorted
}

fn list_key(session: &Session) -> (u32, bool, Option<&str>) {
    let month = session
        .month
        .trim()
        .parse::<Month>()
        .map(|m| m.number_from_month())
        .unwrap_or(13);
    let date = session.scheduled_date.as_deref();
    (month, date.is_none(), date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_checks_precede_numeric_prefix() {
        assert_eq!(normalize_duration_to_hours("2-3h"), 2.5);
        assert_eq!(normalize_duration_to_hours("2\u{2013}3h"), 2.5);
        assert_eq!(normalize_duration_to_hours("1\u{2013}2h"), 1.5);
    }

    #[test]
    fn numeric_prefix_variants() {
        assert_eq!(normalize_duration_to_hours("1.5h"), 1.5);
        assert_eq!(normalize_duration_to_hours(" 3 hours"), 3.0);
        assert_eq!(normalize_duration_to_hours(".5h"), 0.5);
        assert_eq!(normalize_duration_to_hours("0h"), 0.0);
    }

    #[test]
    fn unparseable_labels_use_default() {
        assert_eq!(normalize_duration_to_hours(""), DEFAULT_SESSION_HOURS);
        assert_eq!(normalize_duration_to_hours("half a day"), DEFAULT_SESSION_HOURS);
        assert_eq!(normalize_duration_to_hours("-h"), DEFAULT_SESSION_HOURS);
        assert_eq!(normalize_duration_to_hours("."), DEFAULT_SESSION_HOURS);
    }

    #[test]
    fn list_key_puts_unknown_months_last() {
        let known = Session::new("a", "A", Theme::Sales).in_month("March");
        let unknown = Session::new("b", "B", Theme::Sales).in_month("Someday");
        assert!(list_key(&known) < list_key(&unknown));
    }
}
