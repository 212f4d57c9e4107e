use tp_core::aggregate::*;
use tp_core::types::{Session, Theme, ThemeFilter};
use tp_core::SessionStore;

fn sample() -> Vec<Session> {
    vec![
        Session::new("s1", "Pitch", Theme::Sales).with_trainer("Ana").in_month("August"),
        Session::new("c1", "Listen", Theme::Communication).with_trainer("Ben").in_month("August"),
        Session::new("s2", "Close", Theme::Sales).with_trainer("Ana").in_month("September"),
        Session::new("o1", "Mystery", Theme::Other).with_trainer("Cy").in_month("September"),
        Session::new("p1", "Product", Theme::Product).with_trainer("Ben").in_month("October"),
    ]
}

// ---------------------------------------------------------------------------
// group_by_theme
// ---------------------------------------------------------------------------

#[test]
fn group_by_theme_is_lossless() {
    let sessions = sample();
    let groups = group_by_theme(&sessions);
    assert_eq!(groups.total(), sessions.len());

    let store = SessionStore::builtin();
    assert_eq!(group_by_theme(store.all_sessions()).total(), 36);
}

#[test]
fn group_by_theme_keeps_first_occurrence_order() {
    let sessions = sample();
    let groups = group_by_theme(&sessions);
    let keys: Vec<Theme> = groups.keys().copied().collect();
    assert_eq!(keys, vec![Theme::Sales, Theme::Communication, Theme::Other, Theme::Product]);

    let sales: Vec<&str> = groups.get(&Theme::Sales).unwrap().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(sales, vec!["s1", "s2"]);
}

#[test]
fn group_by_theme_is_idempotent() {
    let sessions = sample();
    let before = sessions.clone();
    let first = group_by_theme(&sessions);
    let second = group_by_theme(&sessions);
    assert_eq!(first, second);
    assert_eq!(sessions, before);
}

#[test]
fn unrecognised_theme_lands_in_other_bucket() {
    let json = r#"{"id":"x","title":"X","duration":"2h","format":"Talk","trainer":"T",
                  "month":"May","theme":"Leadership","icon":"star"}"#;
    let session: Session = serde_json::from_str(json).unwrap();
    let groups = group_by_theme(std::iter::once(&session));
    assert_eq!(groups.get(&Theme::Other).map(|b| b.len()), Some(1));
}

#[test]
fn group_by_month_uses_labels() {
    let sessions = sample();
    let months = group_by_month(&sessions);
    assert_eq!(
        months.keys().cloned().collect::<Vec<_>>(),
        vec!["August", "September", "October"]
    );
}

// ---------------------------------------------------------------------------
// filter_by_theme
// ---------------------------------------------------------------------------

#[test]
fn filter_all_is_identity() {
    let sessions = sample();
    let filtered = filter_by_theme(&sessions, &ThemeFilter::parse("All"));
    assert_eq!(filtered.len(), sessions.len());
    assert!(filtered.iter().zip(&sessions).all(|(a, b)| std::ptr::eq(*a, b)));
}

#[test]
fn filter_keeps_only_matching_theme_in_order() {
    let sessions = sample();
    let filtered = filter_by_theme(&sessions, &ThemeFilter::Only(Theme::Sales));
    assert!(filtered.iter().all(|s| s.theme == Theme::Sales));
    assert_eq!(filtered.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(), vec!["s1", "s2"]);
}

#[test]
fn filter_unmatched_theme_is_empty() {
    let sessions = sample();
    assert!(filter_by_theme(&sessions, &ThemeFilter::Only(Theme::Marketing)).is_empty());
    assert!(filter_by_theme(&sessions, &ThemeFilter::parse("Leadership")).is_empty());
}

// ---------------------------------------------------------------------------
// Durations
// ---------------------------------------------------------------------------

#[test]
fn duration_ranges_map_to_midpoints() {
    assert_eq!(normalize_duration_to_hours("1-2h"), 1.5);
    assert_eq!(normalize_duration_to_hours("2-3h"), 2.5);
}

#[test]
fn duration_numeric_and_default() {
    assert_eq!(normalize_duration_to_hours("3h"), 3.0);
    assert_eq!(normalize_duration_to_hours("garbage"), 2.0);
}

#[test]
fn sum_hours_of_empty_is_zero() {
    let empty: Vec<Session> = Vec::new();
    assert_eq!(sum_hours(&empty), 0.0);
}

#[test]
fn sum_hours_adds_normalised_labels() {
    let sessions = vec![
        Session::new("a", "A", Theme::Sales).with_duration("1-2h"),
        Session::new("b", "B", Theme::Sales).with_duration("2\u{2013}3h"),
        Session::new("c", "C", Theme::Sales).with_duration("TBD"),
    ];
    assert_eq!(sum_hours(&sessions), 6.0);
}

// ---------------------------------------------------------------------------
// Completion rate
// ---------------------------------------------------------------------------

#[test]
fn completion_rate_of_empty_pool_is_zero() {
    let empty: Vec<Session> = Vec::new();
    assert_eq!(completion_rate(&empty, &empty), 0.0);
}

#[test]
fn completion_rate_quarter() {
    let all: Vec<u8> = vec![0; 12];
    assert_eq!(completion_rate(&all[..3], &all), 25.0);
}

#[test]
fn completion_rate_uses_union_denominator() {
    let store = SessionStore::builtin();
    let rate = completion_rate(store.completed(), store.all_sessions());
    assert!((rate - 52.78).abs() < 0.01, "rate was {rate}");
}

// ---------------------------------------------------------------------------
// Counting
// ---------------------------------------------------------------------------

#[test]
fn counts_follow_first_occurrence() {
    let sessions = sample();
    assert_eq!(
        count_by_trainer(&sessions),
        vec![("Ana".to_string(), 2), ("Ben".to_string(), 2), ("Cy".to_string(), 1)]
    );
    assert_eq!(
        count_by_theme(&sessions),
        vec![(Theme::Sales, 2), (Theme::Communication, 1), (Theme::Other, 1), (Theme::Product, 1)]
    );
}

#[test]
fn trainer_workload_sorts_busiest_first_stably() {
    let mut sessions = sample();
    sessions.push(Session::new("x", "X", Theme::Sales).with_trainer("Cy"));
    sessions.push(Session::new("y", "Y", Theme::Sales).with_trainer("Cy"));
    let workload = trainer_workload(&sessions);
    assert_eq!(workload[0], ("Cy".to_string(), 3));
    assert_eq!(workload[1], ("Ana".to_string(), 2));
    assert_eq!(workload[2], ("Ben".to_string(), 2));
}

#[test]
fn theme_distribution_percentages_sum_to_100() {
    let store = SessionStore::builtin();
    let dist = theme_distribution(store.all_sessions());
    let total: f64 = dist.iter().map(|d| d.percentage).sum();
    assert!((total - 100.0).abs() < 1e-9);
    assert_eq!(dist.iter().map(|d| d.count).sum::<usize>(), 36);
}

#[test]
fn theme_distribution_of_empty_is_empty() {
    let empty: Vec<Session> = Vec::new();
    assert!(theme_distribution(&empty).is_empty());
}

#[test]
fn leadership_count_in_builtin_plan() {
    let store = SessionStore::builtin();
    assert_eq!(leadership_count(store.upcoming()), 3);
    assert_eq!(leadership_count(store.all_sessions()), 5);
}

// ---------------------------------------------------------------------------
// Dates and ordering
// ---------------------------------------------------------------------------

#[test]
fn sessions_on_date_matches_exactly() {
    let sessions = vec![
        Session::new("a", "A", Theme::Sales).scheduled("2025-08-06"),
        Session::new("b", "B", Theme::Sales),
        Session::new("c", "C", Theme::Sales).scheduled("2025-08-06"),
        Session::new("d", "D", Theme::Sales).scheduled("2025-08-13"),
    ];
    let hits = sessions_on_date(&sessions, "2025-08-06");
    assert_eq!(hits.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(), vec!["a", "c"]);
    assert!(sessions_on_date(&sessions, "2025-8-6").is_empty());
}

#[test]
fn builtin_plan_has_sessions_on_its_first_wednesday() {
    let store = SessionStore::builtin();
    let hits = sessions_on_date(store.all_sessions(), "2025-08-06");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "aug-product");
}

#[test]
fn sort_for_list_orders_by_month_then_date() {
    let sessions = vec![
        Session::new("oct", "O", Theme::Sales).in_month("October").scheduled("2025-10-01"),
        Session::new("aug-undated", "U", Theme::Sales).in_month("August"),
        Session::new("aug-late", "L", Theme::Sales).in_month("August").scheduled("2025-08-27"),
        Session::new("aug-early", "E", Theme::Sales).in_month("August").scheduled("2025-08-06"),
        Session::new("odd", "?", Theme::Sales).in_month("Someday"),
    ];
    let ids: Vec<&str> = sort_for_list(&sessions).iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["aug-early", "aug-late", "aug-undated", "oct", "odd"]);
}

#[test]
fn sort_for_list_starts_with_january() {
    let store = SessionStore::builtin();
    let sorted = sort_for_list(store.all_sessions());
    assert_eq!(sorted.len(), 36);
    assert_eq!(sorted[0].month, "January");
    assert_eq!(sorted[35].month, "December");
}
