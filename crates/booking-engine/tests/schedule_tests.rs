//! Tests for time-of-day parsing and weekly schedule rules.

use booking_engine::schedule::{weekday_index, Schedule, WorkDay, WorkWindow};
use booking_engine::time::TimeOfDay;
use chrono::NaiveDate;

fn t(s: &str) -> TimeOfDay {
    s.parse().unwrap()
}

// ── TimeOfDay ───────────────────────────────────────────────────────────────

#[test]
fn parses_and_formats_zero_padded() {
    assert_eq!(t("09:05").minutes(), 545);
    assert_eq!(t("9:05").to_string(), "09:05");
    assert_eq!(t("00:00"), TimeOfDay::MIDNIGHT);
    assert_eq!(t("24:00"), TimeOfDay::END_OF_DAY);
}

#[test]
fn rejects_malformed_times() {
    for bad in ["", "9", "09:5", "09:60", "24:01", "25:00", "ab:cd", "09-00", "123:00", "+9:00"] {
        assert!(bad.parse::<TimeOfDay>().is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn ordering_matches_string_ordering() {
    let mut parsed = vec![t("13:00"), t("09:30"), t("09:00"), t("23:59")];
    parsed.sort();
    let as_strings: Vec<String> = parsed.iter().map(|x| x.to_string()).collect();

    let mut sorted_strings = as_strings.clone();
    sorted_strings.sort();
    assert_eq!(as_strings, sorted_strings);
}

#[test]
fn serializes_as_plain_string() {
    let json = serde_json::to_string(&t("07:30")).unwrap();
    assert_eq!(json, r#""07:30""#);

    let back: TimeOfDay = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t("07:30"));
}

// ── WorkDay ─────────────────────────────────────────────────────────────────

#[test]
fn weekday_index_is_sunday_based() {
    assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()), 0);
    assert_eq!(weekday_index(NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()), 6);
}

#[test]
fn window_of_a_valid_day() {
    let wd = WorkDay::open(1, t("09:00"), t("18:00")).with_lunch(t("12:00"), t("13:00"));

    assert_eq!(
        wd.window(),
        Some(WorkWindow {
            start: 540,
            end: 1080,
            lunch: Some((720, 780)),
        })
    );
}

#[test]
fn window_is_none_for_closed_or_malformed_days() {
    assert_eq!(WorkDay::closed(1).window(), None);

    let mut no_start = WorkDay::open(1, t("09:00"), t("18:00"));
    no_start.start = None;
    assert_eq!(no_start.window(), None);

    assert_eq!(WorkDay::open(1, t("18:00"), t("18:00")).window(), None);

    let lunch_before_open = WorkDay::open(1, t("09:00"), t("18:00")).with_lunch(t("08:00"), t("10:00"));
    assert_eq!(lunch_before_open.window(), None);

    let lunch_inverted = WorkDay::open(1, t("09:00"), t("18:00")).with_lunch(t("13:00"), t("12:00"));
    assert_eq!(lunch_inverted.window(), None);
}

#[test]
fn lunch_overlap_rules() {
    let window = WorkWindow {
        start: 540,
        end: 1080,
        lunch: Some((720, 780)),
    };

    // Ends exactly at lunch start.
    assert!(!window.overlaps_lunch(660, 60));
    // Starts exactly at lunch end.
    assert!(!window.overlaps_lunch(780, 60));
    // Starts inside.
    assert!(window.overlaps_lunch(750, 10));
    // Ends inside, including exactly at lunch end.
    assert!(window.overlaps_lunch(690, 90));
    assert!(window.overlaps_lunch(690, 60));
    // Strictly contains.
    assert!(window.overlaps_lunch(700, 120));

    let no_lunch = WorkWindow {
        lunch: None,
        ..window
    };
    assert!(!no_lunch.overlaps_lunch(750, 10));
}

#[test]
fn blank_lunch_fields_deserialize_as_absent() {
    let json = r#"{"dayOfWeek":2,"isOpen":true,"start":"10:00","end":"19:00","lunchStart":"","lunchEnd":""}"#;

    let wd: WorkDay = serde_json::from_str(json).unwrap();

    assert_eq!(wd, WorkDay::open(2, t("10:00"), t("19:00")));
    assert_eq!(wd.window().unwrap().lunch, None);
}

// ── Schedule ────────────────────────────────────────────────────────────────

#[test]
fn standard_week_closes_sunday_only() {
    let schedule = Schedule::standard_week();

    assert_eq!(schedule.len(), 7);
    assert_eq!(schedule.open_days(), 6);
    assert!(!schedule.is_open_on(0));
    assert_eq!(schedule.day(0), Some(&WorkDay::closed(0)));
    assert_eq!(schedule.iter().next().map(|d| d.day_of_week), Some(0));
    let saturday = schedule.day(6).unwrap();
    assert_eq!(saturday.start, Some(t("09:00")));
    assert_eq!(saturday.end, Some(t("18:00")));
    assert_eq!(saturday.lunch_start, Some(t("12:00")));
    assert_eq!(saturday.lunch_end, Some(t("13:00")));
}

#[test]
fn first_entry_wins_for_duplicate_weekdays() {
    let schedule = Schedule::new(vec![
        WorkDay::open(3, t("09:00"), t("12:00")),
        WorkDay::closed(3),
    ]);

    assert!(schedule.is_open_on(3));
    assert_eq!(schedule.open_days(), 1);
}

#[test]
fn upsert_replaces_or_appends() {
    let mut schedule = Schedule::standard_week();

    schedule.upsert(WorkDay::closed(6));
    assert_eq!(schedule.len(), 7);
    assert!(!schedule.is_open_on(6));

    let mut partial = Schedule::default();
    partial.upsert(WorkDay::open(4, t("10:00"), t("16:00")));
    partial.upsert(WorkDay::open(4, t("11:00"), t("16:00")));
    assert_eq!(partial.len(), 1);
    assert_eq!(partial.day(4).unwrap().start, Some(t("11:00")));
}
