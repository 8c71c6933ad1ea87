//! Tests for open-date checks and the next-open-date scan.

use booking_engine::calendar::{is_date_open, next_available_date, open_dates, upcoming_dates};
use booking_engine::catalog::Professional;
use booking_engine::schedule::{Schedule, WorkDay};
use booking_engine::selection::ProfessionalSelection;
use booking_engine::time::TimeOfDay;
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open_on(weekday: u8) -> WorkDay {
    WorkDay::open(weekday, TimeOfDay::at(9, 0), TimeOfDay::at(18, 0))
}

fn professional(id: &str, days: Vec<WorkDay>) -> Professional {
    Professional {
        id: id.to_string(),
        unit_id: None,
        name: id.to_string(),
        role: String::new(),
        photo_url: String::new(),
        schedule: Schedule::new(days),
    }
}

// ── is_date_open ────────────────────────────────────────────────────────────

#[test]
fn weekday_index_starts_on_sunday() {
    // 2026-03-15 is a Sunday.
    let pros = vec![professional("p1", vec![open_on(0)])];

    assert!(is_date_open(date(2026, 3, 15), &pros, &ProfessionalSelection::Any));
    assert!(!is_date_open(date(2026, 3, 16), &pros, &ProfessionalSelection::Any));
}

#[test]
fn missing_entry_is_closed_not_open() {
    let pros = vec![professional("p1", vec![])];

    for offset in 0..7 {
        let d = date(2026, 3, 15) + chrono::Days::new(offset);
        assert!(!is_date_open(d, &pros, &ProfessionalSelection::Any));
    }
}

#[test]
fn closed_flag_overrides_hours() {
    let mut wd = open_on(1);
    wd.is_open = false;
    let pros = vec![professional("p1", vec![wd])];

    assert!(!is_date_open(date(2026, 3, 16), &pros, &ProfessionalSelection::Any));
}

#[test]
fn any_selection_is_open_when_one_professional_works() {
    let pros = vec![
        professional("p1", vec![open_on(2)]),
        professional("p2", vec![open_on(1)]),
    ];

    assert!(is_date_open(date(2026, 3, 16), &pros, &ProfessionalSelection::Any));
    assert!(!is_date_open(
        date(2026, 3, 16),
        &pros,
        &ProfessionalSelection::professional("p1")
    ));
    assert!(is_date_open(
        date(2026, 3, 16),
        &pros,
        &ProfessionalSelection::professional("p2")
    ));
}

#[test]
fn empty_list_and_unknown_id_are_always_closed() {
    let pros = vec![professional("p1", vec![open_on(1)])];

    assert!(!is_date_open(date(2026, 3, 16), &[], &ProfessionalSelection::Any));
    assert!(!is_date_open(
        date(2026, 3, 16),
        &pros,
        &ProfessionalSelection::professional("nobody")
    ));
}

// ── next_available_date ─────────────────────────────────────────────────────

#[test]
fn finds_the_only_open_day_six_days_ahead() {
    // From Sunday 2026-03-15, the only open weekday is Saturday (index 6).
    let pros = vec![professional("p1", vec![open_on(6)])];
    let from = date(2026, 3, 15);

    let next = next_available_date(from, 14, &pros, &ProfessionalSelection::Any);

    assert_eq!(next, Some(date(2026, 3, 21)));
}

#[test]
fn from_date_itself_counts_when_open() {
    let pros = vec![professional("p1", vec![open_on(1)])];

    let next = next_available_date(date(2026, 3, 16), 14, &pros, &ProfessionalSelection::Any);

    assert_eq!(next, Some(date(2026, 3, 16)));
}

#[test]
fn returns_none_when_nothing_open_within_horizon() {
    let pros = vec![professional("p1", vec![open_on(6)])];

    // Sunday + 6 days of horizon ends on Friday.
    let next = next_available_date(date(2026, 3, 15), 6, &pros, &ProfessionalSelection::Any);
    assert_eq!(next, None);

    let none_open = vec![professional("p1", vec![])];
    let next = next_available_date(date(2026, 3, 15), 14, &none_open, &ProfessionalSelection::Any);
    assert_eq!(next, None);
}

#[test]
fn zero_horizon_finds_nothing() {
    let pros = vec![professional("p1", vec![open_on(0)])];

    let next = next_available_date(date(2026, 3, 15), 0, &pros, &ProfessionalSelection::Any);

    assert_eq!(next, None);
}

// ── Date strip ──────────────────────────────────────────────────────────────

#[test]
fn upcoming_dates_are_consecutive() {
    let dates: Vec<NaiveDate> = upcoming_dates(date(2026, 2, 27), 4).collect();

    assert_eq!(
        dates,
        vec![
            date(2026, 2, 27),
            date(2026, 2, 28),
            date(2026, 3, 1),
            date(2026, 3, 2),
        ]
    );
}

#[test]
fn open_dates_flags_each_day() {
    // Open Monday to Saturday.
    let pros = vec![professional("p1", (1..=6).map(open_on).collect())];

    let strip = open_dates(date(2026, 3, 15), 14, &pros, &ProfessionalSelection::Any);

    assert_eq!(strip.len(), 14);
    let closed: Vec<NaiveDate> = strip
        .iter()
        .filter(|(_, open)| !open)
        .map(|(d, _)| *d)
        .collect();
    assert_eq!(closed, vec![date(2026, 3, 15), date(2026, 3, 22)]);
}
