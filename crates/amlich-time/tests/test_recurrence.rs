//! Anniversary projection across Gregorian windows.

use amlich_core::Error;
use amlich_time::{
    lunar_to_gregorian, project_occurrences, AnniversaryDefinition, Date, RecurrenceProjector,
    YearProbe,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn dates(def: &AnniversaryDefinition, start: Date, end: Date) -> Vec<Date> {
    project_occurrences(def, start, end)
        .unwrap()
        .into_iter()
        .map(|o| o.date)
        .collect()
}

#[test]
fn test_late_lunar_month_lands_in_next_gregorian_year() {
    // A death anniversary on 12/20, authored in lunar 2024.
    let def = AnniversaryDefinition::recurring(12, 20, 2024);
    assert_eq!(dates(&def, date(2025, 1, 1), date(2025, 2, 15)), vec![date(2025, 1, 19)]);

    // Over a whole Gregorian year, exactly one hit per lunar year that lands there.
    let year_2026 = dates(&def, date(2026, 1, 1), date(2026, 12, 31));
    assert_eq!(year_2026.len(), 1);
    assert_eq!(year_2026[0], lunar_to_gregorian(2025, 12, 20, false).unwrap());
}

#[test]
fn test_window_union() {
    let def = AnniversaryDefinition::recurring(10, 15, 1995);
    let whole = dates(&def, date(2010, 1, 1), date(2030, 12, 31));
    let mut split = dates(&def, date(2010, 1, 1), date(2019, 6, 30));
    split.extend(dates(&def, date(2019, 7, 1), date(2030, 12, 31)));
    assert_eq!(whole, split);
    assert_eq!(whole.len(), 21);
}

#[test]
fn test_idempotent() {
    let def = AnniversaryDefinition::recurring(1, 15, 2000);
    let a = project_occurrences(&def, date(2000, 1, 1), date(2010, 12, 31)).unwrap();
    let b = project_occurrences(&def, date(2000, 1, 1), date(2010, 12, 31)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_recurring_instance_flag() {
    let def = AnniversaryDefinition::recurring(3, 10, 2023);
    let hits = project_occurrences(&def, date(2022, 1, 1), date(2025, 12, 31)).unwrap();
    assert_eq!(hits.len(), 4);
    for o in &hits {
        assert_eq!(o.is_recurring_instance, o.lunar.year() != 2023, "{:?}", o.lunar);
        assert_eq!(o.lunar.to_gregorian(), o.date);
    }
}

#[test]
fn test_leap_anchor_only_in_matching_years() {
    // Leap month 4 occurs in 2020 and, among nearby years, nowhere else.
    let def = AnniversaryDefinition::recurring(4, 5, 2020).in_leap_month();
    let projector = RecurrenceProjector::new(def).unwrap();
    let hits = projector.project(date(2015, 1, 1), date(2030, 12, 31)).unwrap();
    assert!(hits.iter().all(|o| o.lunar.is_leap_month() && o.lunar.month() == 4));
    assert!(hits.iter().any(|o| o.date == date(2020, 5, 27)));

    match projector.probe(2023, Date::MIN, Date::MAX) {
        YearProbe::Skipped(e) => assert!(e.is_invalid_lunar_date()),
        other => panic!("expected a skipped year, got {other:?}"),
    }
}

#[test]
fn test_non_recurring() {
    let def = AnniversaryDefinition::once(2, 1, true, 2023);
    let hits = project_occurrences(&def, date(2020, 1, 1), date(2030, 12, 31)).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].date, date(2023, 3, 22));
    assert!(!hits[0].is_recurring_instance);

    let outside = project_occurrences(&def, date(2024, 1, 1), date(2030, 12, 31)).unwrap();
    assert!(outside.is_empty());
}

#[test]
fn test_single_day_window() {
    let def = AnniversaryDefinition::recurring(8, 15, 2000);
    assert_eq!(dates(&def, date(2024, 9, 17), date(2024, 9, 17)), vec![date(2024, 9, 17)]);
    assert!(dates(&def, date(2024, 9, 18), date(2024, 9, 18)).is_empty());
}

#[test]
fn test_inverted_window() {
    let def = AnniversaryDefinition::recurring(8, 15, 2000);
    assert!(matches!(
        project_occurrences(&def, date(2025, 1, 2), date(2025, 1, 1)),
        Err(Error::Precondition(_))
    ));
}
