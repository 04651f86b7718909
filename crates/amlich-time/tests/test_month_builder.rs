//! Month grids: shape, lunar annotations, holidays and occurrences.

use amlich_core::FixedClock;
use amlich_time::calendar::MonthBuilder;
use amlich_time::{
    build_month, project_occurrences, AnniversaryDefinition, Date, Holiday, Locale,
    LunarFestival, Month, SolarHoliday, Vietnamese, Weekday,
};
use chrono::NaiveDate;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn test_grid_shape_for_every_month() {
    for year in [1900u16, 1999, 2000, 2024, 2025, 2099] {
        for month in 1..=12u8 {
            if (year, month) == (1900, 1) {
                continue;
            }
            let grid = build_month(year, month, &[], None).unwrap();
            assert_eq!(grid.len() % 7, 0, "{year}-{month}");
            assert!(grid.len() == 28 || grid.len() == 35 || grid.len() == 42);
            assert_eq!(grid.first().unwrap().date.weekday(), Weekday::Sunday);
            assert_eq!(grid.last().unwrap().date.weekday(), Weekday::Saturday);
            assert!(grid.windows(2).all(|w| w[1].date - w[0].date == 1));

            let current: Vec<Date> = grid
                .iter()
                .filter(|d| d.is_current_month)
                .map(|d| d.date)
                .collect();
            let first = date(year, month, 1);
            let last = date(year, month, Month::from_number(month).unwrap().length(year));
            let expected: Vec<Date> = first.iter_to(last).collect();
            assert_eq!(current, expected);
        }
    }
}

#[test]
fn test_february_2015_is_four_weeks() {
    // 2015-02-01 is a Sunday and February 2015 has 28 days.
    let grid = build_month(2015, 2, &[], None).unwrap();
    assert_eq!(grid.len(), 28);
    assert!(grid.iter().all(|d| d.is_current_month));
}

#[test]
fn test_lunar_annotations() {
    let grid = build_month(2025, 8, &[], None).unwrap();
    for cell in &grid {
        assert_eq!(cell.lunar.to_gregorian(), cell.date);
        assert_eq!(cell.is_important, cell.lunar.day() == 1 || cell.lunar.day() == 15);
    }
    // 2025-08-08 is Rằm of leap month 6; leap months carry no festival.
    let leap_full_moon = grid.iter().find(|d| d.date == date(2025, 8, 8)).unwrap();
    assert!(leap_full_moon.is_important);
    assert!(leap_full_moon.lunar.is_leap_month());
    assert_eq!(leap_full_moon.holiday, None);
    // 2025-08-23 is Mồng 1 of month 7.
    let first = grid.iter().find(|d| d.date == date(2025, 8, 23)).unwrap();
    assert_eq!((first.lunar.month(), first.lunar.day()), (7, 1));
}

#[test]
fn test_holiday_lookup() {
    let september = build_month(2024, 9, &[], None).unwrap();
    let national = september.iter().find(|d| d.date == date(2024, 9, 2)).unwrap();
    assert_eq!(national.holiday, Some(Holiday::Solar(SolarHoliday::NationalDay)));
    let mid_autumn = september.iter().find(|d| d.date == date(2024, 9, 17)).unwrap();
    assert_eq!(mid_autumn.holiday, Some(Holiday::Lunar(LunarFestival::MidAutumn)));

    let january = build_month(2025, 1, &[], None).unwrap();
    let eve = january.iter().find(|d| d.date == date(2025, 1, 28)).unwrap();
    assert_eq!(eve.holiday, Some(Holiday::Lunar(LunarFestival::NewYearsEve)));
    let kitchen_gods = january.iter().find(|d| d.date == date(2025, 1, 22)).unwrap();
    assert_eq!(kitchen_gods.holiday, Some(Holiday::Lunar(LunarFestival::KitchenGods)));
}

#[test]
fn test_holiday_display_names() {
    let name = |grid: &[amlich_time::CalendarDay], d: Date| {
        let cell = grid.iter().find(|c| c.date == d).unwrap();
        Vietnamese.holiday(cell.holiday.unwrap()).to_owned()
    };
    let september = build_month(2024, 9, &[], None).unwrap();
    assert_eq!(name(&september, date(2024, 9, 17)), "Tết Trung Thu");
    assert_eq!(name(&september, date(2024, 9, 2)), "Quốc khánh");
    let january = build_month(2025, 1, &[], None).unwrap();
    assert_eq!(name(&january, date(2025, 1, 28)), "Giao Thừa");
    assert_eq!(name(&january, date(2025, 1, 1)), "Tết Dương lịch");
}

#[test]
fn test_occurrences_are_folded_in() {
    let mid_autumn = AnniversaryDefinition::recurring(8, 15, 2000);
    let grandfather = AnniversaryDefinition::recurring(8, 15, 1980);
    let mut occ = project_occurrences(&mid_autumn, date(2024, 9, 1), date(2024, 9, 30)).unwrap();
    occ.extend(project_occurrences(&grandfather, date(2024, 9, 1), date(2024, 9, 30)).unwrap());
    // Outside the grid; ignored.
    occ.extend(project_occurrences(&mid_autumn, date(2025, 1, 1), date(2025, 12, 31)).unwrap());

    let grid = build_month(2024, 9, &occ, None).unwrap();
    let cell = grid.iter().find(|d| d.date == date(2024, 9, 17)).unwrap();
    assert_eq!(cell.occurrences.len(), 2);
    assert_eq!(grid.iter().map(|d| d.occurrences.len()).sum::<usize>(), 2);
}

#[test]
fn test_today_from_clock() {
    let clock = FixedClock(NaiveDate::from_ymd_opt(2024, 9, 30).unwrap());
    // The trailing week of September 2024 reaches into October.
    let grid = MonthBuilder::new(2024, 9).with_clock(&clock).unwrap().build().unwrap();
    let today: Vec<Date> = grid.iter().filter(|d| d.is_today).map(|d| d.date).collect();
    assert_eq!(today, vec![date(2024, 9, 30)]);

    let october = MonthBuilder::new(2024, 10).with_clock(&clock).unwrap().build().unwrap();
    let cell = october.iter().find(|d| d.is_today).unwrap();
    assert!(!cell.is_current_month);

    let none = build_month(2024, 9, &[], None).unwrap();
    assert!(none.iter().all(|d| !d.is_today));
}
