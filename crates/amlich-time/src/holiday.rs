//! Fixed holiday tables.
//!
//! Lunar festivals are keyed on `(lunar month, lunar day)` and only apply
//! to regular months; public and commemorative days are keyed on
//! `(Gregorian month, day)`.  Names live in the [`Locale`](crate::locale).

/// Traditional festival on a fixed lunar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LunarFestival {
    /// Tết Nguyên Đán, days 1–3 of month 1.
    LunarNewYear,
    /// Tết Nguyên Tiêu, 1/15.
    FirstFullMoon,
    /// Tết Hàn Thực, 3/3.
    ColdFood,
    /// Giỗ Tổ Hùng Vương, 3/10.
    HungKings,
    /// Lễ Phật Đản, 4/15.
    BuddhasBirthday,
    /// Tết Đoan Ngọ, 5/5.
    DoubleFifth,
    /// Lễ Vu Lan, 7/15.
    VuLan,
    /// Tết Trung Thu, 8/15.
    MidAutumn,
    /// Tết Trùng Cửu, 9/9.
    DoubleNinth,
    /// Tết Thường Tân, 10/10.
    NewRice,
    /// Tết Hạ Nguyên, 10/15.
    LowerPrimordial,
    /// Ông Công Ông Táo, 12/23.
    KitchenGods,
    /// Giao Thừa, last day of month 12 (29 or 30).
    NewYearsEve,
}

/// Public or commemorative day on a fixed Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolarHoliday {
    /// 1 January.
    NewYearsDay,
    /// 3 February.
    PartyFoundation,
    /// 14 February.
    Valentines,
    /// 8 March.
    InternationalWomensDay,
    /// 30 April.
    Reunification,
    /// 1 May.
    LabourDay,
    /// 19 May.
    HoChiMinhBirthday,
    /// 1 June.
    ChildrensDay,
    /// 2 September.
    NationalDay,
    /// 20 October.
    VietnameseWomensDay,
    /// 20 November.
    TeachersDay,
    /// 22 December.
    PeoplesArmy,
    /// 24 December.
    ChristmasEve,
    /// 25 December.
    Christmas,
}

/// A named holiday of either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Holiday {
    /// Lunar festival.
    Lunar(LunarFestival),
    /// Gregorian holiday.
    Solar(SolarHoliday),
}

/// Cultural annotation of a lunar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Significance {
    /// A named festival.
    Festival(LunarFestival),
    /// Mồng 1, the first day of a month.
    FirstDay,
    /// Rằm, the fifteenth day of a month.
    FullMoonDay,
}

/// Festival on a regular-month lunar date, from the fixed table.
/// [`LunarFestival::NewYearsEve`] depends on the month length and is
/// resolved by [`LunarDate::festival`](crate::LunarDate::festival).
pub fn lunar_festival(month: u8, day: u8) -> Option<LunarFestival> {
    use LunarFestival::*;
    Some(match (month, day) {
        (1, 1..=3) => LunarNewYear,
        (1, 15) => FirstFullMoon,
        (3, 3) => ColdFood,
        (3, 10) => HungKings,
        (4, 15) => BuddhasBirthday,
        (5, 5) => DoubleFifth,
        (7, 15) => VuLan,
        (8, 15) => MidAutumn,
        (9, 9) => DoubleNinth,
        (10, 10) => NewRice,
        (10, 15) => LowerPrimordial,
        (12, 23) => KitchenGods,
        _ => return None,
    })
}

/// Holiday on a Gregorian `(month, day)`.
pub fn solar_holiday(month: u8, day: u8) -> Option<SolarHoliday> {
    use SolarHoliday::*;
    Some(match (month, day) {
        (1, 1) => NewYearsDay,
        (2, 3) => PartyFoundation,
        (2, 14) => Valentines,
        (3, 8) => InternationalWomensDay,
        (4, 30) => Reunification,
        (5, 1) => LabourDay,
        (5, 19) => HoChiMinhBirthday,
        (6, 1) => ChildrensDay,
        (9, 2) => NationalDay,
        (10, 20) => VietnameseWomensDay,
        (11, 20) => TeachersDay,
        (12, 22) => PeoplesArmy,
        (12, 24) => ChristmasEve,
        (12, 25) => Christmas,
        _ => return None,
    })
}

/// Return `true` for Mồng 1 and Rằm.
pub fn is_important_lunar_date(day: u8) -> bool {
    day == 1 || day == 15
}
