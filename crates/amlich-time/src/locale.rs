//! Display names for calendrical metadata.
//!
//! Algorithms deal only in enums; a [`Locale`] turns them into strings.
//! [`Vietnamese`] is the only table shipped.

use crate::holiday::{Holiday, LunarFestival, Significance, SolarHoliday};
use crate::moon_phase::MoonPhase;
use crate::sexagenary::{Branch, Sexagenary, Stem, ZodiacAnimal};
use crate::solar_term::SolarTerm;

/// A string table for calendar names.
pub trait Locale: std::fmt::Debug + Send + Sync {
    /// Heavenly stem.
    fn stem(&self, stem: Stem) -> &str;

    /// Earthly branch.
    fn branch(&self, branch: Branch) -> &str;

    /// Zodiac animal.
    fn zodiac(&self, animal: ZodiacAnimal) -> &str;

    /// Name of lunar month `month`, marking leap months.
    fn month_name(&self, month: u8, is_leap: bool) -> String;

    /// Name of lunar day `day`.
    fn day_name(&self, day: u8) -> String;

    /// Moon-phase label.
    fn moon_phase(&self, phase: MoonPhase) -> &str;

    /// Lunar festival name.
    fn lunar_festival(&self, festival: LunarFestival) -> &str;

    /// Gregorian holiday name.
    fn solar_holiday(&self, holiday: SolarHoliday) -> &str;

    /// Solar term name.
    fn solar_term(&self, term: SolarTerm) -> &str;

    /// "Stem Branch" name of a cycle term.
    fn sexagenary(&self, s: Sexagenary) -> String {
        format!("{} {}", self.stem(s.stem), self.branch(s.branch))
    }

    /// Name of a holiday of either calendar.
    fn holiday(&self, holiday: Holiday) -> &str {
        match holiday {
            Holiday::Lunar(f) => self.lunar_festival(f),
            Holiday::Solar(h) => self.solar_holiday(h),
        }
    }

    /// Cultural annotation text.
    fn significance(&self, significance: Significance) -> String;
}

/// Vietnamese names.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vietnamese;

const STEM_NAMES: [&str; 10] = [
    "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm", "Quý",
];

const BRANCH_NAMES: [&str; 12] = [
    "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất", "Hợi",
];

const ANIMAL_NAMES: [&str; 12] = [
    "Chuột", "Trâu", "Hổ", "Mèo", "Rồng", "Rắn", "Ngựa", "Dê", "Khỉ", "Gà", "Chó", "Lợn",
];

const MONTH_NAMES: [&str; 12] = [
    "Giêng", "Hai", "Ba", "Tư", "Năm", "Sáu", "Bảy", "Tám", "Chín", "Mười", "Mười Một", "Chạp",
];

const TERM_NAMES: [&str; 24] = [
    "Xuân phân",
    "Thanh minh",
    "Cốc vũ",
    "Lập hạ",
    "Tiểu mãn",
    "Mang chủng",
    "Hạ chí",
    "Tiểu thử",
    "Đại thử",
    "Lập thu",
    "Xử thử",
    "Bạch lộ",
    "Thu phân",
    "Hàn lộ",
    "Sương giáng",
    "Lập đông",
    "Tiểu tuyết",
    "Đại tuyết",
    "Đông chí",
    "Tiểu hàn",
    "Đại hàn",
    "Lập xuân",
    "Vũ thủy",
    "Kinh trập",
];

impl Locale for Vietnamese {
    fn stem(&self, stem: Stem) -> &str {
        STEM_NAMES[stem.index() as usize]
    }

    fn branch(&self, branch: Branch) -> &str {
        BRANCH_NAMES[branch.index() as usize]
    }

    fn zodiac(&self, animal: ZodiacAnimal) -> &str {
        ANIMAL_NAMES[animal as usize]
    }

    fn month_name(&self, month: u8, is_leap: bool) -> String {
        debug_assert!((1..=12).contains(&month), "lunar month {month}");
        let base = MONTH_NAMES[month as usize - 1];
        if is_leap {
            format!("Tháng {base} (nhuận)")
        } else {
            format!("Tháng {base}")
        }
    }

    fn day_name(&self, day: u8) -> String {
        match day {
            1..=10 => format!("Mồng {day}"),
            15 => "Rằm".to_owned(),
            _ => format!("Ngày {day}"),
        }
    }

    fn moon_phase(&self, phase: MoonPhase) -> &str {
        match phase {
            MoonPhase::NewMoon => "Trăng non",
            MoonPhase::WaxingCrescent => "Trăng lưỡi liềm đầu tháng",
            MoonPhase::WaxingGibbous => "Trăng khuyết đầu tháng",
            MoonPhase::FullMoon => "Trăng tròn",
            MoonPhase::WaningGibbous => "Trăng khuyết cuối tháng",
            MoonPhase::WaningCrescent => "Trăng lưỡi liềm cuối tháng",
        }
    }

    fn lunar_festival(&self, festival: LunarFestival) -> &str {
        use LunarFestival::*;
        match festival {
            LunarNewYear => "Tết Nguyên Đán",
            FirstFullMoon => "Tết Nguyên Tiêu",
            ColdFood => "Tết Hàn Thực",
            HungKings => "Giỗ Tổ Hùng Vương",
            BuddhasBirthday => "Lễ Phật Đản",
            DoubleFifth => "Tết Đoan Ngọ",
            VuLan => "Lễ Vu Lan",
            MidAutumn => "Tết Trung Thu",
            DoubleNinth => "Tết Trùng Cửu",
            NewRice => "Tết Thường Tân",
            LowerPrimordial => "Tết Hạ Nguyên",
            KitchenGods => "Ông Công Ông Táo",
            NewYearsEve => "Giao Thừa",
        }
    }

    fn solar_holiday(&self, holiday: SolarHoliday) -> &str {
        use SolarHoliday::*;
        match holiday {
            NewYearsDay => "Tết Dương lịch",
            PartyFoundation => "Ngày thành lập Đảng",
            Valentines => "Lễ Tình nhân",
            InternationalWomensDay => "Quốc tế Phụ nữ",
            Reunification => "Ngày Giải phóng miền Nam",
            LabourDay => "Quốc tế Lao động",
            HoChiMinhBirthday => "Ngày sinh Chủ tịch Hồ Chí Minh",
            ChildrensDay => "Quốc tế Thiếu nhi",
            NationalDay => "Quốc khánh",
            VietnameseWomensDay => "Ngày Phụ nữ Việt Nam",
            TeachersDay => "Ngày Nhà giáo Việt Nam",
            PeoplesArmy => "Ngày thành lập Quân đội Nhân dân",
            ChristmasEve => "Đêm Giáng sinh",
            Christmas => "Lễ Giáng sinh",
        }
    }

    fn solar_term(&self, term: SolarTerm) -> &str {
        TERM_NAMES[term.index() as usize]
    }

    fn significance(&self, significance: Significance) -> String {
        match significance {
            Significance::Festival(f) => self.lunar_festival(f).to_owned(),
            Significance::FirstDay => "Mồng Một".to_owned(),
            Significance::FullMoonDay => "Rằm".to_owned(),
        }
    }
}
