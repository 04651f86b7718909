//! Sexagenary cycle (Can Chi) and zodiac animals.
//!
//! Ten heavenly stems and twelve earthly branches combine into a 60-term
//! cycle naming years, months, and days.  All tables are closed and fixed.

use amlich_core::JulianDay;

/// Heavenly stem (Can).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Stem {
    /// Giáp (0).
    Giap = 0,
    /// Ất (1).
    At = 1,
    /// Bính (2).
    Binh = 2,
    /// Đinh (3).
    Dinh = 3,
    /// Mậu (4).
    Mau = 4,
    /// Kỷ (5).
    Ky = 5,
    /// Canh (6).
    Canh = 6,
    /// Tân (7).
    Tan = 7,
    /// Nhâm (8).
    Nham = 8,
    /// Quý (9).
    Quy = 9,
}

/// Earthly branch (Chi).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum Branch {
    /// Tý (0).
    Ty = 0,
    /// Sửu (1).
    Suu = 1,
    /// Dần (2).
    Dan = 2,
    /// Mão (3).
    Mao = 3,
    /// Thìn (4).
    Thin = 4,
    /// Tỵ (5).
    Ti = 5,
    /// Ngọ (6).
    Ngo = 6,
    /// Mùi (7).
    Mui = 7,
    /// Thân (8).
    Than = 8,
    /// Dậu (9).
    Dau = 9,
    /// Tuất (10).
    Tuat = 10,
    /// Hợi (11).
    Hoi = 11,
}

/// Zodiac animal of the Vietnamese calendar.  Note the buffalo and the cat
/// where the Chinese zodiac has the ox and the rabbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
pub enum ZodiacAnimal {
    /// Chuột.
    Rat = 0,
    /// Trâu.
    Buffalo = 1,
    /// Hổ.
    Tiger = 2,
    /// Mèo.
    Cat = 3,
    /// Rồng.
    Dragon = 4,
    /// Rắn.
    Snake = 5,
    /// Ngựa.
    Horse = 6,
    /// Dê.
    Goat = 7,
    /// Khỉ.
    Monkey = 8,
    /// Gà.
    Rooster = 9,
    /// Chó.
    Dog = 10,
    /// Lợn.
    Pig = 11,
}

const STEMS: [Stem; 10] = [
    Stem::Giap,
    Stem::At,
    Stem::Binh,
    Stem::Dinh,
    Stem::Mau,
    Stem::Ky,
    Stem::Canh,
    Stem::Tan,
    Stem::Nham,
    Stem::Quy,
];

const BRANCHES: [Branch; 12] = [
    Branch::Ty,
    Branch::Suu,
    Branch::Dan,
    Branch::Mao,
    Branch::Thin,
    Branch::Ti,
    Branch::Ngo,
    Branch::Mui,
    Branch::Than,
    Branch::Dau,
    Branch::Tuat,
    Branch::Hoi,
];

const ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Buffalo,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Cat,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

impl Stem {
    /// Stem at cycle position `n` (taken modulo 10).
    pub fn from_index(n: i64) -> Self {
        STEMS[n.rem_euclid(10) as usize]
    }

    /// Position `0..10`.
    pub fn index(&self) -> u8 {
        *self as u8
    }
}

impl Branch {
    /// Branch at cycle position `n` (taken modulo 12).
    pub fn from_index(n: i64) -> Self {
        BRANCHES[n.rem_euclid(12) as usize]
    }

    /// Position `0..12`.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// The zodiac animal of this branch.
    pub fn animal(&self) -> ZodiacAnimal {
        ANIMALS[self.index() as usize]
    }
}

/// One term of the 60-term cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sexagenary {
    /// Heavenly stem.
    pub stem: Stem,
    /// Earthly branch.
    pub branch: Branch,
}

impl Sexagenary {
    /// Cycle name of a lunar year.  Stem and branch count from the Giáp Tý
    /// year 4 CE.
    ///
    /// ```
    /// use amlich_time::sexagenary::{Branch, Sexagenary, Stem};
    ///
    /// let s = Sexagenary::for_year(2024);
    /// assert_eq!((s.stem, s.branch), (Stem::Giap, Branch::Thin));
    /// ```
    pub fn for_year(year: i32) -> Self {
        let n = year as i64 - 4;
        Self {
            stem: Stem::from_index(n),
            branch: Branch::from_index(n),
        }
    }

    /// Cycle name of a lunar month.  Month 1 is always a Dần month; a leap
    /// month takes the name of the month it repeats.
    pub fn for_month(year: i32, month: u8) -> Self {
        Self {
            stem: Stem::from_index(year as i64 * 12 + month as i64 + 3),
            branch: Branch::from_index(month as i64 + 1),
        }
    }

    /// Cycle name of the civil day with Julian day number `jdn`.
    pub fn for_day(jdn: JulianDay) -> Self {
        Self {
            stem: Stem::from_index(jdn as i64 + 9),
            branch: Branch::from_index(jdn as i64 + 1),
        }
    }

    /// Position in the cycle, 1 (Giáp Tý) to 60 (Quý Hợi).
    pub fn ordinal(&self) -> u8 {
        let (s, b) = (self.stem.index() as i32, self.branch.index() as i32);
        // The unique n in 0..60 with n ≡ s (mod 10) and n ≡ b (mod 12).
        ((6 * s - 5 * b).rem_euclid(60) + 1) as u8
    }
}

/// Zodiac animal of lunar `year`.
pub fn zodiac_animal(year: i32) -> ZodiacAnimal {
    Sexagenary::for_year(year).branch.animal()
}
