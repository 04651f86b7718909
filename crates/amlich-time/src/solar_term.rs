//! The 24 solar terms (tiết khí).

use crate::date::Date;
use crate::ephemeris;

/// Solar term, in order of solar longitude from the spring equinox (0°),
/// 15° apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SolarTerm {
    XuanPhan = 0,
    ThanhMinh,
    CocVu,
    LapHa,
    TieuMan,
    MangChung,
    HaChi,
    TieuThu,
    DaiThu,
    LapThu,
    XuThu,
    BachLo,
    ThuPhan,
    HanLo,
    SuongGiang,
    LapDong,
    TieuTuyet,
    DaiTuyet,
    DongChi,
    TieuHan,
    DaiHan,
    LapXuan,
    VuThuy,
    KinhTrap,
}

const TERMS: [SolarTerm; 24] = {
    use SolarTerm::*;
    [
        XuanPhan, ThanhMinh, CocVu, LapHa, TieuMan, MangChung, HaChi, TieuThu, DaiThu, LapThu,
        XuThu, BachLo, ThuPhan, HanLo, SuongGiang, LapDong, TieuTuyet, DaiTuyet, DongChi, TieuHan,
        DaiHan, LapXuan, VuThuy, KinhTrap,
    ]
};

impl SolarTerm {
    /// Term at position `0..24` (taken modulo 24).
    pub fn from_index(n: u8) -> Self {
        TERMS[(n % 24) as usize]
    }

    /// Position `0..24`.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Solar longitude at which the term begins, in degrees.
    pub fn longitude(&self) -> u16 {
        self.index() as u16 * 15
    }
}

/// The solar term in effect on `date` (as of the end of that civil day at
/// UTC+7).
pub fn solar_term_for(date: Date) -> SolarTerm {
    SolarTerm::from_index(ephemeris::solar_term_index(date.jdn()))
}
