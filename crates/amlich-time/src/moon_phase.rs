//! Moon-phase descriptor banded by lunar day of month.

/// Visible phase of the moon, derived from the lunar day alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MoonPhase {
    /// Day 1.
    NewMoon,
    /// Days 2–7.
    WaxingCrescent,
    /// Days 8–14.
    WaxingGibbous,
    /// Day 15.
    FullMoon,
    /// Days 16–22.
    WaningGibbous,
    /// Days 23–30.
    WaningCrescent,
}

impl MoonPhase {
    /// Phase on lunar day `day`.  Returns `None` outside `1..=30`.
    pub fn from_day(day: u8) -> Option<Self> {
        Some(match day {
            1 => MoonPhase::NewMoon,
            2..=7 => MoonPhase::WaxingCrescent,
            8..=14 => MoonPhase::WaxingGibbous,
            15 => MoonPhase::FullMoon,
            16..=22 => MoonPhase::WaningGibbous,
            23..=30 => MoonPhase::WaningCrescent,
            _ => return None,
        })
    }
}
