//! New-moon and solar-longitude ephemeris.
//!
//! Low-precision series after Meeus, *Astronomical Algorithms*, ch. 25 and
//! 49, in the form used by Vietnamese almanacs since 1968.  Accuracy is a
//! few minutes over 1800–2200, enough to place each new moon and each major
//! solar term on the right civil day at UTC+7.
//!
//! This module is the verified base routine the rest of the crate treats as
//! a black box; the functions work on raw Julian day numbers so that they
//! also serve the lunar months that straddle the `Date` range bounds.

use amlich_core::{JulianDay, Real};
use std::f64::consts::PI;

/// Civil time zone (hours east of UTC) at which day boundaries are taken.
pub const TIME_ZONE: Real = 7.0;

/// Mean synodic month, in days.
pub const SYNODIC_MONTH: Real = 29.530_588_853;

/// Julian date of the reference new moon (1900-01-01 13:51 TT), `k = 0`.
const NEW_MOON_EPOCH: Real = 2_415_021.076_998_695;

const DEG: Real = PI / 180.0;

/// Julian date (TT-corrected, fractional) of the `k`-th new moon after the
/// reference new moon of January 1900.
pub fn new_moon(k: i32) -> Real {
    let k = k as Real;
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    let mut jd = 2_415_020.759_33 + 29.530_588_68 * k + 0.000_117_8 * t2 - 0.000_000_155 * t3;
    jd += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * DEG).sin();

    // Sun's mean anomaly, moon's mean anomaly, moon's argument of latitude.
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mpr = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    let mut c1 = (0.1734 - 0.000_393 * t) * (m * DEG).sin() + 0.0021 * (2.0 * m * DEG).sin();
    c1 -= 0.4068 * (mpr * DEG).sin() - 0.0161 * (2.0 * mpr * DEG).sin();
    c1 -= 0.0004 * (3.0 * mpr * DEG).sin();
    c1 += 0.0104 * (2.0 * f * DEG).sin() - 0.0051 * ((m + mpr) * DEG).sin();
    c1 -= 0.0074 * ((m - mpr) * DEG).sin() - 0.0004 * ((2.0 * f + m) * DEG).sin();
    c1 -= 0.0004 * ((2.0 * f - m) * DEG).sin() + 0.0006 * ((2.0 * f + mpr) * DEG).sin();
    c1 += 0.0010 * ((2.0 * f - mpr) * DEG).sin() + 0.0005 * ((2.0 * mpr + m) * DEG).sin();

    let delta_t = if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    };
    jd + c1 - delta_t
}

/// Apparent solar longitude in radians, `[0, 2π)`, at Julian date `jd`.
pub fn sun_longitude(jd: Real) -> Real {
    let t = (jd - 2_451_545.0) / 36_525.0;
    let t2 = t * t;
    let m = 357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2;
    let l0 = 280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let mut dl = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (DEG * m).sin();
    dl += (0.019_993 - 0.000_101 * t) * (DEG * 2.0 * m).sin() + 0.000_290 * (DEG * 3.0 * m).sin();
    let l = (l0 + dl) * DEG;
    l.rem_euclid(2.0 * PI)
}

/// Civil day (at [`TIME_ZONE`]) on which the `k`-th new moon falls.
pub fn new_moon_day(k: i32) -> JulianDay {
    (new_moon(k) + 0.5 + TIME_ZONE / 24.0).floor() as JulianDay
}

/// Index `0..12` of the major solar term (zhongqi) in effect at the start of
/// civil day `day`; 0 is the spring equinox, 9 the winter solstice.
pub fn major_term(day: JulianDay) -> u8 {
    let lon = sun_longitude(day as Real - 0.5 - TIME_ZONE / 24.0);
    ((lon / PI * 6.0).floor() as u8).min(11)
}

/// Index `0..24` of the solar term (tiết khí) in effect at the end of civil
/// day `day`; 0 is the spring equinox, each step 15°.
pub fn solar_term_index(day: JulianDay) -> u8 {
    let lon = sun_longitude(day as Real + 0.5 - TIME_ZONE / 24.0);
    ((lon / PI * 12.0).floor() as u8).min(23)
}

/// Index `k` of the new moon nearest to `day`.
pub fn lunation_nearest(day: JulianDay) -> i32 {
    ((day as Real - NEW_MOON_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i32
}

/// First day of the lunar month containing the winter solstice of Gregorian
/// year `year` (the eleventh lunar month).
pub fn month_11_start(year: i32) -> JulianDay {
    let dec31 = crate::date::jdn_from_ymd(year, 12, 31);
    let k = ((dec31 - 2_415_021) as Real / SYNODIC_MONTH).floor() as i32;
    let nm = new_moon_day(k);
    // A new moon at or after the solstice belongs to month 12.
    if major_term(nm) >= 9 {
        new_moon_day(k - 1)
    } else {
        nm
    }
}

/// Offset (1-based, from month 11 starting at `a11`) of the first month in
/// the following 13-month span that contains no major solar term.
pub fn leap_month_offset(a11: JulianDay) -> usize {
    let k = lunation_nearest(a11);
    let mut i = 1;
    let mut arc = major_term(new_moon_day(k + 1));
    loop {
        let last = arc;
        i += 1;
        arc = major_term(new_moon_day(k + i as i32));
        if arc == last || i >= 14 {
            break;
        }
    }
    i - 1
}
