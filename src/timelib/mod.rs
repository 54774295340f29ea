//! Time scale utilities: civil calendar to Julian day conversions,
//! Delta-T and sidereal time.
//!
//! Julian days here are astronomical Julian days starting at noon UT.
//! Dates before 1582-10-15 are interpreted in the Julian calendar,
//! those on or after in the Gregorian calendar, following the classic
//! textbook convention.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::constants::{DAYS_PER_CENTURY, GREGORIAN_START, J2000};
use crate::mathlib::{polynome, reduce_deg};
use crate::nutationlib;

/// A civil calendar date with fractional day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilDate {
    /// Astronomical year numbering (1 BCE is year 0)
    pub year: i32,
    pub month: u32,
    /// Day of month with time of day as the fraction
    pub day: f64,
}

impl CivilDate {
    pub fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Convert to a Julian day.
    pub fn to_julian(&self) -> f64 {
        let (mut y, mut m) = (self.year as f64, self.month as f64);
        if m < 3.0 {
            y -= 1.0;
            m += 12.0;
        }
        let gregorian = {
            let probe = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor()
                + self.day
                - 1524.5;
            probe >= GREGORIAN_START
        };
        let b = if gregorian {
            let a = (y / 100.0).floor();
            2.0 - a + (a / 4.0).floor()
        } else {
            0.0
        };
        (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + self.day + b - 1524.5
    }

    /// Convert a Julian day back to a civil date.
    pub fn from_julian(jd: f64) -> Self {
        let z = (jd + 0.5).floor();
        let f = jd + 0.5 - z;
        let a = if z < GREGORIAN_START + 0.5 {
            z
        } else {
            let alpha = ((z - 1867216.25) / 36524.25).floor();
            z + 1.0 + alpha - (alpha / 4.0).floor()
        };
        let b = a + 1524.0;
        let c = ((b - 122.1) / 365.25).floor();
        let d = (365.25 * c).floor();
        let e = ((b - d) / 30.6001).floor();
        let day = b - d - (30.6001 * e).floor() + f;
        let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
        let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
        Self {
            year: year as i32,
            month: month as u32,
            day,
        }
    }
}

/// Julian day of the midnight preceding `jd`.
pub fn julian_midnight(jd: f64) -> f64 {
    (jd - 0.5).floor() + 0.5
}

/// Hours of day since the preceding midnight, `[0, 24)`.
pub fn extract_utc(jd: f64) -> f64 {
    (jd - julian_midnight(jd)) * 24.0
}

/// Julian day of January 0.0 of a year, the "day zero" epoch used by
/// annual ephemeris formulae.
pub fn julian_date_zero(year: i32) -> f64 {
    CivilDate::new(year - 1, 12, 31.0).to_julian()
}

/// Julian day for a chrono UTC timestamp.
pub fn julian_from_utc(t: &DateTime<Utc>) -> f64 {
    let day = t.day() as f64
        + (t.hour() as f64 + (t.minute() as f64 + t.second() as f64 / 60.0) / 60.0) / 24.0;
    CivilDate::new(t.year(), t.month(), day).to_julian()
}

/// Julian centuries since J2000 for a given Julian day.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_CENTURY
}

/// Delta-T (TT - UT1) in seconds, from the Espenak & Meeus polynomial
/// expressions. Covers -1999 to +3000; outside that range the long-term
/// parabola is used.
pub fn delta_t(jd: f64) -> f64 {
    let date = CivilDate::from_julian(jd);
    let y = date.year as f64 + (date.month as f64 - 0.5) / 12.0;
    match y {
        y if y < -500.0 => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u
        }
        y if y < 500.0 => {
            let u = y / 100.0;
            polynome(
                u,
                &[
                    10583.6, -1014.41, 33.78311, -5.952053, -0.1798452, 0.022174192, 0.0090316521,
                ],
            )
        }
        y if y < 1600.0 => {
            let u = (y - 1000.0) / 100.0;
            polynome(
                u,
                &[
                    1574.2, -556.01, 71.23472, 0.319781, -0.8503463, -0.005050998, 0.0083572073,
                ],
            )
        }
        y if y < 1700.0 => {
            let t = y - 1600.0;
            polynome(t, &[120.0, -0.9808, -0.01532, 1.0 / 7129.0])
        }
        y if y < 1800.0 => {
            let t = y - 1700.0;
            polynome(
                t,
                &[8.83, 0.1603, -0.0059285, 0.00013336, -1.0 / 1174000.0],
            )
        }
        y if y < 1860.0 => {
            let t = y - 1800.0;
            polynome(
                t,
                &[
                    13.72,
                    -0.332447,
                    0.0068612,
                    0.0041116,
                    -0.00037436,
                    0.0000121272,
                    -0.0000001699,
                    0.000000000875,
                ],
            )
        }
        y if y < 1900.0 => {
            let t = y - 1860.0;
            polynome(
                t,
                &[
                    7.62,
                    0.5737,
                    -0.251754,
                    0.01680668,
                    -0.0004473624,
                    1.0 / 233174.0,
                ],
            )
        }
        y if y < 1920.0 => {
            let t = y - 1900.0;
            polynome(t, &[-2.79, 1.494119, -0.0598939, 0.0061966, -0.000197])
        }
        y if y < 1941.0 => {
            let t = y - 1920.0;
            polynome(t, &[21.20, 0.84493, -0.076100, 0.0020936])
        }
        y if y < 1961.0 => {
            let t = y - 1950.0;
            polynome(t, &[29.07, 0.407, -1.0 / 233.0, 1.0 / 2547.0])
        }
        y if y < 1986.0 => {
            let t = y - 1975.0;
            polynome(t, &[45.45, 1.067, -1.0 / 260.0, -1.0 / 718.0])
        }
        y if y < 2005.0 => {
            let t = y - 2000.0;
            polynome(
                t,
                &[
                    63.86,
                    0.3345,
                    -0.060374,
                    0.0017275,
                    0.000651814,
                    0.00002373599,
                ],
            )
        }
        y if y < 2050.0 => {
            let t = y - 2000.0;
            polynome(t, &[62.92, 0.32217, 0.005589])
        }
        y if y < 2150.0 => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
        }
        _ => {
            let u = (y - 1820.0) / 100.0;
            -20.0 + 32.0 * u * u
        }
    }
}

/// Greenwich mean sidereal time in hours for a Julian day.
pub fn mean_sidereal(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let deg = reduce_deg(
        280.460_618_37
            + 360.985_647_366_29 * (jd - J2000)
            + t * t * (0.000_387_933 - t / 38_710_000.0),
    );
    deg / 15.0
}

/// Greenwich apparent sidereal time in hours, mean time corrected by
/// the equation of the equinoxes.
pub fn apparent_sidereal(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let dpsi = nutationlib::nutation_in_longitude(t);
    let eps = nutationlib::true_obliquity(t);
    let hours = mean_sidereal(jd) + dpsi.to_degrees() * eps.cos() / 15.0;
    hours.rem_euclid(24.0)
}

/// Local apparent sidereal time in hours for an east-positive longitude
/// in degrees.
pub fn local_sidereal(jd: f64, lng: f64) -> f64 {
    (apparent_sidereal(jd) + lng / 15.0).rem_euclid(24.0)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(2010, 1, 1.0, 2455197.5)]
    #[case(1999, 12, 31.0, 2451543.5)]
    #[case(837, 4, 10.3, 2026871.8)]
    #[case(-1000, 7, 12.5, 1356001.0)]
    #[case(-4712, 1, 1.5, 0.0)]
    fn civil_to_julian(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: f64,
        #[case] expected: f64,
    ) {
        let jd = CivilDate::new(year, month, day).to_julian();
        assert_relative_eq!(jd, expected, epsilon = 1e-6);
    }

    #[rstest]
    #[case(2455197.5, 2010, 1, 1.0)]
    #[case(2026871.8, 837, 4, 10.3)]
    #[case(1356001.0, -1000, 7, 12.5)]
    fn julian_to_civil(
        #[case] jd: f64,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: f64,
    ) {
        let date = CivilDate::from_julian(jd);
        assert_eq!(date.year, year);
        assert_eq!(date.month, month);
        assert_relative_eq!(date.day, day, epsilon = 1e-6);
    }

    #[rstest]
    #[case(2438792.99, 2438792.5)]
    #[case(2438793.3, 2438792.5)]
    #[case(2438792.4, 2438791.5)]
    #[case(2438791.9, 2438791.5)]
    #[case(2438793.6, 2438793.5)]
    fn midnight_of_julian_day(#[case] jd: f64, #[case] expected: f64) {
        assert_relative_eq!(julian_midnight(jd), expected, epsilon = 1e-6);
    }

    #[test]
    fn hours_since_midnight() {
        assert_relative_eq!(extract_utc(2438792.99), 11.76, epsilon = 0.2);
        assert_relative_eq!(extract_utc(2438792.5 + 0.606667), 14.56, epsilon = 0.2);
    }

    #[test]
    fn date_zero_of_2010() {
        assert_relative_eq!(julian_date_zero(2010), 2455196.5, epsilon = 1e-6);
    }

    #[test]
    fn julian_roundtrip_through_chrono() {
        let t = "1992-10-13T00:00:00Z".parse::<chrono::DateTime<Utc>>().unwrap();
        assert_relative_eq!(julian_from_utc(&t), 2448908.5, epsilon = 1e-6);
    }

    #[test]
    fn delta_t_modern_epochs() {
        // 1987.0 falls in the 1986-2005 polynomial
        let jd = CivilDate::new(1987, 1, 1.0).to_julian();
        assert_relative_eq!(delta_t(jd), 55.3, epsilon = 0.2);
        // 2005 hand-off region stays continuous to within a second
        let a = delta_t(CivilDate::new(2004, 12, 31.0).to_julian());
        let b = delta_t(CivilDate::new(2005, 1, 2.0).to_julian());
        assert!((a - b).abs() < 1.0);
    }

    #[test]
    fn mean_sidereal_matches_reference() {
        // 1987 April 10, 19h21m UT
        assert_relative_eq!(mean_sidereal(2446896.30625), 8.58252489, epsilon = 1e-6);
    }

    #[test]
    fn local_sidereal_offsets_by_longitude() {
        let jd = 2446896.30625;
        let gst = apparent_sidereal(jd);
        let lst = local_sidereal(jd, -37.6155);
        assert_relative_eq!(
            (lst - gst).rem_euclid(24.0),
            (-37.6155_f64 / 15.0).rem_euclid(24.0),
            epsilon = 1e-9
        );
    }
}
