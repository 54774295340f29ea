//! Nutation in longitude and obliquity from the IAU 1980 theory,
//! evaluated with the full 63-term trigonometric series, plus the mean
//! and true obliquity of the ecliptic.
//!
//! All angles are returned in radians; the time argument is Julian
//! centuries of 36525 days since J2000.

use crate::constants::ASEC2RAD;
use crate::mathlib::polynome;

/// One row of the nutation series: integer multiples of the five
/// fundamental arguments (D, M, M', F, Omega) and the sine/cosine
/// coefficients in units of 0.0001 arcsecond, with their rates per
/// Julian century.
struct NutationTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    om: i8,
    psi: f64,
    psi_t: f64,
    eps: f64,
    eps_t: f64,
}

macro_rules! term {
    ($d:expr, $m:expr, $mp:expr, $f:expr, $om:expr, $psi:expr, $psi_t:expr, $eps:expr, $eps_t:expr) => {
        NutationTerm {
            d: $d,
            m: $m,
            mp: $mp,
            f: $f,
            om: $om,
            psi: $psi,
            psi_t: $psi_t,
            eps: $eps,
            eps_t: $eps_t,
        }
    };
}

#[rustfmt::skip]
const TERMS: [NutationTerm; 63] = [
    term!( 0,  0,  0,  0, 1, -171996.0, -174.2, 92025.0,  8.9),
    term!(-2,  0,  0,  2, 2,  -13187.0,   -1.6,  5736.0, -3.1),
    term!( 0,  0,  0,  2, 2,   -2274.0,   -0.2,   977.0, -0.5),
    term!( 0,  0,  0,  0, 2,    2062.0,    0.2,  -895.0,  0.5),
    term!( 0,  1,  0,  0, 0,    1426.0,   -3.4,    54.0, -0.1),
    term!( 0,  0,  1,  0, 0,     712.0,    0.1,    -7.0,  0.0),
    term!(-2,  1,  0,  2, 2,    -517.0,    1.2,   224.0, -0.6),
    term!( 0,  0,  0,  2, 1,    -386.0,   -0.4,   200.0,  0.0),
    term!( 0,  0,  1,  2, 2,    -301.0,    0.0,   129.0, -0.1),
    term!(-2, -1,  0,  2, 2,     217.0,   -0.5,   -95.0,  0.3),
    term!(-2,  0,  1,  0, 0,    -158.0,    0.0,     0.0,  0.0),
    term!(-2,  0,  0,  2, 1,     129.0,    0.1,   -70.0,  0.0),
    term!( 0,  0, -1,  2, 2,     123.0,    0.0,   -53.0,  0.0),
    term!( 2,  0,  0,  0, 0,      63.0,    0.0,     0.0,  0.0),
    term!( 0,  0,  1,  0, 1,      63.0,    0.1,   -33.0,  0.0),
    term!( 2,  0, -1,  2, 2,     -59.0,    0.0,    26.0,  0.0),
    term!( 0,  0, -1,  0, 1,     -58.0,   -0.1,    32.0,  0.0),
    term!( 0,  0,  1,  2, 1,     -51.0,    0.0,    27.0,  0.0),
    term!(-2,  0,  2,  0, 0,      48.0,    0.0,     0.0,  0.0),
    term!( 0,  0, -2,  2, 1,      46.0,    0.0,   -24.0,  0.0),
    term!( 2,  0,  0,  2, 2,     -38.0,    0.0,    16.0,  0.0),
    term!( 0,  0,  2,  2, 2,     -31.0,    0.0,    13.0,  0.0),
    term!( 0,  0,  2,  0, 0,      29.0,    0.0,     0.0,  0.0),
    term!(-2,  0,  1,  2, 2,      29.0,    0.0,   -12.0,  0.0),
    term!( 0,  0,  0,  2, 0,      26.0,    0.0,     0.0,  0.0),
    term!(-2,  0,  0,  2, 0,     -22.0,    0.0,     0.0,  0.0),
    term!( 0,  0, -1,  2, 1,      21.0,    0.0,   -10.0,  0.0),
    term!( 0,  2,  0,  0, 0,      17.0,   -0.1,     0.0,  0.0),
    term!( 2,  0, -1,  0, 1,      16.0,    0.0,    -8.0,  0.0),
    term!(-2,  2,  0,  2, 2,     -16.0,    0.1,     7.0,  0.0),
    term!( 0,  1,  0,  0, 1,     -15.0,    0.0,     9.0,  0.0),
    term!(-2,  0,  1,  0, 1,     -13.0,    0.0,     7.0,  0.0),
    term!( 0, -1,  0,  0, 1,     -12.0,    0.0,     6.0,  0.0),
    term!( 0,  0,  2, -2, 0,      11.0,    0.0,     0.0,  0.0),
    term!( 2,  0, -1,  2, 1,     -10.0,    0.0,     5.0,  0.0),
    term!( 2,  0,  1,  2, 2,      -8.0,    0.0,     3.0,  0.0),
    term!( 0,  1,  0,  2, 2,       7.0,    0.0,    -3.0,  0.0),
    term!(-2,  1,  1,  0, 0,      -7.0,    0.0,     0.0,  0.0),
    term!( 0, -1,  0,  2, 2,      -7.0,    0.0,     3.0,  0.0),
    term!( 2,  0,  0,  2, 1,      -7.0,    0.0,     3.0,  0.0),
    term!( 2,  0,  1,  0, 0,       6.0,    0.0,     0.0,  0.0),
    term!(-2,  0,  2,  2, 2,       6.0,    0.0,    -3.0,  0.0),
    term!(-2,  0,  1,  2, 1,       6.0,    0.0,    -3.0,  0.0),
    term!( 2,  0, -2,  0, 1,      -6.0,    0.0,     3.0,  0.0),
    term!( 2,  0,  0,  0, 1,      -6.0,    0.0,     3.0,  0.0),
    term!( 0, -1,  1,  0, 0,       5.0,    0.0,     0.0,  0.0),
    term!(-2, -1,  0,  2, 1,      -5.0,    0.0,     3.0,  0.0),
    term!(-2,  0,  0,  0, 1,      -5.0,    0.0,     3.0,  0.0),
    term!( 0,  0,  2,  2, 1,      -5.0,    0.0,     3.0,  0.0),
    term!(-2,  0,  2,  0, 1,       4.0,    0.0,     0.0,  0.0),
    term!(-2,  1,  0,  2, 1,       4.0,    0.0,     0.0,  0.0),
    term!( 0,  0,  1, -2, 0,       4.0,    0.0,     0.0,  0.0),
    term!(-1,  0,  1,  0, 0,      -4.0,    0.0,     0.0,  0.0),
    term!(-2,  1,  0,  0, 0,      -4.0,    0.0,     0.0,  0.0),
    term!( 1,  0,  0,  0, 0,      -4.0,    0.0,     0.0,  0.0),
    term!( 0,  0,  1,  2, 0,       3.0,    0.0,     0.0,  0.0),
    term!( 0,  0, -2,  2, 2,      -3.0,    0.0,     0.0,  0.0),
    term!(-1, -1,  1,  0, 0,      -3.0,    0.0,     0.0,  0.0),
    term!( 0,  1,  1,  0, 0,      -3.0,    0.0,     0.0,  0.0),
    term!( 0, -1,  1,  2, 2,      -3.0,    0.0,     0.0,  0.0),
    term!( 2, -1, -1,  2, 2,      -3.0,    0.0,     0.0,  0.0),
    term!( 0,  0,  3,  2, 2,      -3.0,    0.0,     0.0,  0.0),
    term!( 2, -1,  0,  2, 2,      -3.0,    0.0,     0.0,  0.0),
];

/// The five fundamental arguments of the lunisolar nutation theory,
/// in radians.
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let d = polynome(t, &[297.85036, 445_267.111_480, -0.001_914_2, 1.0 / 189_474.0]);
    let m = polynome(t, &[357.52772, 35_999.050_340, -0.000_160_3, -1.0 / 300_000.0]);
    let mp = polynome(t, &[134.96298, 477_198.867_398, 0.008_697_2, 1.0 / 56_250.0]);
    let f = polynome(t, &[93.27191, 483_202.017_538, -0.003_682_5, 1.0 / 327_270.0]);
    let om = polynome(t, &[125.04452, -1_934.136_261, 0.002_070_8, 1.0 / 450_000.0]);
    [d, m, mp, f, om].map(f64::to_radians)
}

/// Nutation in longitude and obliquity (dpsi, deps), both in radians.
pub fn nutation(t: f64) -> (f64, f64) {
    let [d, m, mp, f, om] = fundamental_arguments(t);
    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for term in &TERMS {
        let arg = term.d as f64 * d
            + term.m as f64 * m
            + term.mp as f64 * mp
            + term.f as f64 * f
            + term.om as f64 * om;
        dpsi += (term.psi + term.psi_t * t) * arg.sin();
        deps += (term.eps + term.eps_t * t) * arg.cos();
    }
    (dpsi * 1e-4 * ASEC2RAD, deps * 1e-4 * ASEC2RAD)
}

/// Nutation in longitude only, in radians.
pub fn nutation_in_longitude(t: f64) -> f64 {
    nutation(t).0
}

/// Mean obliquity of the ecliptic in radians, from the IAU expression
/// 23 deg 26' 21.448" - 46.8150" T - 0.00059" T^2 + 0.001813" T^3.
pub fn mean_obliquity(t: f64) -> f64 {
    polynome(t, &[84_381.448, -46.8150, -0.00059, 0.001813]) * ASEC2RAD
}

/// True obliquity of the ecliptic in radians: mean obliquity plus the
/// nutation in obliquity.
pub fn true_obliquity(t: f64) -> f64 {
    mean_obliquity(t) + nutation(t).1
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::constants::{DAYS_PER_CENTURY, J2000};

    // 1987 April 10.0 TD
    const JD: f64 = 2_446_895.5;

    fn t() -> f64 {
        (JD - J2000) / DAYS_PER_CENTURY
    }

    #[test]
    fn nutation_components() {
        let (dpsi, deps) = nutation(t());
        assert_relative_eq!(dpsi.to_degrees() * 3600.0, -3.788, epsilon = 0.01);
        assert_relative_eq!(deps.to_degrees() * 3600.0, 9.443, epsilon = 0.01);
    }

    #[test]
    fn obliquity_mean_and_true() {
        assert_relative_eq!(mean_obliquity(t()).to_degrees(), 23.44094639, epsilon = 1e-6);
        assert_relative_eq!(true_obliquity(t()).to_degrees(), 23.44356944, epsilon = 1e-5);
    }
}
