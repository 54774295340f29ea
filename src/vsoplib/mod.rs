//! Evaluation of VSOP87 periodic series for the heliocentric spherical
//! coordinates of the eight major planets.
//!
//! Each coordinate (ecliptic longitude L, latitude B, radius vector R)
//! is a sum of groups of periodic terms `A * cos(B + C * tau)`, where
//! `tau` is the time in Julian millennia since J2000. Group `k` is
//! scaled by `tau^k` and the grand total by 1e-8, giving radians for
//! the angles and AU for the radius.
//!
//! The embedded tables are the abridged series, good to a few seconds
//! of arc in longitude over several centuries around J2000.

pub mod tables;

use crate::constants::ASEC2RAD;
use crate::mathlib::{reduce_rad, Spherical};

/// One periodic term: amplitude (1e-8 rad or 1e-8 AU), phase (rad)
/// and frequency (rad per Julian millennium).
pub type Term = [f64; 3];

/// Groups of periodic terms, indexed by the power of tau they multiply.
pub type Series = &'static [&'static [Term]];

/// The L, B and R series of one planet.
#[derive(Debug)]
pub struct PlanetSeries {
    pub l: Series,
    pub b: Series,
    pub r: Series,
}

/// Evaluate one coordinate series at `tau` Julian millennia since J2000.
pub fn eval_series(tau: f64, series: Series) -> f64 {
    let mut total = 0.0;
    let mut tn = 1.0;
    for group in series {
        let s: f64 = group.iter().map(|&[a, b, c]| a * (b + c * tau).cos()).sum();
        total += s * tn;
        tn *= tau;
    }
    total * 1e-8
}

/// Heliocentric ecliptic position of a planet for the dynamical equinox
/// of the date. Longitude is reduced to `[0, 2*PI)`.
pub fn heliocentric(series: &PlanetSeries, tau: f64) -> Spherical {
    Spherical {
        r: eval_series(tau, series.r),
        theta: eval_series(tau, series.b),
        phi: reduce_rad(eval_series(tau, series.l)),
    }
}

/// Correction from the VSOP87 dynamical frame to the FK5 frame.
/// Takes ecliptic longitude and latitude in radians and the Julian day,
/// returns the (dl, db) increments in radians.
pub fn fk5_correction(l: f64, b: f64, jd: f64) -> (f64, f64) {
    let t = (jd - crate::constants::J2000) / crate::constants::DAYS_PER_CENTURY;
    let lp = l - (1.397 * t + 0.00031 * t * t).to_radians();
    let dl = (-0.09033 + 0.03916 * (lp.cos() + lp.sin()) * b.tan()) * ASEC2RAD;
    let db = 0.03916 * (lp.cos() - lp.sin()) * ASEC2RAD;
    (dl, db)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn empty_series_is_zero() {
        static EMPTY: &[&[Term]] = &[];
        assert_eq!(eval_series(0.5, EMPTY), 0.0);
    }

    #[test]
    fn constant_term_ignores_tau() {
        static S: &[&[Term]] = &[&[[1e8, 0.0, 0.0]]];
        assert_relative_eq!(eval_series(0.0, S), 1.0, epsilon = 1e-12);
        assert_relative_eq!(eval_series(-3.0, S), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn tau_powers_scale_groups() {
        // second group carries a factor tau, third tau^2
        static S: &[&[Term]] = &[&[[1e8, 0.0, 0.0]], &[[2e8, 0.0, 0.0]], &[[4e8, 0.0, 0.0]]];
        let tau = 0.5;
        assert_relative_eq!(eval_series(tau, S), 1.0 + 2.0 * 0.5 + 4.0 * 0.25, epsilon = 1e-12);
    }

    #[test]
    fn term_order_within_a_group_is_irrelevant() {
        static A: &[&[Term]] = &[&[[3e8, 0.1, 5.0], [2e8, 1.4, -2.0], [1e8, 2.2, 9.0]]];
        static B: &[&[Term]] = &[&[[1e8, 2.2, 9.0], [3e8, 0.1, 5.0], [2e8, 1.4, -2.0]]];
        let tau = 0.137;
        assert_relative_eq!(eval_series(tau, A), eval_series(tau, B), epsilon = 1e-12);
    }

    #[test]
    fn fk5_correction_venus_epoch_1992() {
        // Venus at 1992 December 20
        let l = 5.464219562651914;
        let b = -0.036387329715073566;
        let (dl, db) = fk5_correction(l, b, 2448976.494739177);
        assert_relative_eq!(l + dl, 5.464219125030996, epsilon = 1e-9);
        assert_relative_eq!(b + db, -0.03638706135852978, epsilon = 1e-9);
    }

    #[test]
    fn earth_longitude_1992_october_13() {
        // Meeus example 25.b: heliocentric Earth, JD 2448908.5
        let tau = (2448908.5 - crate::constants::J2000) / crate::constants::DAYS_PER_MILLENNIUM;
        let pos = heliocentric(&tables::EARTH, tau);
        assert_relative_eq!(pos.phi.to_degrees(), 19.907372, epsilon = 1e-3);
        assert_relative_eq!(pos.r, 0.99760775, epsilon = 1e-5);
    }
}
