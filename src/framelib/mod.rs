//! Conversions between the equatorial, ecliptic and horizontal frames,
//! plus precession of ecliptic coordinates from J2000 to the mean
//! equinox of date (Meeus, "Astronomical Algorithms", chapters 13 and 21).

use crate::constants::{DAYS_PER_CENTURY, J2000};
use crate::mathlib::{polynome, reduce_rad};

/// Direction of the shared equatorial/ecliptic conversion core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    EquToEcl,
    EclToEqu,
}

impl Direction {
    fn sign(self) -> f64 {
        match self {
            Direction::EquToEcl => 1.0,
            Direction::EclToEqu => -1.0,
        }
    }
}

/// Common core of the equatorial/ecliptic conversion. Both directions
/// share the same formula up to the sign of the obliquity terms.
/// `sin_e` and `cos_e` are the sine and cosine of the obliquity.
pub fn transform(x: f64, y: f64, sin_e: f64, cos_e: f64, dir: Direction) -> (f64, f64) {
    let k = dir.sign();
    let sin_x = x.sin();
    let a = (sin_x * cos_e + k * y.tan() * sin_e).atan2(x.cos());
    let b = (y.sin() * cos_e - k * y.cos() * sin_e * sin_x).asin();
    (reduce_rad(a), b)
}

/// Equatorial (RA, Dec) to ecliptic (longitude, latitude), all in radians.
/// `eps` is the obliquity of the ecliptic.
pub fn equ_to_ecl(ra: f64, dec: f64, eps: f64) -> (f64, f64) {
    transform(ra, dec, eps.sin(), eps.cos(), Direction::EquToEcl)
}

/// Ecliptic (longitude, latitude) to equatorial (RA, Dec), all in radians.
pub fn ecl_to_equ(lambda: f64, beta: f64, eps: f64) -> (f64, f64) {
    transform(lambda, beta, eps.sin(), eps.cos(), Direction::EclToEqu)
}

/// Equatorial to horizontal coordinates.
///
/// `hour_angle` is the local hour angle, `dec` the declination and `phi`
/// the observer's geographic latitude, all in radians. Returns azimuth
/// (measured westwards from South) and altitude, in radians.
pub fn equ_to_hor(hour_angle: f64, dec: f64, phi: f64) -> (f64, f64) {
    let cos_h = hour_angle.cos();
    let azm = hour_angle
        .sin()
        .atan2(cos_h * phi.sin() - dec.tan() * phi.cos());
    let alt = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * cos_h).asin();
    (reduce_rad(azm), alt)
}

/// Precess ecliptic coordinates from the J2000 frame to the mean equinox
/// of date at `jd`, per Meeus 21.5. Input and output in radians.
pub fn precess_to_mean_of_date(lambda0: f64, beta0: f64, jd: f64) -> (f64, f64) {
    let t = (jd - J2000) / DAYS_PER_CENTURY;

    let xi_sec = polynome(t, &[0.0, 47.0029, -0.03302, 0.00006]);
    let p1_sec = polynome(t, &[174.876384 * 3600.0, -869.8089, 0.03536]);
    let p2_sec = polynome(t, &[0.0, 5029.0966, 1.11113, -0.000006]);

    let xi = (xi_sec / 3600.0).to_radians();
    let p1 = (p1_sec / 3600.0).to_radians();
    let p2 = (p2_sec / 3600.0).to_radians();

    let (sin_d, cos_d) = (p1 - lambda0).sin_cos();
    let (sin_b, cos_b) = beta0.sin_cos();

    let a = xi.cos() * cos_b * sin_d - xi.sin() * sin_b;
    let b = cos_b * cos_d;
    let c = xi.cos() * sin_b + xi.sin() * cos_b * sin_d;

    (reduce_rad(p1 + p2 - a.atan2(b)), c.asin())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    // Pollux, Meeus example 13.a
    const POLLUX_RA: f64 = 116.328942;
    const POLLUX_DEC: f64 = 28.026183;
    const OBLIQUITY: f64 = 23.4392911;

    #[test]
    fn pollux_equatorial_to_ecliptic() {
        let (lambda, beta) = equ_to_ecl(
            POLLUX_RA.to_radians(),
            POLLUX_DEC.to_radians(),
            OBLIQUITY.to_radians(),
        );
        assert_relative_eq!(lambda.to_degrees(), 113.215630, epsilon = 1e-6);
        assert_relative_eq!(beta.to_degrees(), 6.684170, epsilon = 1e-6);
    }

    #[test]
    fn pollux_roundtrip() {
        let eps = OBLIQUITY.to_radians();
        let (lambda, beta) = equ_to_ecl(POLLUX_RA.to_radians(), POLLUX_DEC.to_radians(), eps);
        let (ra, dec) = ecl_to_equ(lambda, beta, eps);
        assert_relative_eq!(ra.to_degrees(), POLLUX_RA, epsilon = 1e-9);
        assert_relative_eq!(dec.to_degrees(), POLLUX_DEC, epsilon = 1e-9);
    }

    #[test]
    fn venus_horizontal_coordinates() {
        // Meeus example 13.b, Venus from the US Naval Observatory
        let (azm, alt) = equ_to_hor(
            64.352133_f64.to_radians(),
            (-6.719892_f64).to_radians(),
            38.921389_f64.to_radians(),
        );
        assert_relative_eq!(azm.to_degrees(), 68.0337, epsilon = 1e-4);
        assert_relative_eq!(alt.to_degrees(), 15.1249, epsilon = 1e-4);
    }

    #[test]
    fn precession_is_identity_at_j2000() {
        let (lambda, beta) = precess_to_mean_of_date(1.0, 0.5, J2000);
        assert_relative_eq!(lambda, 1.0, epsilon = 1e-12);
        assert_relative_eq!(beta, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn precession_rate_in_longitude() {
        // general precession is about 5029 arcsec per Julian century
        let jd = J2000 + DAYS_PER_CENTURY;
        let (lambda, _) = precess_to_mean_of_date(0.0, 0.0, jd);
        let arcsec = lambda.to_degrees() * 3600.0;
        assert!((arcsec - 5030.0).abs() < 5.0, "got {arcsec} arcsec");
    }
}
