//! Geocentric ecliptic positions of the VSOP87 planets: light-time
//! correction, annual aberration, FK5 frame correction and nutation
//! (Meeus, chapters 23 and 33).

use log::debug;
use nalgebra::Vector3;

use crate::constants::{
    ABERRATION_CONST, DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000, LIGHT_TIME_DAYS_PER_AU,
};
use crate::mathlib::{diff_angle, polynome, reduce_rad, Spherical};
use crate::vsoplib::{fk5_correction, heliocentric, tables, PlanetSeries};
use crate::{sunlib, EphemerisError};

/// Geocentric ecliptic coordinates: longitude and latitude in radians,
/// radius vector in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclCoord {
    pub lambda: f64,
    pub beta: f64,
    pub radius: f64,
}

/// A planet whose heliocentric position comes from a VSOP87 series.
#[derive(Debug, Clone, Copy)]
pub struct VsopBody {
    pub name: &'static str,
    series: &'static PlanetSeries,
}

pub static MERCURY: VsopBody = VsopBody { name: "Mercury", series: &tables::MERCURY };
pub static VENUS: VsopBody = VsopBody { name: "Venus", series: &tables::VENUS };
pub static MARS: VsopBody = VsopBody { name: "Mars", series: &tables::MARS };
pub static JUPITER: VsopBody = VsopBody { name: "Jupiter", series: &tables::JUPITER };
pub static SATURN: VsopBody = VsopBody { name: "Saturn", series: &tables::SATURN };
pub static URANUS: VsopBody = VsopBody { name: "Uranus", series: &tables::URANUS };
pub static NEPTUNE: VsopBody = VsopBody { name: "Neptune", series: &tables::NEPTUNE };

/// Heliocentric rectangular ecliptic coordinates of a body at `jd`, AU.
pub fn helio_rect(series: &PlanetSeries, jd: f64) -> Vector3<f64> {
    let tau = (jd - J2000) / DAYS_PER_MILLENNIUM;
    heliocentric(series, tau).to_rect()
}

/// Geometric geocentric position of a planet, body and Earth both taken
/// at the same instant. No light-time, aberration or nutation.
pub fn geocentric_from(jd: f64, body: VsopBody) -> EclCoord {
    let earth = helio_rect(&tables::EARTH, jd);
    let planet = helio_rect(body.series, jd);
    let sph = Spherical::from_rect(&(planet - earth));
    EclCoord {
        lambda: sph.phi,
        beta: sph.theta,
        radius: sph.r,
    }
}

/// Iterate the light-time equation: the body is antedated by the light
/// travel time while the observer stays at the query instant. Stops when
/// the geocentric longitude settles below `TOL`.
fn search_astrometric(jd: f64, body: VsopBody) -> Result<EclCoord, EphemerisError> {
    const TOL: f64 = 1e-8;
    const MAX_ITER: u32 = 10;

    let earth = helio_rect(&tables::EARTH, jd);
    let mut jd_corr = jd;
    let mut prev_lambda: Option<f64> = None;
    let mut ecl = EclCoord {
        lambda: 0.0,
        beta: 0.0,
        radius: 0.0,
    };

    for pass in 1..=MAX_ITER {
        let planet = helio_rect(body.series, jd_corr);
        let sph = Spherical::from_rect(&(planet - earth));
        ecl = EclCoord {
            lambda: sph.phi,
            beta: sph.theta,
            radius: sph.r,
        };
        if let Some(prev) = prev_lambda {
            if diff_angle(prev, ecl.lambda).abs() < TOL {
                return Ok(ecl);
            }
        }
        debug!(
            "{}: light-time pass {}, lambda {:.9} rad, dist {:.8} AU",
            body.name, pass, ecl.lambda, ecl.radius
        );
        prev_lambda = Some(ecl.lambda);
        jd_corr = jd - ecl.radius * LIGHT_TIME_DAYS_PER_AU;
    }

    let residual = prev_lambda.map_or(0.0, |prev| diff_angle(prev, ecl.lambda).abs());
    Err(EphemerisError::LightTimeNonConvergence {
        body: body.name,
        iterations: MAX_ITER,
        arcsec: residual.to_degrees() * 3600.0,
    })
}

/// Annual aberration of a geocentric ecliptic position, per Meeus 23.2.
/// Returns the (dl, db) increments in radians.
pub fn aberration(jd: f64, lambda: f64, beta: f64) -> (f64, f64) {
    let t = (jd - J2000) / DAYS_PER_CENTURY;
    let sun = sunlib::geometric(jd).lambda;
    let ecc = polynome(t, &[0.016708634, -0.000042037, -0.0000001267]);
    let perih = polynome(t, &[102.93735, 1.71946, 0.00046]).to_radians();

    let k = ABERRATION_CONST;
    let dl = (-k * (sun - lambda).cos() + ecc * k * (perih - lambda).cos()) / beta.cos();
    let db = -k * beta.sin() * ((sun - lambda).sin() - ecc * (perih - lambda).sin());
    (dl, db)
}

/// Apparent geocentric ecliptic coordinates of a planet. Corrects the
/// astrometric position for aberration and the FK5 frame, then adds the
/// nutation in longitude `delta_psi` (radians).
pub fn apparent_geocentric(
    jd: f64,
    body: VsopBody,
    delta_psi: f64,
) -> Result<EclCoord, EphemerisError> {
    let mut ecl = search_astrometric(jd, body)?;
    let (ab_l, ab_b) = aberration(jd, ecl.lambda, ecl.beta);
    let (fk_l, fk_b) = fk5_correction(ecl.lambda, ecl.beta, jd);
    ecl.lambda = reduce_rad(ecl.lambda + ab_l + fk_l + delta_psi);
    ecl.beta += ab_b + fk_b;
    Ok(ecl)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::nutationlib::nutation_in_longitude;
    use crate::timelib::centuries_since_j2000;

    // 1992 December 20.0 TD, Meeus example 33.a
    const JD_VENUS: f64 = 2448976.5;

    #[test]
    fn bodies_format_with_their_name() {
        let debug = format!("{:?}", VENUS);
        assert!(debug.contains("Venus"));
    }

    #[test]
    fn venus_geometric_longitude() {
        let ecl = geocentric_from(JD_VENUS, VENUS);
        assert_relative_eq!(ecl.lambda.to_degrees(), 313.08102, epsilon = 2e-3);
    }

    #[test]
    fn venus_apparent_position() {
        let dpsi = nutation_in_longitude(centuries_since_j2000(JD_VENUS));
        let ecl = apparent_geocentric(JD_VENUS, VENUS, dpsi).unwrap();
        assert_relative_eq!(ecl.lambda.to_degrees(), 313.08136, epsilon = 2e-3);
        assert_relative_eq!(ecl.beta.to_degrees(), -2.08474, epsilon = 2e-3);
        assert_relative_eq!(ecl.radius, 0.910947, epsilon = 1e-4);
    }

    #[test]
    fn light_time_shrinks_the_longitude() {
        // the astrometric longitude of an outer planet lags the
        // geometric one while the planet moves prograde
        let geometric = geocentric_from(JD_VENUS, SATURN);
        let apparent = apparent_geocentric(JD_VENUS, SATURN, 0.0).unwrap();
        assert!(apparent.radius > 8.0 && apparent.radius < 11.0);
        let shift = diff_angle(geometric.lambda, apparent.lambda).abs();
        // light time across ~10 AU is about 80 min, well under a degree of motion
        assert!(shift < 0.01, "shift {shift} rad");
    }
}
