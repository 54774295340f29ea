//! Geocentric position of the Sun, derived from Earth's heliocentric
//! VSOP87 series (Meeus, chapter 25).

use nalgebra::Vector3;

use crate::constants::{ABERRATION_CONST, DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, J2000};
use crate::heliolib::EclCoord;
use crate::mathlib::reduce_rad;
use crate::vsoplib::{heliocentric, tables};

fn earth_lbr(jd: f64) -> (f64, f64, f64) {
    let tau = (jd - J2000) / DAYS_PER_MILLENNIUM;
    let sph = heliocentric(&tables::EARTH, tau);
    (sph.phi, sph.theta, sph.r)
}

/// Aberration correction to the Sun's ecliptic longitude, radians.
fn aberration(r: f64, beta: f64) -> f64 {
    -ABERRATION_CONST * beta.cos() / r
}

/// Geometric geocentric ecliptic coordinates of the Sun, referred to the
/// mean equinox of date. Earth's heliocentric position turned around:
/// longitude plus half a turn, latitude negated.
pub fn geometric(jd: f64) -> EclCoord {
    let (l, b, r) = earth_lbr(jd);
    EclCoord {
        lambda: reduce_rad(l + std::f64::consts::PI),
        beta: -b,
        radius: r,
    }
}

/// Apparent geocentric ecliptic coordinates of the Sun. `delta_psi` is
/// the nutation in longitude, in radians.
pub fn apparent(jd: f64, delta_psi: f64) -> EclCoord {
    let mut ecl = geometric(jd);
    ecl.lambda = reduce_rad(ecl.lambda + aberration(ecl.radius, ecl.beta) + delta_psi);
    ecl
}

/// Geocentric rectangular equatorial coordinates of the Sun in the J2000
/// frame, in AU (Meeus 26.3). Used as the origin shift for bodies whose
/// series are referred to J2000, such as Pluto.
pub fn rect2000(jd: f64) -> Vector3<f64> {
    let t = (jd - J2000) / DAYS_PER_CENTURY;
    let ecl = geometric(jd);

    // reduce the longitude to the J2000 frame before forming the vector
    let dl = (1.397 * t + 0.00031 * t * t).to_radians();
    let lambda = ecl.lambda - dl;
    let (sin_l, cos_l) = lambda.sin_cos();
    let (sin_b, cos_b) = ecl.beta.sin_cos();

    let x0 = ecl.radius * cos_b * cos_l;
    let y0 = ecl.radius * cos_b * sin_l;
    let z0 = ecl.radius * sin_b;

    Vector3::new(
        x0 + 4.40360e-7 * y0 - 1.90919e-7 * z0,
        -4.79966e-7 * x0 + 0.917482137087 * y0 - 0.397776982902 * z0,
        0.397776982902 * y0 + 0.917482137087 * z0,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    // 1992 October 13.0 TD, Meeus example 25.b
    const JD_1992: f64 = 2448908.5;

    #[test]
    fn geometric_longitude() {
        let ecl = geometric(JD_1992);
        assert_relative_eq!(ecl.lambda.to_degrees(), 199.907347, epsilon = 1e-3);
    }

    #[test]
    fn geometric_latitude() {
        let ecl = geometric(JD_1992);
        assert_relative_eq!(ecl.beta.to_degrees(), 0.000172, epsilon = 1e-4);
    }

    #[test]
    fn geometric_distance() {
        let ecl = geometric(JD_1992);
        assert_relative_eq!(ecl.radius, 0.99760775, epsilon = 1e-5);
    }

    #[test]
    fn apparent_longitude() {
        let jd = 2438792.990277;
        let dpsi = -0.00007401181737462798;
        let ecl = apparent(jd, dpsi);
        assert_relative_eq!(ecl.lambda.to_degrees(), 312.420465, epsilon = 1e-3);
    }

    #[test]
    fn rectangular_j2000() {
        let v = rect2000(JD_1992);
        assert_relative_eq!(v.x, -0.9373959, epsilon = 1e-4);
        assert_relative_eq!(v.y, -0.31316793, epsilon = 1e-4);
        assert_relative_eq!(v.z, -0.13577924, epsilon = 1e-4);
    }
}
