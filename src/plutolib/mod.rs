//! Position of Pluto from the periodic development of Meeus chapter 37,
//! valid for the years 1885 to 2099. The series yields heliocentric
//! coordinates referred to J2000; the geocentric reduction goes through
//! the Sun's rectangular J2000 position and precession to the equinox
//! of date.

use crate::constants::{DAYS_PER_CENTURY, J2000, LIGHT_TIME_DAYS_PER_AU};
use crate::framelib;
use crate::heliolib::EclCoord;
use crate::mathlib::{reduce_rad, Spherical};
use crate::sunlib;

// sine and cosine of the mean obliquity at J2000
const SIN_E: f64 = 0.397777156;
const COS_E: f64 = 0.917482062;

/// One harmonic of Pluto's series: integer multiples of the mean
/// longitudes of Jupiter, Saturn and Pluto, and sine/cosine amplitudes
/// for longitude (1e-6 deg), latitude (1e-6 deg) and radius (1e-7 AU).
struct PlutoTerm {
    i: i8,
    j: i8,
    k: i8,
    x: [f64; 2],
    y: [f64; 2],
    z: [f64; 2],
}

macro_rules! pt {
    ($i:expr, $j:expr, $k:expr, $x:expr, $y:expr, $z:expr) => {
        PlutoTerm { i: $i, j: $j, k: $k, x: $x, y: $y, z: $z }
    };
}

#[rustfmt::skip]
const TERMS: [PlutoTerm; 43] = [
    pt!(0, 0, 1, [-19799805.0, 19850055.0], [-5452852.0, -14974862.0], [66865439.0, 68951812.0]),
    pt!(0, 0, 2, [897144.0, -4954829.0], [3527812.0, 1672790.0], [-11827535.0, -332538.0]),
    pt!(0, 0, 3, [611149.0, 1211027.0], [-1050748.0, 327647.0], [1593179.0, -1438890.0]),
    pt!(0, 0, 4, [-341243.0, -189585.0], [178690.0, -292153.0], [-18444.0, 483220.0]),
    pt!(0, 0, 5, [129287.0, -34992.0], [18650.0, 100340.0], [-65977.0, -85431.0]),
    pt!(0, 0, 6, [-38164.0, 30893.0], [-30697.0, -25823.0], [31174.0, -6032.0]),
    pt!(0, 1, -1, [20442.0, -9987.0], [4878.0, 11248.0], [-5794.0, 22161.0]),
    pt!(0, 1, 0, [-4063.0, -5071.0], [226.0, -64.0], [4601.0, 4032.0]),
    pt!(0, 1, 1, [-6016.0, -3336.0], [2030.0, -836.0], [-1729.0, 234.0]),
    pt!(0, 1, 2, [-3956.0, 3039.0], [69.0, -604.0], [-415.0, 702.0]),
    pt!(0, 1, 3, [-667.0, 3572.0], [-247.0, -567.0], [239.0, 723.0]),
    pt!(0, 2, -2, [1276.0, 501.0], [-57.0, 1.0], [67.0, -67.0]),
    pt!(0, 2, -1, [1152.0, -917.0], [-122.0, 175.0], [1034.0, -451.0]),
    pt!(0, 2, 0, [630.0, -1277.0], [-49.0, -164.0], [-129.0, 504.0]),
    pt!(1, -1, 0, [2571.0, -459.0], [-197.0, 199.0], [480.0, -231.0]),
    pt!(1, -1, 1, [899.0, -1449.0], [-25.0, 217.0], [2.0, -441.0]),
    pt!(1, 0, -3, [-1016.0, 1043.0], [589.0, -248.0], [-3359.0, 265.0]),
    pt!(1, 0, -2, [-2343.0, -1012.0], [-269.0, 711.0], [7856.0, -7832.0]),
    pt!(1, 0, -1, [7042.0, 788.0], [185.0, 193.0], [36.0, 45763.0]),
    pt!(1, 0, 0, [1199.0, -338.0], [315.0, 807.0], [8663.0, 8547.0]),
    pt!(1, 0, 1, [418.0, -67.0], [-130.0, -43.0], [-809.0, -769.0]),
    pt!(1, 0, 2, [120.0, -274.0], [5.0, 3.0], [263.0, -144.0]),
    pt!(1, 0, 3, [-60.0, -159.0], [2.0, 17.0], [-126.0, 32.0]),
    pt!(1, 0, 4, [-82.0, -29.0], [2.0, 5.0], [-35.0, -16.0]),
    pt!(1, 1, -3, [-36.0, -29.0], [2.0, 3.0], [-19.0, -4.0]),
    pt!(1, 1, -2, [-40.0, 7.0], [3.0, 1.0], [-15.0, 8.0]),
    pt!(1, 1, -1, [-14.0, 22.0], [2.0, -1.0], [-4.0, 12.0]),
    pt!(1, 1, 0, [4.0, 13.0], [1.0, -1.0], [5.0, 6.0]),
    pt!(1, 1, 1, [5.0, 2.0], [0.0, -1.0], [3.0, 1.0]),
    pt!(1, 1, 3, [-1.0, 0.0], [0.0, 0.0], [6.0, -2.0]),
    pt!(2, 0, -6, [2.0, 0.0], [0.0, -2.0], [2.0, 2.0]),
    pt!(2, 0, -5, [-4.0, 5.0], [2.0, 2.0], [-2.0, -2.0]),
    pt!(2, 0, -4, [4.0, -7.0], [-7.0, 0.0], [14.0, 13.0]),
    pt!(2, 0, -3, [14.0, 24.0], [10.0, -8.0], [-63.0, 13.0]),
    pt!(2, 0, -2, [-49.0, -34.0], [-3.0, 20.0], [136.0, -236.0]),
    pt!(2, 0, -1, [163.0, -48.0], [6.0, 5.0], [273.0, 1065.0]),
    pt!(2, 0, 0, [9.0, -24.0], [14.0, 17.0], [251.0, 149.0]),
    pt!(2, 0, 1, [-4.0, 1.0], [-2.0, 0.0], [-25.0, -9.0]),
    pt!(2, 0, 2, [-3.0, 1.0], [0.0, 0.0], [9.0, -2.0]),
    pt!(2, 0, 3, [1.0, 3.0], [0.0, 0.0], [-8.0, 7.0]),
    pt!(3, 0, -2, [-3.0, -1.0], [0.0, 1.0], [2.0, -10.0]),
    pt!(3, 0, -1, [5.0, -3.0], [0.0, 0.0], [19.0, 35.0]),
    pt!(3, 0, 0, [0.0, 0.0], [1.0, 0.0], [10.0, 3.0]),
];

/// Heliocentric ecliptic spherical coordinates of Pluto referred to
/// J2000: longitude and latitude in radians, radius in AU.
pub fn heliocentric(jd: f64) -> Spherical {
    let t = (jd - J2000) / DAYS_PER_CENTURY;

    // mean longitudes of Jupiter, Saturn and Pluto, degrees
    let j = 34.35 + 3034.9057 * t;
    let s = 50.08 + 1222.1138 * t;
    let p = 238.96 + 144.96 * t;

    let mut x = 0.0;
    let mut y = 0.0;
    let mut z = 0.0;
    for term in &TERMS {
        let alpha =
            (term.i as f64 * j + term.j as f64 * s + term.k as f64 * p).to_radians();
        let (sin_a, cos_a) = alpha.sin_cos();
        x += term.x[0] * sin_a + term.x[1] * cos_a;
        y += term.y[0] * sin_a + term.y[1] * cos_a;
        z += term.z[0] * sin_a + term.z[1] * cos_a;
    }

    let l_deg = 238.958116 + 144.96 * t + x / 1e6;
    let b_deg = -3.908239 + y / 1e6;

    Spherical {
        r: 40.7241346 + z / 1e7,
        theta: b_deg.to_radians(),
        phi: l_deg.to_radians(),
    }
}

/// Geocentric equatorial coordinates of Pluto in the J2000 frame,
/// corrected for light-time in a single antedating pass. Returns
/// (right ascension, declination) in radians and the distance in AU.
pub fn geocentric_equatorial(jd: f64) -> (f64, f64, f64) {
    let sun = sunlib::rect2000(jd);

    let mut jd_corr = jd;
    let mut first_pass = true;
    loop {
        let sph = heliocentric(jd_corr);
        let (sin_b, cos_b) = sph.theta.sin_cos();
        let (sin_l, cos_l) = sph.phi.sin_cos();

        // rectangular equatorial J2000 coordinates of Pluto, AU
        let xp = sph.r * cos_l * cos_b;
        let yp = sph.r * (sin_l * cos_b * COS_E - sin_b * SIN_E);
        let zp = sph.r * (sin_l * cos_b * SIN_E + sin_b * COS_E);

        let xg = sun.x + xp;
        let yg = sun.y + yp;
        let zg = sun.z + zp;
        let dist = (xg * xg + yg * yg + zg * zg).sqrt();

        if first_pass {
            jd_corr = jd - dist * LIGHT_TIME_DAYS_PER_AU;
            first_pass = false;
            continue;
        }

        let alpha = reduce_rad(yg.atan2(xg));
        let delta = (zg / dist).asin();
        return (alpha, delta, dist);
    }
}

/// Apparent geocentric ecliptic coordinates of Pluto, referred to the
/// true equinox of date. `delta_psi` is the nutation in longitude.
pub fn apparent(jd: f64, delta_psi: f64) -> EclCoord {
    let (alpha, delta, dist) = geocentric_equatorial(jd);
    let (lam0, bet0) = framelib::transform(alpha, delta, SIN_E, COS_E, framelib::Direction::EquToEcl);
    let (lam, bet) = framelib::precess_to_mean_of_date(lam0, bet0, jd);
    EclCoord {
        lambda: reduce_rad(lam + delta_psi),
        beta: bet,
        radius: dist,
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    // 1992 October 13.0 TD, Meeus example 37.a
    const JD: f64 = 2448908.5;

    #[test]
    fn heliocentric_position() {
        let sph = heliocentric(JD);
        assert_relative_eq!(sph.phi.to_degrees(), 232.74071, epsilon = 1e-4);
        assert_relative_eq!(sph.theta.to_degrees(), 14.58782, epsilon = 1e-4);
        assert_relative_eq!(sph.r, 29.711111, epsilon = 1e-5);
    }

    #[test]
    fn geocentric_position() {
        let (alpha, delta, dist) = geocentric_equatorial(JD);
        assert_relative_eq!(alpha.to_degrees(), 232.93231, epsilon = 1e-3);
        assert_relative_eq!(delta.to_degrees(), -4.45802, epsilon = 1e-3);
        assert_relative_eq!(dist, 30.528739, epsilon = 1e-4);
    }

    #[test]
    fn apparent_position() {
        let dpsi = 0.004450323252274867_f64.to_radians();
        let ecl = apparent(JD, dpsi);
        assert_relative_eq!(ecl.lambda.to_degrees(), 231.59870478601076, epsilon = 1e-3);
        assert_relative_eq!(ecl.beta.to_degrees(), 14.189772216809267, epsilon = 1e-3);
        assert_relative_eq!(ecl.radius, 30.528739583573994, epsilon = 1e-4);
    }
}
