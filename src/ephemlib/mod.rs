//! Facade over the per-body position routines: one entry point keyed by
//! a [`Body`] value, with optional longitudinal velocity from a small
//! central difference.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::heliolib::{self, EclCoord};
use crate::mathlib::diff_angle;
use crate::nutationlib::nutation_in_longitude;
use crate::timelib::centuries_since_j2000;
use crate::{moonlib, plutolib, sunlib, EphemerisError};

/// The bodies the ephemeris can position. Earth is listed for
/// completeness but has no geocentric position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Moon,
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 11] = [
        Body::Moon,
        Body::Sun,
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Body::Moon => "Moon",
            Body::Sun => "Sun",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Earth => "Earth",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Computes the apparent geocentric ecliptic coordinates of one body
/// for a Julian day and a nutation in longitude.
type Compute = fn(f64, f64) -> Result<EclCoord, EphemerisError>;

lazy_static! {
    static ref REGISTRY: HashMap<Body, Compute> = {
        let mut m: HashMap<Body, Compute> = HashMap::new();
        m.insert(Body::Moon, |jd, dpsi| Ok(moonlib::apparent(jd, dpsi)));
        m.insert(Body::Sun, |jd, dpsi| Ok(sunlib::apparent(jd, dpsi)));
        m.insert(Body::Pluto, |jd, dpsi| Ok(plutolib::apparent(jd, dpsi)));
        m.insert(Body::Mercury, |jd, dpsi| {
            heliolib::apparent_geocentric(jd, heliolib::MERCURY, dpsi)
        });
        m.insert(Body::Venus, |jd, dpsi| {
            heliolib::apparent_geocentric(jd, heliolib::VENUS, dpsi)
        });
        m.insert(Body::Mars, |jd, dpsi| {
            heliolib::apparent_geocentric(jd, heliolib::MARS, dpsi)
        });
        m.insert(Body::Jupiter, |jd, dpsi| {
            heliolib::apparent_geocentric(jd, heliolib::JUPITER, dpsi)
        });
        m.insert(Body::Saturn, |jd, dpsi| {
            heliolib::apparent_geocentric(jd, heliolib::SATURN, dpsi)
        });
        m.insert(Body::Uranus, |jd, dpsi| {
            heliolib::apparent_geocentric(jd, heliolib::URANUS, dpsi)
        });
        m.insert(Body::Neptune, |jd, dpsi| {
            heliolib::apparent_geocentric(jd, heliolib::NEPTUNE, dpsi)
        });
        m
    };
}

/// Apparent geocentric ecliptic coordinates of `body` at `jd` (TT).
/// `delta_psi` is the nutation in longitude, radians.
pub fn ecliptic_position(body: Body, jd: f64, delta_psi: f64) -> Result<EclCoord, EphemerisError> {
    let compute = REGISTRY
        .get(&body)
        .ok_or(EphemerisError::UnsupportedBody(body.name()))?;
    compute(jd, delta_psi)
}

/// Central-difference step in days, tuned to each body's rate of motion.
fn step_for(body: Body) -> f64 {
    match body {
        Body::Moon => 1.0 / 720.0,
        Body::Mercury | Body::Venus | Body::Sun | Body::Mars => 1.0 / 96.0,
        _ => 1.0 / 24.0,
    }
}

fn position_with_nutation(body: Body, jd: f64) -> Result<EclCoord, EphemerisError> {
    let dpsi = nutation_in_longitude(centuries_since_j2000(jd));
    ecliptic_position(body, jd, dpsi)
}

/// Apparent position of `body` together with its signed daily speed in
/// ecliptic longitude, radians per day. The speed comes from a central
/// difference over a body-specific step, with the angle difference
/// wrapped to avoid the 0/2pi discontinuity.
pub fn ecliptic_position_with_velocity(
    body: Body,
    jd_tt: f64,
) -> Result<(EclCoord, f64), EphemerisError> {
    let h = step_for(body);
    let p0 = position_with_nutation(body, jd_tt)?;
    let plus = position_with_nutation(body, jd_tt + h)?;
    let minus = position_with_nutation(body, jd_tt - h)?;
    let vel = diff_angle(minus.lambda, plus.lambda) / (2.0 * h);
    Ok((p0, vel))
}

/// Longitude of the lunar node and its daily speed, radians and radians
/// per day. `true_node` selects the true node over the mean one.
pub fn node_position_with_velocity(jd_tt: f64, true_node: bool) -> (f64, f64) {
    let h = 1.0 / 24.0;
    let pos = moonlib::node(jd_tt, true_node);
    let plus = moonlib::node(jd_tt + h, true_node);
    let minus = moonlib::node(jd_tt - h, true_node);
    (pos, diff_angle(minus, plus) / (2.0 * h))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    const JD: f64 = 2438792.990277; // 1965 February 1.5 TT

    #[rstest]
    #[case::sun(Body::Sun, 0.017717152050096274, 5e-6)]
    #[case::moon(Body::Moon, 0.2097337478209127, 1e-6)]
    #[case::venus(Body::Venus, 0.0218339059072008, 5e-6)]
    #[case::saturn(Body::Saturn, 0.0020254091724432044, 5e-6)]
    #[case::uranus(Body::Uranus, -0.0006107162107227282, 5e-6)]
    fn body_velocities(#[case] body: Body, #[case] expected: f64, #[case] eps: f64) {
        let (_, vel) = ecliptic_position_with_velocity(body, JD).unwrap();
        assert_relative_eq!(vel, expected, epsilon = eps);
    }

    #[test]
    fn mean_node_velocity() {
        let (_, vel) = node_position_with_velocity(JD, false);
        assert_relative_eq!(vel, -0.0009242182395929888, epsilon = 1e-6);
    }

    #[test]
    fn earth_has_no_geocentric_position() {
        let err = ecliptic_position(Body::Earth, JD, 0.0).unwrap_err();
        assert!(matches!(err, EphemerisError::UnsupportedBody("Earth")));
    }

    #[test]
    fn every_other_body_is_registered() {
        for body in Body::ALL {
            if body == Body::Earth {
                continue;
            }
            assert!(
                ecliptic_position(body, JD, 0.0).is_ok(),
                "no position for {body}"
            );
        }
    }
}
