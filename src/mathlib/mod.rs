//! Small numeric helpers shared across the ephemeris routines:
//! Horner polynomial evaluation, angle range reduction and the
//! spherical/rectangular conversions used by the coordinate code.

use nalgebra::Vector3;

use crate::constants::TAU;

/// Evaluate a polynomial in `t` with coefficients in ascending order,
/// `coeffs[0] + coeffs[1]*t + coeffs[2]*t^2 + ...`, using Horner's scheme.
pub fn polynome(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Reduce an angle in degrees to the range `[0, 360)`.
pub fn reduce_deg(deg: f64) -> f64 {
    let x = deg % 360.0;
    if x < 0.0 {
        x + 360.0
    } else {
        x
    }
}

/// Reduce an angle in radians to the range `[0, 2*PI)`.
pub fn reduce_rad(rad: f64) -> f64 {
    let x = rad % TAU;
    if x < 0.0 {
        x + TAU
    } else {
        x
    }
}

/// Wrap an angular difference in radians into `(-PI, PI]`.
pub fn diff_angle(a: f64, b: f64) -> f64 {
    let mut d = (b - a) % TAU;
    if d <= -std::f64::consts::PI {
        d += TAU;
    } else if d > std::f64::consts::PI {
        d -= TAU;
    }
    d
}

/// Spherical coordinates with the latitude convention: `theta` is
/// measured from the reference plane, not from the pole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Radial distance
    pub r: f64,
    /// Latitude-like angle in radians, `[-PI/2, PI/2]`
    pub theta: f64,
    /// Longitude-like angle in radians
    pub phi: f64,
}

impl Spherical {
    pub fn new(r: f64, theta: f64, phi: f64) -> Self {
        Self { r, theta, phi }
    }

    /// Convert to rectangular coordinates.
    pub fn to_rect(&self) -> Vector3<f64> {
        let rcst = self.r * self.theta.cos();
        Vector3::new(
            rcst * self.phi.cos(),
            rcst * self.phi.sin(),
            self.r * self.theta.sin(),
        )
    }

    /// Build from rectangular coordinates.
    pub fn from_rect(v: &Vector3<f64>) -> Self {
        let rho = v.x.hypot(v.y);
        Self {
            r: (rho * rho + v.z * v.z).sqrt(),
            theta: v.z.atan2(rho),
            phi: reduce_rad(v.y.atan2(v.x)),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn polynome_matches_direct_evaluation() {
        let t = 10.0;
        let got = polynome(t, &[1.0, 2.0, 3.0]);
        assert_relative_eq!(got, 1.0 + 2.0 * t + 3.0 * t * t, epsilon = 1e-12);
    }

    #[test]
    fn polynome_empty_is_zero() {
        assert_eq!(polynome(5.0, &[]), 0.0);
    }

    #[test]
    fn reduce_deg_handles_negative_angles() {
        assert_relative_eq!(reduce_deg(-700.0), 20.0, epsilon = 1e-9);
        assert_relative_eq!(reduce_deg(720.5), 0.5, epsilon = 1e-9);
        assert_relative_eq!(reduce_deg(0.0), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn reduce_rad_handles_negative_angles() {
        assert_relative_eq!(reduce_rad(-0.5), TAU - 0.5, epsilon = 1e-12);
        assert_relative_eq!(reduce_rad(TAU + 0.25), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn diff_angle_wraps_around_the_circle() {
        // crossing zero from 359 deg to 1 deg is a +2 deg step
        let a = 359.0_f64.to_radians();
        let b = 1.0_f64.to_radians();
        assert_relative_eq!(diff_angle(a, b), 2.0_f64.to_radians(), epsilon = 1e-12);
        assert_relative_eq!(diff_angle(b, a), -2.0_f64.to_radians(), epsilon = 1e-12);
    }

    #[test]
    fn reduction_is_idempotent() {
        for x in [-1000.0, -0.1, 0.0, 179.5, 359.999, 1234.5] {
            assert_relative_eq!(reduce_deg(reduce_deg(x)), reduce_deg(x), epsilon = 1e-12);
            assert_relative_eq!(
                reduce_deg(x + 5.0 * 360.0),
                reduce_deg(x),
                epsilon = 1e-9
            );
        }
        assert_relative_eq!(reduce_rad(reduce_rad(-7.5)), reduce_rad(-7.5), epsilon = 1e-12);
    }

    #[test]
    fn spherical_roundtrip() {
        let s = Spherical::new(1.5, 0.3, 2.1);
        let back = Spherical::from_rect(&s.to_rect());
        assert_relative_eq!(back.r, s.r, epsilon = 1e-12);
        assert_relative_eq!(back.theta, s.theta, epsilon = 1e-12);
        assert_relative_eq!(back.phi, s.phi, epsilon = 1e-12);
    }

    #[test]
    fn spherical_at_the_pole() {
        // azimuth is undefined at the pole, only r and theta survive
        let s = Spherical::new(2.0, std::f64::consts::FRAC_PI_2, 1.0);
        let back = Spherical::from_rect(&s.to_rect());
        assert_relative_eq!(back.r, 2.0, epsilon = 1e-12);
        assert_relative_eq!(back.theta, std::f64::consts::FRAC_PI_2, epsilon = 1e-9);
    }
}
