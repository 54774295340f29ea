//! End-to-end checks of the public ephemeris API: every supported body
//! produces a position with a plausible geocentric distance, and the
//! reported velocities agree with a coarse finite difference.

use approx::assert_relative_eq;
use rstest::rstest;

use ephemerist::ephemlib::{
    ecliptic_position, ecliptic_position_with_velocity, node_position_with_velocity, Body,
};
use ephemerist::nutationlib::nutation_in_longitude;
use ephemerist::timelib::centuries_since_j2000;
use ephemerist::EphemerisError;

const JD: f64 = 2438792.990277; // 1965 February 1.5 TT

fn dpsi(jd: f64) -> f64 {
    nutation_in_longitude(centuries_since_j2000(jd))
}

#[rstest]
#[case::moon(Body::Moon, 0.0023, 0.0028)]
#[case::sun(Body::Sun, 0.97, 1.02)]
#[case::mercury(Body::Mercury, 0.5, 1.46)]
#[case::venus(Body::Venus, 0.25, 1.75)]
#[case::mars(Body::Mars, 0.36, 2.7)]
#[case::jupiter(Body::Jupiter, 3.9, 6.5)]
#[case::saturn(Body::Saturn, 7.9, 11.1)]
#[case::uranus(Body::Uranus, 17.0, 21.2)]
#[case::neptune(Body::Neptune, 28.7, 31.4)]
#[case::pluto(Body::Pluto, 28.0, 51.0)]
fn geocentric_distance_is_plausible(#[case] body: Body, #[case] lo: f64, #[case] hi: f64) {
    let pos = ecliptic_position(body, JD, dpsi(JD)).unwrap();
    assert!(
        (lo..hi).contains(&pos.radius),
        "{body}: {} AU outside [{lo}, {hi}]",
        pos.radius
    );
    assert!((0.0..std::f64::consts::TAU).contains(&pos.lambda));
    assert!(pos.beta.abs() < 0.6, "{body}: beta {} rad", pos.beta);
}

#[test]
fn sun_longitude_1965() {
    let pos = ecliptic_position(Body::Sun, JD, dpsi(JD)).unwrap();
    assert_relative_eq!(pos.lambda.to_degrees(), 312.420465, epsilon = 1e-3);
}

#[test]
fn earth_is_rejected() {
    let err = ecliptic_position(Body::Earth, JD, 0.0).unwrap_err();
    assert!(matches!(err, EphemerisError::UnsupportedBody(_)));
    assert!(err.to_string().contains("Earth"));
}

#[rstest]
#[case::sun(Body::Sun)]
#[case::moon(Body::Moon)]
#[case::jupiter(Body::Jupiter)]
fn velocity_agrees_with_daily_motion(#[case] body: Body) {
    // the fine central difference should track a one-day difference
    // closely for these smoothly moving bodies
    let (_, vel) = ecliptic_position_with_velocity(body, JD).unwrap();
    let before = ecliptic_position(body, JD - 0.5, dpsi(JD - 0.5)).unwrap();
    let after = ecliptic_position(body, JD + 0.5, dpsi(JD + 0.5)).unwrap();
    let mut coarse = after.lambda - before.lambda;
    if coarse < -std::f64::consts::PI {
        coarse += std::f64::consts::TAU;
    }
    let tol = if body == Body::Moon { 1e-3 } else { 1e-4 };
    assert_relative_eq!(vel, coarse, epsilon = tol);
}

#[test]
fn node_positions_1965() {
    let (mean, mean_vel) = node_position_with_velocity(JD, false);
    let (true_node, _) = node_position_with_velocity(JD, true);
    assert_relative_eq!(mean.to_degrees(), 80.31173473979322, epsilon = 1e-6);
    assert_relative_eq!(true_node.to_degrees(), 81.86652882901491, epsilon = 1e-6);
    // the mean node regresses through the full circle in 18.6 years
    assert!(mean_vel < 0.0);
}
