//! Ephemerist: positions of the Sun, Moon and planets from analytic
//! theories.
//!
//! The heavy lifting is done by the abridged VSOP87 series for the
//! eight major planets, the full trigonometric lunar theory of Meeus
//! chapter 47 and the periodic development for Pluto, all reduced to
//! apparent geocentric ecliptic coordinates of date. The [`ephemlib`]
//! module is the front door: it maps a [`Body`](ephemlib::Body) to the
//! right routine and can attach a longitudinal velocity.
//!
//! ```no_run
//! use ephemerist::ephemlib::{ecliptic_position_with_velocity, Body};
//!
//! let jd_tt = 2460000.5;
//! let (pos, vel) = ecliptic_position_with_velocity(Body::Mars, jd_tt)?;
//! println!("lambda {:.6} rad, {:.6} rad/day", pos.lambda, vel);
//! # Ok::<(), ephemerist::EphemerisError>(())
//! ```

use thiserror::Error;

pub mod constants;
pub mod ephemlib;
pub mod framelib;
pub mod heliolib;
pub mod mathlib;
pub mod moonlib;
pub mod nutationlib;
pub mod plutolib;
pub mod sunlib;
pub mod timelib;
pub mod vsoplib;

// Re-export commonly used types
pub use ephemlib::Body;
pub use heliolib::EclCoord;
pub use timelib::CivilDate;

/// Main error type for the ephemerist library
#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("no geocentric position for body: {0}")]
    UnsupportedBody(&'static str),

    #[error("{body}: light-time iteration did not converge after {iterations} passes (residual {arcsec:.6}\")")]
    LightTimeNonConvergence {
        body: &'static str,
        iterations: u32,
        arcsec: f64,
    },
}

/// Result type for ephemerist operations
pub type Result<T> = std::result::Result<T, EphemerisError>;
