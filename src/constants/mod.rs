//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Astronomical distances
/// Astronomical Unit in kilometers
pub const AU_KM: f64 = 149_597_870.700;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// J1900.0 epoch as Julian date
pub const J1900: f64 = 2_415_020.0;
/// Mean days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;
/// Mean days per Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

// Angles
/// Arcseconds in a complete circle
pub const ASEC360: f64 = 1_296_000.0;
/// Arcseconds to radians conversion factor
pub const ASEC2RAD: f64 = 4.848_136_811_095_36e-6;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Light propagation
/// Light-travel time across one AU, in days
pub const LIGHT_TIME_DAYS_PER_AU: f64 = 0.005_775_518_3;
/// Constant of annual aberration (20.4898 arcseconds) in radians
pub const ABERRATION_CONST: f64 = 20.4898 * ASEC2RAD;

// Calendar constants
/// First day of Gregorian calendar in Julian day number (1582-10-15)
pub const GREGORIAN_START: f64 = 2_299_160.5;
