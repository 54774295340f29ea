//! Prints the apparent geocentric ecliptic coordinates of the Sun, the
//! Moon and the planets for a given instant, with their daily speed in
//! longitude and the longitude of the true lunar node.
//!
//! Usage:
//!   cargo run --bin ephemeris -- [--jd 2460000.5 | --date 2026-08-29T00:00:00Z]

use chrono::{DateTime, Utc};
use clap::Parser;

use ephemerist::constants::DAY_S;
use ephemerist::ephemlib::{ecliptic_position_with_velocity, node_position_with_velocity, Body};
use ephemerist::timelib::{delta_t, julian_from_utc};

/// Apparent geocentric positions of the Sun, Moon and planets
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Julian day in Terrestrial Time; takes precedence over --date
    #[arg(long)]
    jd: Option<f64>,

    /// UTC instant in RFC 3339 form, e.g. 2026-08-29T00:00:00Z; defaults to now
    #[arg(long)]
    date: Option<DateTime<Utc>>,
}

fn main() {
    let args = Args::parse();

    let jd_tt = match args.jd {
        Some(jd) => jd,
        None => {
            let utc = args.date.unwrap_or_else(Utc::now);
            let jd_utc = julian_from_utc(&utc);
            jd_utc + delta_t(jd_utc) / DAY_S
        }
    };

    println!("Apparent geocentric ecliptic coordinates, JD(TT) = {jd_tt:.6}");
    println!();
    println!(
        "{:<8} {:>12} {:>12} {:>12} {:>14}",
        "body", "lambda deg", "beta deg", "dist AU", "rad/day"
    );
    for body in Body::ALL {
        if body == Body::Earth {
            continue;
        }
        match ecliptic_position_with_velocity(body, jd_tt) {
            Ok((pos, vel)) => println!(
                "{:<8} {:>12.6} {:>12.6} {:>12.6} {:>14.9}",
                body.name(),
                pos.lambda.to_degrees(),
                pos.beta.to_degrees(),
                pos.radius,
                vel
            ),
            Err(err) => eprintln!("{}: {err}", body.name()),
        }
    }

    let (node, node_vel) = node_position_with_velocity(jd_tt, true);
    println!(
        "{:<8} {:>12.6} {:>12} {:>12} {:>14.9}",
        "Node",
        node.to_degrees(),
        "-",
        "-",
        node_vel
    );
}
