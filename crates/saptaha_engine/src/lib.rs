//! Calendar engine: sunrise-anchored panchanga and birth charts.
//!
//! This crate provides:
//! - The [`Ephemeris`] oracle contract (tropical longitudes, sunrise,
//!   ayanamsha) that all calendar computation consumes
//! - [`compute_day`]: the five classical attributes of a civil date at a
//!   location, evaluated at the local sunrise instant
//! - [`compute_chart`]: natal nakshatra/rashi from a birth instant, with
//!   explicit manual-override precedence
//! - [`ApproxEphemeris`]: a built-in low-precision analytic provider
//!
//! Clean-room implementation from standard Vedic panchanga conventions.

pub mod approx;
pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod panchanga;

pub use approx::ApproxEphemeris;
pub use chart::{BirthChart, Provided, compute_chart};
pub use ephemeris::{Body, Ephemeris, Location};
pub use error::{EngineError, EphemerisError};
pub use panchanga::{CalendarDay, compute_day};
