//! Core value model for parsed `pactl` reports.
//!
//! This crate defines the fixed-shape types that the report parser
//! produces for recognized value shapes:
//!
//! - [`Volume`] — one `<raw> / <percent>% / <dB> dB` volume triple.
//! - [`Decibels`] — a decibel level that may be the literal `-inf`.
//! - [`SampleSpec`] — a decoded sample specification such as
//!   `s16le 2ch 44100Hz`.
//! - [`Latency`] — an actual/configured latency pair.
//! - [`Report`] — the root nested mapping, keyed in first-appearance
//!   order.
//!
//! All types serialize with [`serde`] into the JSON shapes existing
//! report consumers expect.
//!
//! # Example
//!
//! ```
//! use pactl_report_core::{Decibels, Volume};
//!
//! let muted = Volume { raw: 0, percent: 0, decibels: Decibels::Silence };
//! let json = serde_json::to_value(&muted).unwrap();
//! assert_eq!(json["decibels"], "-inf");
//! ```

mod types;

pub use types::*;
