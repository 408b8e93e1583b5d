//! Parser for captured PulseAudio `pactl` text reports.
//!
//! `pactl` prints human-oriented, indentation-delimited reports with
//! no formal grammar: nested blocks, `key: value` and `key = value`
//! leaves, parenthetical annotations, comma lists, volume triples,
//! sample specifications, flag sets, and verbatim argument bodies.
//! This crate converts one such report, captured as a single string,
//! into a nested, insertion-ordered [`Report`] mapping.
//!
//! The parser runs in a single pass: a line classifier decides whether
//! each line opens a block or carries a key/value pair, an indent
//! stack tracks the open nesting levels, and a prioritized set of
//! decoders turns each recognized value shape into its typed form.
//! Shapes no decoder recognizes degrade gracefully to plain strings.
//!
//! # Example
//!
//! ```
//! let raw = "\
//! Sink #0
//! \tState: RUNNING
//! \tMute: no
//! \tFlags: HARDWARE DECIBEL_VOLUME
//! ";
//!
//! let report = pactl_report_parser::parse(raw).unwrap();
//! assert_eq!(report["Sink #0"]["State"], "RUNNING");
//! assert_eq!(report["Sink #0"]["Flags"][0], "HARDWARE");
//! ```
//!
//! Capturing the `pactl` output is the caller's concern; nothing in
//! this crate executes commands.

mod classify;
mod cursor;
mod decode;
mod error;
mod info;
mod report;
mod shapes;
mod stack;

pub use error::ParseError;
pub use pactl_report_core::Report;

use report::ReportParser;

/// Parses one raw `pactl` report into a nested, ordered mapping.
///
/// The whole input is walked exactly once; the call is pure and safe
/// to invoke from any number of threads concurrently.
///
/// # Errors
///
/// Fails when a value bound to a shape-checked key does not match its
/// required pattern — see [`ParseError`]. Unrecognized shapes never
/// fail; they are kept as plain strings or numbers.
///
/// # Examples
///
/// ```
/// let report = pactl_report_parser::parse(
///     "Server Name: pulseaudio (on PipeWire 0.3.58)\nDefault Sample Specification: s16le 2ch 44100Hz\n",
/// ).unwrap();
/// assert_eq!(report["Server Name"], "pulseaudio (on PipeWire 0.3.58)");
/// assert_eq!(report["Default Sample Specification"]["samplingRate"], 44100);
/// ```
pub fn parse(raw: &str) -> Result<Report, ParseError> {
    ReportParser::new(raw).parse()
}
