//! Parse error definitions.

use thiserror::Error;

/// Errors produced while decoding a report.
///
/// All variants are fatal to the `parse` call: the report format
/// carries no recovery points, so a value that fails its required
/// shape aborts the whole parse. Unrecognized shapes never error —
/// they fall through to the plain string/number branch instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A sample specification did not match
    /// `<s|u|f|float><bits><le|be> <channels>ch <rate>Hz`.
    #[error("sample specification does not match '<format> <n>ch <rate>Hz': {0:?}")]
    SampleSpecMismatch(String),
    /// A volume value did not match `<raw> / <percent>% / <dB> dB`.
    #[error("volume does not match '<raw> / <percent>% / <dB> dB': {0:?}")]
    VolumeMismatch(String),
    /// A `Latency` value carried fewer than two embedded integers.
    #[error("latency value must contain two integers: {0:?}")]
    LatencyMismatch(String),
}
