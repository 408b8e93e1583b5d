//! Specialized value-shape decoders.
//!
//! Each decoder is a stateless function converting one recognized
//! value shape into its typed form: volume triples, sample
//! specifications, format strings, and latency pairs.

use std::sync::LazyLock;

use pactl_report_core::{Decibels, Endianness, Latency, SampleDataType, SampleSpec, Volume};
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::ParseError;
use crate::info::coerce_scalar;

static PATTERNS: LazyLock<ShapePatterns> = LazyLock::new(ShapePatterns::new);

struct ShapePatterns {
    // s16le 2ch 44100Hz, float32le 6ch 48000Hz, ...
    sample_spec: Regex,
    // key = "value" pairs inside a format string, separated by two
    // spaces or ending the string
    format_pair: Regex,
    integer: Regex,
}

impl ShapePatterns {
    fn new() -> Self {
        // Compile-time constants; a failure here is a programmer error
        // in the pattern, not a runtime condition.
        Self {
            sample_spec: Regex::new(r"((s|u|f|float)(\d+)(le|be)) (\d+)ch (\d+)Hz")
                .expect("static regex must compile"),
            format_pair: Regex::new(r#"([\w.]+) = "(.+?)"(?:  |$)"#)
                .expect("static regex must compile"),
            integer: Regex::new(r"\d+").expect("static regex must compile"),
        }
    }
}

/// Decodes `<raw> / <percent>% / <dB> dB` into a [`Volume`].
///
/// `-inf dB` is kept as [`Decibels::Silence`] and serializes to the
/// literal string `"-inf"`.
pub(crate) fn decode_volume(input: &str) -> Result<Volume, ParseError> {
    let mismatch = || ParseError::VolumeMismatch(input.to_string());

    let mut parts = input.splitn(3, " / ");
    let (raw, percent, decibels) = match (parts.next(), parts.next(), parts.next()) {
        (Some(raw), Some(percent), Some(decibels)) => (raw, percent, decibels),
        _ => return Err(mismatch()),
    };

    let raw = raw.trim().parse::<u64>().map_err(|_| mismatch())?;
    let percent = percent
        .trim()
        .strip_suffix('%')
        .unwrap_or(percent.trim())
        .parse::<u64>()
        .map_err(|_| mismatch())?;
    let decibels = if decibels.trim() == "-inf dB" {
        Decibels::Silence
    } else {
        let text = decibels.trim();
        let text = text.strip_suffix(" dB").unwrap_or(text);
        Decibels::Level(text.parse::<f64>().map_err(|_| mismatch())?)
    };

    Ok(Volume {
        raw,
        percent,
        decibels,
    })
}

/// Decodes `<s|u|f|float><bits><le|be> <channels>ch <rate>Hz` into a
/// [`SampleSpec`]. Anything else is a [`ParseError::SampleSpecMismatch`];
/// there is no partial recovery.
pub(crate) fn decode_sample_spec(input: &str) -> Result<SampleSpec, ParseError> {
    let mismatch = || ParseError::SampleSpecMismatch(input.to_string());
    let caps = PATTERNS.sample_spec.captures(input).ok_or_else(mismatch)?;

    let data_type = match &caps[2] {
        "s" => SampleDataType::SignedInteger,
        "u" => SampleDataType::UnsignedInteger,
        _ => SampleDataType::Float,
    };
    let endianess = if &caps[4] == "le" {
        Endianness::Little
    } else {
        Endianness::Big
    };

    Ok(SampleSpec {
        name: caps[1].to_string(),
        sample_size: caps[3].parse().map_err(|_| mismatch())?,
        sampling_rate: caps[6].parse().map_err(|_| mismatch())?,
        endianess,
        data_type,
        channel_count: caps[5].parse().map_err(|_| mismatch())?,
    })
}

/// Decodes a format string of the form
/// `<type>, key = "value"  key2 = "value2" ...` into a mapping with a
/// `type` entry plus one entry per quoted pair. Escaped quotes inside
/// a value are stripped and values are numerically coerced.
pub(crate) fn decode_format(input: &str) -> Map<String, Value> {
    let mut out = Map::new();
    let type_name = input.split(',').next().unwrap_or_default().trim();
    out.insert(
        "type".to_string(),
        Value::String(type_name.to_string()),
    );
    for caps in PATTERNS.format_pair.captures_iter(input) {
        let value = caps[2].replace("\\\"", "");
        out.insert(caps[1].to_string(), coerce_scalar(&value));
    }
    out
}

/// Extracts the two integers of a latency value, e.g.
/// `0 usec, configured 25 usec`.
pub(crate) fn decode_latency(input: &str) -> Result<Latency, ParseError> {
    let mut integers = PATTERNS
        .integer
        .find_iter(input)
        .filter_map(|m| m.as_str().parse::<u64>().ok());
    match (integers.next(), integers.next()) {
        (Some(actual), Some(configured)) => Ok(Latency { actual, configured }),
        _ => Err(ParseError::LatencyMismatch(input.to_string())),
    }
}
