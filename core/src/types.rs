//! Decoded-value type definitions.
//!
//! This module defines the data model for the structured values the
//! report parser extracts from `pactl` output. The types are designed
//! for serialization with [`serde`] and produce the exact JSON field
//! names and spellings that downstream consumers of the original
//! report format rely on (including the historical `endianess` key).

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The root report: a nested, insertion-ordered, string-keyed mapping.
///
/// Values are [`serde_json::Value`]s — nested mappings for blocks,
/// arrays for list-shaped values, and strings/numbers for leaves.
/// Insertion order follows first appearance in the source text
/// (`serde_json` is built with the `preserve_order` feature).
pub type Report = serde_json::Map<String, serde_json::Value>;

/// A decibel level from a volume triple.
///
/// `pactl` prints muted channels as `-inf dB`. That value is carried
/// as the literal string `"-inf"` rather than a floating-point
/// negative infinity, which JSON cannot represent.
///
/// # Examples
///
/// ```
/// use pactl_report_core::Decibels;
///
/// assert_eq!(serde_json::to_value(Decibels::Level(-3.5)).unwrap(), -3.5);
/// assert_eq!(serde_json::to_value(Decibels::Silence).unwrap(), "-inf");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decibels {
    /// A finite decibel value.
    Level(f64),
    /// The `-inf dB` marker.
    Silence,
}

impl Serialize for Decibels {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Decibels::Level(value) => serializer.serialize_f64(*value),
            Decibels::Silence => serializer.serialize_str("-inf"),
        }
    }
}

struct DecibelsVisitor;

impl Visitor<'_> for DecibelsVisitor {
    type Value = Decibels;

    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("a decibel number or the string \"-inf\"")
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Decibels, E> {
        Ok(Decibels::Level(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Decibels, E> {
        Ok(Decibels::Level(value as f64))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Decibels, E> {
        Ok(Decibels::Level(value as f64))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Decibels, E> {
        if value == "-inf" {
            Ok(Decibels::Silence)
        } else {
            Err(E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }
}

impl<'de> Deserialize<'de> for Decibels {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecibelsVisitor)
    }
}

/// One decoded volume triple: `<raw> / <percent>% / <dB> dB`.
///
/// # Examples
///
/// ```
/// use pactl_report_core::{Decibels, Volume};
///
/// let full = Volume { raw: 65536, percent: 100, decibels: Decibels::Level(0.0) };
/// let json = serde_json::to_value(&full).unwrap();
/// assert_eq!(json["raw"], 65536);
/// assert_eq!(json["percent"], 100);
/// assert_eq!(json["decibels"], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Raw device volume (e.g. 65536 for 100%).
    pub raw: u64,
    /// Volume as an integer percentage.
    pub percent: u64,
    /// Decibel level, or [`Decibels::Silence`] for `-inf dB`.
    pub decibels: Decibels,
}

/// Byte order of a sample format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endianness {
    Little,
    Big,
}

/// Encoding of a sample format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleDataType {
    #[serde(rename = "Signed Integer")]
    SignedInteger,
    #[serde(rename = "Unsigned Integer")]
    UnsignedInteger,
    #[serde(rename = "Float")]
    Float,
}

/// A decoded sample specification such as `s16le 2ch 44100Hz`.
///
/// Serializes with the camel-cased field names of the original report
/// format, including its `endianess` spelling.
///
/// # Examples
///
/// ```
/// use pactl_report_core::{Endianness, SampleDataType, SampleSpec};
///
/// let spec = SampleSpec {
///     name: "s16le".to_string(),
///     sample_size: 16,
///     sampling_rate: 44100,
///     endianess: Endianness::Little,
///     data_type: SampleDataType::SignedInteger,
///     channel_count: 2,
/// };
/// let json = serde_json::to_value(&spec).unwrap();
/// assert_eq!(json["sampleSize"], 16);
/// assert_eq!(json["endianess"], "Little");
/// assert_eq!(json["dataType"], "Signed Integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleSpec {
    /// Full format name (e.g. `s16le`).
    pub name: String,
    /// Bits per sample.
    pub sample_size: u32,
    /// Sampling rate in Hz.
    pub sampling_rate: u32,
    /// Byte order.
    pub endianess: Endianness,
    /// Sample encoding.
    pub data_type: SampleDataType,
    /// Number of channels.
    pub channel_count: u32,
}

/// An actual/configured latency pair, in the source's own units.
///
/// # Examples
///
/// ```
/// use pactl_report_core::Latency;
///
/// let latency = Latency { actual: 0, configured: 25 };
/// assert_eq!(serde_json::to_value(&latency).unwrap()["configured"], 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Latency {
    pub actual: u64,
    pub configured: u64,
}
