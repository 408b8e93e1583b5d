//! Value decoder dispatch.
//!
//! Given a trimmed key and the raw value substring of a leaf line,
//! picks the decoder that applies. Rules are checked in priority
//! order and the first match wins; value shapes no rule recognizes
//! fall through to the plain string/number branch, since the report
//! format has no exhaustive grammar to validate against.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::cursor::LineCursor;
use crate::error::ParseError;
use crate::info::{coerce_scalar, info_segments, parse_info};
use crate::shapes::{decode_format, decode_latency, decode_sample_spec, decode_volume};

static PATTERNS: LazyLock<DispatchPatterns> = LazyLock::new(DispatchPatterns::new);

struct DispatchPatterns {
    // Surrounding double quotes on a raw value
    quoted: Regex,
    // Optional trailing parenthetical annotation
    annotation: Regex,
    // All-caps flag word lists such as HARDWARE HW_MUTE_CTRL
    caps_words: Regex,
}

impl DispatchPatterns {
    fn new() -> Self {
        Self {
            quoted: Regex::new(r#"^"(.*)"$"#).expect("static regex must compile"),
            annotation: Regex::new(r"^(.*?)(?:\s*\(([^)]*)\))?\s*$")
                .expect("static regex must compile"),
            caps_words: Regex::new(r"^[A-Z_ ]+$").expect("static regex must compile"),
        }
    }
}

/// Body lines of a verbatim block carry at least this indentation.
const VERBATIM_BODY_INDENT: &str = "            ";
/// Re-indentation removes this prefix from every body line.
const VERBATIM_STRIP_PREFIX: &str = "        ";

/// Decodes the value substring of one leaf line.
///
/// `cursor` is positioned just past the leaf line; decoders with
/// multi-line shapes (verbatim argument bodies, trailing `balance`
/// lines) consume their extra lines through it.
pub(crate) fn decode_value(
    key: &str,
    raw_value: &str,
    cursor: &mut LineCursor<'_>,
) -> Result<Value, ParseError> {
    // Rule 1: bracketed script body, preserved verbatim.
    if key == "Argument" && raw_value == "{" {
        return Ok(Value::String(consume_verbatim_block(cursor)));
    }

    let unquoted = match PATTERNS.quoted.captures(raw_value) {
        Some(caps) => caps.get(1).map_or(raw_value, |m| m.as_str()),
        None => raw_value,
    };

    let (head, info_payload) = split_annotation(unquoted);

    // Rule 2: nothing left once the annotation is stripped.
    if head.is_empty() {
        return Ok(Value::String(String::new()));
    }

    // Rule 3: annotated value. `Server Name` embeds its parenthetical
    // as part of the value proper and is kept literally.
    if let Some(payload) = info_payload {
        if key == "Server Name" {
            return Ok(Value::String(unquoted.to_string()));
        }
        let mut annotated = Map::new();
        annotated.insert("name".to_string(), Value::String(head.to_string()));
        annotated.insert("info".to_string(), Value::Object(parse_info(payload)));
        return Ok(Value::Object(annotated));
    }

    // Rule 4: comma list with no colon anywhere.
    if head.contains(',') && !head.contains(':') {
        return Ok(match key {
            "Latency" => to_json(&decode_latency(head)?),
            "Format" => Value::Object(decode_format(head)),
            // Free text whose commas are not list separators.
            "module.description" => Value::String(head.to_string()),
            _ => comma_list(head),
        });
    }

    // Rule 5: per-channel volume list of `channel: <triple>` entries.
    // A mono device prints a single entry with no comma, so the key
    // decides, not the separator.
    if key.ends_with("Volume") && head.contains(": ") {
        return decode_channel_volumes(head, cursor);
    }
    if head.contains(", ") && head.contains(": ") {
        return Ok(Value::Object(Map::new()));
    }

    // Rule 6: `", "`-separated list with no `": "` pair syntax; bare
    // colons inside entries are fine.
    if head.contains(", ") && !head.contains(": ") {
        if key == "Part of profile(s)" {
            return Ok(comma_list(head));
        }
        return Ok(Value::String(head.to_string()));
    }

    // Rule 7: all-caps flag word list.
    if PATTERNS.caps_words.is_match(head) && key.contains("Flags") {
        let flags = head
            .split_whitespace()
            .map(|flag| Value::String(flag.to_string()))
            .collect();
        return Ok(Value::Array(flags));
    }

    // Rule 8: key-suffix dispatch, then plain scalar.
    if key.ends_with("Sample Specification") {
        return Ok(to_json(&decode_sample_spec(head)?));
    }
    if key.ends_with("Volume") {
        return Ok(to_json(&decode_volume(head)?));
    }
    Ok(coerce_scalar(head))
}

/// Splits a trailing `(…)` annotation off a value. Returns the
/// trimmed head and, when a non-empty annotation is present, its
/// trimmed payload.
fn split_annotation(value: &str) -> (&str, Option<&str>) {
    match PATTERNS.annotation.captures(value) {
        Some(caps) => {
            let head = caps.get(1).map_or("", |m| m.as_str().trim());
            let payload = caps
                .get(2)
                .map(|m| m.as_str().trim())
                .filter(|payload| !payload.is_empty());
            (head, payload)
        }
        None => (value.trim(), None),
    }
}

fn comma_list(value: &str) -> Value {
    Value::Array(
        value
            .split(',')
            .map(|entry| Value::String(entry.trim().to_string()))
            .collect(),
    )
}

/// Decodes a `channel: <volume triple>` list, attaching a `balance`
/// entry when the following line carries one.
fn decode_channel_volumes(
    head: &str,
    cursor: &mut LineCursor<'_>,
) -> Result<Value, ParseError> {
    let mut channels = Map::new();
    for (channel, volume) in info_segments(head) {
        let volume = decode_volume(volume.unwrap_or_default())?;
        channels.insert(channel.to_string(), to_json(&volume));
    }

    let mut out = Map::new();
    out.insert("channels".to_string(), Value::Object(channels));

    if let Some(next) = cursor.peek() {
        if let Some(rest) = next.trim().strip_prefix("balance ") {
            let token = rest.split(' ').next().unwrap_or_default();
            out.insert("balance".to_string(), Value::String(token.to_string()));
            cursor.advance();
        }
    }

    Ok(Value::Object(out))
}

/// Collects a verbatim `{ … }` body: lines indented at least twelve
/// columns, re-indented by stripping eight leading spaces. The closing
/// line is consumed without being emitted; end-of-input simply ends
/// the block.
fn consume_verbatim_block(cursor: &mut LineCursor<'_>) -> String {
    let mut body = String::new();
    while let Some(line) = cursor.peek() {
        if !line.starts_with(VERBATIM_BODY_INDENT) {
            break;
        }
        body.push_str(line.strip_prefix(VERBATIM_STRIP_PREFIX).unwrap_or(line));
        body.push('\n');
        cursor.advance();
    }
    cursor.advance();
    format!("{{\n{body}}}")
}

fn to_json<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("decoded shapes serialize to JSON")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(key: &str, raw_value: &str) -> Value {
        let mut cursor = LineCursor::new("");
        decode_value(key, raw_value, &mut cursor).unwrap()
    }

    #[test]
    fn test_plain_string_and_number_leaves() {
        assert_eq!(decode("State", "SUSPENDED"), json!("SUSPENDED"));
        assert_eq!(decode("Owner Module", "7"), json!(7));
        assert_eq!(decode("alsa.resolution_bits", "\"16\""), json!(16));
        assert_eq!(decode("device.api", "\"alsa\""), json!("alsa"));
        assert_eq!(decode("alsa.class", "\"24bit\""), json!("24bit"));
    }

    #[test]
    fn test_flag_list_requires_flags_key() {
        assert_eq!(
            decode("Flags", "HARDWARE HW_MUTE_CTRL"),
            json!(["HARDWARE", "HW_MUTE_CTRL"])
        );
        // Same shape under another key stays a plain string.
        assert_eq!(decode("State", "HARDWARE HW_MUTE_CTRL"), json!("HARDWARE HW_MUTE_CTRL"));
    }

    #[test]
    fn test_annotated_value_splits_name_and_info() {
        assert_eq!(
            decode("analog-output-speaker", "Speakers (type: Speaker, priority: 10000, availability unknown)"),
            json!({
                "name": "Speakers",
                "info": {"type": "Speaker", "priority": 10000, "available": "unknown"}
            })
        );
    }

    #[test]
    fn test_server_name_keeps_annotation_embedded() {
        assert_eq!(
            decode("Server Name", "pulseaudio (on PipeWire 0.3.58)"),
            json!("pulseaudio (on PipeWire 0.3.58)")
        );
    }

    #[test]
    fn test_empty_annotation_is_ignored() {
        assert_eq!(decode("Description", "Speakers ()"), json!("Speakers"));
    }

    #[test]
    fn test_empty_head_decodes_to_empty_string() {
        assert_eq!(decode("Description", "(only an annotation)"), json!(""));
    }

    #[test]
    fn test_comma_list_without_colon() {
        assert_eq!(
            decode("Channel Map", "front-left,front-right"),
            json!(["front-left", "front-right"])
        );
    }

    #[test]
    fn test_latency_key_extracts_integer_pair() {
        assert_eq!(
            decode("Latency", "13 usec, configured 25 usec"),
            json!({"actual": 13, "configured": 25})
        );
    }

    #[test]
    fn test_module_description_keeps_free_text_commas() {
        assert_eq!(
            decode("module.description", "\"When a device is idle, suspend it\""),
            json!("When a device is idle, suspend it")
        );
    }

    #[test]
    fn test_profile_membership_splits_on_commas() {
        assert_eq!(
            decode(
                "Part of profile(s)",
                "output:analog-stereo, output:analog-stereo+input:analog-stereo"
            ),
            json!(["output:analog-stereo", "output:analog-stereo+input:analog-stereo"])
        );
    }

    #[test]
    fn test_comma_colon_mixture_under_other_keys_is_an_empty_block() {
        assert_eq!(
            decode("Something", "a: 1, b: 2 extra"),
            json!({})
        );
    }

    #[test]
    fn test_channel_volumes_with_balance_line() {
        let mut cursor = LineCursor::new("\t        balance 0.00\n\tBase Volume: 256 / 100% / 0.00 dB");
        let value = decode_value(
            "Volume",
            "front-left: 65536 / 100% / 0.00 dB,   front-right: 32768 / 50% / -18.06 dB",
            &mut cursor,
        )
        .unwrap();
        assert_eq!(
            value,
            json!({
                "channels": {
                    "front-left": {"raw": 65536, "percent": 100, "decibels": 0.0},
                    "front-right": {"raw": 32768, "percent": 50, "decibels": -18.06},
                },
                "balance": "0.00",
            })
        );
        // The balance line was consumed; the next line was not.
        assert_eq!(cursor.peek(), Some("\tBase Volume: 256 / 100% / 0.00 dB"));
    }

    #[test]
    fn test_channel_volumes_without_balance_line() {
        let mut cursor = LineCursor::new("\tBase Volume: 256 / 100% / 0.00 dB");
        let value = decode_value("Volume", "mono: 0 / 0% / -inf dB", &mut cursor).unwrap();
        assert_eq!(
            value,
            json!({"channels": {"mono": {"raw": 0, "percent": 0, "decibels": "-inf"}}})
        );
        assert_eq!(cursor.peek(), Some("\tBase Volume: 256 / 100% / 0.00 dB"));
    }

    #[test]
    fn test_sample_specification_suffix_dispatch() {
        assert_eq!(
            decode("Default Sample Specification", "s16le 2ch 44100Hz"),
            json!({
                "name": "s16le",
                "sampleSize": 16,
                "samplingRate": 44100,
                "endianess": "Little",
                "dataType": "Signed Integer",
                "channelCount": 2,
            })
        );
    }

    #[test]
    fn test_single_volume_suffix_dispatch() {
        assert_eq!(
            decode("Base Volume", "65536 / 100% / 0.00 dB"),
            json!({"raw": 65536, "percent": 100, "decibels": 0.0})
        );
    }

    #[test]
    fn test_verbatim_argument_block() {
        let mut cursor = LineCursor::new(
            "            use_master_format=1\n            aec_method=webrtc\n        }\n\tUsage counter: 0",
        );
        let value = decode_value("Argument", "{", &mut cursor).unwrap();
        assert_eq!(
            value,
            json!("{\n    use_master_format=1\n    aec_method=webrtc\n}")
        );
        assert_eq!(cursor.peek(), Some("\tUsage counter: 0"));
    }

    #[test]
    fn test_verbatim_block_ends_at_end_of_input() {
        let mut cursor = LineCursor::new("            only_line=1");
        let value = decode_value("Argument", "{", &mut cursor).unwrap();
        assert_eq!(value, json!("{\n    only_line=1\n}"));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn test_sample_spec_error_propagates() {
        let mut cursor = LineCursor::new("");
        let err = decode_value("Sample Specification", "broken", &mut cursor).unwrap_err();
        assert!(matches!(err, ParseError::SampleSpecMismatch(_)));
    }
}
