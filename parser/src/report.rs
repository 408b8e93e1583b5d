//! Single-pass report driver.
//!
//! Walks the raw text once, classifying each line, rebalancing the
//! indent stack, and dispatching leaf values to the decoders. Blank
//! lines are skipped. Indentation increases that skip levels are an
//! assumed well-formed-input precondition; only decreases rebalance
//! the stack.

use pactl_report_core::Report;
use serde_json::{Map, Value};
use tracing::debug;

use crate::classify::{LineKind, classify};
use crate::cursor::LineCursor;
use crate::decode::decode_value;
use crate::error::ParseError;
use crate::stack::IndentStack;

pub(crate) struct ReportParser<'a> {
    cursor: LineCursor<'a>,
    stack: IndentStack,
}

impl<'a> ReportParser<'a> {
    pub(crate) fn new(raw: &'a str) -> Self {
        Self {
            cursor: LineCursor::new(raw),
            stack: IndentStack::new(),
        }
    }

    pub(crate) fn parse(mut self) -> Result<Report, ParseError> {
        while let Some(line) = self.cursor.next() {
            let (indent, kind) = classify(line);
            if kind == LineKind::Blank {
                continue;
            }

            // Stack height is always nesting depth + 1 (root included).
            self.stack.pop_to(indent + 1);

            match kind {
                LineKind::Blank => unreachable!("blank lines are skipped above"),
                LineKind::BlockHeader { key } => self.open_block(key),
                LineKind::Leaf { key, value } => {
                    let decoded = match value {
                        None => Value::String(String::new()),
                        Some(raw_value) => decode_value(key, raw_value, &mut self.cursor)?,
                    };
                    match decoded {
                        // Mappings and sequences double as implicit
                        // sub-blocks: deeper lines populate them.
                        decoded @ (Value::Object(_) | Value::Array(_)) => {
                            self.stack.push(key, decoded);
                        }
                        decoded => self.stack.insert(key, decoded),
                    }
                }
            }
        }

        let report = self.stack.finish();
        debug!(top_level_keys = report.len(), "parsed report");
        Ok(report)
    }

    /// Opens a block for a header line. A following blank or literal
    /// `pcm` line becomes the block's single-element sequence value
    /// and is consumed; otherwise the block starts as an empty mapping.
    fn open_block(&mut self, key: &str) {
        let value = match self.cursor.peek() {
            None => Value::Array(vec![Value::Null]),
            Some(next) => {
                let trimmed = next.trim();
                if trimmed == "pcm" || trimmed.is_empty() {
                    self.cursor.advance();
                    Value::Array(vec![Value::String(trimmed.to_string())])
                } else {
                    Value::Object(Map::new())
                }
            }
        };
        self.stack.push(key, value);
    }
}
