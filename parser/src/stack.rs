//! Indent stack management.
//!
//! The parser's only state is a stack of frames, one per open nesting
//! level, with the root mapping always at the bottom. Each frame owns
//! the mapping (or sequence) it is populating together with the key it
//! will occupy in its parent; popping a frame folds it into the parent
//! mapping. Deferring the parent insert to pop time is safe because a
//! frame is always popped before any sibling key can be added, so
//! first-appearance key order is preserved.

use pactl_report_core::Report;
use serde_json::Value;
use tracing::warn;

struct Frame {
    /// Key in the parent mapping; `None` only for the root frame.
    key: Option<String>,
    value: Value,
}

pub(crate) struct IndentStack {
    frames: Vec<Frame>,
}

impl IndentStack {
    pub(crate) fn new() -> Self {
        Self {
            frames: vec![Frame {
                key: None,
                value: Value::Object(Report::new()),
            }],
        }
    }

    /// Opens a nested block: `value` becomes the active frame and will
    /// land in the current frame under `key` once popped.
    pub(crate) fn push(&mut self, key: &str, value: Value) {
        self.frames.push(Frame {
            key: Some(key.to_string()),
            value,
        });
    }

    /// Pops frames until the stack height equals `target`. The root
    /// frame is never popped.
    pub(crate) fn pop_to(&mut self, target: usize) {
        while self.frames.len() > target && self.frames.len() > 1 {
            self.pop();
        }
    }

    /// Stores a decoded leaf value in the active frame.
    pub(crate) fn insert(&mut self, key: &str, value: Value) {
        let top = self
            .frames
            .last_mut()
            .expect("indent stack always holds the root frame");
        match &mut top.value {
            Value::Object(map) => {
                map.insert(key.to_string(), value);
            }
            _ => {
                // A key/value line nested under a sequence block has no
                // slot to land in; the original format never produces
                // one, so the value is dropped.
                warn!(key, "dropping key/value line nested under a sequence");
            }
        }
    }

    /// Folds every open frame into its parent and returns the root.
    pub(crate) fn finish(mut self) -> Report {
        self.pop_to(1);
        let root = self.frames.pop().expect("root frame present");
        match root.value {
            Value::Object(map) => map,
            _ => unreachable!("root frame is always a mapping"),
        }
    }

    fn pop(&mut self) {
        let frame = self.frames.pop().expect("pop_to never empties the stack");
        let key = frame.key.expect("non-root frames always carry a key");
        let parent = self
            .frames
            .last_mut()
            .expect("root frame below every popped frame");
        match &mut parent.value {
            Value::Object(map) => {
                map.insert(key, frame.value);
            }
            _ => {
                warn!(key, "dropping block nested under a sequence");
            }
        }
    }
}
