// Copyright 2025 the Sprig Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prefix search driven by recent keystrokes.
//!
//! Keystrokes accumulate in a buffer that is cleared after a period without
//! input. Rather than owning a timer, [`Typeahead`] is given the event
//! timestamp of every keystroke: a keystroke arriving after the deadline starts
//! a fresh buffer. Hosts that want the buffer cleared eagerly (for example, to
//! render it) can schedule a callback at [`Typeahead::deadline`] and call
//! [`Typeahead::expire`].

use alloc::string::String;

use crate::MenuOption;

/// Default idle time after which the buffer is cleared, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 800;

/// Keystroke buffer with an idle timeout.
#[derive(Clone, Debug)]
pub struct Typeahead {
    buffer: String,
    last_input: Option<u64>,
    timeout_ms: u64,
}

impl Default for Typeahead {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT_MS)
    }
}

impl Typeahead {
    /// Creates an empty buffer cleared after `timeout_ms` without input.
    #[must_use]
    pub const fn new(timeout_ms: u64) -> Self {
        Self {
            buffer: String::new(),
            last_input: None,
            timeout_ms,
        }
    }

    /// Appends a keystroke made at `now_ms` and returns the whole buffer.
    ///
    /// Each keystroke restarts the idle timeout.
    pub fn push(&mut self, c: char, now_ms: u64) -> &str {
        self.expire(now_ms);
        self.buffer.push(c);
        self.last_input = Some(now_ms);
        &self.buffer
    }

    /// The time at which the buffer will be considered idle, if it holds anything.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.last_input
            .map(|last| last.saturating_add(self.timeout_ms))
    }

    /// Clears the buffer if it has been idle at `now_ms`. Returns `true` if it was cleared.
    pub fn expire(&mut self, now_ms: u64) -> bool {
        match self.deadline() {
            Some(deadline) if now_ms >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// Clears the buffer immediately.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.last_input = None;
    }

    /// The keystrokes accumulated so far.
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

/// Index of the first enabled option whose text starts with `query`, ignoring case.
#[must_use]
pub fn find_prefix(options: &[MenuOption], query: &str) -> Option<usize> {
    options
        .iter()
        .position(|option| !option.disabled && starts_with_ignore_case(option.text(), query))
}

fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| text.next() == Some(p))
}
