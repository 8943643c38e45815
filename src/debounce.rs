// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke gating: the only suspension point in the widget.
//!
//! The controller never sleeps and owns no clock. A keystroke that clears
//! the length gate answers with a [`TimerRequest`]; the host arms its own
//! timer (a `setTimeout`, a test calling [`DebouncedInput::fire`] directly)
//! and calls back with the token when it fires. Tokens are generation
//! counters: every keystroke invalidates all earlier ones, so a stale timer
//! the host forgot to cancel is rejected here and last-keystroke-wins holds
//! regardless of host discipline.

use std::time::Duration;

use crate::types::{DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_LEN};

/// Identity of one scheduled dispatch. Never reused within a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken(u64);

/// What the host should arm after a keystroke: one timer for `delay`,
/// replacing any timer it armed before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub token: TimerToken,
    pub delay: Duration,
}

/// Immediate reaction to a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Below the minimum length: hide the panel, nothing is scheduled.
    Hide,
    /// Arm a timer and call [`DebouncedInput::fire`] with the token.
    Schedule(TimerRequest),
}

/// Debounce state between raw keystrokes and query dispatch.
#[derive(Debug)]
pub struct DebouncedInput {
    delay: Duration,
    min_len: usize,
    generation: u64,
    pending: Option<Pending>,
}

#[derive(Debug)]
struct Pending {
    value: String,
    token: TimerToken,
}

impl Default for DebouncedInput {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            DEFAULT_MIN_QUERY_LEN,
        )
    }
}

impl DebouncedInput {
    pub fn new(delay: Duration, min_len: usize) -> Self {
        Self {
            delay,
            min_len,
            generation: 0,
            pending: None,
        }
    }

    /// Record the input's current value after a keystroke.
    ///
    /// Always cancels the previous pending dispatch. Length is counted in
    /// characters, not bytes, so two-byte letters clear a two-char gate.
    pub fn keystroke(&mut self, value: &str) -> InputAction {
        self.pending = None;
        if value.chars().count() < self.min_len {
            return InputAction::Hide;
        }
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some(Pending {
            value: value.to_owned(),
            token,
        });
        InputAction::Schedule(TimerRequest {
            token,
            delay: self.delay,
        })
    }

    /// Host timer callback. Returns the query to dispatch, or `None` for a
    /// stale token (superseded by a later keystroke, or dismissed).
    pub fn fire(&mut self, token: TimerToken) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| p.token == token) {
            self.pending.take().map(|p| p.value)
        } else {
            None
        }
    }

    /// Escape or click-outside: back to idle, nothing will fire.
    pub fn dismiss(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
