// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Light/dark display preference.
//!
//! Independent of search: this component resolves which mode a visitor sees
//! and what the toggle button should look like. Resolution order is a
//! stored preference, else the system preference, else light. Hosts must
//! apply the resolved mode before first paint or the page flashes the wrong
//! colors.

use tracing::debug;

/// Storage key the preference persists under.
pub const STORAGE_KEY: &str = "theme-preference";

/// The two-valued display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Light,
    Dark,
}

impl DisplayMode {
    /// Stored value, also written to the root `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayMode::Light => "light",
            DisplayMode::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything unrecognized counts as absent, so a
    /// corrupted storage entry falls back to the system preference.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(DisplayMode::Light),
            "dark" => Some(DisplayMode::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }
}

/// Persistence slot for the preference.
///
/// Implementations swallow their own failures: blocked or full storage
/// costs persistence across visits, never the current page's mode.
pub trait ModeStore {
    fn load(&self) -> Option<DisplayMode>;
    fn store(&self, mode: DisplayMode);
}

/// In-memory slot for tests and native hosts.
#[derive(Debug, Default)]
pub struct MemoryModeStore(std::cell::Cell<Option<DisplayMode>>);

impl ModeStore for MemoryModeStore {
    fn load(&self) -> Option<DisplayMode> {
        self.0.get()
    }

    fn store(&self, mode: DisplayMode) {
        self.0.set(Some(mode));
    }
}

/// Resolution order: stored value, else system preference, else light.
pub fn resolve_mode(stored: Option<DisplayMode>, system_prefers_dark: bool) -> DisplayMode {
    stored.unwrap_or(if system_prefers_dark {
        DisplayMode::Dark
    } else {
        DisplayMode::Light
    })
}

/// Everything a host needs to paint one mode.
///
/// Icon and label describe the ACTION the button performs (switching away),
/// not the current mode: dark pages show the sun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedTheme {
    pub data_theme: &'static str,
    pub icon: &'static str,
    pub aria_label: &'static str,
}

/// The toggle component: current mode plus persistence on change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeToggle {
    mode: DisplayMode,
}

impl ThemeToggle {
    /// Resolve the initial mode from the store and the system preference.
    pub fn init(store: &dyn ModeStore, system_prefers_dark: bool) -> Self {
        Self {
            mode: resolve_mode(store.load(), system_prefers_dark),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn applied(&self) -> AppliedTheme {
        match self.mode {
            DisplayMode::Dark => AppliedTheme {
                data_theme: "dark",
                icon: "☀️",
                aria_label: "Switch to light theme",
            },
            DisplayMode::Light => AppliedTheme {
                data_theme: "light",
                icon: "🌙",
                aria_label: "Switch to dark theme",
            },
        }
    }

    /// Set and persist. The returned description is what the host paints.
    pub fn set(&mut self, mode: DisplayMode, store: &dyn ModeStore) -> AppliedTheme {
        self.mode = mode;
        store.store(mode);
        debug!(mode = mode.as_str(), "display mode set");
        self.applied()
    }

    pub fn toggle(&mut self, store: &dyn ModeStore) -> AppliedTheme {
        self.set(self.mode.toggled(), store)
    }
}
