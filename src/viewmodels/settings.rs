// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! App settings: preference toggles plus the app-wide language and theme.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Notifications,
    DarkMode,
    Biometric,
    AutoSync,
}

pub const DEFAULT_LANGUAGE: &str = "en";
pub const BIOMETRIC_UNAVAILABLE: &str = "Biometric not available or not enrolled.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsViewModel {
    notifications: bool,
    biometric: bool,
    auto_sync: bool,
    language: String,
    /// None follows the system theme
    theme_override: Option<Theme>,
}

impl Default for SettingsViewModel {
    fn default() -> Self {
        Self {
            notifications: true,
            biometric: true,
            auto_sync: true,
            language: DEFAULT_LANGUAGE.to_string(),
            theme_override: None,
        }
    }
}

impl SettingsViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Notifications => self.notifications,
            Toggle::DarkMode => self.theme_override == Some(Theme::Dark),
            Toggle::Biometric => self.biometric,
            Toggle::AutoSync => self.auto_sync,
        }
    }

    /// Flip a switch and return its new value.
    ///
    /// The dark-mode switch pins the theme override; use
    /// [`clear_theme_override`](Self::clear_theme_override) to follow the
    /// system again. Turning biometric login on should go through
    /// [`set_biometric`](Self::set_biometric), which checks the hardware.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::Notifications => self.notifications = !self.notifications,
            Toggle::DarkMode => {
                let next = if self.is_enabled(Toggle::DarkMode) {
                    Theme::Light
                } else {
                    Theme::Dark
                };
                self.theme_override = Some(next);
            }
            Toggle::Biometric => self.biometric = !self.biometric,
            Toggle::AutoSync => self.auto_sync = !self.auto_sync,
        }
        self.is_enabled(toggle)
    }

    /// Enable or disable biometric login. Enabling needs enrolled hardware;
    /// without it the switch falls back to off.
    pub fn set_biometric(&mut self, enabled: bool, available: bool) -> Result<(), &'static str> {
        if enabled && !available {
            self.biometric = false;
            return Err(BIOMETRIC_UNAVAILABLE);
        }
        self.biometric = enabled;
        Ok(())
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Set the language code. Blank codes are ignored.
    pub fn set_language(&mut self, code: &str) -> bool {
        let code = code.trim();
        if code.is_empty() {
            return false;
        }
        self.language = code.to_ascii_lowercase();
        true
    }

    pub fn theme_override(&self) -> Option<Theme> {
        self.theme_override
    }

    pub fn set_theme_override(&mut self, theme: Option<Theme>) {
        self.theme_override = theme;
    }

    pub fn clear_theme_override(&mut self) {
        self.theme_override = None;
    }

    /// Theme to draw with, given what the system currently prefers.
    pub fn effective_theme(&self, system: Theme) -> Theme {
        self.theme_override.unwrap_or(system)
    }
}
