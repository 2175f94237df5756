// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! User preferences: theme id plus the typed settings record.
//!
//! The stored theme is a plain string; it is decoded to [`ThemeId`] only at
//! the point of consumption, so an unrecognized persisted value degrades to
//! the default without ever being rewritten in storage.

use serde::{Deserialize, Serialize};

pub const FONT_SIZE_MIN: u8 = 12;
pub const FONT_SIZE_MAX: u8 = 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeId {
    #[default]
    Light,
    Dark,
    Github,
    Dracula,
    SolarizedLight,
    SolarizedDark,
}

impl ThemeId {
    pub const ALL: [ThemeId; 6] = [
        ThemeId::Light,
        ThemeId::Dark,
        ThemeId::Github,
        ThemeId::Dracula,
        ThemeId::SolarizedLight,
        ThemeId::SolarizedDark,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Github => "github",
            Self::Dracula => "dracula",
            Self::SolarizedLight => "solarized-light",
            Self::SolarizedDark => "solarized-dark",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Github => "GitHub",
            Self::Dracula => "Dracula",
            Self::SolarizedLight => "Solarized Light",
            Self::SolarizedDark => "Solarized Dark",
        }
    }

    /// Decodes a stored theme name, falling back to the default for anything
    /// unrecognized.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|theme| theme.name() == name)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "sans")]
    Sans,
    #[serde(rename = "serif")]
    Serif,
    #[serde(rename = "mono")]
    Mono,
}

impl FontFamily {
    pub const ALL: [FontFamily; 3] = [FontFamily::Sans, FontFamily::Serif, FontFamily::Mono];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sans => "Sans-Serif",
            Self::Serif => "Serif",
            Self::Mono => "Monospace",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Sans => Self::Serif,
            Self::Serif => Self::Mono,
            Self::Mono => Self::Sans,
        }
    }
}

/// Preview line spacing presets; serialized as the CSS-era line-height strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineHeight {
    #[serde(rename = "1.4")]
    Compact,
    #[default]
    #[serde(rename = "1.7")]
    Normal,
    #[serde(rename = "2.0")]
    Relaxed,
}

impl LineHeight {
    pub const ALL: [LineHeight; 3] = [
        LineHeight::Compact,
        LineHeight::Normal,
        LineHeight::Relaxed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Compact => "Compact",
            Self::Normal => "Normal",
            Self::Relaxed => "Relaxed",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Compact => Self::Normal,
            Self::Normal => Self::Relaxed,
            Self::Relaxed => Self::Compact,
        }
    }

    /// Blank lines inserted between preview blocks.
    pub fn block_gap(self) -> usize {
        match self {
            Self::Compact => 0,
            Self::Normal => 1,
            Self::Relaxed => 2,
        }
    }
}

/// The persisted settings record.
///
/// Field-level serde defaults keep a partially valid stored record loadable;
/// a fully malformed record falls back to `Settings::default()` at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_font_size")]
    pub font_size: u8,
    #[serde(default)]
    pub line_height: LineHeight,
    #[serde(default)]
    pub font_family: FontFamily,
    #[serde(default = "default_true")]
    pub auto_save: bool,
    #[serde(default = "default_true")]
    pub smooth_animations: bool,
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

fn default_font_size() -> u8 {
    16
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            line_height: LineHeight::default(),
            font_family: FontFamily::default(),
            auto_save: true,
            smooth_animations: true,
            show_footer: true,
        }
    }
}

/// A single-field settings update; `apply` merges exactly one key and leaves
/// every other field untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsUpdate {
    FontSize(u8),
    LineHeight(LineHeight),
    FontFamily(FontFamily),
    AutoSave(bool),
    SmoothAnimations(bool),
    ShowFooter(bool),
}

impl Settings {
    /// Merges one field. Range checks are the caller's job; the settings UI
    /// clamps font sizes to [`FONT_SIZE_MIN`]..=[`FONT_SIZE_MAX`] before
    /// issuing the update.
    pub fn apply(&mut self, update: SettingsUpdate) {
        match update {
            SettingsUpdate::FontSize(size) => self.font_size = size,
            SettingsUpdate::LineHeight(line_height) => self.line_height = line_height,
            SettingsUpdate::FontFamily(family) => self.font_family = family,
            SettingsUpdate::AutoSave(on) => self.auto_save = on,
            SettingsUpdate::SmoothAnimations(on) => self.smooth_animations = on,
            SettingsUpdate::ShowFooter(on) => self.show_footer = on,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{FontFamily, LineHeight, Settings, SettingsUpdate, ThemeId};

    #[rstest]
    #[case("light", ThemeId::Light)]
    #[case("dark", ThemeId::Dark)]
    #[case("github", ThemeId::Github)]
    #[case("dracula", ThemeId::Dracula)]
    #[case("solarized-light", ThemeId::SolarizedLight)]
    #[case("solarized-dark", ThemeId::SolarizedDark)]
    fn theme_names_round_trip(#[case] name: &str, #[case] expected: ThemeId) {
        assert_eq!(ThemeId::from_name(name), expected);
        assert_eq!(expected.name(), name);
    }

    #[test]
    fn unrecognized_theme_name_falls_back_to_light() {
        assert_eq!(ThemeId::from_name("sepia"), ThemeId::Light);
        assert_eq!(ThemeId::from_name(""), ThemeId::Light);
    }

    #[test]
    fn settings_serialize_with_stored_field_names() {
        let json = serde_json::to_value(Settings::default()).expect("serialize settings");
        assert_eq!(json["fontSize"], 16);
        assert_eq!(json["lineHeight"], "1.7");
        assert_eq!(json["fontFamily"], "sans");
        assert_eq!(json["autoSave"], true);
        assert_eq!(json["smoothAnimations"], true);
        assert_eq!(json["showFooter"], true);
    }

    #[test]
    fn settings_load_with_missing_fields_defaulted() {
        let settings: Settings =
            serde_json::from_str(r#"{"fontSize":20,"fontFamily":"mono"}"#).expect("deserialize");
        assert_eq!(settings.font_size, 20);
        assert_eq!(settings.font_family, FontFamily::Mono);
        assert_eq!(settings.line_height, LineHeight::Normal);
        assert!(settings.auto_save);
        assert!(settings.show_footer);
    }

    #[test]
    fn apply_merges_a_single_field() {
        let mut settings = Settings::default();
        let before = settings;
        settings.apply(SettingsUpdate::FontSize(18));

        assert_eq!(settings.font_size, 18);
        assert_eq!(settings.line_height, before.line_height);
        assert_eq!(settings.font_family, before.font_family);
        assert_eq!(settings.auto_save, before.auto_save);
        assert_eq!(settings.smooth_animations, before.smooth_animations);
        assert_eq!(settings.show_footer, before.show_footer);
    }

    #[test]
    fn apply_toggles_do_not_cross_talk() {
        let mut settings = Settings::default();
        settings.apply(SettingsUpdate::ShowFooter(false));
        assert!(!settings.show_footer);
        assert!(settings.auto_save);
        assert!(settings.smooth_animations);
    }

    #[test]
    fn line_height_gap_widens_with_preset() {
        assert!(LineHeight::Compact.block_gap() < LineHeight::Normal.block_gap());
        assert!(LineHeight::Normal.block_gap() < LineHeight::Relaxed.block_gap());
    }
}
