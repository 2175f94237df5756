// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

use crate::model::ThemeId;
use crate::render::MarkdownStyles;

const fn rgb(value: u32) -> Color {
    Color::Rgb(
        ((value >> 16) & 0xff) as u8,
        ((value >> 8) & 0xff) as u8,
        (value & 0xff) as u8,
    )
}

/// Concrete colors for one theme. Built fresh from the decoded [`ThemeId`]
/// every frame, so an unrecognized persisted theme silently renders as the
/// default without being rewritten in storage.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemePalette {
    bg: Color,
    fg: Color,
    accent: Color,
    muted: Color,
    heading: Color,
    code: Color,
    link: Color,
}

impl ThemePalette {
    pub(crate) fn for_theme(theme: ThemeId) -> Self {
        match theme {
            ThemeId::Light => Self {
                bg: rgb(0xffffff),
                fg: rgb(0x1f2328),
                accent: rgb(0x0969da),
                muted: rgb(0x6e7781),
                heading: rgb(0x1f2328),
                code: rgb(0xcf222e),
                link: rgb(0x0969da),
            },
            ThemeId::Dark => Self {
                bg: rgb(0x0d1117),
                fg: rgb(0xc9d1d9),
                accent: rgb(0x58a6ff),
                muted: rgb(0x8b949e),
                heading: rgb(0xe6edf3),
                code: rgb(0xff7b72),
                link: rgb(0x58a6ff),
            },
            ThemeId::Github => Self {
                bg: rgb(0xf6f8fa),
                fg: rgb(0x24292f),
                accent: rgb(0x0969da),
                muted: rgb(0x57606a),
                heading: rgb(0x24292f),
                code: rgb(0x0550ae),
                link: rgb(0x0969da),
            },
            ThemeId::Dracula => Self {
                bg: rgb(0x282a36),
                fg: rgb(0xf8f8f2),
                accent: rgb(0xbd93f9),
                muted: rgb(0x6272a4),
                heading: rgb(0xff79c6),
                code: rgb(0x50fa7b),
                link: rgb(0x8be9fd),
            },
            ThemeId::SolarizedLight => Self {
                bg: rgb(0xfdf6e3),
                fg: rgb(0x657b83),
                accent: rgb(0x268bd2),
                muted: rgb(0x93a1a1),
                heading: rgb(0x586e75),
                code: rgb(0xcb4b16),
                link: rgb(0x268bd2),
            },
            ThemeId::SolarizedDark => Self {
                bg: rgb(0x002b36),
                fg: rgb(0x839496),
                accent: rgb(0x268bd2),
                muted: rgb(0x586e75),
                heading: rgb(0x93a1a1),
                code: rgb(0xcb4b16),
                link: rgb(0x268bd2),
            },
        }
    }

    pub(crate) fn base_style(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.accent)
        } else {
            self.base_style().fg(self.muted)
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style()
            .add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(self.muted)
    }

    pub(crate) fn accent_style(&self) -> Style {
        self.base_style().fg(self.accent)
    }

    pub(crate) fn toast_style(&self) -> Style {
        self.base_style()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub(crate) fn markdown_styles(&self) -> MarkdownStyles {
        MarkdownStyles {
            text: self.base_style(),
            heading: self.base_style().fg(self.heading),
            code: self.base_style().fg(self.code),
            code_block: self.base_style().fg(self.code),
            blockquote: self.base_style().fg(self.muted),
            list_marker: self.base_style().fg(self.accent),
            link: self.base_style().fg(self.link),
            rule: self.base_style().fg(self.muted),
        }
    }
}
