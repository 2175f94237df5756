// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Preview rendering: markdown layout plus the per-frame cache.

pub mod markdown;

pub use markdown::{render_markdown, MarkdownStyles};

use ratatui::text::Line;

use crate::model::ThemeId;

/// Everything that invalidates rendered preview lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewKey {
    /// Content revision; bumped by the shell on every edit.
    pub rev: u64,
    pub width: u16,
    pub block_gap: usize,
    pub theme: ThemeId,
}

/// Caches the wrapped preview so unchanged frames skip the markdown parse.
#[derive(Debug, Default)]
pub struct PreviewCache {
    key: Option<PreviewKey>,
    lines: Vec<Line<'static>>,
}

impl PreviewCache {
    /// Returns the wrapped lines for `content`, re-rendering only when the
    /// key differs from the cached one.
    pub fn lines(
        &mut self,
        key: PreviewKey,
        content: &str,
        styles: &MarkdownStyles,
    ) -> &[Line<'static>] {
        if self.key != Some(key) {
            self.lines = render_markdown(content, key.width, key.block_gap, styles);
            self.key = Some(key);
        }
        &self.lines
    }
}
