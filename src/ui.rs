// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Shared view state for cross-component coordination.
//!
//! Tracks the presentation mode and a content revision the preview cache keys
//! on, independent of the document model itself.

/// How the two panes are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Editor and preview side by side at the committed split ratio.
    #[default]
    Split,
    /// Preview only; the editor collapses to zero width. The committed split
    /// ratio is untouched and applies again when split mode returns.
    Reading,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    rev: u64,
    mode: ViewMode,
    settings_open: bool,
}

impl ViewState {
    /// Content revision; bumped on every change that invalidates the preview.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    pub fn bump_rev(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            ViewMode::Split => ViewMode::Reading,
            ViewMode::Reading => ViewMode::Split,
        };
    }

    /// Creating a document drops back to split mode so the fresh note is
    /// immediately editable.
    pub fn exit_reading(&mut self) {
        self.mode = ViewMode::Split;
    }

    pub fn set_settings_open(&mut self, open: bool) {
        self.settings_open = open;
    }
}

#[cfg(test)]
mod tests {
    use super::{ViewMode, ViewState};

    #[test]
    fn toggles_between_split_and_reading() {
        let mut state = ViewState::default();
        assert_eq!(state.mode(), ViewMode::Split);
        state.toggle_mode();
        assert_eq!(state.mode(), ViewMode::Reading);
        state.toggle_mode();
        assert_eq!(state.mode(), ViewMode::Split);
    }

    #[test]
    fn exit_reading_is_idempotent() {
        let mut state = ViewState::default();
        state.toggle_mode();
        state.exit_reading();
        state.exit_reading();
        assert_eq!(state.mode(), ViewMode::Split);
    }

    #[test]
    fn rev_wraps_instead_of_panicking() {
        let mut state = ViewState::default();
        state.bump_rev();
        assert_eq!(state.rev(), 1);
    }
}
