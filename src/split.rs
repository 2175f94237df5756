// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Split-pane resize engine.
//!
//! Idle → Dragging → Idle. While dragging, the live ratio is applied to the
//! very next draw without waiting for a commit; releasing the pointer folds
//! the live value into the committed one. The engine knows nothing about
//! reading mode; the shell forces 0/100 widths there and reads the committed
//! ratio again when split mode returns.

use ratatui::layout::Rect;

/// Both panes always keep at least this share of the container.
pub const MIN_RATIO: f64 = 20.0;
pub const MAX_RATIO: f64 = 80.0;
pub const DEFAULT_RATIO: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SplitPane {
    committed: f64,
    live: f64,
    dragging: bool,
}

impl Default for SplitPane {
    fn default() -> Self {
        Self {
            committed: DEFAULT_RATIO,
            live: DEFAULT_RATIO,
            dragging: false,
        }
    }
}

impl SplitPane {
    /// Last confirmed editor-width percentage.
    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// The in-flight percentage; equals the committed value outside a drag.
    pub fn live(&self) -> f64 {
        if self.dragging {
            self.live
        } else {
            self.committed
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Idle → Dragging. Returns `false` when a drag is already in progress.
    pub fn begin_drag(&mut self) -> bool {
        if self.dragging {
            return false;
        }
        self.dragging = true;
        self.live = self.committed;
        true
    }

    /// Updates the live ratio from a pointer column inside `container`.
    ///
    /// Ratios outside [`MIN_RATIO`], [`MAX_RATIO`] are ignored entirely, which
    /// keeps both panes usable. Returns the accepted live ratio, or `None`
    /// when the event changed nothing (not dragging, degenerate container, or
    /// out of bounds).
    pub fn drag_to(&mut self, pointer_col: u16, container: Rect) -> Option<f64> {
        if !self.dragging || container.width == 0 {
            return None;
        }
        let offset = f64::from(pointer_col.saturating_sub(container.x));
        let ratio = offset / f64::from(container.width) * 100.0;
        if !(MIN_RATIO..=MAX_RATIO).contains(&ratio) {
            return None;
        }
        self.live = ratio;
        Some(ratio)
    }

    /// Dragging → Idle. Commits the last accepted live ratio; a drag that
    /// never moved leaves the committed value unchanged. A pointer-up in Idle
    /// is a no-op, so stray release events are always safe to forward.
    pub fn end_drag(&mut self) -> f64 {
        if self.dragging {
            self.dragging = false;
            self.committed = self.live;
        }
        self.committed
    }
}

/// Splits a container into editor/divider/preview column widths for a given
/// editor percentage. The divider always gets one column; the editor width is
/// rounded from the ratio and the preview takes the rest.
pub fn split_columns(container: Rect, editor_ratio: f64) -> (u16, u16) {
    let usable = container.width.saturating_sub(1);
    let editor = (f64::from(usable) * editor_ratio / 100.0).round() as u16;
    let editor = editor.min(usable);
    (editor, usable - editor)
}
