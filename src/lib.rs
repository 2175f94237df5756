// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Notemark — terminal markdown note editor (split editor/preview + notes store).
//!
//! Single-crate layout: the document/preference model, the folder-backed key-value
//! store, the split-pane and scroll-sync engines, and the ratatui shell.

pub mod editor;
pub mod model;
pub mod render;
pub mod scroll;
pub mod split;
pub mod store;
pub mod tui;
pub mod ui;
