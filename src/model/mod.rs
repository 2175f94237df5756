// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The in-memory model: documents, the notebook collection and preferences.

pub mod document;
pub mod fixtures;
pub mod ids;
pub mod notebook;
pub mod prefs;

pub use document::{Document, DEFAULT_DOCUMENT_NAME};
pub use ids::{DocumentId, Id, IdError};
pub use notebook::Notebook;
pub use prefs::{
    FontFamily, LineHeight, Settings, SettingsUpdate, ThemeId, FONT_SIZE_MAX, FONT_SIZE_MIN,
};
