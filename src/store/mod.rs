// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistence for the notes folder.

pub mod kv;

pub use kv::{
    load_notebook, save_notebook, DocumentJson, KvStore, StoreError, WriteDurability,
    ACTIVE_DOCUMENT_KEY, DOCUMENTS_KEY, SETTINGS_KEY, THEME_KEY,
};
