// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::DocumentId;

pub const DEFAULT_DOCUMENT_NAME: &str = "Untitled.md";

/// A named unit of editable markdown text with a stable identity.
///
/// The id is assigned at creation and never changes; name and content are
/// mutable through the [`Notebook`](super::Notebook) operations. Names carry
/// no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    document_id: DocumentId,
    name: String,
    content: String,
}

impl Document {
    pub fn new(
        document_id: DocumentId,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            document_id,
            name: name.into(),
            content: content.into(),
        }
    }

    /// A fresh empty document with the default name and a newly generated id.
    pub fn untitled() -> Self {
        Self::new(DocumentId::generate(), DEFAULT_DOCUMENT_NAME, "")
    }

    pub fn document_id(&self) -> &DocumentId {
        &self.document_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }
}
