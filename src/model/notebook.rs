// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::document::Document;
use super::fixtures::welcome_document;
use super::ids::DocumentId;

/// The ordered document collection plus the active selection.
///
/// Every mutating operation ends with [`Notebook::reconcile`], so callers
/// always observe a collection where a non-empty notebook has exactly one
/// active id and that id references a present document. An empty notebook is
/// never observable after a mutation; a fresh welcome document is synthesized
/// in its place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notebook {
    documents: Vec<Document>,
    active_id: Option<DocumentId>,
}

impl Notebook {
    /// Builds a notebook from persisted parts and reconciles it immediately.
    pub fn from_parts(documents: Vec<Document>, active_id: Option<DocumentId>) -> Self {
        let mut notebook = Self {
            documents,
            active_id,
        };
        notebook.reconcile();
        notebook
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn active_id(&self) -> Option<&DocumentId> {
        self.active_id.as_ref()
    }

    pub fn active_document(&self) -> Option<&Document> {
        let active_id = self.active_id.as_ref()?;
        self.documents
            .iter()
            .find(|doc| doc.document_id() == active_id)
    }

    pub fn document(&self, document_id: &DocumentId) -> Option<&Document> {
        self.documents
            .iter()
            .find(|doc| doc.document_id() == document_id)
    }

    pub fn contains(&self, document_id: &DocumentId) -> bool {
        self.document(document_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Appends a fresh untitled document, makes it active and returns its id.
    pub fn create_document(&mut self) -> DocumentId {
        let doc = Document::untitled();
        let document_id = doc.document_id().clone();
        self.documents.push(doc);
        self.active_id = Some(document_id.clone());
        self.reconcile();
        document_id
    }

    /// Removes the document with the given id; a missing id is a no-op.
    ///
    /// If the removed document was active the selection is cleared and
    /// reconciliation assigns the first remaining document (or synthesizes a
    /// welcome document when the notebook ran empty).
    pub fn delete_document(&mut self, document_id: &DocumentId) {
        self.documents.retain(|doc| doc.document_id() != document_id);
        if self.active_id.as_ref() == Some(document_id) {
            self.active_id = None;
        }
        self.reconcile();
    }

    /// Replaces the name of the matching document; a missing id is a no-op.
    ///
    /// No trimming or emptiness validation happens here; the sidebar rejects
    /// empty names before calling.
    pub fn rename_document(&mut self, document_id: &DocumentId, name: impl Into<String>) {
        if let Some(doc) = self
            .documents
            .iter_mut()
            .find(|doc| doc.document_id() == document_id)
        {
            doc.set_name(name);
        }
        self.reconcile();
    }

    /// Replaces the active document's content; a no-op without an active document.
    pub fn update_active_content(&mut self, content: impl Into<String>) {
        let Some(active_id) = self.active_id.clone() else {
            return;
        };
        if let Some(doc) = self
            .documents
            .iter_mut()
            .find(|doc| doc.document_id() == &active_id)
        {
            doc.set_content(content);
        }
        self.reconcile();
    }

    /// Sets the active selection unconditionally, even to an unknown id;
    /// reconciliation corrects an invalid assignment.
    pub fn select_document(&mut self, document_id: DocumentId) {
        self.active_id = Some(document_id);
        self.reconcile();
    }

    /// Restores the selection invariants. Idempotent; the order of the checks
    /// matters:
    ///
    /// 1. empty collection → synthesize a welcome document and select it;
    /// 2. active id set but not present → select the first document;
    /// 3. active id unset → select the first document.
    ///
    /// Returns whether anything changed.
    pub fn reconcile(&mut self) -> bool {
        if self.documents.is_empty() {
            let doc = welcome_document();
            self.active_id = Some(doc.document_id().clone());
            self.documents.push(doc);
            return true;
        }

        match self.active_id.as_ref() {
            Some(active_id) if !self.contains(active_id) => {
                self.active_id = self
                    .documents
                    .first()
                    .map(|doc| doc.document_id().clone());
                true
            }
            None => {
                self.active_id = self
                    .documents
                    .first()
                    .map(|doc| doc.document_id().clone());
                true
            }
            Some(_) => false,
        }
    }
}

impl Default for Notebook {
    /// First-run notebook: one welcome document, active.
    fn default() -> Self {
        Self::from_parts(vec![welcome_document()], None)
    }
}
