// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seed and demo content.

use super::document::Document;
use super::ids::DocumentId;
use super::notebook::Notebook;

const WELCOME_CONTENT: &str = "\
# Welcome to Notemark

- Create new notes from the sidebar (`n`).
- Toggle **reading mode** with `Ctrl+P` to focus on the preview.
- Open settings with `Ctrl+T` to switch themes and typography.
- Drag the divider between the panes to resize them.

Enjoy minimal reading.
";

/// The document seeded on first run and resynthesized whenever the notebook
/// would otherwise run empty. Each call mints a fresh id.
pub fn welcome_document() -> Document {
    Document::new(DocumentId::generate(), "Welcome.md", WELCOME_CONTENT)
}

/// An in-memory notebook with sample notes, used by `--demo`.
pub fn demo_notebook() -> Notebook {
    let cheatsheet = Document::new(
        DocumentId::generate(),
        "Cheatsheet.md",
        "\
# Markdown cheatsheet

## Emphasis

*italic*, **bold**, `inline code`.

## Lists

- first
- second
  1. nested ordered
  2. items

## Quote

> Block quotes render with a gutter.

## Code

```
fn main() {
    println!(\"hello\");
}
```

---

[Links](https://example.com) are underlined.
",
    );
    let scratch = Document::new(
        DocumentId::generate(),
        "Scratch.md",
        "Plain text is fine too.\n",
    );
    Notebook::from_parts(vec![welcome_document(), cheatsheet, scratch], None)
}

#[cfg(test)]
mod tests {
    use super::{demo_notebook, welcome_document};

    #[test]
    fn welcome_documents_mint_fresh_ids() {
        assert_ne!(
            welcome_document().document_id(),
            welcome_document().document_id()
        );
    }

    #[test]
    fn demo_notebook_is_reconciled() {
        let notebook = demo_notebook();
        assert_eq!(notebook.len(), 3);
        let active = notebook.active_id().expect("active id");
        assert_eq!(active, notebook.documents()[0].document_id());
    }
}
