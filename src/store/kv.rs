// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Notemark-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Notemark and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Key/value persistence on a flat notes folder.
//!
//! One JSON file per key. Reads are forgiving so a missing or corrupted file
//! degrades to the caller's fallback; writes are atomic via a temp file and
//! rename, and their errors surface to the caller.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::model::{Document, DocumentId, IdError, Notebook};

pub const THEME_KEY: &str = "theme";
pub const SETTINGS_KEY: &str = "settings";
pub const DOCUMENTS_KEY: &str = "documents";
pub const ACTIVE_DOCUMENT_KEY: &str = "active-document-id";

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidKey {
        key: String,
    },
    SymlinkRefused {
        path: PathBuf,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidKey { key } => write!(f, "invalid store key {key:?}"),
            Self::SymlinkRefused { path } => {
                write!(f, "refusing to write through symlink at {path:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidKey { .. } => None,
            Self::SymlinkRefused { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to stable
    /// storage where possible. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

#[derive(Debug, Clone)]
pub struct KvStore {
    root: PathBuf,
    durability: WriteDurability,
}

impl KvStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }

    /// Reads and decodes one key. A missing file is `Ok(None)`; a present but
    /// undecodable file is an error so callers can decide how loud to be.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.key_path(key)?;
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(source) if source.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        let value = serde_json::from_str(&raw).map_err(|source| StoreError::Json {
            path,
            source,
        })?;
        Ok(Some(value))
    }

    /// Reads one key, swallowing absence and corruption alike. Startup goes
    /// through here so a damaged notes folder still yields a working app.
    pub fn read_or<T: DeserializeOwned>(&self, key: &str, fallback: impl FnOnce() -> T) -> T {
        match self.read(key) {
            Ok(Some(value)) => value,
            Ok(None) | Err(_) => fallback(),
        }
    }

    /// Encodes and writes one key atomically.
    pub fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let path = self.key_path(key)?;
        let mut contents =
            serde_json::to_vec_pretty(value).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;
        contents.push(b'\n');
        write_atomic(&self.root, &path, &contents, self.durability)
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey {
            key: key.to_owned(),
        })
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(
    root: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    fs::create_dir_all(root).map_err(|source| StoreError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    match fs::symlink_metadata(path) {
        Ok(md) if md.file_type().is_symlink() => {
            return Err(StoreError::SymlinkRefused {
                path: path.to_path_buf(),
            });
        }
        Ok(_) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = root.join(format!(
        ".notemark.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(root).map_err(|source| StoreError::Io {
                path: root.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: root.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

/// The persisted shape of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentJson {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl DocumentJson {
    pub fn from_document(document: &Document) -> Self {
        Self {
            id: document.document_id().as_str().to_owned(),
            name: document.name().to_owned(),
            content: document.content().to_owned(),
        }
    }

    pub fn into_document(self) -> Result<Document, IdError> {
        let id = DocumentId::new(self.id)?;
        Ok(Document::new(id, self.name, self.content))
    }
}

/// Loads the notebook from the `documents` and `active-document-id` keys.
/// Undecodable entries are dropped; reconciliation fills the gaps.
pub fn load_notebook(store: &KvStore) -> Notebook {
    let stored: Vec<DocumentJson> = store.read_or(DOCUMENTS_KEY, Vec::new);
    let documents = stored
        .into_iter()
        .filter_map(|entry| entry.into_document().ok())
        .collect();
    let active_id = store
        .read_or::<Option<String>>(ACTIVE_DOCUMENT_KEY, || None)
        .and_then(|raw| DocumentId::new(raw).ok());
    Notebook::from_parts(documents, active_id)
}

/// Persists both notebook keys. The notebook is always reconciled, so the
/// active id is present.
pub fn save_notebook(store: &KvStore, notebook: &Notebook) -> Result<(), StoreError> {
    let documents: Vec<DocumentJson> = notebook
        .documents()
        .iter()
        .map(DocumentJson::from_document)
        .collect();
    store.write(DOCUMENTS_KEY, &documents)?;
    let active = notebook.active_id().map(|id| id.as_str().to_owned());
    store.write(ACTIVE_DOCUMENT_KEY, &active)
}
