//! External key-value data store, read side
//!
//! The rest of the application maintains three JSON documents in a store
//! directory, one per key. This module only reads them: the report view takes
//! a one-time snapshot at activation and never writes back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::{Atividade, Construtora, Obra};

/// Store keys, matching the names used by the writing side.
pub const KEY_ATIVIDADES: &str = "atividades";
pub const KEY_CONSTRUTORAS: &str = "construtoras";
pub const KEY_OBRAS: &str = "obras";

/// Handle to the on-disk key-value store.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    /// Open the store at the platform default location.
    pub fn new() -> Result<Self> {
        Ok(Self::open(default_store_dir()?))
    }

    /// Open the store rooted at a specific directory.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Read one named collection.
    ///
    /// A missing or malformed document loads as the empty collection;
    /// well-formedness is the writing side's contract, so nothing is
    /// surfaced beyond a warning.
    pub fn collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let path = self.root.join(format!("{key}.json"));
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(err) => {
                log::warn!(
                    "ignoring malformed collection {key:?} at {}: {err}",
                    path.display()
                );
                Vec::new()
            }
        }
    }
}

/// Immutable snapshot of the three collections, loaded once per activation.
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub atividades: Vec<Atividade>,
    pub construtoras: Vec<Construtora>,
    pub obras: Vec<Obra>,
}

impl ReportData {
    pub fn load(store: &DataStore) -> Self {
        Self {
            atividades: store.collection(KEY_ATIVIDADES),
            construtoras: store.collection(KEY_CONSTRUTORAS),
            obras: store.collection(KEY_OBRAS),
        }
    }
}

fn default_store_dir() -> Result<PathBuf> {
    directories::ProjectDirs::from("br", "cdlocacoes", "cdloc")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| Error::config("não foi possível determinar o diretório de dados"))
}
