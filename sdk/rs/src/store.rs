//! Local persistence for the handful of documents the CLI remembers between
//! invocations: the configuration, the current application and the current
//! group.
//!
//! The backing file is a single JSON object keyed by document kind. Every
//! write rewrites the whole file through a temporary sibling and an atomic
//! rename, so a crash mid-write leaves either the old or the new contents.
//! There is no locking: two CLI processes writing at the same time can lose
//! one of the updates (the last rename wins).

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

use crate::{config::get_store_filename, errors::StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Config,
    Application,
    Group,
}

impl DocumentKind {
    pub fn key(&self) -> &'static str {
        match self {
            DocumentKind::Config => "config",
            DocumentKind::Application => "application",
            DocumentKind::Group => "group",
        }
    }
}

/// A singleton document kept in the [`ConfigStore`].
pub trait Document: Serialize + DeserializeOwned {
    const KIND: DocumentKind;
}

/// Credentials and API location written by `esper configure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    pub host: String,
}

impl Document for ConfigDocument {
    const KIND: DocumentKind = DocumentKind::Config;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDocument {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Document for ApplicationDocument {
    const KIND: DocumentKind = DocumentKind::Application;
}

/// The group pinned with `esper group show --set`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentGroup {
    pub id: String,
}

impl Document for CurrentGroup {
    const KIND: DocumentKind = DocumentKind::Group;
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> ConfigStore {
        ConfigStore { path: path.into() }
    }

    /// Opens the store at `$ESPER_CONFIG_FILE` or `~/.config/esper/cli/db.json`.
    pub fn open_default() -> Result<ConfigStore, StoreError> {
        get_store_filename()
            .map(ConfigStore::new)
            .ok_or(StoreError::NoHomeDirectory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the document of kind `D` with `value`.
    pub fn set<D: Document>(&self, value: &D) -> Result<(), StoreError> {
        let encoded = serde_json::to_value(value).map_err(|err| self.corrupt(err))?;

        let mut documents = self.load()?;
        documents.insert(D::KIND.key().to_string(), encoded);
        self.persist(&documents)
    }

    pub fn get<D: Document>(&self) -> Result<Option<D>, StoreError> {
        let mut documents = self.load()?;
        match documents.remove(D::KIND.key()) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|err| StoreError::Corrupt {
                    path: self.path.clone(),
                    reason: format!("invalid {} document: {err}", D::KIND.key()),
                }),
        }
    }

    /// Removes the document of kind `D`. Unsetting an absent kind is a no-op.
    pub fn unset<D: Document>(&self) -> Result<(), StoreError> {
        let mut documents = self.load()?;
        if documents.remove(D::KIND.key()).is_none() {
            return Ok(());
        }
        self.persist(&documents)
    }

    pub fn get_enterprise_id(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .get::<ConfigDocument>()?
            .and_then(|config| config.enterprise_id))
    }

    fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(self.io(err)),
        };

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content).map_err(|err| self.corrupt(err))? {
            Value::Object(documents) => Ok(documents),
            other => Err(StoreError::Corrupt {
                path: self.path.clone(),
                reason: format!("expected a JSON object, found {other}"),
            }),
        }
    }

    fn persist(&self, documents: &Map<String, Value>) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|err| self.io(err))?;

        let mut file = NamedTempFile::new_in(&dir).map_err(|err| self.io(err))?;
        serde_json::to_writer_pretty(&mut file, documents).map_err(|err| self.corrupt(err))?;
        file.write_all(b"\n").map_err(|err| self.io(err))?;
        file.as_file().sync_all().map_err(|err| self.io(err))?;
        file.persist(&self.path).map_err(|err| self.io(err.error))?;

        Ok(())
    }

    fn io(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn corrupt(&self, err: serde_json::Error) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }
}
