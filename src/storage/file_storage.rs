use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::error::StorageError;
use super::key;
use crate::model::{Model, ModelClass};

pub const DEFAULT_FILE_PATH: &str = "file.json";

/// Every live object, keyed by `<ClassName>.<id>`, mirrored to a single JSON file.
pub struct FileStorage {
    path: PathBuf,
    objects: BTreeMap<String, Model>,
    dirty: bool,
}

impl FileStorage {
    /// Empty store backed by `path`. Nothing is read until `reload`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStorage {
            path: path.into(),
            objects: BTreeMap::new(),
            dirty: false,
        }
    }

    /// Store backed by `path`, populated from the file if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let mut storage = FileStorage::new(path);
        storage.reload()?;
        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The live mapping.
    pub fn all(&self) -> &BTreeMap<String, Model> {
        &self.objects
    }

    /// The live mapping, for callers that add or drop entries directly.
    /// Changes made through it count as unsaved until the next `save`.
    pub fn all_mut(&mut self) -> &mut BTreeMap<String, Model> {
        self.dirty = true;
        &mut self.objects
    }

    /// Register an instance under its composite key without saving.
    pub fn add(&mut self, model: Model) {
        debug!(key = %model.key(), "registering object");
        self.objects.insert(model.key(), model);
        self.dirty = true;
    }

    pub fn get(&self, key: &str) -> Option<&Model> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Model> {
        let model = self.objects.get_mut(key);
        if model.is_some() {
            self.dirty = true;
        }
        model
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Drop an entry without saving.
    pub fn remove(&mut self, key: &str) -> Option<Model> {
        let removed = self.objects.remove(key);
        if removed.is_some() {
            self.dirty = true;
        }
        removed
    }

    /// Refresh the instance's update time, register it and save everything.
    pub fn persist(&mut self, mut model: Model) -> Result<(), StorageError> {
        model.touch();
        self.add(model);
        self.save()
    }

    /// Instances whose key carries the given class prefix.
    pub fn all_of(&self, class: ModelClass) -> Vec<&Model> {
        self.objects
            .iter()
            .filter(|(key, _)| key::class_name(key) == class.name())
            .map(|(_, model)| model)
            .collect()
    }

    pub fn count_of(&self, class: ModelClass) -> usize {
        self.objects
            .keys()
            .filter(|key| key::class_name(key) == class.name())
            .count()
    }

    /// Linear scan for instances of `class` whose attribute `attr` is the text `value`.
    pub fn search(&self, class: ModelClass, attr: &str, value: &str) -> Vec<&Model> {
        self.all_of(class)
            .into_iter()
            .filter(|model| model.attr_equals(attr, value))
            .collect()
    }

    /// Rewrite the backing file with every registered instance.
    pub fn save(&mut self) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(&self.objects)?;

        fs::write(&self.path, content).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.dirty = false;

        debug!(path = %self.path.display(), objects = self.objects.len(), "saved objects");
        Ok(())
    }

    /// Replace the in-memory mapping with the contents of the backing file.
    ///
    /// A missing, unreadable or unparsable file leaves the store empty. An
    /// entry that cannot be rebuilt is an error.
    pub fn reload(&mut self) -> Result<(), StorageError> {
        self.objects.clear();
        self.dirty = false;

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no storage file, starting empty");
                return Ok(());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read storage file, starting empty");
                return Ok(());
            }
        };

        let entries = match serde_json::from_str::<Map<String, Value>>(&content) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not parse storage file, starting empty");
                return Ok(());
            }
        };

        for (key, dict) in entries {
            let model = Model::restore(&dict).map_err(|source| StorageError::Entry {
                key: key.clone(),
                source,
            })?;
            if model.key() != key {
                return Err(StorageError::KeyMismatch {
                    key,
                    class: model.class().name().to_string(),
                });
            }
            self.objects.insert(key, model);
        }

        info!(path = %self.path.display(), objects = self.objects.len(), "loaded objects");
        Ok(())
    }

    /// Whether in-memory state differs from what was last saved or loaded.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Teardown: write out anything not yet saved.
    pub fn close(mut self) -> Result<(), StorageError> {
        if self.dirty {
            self.save()?;
        }
        Ok(())
    }
}
