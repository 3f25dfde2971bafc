//! Persisted preset collections.

use std::fmt;

use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{Preset, Presets};
use crate::error::StorageError;
use crate::storage::StorageBackend;

/// Handle returned by [`PresetStorage::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresetSubscription(u64);

type Subscriber<T> = Box<dyn FnMut(&Presets<T>)>;

/// A preset collection stored as JSON under one key.
///
/// Every mutation notifies subscribers, then writes the whole collection back.
pub struct PresetStorage<T, B> {
    key: String,
    backend: B,
    presets: Presets<T>,
    subscribers: Vec<(PresetSubscription, Subscriber<T>)>,
    next_id: u64,
}

impl<T, B> fmt::Debug for PresetStorage<T, B>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetStorage")
            .field("key", &self.key)
            .field("presets", &self.presets)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T, B> PresetStorage<T, B>
where
    T: Serialize + DeserializeOwned,
    B: StorageBackend,
{
    /// Loads the collection stored under `key`.
    ///
    /// Missing or malformed content gives an empty collection.
    pub fn load(key: impl Into<String>, backend: B) -> Self {
        let key = key.into();
        let presets = match backend.get(&key) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(presets) => presets,
                Err(e) => {
                    warn!("discarding malformed presets under {key:?}: {e}");
                    Presets::new()
                }
            },
            Ok(None) => Presets::new(),
            Err(e) => {
                warn!("failed to read presets under {key:?}: {e}");
                Presets::new()
            }
        };
        debug!("loaded {} presets from {key:?}", presets.len());
        Self {
            key,
            backend,
            presets,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn presets(&self) -> &Presets<T> {
        &self.presets
    }

    pub fn get(&self, id: &str) -> Option<&Preset<T>> {
        self.presets.get(id)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Registers a callback. It runs once right away with the current presets.
    pub fn subscribe(&mut self, callback: impl FnMut(&Presets<T>) + 'static) -> PresetSubscription {
        let mut callback: Subscriber<T> = Box::new(callback);
        callback(&self.presets);
        let id = PresetSubscription(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, callback));
        id
    }

    /// Removes a callback. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: PresetSubscription) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Replaces the whole collection.
    pub fn set(&mut self, presets: Presets<T>) -> Result<(), StorageError> {
        self.presets = presets;
        self.commit()
    }

    /// Inserts a preset, replacing one with the same id.
    pub fn add(&mut self, preset: Preset<T>) -> Result<(), StorageError> {
        self.presets.insert(preset.id.clone(), preset);
        self.commit()
    }

    /// Edits the preset with `id`. Returns `Ok(false)` if there is none.
    pub fn update(&mut self, id: &str, f: impl FnOnce(&mut Preset<T>)) -> Result<bool, StorageError> {
        let Some(preset) = self.presets.get_mut(id) else {
            return Ok(false);
        };
        f(preset);
        self.commit()?;
        Ok(true)
    }

    /// Deletes the preset with `id`. Returns `Ok(false)` if there is none.
    pub fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        if self.presets.remove(id).is_none() {
            return Ok(false);
        }
        self.commit()?;
        Ok(true)
    }

    fn commit(&mut self) -> Result<(), StorageError> {
        for (_, callback) in self.subscribers.iter_mut() {
            callback(&self.presets);
        }
        let json = serde_json::to_string(&self.presets).map_err(StorageError::Encode)?;
        self.backend.set(&self.key, &json)
    }
}
