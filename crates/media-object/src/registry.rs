//! Process-wide registry of track descriptions
//!
//! Hosts see audio channels and subtitles through a single id space shared
//! by every media object. The registry hands out those global ids, remembers
//! which object and engine-local index each one stands for, and refuses to
//! translate an id for an object that does not own it.
//!
//! Ids come from one increasing counter and are never reused, so a stale id
//! held by a host after a listing refresh resolves to nothing rather than to
//! a different track.

use mediabridge_core::{CoreError, GlobalTrackId, ObjectId, TrackDescription, TrackKind};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    entries: BTreeMap<GlobalTrackId, TrackDescription>,
}

/// Shared handle to the registry; clones refer to the same entries
#[derive(Debug, Clone, Default)]
pub struct TrackRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl TrackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        // Entries stay consistent across a panicking holder; every update is a single map operation.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a track and returns its fresh global id
    pub fn add(
        &self,
        owner: ObjectId,
        local_index: usize,
        name: impl Into<String>,
        description: impl Into<String>,
        kind: TrackKind,
    ) -> GlobalTrackId {
        let mut inner = self.lock();
        let global_id = GlobalTrackId::new(inner.next_id);
        inner.next_id += 1;

        let entry = TrackDescription {
            owner,
            local_index,
            global_id,
            name: name.into(),
            description: description.into(),
            kind,
        };
        log::debug!(
            "Registered {} track {} '{}' for {}",
            kind,
            global_id,
            entry.name,
            owner
        );
        inner.entries.insert(global_id, entry);
        global_id
    }

    /// Drops every entry of one kind belonging to `owner`
    pub fn clear_list_for(&self, owner: ObjectId, kind: TrackKind) {
        self.lock()
            .entries
            .retain(|_, entry| !(entry.owner == owner && entry.kind == kind));
    }

    /// Drops every entry belonging to `owner`
    pub fn purge_owner(&self, owner: ObjectId) {
        self.lock().entries.retain(|_, entry| entry.owner != owner);
    }

    /// Translates a global id into the owner's engine-local index
    ///
    /// Returns `None` for unknown ids and for ids owned by another object.
    pub fn local_id_for(&self, owner: ObjectId, global_id: GlobalTrackId) -> Option<usize> {
        self.lock()
            .entries
            .get(&global_id)
            .filter(|entry| entry.owner == owner)
            .map(|entry| entry.local_index)
    }

    /// Like [`local_id_for`](Self::local_id_for), but says why it failed
    /// and also checks the kind
    pub fn resolve(
        &self,
        owner: ObjectId,
        global_id: GlobalTrackId,
        kind: TrackKind,
    ) -> Result<usize, CoreError> {
        let inner = self.lock();
        match inner.entries.get(&global_id) {
            Some(entry) if entry.owner != owner => Err(CoreError::ForeignTrack { owner, global_id }),
            Some(entry) if entry.kind == kind => Ok(entry.local_index),
            _ => Err(CoreError::UnknownTrack { global_id }),
        }
    }

    /// Finds the description registered for an owner's engine-local index
    pub fn description_for(
        &self,
        owner: ObjectId,
        local_index: usize,
        kind: TrackKind,
    ) -> Option<TrackDescription> {
        self.lock()
            .entries
            .values()
            .find(|entry| {
                entry.owner == owner && entry.kind == kind && entry.local_index == local_index
            })
            .cloned()
    }

    /// Lists one owner's tracks of a kind, in registration order
    pub fn list_for(&self, owner: ObjectId, kind: TrackKind) -> Vec<TrackDescription> {
        self.lock()
            .entries
            .values()
            .filter(|entry| entry.owner == owner && entry.kind == kind)
            .cloned()
            .collect()
    }

    /// Lists every live global id of a kind, across all owners
    pub fn global_indexes(&self, kind: TrackKind) -> Vec<GlobalTrackId> {
        self.lock()
            .entries
            .values()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.global_id)
            .collect()
    }

    pub fn from_index(&self, global_id: GlobalTrackId) -> Option<TrackDescription> {
        self.lock().entries.get(&global_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }
}
