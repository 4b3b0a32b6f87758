//! Backend entry point: owns the shared track registry and creates media objects

use crate::engine::Engine;
use crate::media_object::MediaObject;
use crate::registry::TrackRegistry;
use mediabridge_config::Config;
use mediabridge_core::{CoreError, GlobalTrackId, TrackKind};
use std::collections::BTreeMap;

/// One per process; every media object it creates shares its registry
pub struct Backend {
    config: Config,
    registry: TrackRegistry,
}

impl Backend {
    pub fn new(config: Config) -> Self {
        log::info!("Media backend initialized");
        Self {
            config,
            registry: TrackRegistry::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &TrackRegistry {
        &self.registry
    }

    pub fn create_media_object<E: Engine>(&self, engine: E) -> MediaObject<E> {
        MediaObject::with_config(engine, self.registry.clone(), &self.config)
    }

    /// Global ids of every live track description of a kind
    pub fn object_description_indexes(&self, kind: TrackKind) -> Vec<GlobalTrackId> {
        self.registry.global_indexes(kind)
    }

    /// Name and description of a track description, keyed by property name
    pub fn object_description_properties(
        &self,
        kind: TrackKind,
        global_id: GlobalTrackId,
    ) -> Result<BTreeMap<&'static str, String>, CoreError> {
        let entry = self
            .registry
            .from_index(global_id)
            .filter(|entry| entry.kind == kind)
            .ok_or(CoreError::UnknownTrack { global_id })?;

        Ok(BTreeMap::from([
            ("name", entry.name),
            ("description", entry.description),
        ]))
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Drop for Backend {
    fn drop(&mut self) {
        log::debug!(
            "Media backend shutting down with {} registered tracks",
            self.registry.len()
        );
    }
}
