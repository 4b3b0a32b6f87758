//! Engine metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata reported by the engine for the current source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    pub album: Option<String>,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub date: Option<String>,
    pub genre: Option<String>,
    pub track_number: Option<String>,
    pub description: Option<String>,
    pub copyright: Option<String>,
    pub url: Option<String>,
}

impl MetaData {
    /// Converts to the upper-case tag map handed to hosts
    ///
    /// Every key is present; missing values map to an empty string.
    pub fn to_tag_map(&self) -> BTreeMap<String, String> {
        [
            ("ALBUM", &self.album),
            ("TITLE", &self.title),
            ("ARTIST", &self.artist),
            ("DATE", &self.date),
            ("GENRE", &self.genre),
            ("TRACKNUMBER", &self.track_number),
            ("DESCRIPTION", &self.description),
            ("COPYRIGHT", &self.copyright),
            ("URL", &self.url),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.clone().unwrap_or_default()))
        .collect()
    }
}
