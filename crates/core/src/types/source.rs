//! Media sources handed to the engine

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Kind of a media source, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    Empty,
    Invalid,
    LocalFile,
    Url,
    Disc,
    CaptureDevice,
    Stream,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Invalid => write!(f, "invalid"),
            Self::LocalFile => write!(f, "local file"),
            Self::Url => write!(f, "url"),
            Self::Disc => write!(f, "disc"),
            Self::CaptureDevice => write!(f, "capture device"),
            Self::Stream => write!(f, "stream"),
        }
    }
}

/// Reference to the media a playback object should play
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MediaSource {
    #[default]
    Empty,
    Invalid,
    LocalFile(PathBuf),
    Url(String),
    /// Optical disc, identified by its device node
    Disc(String),
    /// Camera or microphone, identified by the engine's device id
    CaptureDevice(String),
    /// Application-provided byte stream
    Stream,
}

impl MediaSource {
    /// Parses a path or URL as given on a command line or in a playlist
    ///
    /// `file://` URLs become local files with their path decoded; anything
    /// else with a scheme becomes a URL; bare strings are treated as paths.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::invalid_source(input, "empty input"));
        }
        if !trimmed.contains("://") {
            return Ok(Self::LocalFile(PathBuf::from(trimmed)));
        }

        let url = Url::parse(trimmed)
            .map_err(|e| CoreError::invalid_source(input, format!("malformed URL: {}", e)))?;

        if url.scheme() != "file" {
            return Ok(Self::Url(url.into()));
        }
        if url.path().is_empty() || url.path() == "/" {
            return Err(CoreError::invalid_source(input, "file URL without a path"));
        }
        url.to_file_path()
            .map(Self::LocalFile)
            .map_err(|()| CoreError::invalid_source(input, "file URL on a remote host"))
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Empty => SourceKind::Empty,
            Self::Invalid => SourceKind::Invalid,
            Self::LocalFile(_) => SourceKind::LocalFile,
            Self::Url(_) => SourceKind::Url,
            Self::Disc(_) => SourceKind::Disc,
            Self::CaptureDevice(_) => SourceKind::CaptureDevice,
            Self::Stream => SourceKind::Stream,
        }
    }

    /// Returns true for the kinds the engine can open directly
    pub fn is_playable(&self) -> bool {
        matches!(self, Self::LocalFile(_) | Self::Url(_))
    }

    /// Returns the local filesystem path, if this source has one
    ///
    /// A `file://` URL on the local host also counts, with escapes decoded.
    pub fn local_path(&self) -> Option<PathBuf> {
        match self {
            Self::LocalFile(path) => Some(path.clone()),
            Self::Url(url) => Url::parse(url)
                .ok()
                .filter(|url| url.scheme() == "file")
                .and_then(|url| url.to_file_path().ok()),
            _ => None,
        }
    }

    /// Returns the source as a URL string for engines that take URLs
    ///
    /// Relative local paths have no file URL and give `None`.
    pub fn url(&self) -> Option<String> {
        match self {
            Self::LocalFile(path) => Url::from_file_path(path).ok().map(String::from),
            Self::Url(url) => Some(url.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LocalFile(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{}", url),
            Self::Disc(device) => write!(f, "disc:{}", device),
            Self::CaptureDevice(device) => write!(f, "capture:{}", device),
            other => write!(f, "<{}>", other.kind()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_path() {
        let source = MediaSource::parse("/music/book.m4b").unwrap();
        assert_eq!(source, MediaSource::LocalFile(PathBuf::from("/music/book.m4b")));
        assert_eq!(source.kind(), SourceKind::LocalFile);
    }

    #[test]
    fn test_parse_file_url() {
        let source = MediaSource::parse("file:///tmp/a.mkv").unwrap();
        assert_eq!(source, MediaSource::LocalFile(PathBuf::from("/tmp/a.mkv")));
    }

    #[test]
    fn test_file_url_escapes_are_decoded() {
        let source = MediaSource::parse("file:///tmp/My%20Book.m4b").unwrap();
        assert_eq!(source.local_path(), Some(PathBuf::from("/tmp/My Book.m4b")));

        let raw = MediaSource::Url("file:///tmp/Chapter%231.mp3".to_string());
        assert_eq!(raw.local_path(), Some(PathBuf::from("/tmp/Chapter#1.mp3")));
    }

    #[test]
    fn test_file_url_on_localhost() {
        let source = MediaSource::parse("file://localhost/tmp/a.mkv").unwrap();
        assert_eq!(source.local_path(), Some(PathBuf::from("/tmp/a.mkv")));
    }

    #[test]
    fn test_file_url_on_remote_host_is_rejected() {
        assert!(MediaSource::parse("file://fileserver/share/a.mkv").is_err());
    }

    #[test]
    fn test_parse_remote_url() {
        let source = MediaSource::parse("https://example.com/stream.ogg").unwrap();
        assert_eq!(source.kind(), SourceKind::Url);
        assert!(source.local_path().is_none());
        assert!(source.is_playable());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(MediaSource::parse("").is_err());
        assert!(MediaSource::parse("   ").is_err());
        assert!(MediaSource::parse("file://").is_err());
        assert!(MediaSource::parse("ht tp://x").is_err());
        assert!(MediaSource::parse("http://").is_err());
    }

    #[test]
    fn test_url_for_local_file() {
        let source = MediaSource::LocalFile(PathBuf::from("/a/b.mp3"));
        assert_eq!(source.url().as_deref(), Some("file:///a/b.mp3"));
    }

    #[test]
    fn test_url_escapes_reserved_characters() {
        let source = MediaSource::LocalFile(PathBuf::from("/a b#1.mp3"));
        assert_eq!(source.url().as_deref(), Some("file:///a%20b%231.mp3"));

        let back = MediaSource::parse(&source.url().unwrap()).unwrap();
        assert_eq!(back, source);
    }

    #[test]
    fn test_relative_path_has_no_url() {
        assert!(MediaSource::LocalFile(PathBuf::from("book.m4b")).url().is_none());
    }

    #[test]
    fn test_unplayable_kinds() {
        assert!(!MediaSource::Empty.is_playable());
        assert!(!MediaSource::Disc("/dev/sr0".into()).is_playable());
        assert!(!MediaSource::Stream.is_playable());
        assert!(MediaSource::Stream.url().is_none());
    }
}
