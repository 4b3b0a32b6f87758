//! Chapter discovery through an external probe tool
//!
//! The default prober runs an ffprobe-compatible program as
//! `<program> -i <file> -show_chapters -print_format json` and reads the
//! `chapters[].start_time` / `end_time` fields (seconds) from its output.
//!
//! Probing can run inline or on a [`ProbeWorker`] thread. Worker results
//! carry the generation of the source they were started for, so the media
//! object can drop results that arrive after the source changed.

use crate::error::{MediaError, MediaResult};
use crossbeam_channel::{unbounded, Receiver, Sender};
use mediabridge_config::ProbeConfig;
use mediabridge_core::Chapter;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Something that can list the chapters of a local media file
pub trait ChapterProbe: Send + Sync {
    /// Probes a file, reporting why no chapter list could be produced
    fn try_probe(&self, path: &Path) -> MediaResult<Vec<Chapter>>;

    /// Probes a file; any failure yields an empty list
    fn probe(&self, path: &Path) -> Vec<Chapter> {
        match self.try_probe(path) {
            Ok(chapters) => chapters,
            Err(e) => {
                log::debug!("No chapters for {}: {}", path.display(), e);
                Vec::new()
            }
        }
    }
}

/// Runs an external ffprobe-compatible tool
#[derive(Debug, Clone)]
pub struct ChapterProber {
    program: PathBuf,
}

impl ChapterProber {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(config: &ProbeConfig) -> Self {
        Self::new(&config.program)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, path: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-i")
            .arg(path)
            .args(["-show_chapters", "-print_format", "json"])
            .stdin(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Default for ChapterProber {
    fn default() -> Self {
        Self::new("ffprobe")
    }
}

impl ChapterProbe for ChapterProber {
    fn try_probe(&self, path: &Path) -> MediaResult<Vec<Chapter>> {
        log::debug!("Probing chapters of {}", path.display());
        let output = self
            .command(path)
            .output()
            .map_err(|source| MediaError::ProbeSpawn {
                program: self.program.display().to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(MediaError::ProbeExit(output.status));
        }

        parse_chapters(&String::from_utf8_lossy(&output.stdout))
    }
}

/// Parses probe JSON into chapters, in document order
///
/// Times may be JSON strings (as ffprobe prints them) or numbers. A time
/// that cannot be read counts as 0. A `chapters` value that is not an array
/// yields an empty list; a missing key is an error.
pub fn parse_chapters(json: &str) -> MediaResult<Vec<Chapter>> {
    let document: Value = serde_json::from_str(json)?;
    let entries = document.get("chapters").ok_or(MediaError::NoChapters)?;

    let chapters = entries
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .map(|entry| {
                    Chapter::from_seconds(
                        seconds_field(entry, "start_time"),
                        seconds_field(entry, "end_time"),
                    )
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(chapters)
}

fn seconds_field(entry: &Value, key: &str) -> f64 {
    match entry.get(key) {
        Some(Value::String(text)) => text.trim().parse().unwrap_or(0.0),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Result of a background probe
#[derive(Debug)]
pub struct ProbeOutcome {
    /// Source generation the probe was started for
    pub generation: u64,
    pub result: MediaResult<Vec<Chapter>>,
}

/// Runs probes on short-lived threads and collects their outcomes
#[derive(Debug)]
pub struct ProbeWorker {
    outcome_tx: Sender<ProbeOutcome>,
    outcome_rx: Receiver<ProbeOutcome>,
}

impl ProbeWorker {
    pub fn new() -> Self {
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            outcome_tx,
            outcome_rx,
        }
    }

    /// Starts probing `path` on a new thread
    pub fn spawn(
        &self,
        prober: Arc<dyn ChapterProbe>,
        path: PathBuf,
        generation: u64,
    ) -> MediaResult<()> {
        let outcome_tx = self.outcome_tx.clone();
        thread::Builder::new()
            .name("chapter-probe".to_string())
            .spawn(move || {
                let result = prober.try_probe(&path);
                // The owning object may be gone by now.
                let _ = outcome_tx.send(ProbeOutcome { generation, result });
            })
            .map_err(MediaError::Worker)?;
        Ok(())
    }

    /// Returns a finished outcome without blocking
    pub fn try_recv(&self) -> Option<ProbeOutcome> {
        self.outcome_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for a finished outcome
    pub fn recv_timeout(&self, timeout: Duration) -> Option<ProbeOutcome> {
        self.outcome_rx.recv_timeout(timeout).ok()
    }
}

impl Default for ProbeWorker {
    fn default() -> Self {
        Self::new()
    }
}
