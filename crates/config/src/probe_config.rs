//! Chapter probe configuration section

use crate::validation::{ConfigSection, Validator};
use serde::{Deserialize, Serialize};

/// How the chapter probe runs relative to the loaded transition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMode {
    /// Run the probe inline; the loaded transition waits for it
    Blocking,
    /// Run the probe on a worker thread; the object stays loading until it reports
    Background,
}

impl std::fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeMode::Blocking => write!(f, "blocking"),
            ProbeMode::Background => write!(f, "background"),
        }
    }
}

/// External chapter probe settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProbeConfig {
    /// Probe local files for chapters at all
    pub enabled: bool,

    /// Executable name or path of the probe tool
    pub program: String,

    pub mode: ProbeMode,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            program: "ffprobe".to_string(),
            mode: ProbeMode::Blocking,
        }
    }
}

impl ConfigSection for ProbeConfig {
    const NAME: &'static str = "probe";

    fn check(&self, validator: &mut Validator) {
        // A disabled probe may keep a blank program
        if self.enabled {
            validator.not_blank("program", &self.program);
        }
    }
}
