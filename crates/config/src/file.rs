//! Reading and writing config.toml
//!
//! Writes go to a temp file in the same directory which then replaces
//! config.toml, so a crash never leaves a half-written file. The file being
//! replaced is kept as `config.toml.backup`.

use crate::{Config, ConfigError, ConfigResult};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const HEADER: &str = "# mediabridge configuration\n\
# Values can be overridden with MEDIABRIDGE_<SECTION>_<FIELD> variables.\n\n";

/// Reads config.toml; a missing file is `None`
pub(crate) fn read(path: &Path) -> ConfigResult<Option<Config>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    if text.trim().is_empty() {
        return Err(ConfigError::Empty {
            path: path.to_path_buf(),
        });
    }

    toml::from_str(&text)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Replaces config.toml with `config`, keeping the previous file as a backup
pub(crate) fn write(path: &Path, config: &Config) -> ConfigResult<()> {
    let text = format!("{}{}", HEADER, toml::to_string_pretty(config)?);
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let write_error = |source: io::Error| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    fs::create_dir_all(dir).map_err(write_error)?;

    let mut staged = NamedTempFile::new_in(dir).map_err(write_error)?;
    staged
        .write_all(text.as_bytes())
        .and_then(|()| staged.as_file().sync_all())
        .map_err(write_error)?;

    if path.exists() {
        let backup = backup_path(path);
        fs::copy(path, &backup).map_err(write_error)?;
        log::debug!("Kept previous config as {}", backup.display());
    }

    staged.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

pub(crate) fn backup_path(path: &Path) -> PathBuf {
    path.with_extension("toml.backup")
}
