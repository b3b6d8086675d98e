//! User settings (`~/.config/datkit/settings.toml`).
//!
//! The file is optional. Today it only carries filters that every `filter`
//! invocation starts from:
//!
//! ```toml
//! [filter]
//! default = ["rom.status!=nodump", "machine.runnable!=no"]
//! ```

use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/datkit/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("datkit").join("settings.toml")
}

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Settings {
    /// Filter expressions applied before the ones given on the command line.
    pub default_filters: Vec<String>,
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// A missing file yields the defaults. A file that does not parse is
    /// reported and also yields the defaults.
    pub(crate) fn load(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                log::warn!("could not read {}: {e}", path.display());
                return Self::default();
            }
        };

        match Self::parse(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("ignoring {}: {e}", path.display());
                Self::default()
            }
        }
    }

    fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        let doc: toml::Value = contents.parse()?;

        let default_filters = doc
            .get("filter")
            .and_then(|filter| filter.get("default"))
            .and_then(|default| default.as_array())
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        let filter = entry.as_str();
                        if filter.is_none() {
                            log::warn!("ignoring non-string default filter: {entry}");
                        }
                        filter.map(str::to_string)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self { default_filters })
    }
}

/// Pretty-printed contents of the settings file, if it exists and parses.
pub(crate) fn load_settings_string(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
