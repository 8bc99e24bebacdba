//! Asset loading with embedded defaults
//!
//! Catalogs and the config file are compiled into the binary and can be
//! replaced from the filesystem:
//!
//! - `CONFIG_FILE` NOT set: use the embedded `config.yaml`
//! - `CONFIG_FILE` set but missing: fall back to the embedded `config.yaml`
//! - `CATALOG_DIR` NOT set: use the embedded catalogs from `data/`
//! - `CATALOG_DIR` set: read catalogs from that directory only. A missing file
//!   is an error, never a silent fallback, so a typo cannot serve stale data.

use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Embedded catalog records (importer output)
#[derive(RustEmbed)]
#[folder = "data/"]
#[include = "*.json"]
struct EmbeddedCatalogs;

/// Embedded default config
#[derive(RustEmbed)]
#[folder = "."]
#[include = "config.yaml"]
struct EmbeddedConfig;

/// Asset loader with optional filesystem override
pub struct AssetLoader {
    /// External catalog directory (from CATALOG_DIR env var)
    catalog_dir: Option<PathBuf>,
    /// External config file path (from CONFIG_FILE env var)
    config_file: Option<PathBuf>,
}

impl AssetLoader {
    /// Create a new asset loader
    ///
    /// Paths should be `Some` only if the corresponding env var was set.
    /// If `None`, embedded assets are used exclusively.
    pub fn new(catalog_dir: Option<PathBuf>, config_file: Option<PathBuf>) -> Self {
        Self {
            catalog_dir,
            config_file,
        }
    }

    /// Loader configured from `CATALOG_DIR` and `CONFIG_FILE`.
    pub fn from_env() -> Self {
        Self::new(
            std::env::var("CATALOG_DIR").ok().map(PathBuf::from),
            std::env::var("CONFIG_FILE").ok().map(PathBuf::from),
        )
    }

    pub fn catalog_dir(&self) -> Option<&Path> {
        self.catalog_dir.as_deref()
    }

    pub fn config_file(&self) -> Option<&Path> {
        self.config_file.as_deref()
    }

    /// Read one catalog file by name, e.g. `ral.json`.
    pub fn read_catalog(&self, file_name: &str) -> io::Result<Cow<'static, [u8]>> {
        if let Some(ref dir) = self.catalog_dir {
            let full_path = dir.join(file_name);
            tracing::trace!(path = %full_path.display(), "Loading catalog from filesystem");
            return fs::read(&full_path).map(Cow::Owned).map_err(|e| {
                io::Error::new(e.kind(), format!("{}: {e}", full_path.display()))
            });
        }

        EmbeddedCatalogs::get(file_name)
            .map(|f| {
                tracing::trace!(file = file_name, "Loading catalog from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("Embedded catalog not found: {file_name}"),
                )
            })
    }

    /// Human-readable origin of a catalog file, for logs and the status command.
    pub fn catalog_source(&self, file_name: &str) -> String {
        match self.catalog_dir {
            Some(ref dir) => dir.join(file_name).display().to_string(),
            None => format!("embedded:{file_name}"),
        }
    }

    /// Read config file
    pub fn read_config(&self) -> io::Result<Cow<'static, [u8]>> {
        // Try external first
        if let Some(ref path) = self.config_file {
            if path.exists() {
                tracing::trace!(path = %path.display(), "Loading config from filesystem");
                return Ok(Cow::Owned(fs::read(path)?));
            }
        }

        // Fall back to embedded
        EmbeddedConfig::get("config.yaml")
            .map(|f| {
                tracing::trace!("Loading config from embedded assets");
                f.data
            })
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Embedded config.yaml not found")
            })
    }

    /// Read config as a UTF-8 string
    pub fn read_config_string(&self) -> io::Result<String> {
        let bytes = self.read_config()?;
        String::from_utf8(bytes.into_owned())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// List catalog files available from the active source
    pub fn list_catalogs(&self) -> Vec<String> {
        match self.catalog_dir {
            Some(ref dir) => {
                let mut files = BTreeSet::new();
                if let Ok(entries) = fs::read_dir(dir) {
                    for entry in entries.flatten() {
                        if let Some(name) = entry.file_name().to_str() {
                            if name.ends_with(".json") {
                                files.insert(name.to_string());
                            }
                        }
                    }
                }
                files.into_iter().collect()
            }
            None => Self::list_embedded_catalogs(),
        }
    }

    /// List the catalogs compiled into the binary
    pub fn list_embedded_catalogs() -> Vec<String> {
        let mut files: Vec<String> = EmbeddedCatalogs::iter().map(|s| s.to_string()).collect();
        files.sort();
        files
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_catalogs_present() {
        let catalogs = AssetLoader::list_embedded_catalogs();
        for name in ["names.json", "ncs.json", "pantone.json", "ral.json"] {
            assert!(catalogs.contains(&name.to_string()), "missing {name}");
        }
        assert!(AssetLoader::new(None, None).read_config().is_ok());
    }

    #[test]
    fn test_read_embedded_catalog() {
        let loader = AssetLoader::new(None, None);
        let bytes = loader.read_catalog("ral.json").unwrap();
        assert!(bytes.starts_with(b"["));
        assert_eq!(loader.catalog_source("ral.json"), "embedded:ral.json");
    }

    #[test]
    fn test_catalog_dir_is_strict() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ral.json"), "[]").unwrap();
        let loader = AssetLoader::new(Some(dir.path().to_path_buf()), None);

        assert_eq!(&*loader.read_catalog("ral.json").unwrap(), b"[]");
        // present in the embedded set, but not in the directory
        let err = loader.read_catalog("names.json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("names.json"));

        assert_eq!(loader.list_catalogs(), vec!["ral.json".to_string()]);
    }

    #[test]
    fn test_missing_config_file_falls_back_to_embedded() {
        let loader = AssetLoader::new(None, Some(PathBuf::from("/nonexistent/config.yaml")));
        let content = loader.read_config_string().unwrap();
        assert!(content.contains("catalogs:"));
    }

    #[test]
    fn test_external_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "report:\n  names_per_report: 9\n").unwrap();

        let loader = AssetLoader::new(None, Some(path));
        assert!(loader.read_config_string().unwrap().contains("9"));
    }
}
