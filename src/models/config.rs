use crate::assets::AssetLoader;
use color_core::CatalogKind;
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Catalog file names
    #[serde(default)]
    pub catalogs: CatalogFiles,

    /// Color report settings
    #[serde(default)]
    pub report: ReportConfig,
}

/// File name of each catalog, resolved by the [`AssetLoader`]
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogFiles {
    #[serde(default = "default_names")]
    pub names: String,
    #[serde(default = "default_ral")]
    pub ral: String,
    #[serde(default = "default_pantone")]
    pub pantone: String,
    #[serde(default = "default_ncs")]
    pub ncs: String,
}

fn default_names() -> String {
    "names.json".to_string()
}

fn default_ral() -> String {
    "ral.json".to_string()
}

fn default_pantone() -> String {
    "pantone.json".to_string()
}

fn default_ncs() -> String {
    "ncs.json".to_string()
}

impl CatalogFiles {
    pub fn file_for(&self, kind: CatalogKind) -> &str {
        match kind {
            CatalogKind::Names => &self.names,
            CatalogKind::Ral => &self.ral,
            CatalogKind::Pantone => &self.pantone,
            CatalogKind::Ncs => &self.ncs,
        }
    }
}

impl Default for CatalogFiles {
    fn default() -> Self {
        Self {
            names: default_names(),
            ral: default_ral(),
            pantone: default_pantone(),
            ncs: default_ncs(),
        }
    }
}

/// Settings for `GET /colors/{hex}`
#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    /// Number of nearest common names listed in a report
    #[serde(default = "default_names_per_report")]
    pub names_per_report: usize,
}

fn default_names_per_report() -> usize {
    5
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            names_per_report: default_names_per_report(),
        }
    }
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        names_per_report = config.report.names_per_report,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
