pub mod config;
pub mod report;

pub use config::{AppConfig, CatalogFiles, ReportConfig};
pub use report::{CatalogMatch, ColorReport, Conversions, LabDto, NamedColor};
