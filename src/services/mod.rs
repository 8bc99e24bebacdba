pub mod catalog_loader;
pub mod color_report;
pub mod importer;

pub use catalog_loader::{load_catalogs, LoadedCatalogs};
pub use color_report::{parse_path_hex, ColorReporter};
pub use importer::{import_file, ImportError, ImportFormat, ImportSummary};
