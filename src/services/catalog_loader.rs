//! Startup loading of the four reference catalogs.
//!
//! Every catalog must load: a missing or malformed file is a [`CatalogError`]
//! and the server does not start. A catalog file that parses to an empty
//! array is accepted and simply never matches.

use std::time::Instant;

use color_core::{CatalogKind, CatalogRecord, CatalogRegistry, ColorPoint, NameCatalog};

use crate::assets::AssetLoader;
use crate::error::CatalogError;
use crate::models::CatalogFiles;

/// Indexes built from the loaded catalogs
pub struct LoadedCatalogs {
    pub registry: CatalogRegistry,
    pub names: NameCatalog,
}

/// Read and parse one catalog file.
pub fn read_records(
    loader: &AssetLoader,
    kind: CatalogKind,
    file_name: &str,
) -> Result<Vec<CatalogRecord>, CatalogError> {
    let source_name = loader.catalog_source(file_name);
    let bytes = loader
        .read_catalog(file_name)
        .map_err(|error| CatalogError::Read {
            catalog: kind.as_str(),
            source_name: source_name.clone(),
            error,
        })?;

    serde_json::from_slice(&bytes).map_err(|error| CatalogError::Parse {
        catalog: kind.as_str(),
        source_name,
        error,
    })
}

/// Load every catalog and build the registry and the autocomplete name list.
pub fn load_catalogs(
    loader: &AssetLoader,
    files: &CatalogFiles,
) -> Result<LoadedCatalogs, CatalogError> {
    let started = Instant::now();
    let mut catalogs = Vec::with_capacity(CatalogKind::ALL.len());
    let mut names = NameCatalog::default();

    for kind in CatalogKind::ALL {
        let file_name = files.file_for(kind);
        let load_started = Instant::now();
        let records = read_records(loader, kind, file_name)?;

        if kind == CatalogKind::Names {
            names = NameCatalog::from_records(&records);
        }

        tracing::info!(
            catalog = %kind,
            source = %loader.catalog_source(file_name),
            entries = records.len(),
            elapsed_ms = load_started.elapsed().as_millis() as u64,
            "Loaded catalog"
        );
        if records.is_empty() {
            tracing::warn!(catalog = %kind, "Catalog is empty, lookups will find no match");
        }

        let points: Vec<ColorPoint> = records.into_iter().map(ColorPoint::from).collect();
        catalogs.push((kind, points));
    }

    let registry = CatalogRegistry::new(catalogs);
    tracing::info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        autocomplete_names = names.len(),
        "Catalog indexes built"
    );

    Ok(LoadedCatalogs { registry, names })
}
