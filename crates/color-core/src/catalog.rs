//! Reference catalogs and the registry that indexes them
//!
//! A [`CatalogRegistry`] owns one [`KdTree`] per [`CatalogKind`]. It is
//! assembled once from fully-loaded catalogs and never changes afterwards,
//! so a single instance can be shared by any number of readers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{Lab, Srgb};
use crate::error::UnknownCatalogError;
use crate::index::KdTree;
use crate::point::ColorPoint;

/// The reference catalogs a color is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Common color names
    Names,
    /// RAL Classic and RAL Design codes
    Ral,
    /// Pantone codes
    Pantone,
    /// Natural Color System notations
    Ncs,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 4] = [
        CatalogKind::Names,
        CatalogKind::Ral,
        CatalogKind::Pantone,
        CatalogKind::Ncs,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CatalogKind::Names => "names",
            CatalogKind::Ral => "ral",
            CatalogKind::Pantone => "pantone",
            CatalogKind::Ncs => "ncs",
        }
    }

    #[inline]
    fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogKind {
    type Err = UnknownCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CatalogKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCatalogError(s.to_string()))
    }
}

/// One normalized catalog entry as stored on disk.
///
/// ```json
/// { "name": "RAL 3004", "lab": { "L": 0.27, "a": 0.39, "b": 0.15 } }
/// ```
///
/// `hex` is only written for name catalogs, where the source display color
/// is worth keeping exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    pub lab: Lab,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl CatalogRecord {
    /// Record for an sRGB source color; `lab` is computed from it.
    pub fn from_srgb(name: impl Into<String>, color: Srgb, keep_hex: bool) -> Self {
        Self {
            name: name.into(),
            lab: Lab::from(color),
            hex: keep_hex.then(|| color.to_hex()),
        }
    }

    /// Lowercase `#rrggbb`: the stored hex when it parses, otherwise derived
    /// from `lab`.
    pub fn display_hex(&self) -> String {
        self.hex
            .as_deref()
            .and_then(|hex| hex.parse::<Srgb>().ok())
            .unwrap_or_else(|| self.lab.to_srgb())
            .to_hex()
    }
}

impl From<CatalogRecord> for ColorPoint {
    fn from(record: CatalogRecord) -> Self {
        ColorPoint::new(record.name, record.lab)
    }
}

/// A nearest match together with its reported perceptual distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    pub point: &'a ColorPoint,
    /// CIEDE2000 difference to the query, unit scale
    pub distance: f64,
}

/// One spatial index per catalog, immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    indexes: [KdTree; 4],
}

impl CatalogRegistry {
    /// Build an index for every supplied catalog. Kinds not supplied stay
    /// empty and answer every query with no results.
    ///
    /// ```
    /// use color_core::{CatalogKind, CatalogRegistry, ColorPoint, Lab};
    ///
    /// let registry = CatalogRegistry::new([(
    ///     CatalogKind::Ral,
    ///     vec![ColorPoint::new("RAL 9005", Lab::new(0.02, 0.0, 0.0))],
    /// )]);
    /// let hits = registry.query(CatalogKind::Ral, &Lab::new(0.0, 0.0, 0.0), 1);
    /// assert_eq!(hits[0].name, "RAL 9005");
    /// assert!(registry.query(CatalogKind::Ncs, &Lab::default(), 1).is_empty());
    /// ```
    pub fn new<I>(catalogs: I) -> Self
    where
        I: IntoIterator<Item = (CatalogKind, Vec<ColorPoint>)>,
    {
        let mut registry = Self::default();
        for (kind, points) in catalogs {
            registry.indexes[kind.slot()] = KdTree::build(points);
        }
        registry
    }

    pub fn index(&self, kind: CatalogKind) -> &KdTree {
        &self.indexes[kind.slot()]
    }

    /// Number of entries in one catalog.
    pub fn len(&self, kind: CatalogKind) -> usize {
        self.index(kind).len()
    }

    /// The `k` entries of `kind` nearest to `point`, nearest first.
    pub fn query(&self, kind: CatalogKind, point: &Lab, k: usize) -> Vec<&ColorPoint> {
        self.index(kind)
            .k_nearest(point, k)
            .into_iter()
            .map(|neighbor| neighbor.point)
            .collect()
    }

    /// Reported distance between a query point and one of its matches.
    pub fn distance(point: &Lab, matched: &ColorPoint) -> f64 {
        point.ciede2000(&matched.lab)
    }

    /// Single nearest entry of `kind` with its reported distance.
    pub fn nearest(&self, kind: CatalogKind, point: &Lab) -> Option<Match<'_>> {
        self.query(kind, point, 1)
            .into_iter()
            .next()
            .map(|matched| Match {
                point: matched,
                distance: Self::distance(point, matched),
            })
    }

    /// Nearest common color name, if the names catalog has any entries.
    pub fn nearest_name(&self, point: &Lab) -> Option<&str> {
        self.query(CatalogKind::Names, point, 1)
            .into_iter()
            .next()
            .map(|p| p.name.as_str())
    }
}
