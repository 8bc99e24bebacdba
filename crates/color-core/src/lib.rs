#![allow(clippy::excessive_precision)]

//! color-core: perceptual color matching
//!
//! Answers "what is this color called, and what is its nearest code in a
//! standard color system?" by nearest-neighbor search over reference
//! catalogs in CIE L\*a\*b\*, and derives a small natural-looking gradient
//! from any input color.
//!
//! # Quick Start
//!
//! ```
//! use color_core::{CatalogKind, CatalogRegistry, ColorPoint, Lab, Srgb};
//!
//! let names = ["#ff0000", "#800000", "#0000ff"]
//!     .into_iter()
//!     .zip(["red", "maroon", "blue"])
//!     .map(|(hex, name)| ColorPoint::new(name, Lab::from(hex.parse::<Srgb>().unwrap())))
//!     .collect();
//! let registry = CatalogRegistry::new([(CatalogKind::Names, names)]);
//!
//! let query = Lab::from("#8a0010".parse::<Srgb>().unwrap());
//! let best = registry.nearest(CatalogKind::Names, &query).unwrap();
//! assert_eq!(best.point.name, "maroon");
//! ```
//!
//! # Two Metrics
//!
//! | Metric | Where | Why |
//! |--------|-------|-----|
//! | Euclidean in Lab | [`KdTree`] traversal and ranking | Cheap enough for every node visit |
//! | CIEDE2000 | [`Match::distance`] | Closer to perceived difference |
//!
//! Ranking and reporting use different metrics. Near a tie the reported
//! "nearest" can have a larger CIEDE2000 distance than the runner-up; results
//! are never re-ranked.
//!
//! # Components
//!
//! - [`color`]: sRGB parsing, Lab, HSL/HSV, LCh(uv)
//! - [`index`]: the KD-tree and its k-nearest query
//! - [`catalog`]: catalog records and the immutable [`CatalogRegistry`]
//! - [`gradient`]: five-color natural gradient synthesis
//! - [`autocomplete`]: per-connection incremental name search
//!
//! Nothing here performs I/O or keeps global state. A registry is built once
//! and can be shared across threads behind an `Arc`; a session belongs to one
//! connection.

pub mod autocomplete;
pub mod catalog;
pub mod color;
pub mod error;
pub mod gradient;
pub mod index;
pub mod point;


pub use autocomplete::{AutocompleteSession, NameCatalog, Suggestion, Transition, MAX_SUGGESTIONS};
pub use catalog::{CatalogKind, CatalogRecord, CatalogRegistry, Match};
pub use color::{Hsl, Hsv, Lab, LinearRgb, LuvLch, Srgb};
pub use error::{ParseColorError, UnknownCatalogError};
pub use gradient::{DerivedColor, Gradient};
pub use index::{KdTree, Neighbor};
pub use point::ColorPoint;
