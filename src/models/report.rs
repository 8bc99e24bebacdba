//! Response document for `GET /colors/{hex}`.

use color_core::Lab;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Everything known about one color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ColorReport {
    /// The requested color and its nearest common name
    pub base: NamedColor,
    /// Five-color natural gradient derived from the requested color
    pub mono: Vec<NamedColor>,
    /// Nearest common names, nearest first
    pub names: Vec<String>,
    pub conversions: Conversions,
}

/// A display color with the nearest common name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NamedColor {
    /// Lowercase `#rrggbb`
    pub color: String,
    /// `null` when the names catalog is empty
    pub name: Option<String>,
}

/// The color in other notations and its nearest standard-system codes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Conversions {
    /// `rgb(r, g, b)`
    pub rgb: String,
    /// `hsl(h, s%, l%)`
    pub hsl: String,
    /// `hsv(h, s%, v%)`
    pub hsv: String,
    /// `lab(L, a, b)` on the unit scale
    pub lab: String,
    /// `cmyk(c%, m%, y%, k%)`
    pub cmyk: String,
    /// Nearest RAL code
    pub ral: Option<CatalogMatch>,
    /// Nearest Pantone code
    pub pan: Option<CatalogMatch>,
    /// Nearest NCS notation
    pub ncs: Option<CatalogMatch>,
}

/// Nearest entry of one catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogMatch {
    pub name: String,
    pub lab: LabDto,
    /// CIEDE2000 difference to the requested color, unit scale
    pub distance: f64,
}

/// CIE L*a*b* coordinate, unit scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabDto {
    #[serde(rename = "L")]
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl From<Lab> for LabDto {
    fn from(lab: Lab) -> Self {
        Self {
            l: lab.l,
            a: lab.a,
            b: lab.b,
        }
    }
}
