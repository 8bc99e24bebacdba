//! Color types and conversion utilities
//!
//! Colors enter as [`Srgb`] (hex strings, 8-bit triples) and are matched as
//! [`Lab`]. The cylindrical models exist for gradient synthesis ([`Hsl`]),
//! reporting ([`Hsv`]) and catalog ordering ([`LuvLch`]).
//!
//! # Example
//!
//! ```
//! use color_core::{Lab, Srgb};
//!
//! let plum: Srgb = "#8A4578".parse().unwrap();
//! let lab = Lab::from(plum);
//!
//! // Back to a display color
//! assert_eq!(lab.to_srgb().to_hex(), "#8a4578");
//! ```

mod hsl;
mod lab;
mod linear_rgb;
mod luv;
mod srgb;

pub use hsl::{Hsl, Hsv};
pub use lab::Lab;
pub use linear_rgb::LinearRgb;
pub use luv::LuvLch;
pub use srgb::Srgb;
