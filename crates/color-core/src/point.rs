//! Named catalog point

use crate::color::Lab;

/// An identifier and its coordinate. Identity is the name; there is no
/// ordering or equality beyond what the fields give.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorPoint {
    pub name: String,
    pub lab: Lab,
}

impl ColorPoint {
    pub fn new(name: impl Into<String>, lab: Lab) -> Self {
        Self {
            name: name.into(),
            lab,
        }
    }
}
