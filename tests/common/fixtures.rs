//! Test fixtures and constants.

/// Colors used across tests
pub mod colors {
    /// Mid-tone purple, the regression fixture color
    pub const PURPLE: &str = "8a4578";

    /// Pure red, present in the names catalog
    pub const RED: &str = "ff0000";

    pub const BLACK: &str = "000000";

    pub const WHITE: &str = "ffffff";
}

/// Path segments the color route must reject
pub const INVALID_SEGMENTS: &[&str] = &["fff", "8a45780", "8a457g", "zzzzzz", "%238a4578"];

/// Small catalog sources in each importer format
pub mod sources {
    pub const NAMES_CSV: &str = "name,hex\nRed,#ff0000\nOld Rose,#c08081\n\"Blue, Navy\",#000080\n";

    pub const RAL_CSV: &str = "\
ral;hue;lightness;chroma;r;g;b;code
1;75;80;35;205;186;136;RAL 1000
2;0;40;40;155;17;30;RAL 3003
";

    pub const PANTONE_TXT: &str = "254 221 0 PANTONE-yellow-C\n16 6 159 PANTONE-072-C\n";

    pub const NCS_TXT: &str = "$ncs-s-0500-n: #f2f2f0\n$ncs-s-2070-r: #b22d3d\n";
}
