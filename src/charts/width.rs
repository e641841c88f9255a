//! Column widths a chart may claim inside a row.

use serde::{Deserialize, Serialize};

/// The fixed set of fractional widths the display grid supports.
///
/// Using an enumeration rather than a raw fraction keeps rows from being
/// over-filled and keeps the display layer from receiving widths it has no
/// column class for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnWidth {
    Quarter,
    Third,
    Half,
    TwoThirds,
    ThreeQuarters,
    Full,
}

impl ColumnWidth {
    /// The fraction of a row this width occupies.
    pub fn fraction(&self) -> f64 {
        match self {
            ColumnWidth::Quarter => 1.0 / 4.0,
            ColumnWidth::Third => 1.0 / 3.0,
            ColumnWidth::Half => 1.0 / 2.0,
            ColumnWidth::TwoThirds => 2.0 / 3.0,
            ColumnWidth::ThreeQuarters => 3.0 / 4.0,
            ColumnWidth::Full => 1.0,
        }
    }

    /// The hyphenated token the display layer keys its column classes on.
    pub fn hyphenated_name(&self) -> &'static str {
        match self {
            ColumnWidth::Quarter => "column-quarter",
            ColumnWidth::Third => "column-third",
            ColumnWidth::Half => "column-half",
            ColumnWidth::TwoThirds => "column-two-thirds",
            ColumnWidth::ThreeQuarters => "column-three-quarters",
            ColumnWidth::Full => "column-full",
        }
    }
}
