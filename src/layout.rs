//! Twelve-column grid.

use ahtml::{ConfigError, Tag};

pub const GRID_COLUMNS: u32 = 12;

pub fn row() -> Tag {
    Tag::new("div").with_class("row")
}

/// A column width in grid units, 1..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ColumnWidth(u32);

impl ColumnWidth {
    pub fn new(width: u32) -> Result<Self, ConfigError> {
        if (1..=GRID_COLUMNS).contains(&width) {
            Ok(ColumnWidth(width))
        } else {
            Err(ConfigError::InvalidColumnWidth(width))
        }
    }

    /// `floor(12 / n)`: for counts not dividing 12 the rest of the
    /// row stays empty (5 columns use 10 units). More than 12 columns
    /// get width 1 each and wrap.
    pub fn equal_share(n: usize) -> Self {
        let n = u32::try_from(n.max(1)).unwrap_or(u32::MAX);
        ColumnWidth((GRID_COLUMNS / n).max(1))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn css_class(self) -> String {
        format!("col col-{}", self.0)
    }
}

pub fn column(width: ColumnWidth) -> Tag {
    Tag::new("div").with_class(&width.css_class())
}
