//! Column Definition

use gpui::SharedString;

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Takes a share of the remaining space, never narrower than `min`
    Flex { min: f32 },
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: 100.0 }
    }
}

/// Header of one table column
#[derive(Debug, Clone)]
pub struct Column {
    pub label: SharedString,
    pub width: ColumnWidth,
}

impl Column {
    pub fn new(label: impl Into<SharedString>) -> Self {
        Self {
            label: label.into(),
            width: ColumnWidth::default(),
        }
    }

    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    pub fn flex_width(mut self, min: f32) -> Self {
        self.width = ColumnWidth::Flex { min };
        self
    }
}
