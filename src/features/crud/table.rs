//! Table Schema - Columns and Cell Text per Entity

use crate::domain::record::Record;
use crate::i18n::Locale;
use crate::store::References;

/// How a column's cells are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    /// Inline status selector
    Status,
    /// Edit / delete buttons
    Actions,
}

/// One table column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub key: &'static str,
    pub label_key: &'static str,
    pub kind: ColumnKind,
    /// Width in pixels
    pub width: f32,
}

impl ColumnSpec {
    pub const fn text(key: &'static str, label_key: &'static str, width: f32) -> Self {
        Self {
            key,
            label_key,
            kind: ColumnKind::Text,
            width,
        }
    }

    pub const fn status() -> Self {
        Self {
            key: "status",
            label_key: "column.status",
            kind: ColumnKind::Status,
            width: 300.0,
        }
    }

    pub const fn actions() -> Self {
        Self {
            key: "actions",
            label_key: "column.actions",
            kind: ColumnKind::Actions,
            width: 160.0,
        }
    }
}

/// Table layout of an entity page
pub trait TableSchema: Record {
    fn columns() -> &'static [ColumnSpec];

    /// Text of a [`ColumnKind::Text`] cell; unknown columns render empty
    fn cell_text(&self, column: &str, refs: &References, locale: Locale) -> String;
}
