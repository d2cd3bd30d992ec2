//! Packages Page

use crate::domain::package::Package;
use crate::features::crud::table::{ColumnSpec, TableSchema};
use crate::i18n::{t, Locale};
use crate::store::References;
use crate::utils::format::{format_period, format_price};

#[cfg(feature = "gui")]
pub type PackagesPage = crate::features::crud::page::CrudPage<Package>;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::text("name", "column.name", 140.0),
    ColumnSpec::text("type", "column.type", 120.0),
    ColumnSpec::text("price", "column.price", 120.0),
    ColumnSpec::status(),
    ColumnSpec::text("version", "column.version", 80.0),
    ColumnSpec::text("valid_period", "column.valid_period", 220.0),
    ColumnSpec::actions(),
];

impl TableSchema for Package {
    fn columns() -> &'static [ColumnSpec] {
        COLUMNS
    }

    fn cell_text(&self, column: &str, _refs: &References, locale: Locale) -> String {
        match column {
            "name" => self.name.clone(),
            "type" => t(locale, self.package_type.label_key()),
            "price" => format_price(self.price),
            "version" => self.version.to_string(),
            "valid_period" => {
                format_period(self.start_date, self.end_date, &t(locale, "table.period_to"))
            }
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn test_package_cells() {
        let package = &fixtures::packages()[1];
        let refs = References::default();

        assert_eq!(package.cell_text("price", &refs, Locale::En), "$600000.00");
        assert_eq!(
            package.cell_text("valid_period", &refs, Locale::En),
            "2025-01-01 to 2025-12-31"
        );
        assert_eq!(package.cell_text("version", &refs, Locale::En), "1");
    }
}
