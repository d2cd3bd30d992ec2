//! Products Page

use crate::domain::product::Product;
use crate::features::crud::table::{ColumnSpec, TableSchema};
use crate::i18n::Locale;
use crate::store::References;
use crate::utils::format::truncate;

#[cfg(feature = "gui")]
pub type ProductsPage = crate::features::crud::page::CrudPage<Product>;

const DESCRIPTION_CHARS: usize = 48;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::text("product_code", "column.product_code", 110.0),
    ColumnSpec::text("product_name", "column.product_name", 200.0),
    ColumnSpec::text("description", "column.description", 320.0),
    ColumnSpec::status(),
    ColumnSpec::actions(),
];

impl TableSchema for Product {
    fn columns() -> &'static [ColumnSpec] {
        COLUMNS
    }

    fn cell_text(&self, column: &str, _refs: &References, _locale: Locale) -> String {
        match column {
            "product_code" => self.product_code.clone(),
            "product_name" => self.product_name.clone(),
            "description" => truncate(&self.description, DESCRIPTION_CHARS),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn test_long_description_is_truncated() {
        let product = &fixtures::products()[0];
        let text = product.cell_text("description", &References::default(), Locale::En);

        assert_eq!(text.chars().count(), DESCRIPTION_CHARS);
        assert!(text.ends_with("..."));
        assert_eq!(
            product.cell_text("product_code", &References::default(), Locale::En),
            "AHIS"
        );
    }
}
