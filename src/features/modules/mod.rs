//! Modules Page

use crate::domain::module::Module;
use crate::domain::record::EntityKind;
use crate::features::crud::table::{ColumnSpec, TableSchema};
use crate::i18n::Locale;
use crate::store::References;
use crate::utils::format::format_price;

#[cfg(feature = "gui")]
pub type ModulesPage = crate::features::crud::page::CrudPage<Module>;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::text("name", "column.name", 200.0),
    ColumnSpec::text("price", "column.price", 130.0),
    ColumnSpec::text("product", "column.product", 220.0),
    ColumnSpec::status(),
    ColumnSpec::actions(),
];

impl TableSchema for Module {
    fn columns() -> &'static [ColumnSpec] {
        COLUMNS
    }

    fn cell_text(&self, column: &str, refs: &References, _locale: Locale) -> String {
        match column {
            "name" => self.name.clone(),
            "price" => format_price(self.price),
            "product" => refs.name_of(EntityKind::Product, self.product_id).to_string(),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordId;
    use crate::store::{fixtures, EntityStore, MISSING_REFERENCE};

    #[test]
    fn test_product_column_joins_by_id() {
        let products = EntityStore::with_records(fixtures::products());
        let plans = EntityStore::with_records(fixtures::plans());
        let refs = References::new(&products, &plans);

        let mut module = fixtures::modules()[0].clone();
        assert_eq!(
            module.cell_text("product", &refs, Locale::En),
            "Precision Insights Studio"
        );

        module.product_id = RecordId(5);
        assert_eq!(module.cell_text("product", &refs, Locale::En), MISSING_REFERENCE);
    }
}
