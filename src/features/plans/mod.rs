//! Plans Page

use crate::domain::form::format_date;
use crate::domain::plan::Plan;
use crate::features::crud::table::{ColumnSpec, TableSchema};
use crate::i18n::{t, Locale};
use crate::store::References;
use crate::utils::format::format_rate;

#[cfg(feature = "gui")]
pub type PlansPage = crate::features::crud::page::CrudPage<Plan>;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::text("name", "column.name", 160.0),
    ColumnSpec::text("discount_rate", "column.discount_rate", 120.0),
    ColumnSpec::text("start_date", "column.start_date", 120.0),
    ColumnSpec::text("end_date", "column.end_date", 120.0),
    ColumnSpec::text("plan_type", "column.plan_type", 130.0),
    ColumnSpec::status(),
    ColumnSpec::actions(),
];

impl TableSchema for Plan {
    fn columns() -> &'static [ColumnSpec] {
        COLUMNS
    }

    fn cell_text(&self, column: &str, _refs: &References, locale: Locale) -> String {
        match column {
            "name" => self.name.clone(),
            "discount_rate" => format_rate(self.discount_rate),
            "start_date" => format_date(self.start_date),
            "end_date" => format_date(self.end_date),
            "plan_type" => t(locale, self.plan_type.label_key()),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn test_plan_cells() {
        let plan = &fixtures::plans()[0];
        let refs = References::default();
        let cell = |key| plan.cell_text(key, &refs, Locale::En);

        assert_eq!(cell("discount_rate"), "10%");
        assert_eq!(cell("start_date"), "2022-01-01");
        assert_eq!(cell("plan_type"), "Subscription");
        assert_eq!(cell("unknown"), "");
    }
}
