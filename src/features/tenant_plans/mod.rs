//! Tenant Plans Page

use crate::domain::form::format_date;
use crate::domain::record::EntityKind;
use crate::domain::tenant_plan::TenantPlan;
use crate::features::crud::table::{ColumnSpec, TableSchema};
use crate::i18n::Locale;
use crate::store::References;

#[cfg(feature = "gui")]
pub type TenantPlansPage = crate::features::crud::page::CrudPage<TenantPlan>;

const COLUMNS: &[ColumnSpec] = &[
    ColumnSpec::text("tenant_code", "column.tenant_code", 200.0),
    ColumnSpec::text("plan", "column.plan", 200.0),
    ColumnSpec::text("assigned_at", "column.assigned_at", 160.0),
    ColumnSpec::actions(),
];

impl TableSchema for TenantPlan {
    fn columns() -> &'static [ColumnSpec] {
        COLUMNS
    }

    fn cell_text(&self, column: &str, refs: &References, _locale: Locale) -> String {
        match column {
            "tenant_code" => self.tenant_code.clone(),
            "plan" => refs.name_of(EntityKind::Plan, self.plan_id).to_string(),
            "assigned_at" => format_date(self.assigned_at),
            _ => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordId;
    use crate::store::{fixtures, EntityStore};

    #[test]
    fn test_plan_column_follows_plan_store() {
        let products = EntityStore::with_records(fixtures::products());
        let mut plans = EntityStore::with_records(fixtures::plans());
        let assignment = &fixtures::tenant_plans()[0];

        let refs = References::new(&products, &plans);
        assert_eq!(assignment.cell_text("plan", &refs, Locale::En), "Basic");
        assert_eq!(assignment.cell_text("assigned_at", &refs, Locale::En), "2024-01-01");

        plans.delete(RecordId(1));
        let refs = References::new(&products, &plans);
        assert_eq!(assignment.cell_text("plan", &refs, Locale::En), "N/A");
    }
}
