//! TenantPlan - Assignment of a Plan to a Tenant

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::{format_date, FieldKind, FieldSpec, FormReader, FormValues, ValidationErrors};
use super::record::{EntityKind, FormData, Record, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantPlan {
    pub tenant_id: RecordId,
    pub tenant_code: String,
    /// Display-only reference; a dangling id renders as `N/A`
    pub plan_id: RecordId,
    pub assigned_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TenantPlanForm {
    pub tenant_code: String,
    pub plan_id: RecordId,
    pub assigned_at: NaiveDate,
}

const TENANT_CODE: FieldSpec = FieldSpec::new(
    "tenant_code",
    "field.tenant_code",
    "form.tenant_plan.tenant_code_required",
    FieldKind::Text,
);
const PLAN: FieldSpec = FieldSpec::new(
    "plan_id",
    "field.plan",
    "form.tenant_plan.plan_required",
    FieldKind::Reference(EntityKind::Plan),
);
const ASSIGNED_AT: FieldSpec = FieldSpec::new(
    "assigned_at",
    "field.assigned_at",
    "form.tenant_plan.assigned_at_required",
    FieldKind::Date,
);

const FIELDS: &[FieldSpec] = &[TENANT_CODE, PLAN, ASSIGNED_AT];

impl Record for TenantPlan {
    type Form = TenantPlanForm;

    const KIND: EntityKind = EntityKind::TenantPlan;

    fn id(&self) -> RecordId {
        self.tenant_id
    }

    fn display_name(&self) -> &str {
        &self.tenant_code
    }

    fn to_form(&self) -> TenantPlanForm {
        TenantPlanForm {
            tenant_code: self.tenant_code.clone(),
            plan_id: self.plan_id,
            assigned_at: self.assigned_at,
        }
    }
}

impl FormData for TenantPlanForm {
    type Record = TenantPlan;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn read(reader: &mut FormReader<'_>) -> Self {
        Self {
            tenant_code: reader.text(&TENANT_CODE),
            plan_id: reader.reference(&PLAN),
            assigned_at: reader.date(&ASSIGNED_AT),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text(&TENANT_CODE, &self.tenant_code);
        errors.into_result()
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(TENANT_CODE.key, self.tenant_code.as_str())
            .with(PLAN.key, self.plan_id.to_string())
            .with(ASSIGNED_AT.key, format_date(self.assigned_at))
    }

    fn into_record(self, id: RecordId) -> TenantPlan {
        TenantPlan {
            tenant_id: id,
            tenant_code: self.tenant_code.trim().to_string(),
            plan_id: self.plan_id,
            assigned_at: self.assigned_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tenant_plan_has_no_status() {
        let mut assignment = TenantPlan {
            tenant_id: RecordId(1),
            tenant_code: "AIA_HK".to_string(),
            plan_id: RecordId(1),
            assigned_at: NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"),
        };

        assert_eq!(assignment.status(), None);
        assert!(!assignment.set_status(crate::domain::status::Status::Inactive));
    }

    #[test]
    fn test_assigned_date_is_required() {
        let values = FormValues::new()
            .with("tenant_code", "AIA_SG")
            .with("plan_id", "2");
        let errors = TenantPlanForm::from_values(&values).expect_err("no date");
        assert_eq!(
            errors.for_field("assigned_at").map(|e| e.message_key),
            Some("form.tenant_plan.assigned_at_required")
        );
    }
}
