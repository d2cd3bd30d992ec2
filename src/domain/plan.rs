//! Plan - Discount Plans

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::{
    format_date, ChoiceSet, FieldKind, FieldSpec, FormReader, FormValues, ValidationErrors,
};
use super::record::{EntityKind, FormData, Record, RecordId};
use super::status::{OfferingType, Status};

/// A discount plan applied to tenants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub plan_id: RecordId,
    pub name: String,
    /// Percentage, 0 to 100
    pub discount_rate: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub plan_type: OfferingType,
    pub plan_status: Status,
}

/// Editable fields of a plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanForm {
    pub name: String,
    pub discount_rate: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub plan_type: OfferingType,
    pub plan_status: Status,
}

const NAME: FieldSpec = FieldSpec::new(
    "name",
    "field.name",
    "form.plan.name_required",
    FieldKind::Text,
);
const DISCOUNT_RATE: FieldSpec = FieldSpec::new(
    "discount_rate",
    "field.discount_rate",
    "form.plan.discount_rate_required",
    FieldKind::Decimal {
        min: 0.0,
        max: Some(100.0),
    },
);
const START_DATE: FieldSpec = FieldSpec::new(
    "start_date",
    "field.start_date",
    "form.plan.period_required",
    FieldKind::Date,
);
const END_DATE: FieldSpec = FieldSpec::new(
    "end_date",
    "field.end_date",
    "form.plan.period_required",
    FieldKind::Date,
);
const PLAN_TYPE: FieldSpec = FieldSpec::new(
    "plan_type",
    "field.plan_type",
    "form.plan.plan_type_required",
    FieldKind::Choice(ChoiceSet::Offering),
);
const PLAN_STATUS: FieldSpec = FieldSpec::new(
    "plan_status",
    "field.status",
    "form.plan.status_required",
    FieldKind::Choice(ChoiceSet::Status),
);

const FIELDS: &[FieldSpec] = &[NAME, DISCOUNT_RATE, START_DATE, END_DATE, PLAN_TYPE, PLAN_STATUS];

impl Record for Plan {
    type Form = PlanForm;

    const KIND: EntityKind = EntityKind::Plan;

    fn id(&self) -> RecordId {
        self.plan_id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<Status> {
        Some(self.plan_status)
    }

    fn set_status(&mut self, status: Status) -> bool {
        self.plan_status = status;
        true
    }

    fn to_form(&self) -> PlanForm {
        PlanForm {
            name: self.name.clone(),
            discount_rate: self.discount_rate,
            start_date: self.start_date,
            end_date: self.end_date,
            plan_type: self.plan_type,
            plan_status: self.plan_status,
        }
    }
}

impl FormData for PlanForm {
    type Record = Plan;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn read(reader: &mut FormReader<'_>) -> Self {
        Self {
            name: reader.text(&NAME),
            discount_rate: reader.decimal(&DISCOUNT_RATE),
            start_date: reader.date(&START_DATE),
            end_date: reader.date(&END_DATE),
            plan_type: reader.offering(&PLAN_TYPE),
            plan_status: reader.status(&PLAN_STATUS),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text(&NAME, &self.name);
        errors.check_bounds(&DISCOUNT_RATE, self.discount_rate);
        errors.check_period(&END_DATE, self.start_date, self.end_date);
        errors.into_result()
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(NAME.key, self.name.as_str())
            .with(DISCOUNT_RATE.key, self.discount_rate.to_string())
            .with(START_DATE.key, format_date(self.start_date))
            .with(END_DATE.key, format_date(self.end_date))
            .with(PLAN_TYPE.key, self.plan_type.as_str())
            .with(PLAN_STATUS.key, self.plan_status.as_str())
    }

    fn into_record(self, id: RecordId) -> Plan {
        Plan {
            plan_id: id,
            name: self.name.trim().to_string(),
            discount_rate: self.discount_rate,
            start_date: self.start_date,
            end_date: self.end_date,
            plan_type: self.plan_type,
            plan_status: self.plan_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{END_BEFORE_START, OUT_OF_RANGE};

    fn gold_values() -> FormValues {
        FormValues::new()
            .with("name", "Gold")
            .with("discount_rate", "20")
            .with("start_date", "2024-01-01")
            .with("end_date", "2024-12-31")
            .with("plan_type", "SUBSCRIPTION")
            .with("plan_status", "ACTIVE")
    }

    #[test]
    fn test_form_parses_complete_draft() {
        let form = PlanForm::from_values(&gold_values()).expect("valid draft");
        assert_eq!(form.name, "Gold");
        assert_eq!(form.discount_rate, 20.0);
        assert_eq!(form.plan_type, OfferingType::Subscription);

        let plan = form.into_record(RecordId(3));
        assert_eq!(plan.id(), RecordId(3));
        assert_eq!(plan.status(), Some(Status::Active));
    }

    #[test]
    fn test_missing_fields_report_plan_messages() {
        let values = gold_values().with("name", "").with("end_date", "");
        let errors = PlanForm::from_values(&values).expect_err("incomplete draft");

        assert_eq!(
            errors.for_field("name").map(|e| e.message_key),
            Some("form.plan.name_required")
        );
        assert_eq!(
            errors.for_field("end_date").map(|e| e.message_key),
            Some("form.plan.period_required")
        );
    }

    #[test]
    fn test_discount_rate_and_period_constraints() {
        let values = gold_values()
            .with("discount_rate", "120")
            .with("end_date", "2023-06-30");
        let errors = PlanForm::from_values(&values).expect_err("out of range");

        assert_eq!(errors.for_field("discount_rate").map(|e| e.message_key), Some(OUT_OF_RANGE));
        assert_eq!(errors.for_field("end_date").map(|e| e.message_key), Some(END_BEFORE_START));
    }

    #[test]
    fn test_edit_prefill_includes_period() {
        let plan = PlanForm::from_values(&gold_values())
            .expect("valid draft")
            .into_record(RecordId(7));
        let values = plan.to_form().to_values();

        assert_eq!(values.get("start_date"), Some("2024-01-01"));
        assert_eq!(values.get("end_date"), Some("2024-12-31"));
        assert_eq!(values.get("discount_rate"), Some("20"));
    }

    #[test]
    fn test_plan_serializes_wire_field_names() {
        let plan = PlanForm::from_values(&gold_values())
            .expect("valid draft")
            .into_record(RecordId(1));
        let json = serde_json::to_value(&plan).expect("serialize");

        assert_eq!(json["plan_id"], 1);
        assert_eq!(json["plan_type"], "SUBSCRIPTION");
        assert_eq!(json["start_date"], "2024-01-01");
    }
}
