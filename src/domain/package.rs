//! Package - Priced Bundles with a Validity Period

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::form::{
    format_date, ChoiceSet, FieldKind, FieldSpec, FormReader, FormValues, ValidationErrors,
};
use super::record::{EntityKind, FormData, Record, RecordId};
use super::status::{OfferingType, Status};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub package_id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub package_type: OfferingType,
    pub price: f64,
    pub package_status: Status,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub version: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageForm {
    pub name: String,
    pub package_type: OfferingType,
    pub price: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub version: u32,
    pub package_status: Status,
}

const NAME: FieldSpec = FieldSpec::new(
    "name",
    "field.name",
    "form.package.name_required",
    FieldKind::Text,
);
const PACKAGE_TYPE: FieldSpec = FieldSpec::new(
    "type",
    "field.type",
    "form.package.type_required",
    FieldKind::Choice(ChoiceSet::Offering),
);
const PRICE: FieldSpec = FieldSpec::new(
    "price",
    "field.price",
    "form.package.price_required",
    FieldKind::Decimal { min: 0.0, max: None },
);
const START_DATE: FieldSpec = FieldSpec::new(
    "start_date",
    "field.start_date",
    "form.package.period_required",
    FieldKind::Date,
);
const END_DATE: FieldSpec = FieldSpec::new(
    "end_date",
    "field.end_date",
    "form.package.period_required",
    FieldKind::Date,
);
const VERSION: FieldSpec = FieldSpec::new(
    "version",
    "field.version",
    "form.package.version_required",
    FieldKind::Integer { min: 1 },
);
const PACKAGE_STATUS: FieldSpec = FieldSpec::new(
    "package_status",
    "field.status",
    "form.package.status_required",
    FieldKind::Choice(ChoiceSet::Status),
);

const FIELDS: &[FieldSpec] = &[
    NAME,
    PACKAGE_TYPE,
    PRICE,
    START_DATE,
    END_DATE,
    VERSION,
    PACKAGE_STATUS,
];

impl Record for Package {
    type Form = PackageForm;

    const KIND: EntityKind = EntityKind::Package;

    fn id(&self) -> RecordId {
        self.package_id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<Status> {
        Some(self.package_status)
    }

    fn set_status(&mut self, status: Status) -> bool {
        self.package_status = status;
        true
    }

    fn to_form(&self) -> PackageForm {
        PackageForm {
            name: self.name.clone(),
            package_type: self.package_type,
            price: self.price,
            start_date: self.start_date,
            end_date: self.end_date,
            version: self.version,
            package_status: self.package_status,
        }
    }
}

impl FormData for PackageForm {
    type Record = Package;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn read(reader: &mut FormReader<'_>) -> Self {
        Self {
            name: reader.text(&NAME),
            package_type: reader.offering(&PACKAGE_TYPE),
            price: reader.decimal(&PRICE),
            start_date: reader.date(&START_DATE),
            end_date: reader.date(&END_DATE),
            version: reader.integer(&VERSION),
            package_status: reader.status(&PACKAGE_STATUS),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text(&NAME, &self.name);
        errors.check_bounds(&PRICE, self.price);
        errors.check_bounds(&VERSION, f64::from(self.version));
        errors.check_period(&END_DATE, self.start_date, self.end_date);
        errors.into_result()
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(NAME.key, self.name.as_str())
            .with(PACKAGE_TYPE.key, self.package_type.as_str())
            .with(PRICE.key, self.price.to_string())
            .with(START_DATE.key, format_date(self.start_date))
            .with(END_DATE.key, format_date(self.end_date))
            .with(VERSION.key, self.version.to_string())
            .with(PACKAGE_STATUS.key, self.package_status.as_str())
    }

    fn into_record(self, id: RecordId) -> Package {
        Package {
            package_id: id,
            name: self.name.trim().to_string(),
            package_type: self.package_type,
            price: self.price,
            package_status: self.package_status,
            start_date: self.start_date,
            end_date: self.end_date,
            version: self.version,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::{INVALID_NUMBER, OUT_OF_RANGE};

    fn draft() -> FormValues {
        FormValues::new()
            .with("name", "Enterprise")
            .with("type", "ONE_TIME")
            .with("price", "1250.5")
            .with("start_date", "2025-01-01")
            .with("end_date", "2025-06-30")
            .with("version", "2")
            .with("package_status", "INACTIVE")
    }

    #[test]
    fn test_package_form_parses_draft() {
        let package = PackageForm::from_values(&draft())
            .expect("valid draft")
            .into_record(RecordId(9));

        assert_eq!(package.package_type, OfferingType::OneTime);
        assert_eq!(package.price, 1250.5);
        assert_eq!(package.version, 2);
        assert_eq!(package.status(), Some(Status::Inactive));
    }

    #[test]
    fn test_version_and_price_constraints() {
        let zero_version = draft().with("version", "0");
        let errors = PackageForm::from_values(&zero_version).expect_err("version below 1");
        assert_eq!(errors.for_field("version").map(|e| e.message_key), Some(OUT_OF_RANGE));

        let negative_price = draft().with("price", "-1");
        let errors = PackageForm::from_values(&negative_price).expect_err("negative price");
        assert_eq!(errors.for_field("price").map(|e| e.message_key), Some(OUT_OF_RANGE));

        let fractional_version = draft().with("version", "1.5");
        let errors = PackageForm::from_values(&fractional_version).expect_err("not an integer");
        assert_eq!(errors.for_field("version").map(|e| e.message_key), Some(INVALID_NUMBER));
    }

    #[test]
    fn test_package_type_serializes_as_type() {
        let package = PackageForm::from_values(&draft())
            .expect("valid draft")
            .into_record(RecordId(1));
        let json = serde_json::to_value(&package).expect("serialize");
        assert_eq!(json["type"], "ONE_TIME");
        assert_eq!(json["package_status"], "INACTIVE");
    }
}
