//! Product - Sellable Products

use serde::{Deserialize, Serialize};

use super::form::{ChoiceSet, FieldKind, FieldSpec, FormReader, FormValues, ValidationErrors};
use super::record::{EntityKind, FormData, Record, RecordId};
use super::status::Status;

/// A product that modules attach to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: RecordId,
    pub product_code: String,
    pub product_name: String,
    pub description: String,
    pub product_status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub product_code: String,
    pub product_name: String,
    pub description: String,
    pub product_status: Status,
}

const PRODUCT_CODE: FieldSpec = FieldSpec::new(
    "product_code",
    "field.product_code",
    "form.product.code_required",
    FieldKind::Text,
);
const PRODUCT_NAME: FieldSpec = FieldSpec::new(
    "product_name",
    "field.product_name",
    "form.product.name_required",
    FieldKind::Text,
);
const DESCRIPTION: FieldSpec = FieldSpec::new(
    "description",
    "field.description",
    "form.product.description_required",
    FieldKind::TextArea,
);
const PRODUCT_STATUS: FieldSpec = FieldSpec::new(
    "product_status",
    "field.status",
    "form.product.status_required",
    FieldKind::Choice(ChoiceSet::Status),
);

const FIELDS: &[FieldSpec] = &[PRODUCT_CODE, PRODUCT_NAME, DESCRIPTION, PRODUCT_STATUS];

impl Record for Product {
    type Form = ProductForm;

    const KIND: EntityKind = EntityKind::Product;

    fn id(&self) -> RecordId {
        self.product_id
    }

    fn display_name(&self) -> &str {
        &self.product_name
    }

    fn status(&self) -> Option<Status> {
        Some(self.product_status)
    }

    fn set_status(&mut self, status: Status) -> bool {
        self.product_status = status;
        true
    }

    fn to_form(&self) -> ProductForm {
        ProductForm {
            product_code: self.product_code.clone(),
            product_name: self.product_name.clone(),
            description: self.description.clone(),
            product_status: self.product_status,
        }
    }
}

impl FormData for ProductForm {
    type Record = Product;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn read(reader: &mut FormReader<'_>) -> Self {
        Self {
            product_code: reader.text(&PRODUCT_CODE),
            product_name: reader.text(&PRODUCT_NAME),
            description: reader.text(&DESCRIPTION),
            product_status: reader.status(&PRODUCT_STATUS),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text(&PRODUCT_CODE, &self.product_code);
        errors.require_text(&PRODUCT_NAME, &self.product_name);
        errors.require_text(&DESCRIPTION, &self.description);
        errors.into_result()
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(PRODUCT_CODE.key, self.product_code.as_str())
            .with(PRODUCT_NAME.key, self.product_name.as_str())
            .with(DESCRIPTION.key, self.description.as_str())
            .with(PRODUCT_STATUS.key, self.product_status.as_str())
    }

    fn into_record(self, id: RecordId) -> Product {
        Product {
            product_id: id,
            product_code: self.product_code.trim().to_string(),
            product_name: self.product_name.trim().to_string(),
            description: self.description.trim().to_string(),
            product_status: self.product_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_field_is_required() {
        let errors = ProductForm::from_values(&FormValues::new()).expect_err("empty draft");
        let keys: Vec<_> = errors.iter().map(|e| e.message_key).collect();

        assert_eq!(
            keys,
            vec![
                "form.product.code_required",
                "form.product.name_required",
                "form.product.description_required",
                "form.product.status_required",
            ]
        );
    }

    #[test]
    fn test_programmatic_form_rejects_blank_text() {
        let form = ProductForm {
            product_code: "AHIS".to_string(),
            product_name: "  ".to_string(),
            description: "Studio".to_string(),
            product_status: Status::Active,
        };
        let errors = form.validate().expect_err("blank name");
        assert!(errors.for_field("product_name").is_some());
    }
}
