//! Module - Priced Add-ons Belonging to a Product

use serde::{Deserialize, Serialize};

use super::form::{ChoiceSet, FieldKind, FieldSpec, FormReader, FormValues, ValidationErrors};
use super::record::{EntityKind, FormData, Record, RecordId};
use super::status::Status;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    pub module_id: RecordId,
    pub name: String,
    pub price: f64,
    /// Display-only reference; a dangling id renders as `N/A`
    pub product_id: RecordId,
    pub module_status: Status,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleForm {
    pub name: String,
    pub price: f64,
    pub product_id: RecordId,
    pub module_status: Status,
}

const NAME: FieldSpec = FieldSpec::new(
    "name",
    "field.name",
    "form.module.name_required",
    FieldKind::Text,
);
const PRICE: FieldSpec = FieldSpec::new(
    "price",
    "field.price",
    "form.module.price_required",
    FieldKind::Decimal { min: 0.0, max: None },
);
const PRODUCT: FieldSpec = FieldSpec::new(
    "product_id",
    "field.product",
    "form.module.product_required",
    FieldKind::Reference(EntityKind::Product),
);
const MODULE_STATUS: FieldSpec = FieldSpec::new(
    "module_status",
    "field.status",
    "form.module.status_required",
    FieldKind::Choice(ChoiceSet::Status),
);

const FIELDS: &[FieldSpec] = &[NAME, PRICE, PRODUCT, MODULE_STATUS];

impl Record for Module {
    type Form = ModuleForm;

    const KIND: EntityKind = EntityKind::Module;

    fn id(&self) -> RecordId {
        self.module_id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> Option<Status> {
        Some(self.module_status)
    }

    fn set_status(&mut self, status: Status) -> bool {
        self.module_status = status;
        true
    }

    fn to_form(&self) -> ModuleForm {
        ModuleForm {
            name: self.name.clone(),
            price: self.price,
            product_id: self.product_id,
            module_status: self.module_status,
        }
    }
}

impl FormData for ModuleForm {
    type Record = Module;

    fn fields() -> &'static [FieldSpec] {
        FIELDS
    }

    fn read(reader: &mut FormReader<'_>) -> Self {
        Self {
            name: reader.text(&NAME),
            price: reader.decimal(&PRICE),
            product_id: reader.reference(&PRODUCT),
            module_status: reader.status(&MODULE_STATUS),
        }
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text(&NAME, &self.name);
        errors.check_bounds(&PRICE, self.price);
        errors.into_result()
    }

    fn to_values(&self) -> FormValues {
        FormValues::new()
            .with(NAME.key, self.name.as_str())
            .with(PRICE.key, self.price.to_string())
            .with(PRODUCT.key, self.product_id.to_string())
            .with(MODULE_STATUS.key, self.module_status.as_str())
    }

    fn into_record(self, id: RecordId) -> Module {
        Module {
            module_id: id,
            name: self.name.trim().to_string(),
            price: self.price,
            product_id: self.product_id,
            module_status: self.module_status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_requires_product_selection() {
        let values = FormValues::new()
            .with("name", "Power BI")
            .with("price", "200000")
            .with("module_status", "ACTIVE");
        let errors = ModuleForm::from_values(&values).expect_err("no product");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.for_field("product_id").map(|e| e.message_key),
            Some("form.module.product_required")
        );
    }

    #[test]
    fn test_module_keeps_dangling_product_reference() {
        let values = FormValues::new()
            .with("name", "Forecasting")
            .with("price", "99.9")
            .with("product_id", "42")
            .with("module_status", "DEPRECATED");
        let module = ModuleForm::from_values(&values)
            .expect("references are not enforced")
            .into_record(RecordId(3));

        assert_eq!(module.product_id, RecordId(42));
        assert_eq!(module.status(), Some(Status::Deprecated));
    }
}
