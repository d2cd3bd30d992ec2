//! References - Display-Only Joins Between Stores
//!
//! Modules point at products and tenant plans point at plans. Neither link is
//! enforced; a dangling id resolves to [`MISSING_REFERENCE`].

use super::entity_store::EntityStore;
use crate::domain::plan::Plan;
use crate::domain::product::Product;
use crate::domain::record::{EntityKind, Record, RecordId};

/// Shown in place of a referenced record that no longer exists
pub const MISSING_REFERENCE: &str = "N/A";

/// Snapshot of the names other pages refer to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct References {
    products: Vec<(RecordId, String)>,
    plans: Vec<(RecordId, String)>,
}

fn names<R: Record>(store: &EntityStore<R>) -> Vec<(RecordId, String)> {
    store
        .records()
        .map(|record| (record.id(), record.display_name().to_string()))
        .collect()
}

impl References {
    pub fn new(products: &EntityStore<Product>, plans: &EntityStore<Plan>) -> Self {
        Self {
            products: names(products),
            plans: names(plans),
        }
    }

    /// Selectable targets for a reference field, in store order
    pub fn options(&self, kind: EntityKind) -> &[(RecordId, String)] {
        match kind {
            EntityKind::Product => &self.products,
            EntityKind::Plan => &self.plans,
            _ => &[],
        }
    }

    /// Name of the referenced record, or `N/A`
    pub fn name_of(&self, kind: EntityKind, id: RecordId) -> &str {
        self.options(kind)
            .iter()
            .find(|(candidate, _)| *candidate == id)
            .map(|(_, name)| name.as_str())
            .unwrap_or(MISSING_REFERENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures;

    #[test]
    fn test_joins_resolve_names_or_placeholder() {
        let mut products = EntityStore::with_records(fixtures::products());
        let plans = EntityStore::with_records(fixtures::plans());

        let refs = References::new(&products, &plans);
        assert_eq!(refs.name_of(EntityKind::Product, RecordId(1)), "Precision Insights Studio");
        assert_eq!(refs.name_of(EntityKind::Plan, RecordId(2)), "Premium");
        assert_eq!(refs.name_of(EntityKind::Plan, RecordId(9)), MISSING_REFERENCE);
        assert_eq!(refs.name_of(EntityKind::Module, RecordId(1)), MISSING_REFERENCE);

        products.delete(RecordId(1));
        let refs = References::new(&products, &plans);
        assert_eq!(refs.name_of(EntityKind::Product, RecordId(1)), MISSING_REFERENCE);
        assert!(refs.options(EntityKind::Product).is_empty());
    }
}
