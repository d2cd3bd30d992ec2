//! Dashboard Summary - Totals and Status Distribution

use crate::domain::module::Module;
use crate::domain::package::Package;
use crate::domain::plan::Plan;
use crate::domain::product::Product;
use crate::domain::record::Record;
use crate::domain::status::Status;
use crate::store::EntityStore;

/// Records per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub active: usize,
    pub inactive: usize,
    pub deprecated: usize,
}

impl StatusCounts {
    pub fn tally(statuses: impl IntoIterator<Item = Status>) -> Self {
        statuses.into_iter().fold(Self::default(), |mut counts, status| {
            match status {
                Status::Active => counts.active += 1,
                Status::Inactive => counts.inactive += 1,
                Status::Deprecated => counts.deprecated += 1,
            }
            counts
        })
    }

    pub fn of<R: Record>(store: &EntityStore<R>) -> Self {
        Self::tally(store.records().filter_map(Record::status))
    }

    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Active => self.active,
            Status::Inactive => self.inactive,
            Status::Deprecated => self.deprecated,
        }
    }

    pub fn total(&self) -> usize {
        self.active + self.inactive + self.deprecated
    }
}

/// Everything the dashboard cards show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub plans: usize,
    pub products: usize,
    pub packages: usize,
    pub modules: usize,
    pub plan_status: StatusCounts,
    pub product_status: StatusCounts,
}

impl DashboardSummary {
    pub fn collect(
        plans: &EntityStore<Plan>,
        products: &EntityStore<Product>,
        packages: &EntityStore<Package>,
        modules: &EntityStore<Module>,
    ) -> Self {
        Self {
            plans: plans.len(),
            products: products.len(),
            packages: packages.len(),
            modules: modules.len(),
            plan_status: StatusCounts::of(plans),
            product_status: StatusCounts::of(products),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::RecordId;
    use crate::store::fixtures;

    #[test]
    fn test_summary_matches_stores() {
        let mut plans = EntityStore::with_records(fixtures::plans());
        let products = EntityStore::with_records(fixtures::products());
        let packages = EntityStore::with_records(fixtures::packages());
        let modules = EntityStore::with_records(fixtures::modules());

        let summary = DashboardSummary::collect(&plans, &products, &packages, &modules);
        assert_eq!(
            (summary.plans, summary.products, summary.packages, summary.modules),
            (2, 1, 2, 2)
        );
        assert_eq!(summary.plan_status.active, 2);
        assert_eq!(summary.product_status.total(), 1);

        plans
            .set_status(RecordId(2), Status::Deprecated)
            .expect("set status");
        let summary = DashboardSummary::collect(&plans, &products, &packages, &modules);
        assert_eq!(summary.plan_status.get(Status::Active), 1);
        assert_eq!(summary.plan_status.get(Status::Deprecated), 1);
        assert_eq!(summary.plan_status.get(Status::Inactive), 0);
    }
}
