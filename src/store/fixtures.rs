//! Fixtures - Seed Data Loaded at Startup

use chrono::NaiveDate;

use crate::domain::activity::{ActivityAction, RecentActivity};
use crate::domain::module::Module;
use crate::domain::package::Package;
use crate::domain::plan::Plan;
use crate::domain::product::Product;
use crate::domain::record::{EntityKind, RecordId};
use crate::domain::status::{OfferingType, Status};
use crate::domain::tenant_plan::TenantPlan;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            plan_id: RecordId(1),
            name: "Basic".to_string(),
            discount_rate: 10.0,
            start_date: date(2022, 1, 1),
            end_date: date(2022, 12, 31),
            plan_type: OfferingType::Subscription,
            plan_status: Status::Active,
        },
        Plan {
            plan_id: RecordId(2),
            name: "Premium".to_string(),
            discount_rate: 15.0,
            start_date: date(2022, 1, 1),
            end_date: date(2022, 12, 31),
            plan_type: OfferingType::Subscription,
            plan_status: Status::Active,
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![Product {
        product_id: RecordId(1),
        product_code: "AHIS".to_string(),
        product_name: "Precision Insights Studio".to_string(),
        description: "Precision Insights Studio is a powerful analytics tool \
                      that helps you make data-driven decisions."
            .to_string(),
        product_status: Status::Active,
    }]
}

pub fn packages() -> Vec<Package> {
    vec![
        Package {
            package_id: RecordId(1),
            name: "Basic".to_string(),
            package_type: OfferingType::Subscription,
            price: 200000.0,
            package_status: Status::Active,
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
            version: 1,
        },
        Package {
            package_id: RecordId(2),
            name: "Premium".to_string(),
            package_type: OfferingType::Subscription,
            price: 600000.0,
            package_status: Status::Active,
            start_date: date(2025, 1, 1),
            end_date: date(2025, 12, 31),
            version: 1,
        },
    ]
}

pub fn modules() -> Vec<Module> {
    vec![
        Module {
            module_id: RecordId(1),
            name: "Power BI".to_string(),
            price: 200000.0,
            product_id: RecordId(1),
            module_status: Status::Active,
        },
        Module {
            module_id: RecordId(2),
            name: "Interactive Dashboard".to_string(),
            price: 400000.0,
            product_id: RecordId(1),
            module_status: Status::Active,
        },
    ]
}

pub fn tenant_plans() -> Vec<TenantPlan> {
    vec![TenantPlan {
        tenant_id: RecordId(1),
        tenant_code: "AIA_HK".to_string(),
        plan_id: RecordId(1),
        assigned_at: date(2024, 1, 1),
    }]
}

/// Oldest first, the order entries are pushed into the feed
pub fn recent_activity() -> Vec<RecentActivity> {
    vec![
        RecentActivity {
            key: "1".to_string(),
            kind: EntityKind::Plan,
            name: "Basic Plan".to_string(),
            status: Some(Status::Active),
            action: ActivityAction::Created,
            updated_at: date(2024, 1, 1),
        },
        RecentActivity {
            key: "2".to_string(),
            kind: EntityKind::Product,
            name: "Enterprise Suite".to_string(),
            status: Some(Status::Active),
            action: ActivityAction::Created,
            updated_at: date(2024, 1, 1),
        },
    ]
}
