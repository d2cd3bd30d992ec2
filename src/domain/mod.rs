//! Domain - Pure Data Structures of the Pricing Catalog
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod activity;
pub mod config;
pub mod form;
pub mod module;
pub mod package;
pub mod plan;
pub mod product;
pub mod record;
pub mod status;
pub mod tenant_plan;

pub use module::{Module, ModuleForm};
pub use package::{Package, PackageForm};
pub use plan::{Plan, PlanForm};
pub use product::{Product, ProductForm};
pub use record::{EntityKind, FormData, Record, RecordId};
pub use status::{OfferingType, Status};
pub use tenant_plan::{TenantPlan, TenantPlanForm};
