//! GMP 22.6 adds report configs and audit reports.

mod audit_reports;
mod entity_type;
mod report_configs;
mod reports;

pub use self::audit_reports::*;
pub use self::entity_type::{EntityType, FilterType, ResourceType};
pub use self::report_configs::*;
pub use self::reports::{get_report, GetReport};
pub use super::v225::*;

use super::v224;

pub type CreateFilter = v224::CreateFilter<FilterType>;
pub type ModifyFilter = v224::ModifyFilter<FilterType>;
pub type CreateTag = v224::CreateTag<EntityType>;
pub type ModifyTag = v224::ModifyTag<EntityType>;
pub type CreatePermission = v224::CreatePermission<EntityType>;
pub type ModifyPermission = v224::ModifyPermission<EntityType>;
pub type GetAggregates = v224::GetAggregates<EntityType>;
