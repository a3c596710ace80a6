//! The GMP 22.4 catalogue, the base of all later dialects.

mod aggregates;
mod alerts;
mod audits;
mod auth;
mod credentials;
mod entity_type;
mod feeds;
mod filters;
mod groups;
mod help;
mod hosts;
mod notes;
mod operating_systems;
mod overrides;
mod permissions;
mod policies;
mod port_lists;
mod report_formats;
mod reports;
mod results;
mod roles;
mod scan_configs;
mod scanners;
mod schedules;
mod secinfo;
mod system_reports;
mod tags;
mod targets;
mod tasks;
mod tickets;
mod tls_certificates;
mod trashcan;
mod user_settings;
mod users;
mod version;
mod vulnerabilities;

pub use self::aggregates::*;
pub use self::alerts::*;
pub use self::audits::*;
pub use self::auth::*;
pub use self::credentials::*;
pub use self::entity_type::*;
pub use self::feeds::*;
pub use self::filters::*;
pub use self::groups::*;
pub use self::help::*;
pub use self::hosts::*;
pub use self::notes::*;
pub use self::operating_systems::*;
pub use self::overrides::*;
pub use self::permissions::*;
pub use self::policies::*;
pub use self::port_lists::*;
pub use self::report_formats::*;
pub use self::reports::*;
pub use self::results::*;
pub use self::roles::*;
pub use self::scan_configs::*;
pub use self::scanners::*;
pub use self::schedules::*;
pub use self::secinfo::*;
pub use self::system_reports::*;
pub use self::tags::*;
pub use self::targets::*;
pub use self::tasks::*;
pub use self::tickets::*;
pub use self::tls_certificates::*;
pub use self::trashcan::*;
pub use self::user_settings::*;
pub use self::users::*;
pub use self::version::*;
pub use self::vulnerabilities::*;
