//! GMP 22.8 adds agents, agent groups and agent installers.

mod agent_groups;
mod agent_installers;
mod agents;

pub use self::agent_groups::*;
pub use self::agent_installers::*;
pub use self::agents::*;
pub use super::v227::*;
