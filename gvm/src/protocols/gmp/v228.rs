use crate::protocols::gmp::requests::v228 as requests;
use crate::protocols::gmp::requests::EntityId;
use crate::transform::ResponseTransform;
use crate::transport::Transport;

use self::requests::{
    CreateAgentGroup, GetAgentInstallers, GetAgents, ModifyAgentGroup, ModifyAgents,
};
use super::GmpV227;

dialect! {
    /// A GMP 22.8 session. Adds agents, agent groups and agent installers.
    GmpV228: GmpV227, (22, 8)
}

impl<T: Transport, F: ResponseTransform> GmpV228<T, F> {
    operations! {
        requests;
        fn get_agents(args: &GetAgents);
        fn modify_agents(args: &ModifyAgents);
        fn delete_agents(agent_ids: &[String]);

        fn create_agent_group(args: &CreateAgentGroup);
        fn modify_agent_group(agent_group_id: impl EntityId, args: &ModifyAgentGroup);
        fn clone_agent_group(agent_group_id: impl EntityId);
        fn delete_agent_group(agent_group_id: impl EntityId, ultimate: bool);
        fn get_agent_groups(
            filter_string: Option<&str>,
            filter_id: Option<&str>,
            trash: Option<bool>,
        );
        fn get_agent_group(agent_group_id: impl EntityId);

        fn get_agent_installers(args: &GetAgentInstallers);
        fn get_agent_installer(agent_installer_id: impl EntityId);
        fn get_agent_installer_file(agent_installer_id: impl EntityId);
    }
}
