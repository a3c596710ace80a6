use crate::error::Result;
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

use super::agents::add_agents;

/// Arguments of [`create_agent_group`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAgentGroup {
    pub name: String,
    pub agent_ids: Vec<String>,
    pub comment: Option<String>,
}

pub fn create_agent_group(args: &CreateAgentGroup) -> Result<Request> {
    const FUNCTION: &str = "create_agent_group";
    required(FUNCTION, "name", &args.name)?;

    let mut cmd = XmlCommand::new("create_agent_group");
    cmd.add_text_element("name", args.name.as_str());
    cmd.add_optional_element("comment", args.comment.as_deref());
    add_agents(&mut cmd, FUNCTION, &args.agent_ids)?;
    Ok(cmd.into())
}

/// Arguments of [`modify_agent_group`]. Given `agent_ids` replace the members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyAgentGroup {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub agent_ids: Option<Vec<String>>,
}

pub fn modify_agent_group(
    agent_group_id: impl EntityId,
    args: &ModifyAgentGroup,
) -> Result<Request> {
    const FUNCTION: &str = "modify_agent_group";
    let agent_group_id = required_id(FUNCTION, "agent_group_id", agent_group_id)?;

    let mut cmd = XmlCommand::new("modify_agent_group");
    cmd.set_attribute("agent_group_id", agent_group_id);
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("comment", args.comment.as_deref());
    if let Some(agent_ids) = &args.agent_ids {
        add_agents(&mut cmd, FUNCTION, agent_ids)?;
    }
    Ok(cmd.into())
}

pub fn clone_agent_group(agent_group_id: impl EntityId) -> Result<Request> {
    clone_entity("agent_group", agent_group_id)
}

pub fn delete_agent_group(agent_group_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("agent_group", agent_group_id, ultimate)
}

pub fn get_agent_groups(
    filter_string: Option<&str>,
    filter_id: Option<&str>,
    trash: Option<bool>,
) -> Request {
    let mut cmd = XmlCommand::new("get_agent_groups");
    cmd.add_filter(filter_string, filter_id);
    set_bool(&mut cmd, "trash", trash);
    cmd.into()
}

pub fn get_agent_group(agent_group_id: impl EntityId) -> Result<Request> {
    Ok(get_entity("agent_group", agent_group_id)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_agent_group_bytes() {
        let args = CreateAgentGroup {
            name: "dmz".into(),
            agent_ids: vec!["a1".into()],
            comment: Some("edge hosts".into()),
        };
        assert_eq!(
            create_agent_group(&args).unwrap().to_string(),
            "<create_agent_group><name>dmz</name><comment>edge hosts</comment>\
             <agents><agent id=\"a1\"/></agents></create_agent_group>"
        );
    }

    #[test]
    fn agent_group_crud() {
        assert_eq!(
            clone_agent_group("g1").unwrap().to_string(),
            "<create_agent_group><copy>g1</copy></create_agent_group>"
        );
        assert_eq!(
            delete_agent_group("g1", true).unwrap().to_string(),
            r#"<delete_agent_group agent_group_id="g1" ultimate="1"/>"#
        );
        assert_eq!(
            modify_agent_group("g1", &Default::default()).unwrap().to_string(),
            r#"<modify_agent_group agent_group_id="g1"/>"#
        );
        let err = create_agent_group(&CreateAgentGroup {
            name: "dmz".into(),
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.argument(), Some("agent_ids"));
    }
}
