use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{add_bool_element, set_bool};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Add `<agents><agent id="ID"/>...</agents>`. At least one id is required.
pub(super) fn add_agents(
    cmd: &mut XmlCommand,
    function: &str,
    agent_ids: &[String],
) -> Result<()> {
    if agent_ids.iter().all(|id| id.is_empty()) {
        return Err(Error::required(function, "agent_ids"));
    }
    let agents = cmd.add_element("agents");
    for agent_id in agent_ids.iter().filter(|id| !id.is_empty()) {
        agents.add_element("agent").set_attribute("id", agent_id.as_str());
    }
    Ok(())
}

/// Arguments of [`get_agents`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAgents {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub details: Option<bool>,
}

pub fn get_agents(args: &GetAgents) -> Request {
    let mut cmd = XmlCommand::new("get_agents");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "details", args.details);
    cmd.into()
}

/// Arguments of [`modify_agents`]. The changes apply to every agent listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyAgents {
    pub agent_ids: Vec<String>,
    pub authorized: Option<bool>,
    pub update_to_latest: Option<bool>,
    pub comment: Option<String>,
}

pub fn modify_agents(args: &ModifyAgents) -> Result<Request> {
    let mut cmd = XmlCommand::new("modify_agents");
    add_agents(&mut cmd, "modify_agents", &args.agent_ids)?;
    add_bool_element(&mut cmd, "authorized", args.authorized);
    add_bool_element(&mut cmd, "update_to_latest", args.update_to_latest);
    cmd.add_optional_element("comment", args.comment.as_deref());
    Ok(cmd.into())
}

pub fn delete_agents(agent_ids: &[String]) -> Result<Request> {
    let mut cmd = XmlCommand::new("delete_agents");
    add_agents(&mut cmd, "delete_agents", agent_ids)?;
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modify_agents_bytes() {
        let args = ModifyAgents {
            agent_ids: vec!["a1".into(), "a2".into()],
            authorized: Some(true),
            ..Default::default()
        };
        assert_eq!(
            modify_agents(&args).unwrap().to_string(),
            "<modify_agents><agents><agent id=\"a1\"/><agent id=\"a2\"/></agents>\
             <authorized>1</authorized></modify_agents>"
        );
    }

    #[test]
    fn agent_ids_are_required() {
        let err = delete_agents(&[]).unwrap_err();
        assert_eq!(err.argument(), Some("agent_ids"));
        let err = modify_agents(&ModifyAgents {
            agent_ids: vec![String::new()],
            ..Default::default()
        })
        .unwrap_err();
        assert_eq!(err.function(), Some("modify_agents"));
    }

    #[test]
    fn list_agents() {
        let args = GetAgents {
            details: Some(true),
            ..Default::default()
        };
        assert_eq!(get_agents(&args).to_string(), r#"<get_agents details="1"/>"#);
        assert_eq!(
            delete_agents(&["a1".to_string()]).unwrap().to_string(),
            "<delete_agents><agents><agent id=\"a1\"/></agents></delete_agents>"
        );
    }
}
