use crate::error::Result;
use crate::protocols::gmp::requests::{get_entity, required_id, set_bool, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Arguments of [`get_agent_installers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAgentInstallers {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub details: Option<bool>,
}

pub fn get_agent_installers(args: &GetAgentInstallers) -> Request {
    let mut cmd = XmlCommand::new("get_agent_installers");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "details", args.details);
    cmd.into()
}

pub fn get_agent_installer(agent_installer_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("agent_installer", agent_installer_id)?;
    cmd.set_attribute("details", "1");
    Ok(cmd.into())
}

/// Download an installer. The file arrives base64 encoded in the response.
pub fn get_agent_installer_file(agent_installer_id: impl EntityId) -> Result<Request> {
    let agent_installer_id =
        required_id("get_agent_installer_file", "agent_installer_id", agent_installer_id)?;
    let mut cmd = XmlCommand::new("get_agent_installer_file");
    cmd.set_attribute("agent_installer_id", agent_installer_id);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_installers() {
        assert_eq!(
            get_agent_installers(&Default::default()).to_string(),
            "<get_agent_installers/>"
        );
        assert_eq!(
            get_agent_installer("ai1").unwrap().to_string(),
            r#"<get_agent_installers agent_installer_id="ai1" details="1"/>"#
        );
        assert_eq!(
            get_agent_installer_file("ai1").unwrap().to_string(),
            r#"<get_agent_installer_file agent_installer_id="ai1"/>"#
        );
        let err = get_agent_installer_file("").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Required argument agent_installer_id for get_agent_installer_file"
        );
    }
}
