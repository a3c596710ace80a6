use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{required_id, EntityId};
use crate::sansio::Request;
use crate::xml::{to_base64, XmlCommand};

pub fn get_user_settings(filter_string: Option<&str>) -> Request {
    let mut cmd = XmlCommand::new("get_settings");
    cmd.set_optional_attribute("filter", filter_string);
    cmd.into()
}

pub fn get_user_setting(setting_id: impl EntityId) -> Result<Request> {
    let setting_id = required_id("get_user_setting", "setting_id", setting_id)?;
    let mut cmd = XmlCommand::new("get_settings");
    cmd.set_attribute("setting_id", setting_id);
    Ok(cmd.into())
}

/// Change a setting selected by id or by name. The value is sent base64
/// encoded.
pub fn modify_user_setting(
    setting_id: Option<&str>,
    name: Option<&str>,
    value: &str,
) -> Result<Request> {
    const FUNCTION: &str = "modify_user_setting";

    let mut cmd = XmlCommand::new("modify_setting");
    match (
        setting_id.filter(|id| !id.is_empty()),
        name.filter(|n| !n.is_empty()),
    ) {
        (Some(setting_id), _) => {
            cmd.set_attribute("setting_id", setting_id);
        }
        (None, Some(name)) => {
            cmd.add_text_element("name", name);
        }
        (None, None) => {
            return Err(Error::required_message(
                FUNCTION,
                "setting_id",
                "modify_user_setting requires a setting_id or name argument",
            ))
        }
    }
    cmd.add_text_element("value", to_base64(value));
    Ok(cmd.into())
}
