use crate::error::Result;
use crate::protocols::gmp::requests::{required, required_id, set_bool, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Create a host asset.
pub fn create_host(name: &str, comment: Option<&str>) -> Result<Request> {
    required("create_host", "name", name)?;

    let mut cmd = XmlCommand::new("create_asset");
    let asset = cmd.add_element("asset");
    asset.add_text_element("type", "host");
    asset.add_text_element("name", name);
    asset.add_optional_element("comment", comment);
    Ok(cmd.into())
}

/// Modify the comment of a host asset. `None` clears it.
pub fn modify_host(host_id: impl EntityId, comment: Option<&str>) -> Result<Request> {
    let host_id = required_id("modify_host", "host_id", host_id)?;

    let mut cmd = XmlCommand::new("modify_asset");
    cmd.set_attribute("asset_id", host_id);
    let element = cmd.add_element("comment");
    if let Some(comment) = comment {
        element.set_text(comment);
    }
    Ok(cmd.into())
}

pub fn delete_host(host_id: impl EntityId) -> Result<Request> {
    let host_id = required_id("delete_host", "host_id", host_id)?;
    let mut cmd = XmlCommand::new("delete_asset");
    cmd.set_attribute("asset_id", host_id);
    Ok(cmd.into())
}

pub fn get_hosts(
    filter_string: Option<&str>,
    filter_id: Option<&str>,
    details: Option<bool>,
) -> Request {
    let mut cmd = XmlCommand::new("get_assets");
    cmd.set_attribute("type", "host");
    cmd.add_filter(filter_string, filter_id);
    set_bool(&mut cmd, "details", details);
    cmd.into()
}

pub fn get_host(host_id: impl EntityId, details: Option<bool>) -> Result<Request> {
    let host_id = required_id("get_host", "host_id", host_id)?;
    let mut cmd = XmlCommand::new("get_assets");
    cmd.set_attribute("asset_id", host_id)
        .set_attribute("type", "host");
    set_bool(&mut cmd, "details", details);
    Ok(cmd.into())
}
