use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

gvm_enum! {
    pub enum PortRangeType {
        Tcp = "tcp" => "TCP",
        Udp = "udp" => "UDP",
    }
}

/// Create a port list from a range specification like `T:1-1234,U:53`.
pub fn create_port_list(name: &str, port_range: &str, comment: Option<&str>) -> Result<Request> {
    required("create_port_list", "name", name)?;
    required("create_port_list", "port_range", port_range)?;

    let mut cmd = XmlCommand::new("create_port_list");
    cmd.add_text_element("name", name);
    cmd.add_text_element("port_range", port_range);
    cmd.add_optional_element("comment", comment);
    Ok(cmd.into())
}

/// Add a range of ports to a port list. `start` and `end` must be non-zero.
pub fn create_port_range(
    port_list_id: impl EntityId,
    start: u16,
    end: u16,
    port_range_type: PortRangeType,
    comment: Option<&str>,
) -> Result<Request> {
    const FUNCTION: &str = "create_port_range";
    let port_list_id = required_id(FUNCTION, "port_list_id", port_list_id)?;
    if start == 0 {
        return Err(Error::required(FUNCTION, "start"));
    }
    if end == 0 {
        return Err(Error::required(FUNCTION, "end"));
    }

    let mut cmd = XmlCommand::new("create_port_range");
    cmd.add_element("port_list").set_attribute("id", port_list_id);
    cmd.add_text_element("start", start.to_string());
    cmd.add_text_element("end", end.to_string());
    cmd.add_text_element("type", port_range_type.value());
    cmd.add_optional_element("comment", comment);
    Ok(cmd.into())
}

pub fn modify_port_list(
    port_list_id: impl EntityId,
    name: Option<&str>,
    comment: Option<&str>,
) -> Result<Request> {
    let port_list_id = required_id("modify_port_list", "port_list_id", port_list_id)?;

    let mut cmd = XmlCommand::new("modify_port_list");
    cmd.set_attribute("port_list_id", port_list_id);
    cmd.add_optional_element("comment", comment);
    cmd.add_optional_element("name", name);
    Ok(cmd.into())
}

pub fn clone_port_list(port_list_id: impl EntityId) -> Result<Request> {
    clone_entity("port_list", port_list_id)
}

pub fn delete_port_list(port_list_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("port_list", port_list_id, ultimate)
}

pub fn delete_port_range(port_range_id: impl EntityId) -> Result<Request> {
    let port_range_id = required_id("delete_port_range", "port_range_id", port_range_id)?;
    let mut cmd = XmlCommand::new("delete_port_range");
    cmd.set_attribute("port_range_id", port_range_id);
    Ok(cmd.into())
}

/// Arguments of [`get_port_lists`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPortLists {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub details: Option<bool>,
    pub targets: Option<bool>,
    pub trash: Option<bool>,
}

pub fn get_port_lists(args: &GetPortLists) -> Request {
    let mut cmd = XmlCommand::new("get_port_lists");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "targets", args.targets);
    set_bool(&mut cmd, "trash", args.trash);
    cmd.into()
}

pub fn get_port_list(port_list_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("port_list", port_list_id)?;
    cmd.set_attribute("details", "1");
    Ok(cmd.into())
}

/// Import a port list exported as XML.
pub fn import_port_list(port_list: &str) -> Result<Request> {
    required("import_port_list", "port_list", port_list)?;

    let mut cmd = XmlCommand::new("create_port_list");
    cmd.append_xml_str(port_list).map_err(|e| {
        Error::invalid_message(
            "import_port_list",
            "port_list",
            format!("Invalid xml passed as port_list to import_port_list {}", e),
        )
    })?;
    Ok(cmd.into())
}
