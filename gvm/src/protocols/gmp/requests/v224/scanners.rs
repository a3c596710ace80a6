use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

gvm_enum! {
    /// Scanner types by their numeric wire code.
    pub enum ScannerType {
        OpenvasScanner = "openvas_scanner_type" => "2" | "openvas",
        CveScanner = "cve_scanner_type" => "3" | "cve",
        GreenboneSensorScanner = "greenbone_sensor_scanner_type" => "5" | "greenbone",
        OpenvasdScanner = "openvasd_scanner_type" => "6" | "openvasd",
    }
}

/// Arguments of [`create_scanner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateScanner {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub scanner_type: ScannerType,
    pub credential_id: Option<String>,
    pub ca_pub: Option<String>,
    pub comment: Option<String>,
}

impl CreateScanner {
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        scanner_type: ScannerType,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            scanner_type,
            credential_id: None,
            ca_pub: None,
            comment: None,
        }
    }
}

pub(crate) fn create_scanner_command(args: &CreateScanner) -> Result<XmlCommand> {
    const FUNCTION: &str = "create_scanner";
    required(FUNCTION, "name", &args.name)?;
    required(FUNCTION, "host", &args.host)?;
    if args.port == 0 {
        return Err(Error::required(FUNCTION, "port"));
    }

    let mut cmd = XmlCommand::new("create_scanner");
    cmd.add_text_element("name", args.name.as_str());
    cmd.add_text_element("host", args.host.as_str());
    cmd.add_text_element("port", args.port.to_string());
    cmd.add_text_element("type", args.scanner_type.value());
    if let Some(credential_id) = args.credential_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("credential").set_attribute("id", credential_id);
    }
    cmd.add_optional_element("ca_pub", args.ca_pub.as_deref());
    cmd.add_optional_element("comment", args.comment.as_deref());
    Ok(cmd)
}

pub fn create_scanner(args: &CreateScanner) -> Result<Request> {
    Ok(create_scanner_command(args)?.into())
}

/// Arguments of [`modify_scanner`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyScanner {
    pub scanner_type: Option<ScannerType>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub comment: Option<String>,
    pub name: Option<String>,
    pub ca_pub: Option<String>,
    pub credential_id: Option<String>,
}

pub(crate) fn modify_scanner_command(
    scanner_id: impl EntityId,
    args: &ModifyScanner,
) -> Result<XmlCommand> {
    const FUNCTION: &str = "modify_scanner";
    let scanner_id = required_id(FUNCTION, "scanner_id", scanner_id)?;
    if args.port == Some(0) {
        return Err(Error::invalid_message(
            FUNCTION,
            "port",
            "The port of a scanner must not be 0",
        ));
    }

    let mut cmd = XmlCommand::new("modify_scanner");
    cmd.set_attribute("scanner_id", scanner_id);
    if let Some(scanner_type) = args.scanner_type {
        cmd.add_text_element("type", scanner_type.value());
    }
    cmd.add_optional_element("host", args.host.as_deref());
    if let Some(port) = args.port {
        cmd.add_text_element("port", port.to_string());
    }
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("ca_pub", args.ca_pub.as_deref());
    if let Some(credential_id) = args.credential_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("credential").set_attribute("id", credential_id);
    }
    Ok(cmd)
}

pub fn modify_scanner(scanner_id: impl EntityId, args: &ModifyScanner) -> Result<Request> {
    Ok(modify_scanner_command(scanner_id, args)?.into())
}

pub fn clone_scanner(scanner_id: impl EntityId) -> Result<Request> {
    clone_entity("scanner", scanner_id)
}

pub fn delete_scanner(scanner_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("scanner", scanner_id, ultimate)
}

/// Arguments of [`get_scanners`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetScanners {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub details: Option<bool>,
}

pub fn get_scanners(args: &GetScanners) -> Request {
    let mut cmd = XmlCommand::new("get_scanners");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "details", args.details);
    cmd.into()
}

pub fn get_scanner(scanner_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("scanner", scanner_id)?;
    cmd.set_attribute("details", "1");
    Ok(cmd.into())
}

/// Ask the manager to check that a scanner is reachable and usable.
pub fn verify_scanner(scanner_id: impl EntityId) -> Result<Request> {
    let scanner_id = required_id("verify_scanner", "scanner_id", scanner_id)?;
    let mut cmd = XmlCommand::new("verify_scanner");
    cmd.set_attribute("scanner_id", scanner_id);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scanner_type_codes() {
        assert_eq!(ScannerType::parse("openvas").unwrap(), ScannerType::OpenvasScanner);
        assert_eq!(ScannerType::parse("greenbone").unwrap(), ScannerType::GreenboneSensorScanner);
        assert_eq!(ScannerType::parse("6").unwrap(), ScannerType::OpenvasdScanner);
        assert!(ScannerType::parse("1").is_err());
        assert!(ScannerType::parse("4").is_err());
    }

    #[test]
    fn create_scanner_bytes() {
        let mut args = CreateScanner::new("s", "localhost", 9391, ScannerType::OpenvasScanner);
        args.credential_id = Some("c1".into());
        assert_eq!(
            create_scanner(&args).unwrap().to_string(),
            "<create_scanner><name>s</name><host>localhost</host><port>9391</port>\
             <type>2</type><credential id=\"c1\"/></create_scanner>"
        );
    }

    #[test]
    fn scanner_port_must_not_be_zero() {
        let args = CreateScanner::new("s", "localhost", 0, ScannerType::CveScanner);
        let err = create_scanner(&args).unwrap_err();
        assert_eq!(err.argument(), Some("port"));

        let err = modify_scanner(
            "s1",
            &ModifyScanner {
                port: Some(0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn verify() {
        assert_eq!(
            verify_scanner("s1").unwrap().to_string(),
            r#"<verify_scanner scanner_id="s1"/>"#
        );
    }
}
