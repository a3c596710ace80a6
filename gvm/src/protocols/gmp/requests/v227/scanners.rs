use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{v224, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

use super::ScannerType;

fn add_relay(
    cmd: &mut XmlCommand,
    function: &str,
    relay_host: Option<&str>,
    relay_port: Option<u16>,
) -> Result<()> {
    if relay_port == Some(0) {
        return Err(Error::invalid_message(
            function,
            "relay_port",
            "The relay port must not be 0",
        ));
    }
    cmd.add_optional_element("relay_host", relay_host);
    if let Some(relay_port) = relay_port {
        cmd.add_text_element("relay_port", relay_port.to_string());
    }
    Ok(())
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
    pub relay_host: Option<String>,
    pub relay_port: Option<u16>,
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
            relay_host: None,
            relay_port: None,
        }
    }
}

pub fn create_scanner(args: &CreateScanner) -> Result<Request> {
    let base = v224::CreateScanner {
        name: args.name.clone(),
        host: args.host.clone(),
        port: args.port,
        scanner_type: args.scanner_type,
        credential_id: args.credential_id.clone(),
        ca_pub: args.ca_pub.clone(),
        comment: args.comment.clone(),
    };
    let mut cmd = v224::create_scanner_command(&base)?;
    add_relay(
        &mut cmd,
        "create_scanner",
        args.relay_host.as_deref(),
        args.relay_port,
    )?;
    Ok(cmd.into())
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
    pub relay_host: Option<String>,
    pub relay_port: Option<u16>,
}

pub fn modify_scanner(scanner_id: impl EntityId, args: &ModifyScanner) -> Result<Request> {
    let base = v224::ModifyScanner {
        scanner_type: args.scanner_type,
        host: args.host.clone(),
        port: args.port,
        comment: args.comment.clone(),
        name: args.name.clone(),
        ca_pub: args.ca_pub.clone(),
        credential_id: args.credential_id.clone(),
    };
    let mut cmd = v224::modify_scanner_command(scanner_id, &base)?;
    add_relay(
        &mut cmd,
        "modify_scanner",
        args.relay_host.as_deref(),
        args.relay_port,
    )?;
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_scanner_with_relay() {
        let args = CreateScanner {
            relay_host: Some("relay.example".into()),
            relay_port: Some(9391),
            ..CreateScanner::new("sensor", "10.0.0.5", 9390, ScannerType::GreenboneSensorScanner)
        };
        assert_eq!(
            create_scanner(&args).unwrap().to_string(),
            "<create_scanner><name>sensor</name><host>10.0.0.5</host><port>9390</port>\
             <type>5</type><relay_host>relay.example</relay_host>\
             <relay_port>9391</relay_port></create_scanner>"
        );
    }

    #[test]
    fn without_relay_matches_earlier_dialect() {
        let args = CreateScanner::new("s", "localhost", 9391, ScannerType::OpenvasScanner);
        let base = v224::CreateScanner::new("s", "localhost", 9391, ScannerType::OpenvasScanner);
        assert_eq!(
            create_scanner(&args).unwrap(),
            v224::create_scanner(&base).unwrap()
        );
    }

    #[test]
    fn modify_scanner_relay() {
        let args = ModifyScanner {
            relay_host: Some("relay".into()),
            ..Default::default()
        };
        assert_eq!(
            modify_scanner("s1", &args).unwrap().to_string(),
            "<modify_scanner scanner_id=\"s1\"><relay_host>relay</relay_host></modify_scanner>"
        );
        let args = ModifyScanner {
            relay_port: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            modify_scanner("s1", &args).unwrap_err(),
            Error::InvalidArgument { .. }
        ));
    }
}
