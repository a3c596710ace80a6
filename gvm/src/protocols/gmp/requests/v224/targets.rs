use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    add_bool_element, clone_entity, delete_entity, get_entity, required, required_id, set_bool,
    EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::{to_comma_list, XmlCommand, XmlCommandElement};

gvm_enum! {
    /// Methods used to decide whether a host is alive before scanning it.
    pub enum AliveTest {
        ScanConfigDefault = "scan_config_default" => "Scan Config Default",
        IcmpPing = "icmp_ping" => "ICMP Ping",
        TcpAckServicePing = "tcp_ack_service_ping" => "TCP-ACK Service Ping",
        TcpSynServicePing = "tcp_syn_service_ping" => "TCP-SYN Service Ping",
        ArpPing = "arp_ping" => "ARP Ping",
        IcmpAndTcpAckServicePing = "icmp_and_tcp_ack_service_ping" => "ICMP & TCP-ACK Service Ping",
        IcmpAndArpPing = "icmp_and_arp_ping" => "ICMP & ARP Ping",
        TcpAckServiceAndArpPing = "tcp_ack_service_and_arp_ping" => "TCP-ACK Service & ARP Ping",
        IcmpTcpAckServiceAndArpPing = "icmp_tcp_ack_service_and_arp_ping"
            => "ICMP, TCP-ACK Service & ARP Ping",
        ConsiderAlive = "consider_alive" => "Consider Alive",
    }
}

/// Credentials and lookup options shared by create and modify.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetOptions {
    pub ssh_credential_id: Option<String>,
    pub ssh_credential_port: Option<u16>,
    pub smb_credential_id: Option<String>,
    pub esxi_credential_id: Option<String>,
    pub snmp_credential_id: Option<String>,
    pub alive_test: Option<AliveTest>,
    pub allow_simultaneous_ips: Option<bool>,
    pub reverse_lookup_only: Option<bool>,
    pub reverse_lookup_unify: Option<bool>,
}

fn add_target_options(
    cmd: &mut XmlCommandElement,
    function: &str,
    options: &TargetOptions,
) -> Result<()> {
    match options.ssh_credential_id.as_deref().filter(|id| !id.is_empty()) {
        Some(ssh_credential_id) => {
            let ssh = cmd.add_element("ssh_credential");
            ssh.set_attribute("id", ssh_credential_id);
            if let Some(port) = options.ssh_credential_port {
                if port == 0 {
                    return Err(Error::invalid_message(
                        function,
                        "ssh_credential_port",
                        "The ssh credential port must not be 0",
                    ));
                }
                ssh.add_text_element("port", port.to_string());
            }
        }
        None if options.ssh_credential_port.is_some() => {
            return Err(Error::required(function, "ssh_credential_id"));
        }
        None => {}
    }
    for (element, id) in [
        ("smb_credential", &options.smb_credential_id),
        ("esxi_credential", &options.esxi_credential_id),
        ("snmp_credential", &options.snmp_credential_id),
    ] {
        if let Some(id) = id.as_deref().filter(|id| !id.is_empty()) {
            cmd.add_element(element).set_attribute("id", id);
        }
    }
    if let Some(alive_test) = options.alive_test {
        cmd.add_text_element("alive_tests", alive_test.value());
    }
    add_bool_element(cmd, "allow_simultaneous_ips", options.allow_simultaneous_ips);
    add_bool_element(cmd, "reverse_lookup_only", options.reverse_lookup_only);
    add_bool_element(cmd, "reverse_lookup_unify", options.reverse_lookup_unify);
    Ok(())
}

/// Arguments of [`create_target`].
///
/// Exactly one of `hosts` and `asset_hosts_filter` selects the hosts. Ports are
/// given inline as `port_range` (for example `T:1-1234,U:53`) or by
/// `port_list_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTarget {
    pub name: String,
    pub hosts: Option<Vec<String>>,
    pub asset_hosts_filter: Option<String>,
    pub comment: Option<String>,
    pub exclude_hosts: Option<Vec<String>>,
    pub options: TargetOptions,
    pub port_range: Option<String>,
    pub port_list_id: Option<String>,
}

impl CreateTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

pub fn create_target(args: &CreateTarget) -> Result<Request> {
    const FUNCTION: &str = "create_target";
    required(FUNCTION, "name", &args.name)?;

    let hosts = args.hosts.as_deref().filter(|hosts| !hosts.is_empty());
    let asset_hosts_filter = args.asset_hosts_filter.as_deref().filter(|f| !f.is_empty());

    let mut cmd = XmlCommand::new("create_target");
    cmd.add_text_element("name", args.name.as_str());
    match (hosts, asset_hosts_filter) {
        (Some(_), Some(_)) => {
            return Err(Error::invalid_message(
                FUNCTION,
                "hosts",
                "create_target accepts either hosts or asset_hosts_filter argument",
            ))
        }
        (None, None) => return Err(Error::required(FUNCTION, "hosts or asset_hosts_filter")),
        (Some(hosts), None) => {
            cmd.add_text_element("hosts", to_comma_list(hosts));
        }
        (None, Some(filter)) => {
            cmd.add_element("asset_hosts").set_attribute("filter", filter);
        }
    }
    cmd.add_optional_element("comment", args.comment.as_deref());
    if let Some(exclude_hosts) = args.exclude_hosts.as_deref().filter(|h| !h.is_empty()) {
        cmd.add_text_element("exclude_hosts", to_comma_list(exclude_hosts));
    }
    add_target_options(&mut cmd, FUNCTION, &args.options)?;
    cmd.add_optional_element("port_range", args.port_range.as_deref());
    if let Some(port_list_id) = args.port_list_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("port_list").set_attribute("id", port_list_id);
    }
    Ok(cmd.into())
}

/// Arguments of [`modify_target`].
///
/// Changing `hosts` without giving `exclude_hosts` clears the exclusion list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyTarget {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub hosts: Option<Vec<String>>,
    pub exclude_hosts: Option<Vec<String>>,
    pub options: TargetOptions,
    pub port_list_id: Option<String>,
}

pub fn modify_target(target_id: impl EntityId, args: &ModifyTarget) -> Result<Request> {
    const FUNCTION: &str = "modify_target";
    let target_id = required_id(FUNCTION, "target_id", target_id)?;

    let mut cmd = XmlCommand::new("modify_target");
    cmd.set_attribute("target_id", target_id);
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    if let Some(hosts) = args.hosts.as_deref().filter(|h| !h.is_empty()) {
        cmd.add_text_element("hosts", to_comma_list(hosts));
        if args.exclude_hosts.is_none() {
            cmd.add_element("exclude_hosts");
        }
    }
    if let Some(exclude_hosts) = &args.exclude_hosts {
        cmd.add_text_element("exclude_hosts", to_comma_list(exclude_hosts));
    }
    add_target_options(&mut cmd, FUNCTION, &args.options)?;
    if let Some(port_list_id) = args.port_list_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("port_list").set_attribute("id", port_list_id);
    }
    Ok(cmd.into())
}

pub fn clone_target(target_id: impl EntityId) -> Result<Request> {
    clone_entity("target", target_id)
}

pub fn delete_target(target_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("target", target_id, ultimate)
}

/// Arguments of [`get_targets`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTargets {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub tasks: Option<bool>,
}

pub fn get_targets(args: &GetTargets) -> Request {
    let mut cmd = XmlCommand::new("get_targets");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "tasks", args.tasks);
    cmd.into()
}

pub fn get_target(target_id: impl EntityId, tasks: Option<bool>) -> Result<Request> {
    let mut cmd = get_entity("target", target_id)?;
    set_bool(&mut cmd, "tasks", tasks);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(hosts: &[&str]) -> Option<Vec<String>> {
        Some(hosts.iter().map(|h| h.to_string()).collect())
    }

    #[test]
    fn create_target_bytes() {
        let args = CreateTarget {
            hosts: hosts(&["192.168.0.1", "192.168.0.2"]),
            exclude_hosts: hosts(&["192.168.0.3"]),
            options: TargetOptions {
                ssh_credential_id: Some("c1".into()),
                ssh_credential_port: Some(22),
                alive_test: Some(AliveTest::IcmpAndArpPing),
                ..Default::default()
            },
            port_range: Some("T:1-1234".into()),
            ..CreateTarget::new("t")
        };
        assert_eq!(
            create_target(&args).unwrap().to_string(),
            "<create_target><name>t</name><hosts>192.168.0.1,192.168.0.2</hosts>\
             <exclude_hosts>192.168.0.3</exclude_hosts>\
             <ssh_credential id=\"c1\"><port>22</port></ssh_credential>\
             <alive_tests>ICMP &amp; ARP Ping</alive_tests>\
             <port_range>T:1-1234</port_range></create_target>"
        );
    }

    #[test]
    fn create_target_host_selection_is_exclusive() {
        let err = create_target(&CreateTarget::new("t")).unwrap_err();
        assert!(matches!(err, Error::RequiredArgument { .. }));

        let args = CreateTarget {
            hosts: hosts(&["h"]),
            asset_hosts_filter: Some("name=h".into()),
            ..CreateTarget::new("t")
        };
        let err = create_target(&args).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));

        let args = CreateTarget {
            asset_hosts_filter: Some("name=h".into()),
            port_list_id: Some("pl".into()),
            ..CreateTarget::new("t")
        };
        assert_eq!(
            create_target(&args).unwrap().to_string(),
            "<create_target><name>t</name><asset_hosts filter=\"name=h\"/>\
             <port_list id=\"pl\"/></create_target>"
        );
    }

    #[test]
    fn modify_hosts_clears_exclusions() {
        let args = ModifyTarget {
            hosts: hosts(&["10.0.0.1"]),
            ..Default::default()
        };
        assert_eq!(
            modify_target("t1", &args).unwrap().to_string(),
            "<modify_target target_id=\"t1\"><hosts>10.0.0.1</hosts><exclude_hosts/>\
             </modify_target>"
        );

        let args = ModifyTarget {
            hosts: hosts(&["10.0.0.1"]),
            exclude_hosts: hosts(&["10.0.0.2"]),
            ..Default::default()
        };
        assert_eq!(
            modify_target("t1", &args).unwrap().to_string(),
            "<modify_target target_id=\"t1\"><hosts>10.0.0.1</hosts>\
             <exclude_hosts>10.0.0.2</exclude_hosts></modify_target>"
        );
    }

    #[test]
    fn alive_test_spellings() {
        for input in [
            "ICMP, TCP-ACK Service & ARP Ping",
            "icmp tcp ack service and arp ping",
            "ICMP_TCP-ACK_SERVICE_AND_ARP_PING",
        ] {
            assert_eq!(
                AliveTest::parse(input).unwrap(),
                AliveTest::IcmpTcpAckServiceAndArpPing
            );
        }
        assert!(AliveTest::parse("carrier pigeon").is_err());
    }

    #[test]
    fn ssh_port_needs_credential() {
        let args = CreateTarget {
            hosts: hosts(&["h"]),
            options: TargetOptions {
                ssh_credential_port: Some(22),
                ..Default::default()
            },
            ..CreateTarget::new("t")
        };
        let err = create_target(&args).unwrap_err();
        assert_eq!(err.argument(), Some("ssh_credential_id"));
    }
}
