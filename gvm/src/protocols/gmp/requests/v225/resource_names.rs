use crate::error::Result;
use crate::protocols::gmp::requests::{required_id, EntityId, GvmEnum};
use crate::sansio::Request;
use crate::xml::XmlCommand;

gvm_enum! {
    /// Types of resources whose names can be looked up.
    pub enum ResourceType {
        Alert = "alert" => "alert",
        CertBundAdv = "cert_bund_adv" => "cert_bund_adv",
        ScanConfig = "scan_config" => "config",
        Cpe = "cpe" => "cpe",
        Credential = "credential" => "credential",
        Cve = "cve" => "cve",
        DfnCertAdv = "dfn_cert_adv" => "dfn_cert_adv",
        Filter = "filter" => "filter",
        Group = "group" => "group",
        Host = "host" => "host",
        Note = "note" => "note",
        Nvt = "nvt" => "nvt",
        OperatingSystem = "operating_system" => "os",
        Override = "override" => "override",
        Permission = "permission" => "permission",
        PortList = "port_list" => "port_list",
        ReportFormat = "report_format" => "report_format",
        Report = "report" => "report",
        Result = "result" => "result",
        Role = "role" => "role",
        Scanner = "scanner" => "scanner",
        Schedule = "schedule" => "schedule",
        Target = "target" => "target",
        Task = "task" => "task",
        TlsCertificate = "tls_certificate" => "tls_certificate",
        User = "user" => "user",
    }
}

/// List id and name of all resources of a type.
pub fn get_resource_names<R: GvmEnum>(resource_type: R, filter_string: Option<&str>) -> Request {
    let mut cmd = XmlCommand::new("get_resource_names");
    cmd.set_attribute("type", resource_type.value());
    cmd.add_filter(filter_string, None);
    cmd.into()
}

pub fn get_resource_name<R: GvmEnum>(
    resource_id: impl EntityId,
    resource_type: R,
) -> Result<Request> {
    let resource_id = required_id("get_resource_name", "resource_id", resource_id)?;

    let mut cmd = XmlCommand::new("get_resource_names");
    cmd.set_attribute("resource_id", resource_id)
        .set_attribute("type", resource_type.value());
    Ok(cmd.into())
}
