use crate::protocols::gmp::requests::{GvmEnum, WireEntityType};

gvm_enum! {
    /// Types of entities a tag, permission or aggregate can refer to.
    pub enum EntityType {
        Alert = "alert" => "alert",
        Asset = "asset" => "asset",
        Audit = "audit" => "audit",
        CertBundAdv = "cert_bund_adv" => "cert_bund_adv",
        Cpe = "cpe" => "cpe",
        Credential = "credential" => "credential",
        Cve = "cve" => "cve",
        DfnCertAdv = "dfn_cert_adv" => "dfn_cert_adv",
        Filter = "filter" => "filter",
        Group = "group" => "group",
        Host = "host" => "host",
        Info = "info" => "info",
        Note = "note" => "note",
        Nvt = "nvt" => "nvt",
        OperatingSystem = "operating_system" => "os",
        Override = "override" => "override",
        Permission = "permission" => "permission",
        Policy = "policy" => "policy",
        PortList = "port_list" => "port_list",
        Report = "report" => "report",
        ReportFormat = "report_format" => "report_format",
        Result = "result" => "result",
        Role = "role" => "role",
        ScanConfig = "scan_config" => "config",
        Scanner = "scanner" => "scanner",
        Schedule = "schedule" => "schedule",
        Tag = "tag" => "tag",
        Target = "target" => "target",
        Task = "task" => "task",
        Ticket = "ticket" => "ticket",
        TlsCertificate = "tls_certificate" => "tls_certificate",
        User = "user" => "user",
        Vulnerability = "vulnerability" => "vuln",
    }
}

impl WireEntityType for EntityType {
    fn wire_type(self) -> &'static str {
        match self {
            EntityType::Audit => EntityType::Task.value(),
            EntityType::Policy => EntityType::ScanConfig.value(),
            _ => self.value(),
        }
    }

    fn usage_type(self) -> Option<&'static str> {
        match self {
            EntityType::Audit => Some("audit"),
            EntityType::Policy => Some("policy"),
            EntityType::ScanConfig | EntityType::Task => Some("scan"),
            _ => None,
        }
    }
}

gvm_enum! {
    /// Types of entities a filter applies to.
    pub enum FilterType {
        Alert = "alert" => "alert",
        Asset = "asset" => "asset",
        ScanConfig = "scan_config" => "config",
        Credential = "credential" => "credential",
        Filter = "filter" => "filter",
        Group = "group" => "group",
        Host = "host" => "host",
        Note = "note" => "note",
        OperatingSystem = "operating_system" => "os",
        Override = "override" => "override",
        Permission = "permission" => "permission",
        PortList = "port_list" => "port_list",
        Report = "report" => "report",
        ReportFormat = "report_format" => "report_format",
        Result = "result" => "result",
        Role = "role" => "role",
        Schedule = "schedule" => "schedule",
        AllSecinfo = "all_secinfo" => "secinfo",
        Tag = "tag" => "tag",
        Target = "target" => "target",
        Task = "task" => "task",
        Ticket = "ticket" => "ticket",
        TlsCertificate = "tls_certificate" => "tls_certificate",
        User = "user" => "user",
        Vulnerability = "vulnerability" => "vuln",
    }
}
