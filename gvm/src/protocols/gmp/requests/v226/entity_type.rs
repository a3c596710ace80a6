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
        ReportConfig = "report_config" => "report_config",
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
        ReportConfig = "report_config" => "report_config",
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
        ReportConfig = "report_config" => "report_config",
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::gmp::requests::{v224, v225};

    #[test]
    fn report_config_is_new() {
        assert_eq!(
            FilterType::parse("report config").unwrap(),
            FilterType::ReportConfig
        );
        assert_eq!(EntityType::ReportConfig.wire_type(), "report_config");
        assert_eq!(ResourceType::ReportConfig.value(), "report_config");
        assert!(v224::FilterType::parse("report_config").is_err());
        assert!(v225::ResourceType::parse("report_config").is_err());
    }

    #[test]
    fn earlier_members_are_kept() {
        for filter_type in v224::FilterType::ALL {
            let widened = FilterType::parse(filter_type.value()).unwrap();
            assert_eq!(widened.name(), filter_type.name());
        }
        for entity_type in v224::EntityType::ALL {
            let widened = EntityType::parse(entity_type.value()).unwrap();
            assert_eq!(widened.wire_type(), entity_type.wire_type());
            assert_eq!(widened.usage_type(), entity_type.usage_type());
        }
        for resource_type in v225::ResourceType::ALL {
            assert_eq!(
                ResourceType::parse(resource_type.value()).unwrap().name(),
                resource_type.name()
            );
        }
    }
}
