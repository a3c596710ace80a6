//! SecInfo: CVEs, CPEs, CERT advisories and NVTs.

use crate::error::Result;
use crate::protocols::gmp::requests::{required, required_id, set_bool, EntityId, GvmEnum};
use crate::sansio::Request;
use crate::xml::XmlCommand;

gvm_enum! {
    pub enum InfoType {
        CertBundAdv = "cert_bund_adv" => "CERT_BUND_ADV",
        Cpe = "cpe" => "CPE",
        Cve = "cve" => "CVE",
        DfnCertAdv = "dfn_cert_adv" => "DFN_CERT_ADV",
        Nvt = "nvt" => "NVT",
    }
}

/// Arguments of [`get_info_list`] and its typed shortcuts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetInfoList {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub name: Option<String>,
    pub details: Option<bool>,
}

pub fn get_info_list(info_type: InfoType, args: &GetInfoList) -> Request {
    let mut cmd = XmlCommand::new("get_info");
    cmd.set_attribute("type", info_type.value());
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    cmd.set_optional_attribute("name", args.name.as_deref());
    set_bool(&mut cmd, "details", args.details);
    cmd.into()
}

pub fn get_info(info_id: impl EntityId, info_type: InfoType) -> Result<Request> {
    let info_id = required_id("get_info", "info_id", info_id)?;

    let mut cmd = XmlCommand::new("get_info");
    cmd.set_attribute("info_id", info_id)
        .set_attribute("type", info_type.value())
        .set_attribute("details", "1");
    Ok(cmd.into())
}

pub fn get_cves(args: &GetInfoList) -> Request {
    get_info_list(InfoType::Cve, args)
}

pub fn get_cve(cve_id: impl EntityId) -> Result<Request> {
    get_info(cve_id, InfoType::Cve)
}

pub fn get_cpes(args: &GetInfoList) -> Request {
    get_info_list(InfoType::Cpe, args)
}

pub fn get_cpe(cpe_id: impl EntityId) -> Result<Request> {
    get_info(cpe_id, InfoType::Cpe)
}

pub fn get_cert_bund_advisories(args: &GetInfoList) -> Request {
    get_info_list(InfoType::CertBundAdv, args)
}

pub fn get_cert_bund_advisory(cert_id: impl EntityId) -> Result<Request> {
    get_info(cert_id, InfoType::CertBundAdv)
}

pub fn get_dfn_cert_advisories(args: &GetInfoList) -> Request {
    get_info_list(InfoType::DfnCertAdv, args)
}

pub fn get_dfn_cert_advisory(cert_id: impl EntityId) -> Result<Request> {
    get_info(cert_id, InfoType::DfnCertAdv)
}

pub fn get_nvts(args: &GetInfoList) -> Request {
    get_info_list(InfoType::Nvt, args)
}

pub fn get_nvt(nvt_id: impl EntityId) -> Result<Request> {
    get_info(nvt_id, InfoType::Nvt)
}

/// Arguments of [`get_scan_config_nvts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetScanConfigNvts {
    pub details: Option<bool>,
    pub preferences: Option<bool>,
    pub preference_count: Option<bool>,
    pub timeout: Option<bool>,
    pub config_id: Option<String>,
    pub preferences_config_id: Option<String>,
    pub family: Option<String>,
    pub sort_order: Option<String>,
    pub sort_field: Option<String>,
}

/// List NVTs with their scan config specific data.
pub fn get_scan_config_nvts(args: &GetScanConfigNvts) -> Request {
    let mut cmd = XmlCommand::new("get_nvts");
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "preferences", args.preferences);
    set_bool(&mut cmd, "preference_count", args.preference_count);
    set_bool(&mut cmd, "timeout", args.timeout);
    cmd.set_optional_attribute("config_id", args.config_id.as_deref());
    cmd.set_optional_attribute("preferences_config_id", args.preferences_config_id.as_deref());
    cmd.set_optional_attribute("family", args.family.as_deref());
    cmd.set_optional_attribute("sort_order", args.sort_order.as_deref());
    cmd.set_optional_attribute("sort_field", args.sort_field.as_deref());
    cmd.into()
}

pub fn get_scan_config_nvt(nvt_oid: &str) -> Result<Request> {
    required("get_scan_config_nvt", "nvt_oid", nvt_oid)?;

    let mut cmd = XmlCommand::new("get_nvts");
    cmd.set_attribute("nvt_oid", nvt_oid)
        .set_attribute("details", "1")
        .set_attribute("preferences", "1")
        .set_attribute("preference_count", "1");
    Ok(cmd.into())
}

pub fn get_nvt_families(sort_order: Option<&str>) -> Request {
    let mut cmd = XmlCommand::new("get_nvt_families");
    cmd.set_optional_attribute("sort_order", sort_order);
    cmd.into()
}

/// List the preferences of all NVTs or of the NVT `nvt_oid`.
pub fn get_nvt_preferences(nvt_oid: Option<&str>) -> Request {
    let mut cmd = XmlCommand::new("get_preferences");
    cmd.set_optional_attribute("nvt_oid", nvt_oid);
    cmd.into()
}

pub fn get_nvt_preference(name: &str, nvt_oid: Option<&str>) -> Result<Request> {
    required("get_nvt_preference", "name", name)?;

    let mut cmd = XmlCommand::new("get_preferences");
    cmd.set_attribute("preference", name);
    cmd.set_optional_attribute("nvt_oid", nvt_oid);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_list() {
        let request = get_cves(&GetInfoList {
            name: Some("CVE-2024-1".into()),
            details: Some(true),
            ..Default::default()
        });
        assert_eq!(
            request.to_string(),
            r#"<get_info type="CVE" name="CVE-2024-1" details="1"/>"#
        );
        assert_eq!(
            get_info_list(InfoType::DfnCertAdv, &Default::default()).to_string(),
            r#"<get_info type="DFN_CERT_ADV"/>"#
        );
    }

    #[test]
    fn single_info() {
        assert_eq!(
            get_nvt("1.3.6.1.4.1.25623.1.0.1").unwrap().to_string(),
            r#"<get_info info_id="1.3.6.1.4.1.25623.1.0.1" type="NVT" details="1"/>"#
        );
        assert!(get_cpe("").is_err());
    }

    #[test]
    fn nvt_preferences() {
        assert_eq!(
            get_nvt_preference("Timeout", Some("1.2.3")).unwrap().to_string(),
            r#"<get_preferences preference="Timeout" nvt_oid="1.2.3"/>"#
        );
        assert_eq!(get_nvt_preferences(None).to_string(), "<get_preferences/>");
        assert_eq!(
            get_scan_config_nvt("1.2.3").unwrap().to_string(),
            r#"<get_nvts nvt_oid="1.2.3" details="1" preferences="1" preference_count="1"/>"#
        );
    }
}
