//! OSP request builders.

use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{required, required_id, EntityId};
use crate::sansio::Request;
use crate::xml::{to_bool, XmlCommand};

pub fn get_version() -> Request {
    XmlCommand::new("get_version").into()
}

pub fn help() -> Request {
    XmlCommand::new("help").into()
}

pub fn get_scanner_details() -> Request {
    XmlCommand::new("get_scanner_details").into()
}

/// Request all VTs, or only `vt_id`.
pub fn get_vts(vt_id: Option<&str>) -> Request {
    let mut cmd = XmlCommand::new("get_vts");
    cmd.set_optional_attribute("vt_id", vt_id);
    cmd.into()
}

/// Arguments of [`get_scans`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetScans {
    pub scan_id: Option<String>,
    /// Defaults to `true`.
    pub details: Option<bool>,
    pub pop_results: bool,
    pub max_results: Option<u32>,
}

pub fn get_scans(args: &GetScans) -> Request {
    let mut cmd = XmlCommand::new("get_scans");
    cmd.set_optional_attribute("scan_id", args.scan_id.as_deref());
    cmd.set_attribute("details", to_bool(args.details.unwrap_or(true)));
    cmd.set_attribute("pop_results", to_bool(args.pop_results));
    if let Some(max_results) = args.max_results {
        cmd.set_attribute("max_results", max_results.to_string());
    }
    cmd.into()
}

pub fn delete_scan(scan_id: impl EntityId) -> Result<Request> {
    let scan_id = required_id("delete_scan", "scan_id", scan_id)?;
    let mut cmd = XmlCommand::new("delete_scan");
    cmd.set_attribute("scan_id", scan_id);
    Ok(cmd.into())
}

pub fn stop_scan(scan_id: impl EntityId) -> Result<Request> {
    let scan_id = required_id("stop_scan", "scan_id", scan_id)?;
    let mut cmd = XmlCommand::new("stop_scan");
    cmd.set_attribute("scan_id", scan_id);
    Ok(cmd.into())
}

/// Login data for one service of a target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OspCredential {
    /// E.g. `ssh` or `smb`.
    pub service: String,
    /// E.g. `up` for username and password.
    pub cred_type: Option<String>,
    pub port: Option<u16>,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OspTarget {
    pub hosts: String,
    pub ports: String,
    pub credentials: Vec<OspCredential>,
}

/// A single VT and its preference values, keyed by preference id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VtSingle {
    pub id: String,
    pub values: Vec<(String, String)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VtSelection {
    pub singles: Vec<VtSingle>,
    /// VT group filters, e.g. `family=debian`.
    pub groups: Vec<String>,
}

impl VtSelection {
    fn is_empty(&self) -> bool {
        self.singles.is_empty() && self.groups.is_empty()
    }
}

/// Arguments of [`start_scan`].
///
/// Either `targets` or the legacy `target` (with `ports`) selects what to scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartScan {
    pub scan_id: Option<String>,
    /// Number of hosts scanned in parallel. Defaults to 1.
    pub parallel: Option<u32>,
    pub scanner_params: Vec<(String, String)>,
    pub targets: Vec<OspTarget>,
    pub target: Option<String>,
    pub ports: Option<String>,
    pub vt_selection: VtSelection,
}

pub fn start_scan(args: &StartScan) -> Result<Request> {
    const FUNCTION: &str = "start_scan";

    let mut cmd = XmlCommand::new("start_scan");
    cmd.set_optional_attribute("scan_id", args.scan_id.as_deref());
    cmd.set_attribute("parallel", args.parallel.unwrap_or(1).to_string());

    // Mandatory even when empty.
    let params = cmd.add_element("scanner_params");
    for (key, value) in &args.scanner_params {
        required(FUNCTION, "scanner_params", key)?;
        params.add_text_element(key.as_str(), value.as_str());
    }

    if !args.targets.is_empty() {
        let targets = cmd.add_element("targets");
        for target in &args.targets {
            let element = targets.add_element("target");
            element.add_text_element("hosts", target.hosts.as_str());
            element.add_text_element("ports", target.ports.as_str());
            if target.credentials.is_empty() {
                continue;
            }
            let credentials = element.add_element("credentials");
            for credential in &target.credentials {
                required(FUNCTION, "credentials", &credential.service)?;
                let element = credentials.add_element("credential");
                element.set_attribute("service", credential.service.as_str());
                element.set_optional_attribute("type", credential.cred_type.as_deref());
                if let Some(port) = credential.port {
                    element.set_attribute("port", port.to_string());
                }
                element.add_text_element("username", credential.username.as_str());
                element.add_text_element("password", credential.password.as_str());
            }
        }
    } else if let Some(target) = args.target.as_deref().filter(|t| !t.is_empty()) {
        cmd.set_attribute("target", target);
        cmd.set_optional_attribute("ports", args.ports.as_deref());
    } else {
        return Err(Error::required(FUNCTION, "target"));
    }

    if !args.vt_selection.is_empty() {
        let selection = cmd.add_element("vt_selection");
        for single in &args.vt_selection.singles {
            required(FUNCTION, "vt_selection", &single.id)?;
            let element = selection.add_element("vt_single");
            element.set_attribute("id", single.id.as_str());
            for (id, value) in &single.values {
                element
                    .add_text_element("vt_value", value.as_str())
                    .set_attribute("id", id.as_str());
            }
        }
        for group in &args.vt_selection.groups {
            selection.add_element("vt_group").set_attribute("filter", group.as_str());
        }
    }

    Ok(cmd.into())
}
