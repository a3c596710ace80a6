use crate::error::Result;
use crate::protocols::gmp::requests::{required_id, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

pub fn get_vulnerabilities(filter_string: Option<&str>, filter_id: Option<&str>) -> Request {
    let mut cmd = XmlCommand::new("get_vulns");
    cmd.add_filter(filter_string, filter_id);
    cmd.into()
}

pub fn get_vulnerability(vulnerability_id: impl EntityId) -> Result<Request> {
    let vulnerability_id = required_id("get_vulnerability", "vulnerability_id", vulnerability_id)?;
    let mut cmd = XmlCommand::new("get_vulns");
    cmd.set_attribute("vuln_id", vulnerability_id);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vulnerabilities() {
        assert_eq!(
            get_vulnerabilities(Some("severity>5"), None).to_string(),
            r#"<get_vulns filter="severity&gt;5"/>"#
        );
        assert_eq!(
            get_vulnerability("v1").unwrap().to_string(),
            r#"<get_vulns vuln_id="v1"/>"#
        );
    }
}
