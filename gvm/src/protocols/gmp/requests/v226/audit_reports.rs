//! Reports of audits, distinguished from scan reports by `usage_type`.

use crate::error::Result;
use crate::protocols::gmp::requests::{required_id, v224, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

use super::GetReport;

pub type GetAuditReports = v224::GetReports;

pub fn get_audit_reports(args: &GetAuditReports) -> Request {
    let mut cmd = v224::get_reports_command(args);
    cmd.set_attribute("usage_type", "audit");
    cmd.into()
}

pub fn get_audit_report(report_id: impl EntityId, args: &GetReport) -> Result<Request> {
    let mut cmd = args.command("get_audit_report", report_id)?;
    cmd.set_attribute("usage_type", "audit");
    Ok(cmd.into())
}

pub fn delete_audit_report(report_id: impl EntityId) -> Result<Request> {
    let report_id = required_id("delete_audit_report", "report_id", report_id)?;
    let mut cmd = XmlCommand::new("delete_report");
    cmd.set_attribute("report_id", report_id);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_reports() {
        assert_eq!(
            get_audit_reports(&Default::default()).to_string(),
            r#"<get_reports usage_type="audit"/>"#
        );
        assert_eq!(
            get_audit_report("r1", &Default::default()).unwrap().to_string(),
            r#"<get_reports report_id="r1" details="1" usage_type="audit"/>"#
        );
        assert_eq!(
            delete_audit_report("r1").unwrap().to_string(),
            r#"<delete_report report_id="r1"/>"#
        );
        let err = get_audit_report("", &Default::default()).unwrap_err();
        assert_eq!(err.function(), Some("get_audit_report"));
    }
}
