use crate::error::Result;
use crate::protocols::gmp::requests::{v224, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Arguments of [`get_report`]. `report_config_id` selects stored report
/// format parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetReport {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub delta_report_id: Option<String>,
    pub report_format_id: Option<String>,
    pub report_config_id: Option<String>,
    pub ignore_pagination: Option<bool>,
    /// Defaults to `true`.
    pub details: Option<bool>,
}

impl GetReport {
    pub(super) fn command(&self, function: &str, report_id: impl EntityId) -> Result<XmlCommand> {
        let base = v224::GetReport {
            filter_string: self.filter_string.clone(),
            filter_id: self.filter_id.clone(),
            delta_report_id: self.delta_report_id.clone(),
            report_format_id: self.report_format_id.clone(),
            ignore_pagination: self.ignore_pagination,
            details: self.details,
        };
        v224::get_report_command(function, report_id, &base, self.report_config_id.as_deref())
    }
}

pub fn get_report(report_id: impl EntityId, args: &GetReport) -> Result<Request> {
    Ok(args.command("get_report", report_id)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_report_with_config() {
        let args = GetReport {
            report_format_id: Some("rf1".into()),
            report_config_id: Some("rc1".into()),
            ..Default::default()
        };
        assert_eq!(
            get_report("r1", &args).unwrap().to_string(),
            r#"<get_reports report_id="r1" format_id="rf1" config_id="rc1" details="1"/>"#
        );
        assert_eq!(
            get_report("r1", &GetReport::default()).unwrap().to_string(),
            v224::get_report("r1", &Default::default()).unwrap().to_string()
        );
    }
}
