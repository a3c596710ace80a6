use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{required, required_id, set_bool, EntityId};
use crate::sansio::Request;
use crate::xml::{to_bool, XmlCommand};

pub fn delete_report(report_id: impl EntityId) -> Result<Request> {
    let report_id = required_id("delete_report", "report_id", report_id)?;
    let mut cmd = XmlCommand::new("delete_report");
    cmd.set_attribute("report_id", report_id);
    Ok(cmd.into())
}

/// Arguments of [`get_report`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetReport {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub delta_report_id: Option<String>,
    pub report_format_id: Option<String>,
    pub ignore_pagination: Option<bool>,
    /// Defaults to `true`.
    pub details: Option<bool>,
}

/// Build the `get_reports` command for a single report. Later dialects add a
/// report config.
pub(crate) fn get_report_command(
    function: &str,
    report_id: impl EntityId,
    args: &GetReport,
    report_config_id: Option<&str>,
) -> Result<XmlCommand> {
    let report_id = required_id(function, "report_id", report_id)?;

    let mut cmd = XmlCommand::new("get_reports");
    cmd.set_attribute("report_id", report_id);
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    cmd.set_optional_attribute("delta_report_id", args.delta_report_id.as_deref());
    cmd.set_optional_attribute("format_id", args.report_format_id.as_deref());
    cmd.set_optional_attribute("config_id", report_config_id);
    set_bool(&mut cmd, "ignore_pagination", args.ignore_pagination);
    cmd.set_attribute("details", to_bool(args.details.unwrap_or(true)));
    Ok(cmd)
}

pub fn get_report(report_id: impl EntityId, args: &GetReport) -> Result<Request> {
    Ok(get_report_command("get_report", report_id, args, None)?.into())
}

/// Arguments of [`get_reports`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetReports {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub note_details: Option<bool>,
    pub override_details: Option<bool>,
    pub ignore_pagination: Option<bool>,
    pub details: Option<bool>,
}

pub(crate) fn get_reports_command(args: &GetReports) -> XmlCommand {
    let mut cmd = XmlCommand::new("get_reports");
    cmd.set_optional_attribute("report_filter", args.filter_string.as_deref());
    cmd.set_optional_attribute("report_filt_id", args.filter_id.as_deref());
    set_bool(&mut cmd, "note_details", args.note_details);
    set_bool(&mut cmd, "override_details", args.override_details);
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "ignore_pagination", args.ignore_pagination);
    cmd
}

pub fn get_reports(args: &GetReports) -> Request {
    get_reports_command(args).into()
}

/// Import a `<report>` document into the container task `task_id`.
pub fn import_report(
    report: &str,
    task_id: impl EntityId,
    in_assets: Option<bool>,
) -> Result<Request> {
    const FUNCTION: &str = "import_report";
    required(FUNCTION, "report", report)?;
    let task_id = required_id(FUNCTION, "task_id", task_id)?;

    let mut cmd = XmlCommand::new("create_report");
    cmd.add_element("task").set_attribute("id", task_id);
    if let Some(in_assets) = in_assets {
        cmd.add_text_element("in_assets", to_bool(in_assets));
    }

    let root = cmd.append_xml_str(report).map_err(|e| {
        Error::invalid_message(
            FUNCTION,
            "report",
            format!("Invalid xml passed as report to import_report {}", e),
        )
    })?;
    if root != "report" {
        return Err(Error::invalid_message(
            FUNCTION,
            "report",
            format!("Invalid root element {} of report, expected report", root),
        ));
    }
    Ok(cmd.into())
}
