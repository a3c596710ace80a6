use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::{to_bool, XmlCommand};

gvm_enum! {
    /// Ids of the report formats shipped with the data feed.
    pub enum ReportFormatType {
        AnonymousXml = "anonymous_xml" => "5057e5cc-b825-11e4-9d0e-28d24461215b" | "anonymous xml",
        Arf = "arf" => "910200ca-dc05-11e1-954f-406186ea4fc5",
        Cpe = "cpe" => "5ceff8ba-1f62-11e1-ab9f-406186ea4fc5",
        CsvHosts = "csv_hosts" => "9087b18c-626c-11e3-8892-406186ea4fc5",
        CsvResults = "csv_results" => "c1645568-627a-11e3-a660-406186ea4fc5",
        GcrPdf = "gcr_pdf" => "dc51a40a-c022-11e9-b02d-3f7ca5bdcb11",
        GsrHtml = "gsr_html" => "ffa123c9-a2d2-409e-bbbb-a6c1385dbeaa",
        GsrPdf = "gsr_pdf" => "35ba7077-dc85-42ef-87c9-b0eda7e903b6",
        GxrPdf = "gxr_pdf" => "ebbc7f34-8ae5-11e1-b07b-001f29eadec8",
        Itg = "itg" => "77bd6c4a-1f62-11e1-abf0-406186ea4fc5",
        Latex = "latex" => "a684c02c-b531-11e1-bdc2-406186ea4fc5",
        Nbe = "nbe" => "9ca6fe72-1f62-11e1-9e7c-406186ea4fc5",
        Pdf = "pdf" => "c402cc3e-b531-11e1-9163-406186ea4fc5",
        Svg = "svg" => "9e5e5deb-879e-4ecc-8be6-a71cd0875cdd",
        Txt = "txt" => "a3810a62-1f62-11e1-9219-406186ea4fc5",
        VeriniceIsm = "verinice_ism" => "c15ad349-bd8d-457a-880a-c7056532ee15",
        VeriniceItg = "verinice_itg" => "50c9950a-f326-11e4-800c-28d24461215b",
        Xml = "xml" => "a994b278-1f62-11e1-96ac-406186ea4fc5",
    }
}

impl EntityId for ReportFormatType {
    fn as_entity_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.value())
    }
}

pub fn clone_report_format(report_format_id: impl EntityId) -> Result<Request> {
    clone_entity("report_format", report_format_id)
}

pub fn delete_report_format(report_format_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("report_format", report_format_id, ultimate)
}

/// Arguments of [`get_report_formats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetReportFormats {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub alerts: Option<bool>,
    pub params: Option<bool>,
    pub details: Option<bool>,
}

pub fn get_report_formats(args: &GetReportFormats) -> Request {
    let mut cmd = XmlCommand::new("get_report_formats");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "alerts", args.alerts);
    set_bool(&mut cmd, "params", args.params);
    set_bool(&mut cmd, "trash", args.trash);
    cmd.into()
}

pub fn get_report_format(report_format_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("report_format", report_format_id)?;
    cmd.set_attribute("details", "1");
    Ok(cmd.into())
}

/// Import a report format exported as a `<get_report_formats_response>` document.
pub fn import_report_format(report_format: &str) -> Result<Request> {
    const FUNCTION: &str = "import_report_format";
    required(FUNCTION, "report_format", report_format)?;

    let mut cmd = XmlCommand::new("create_report_format");
    let root = cmd.append_xml_str(report_format).map_err(|e| {
        Error::invalid_message(
            FUNCTION,
            "report_format",
            format!("Invalid xml passed as report_format to {} {}", FUNCTION, e),
        )
    })?;
    if root != "get_report_formats_response" {
        return Err(Error::invalid_message(
            FUNCTION,
            "report_format",
            format!(
                "Invalid root element {} of report_format, expected get_report_formats_response",
                root
            ),
        ));
    }
    Ok(cmd.into())
}

/// Arguments of [`modify_report_format`]. `param_value` requires `param_name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyReportFormat {
    pub active: Option<bool>,
    pub name: Option<String>,
    pub summary: Option<String>,
    pub param_name: Option<String>,
    pub param_value: Option<String>,
}

pub fn modify_report_format(
    report_format_id: impl EntityId,
    args: &ModifyReportFormat,
) -> Result<Request> {
    const FUNCTION: &str = "modify_report_format";
    let report_format_id = required_id(FUNCTION, "report_format_id", report_format_id)?;

    let mut cmd = XmlCommand::new("modify_report_format");
    cmd.set_attribute("report_format_id", report_format_id);
    if let Some(active) = args.active {
        cmd.add_text_element("active", to_bool(active));
    }
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("summary", args.summary.as_deref());

    match args.param_name.as_deref().filter(|n| !n.is_empty()) {
        Some(param_name) => {
            let param = cmd.add_element("param");
            param.add_text_element("name", param_name);
            if let Some(param_value) = args.param_value.as_deref() {
                param.add_text_element("value", param_value);
            }
        }
        None if args.param_value.is_some() => {
            return Err(Error::required(FUNCTION, "param_name"));
        }
        None => {}
    }
    Ok(cmd.into())
}

/// Verify the signature of a report format.
pub fn verify_report_format(report_format_id: impl EntityId) -> Result<Request> {
    let report_format_id =
        required_id("verify_report_format", "report_format_id", report_format_id)?;
    let mut cmd = XmlCommand::new("verify_report_format");
    cmd.set_attribute("report_format_id", report_format_id);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_format_type_is_an_id() {
        assert_eq!(
            get_report_format(ReportFormatType::Pdf).unwrap().to_string(),
            r#"<get_report_formats report_format_id="c402cc3e-b531-11e1-9163-406186ea4fc5" details="1"/>"#
        );
        assert_eq!(
            ReportFormatType::from_string(Some("anonymous xml")).unwrap(),
            Some(ReportFormatType::AnonymousXml)
        );
    }

    #[test]
    fn import_requires_response_root() {
        let request = import_report_format(
            "<get_report_formats_response><report_format/></get_report_formats_response>",
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<create_report_format><get_report_formats_response><report_format/>\
             </get_report_formats_response></create_report_format>"
        );

        let err = import_report_format("<report_format/>").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        let err = import_report_format("<get_report_formats_response>").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn modify_report_format_param() {
        let request = modify_report_format(
            "rf1",
            &ModifyReportFormat {
                active: Some(true),
                param_name: Some("Background".into()),
                param_value: Some("red".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<modify_report_format report_format_id=\"rf1\"><active>1</active>\
             <param><name>Background</name><value>red</value></param></modify_report_format>"
        );
    }
}
