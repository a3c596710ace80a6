use crate::error::Result;
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// A report format parameter stored in a report config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportConfigParameter {
    pub name: String,
    pub value: Option<String>,
    /// Use the default of the report format instead of `value`.
    pub use_default: bool,
}

fn add_params(
    cmd: &mut XmlCommand,
    function: &str,
    params: &[ReportConfigParameter],
) -> Result<()> {
    for param in params {
        required(function, "params", &param.name)?;
        let element = cmd.add_element("param");
        element.add_text_element("name", param.name.as_str());
        if param.use_default {
            element.add_element("value").set_attribute("use_default", "1");
        } else {
            element.add_text_element("value", param.value.as_deref().unwrap_or_default());
        }
    }
    Ok(())
}

/// Create a report config for the report format `report_format_id`.
pub fn create_report_config(
    name: &str,
    report_format_id: impl EntityId,
    comment: Option<&str>,
    params: &[ReportConfigParameter],
) -> Result<Request> {
    const FUNCTION: &str = "create_report_config";
    required(FUNCTION, "name", name)?;
    let report_format_id = required_id(FUNCTION, "report_format_id", report_format_id)?;

    let mut cmd = XmlCommand::new("create_report_config");
    cmd.add_text_element("name", name);
    cmd.add_element("report_format").set_attribute("id", report_format_id);
    cmd.add_optional_element("comment", comment);
    add_params(&mut cmd, FUNCTION, params)?;
    Ok(cmd.into())
}

/// Arguments of [`modify_report_config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyReportConfig {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub params: Vec<ReportConfigParameter>,
}

pub fn modify_report_config(
    report_config_id: impl EntityId,
    args: &ModifyReportConfig,
) -> Result<Request> {
    const FUNCTION: &str = "modify_report_config";
    let report_config_id = required_id(FUNCTION, "report_config_id", report_config_id)?;

    let mut cmd = XmlCommand::new("modify_report_config");
    cmd.set_attribute("report_config_id", report_config_id);
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("comment", args.comment.as_deref());
    add_params(&mut cmd, FUNCTION, &args.params)?;
    Ok(cmd.into())
}

pub fn clone_report_config(report_config_id: impl EntityId) -> Result<Request> {
    clone_entity("report_config", report_config_id)
}

pub fn delete_report_config(report_config_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("report_config", report_config_id, ultimate)
}

/// Arguments of [`get_report_configs`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetReportConfigs {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub details: Option<bool>,
}

pub fn get_report_configs(args: &GetReportConfigs) -> Request {
    let mut cmd = XmlCommand::new("get_report_configs");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "details", args.details);
    cmd.into()
}

pub fn get_report_config(report_config_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("report_config", report_config_id)?;
    cmd.set_attribute("details", "1");
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::gmp::requests::v224::ReportFormatType;

    #[test]
    fn create_report_config_bytes() {
        let params = [
            ReportConfigParameter {
                name: "Rows".into(),
                value: Some("10".into()),
                use_default: false,
            },
            ReportConfigParameter {
                name: "Background".into(),
                use_default: true,
                ..Default::default()
            },
        ];
        let request =
            create_report_config("short", ReportFormatType::Txt, None, &params).unwrap();
        assert_eq!(
            request.to_string(),
            "<create_report_config><name>short</name>\
             <report_format id=\"a3810a62-1f62-11e1-9219-406186ea4fc5\"/>\
             <param><name>Rows</name><value>10</value></param>\
             <param><name>Background</name><value use_default=\"1\"/></param>\
             </create_report_config>"
        );
    }

    #[test]
    fn report_config_crud() {
        assert_eq!(
            clone_report_config("rc1").unwrap().to_string(),
            "<create_report_config><copy>rc1</copy></create_report_config>"
        );
        assert_eq!(
            get_report_config("rc1").unwrap().to_string(),
            r#"<get_report_configs report_config_id="rc1" details="1"/>"#
        );
        let err = modify_report_config("", &Default::default()).unwrap_err();
        assert_eq!(err.argument(), Some("report_config_id"));
        assert!(create_report_config("", "rf1", None, &[]).is_err());
    }
}
