use crate::protocols::gmp::requests::set_bool;
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Arguments of [`get_system_reports`]. `duration` is in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSystemReports {
    pub name: Option<String>,
    pub duration: Option<u32>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub brief: Option<bool>,
    pub slave_id: Option<String>,
}

pub fn get_system_reports(args: &GetSystemReports) -> Request {
    let mut cmd = XmlCommand::new("get_system_reports");
    cmd.set_optional_attribute("name", args.name.as_deref());
    if let Some(duration) = args.duration {
        cmd.set_attribute("duration", duration.to_string());
    }
    cmd.set_optional_attribute("start_time", args.start_time.as_deref());
    cmd.set_optional_attribute("end_time", args.end_time.as_deref());
    set_bool(&mut cmd, "brief", args.brief);
    cmd.set_optional_attribute("slave_id", args.slave_id.as_deref());
    cmd.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_reports() {
        assert_eq!(
            get_system_reports(&Default::default()).to_string(),
            "<get_system_reports/>"
        );
        let request = get_system_reports(&GetSystemReports {
            name: Some("load".into()),
            duration: Some(3600),
            brief: Some(false),
            ..Default::default()
        });
        assert_eq!(
            request.to_string(),
            r#"<get_system_reports name="load" duration="3600" brief="0"/>"#
        );
    }
}
