use crate::error::Result;
use crate::protocols::gmp::requests::{get_entity, set_bool, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Arguments of [`get_results`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetResults {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub task_id: Option<String>,
    pub note_details: Option<bool>,
    pub override_details: Option<bool>,
    pub details: Option<bool>,
}

pub fn get_results(args: &GetResults) -> Request {
    let mut cmd = XmlCommand::new("get_results");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    cmd.set_optional_attribute("task_id", args.task_id.as_deref());
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "note_details", args.note_details);
    set_bool(&mut cmd, "override_details", args.override_details);
    cmd.into()
}

pub fn get_result(result_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("result", result_id)?;
    cmd.set_attribute("details", "1");
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results() {
        let request = get_results(&GetResults {
            task_id: Some("t1".into()),
            details: Some(true),
            ..Default::default()
        });
        assert_eq!(
            request.to_string(),
            r#"<get_results task_id="t1" details="1"/>"#
        );
        assert_eq!(
            get_result("r1").unwrap().to_string(),
            r#"<get_results result_id="r1" details="1"/>"#
        );
    }
}
