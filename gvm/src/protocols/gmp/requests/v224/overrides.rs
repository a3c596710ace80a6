use crate::error::Result;
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

use super::notes::{add_annotation, Annotation};

pub fn create_override(
    text: &str,
    nvt_oid: &str,
    args: &Annotation,
    new_severity: Option<f64>,
) -> Result<Request> {
    required("create_override", "text", text)?;
    required("create_override", "nvt_oid", nvt_oid)?;

    let mut cmd = XmlCommand::new("create_override");
    cmd.add_text_element("text", text);
    cmd.add_element("nvt").set_attribute("oid", nvt_oid);
    add_annotation(&mut cmd, args, new_severity);
    Ok(cmd.into())
}

pub fn modify_override(
    override_id: impl EntityId,
    text: &str,
    args: &Annotation,
    new_severity: Option<f64>,
) -> Result<Request> {
    let override_id = required_id("modify_override", "override_id", override_id)?;
    required("modify_override", "text", text)?;

    let mut cmd = XmlCommand::new("modify_override");
    cmd.set_attribute("override_id", override_id);
    cmd.add_text_element("text", text);
    add_annotation(&mut cmd, args, new_severity);
    Ok(cmd.into())
}

pub fn clone_override(override_id: impl EntityId) -> Result<Request> {
    clone_entity("override", override_id)
}

pub fn delete_override(override_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("override", override_id, ultimate)
}

/// Arguments of [`get_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOverrides {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub details: Option<bool>,
    pub result: Option<bool>,
}

pub fn get_overrides(args: &GetOverrides) -> Request {
    let mut cmd = XmlCommand::new("get_overrides");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "result", args.result);
    cmd.into()
}

pub fn get_override(override_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("override", override_id)?;
    cmd.set_attribute("details", "1");
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_override_with_new_severity() {
        let request = create_override(
            "false positive",
            "1.2.3",
            &Annotation {
                result_id: Some("r1".into()),
                severity: Some(10.0),
                ..Default::default()
            },
            Some(0.0),
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<create_override><text>false positive</text><nvt oid=\"1.2.3\"/>\
             <result id=\"r1\"/><severity>10</severity><new_severity>0</new_severity>\
             </create_override>"
        );
    }
}
