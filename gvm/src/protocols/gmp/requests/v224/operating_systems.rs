use crate::error::Result;
use crate::protocols::gmp::requests::{required_id, set_bool, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Modify the comment of an operating system asset. `None` clears it.
pub fn modify_operating_system(
    operating_system_id: impl EntityId,
    comment: Option<&str>,
) -> Result<Request> {
    let id = required_id(
        "modify_operating_system",
        "operating_system_id",
        operating_system_id,
    )?;

    let mut cmd = XmlCommand::new("modify_asset");
    cmd.set_attribute("asset_id", id);
    let element = cmd.add_element("comment");
    if let Some(comment) = comment {
        element.set_text(comment);
    }
    Ok(cmd.into())
}

pub fn delete_operating_system(operating_system_id: impl EntityId) -> Result<Request> {
    let id = required_id(
        "delete_operating_system",
        "operating_system_id",
        operating_system_id,
    )?;
    let mut cmd = XmlCommand::new("delete_asset");
    cmd.set_attribute("asset_id", id);
    Ok(cmd.into())
}

pub fn get_operating_systems(
    filter_string: Option<&str>,
    filter_id: Option<&str>,
    details: Option<bool>,
) -> Request {
    let mut cmd = XmlCommand::new("get_assets");
    cmd.set_attribute("type", "os");
    cmd.add_filter(filter_string, filter_id);
    set_bool(&mut cmd, "details", details);
    cmd.into()
}

pub fn get_operating_system(
    operating_system_id: impl EntityId,
    details: Option<bool>,
) -> Result<Request> {
    let id = required_id(
        "get_operating_system",
        "operating_system_id",
        operating_system_id,
    )?;
    let mut cmd = XmlCommand::new("get_assets");
    cmd.set_attribute("asset_id", id).set_attribute("type", "os");
    set_bool(&mut cmd, "details", details);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operating_system_assets() {
        assert_eq!(
            get_operating_systems(None, Some("f1"), Some(false)).to_string(),
            r#"<get_assets type="os" filt_id="f1" details="0"/>"#
        );
        assert_eq!(
            delete_operating_system("o1").unwrap().to_string(),
            r#"<delete_asset asset_id="o1"/>"#
        );
        assert!(get_operating_system("", None).is_err());
    }
}
