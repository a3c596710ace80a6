use crate::error::Result;
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId,
};
use crate::sansio::Request;
use crate::xml::{to_comma_list, XmlCommand};

pub fn create_role(name: &str, comment: Option<&str>, users: &[String]) -> Result<Request> {
    required("create_role", "name", name)?;

    let mut cmd = XmlCommand::new("create_role");
    cmd.add_text_element("name", name);
    cmd.add_optional_element("comment", comment);
    if !users.is_empty() {
        cmd.add_text_element("users", to_comma_list(users));
    }
    Ok(cmd.into())
}

/// Arguments of [`modify_role`]. `users` replaces the member list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyRole {
    pub comment: Option<String>,
    pub name: Option<String>,
    pub users: Option<Vec<String>>,
}

pub fn modify_role(role_id: impl EntityId, args: &ModifyRole) -> Result<Request> {
    let role_id = required_id("modify_role", "role_id", role_id)?;

    let mut cmd = XmlCommand::new("modify_role");
    cmd.set_attribute("role_id", role_id);
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    if let Some(users) = &args.users {
        cmd.add_text_element("users", to_comma_list(users));
    }
    Ok(cmd.into())
}

pub fn clone_role(role_id: impl EntityId) -> Result<Request> {
    clone_entity("role", role_id)
}

pub fn delete_role(role_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("role", role_id, ultimate)
}

pub fn get_roles(
    filter_string: Option<&str>,
    filter_id: Option<&str>,
    trash: Option<bool>,
) -> Request {
    let mut cmd = XmlCommand::new("get_roles");
    cmd.add_filter(filter_string, filter_id);
    set_bool(&mut cmd, "trash", trash);
    cmd.into()
}

pub fn get_role(role_id: impl EntityId) -> Result<Request> {
    Ok(get_entity("role", role_id)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles() {
        assert_eq!(
            create_role("r", None, &["u1".into(), "u2".into()]).unwrap().to_string(),
            "<create_role><name>r</name><users>u1,u2</users></create_role>"
        );
        assert_eq!(
            get_roles(None, None, Some(true)).to_string(),
            r#"<get_roles trash="1"/>"#
        );
        assert!(create_role("", None, &[]).is_err());
    }
}
