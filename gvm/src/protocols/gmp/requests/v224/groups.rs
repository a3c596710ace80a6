use crate::error::Result;
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId,
};
use crate::sansio::Request;
use crate::xml::{to_comma_list, XmlCommand};

/// Arguments of [`create_group`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateGroup {
    pub name: String,
    pub comment: Option<String>,
    /// Share the group's resources with all members.
    pub special: bool,
    pub users: Vec<String>,
}

pub fn create_group(args: &CreateGroup) -> Result<Request> {
    required("create_group", "name", &args.name)?;

    let mut cmd = XmlCommand::new("create_group");
    cmd.add_text_element("name", args.name.as_str());
    cmd.add_optional_element("comment", args.comment.as_deref());
    if args.special {
        cmd.add_element("specials").add_element("full");
    }
    if !args.users.is_empty() {
        cmd.add_text_element("users", to_comma_list(&args.users));
    }
    Ok(cmd.into())
}

/// Arguments of [`modify_group`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyGroup {
    pub comment: Option<String>,
    pub name: Option<String>,
    pub users: Option<Vec<String>>,
}

pub fn modify_group(group_id: impl EntityId, args: &ModifyGroup) -> Result<Request> {
    let group_id = required_id("modify_group", "group_id", group_id)?;

    let mut cmd = XmlCommand::new("modify_group");
    cmd.set_attribute("group_id", group_id);
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    if let Some(users) = &args.users {
        cmd.add_text_element("users", to_comma_list(users));
    }
    Ok(cmd.into())
}

pub fn clone_group(group_id: impl EntityId) -> Result<Request> {
    clone_entity("group", group_id)
}

pub fn delete_group(group_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("group", group_id, ultimate)
}

pub fn get_groups(
    filter_string: Option<&str>,
    filter_id: Option<&str>,
    trash: Option<bool>,
) -> Request {
    let mut cmd = XmlCommand::new("get_groups");
    cmd.add_filter(filter_string, filter_id);
    set_bool(&mut cmd, "trash", trash);
    cmd.into()
}

pub fn get_group(group_id: impl EntityId) -> Result<Request> {
    Ok(get_entity("group", group_id)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_special_group() {
        let request = create_group(&CreateGroup {
            name: "g".into(),
            special: true,
            users: vec!["a".into(), "b".into()],
            ..Default::default()
        })
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<create_group><name>g</name><specials><full/></specials>\
             <users>a,b</users></create_group>"
        );
    }

    #[test]
    fn modify_group_clears_users() {
        let request = modify_group(
            "g1",
            &ModifyGroup {
                users: Some(Vec::new()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            r#"<modify_group group_id="g1"><users/></modify_group>"#
        );
    }
}
