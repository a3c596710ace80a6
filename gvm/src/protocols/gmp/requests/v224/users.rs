use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    clone_entity, get_entity, required, required_id, EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::{to_bool, to_comma_list, XmlCommand, XmlCommandElement};

gvm_enum! {
    pub enum UserAuthType {
        File = "file" => "file",
        LdapConnect = "ldap_connect" => "ldap_connect",
        RadiusConnect = "radius_connect" => "radius_connect",
    }
}

fn add_hosts(cmd: &mut XmlCommandElement, hosts: &[String], hosts_allow: Option<bool>) {
    if hosts.is_empty() {
        return;
    }
    cmd.add_text_element("hosts", to_comma_list(hosts))
        .set_attribute("allow", to_bool(hosts_allow.unwrap_or(false)));
}

/// Arguments of [`create_user`]. `hosts_allow` turns `hosts` from a deny
/// list into an allow list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateUser {
    pub name: String,
    pub password: Option<String>,
    pub hosts: Vec<String>,
    pub hosts_allow: Option<bool>,
    pub role_ids: Vec<String>,
}

impl CreateUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

pub fn create_user(args: &CreateUser) -> Result<Request> {
    required("create_user", "name", &args.name)?;

    let mut cmd = XmlCommand::new("create_user");
    cmd.add_text_element("name", args.name.as_str());
    cmd.add_optional_element("password", args.password.as_deref());
    add_hosts(&mut cmd, &args.hosts, args.hosts_allow);
    for role_id in &args.role_ids {
        cmd.add_element("role").set_attribute("id", role_id.as_str());
    }
    Ok(cmd.into())
}

/// Arguments of [`modify_user`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyUser {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub password: Option<String>,
    pub auth_source: Option<UserAuthType>,
    pub role_ids: Vec<String>,
    pub hosts: Vec<String>,
    pub hosts_allow: Option<bool>,
    pub group_ids: Vec<String>,
}

pub fn modify_user(user_id: impl EntityId, args: &ModifyUser) -> Result<Request> {
    let user_id = required_id("modify_user", "user_id", user_id)?;

    let mut cmd = XmlCommand::new("modify_user");
    cmd.set_attribute("user_id", user_id);
    cmd.add_optional_element("new_name", args.name.as_deref());
    cmd.add_optional_element("comment", args.comment.as_deref());
    for role_id in &args.role_ids {
        cmd.add_element("role").set_attribute("id", role_id.as_str());
    }
    add_hosts(&mut cmd, &args.hosts, args.hosts_allow);
    cmd.add_optional_element("password", args.password.as_deref());
    if let Some(auth_source) = args.auth_source {
        cmd.add_element("sources")
            .add_text_element("source", auth_source.value());
    }
    if !args.group_ids.is_empty() {
        let groups = cmd.add_element("groups");
        for group_id in &args.group_ids {
            groups.add_element("group").set_attribute("id", group_id.as_str());
        }
    }
    Ok(cmd.into())
}

pub fn clone_user(user_id: impl EntityId) -> Result<Request> {
    clone_entity("user", user_id)
}

/// Arguments of [`delete_user`]. The user is selected by `user_id` or `name`.
/// Owned resources move to the inheritor if one is given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteUser {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub inheritor_id: Option<String>,
    pub inheritor_name: Option<String>,
}

pub fn delete_user(args: &DeleteUser) -> Result<Request> {
    let user_id = args.user_id.as_deref().filter(|id| !id.is_empty());
    let name = args.name.as_deref().filter(|n| !n.is_empty());
    if user_id.is_none() && name.is_none() {
        return Err(Error::required_message(
            "delete_user",
            "user_id",
            "delete_user requires a user_id or name argument",
        ));
    }

    let mut cmd = XmlCommand::new("delete_user");
    cmd.set_optional_attribute("user_id", user_id);
    cmd.set_optional_attribute("name", name);
    cmd.set_optional_attribute("inheritor_id", args.inheritor_id.as_deref());
    cmd.set_optional_attribute("inheritor_name", args.inheritor_name.as_deref());
    Ok(cmd.into())
}

pub fn get_users(filter_string: Option<&str>, filter_id: Option<&str>) -> Request {
    let mut cmd = XmlCommand::new("get_users");
    cmd.add_filter(filter_string, filter_id);
    cmd.into()
}

pub fn get_user(user_id: impl EntityId) -> Result<Request> {
    Ok(get_entity("user", user_id)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_bytes() {
        let args = CreateUser {
            password: Some("secret".into()),
            hosts: vec!["10.0.0.1".into(), "10.0.0.2".into()],
            hosts_allow: Some(true),
            role_ids: vec!["r1".into()],
            ..CreateUser::new("alice")
        };
        assert_eq!(
            create_user(&args).unwrap().to_string(),
            "<create_user><name>alice</name><password>secret</password>\
             <hosts allow=\"1\">10.0.0.1,10.0.0.2</hosts><role id=\"r1\"/></create_user>"
        );
    }

    #[test]
    fn modify_user_bytes() {
        let args = ModifyUser {
            name: Some("bob".into()),
            auth_source: Some(UserAuthType::LdapConnect),
            group_ids: vec!["g1".into()],
            ..Default::default()
        };
        assert_eq!(
            modify_user("u1", &args).unwrap().to_string(),
            "<modify_user user_id=\"u1\"><new_name>bob</new_name>\
             <sources><source>ldap_connect</source></sources>\
             <groups><group id=\"g1\"/></groups></modify_user>"
        );
    }

    #[test]
    fn delete_user_by_name() {
        let args = DeleteUser {
            name: Some("alice".into()),
            inheritor_id: Some("u2".into()),
            ..Default::default()
        };
        assert_eq!(
            delete_user(&args).unwrap().to_string(),
            r#"<delete_user name="alice" inheritor_id="u2"/>"#
        );
        assert!(delete_user(&DeleteUser::default()).is_err());
    }
}
