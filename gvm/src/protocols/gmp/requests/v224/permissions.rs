use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId, GvmEnum,
    WireEntityType,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

use super::EntityType;

gvm_enum! {
    pub enum PermissionSubjectType {
        User = "user" => "user",
        Group = "group" => "group",
        Role = "role" => "role",
    }
}

/// Add the `<resource>` element. Id and type must be given together.
fn add_resource<E: WireEntityType>(
    cmd: &mut XmlCommand,
    function: &str,
    resource_id: Option<&str>,
    resource_type: Option<E>,
) -> Result<()> {
    let resource_id = resource_id.filter(|id| !id.is_empty());
    match (resource_id, resource_type) {
        (None, None) => Ok(()),
        (None, Some(_)) => Err(Error::required(function, "resource_id")),
        (Some(_), None) => Err(Error::required(function, "resource_type")),
        (Some(resource_id), Some(resource_type)) => {
            cmd.add_element("resource")
                .set_attribute("id", resource_id)
                .add_text_element("type", resource_type.wire_type());
            Ok(())
        }
    }
}

/// Arguments of [`create_permission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePermission<E = EntityType> {
    pub name: String,
    pub subject_id: String,
    pub subject_type: PermissionSubjectType,
    pub resource_id: Option<String>,
    pub resource_type: Option<E>,
    pub comment: Option<String>,
}

impl<E> CreatePermission<E> {
    pub fn new(
        name: impl Into<String>,
        subject_id: impl Into<String>,
        subject_type: PermissionSubjectType,
    ) -> Self {
        Self {
            name: name.into(),
            subject_id: subject_id.into(),
            subject_type,
            resource_id: None,
            resource_type: None,
            comment: None,
        }
    }
}

pub fn create_permission<E: WireEntityType>(args: &CreatePermission<E>) -> Result<Request> {
    const FUNCTION: &str = "create_permission";
    required(FUNCTION, "name", &args.name)?;
    required(FUNCTION, "subject_id", &args.subject_id)?;

    let mut cmd = XmlCommand::new("create_permission");
    cmd.add_text_element("name", args.name.as_str());
    cmd.add_element("subject")
        .set_attribute("id", args.subject_id.as_str())
        .add_text_element("type", args.subject_type.value());
    add_resource(
        &mut cmd,
        FUNCTION,
        args.resource_id.as_deref(),
        args.resource_type,
    )?;
    cmd.add_optional_element("comment", args.comment.as_deref());
    Ok(cmd.into())
}

/// Arguments of [`modify_permission`].
///
/// `resource_id` and `resource_type` go together, as do `subject_id` and
/// `subject_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyPermission<E = EntityType> {
    pub comment: Option<String>,
    pub name: Option<String>,
    pub resource_id: Option<String>,
    pub resource_type: Option<E>,
    pub subject_id: Option<String>,
    pub subject_type: Option<PermissionSubjectType>,
}

impl<E> Default for ModifyPermission<E> {
    fn default() -> Self {
        Self {
            comment: None,
            name: None,
            resource_id: None,
            resource_type: None,
            subject_id: None,
            subject_type: None,
        }
    }
}

pub fn modify_permission<E: WireEntityType>(
    permission_id: impl EntityId,
    args: &ModifyPermission<E>,
) -> Result<Request> {
    const FUNCTION: &str = "modify_permission";
    let permission_id = required_id(FUNCTION, "permission_id", permission_id)?;

    let mut cmd = XmlCommand::new("modify_permission");
    cmd.set_attribute("permission_id", permission_id);
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    add_resource(
        &mut cmd,
        FUNCTION,
        args.resource_id.as_deref(),
        args.resource_type,
    )?;

    let subject_id = args.subject_id.as_deref().filter(|id| !id.is_empty());
    match (subject_id, args.subject_type) {
        (None, None) => {}
        (None, Some(_)) => return Err(Error::required(FUNCTION, "subject_id")),
        (Some(_), None) => return Err(Error::required(FUNCTION, "subject_type")),
        (Some(subject_id), Some(subject_type)) => {
            cmd.add_element("subject")
                .set_attribute("id", subject_id)
                .add_text_element("type", subject_type.value());
        }
    }
    Ok(cmd.into())
}

pub fn clone_permission(permission_id: impl EntityId) -> Result<Request> {
    clone_entity("permission", permission_id)
}

pub fn delete_permission(permission_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("permission", permission_id, ultimate)
}

pub fn get_permissions(
    filter_string: Option<&str>,
    filter_id: Option<&str>,
    trash: Option<bool>,
) -> Request {
    let mut cmd = XmlCommand::new("get_permissions");
    cmd.add_filter(filter_string, filter_id);
    set_bool(&mut cmd, "trash", trash);
    cmd.into()
}

pub fn get_permission(permission_id: impl EntityId) -> Result<Request> {
    Ok(get_entity("permission", permission_id)?.into())
}
