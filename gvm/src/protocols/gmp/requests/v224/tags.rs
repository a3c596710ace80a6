use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    add_bool_element, clone_entity, delete_entity, get_entity, required, required_id, set_bool,
    EntityId, GvmEnum, WireEntityType,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

use super::EntityType;

gvm_enum! {
    /// How `modify_tag` applies the given resources.
    pub enum TagResourceAction {
        Replace = "replace" => "",
        Add = "add" => "add",
        Set = "set" => "set",
        Remove = "remove" => "remove",
    }
}

/// Arguments of [`create_tag`]. Exactly one of `resource_filter` and
/// `resource_ids` selects the tagged resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTag<E = EntityType> {
    pub name: String,
    pub resource_type: E,
    pub resource_filter: Option<String>,
    pub resource_ids: Option<Vec<String>>,
    pub value: Option<String>,
    pub comment: Option<String>,
    pub active: Option<bool>,
}

impl<E> CreateTag<E> {
    pub fn new(name: impl Into<String>, resource_type: E) -> Self {
        Self {
            name: name.into(),
            resource_type,
            resource_filter: None,
            resource_ids: None,
            value: None,
            comment: None,
            active: None,
        }
    }
}

pub fn create_tag<E: WireEntityType>(args: &CreateTag<E>) -> Result<Request> {
    const FUNCTION: &str = "create_tag";
    required(FUNCTION, "name", &args.name)?;

    let resource_filter = args.resource_filter.as_deref().filter(|f| !f.is_empty());
    let resource_ids = args.resource_ids.as_deref().filter(|ids| !ids.is_empty());
    match (resource_filter, resource_ids) {
        (Some(_), Some(_)) => {
            return Err(Error::invalid_message(
                FUNCTION,
                "resource_filter",
                "create_tag accepts either resource_filter or resource_ids argument",
            ))
        }
        (None, None) => return Err(Error::required(FUNCTION, "resource_filter or resource_ids")),
        _ => {}
    }

    let mut cmd = XmlCommand::new("create_tag");
    cmd.add_text_element("name", args.name.as_str());

    let resources = cmd.add_element("resources");
    resources.set_optional_attribute("filter", resource_filter);
    for resource_id in resource_ids.unwrap_or_default() {
        resources.add_element("resource").set_attribute("id", resource_id.as_str());
    }
    resources.add_text_element("type", args.resource_type.wire_type());

    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("value", args.value.as_deref());
    add_bool_element(&mut cmd, "active", args.active);
    Ok(cmd.into())
}

/// Arguments of [`modify_tag`].
///
/// A resource filter or resource ids need a `resource_type`. `resource_action`
/// selects between replacing, adding to, setting or removing from the tagged
/// resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyTag<E = EntityType> {
    pub comment: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub active: Option<bool>,
    pub resource_action: Option<TagResourceAction>,
    pub resource_type: Option<E>,
    pub resource_filter: Option<String>,
    pub resource_ids: Option<Vec<String>>,
}

impl<E> Default for ModifyTag<E> {
    fn default() -> Self {
        Self {
            comment: None,
            name: None,
            value: None,
            active: None,
            resource_action: None,
            resource_type: None,
            resource_filter: None,
            resource_ids: None,
        }
    }
}

pub fn modify_tag<E: WireEntityType>(
    tag_id: impl EntityId,
    args: &ModifyTag<E>,
) -> Result<Request> {
    const FUNCTION: &str = "modify_tag";
    let tag_id = required_id(FUNCTION, "tag_id", tag_id)?;

    let resource_filter = args.resource_filter.as_deref().filter(|f| !f.is_empty());
    let resource_ids = args.resource_ids.as_deref().filter(|ids| !ids.is_empty());
    if resource_filter.is_some() && resource_ids.is_some() {
        return Err(Error::invalid_message(
            FUNCTION,
            "resource_filter",
            "modify_tag accepts either resource_filter or resource_ids argument",
        ));
    }
    if (resource_filter.is_some() || resource_ids.is_some()) && args.resource_type.is_none() {
        return Err(Error::required(FUNCTION, "resource_type"));
    }

    let mut cmd = XmlCommand::new("modify_tag");
    cmd.set_attribute("tag_id", tag_id);
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("value", args.value.as_deref());
    add_bool_element(&mut cmd, "active", args.active);

    if args.resource_action.is_some()
        || args.resource_type.is_some()
        || resource_filter.is_some()
        || resource_ids.is_some()
    {
        let resources = cmd.add_element("resources");
        if let Some(action) = args.resource_action {
            resources.set_attribute("action", action.value());
        }
        resources.set_optional_attribute("filter", resource_filter);
        for resource_id in resource_ids.unwrap_or_default() {
            resources.add_element("resource").set_attribute("id", resource_id.as_str());
        }
        if let Some(resource_type) = args.resource_type {
            resources.add_text_element("type", resource_type.wire_type());
        }
    }
    Ok(cmd.into())
}

pub fn clone_tag(tag_id: impl EntityId) -> Result<Request> {
    clone_entity("tag", tag_id)
}

pub fn delete_tag(tag_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("tag", tag_id, ultimate)
}

/// Arguments of [`get_tags`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTags {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub names_only: Option<bool>,
}

pub fn get_tags(args: &GetTags) -> Request {
    let mut cmd = XmlCommand::new("get_tags");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "names_only", args.names_only);
    cmd.into()
}

pub fn get_tag(tag_id: impl EntityId) -> Result<Request> {
    Ok(get_entity("tag", tag_id)?.into())
}
