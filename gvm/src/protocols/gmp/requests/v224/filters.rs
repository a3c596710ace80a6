use crate::error::Result;
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

use super::FilterType;

/// Arguments of [`create_filter`], generic over the dialect's filter type enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateFilter<T = FilterType> {
    pub name: String,
    pub filter_type: Option<T>,
    pub comment: Option<String>,
    pub term: Option<String>,
}

impl<T> CreateFilter<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            filter_type: None,
            comment: None,
            term: None,
        }
    }
}

pub fn create_filter<T: GvmEnum>(args: &CreateFilter<T>) -> Result<Request> {
    required("create_filter", "name", &args.name)?;

    let mut cmd = XmlCommand::new("create_filter");
    cmd.add_text_element("name", args.name.as_str());
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("term", args.term.as_deref());
    if let Some(filter_type) = args.filter_type {
        cmd.add_text_element("type", filter_type.value());
    }
    Ok(cmd.into())
}

/// Arguments of [`modify_filter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyFilter<T = FilterType> {
    pub comment: Option<String>,
    pub name: Option<String>,
    pub term: Option<String>,
    pub filter_type: Option<T>,
}

impl<T> Default for ModifyFilter<T> {
    fn default() -> Self {
        Self {
            comment: None,
            name: None,
            term: None,
            filter_type: None,
        }
    }
}

pub fn modify_filter<T: GvmEnum>(
    filter_id: impl EntityId,
    args: &ModifyFilter<T>,
) -> Result<Request> {
    let filter_id = required_id("modify_filter", "filter_id", filter_id)?;

    let mut cmd = XmlCommand::new("modify_filter");
    cmd.set_attribute("filter_id", filter_id);
    cmd.add_optional_element("comment", args.comment.as_deref());
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("term", args.term.as_deref());
    if let Some(filter_type) = args.filter_type {
        cmd.add_text_element("type", filter_type.value());
    }
    Ok(cmd.into())
}

pub fn clone_filter(filter_id: impl EntityId) -> Result<Request> {
    clone_entity("filter", filter_id)
}

pub fn delete_filter(filter_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("filter", filter_id, ultimate)
}

/// Arguments of [`get_filters`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetFilters {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub alerts: Option<bool>,
}

pub fn get_filters(args: &GetFilters) -> Request {
    let mut cmd = XmlCommand::new("get_filters");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "alerts", args.alerts);
    cmd.into()
}

pub fn get_filter(filter_id: impl EntityId, alerts: Option<bool>) -> Result<Request> {
    let mut cmd = get_entity("filter", filter_id)?;
    set_bool(&mut cmd, "alerts", alerts);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_filter_bytes() {
        let request = create_filter(&CreateFilter {
            filter_type: Some(FilterType::Task),
            term: Some("name=foo".into()),
            ..CreateFilter::new("f")
        })
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<create_filter><name>f</name><term>name=foo</term><type>task</type></create_filter>"
        );
    }

    #[test]
    fn create_filter_requires_name() {
        let err = create_filter(&CreateFilter::<FilterType>::new("")).unwrap_err();
        assert_eq!(err.to_string(), "Required argument name for create_filter");
    }

    #[test]
    fn modify_filter_bytes() {
        let request = modify_filter(
            "f1",
            &ModifyFilter {
                filter_type: Some(FilterType::AllSecinfo),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            r#"<modify_filter filter_id="f1"><type>secinfo</type></modify_filter>"#
        );
    }
}
