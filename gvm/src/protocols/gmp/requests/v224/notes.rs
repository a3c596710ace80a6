use crate::error::Result;
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId,
};
use crate::sansio::Request;
use crate::xml::{to_comma_list, XmlCommand};

/// Arguments shared by notes and overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotation {
    /// Days the annotation stays active. `-1` is always, `0` is off.
    pub days_active: Option<i32>,
    pub hosts: Vec<String>,
    /// Port the annotation applies to, e.g. `80/tcp`.
    pub port: Option<String>,
    pub result_id: Option<String>,
    pub severity: Option<f64>,
    pub task_id: Option<String>,
}

/// Add the scope elements of a note or override.
pub(super) fn add_annotation(
    cmd: &mut XmlCommand,
    args: &Annotation,
    new_severity: Option<f64>,
) {
    if let Some(days_active) = args.days_active {
        cmd.add_text_element("active", days_active.to_string());
    }
    if !args.hosts.is_empty() {
        cmd.add_text_element("hosts", to_comma_list(&args.hosts));
    }
    cmd.add_optional_element("port", args.port.as_deref());
    if let Some(result_id) = args.result_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("result").set_attribute("id", result_id);
    }
    if let Some(severity) = args.severity {
        cmd.add_text_element("severity", severity.to_string());
    }
    if let Some(new_severity) = new_severity {
        cmd.add_text_element("new_severity", new_severity.to_string());
    }
    if let Some(task_id) = args.task_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("task").set_attribute("id", task_id);
    }
}

pub fn create_note(text: &str, nvt_oid: &str, args: &Annotation) -> Result<Request> {
    required("create_note", "text", text)?;
    required("create_note", "nvt_oid", nvt_oid)?;

    let mut cmd = XmlCommand::new("create_note");
    cmd.add_text_element("text", text);
    cmd.add_element("nvt").set_attribute("oid", nvt_oid);
    add_annotation(&mut cmd, args, None);
    Ok(cmd.into())
}

pub fn modify_note(note_id: impl EntityId, text: &str, args: &Annotation) -> Result<Request> {
    let note_id = required_id("modify_note", "note_id", note_id)?;
    required("modify_note", "text", text)?;

    let mut cmd = XmlCommand::new("modify_note");
    cmd.set_attribute("note_id", note_id);
    cmd.add_text_element("text", text);
    add_annotation(&mut cmd, args, None);
    Ok(cmd.into())
}

pub fn clone_note(note_id: impl EntityId) -> Result<Request> {
    clone_entity("note", note_id)
}

pub fn delete_note(note_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("note", note_id, ultimate)
}

/// Arguments of [`get_notes`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetNotes {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub details: Option<bool>,
    pub result: Option<bool>,
}

pub fn get_notes(args: &GetNotes) -> Request {
    let mut cmd = XmlCommand::new("get_notes");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "result", args.result);
    cmd.into()
}

pub fn get_note(note_id: impl EntityId) -> Result<Request> {
    let mut cmd = get_entity("note", note_id)?;
    cmd.set_attribute("details", "1");
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_note_bytes() {
        let request = create_note(
            "foo",
            "1.2.3",
            &Annotation {
                days_active: Some(-1),
                hosts: vec!["h1".into(), "h2".into()],
                port: Some("80/tcp".into()),
                severity: Some(5.5),
                task_id: Some("t1".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<create_note><text>foo</text><nvt oid=\"1.2.3\"/><active>-1</active>\
             <hosts>h1,h2</hosts><port>80/tcp</port><severity>5.5</severity>\
             <task id=\"t1\"/></create_note>"
        );
    }

    #[test]
    fn note_requires_text_and_oid() {
        let args = Annotation::default();
        assert_eq!(create_note("", "1.2", &args).unwrap_err().argument(), Some("text"));
        assert_eq!(create_note("a", "", &args).unwrap_err().argument(), Some("nvt_oid"));
        assert_eq!(modify_note("n1", "", &args).unwrap_err().argument(), Some("text"));
    }

    #[test]
    fn get_note_has_details() {
        assert_eq!(
            get_note("n1").unwrap().to_string(),
            r#"<get_notes note_id="n1" details="1"/>"#
        );
    }
}
