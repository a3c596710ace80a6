use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    add_bool_element, clone_entity, delete_entity, required, required_id, set_bool, EntityId,
    GvmEnum,
};
use crate::sansio::Request;
use crate::xml::{to_comma_list, XmlCommand, XmlCommandElement};

gvm_enum! {
    /// Order in which the hosts of a target are scanned.
    pub enum HostsOrdering {
        Sequential = "sequential" => "sequential",
        Random = "random" => "random",
        Reverse = "reverse" => "reverse",
    }
}

/// Arguments of [`create_task`] and [`create_audit`](super::create_audit).
///
/// For audits `config_id` names the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTask {
    pub name: String,
    pub config_id: String,
    pub target_id: String,
    pub scanner_id: String,
    pub alterable: Option<bool>,
    pub hosts_ordering: Option<HostsOrdering>,
    pub schedule_id: Option<String>,
    pub alert_ids: Vec<String>,
    pub comment: Option<String>,
    pub schedule_periods: Option<u32>,
    pub observers: Vec<String>,
    /// Scanner preferences as name and value pairs.
    pub preferences: Vec<(String, String)>,
}

impl CreateTask {
    pub fn new(
        name: impl Into<String>,
        config_id: impl Into<String>,
        target_id: impl Into<String>,
        scanner_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            config_id: config_id.into(),
            target_id: target_id.into(),
            scanner_id: scanner_id.into(),
            ..Default::default()
        }
    }
}

fn add_preferences(cmd: &mut XmlCommandElement, preferences: &[(String, String)]) {
    if preferences.is_empty() {
        return;
    }
    let element = cmd.add_element("preferences");
    for (name, value) in preferences {
        let preference = element.add_element("preference");
        preference.add_text_element("scanner_name", name.as_str());
        preference.add_text_element("value", value.as_str());
    }
}

/// Shared by tasks and audits, which differ in `usage_type` and argument names.
pub(super) fn create_task_command(
    function: &str,
    config_argument: &str,
    usage_type: &str,
    args: &CreateTask,
) -> Result<XmlCommand> {
    required(function, "name", &args.name)?;
    required(function, config_argument, &args.config_id)?;
    required(function, "target_id", &args.target_id)?;
    required(function, "scanner_id", &args.scanner_id)?;
    if args.target_id == "0" {
        return Err(Error::invalid_message(
            function,
            "target_id",
            "Invalid argument 0 for target_id. Use create_container_task instead",
        ));
    }

    let mut cmd = XmlCommand::new("create_task");
    cmd.add_text_element("name", args.name.as_str());
    cmd.add_text_element("usage_type", usage_type);
    cmd.add_element("config").set_attribute("id", args.config_id.as_str());
    cmd.add_element("target").set_attribute("id", args.target_id.as_str());
    cmd.add_element("scanner").set_attribute("id", args.scanner_id.as_str());
    cmd.add_optional_element("comment", args.comment.as_deref());
    add_bool_element(&mut cmd, "alterable", args.alterable);
    if let Some(hosts_ordering) = args.hosts_ordering {
        cmd.add_text_element("hosts_ordering", hosts_ordering.value());
    }
    for alert_id in &args.alert_ids {
        cmd.add_element("alert").set_attribute("id", alert_id.as_str());
    }
    if let Some(schedule_id) = args.schedule_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("schedule").set_attribute("id", schedule_id);
    }
    if let Some(schedule_periods) = args.schedule_periods {
        cmd.add_text_element("schedule_periods", schedule_periods.to_string());
    }
    if !args.observers.is_empty() {
        cmd.add_text_element("observers", to_comma_list(&args.observers));
    }
    add_preferences(&mut cmd, &args.preferences);
    Ok(cmd)
}

pub fn create_task(args: &CreateTask) -> Result<Request> {
    Ok(create_task_command("create_task", "config_id", "scan", args)?.into())
}

/// Create a task without target and scanner to import reports into.
pub fn create_container_task(name: &str, comment: Option<&str>) -> Result<Request> {
    required("create_container_task", "name", name)?;

    let mut cmd = XmlCommand::new("create_task");
    cmd.add_text_element("name", name);
    cmd.add_element("target").set_attribute("id", "0");
    cmd.add_optional_element("comment", comment);
    Ok(cmd.into())
}

/// Arguments of [`modify_task`] and [`modify_audit`](super::modify_audit).
///
/// `alert_ids` of `Some(vec![])` removes all alerts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyTask {
    pub name: Option<String>,
    pub config_id: Option<String>,
    pub target_id: Option<String>,
    pub scanner_id: Option<String>,
    pub alterable: Option<bool>,
    pub hosts_ordering: Option<HostsOrdering>,
    pub schedule_id: Option<String>,
    pub schedule_periods: Option<u32>,
    pub comment: Option<String>,
    pub alert_ids: Option<Vec<String>>,
    pub observers: Option<Vec<String>>,
    pub preferences: Vec<(String, String)>,
}

pub(super) fn modify_task_command(
    function: &str,
    task_argument: &str,
    task_id: impl EntityId,
    args: &ModifyTask,
) -> Result<Request> {
    let task_id = required_id(function, task_argument, task_id)?;

    let mut cmd = XmlCommand::new("modify_task");
    cmd.set_attribute("task_id", task_id);
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("comment", args.comment.as_deref());
    for (element, id) in [
        ("config", &args.config_id),
        ("scanner", &args.scanner_id),
        ("schedule", &args.schedule_id),
    ] {
        if let Some(id) = id.as_deref().filter(|id| !id.is_empty()) {
            cmd.add_element(element).set_attribute("id", id);
        }
    }
    if let Some(schedule_periods) = args.schedule_periods {
        cmd.add_text_element("schedule_periods", schedule_periods.to_string());
    }
    if let Some(target_id) = args.target_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("target").set_attribute("id", target_id);
    }
    add_bool_element(&mut cmd, "alterable", args.alterable);
    if let Some(hosts_ordering) = args.hosts_ordering {
        cmd.add_text_element("hosts_ordering", hosts_ordering.value());
    }
    match args.alert_ids.as_deref() {
        Some([]) => {
            cmd.add_element("alert").set_attribute("id", "0");
        }
        Some(alert_ids) => {
            for alert_id in alert_ids {
                cmd.add_element("alert").set_attribute("id", alert_id.as_str());
            }
        }
        None => {}
    }
    if let Some(observers) = &args.observers {
        cmd.add_text_element("observers", to_comma_list(observers));
    }
    add_preferences(&mut cmd, &args.preferences);
    Ok(cmd.into())
}

pub fn modify_task(task_id: impl EntityId, args: &ModifyTask) -> Result<Request> {
    modify_task_command("modify_task", "task_id", task_id, args)
}

pub fn clone_task(task_id: impl EntityId) -> Result<Request> {
    clone_entity("task", task_id)
}

pub fn delete_task(task_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("task", task_id, ultimate)
}

/// Arguments of [`get_tasks`] and [`get_audits`](super::get_audits).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetTasks {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub details: Option<bool>,
    pub schedules_only: Option<bool>,
    pub ignore_pagination: Option<bool>,
}

pub(super) fn get_tasks_command(usage_type: &str, args: &GetTasks) -> Request {
    let mut cmd = XmlCommand::new("get_tasks");
    cmd.set_attribute("usage_type", usage_type);
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "schedules_only", args.schedules_only);
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "ignore_pagination", args.ignore_pagination);
    cmd.into()
}

pub fn get_tasks(args: &GetTasks) -> Request {
    get_tasks_command("scan", args)
}

pub(super) fn get_task_command(
    function: &str,
    argument: &str,
    usage_type: &str,
    task_id: impl EntityId,
) -> Result<Request> {
    let task_id = required_id(function, argument, task_id)?;

    let mut cmd = XmlCommand::new("get_tasks");
    cmd.set_attribute("task_id", task_id)
        .set_attribute("usage_type", usage_type)
        .set_attribute("details", "1");
    Ok(cmd.into())
}

pub fn get_task(task_id: impl EntityId) -> Result<Request> {
    get_task_command("get_task", "task_id", "scan", task_id)
}

/// `<COMMAND task_id="ID"/>` for starting, stopping and resuming.
pub(super) fn task_action(
    command: &str,
    function: &str,
    argument: &str,
    task_id: impl EntityId,
) -> Result<Request> {
    let task_id = required_id(function, argument, task_id)?;
    let mut cmd = XmlCommand::new(command);
    cmd.set_attribute("task_id", task_id);
    Ok(cmd.into())
}

pub fn start_task(task_id: impl EntityId) -> Result<Request> {
    task_action("start_task", "start_task", "task_id", task_id)
}

pub fn stop_task(task_id: impl EntityId) -> Result<Request> {
    task_action("stop_task", "stop_task", "task_id", task_id)
}

pub fn resume_task(task_id: impl EntityId) -> Result<Request> {
    task_action("resume_task", "resume_task", "task_id", task_id)
}

/// Move a task to another sensor. Without `slave_id` the task moves to the
/// local scanner.
pub fn move_task(task_id: impl EntityId, slave_id: Option<&str>) -> Result<Request> {
    let task_id = required_id("move_task", "task_id", task_id)?;

    let mut cmd = XmlCommand::new("move_task");
    cmd.set_attribute("task_id", task_id)
        .set_attribute("slave_id", slave_id.unwrap_or_default());
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_task_bytes() {
        let args = CreateTask {
            hosts_ordering: Some(HostsOrdering::Reverse),
            alert_ids: vec!["a1".into()],
            schedule_periods: Some(0),
            observers: vec!["u1".into(), "u2".into()],
            preferences: vec![("max_checks".into(), "4".into())],
            ..CreateTask::new("t", "c1", "tg1", "s1")
        };
        assert_eq!(
            create_task(&args).unwrap().to_string(),
            "<create_task><name>t</name><usage_type>scan</usage_type>\
             <config id=\"c1\"/><target id=\"tg1\"/><scanner id=\"s1\"/>\
             <hosts_ordering>reverse</hosts_ordering><alert id=\"a1\"/>\
             <schedule_periods>0</schedule_periods><observers>u1,u2</observers>\
             <preferences><preference><scanner_name>max_checks</scanner_name>\
             <value>4</value></preference></preferences></create_task>"
        );
    }

    #[test]
    fn create_task_requires_arguments() {
        let err = create_task(&CreateTask::new("t", "", "tg1", "s1")).unwrap_err();
        assert_eq!(err.argument(), Some("config_id"));
        let err = create_task(&CreateTask::new("t", "c1", "0", "s1")).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn container_task() {
        assert_eq!(
            create_container_task("imported", None).unwrap().to_string(),
            "<create_task><name>imported</name><target id=\"0\"/></create_task>"
        );
    }

    #[test]
    fn modify_task_clears_alerts() {
        let args = ModifyTask {
            alert_ids: Some(vec![]),
            ..Default::default()
        };
        assert_eq!(
            modify_task("t1", &args).unwrap().to_string(),
            "<modify_task task_id=\"t1\"><alert id=\"0\"/></modify_task>"
        );
    }

    #[test]
    fn task_actions() {
        assert_eq!(
            start_task("t1").unwrap().to_string(),
            r#"<start_task task_id="t1"/>"#
        );
        assert_eq!(
            get_task("t1").unwrap().to_string(),
            r#"<get_tasks task_id="t1" usage_type="scan" details="1"/>"#
        );
        assert_eq!(
            move_task("t1", None).unwrap().to_string(),
            r#"<move_task task_id="t1" slave_id=""/>"#
        );
        assert_eq!(
            get_tasks(&Default::default()).to_string(),
            r#"<get_tasks usage_type="scan"/>"#
        );
    }
}
