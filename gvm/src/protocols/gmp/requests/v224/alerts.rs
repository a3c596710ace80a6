use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::{XmlCommand, XmlCommandElement};

gvm_enum! {
    pub enum AlertCondition {
        Always = "always" => "Always",
        Error = "error" => "Error",
        SeverityAtLeast = "severity_at_least" => "Severity at least",
        SeverityChanged = "severity_changed" => "Severity changed",
        FilterCountChanged = "filter_count_changed" => "Filter count changed",
        FilterCountAtLeast = "filter_count_at_least" => "Filter count at least",
    }
}

gvm_enum! {
    pub enum AlertEvent {
        TaskRunStatusChanged = "task_run_status_changed" => "Task run status changed",
        UpdatedSecinfoArrived = "updated_secinfo_arrived" => "Updated SecInfo arrived",
        NewSecinfoArrived = "new_secinfo_arrived" => "New SecInfo arrived",
        TicketReceived = "ticket_received" => "Ticket received",
        AssignedTicketChanged = "assigned_ticket_changed" => "Assigned ticket changed",
        OwnedTicketChanged = "owned_ticket_changed" => "Owned ticket changed",
    }
}

gvm_enum! {
    pub enum AlertMethod {
        Scp = "scp" => "SCP",
        Send = "send" => "Send",
        Smb = "smb" => "SMB",
        Snmp = "snmp" => "SNMP",
        Syslog = "syslog" => "Syslog",
        Email = "email" => "Email",
        StartTask = "start_task" => "Start Task",
        HttpGet = "http_get" => "HTTP Get",
        SourcefireConnector = "sourcefire_connector" => "Sourcefire Connector",
        VeriniceConnector = "verinice_connector" => "verinice Connector",
        TippingPoint = "tippingpoint" => "TippingPoint SMS",
        AlembaVfire = "alemba_vfire" => "Alemba vFire",
    }
}

/// Reject event, condition and method combinations the manager does not support.
fn check_event(
    function: &str,
    event: AlertEvent,
    condition: Option<AlertCondition>,
    method: Option<AlertMethod>,
) -> Result<()> {
    let condition = condition.ok_or_else(|| {
        Error::required_message(
            function,
            "condition",
            format!("condition is required for event {}", event.name()),
        )
    })?;
    let method = method.ok_or_else(|| {
        Error::required_message(
            function,
            "method",
            format!("method is required for event {}", event.name()),
        )
    })?;

    let (condition_ok, method_ok) = match event {
        AlertEvent::TaskRunStatusChanged => (true, true),
        AlertEvent::NewSecinfoArrived | AlertEvent::UpdatedSecinfoArrived => (
            condition == AlertCondition::Always,
            matches!(
                method,
                AlertMethod::Scp
                    | AlertMethod::Send
                    | AlertMethod::Smb
                    | AlertMethod::Snmp
                    | AlertMethod::Syslog
                    | AlertMethod::Email
            ),
        ),
        AlertEvent::TicketReceived
        | AlertEvent::OwnedTicketChanged
        | AlertEvent::AssignedTicketChanged => (
            condition == AlertCondition::Always,
            matches!(
                method,
                AlertMethod::Email | AlertMethod::StartTask | AlertMethod::Syslog
            ),
        ),
    };

    if !condition_ok {
        return Err(Error::invalid_message(
            function,
            "condition",
            format!(
                "Invalid condition {} for event {}",
                condition.name(),
                event.name()
            ),
        ));
    }
    if !method_ok {
        return Err(Error::invalid_message(
            function,
            "method",
            format!("Invalid method {} for event {}", method.name(), event.name()),
        ));
    }
    Ok(())
}

/// Add `<data>VALUE<name>KEY</name></data>` children.
fn add_data(element: &mut XmlCommandElement, data: &[(String, String)]) {
    for (key, value) in data {
        element
            .add_text_element("data", value.as_str())
            .add_text_element("name", key.as_str());
    }
}

/// Arguments of [`create_alert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAlert {
    pub name: String,
    pub condition: AlertCondition,
    pub event: AlertEvent,
    pub method: AlertMethod,
    pub method_data: Vec<(String, String)>,
    pub event_data: Vec<(String, String)>,
    pub condition_data: Vec<(String, String)>,
    pub filter_id: Option<String>,
    pub comment: Option<String>,
}

impl CreateAlert {
    pub fn new(
        name: impl Into<String>,
        condition: AlertCondition,
        event: AlertEvent,
        method: AlertMethod,
    ) -> Self {
        Self {
            name: name.into(),
            condition,
            event,
            method,
            method_data: Vec::new(),
            event_data: Vec::new(),
            condition_data: Vec::new(),
            filter_id: None,
            comment: None,
        }
    }
}

pub fn create_alert(args: &CreateAlert) -> Result<Request> {
    required("create_alert", "name", &args.name)?;
    check_event(
        "create_alert",
        args.event,
        Some(args.condition),
        Some(args.method),
    )?;

    let mut cmd = XmlCommand::new("create_alert");
    cmd.add_text_element("name", args.name.as_str());
    add_data(
        cmd.add_text_element("condition", args.condition.value()),
        &args.condition_data,
    );
    add_data(
        cmd.add_text_element("event", args.event.value()),
        &args.event_data,
    );
    add_data(
        cmd.add_text_element("method", args.method.value()),
        &args.method_data,
    );
    if let Some(filter_id) = args.filter_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("filter").set_attribute("id", filter_id);
    }
    cmd.add_optional_element("comment", args.comment.as_deref());
    Ok(cmd.into())
}

/// Arguments of [`modify_alert`]. Changing the event requires condition and method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyAlert {
    pub name: Option<String>,
    pub comment: Option<String>,
    pub filter_id: Option<String>,
    pub condition: Option<AlertCondition>,
    pub condition_data: Vec<(String, String)>,
    pub event: Option<AlertEvent>,
    pub event_data: Vec<(String, String)>,
    pub method: Option<AlertMethod>,
    pub method_data: Vec<(String, String)>,
}

pub fn modify_alert(alert_id: impl EntityId, args: &ModifyAlert) -> Result<Request> {
    let alert_id = required_id("modify_alert", "alert_id", alert_id)?;

    let mut cmd = XmlCommand::new("modify_alert");
    cmd.set_attribute("alert_id", alert_id);
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("comment", args.comment.as_deref());
    if let Some(filter_id) = args.filter_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("filter").set_attribute("id", filter_id);
    }
    if let Some(condition) = args.condition {
        add_data(
            cmd.add_text_element("condition", condition.value()),
            &args.condition_data,
        );
    }
    if let Some(method) = args.method {
        add_data(
            cmd.add_text_element("method", method.value()),
            &args.method_data,
        );
    }
    if let Some(event) = args.event {
        check_event("modify_alert", event, args.condition, args.method)?;
        add_data(
            cmd.add_text_element("event", event.value()),
            &args.event_data,
        );
    }
    Ok(cmd.into())
}

pub fn clone_alert(alert_id: impl EntityId) -> Result<Request> {
    clone_entity("alert", alert_id)
}

pub fn delete_alert(alert_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("alert", alert_id, ultimate)
}

/// Run an alert by ignoring its event and conditions.
pub fn test_alert(alert_id: impl EntityId) -> Result<Request> {
    let alert_id = required_id("test_alert", "alert_id", alert_id)?;
    let mut cmd = XmlCommand::new("test_alert");
    cmd.set_attribute("alert_id", alert_id);
    Ok(cmd.into())
}

/// Arguments of [`trigger_alert`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerAlert {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub report_format_id: Option<String>,
    pub delta_report_id: Option<String>,
}

/// Run an alert for a report.
pub fn trigger_alert(
    alert_id: impl EntityId,
    report_id: impl EntityId,
    args: &TriggerAlert,
) -> Result<Request> {
    let alert_id = required_id("trigger_alert", "alert_id", alert_id)?;
    let report_id = required_id("trigger_alert", "report_id", report_id)?;

    let mut cmd = XmlCommand::new("get_reports");
    cmd.set_attribute("report_id", report_id)
        .set_attribute("alert_id", alert_id);
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    cmd.set_optional_attribute("format_id", args.report_format_id.as_deref());
    cmd.set_optional_attribute("delta_report_id", args.delta_report_id.as_deref());
    Ok(cmd.into())
}

/// Arguments of [`get_alerts`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetAlerts {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub tasks: Option<bool>,
}

pub fn get_alerts(args: &GetAlerts) -> Request {
    let mut cmd = XmlCommand::new("get_alerts");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "tasks", args.tasks);
    cmd.into()
}

pub fn get_alert(alert_id: impl EntityId, tasks: Option<bool>) -> Result<Request> {
    let mut cmd = get_entity("alert", alert_id)?;
    set_bool(&mut cmd, "tasks", tasks);
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_alert_with_data() {
        let request = create_alert(&CreateAlert {
            method_data: vec![("to_address".into(), "a@b.c".into())],
            comment: Some("c".into()),
            ..CreateAlert::new(
                "foo",
                AlertCondition::Always,
                AlertEvent::TaskRunStatusChanged,
                AlertMethod::Email,
            )
        })
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<create_alert><name>foo</name><condition>Always</condition>\
             <event>Task run status changed</event>\
             <method>Email<data>a@b.c<name>to_address</name></data></method>\
             <comment>c</comment></create_alert>"
        );
    }

    #[test]
    fn secinfo_events_require_always() {
        let err = create_alert(&CreateAlert::new(
            "foo",
            AlertCondition::SeverityAtLeast,
            AlertEvent::NewSecinfoArrived,
            AlertMethod::Email,
        ))
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(err.argument(), Some("condition"));
    }

    #[test]
    fn ticket_events_restrict_methods() {
        let err = create_alert(&CreateAlert::new(
            "foo",
            AlertCondition::Always,
            AlertEvent::TicketReceived,
            AlertMethod::Scp,
        ))
        .unwrap_err();
        assert_eq!(err.argument(), Some("method"));
    }

    #[test]
    fn modify_event_requires_condition_and_method() {
        let err = modify_alert(
            "a1",
            &ModifyAlert {
                event: Some(AlertEvent::TaskRunStatusChanged),
                method: Some(AlertMethod::Email),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::RequiredArgument { .. }));
        assert_eq!(err.argument(), Some("condition"));
    }

    #[test]
    fn trigger_alert_bytes() {
        let request = trigger_alert("a1", "r1", &TriggerAlert::default()).unwrap();
        assert_eq!(
            request.to_string(),
            r#"<get_reports report_id="r1" alert_id="a1"/>"#
        );
    }

    #[test]
    fn get_alerts_bytes() {
        let request = get_alerts(&GetAlerts {
            filter_string: Some("name=foo".into()),
            trash: Some(true),
            ..Default::default()
        });
        assert_eq!(
            request.to_string(),
            r#"<get_alerts filter="name=foo" trash="1"/>"#
        );
        assert_eq!(
            get_alert("a1", Some(false)).unwrap().to_string(),
            r#"<get_alerts alert_id="a1" tasks="0"/>"#
        );
    }

    #[test]
    fn alert_method_from_string() {
        assert_eq!(
            AlertMethod::from_string(Some("verinice connector")).unwrap(),
            Some(AlertMethod::VeriniceConnector)
        );
        assert_eq!(
            AlertMethod::from_string(Some("tippingpoint")).unwrap(),
            Some(AlertMethod::TippingPoint)
        );
    }
}
