use crate::error::Result;
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Create a schedule from an iCalendar `VCALENDAR` and an IANA timezone name.
///
/// Neither value is interpreted locally.
pub fn create_schedule(
    name: &str,
    icalendar: &str,
    timezone: &str,
    comment: Option<&str>,
) -> Result<Request> {
    const FUNCTION: &str = "create_schedule";
    required(FUNCTION, "name", name)?;
    required(FUNCTION, "icalendar", icalendar)?;
    required(FUNCTION, "timezone", timezone)?;

    let mut cmd = XmlCommand::new("create_schedule");
    cmd.add_text_element("name", name);
    cmd.add_text_element("icalendar", icalendar);
    cmd.add_text_element("timezone", timezone);
    cmd.add_optional_element("comment", comment);
    Ok(cmd.into())
}

/// Arguments of [`modify_schedule`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifySchedule {
    pub name: Option<String>,
    pub icalendar: Option<String>,
    pub timezone: Option<String>,
    pub comment: Option<String>,
}

pub fn modify_schedule(schedule_id: impl EntityId, args: &ModifySchedule) -> Result<Request> {
    let schedule_id = required_id("modify_schedule", "schedule_id", schedule_id)?;

    let mut cmd = XmlCommand::new("modify_schedule");
    cmd.set_attribute("schedule_id", schedule_id);
    cmd.add_optional_element("name", args.name.as_deref());
    cmd.add_optional_element("icalendar", args.icalendar.as_deref());
    cmd.add_optional_element("timezone", args.timezone.as_deref());
    cmd.add_optional_element("comment", args.comment.as_deref());
    Ok(cmd.into())
}

pub fn clone_schedule(schedule_id: impl EntityId) -> Result<Request> {
    clone_entity("schedule", schedule_id)
}

pub fn delete_schedule(schedule_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("schedule", schedule_id, ultimate)
}

/// Arguments of [`get_schedules`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetSchedules {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub tasks: Option<bool>,
}

pub fn get_schedules(args: &GetSchedules) -> Request {
    let mut cmd = XmlCommand::new("get_schedules");
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "tasks", args.tasks);
    cmd.into()
}

pub fn get_schedule(schedule_id: impl EntityId, tasks: Option<bool>) -> Result<Request> {
    let mut cmd = get_entity("schedule", schedule_id)?;
    set_bool(&mut cmd, "tasks", tasks);
    Ok(cmd.into())
}
