use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{
    clone_entity, delete_entity, get_entity, required, required_id, set_bool, EntityId, GvmEnum,
};
use crate::sansio::Request;
use crate::xml::XmlCommand;

gvm_enum! {
    pub enum TicketStatus {
        Open = "open" => "Open",
        Fixed = "fixed" => "Fixed",
        Closed = "closed" => "Closed",
    }
}

/// Create a ticket for a result and assign it to a user.
pub fn create_ticket(
    result_id: impl EntityId,
    assigned_to_user_id: impl EntityId,
    note: &str,
    comment: Option<&str>,
) -> Result<Request> {
    const FUNCTION: &str = "create_ticket";
    let result_id = required_id(FUNCTION, "result_id", result_id)?;
    let assigned_to_user_id = required_id(FUNCTION, "assigned_to_user_id", assigned_to_user_id)?;
    required(FUNCTION, "note", note)?;

    let mut cmd = XmlCommand::new("create_ticket");
    cmd.add_element("result").set_attribute("id", result_id);
    cmd.add_element("assigned_to")
        .add_element("user")
        .set_attribute("id", assigned_to_user_id);
    cmd.add_text_element("open_note", note);
    cmd.add_optional_element("comment", comment);
    Ok(cmd.into())
}

/// Arguments of [`modify_ticket`]. A status change needs a note and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyTicket {
    pub status: Option<TicketStatus>,
    pub note: Option<String>,
    pub assigned_to_user_id: Option<String>,
    pub comment: Option<String>,
}

pub fn modify_ticket(ticket_id: impl EntityId, args: &ModifyTicket) -> Result<Request> {
    const FUNCTION: &str = "modify_ticket";
    let ticket_id = required_id(FUNCTION, "ticket_id", ticket_id)?;

    let note = args.note.as_deref().filter(|n| !n.is_empty());
    let status = match (args.status, note) {
        (Some(_), None) => return Err(Error::required(FUNCTION, "note")),
        (None, Some(_)) => return Err(Error::required(FUNCTION, "status")),
        (Some(status), Some(note)) => Some((status, note)),
        (None, None) => None,
    };

    let mut cmd = XmlCommand::new("modify_ticket");
    cmd.set_attribute("ticket_id", ticket_id);
    if let Some(user_id) = args.assigned_to_user_id.as_deref().filter(|id| !id.is_empty()) {
        cmd.add_element("assigned_to")
            .add_element("user")
            .set_attribute("id", user_id);
    }
    if let Some((status, note)) = status {
        cmd.add_text_element("status", status.value());
        cmd.add_text_element(format!("{}_note", status.name()), note);
    }
    cmd.add_optional_element("comment", args.comment.as_deref());
    Ok(cmd.into())
}

pub fn clone_ticket(ticket_id: impl EntityId) -> Result<Request> {
    clone_entity("ticket", ticket_id)
}

pub fn delete_ticket(ticket_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_entity("ticket", ticket_id, ultimate)
}

pub fn get_tickets(
    filter_string: Option<&str>,
    filter_id: Option<&str>,
    trash: Option<bool>,
) -> Request {
    let mut cmd = XmlCommand::new("get_tickets");
    cmd.add_filter(filter_string, filter_id);
    set_bool(&mut cmd, "trash", trash);
    cmd.into()
}

pub fn get_ticket(ticket_id: impl EntityId) -> Result<Request> {
    Ok(get_entity("ticket", ticket_id)?.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ticket_bytes() {
        assert_eq!(
            create_ticket("r1", "u1", "look at this", None).unwrap().to_string(),
            "<create_ticket><result id=\"r1\"/><assigned_to><user id=\"u1\"/></assigned_to>\
             <open_note>look at this</open_note></create_ticket>"
        );
    }

    #[test]
    fn status_and_note_are_coupled() {
        let err = modify_ticket(
            "t1",
            &ModifyTicket {
                status: Some(TicketStatus::Closed),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("note"));

        let err = modify_ticket(
            "t1",
            &ModifyTicket {
                note: Some("done".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.argument(), Some("status"));

        let request = modify_ticket(
            "t1",
            &ModifyTicket {
                status: Some(TicketStatus::Fixed),
                note: Some("patched".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<modify_ticket ticket_id=\"t1\"><status>Fixed</status>\
             <fixed_note>patched</fixed_note></modify_ticket>"
        );
    }
}
