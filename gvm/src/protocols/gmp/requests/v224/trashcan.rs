use crate::error::Result;
use crate::protocols::gmp::requests::{required_id, EntityId};
use crate::sansio::Request;
use crate::xml::XmlCommand;

/// Permanently delete everything in the trashcan.
pub fn empty_trashcan() -> Request {
    XmlCommand::new("empty_trashcan").into()
}

/// Restore the entity `entity_id` from the trashcan.
pub fn restore_from_trashcan(entity_id: impl EntityId) -> Result<Request> {
    let entity_id = required_id("restore_from_trashcan", "entity_id", entity_id)?;
    let mut cmd = XmlCommand::new("restore");
    cmd.set_attribute("id", entity_id);
    Ok(cmd.into())
}
