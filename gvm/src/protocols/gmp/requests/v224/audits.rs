//! Audits are compliance tasks scanning with a policy.

use crate::error::Result;
use crate::protocols::gmp::requests::{required_id, EntityId};
use crate::sansio::Request;
use crate::xml::{to_bool, XmlCommand};

use super::tasks::{
    create_task_command, get_task_command, get_tasks_command, modify_task_command, task_action,
};
use super::{CreateTask, GetTasks, ModifyTask};

pub type CreateAudit = CreateTask;
pub type ModifyAudit = ModifyTask;
pub type GetAudits = GetTasks;

pub fn create_audit(args: &CreateAudit) -> Result<Request> {
    Ok(create_task_command("create_audit", "policy_id", "audit", args)?.into())
}

pub fn modify_audit(audit_id: impl EntityId, args: &ModifyAudit) -> Result<Request> {
    modify_task_command("modify_audit", "audit_id", audit_id, args)
}

pub fn clone_audit(audit_id: impl EntityId) -> Result<Request> {
    let audit_id = required_id("clone_audit", "audit_id", audit_id)?;
    let mut cmd = XmlCommand::new("create_task");
    cmd.add_text_element("copy", audit_id);
    Ok(cmd.into())
}

pub fn delete_audit(audit_id: impl EntityId, ultimate: bool) -> Result<Request> {
    let audit_id = required_id("delete_audit", "audit_id", audit_id)?;
    let mut cmd = XmlCommand::new("delete_task");
    cmd.set_attribute("task_id", audit_id)
        .set_attribute("ultimate", to_bool(ultimate));
    Ok(cmd.into())
}

pub fn get_audits(args: &GetAudits) -> Request {
    get_tasks_command("audit", args)
}

pub fn get_audit(audit_id: impl EntityId) -> Result<Request> {
    get_task_command("get_audit", "audit_id", "audit", audit_id)
}

pub fn start_audit(audit_id: impl EntityId) -> Result<Request> {
    task_action("start_task", "start_audit", "audit_id", audit_id)
}

pub fn stop_audit(audit_id: impl EntityId) -> Result<Request> {
    task_action("stop_task", "stop_audit", "audit_id", audit_id)
}

pub fn resume_audit(audit_id: impl EntityId) -> Result<Request> {
    task_action("resume_task", "resume_audit", "audit_id", audit_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_audit_uses_policy() {
        let request = create_audit(&CreateAudit::new("a", "p1", "tg1", "s1")).unwrap();
        assert_eq!(
            request.to_string(),
            "<create_task><name>a</name><usage_type>audit</usage_type>\
             <config id=\"p1\"/><target id=\"tg1\"/><scanner id=\"s1\"/></create_task>"
        );
        let err = create_audit(&CreateAudit::new("a", "", "tg1", "s1")).unwrap_err();
        assert_eq!(err.argument(), Some("policy_id"));
        assert_eq!(err.function(), Some("create_audit"));
    }

    #[test]
    fn audit_commands_are_task_commands() {
        assert_eq!(
            get_audits(&Default::default()).to_string(),
            r#"<get_tasks usage_type="audit"/>"#
        );
        assert_eq!(
            get_audit("a1").unwrap().to_string(),
            r#"<get_tasks task_id="a1" usage_type="audit" details="1"/>"#
        );
        assert_eq!(
            stop_audit("a1").unwrap().to_string(),
            r#"<stop_task task_id="a1"/>"#
        );
        assert_eq!(
            clone_audit("a1").unwrap().to_string(),
            "<create_task><copy>a1</copy></create_task>"
        );
        assert_eq!(
            delete_audit("a1", false).unwrap().to_string(),
            r#"<delete_task task_id="a1" ultimate="0"/>"#
        );
        let err = delete_audit("", false).unwrap_err();
        assert_eq!(err.argument(), Some("audit_id"));
    }
}
