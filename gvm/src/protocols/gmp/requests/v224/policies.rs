//! Policies are scan configs used by audits.

use crate::error::Result;
use crate::protocols::gmp::requests::EntityId;
use crate::sansio::Request;

use super::scan_configs::{
    clone_config, create_config, delete_config, get_config, get_configs, import_config,
    set_config_comment, set_config_family_selection, set_config_name, set_config_nvt_preference,
    set_config_nvt_selection, set_config_scanner_preference,
};
use super::{FamilySelection, GetScanConfigs};

/// The empty base policy new policies are copied from by default.
pub const BASE_POLICY_ID: &str = "085569ce-73ed-11df-83c3-002264764cea";

pub type GetPolicies = GetScanConfigs;

/// Create a policy by copying `policy_id` or the empty base policy.
pub fn create_policy(
    name: &str,
    policy_id: Option<&str>,
    comment: Option<&str>,
) -> Result<Request> {
    create_config(
        "create_policy",
        "policy_id",
        "policy",
        policy_id.unwrap_or(BASE_POLICY_ID),
        name,
        comment,
    )
}

pub fn import_policy(policy: &str) -> Result<Request> {
    import_config("import_policy", "policy", policy)
}

pub fn clone_policy(policy_id: impl EntityId) -> Result<Request> {
    clone_config("clone_policy", "policy_id", policy_id)
}

pub fn delete_policy(policy_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_config("delete_policy", "policy_id", policy_id, ultimate)
}

/// List policies. `tasks` asks for the audits using each policy.
pub fn get_policies(args: &GetPolicies) -> Request {
    get_configs("policy", "tasks", args)
}

pub fn get_policy(policy_id: impl EntityId, audits: Option<bool>) -> Result<Request> {
    get_config("get_policy", "policy_id", "policy", "tasks", policy_id, audits)
}

pub fn modify_policy_set_comment(policy_id: impl EntityId, comment: &str) -> Result<Request> {
    set_config_comment("modify_policy_set_comment", "policy_id", policy_id, comment)
}

pub fn modify_policy_set_name(policy_id: impl EntityId, name: &str) -> Result<Request> {
    set_config_name("modify_policy_set_name", "policy_id", policy_id, name)
}

pub fn modify_policy_set_scanner_preference(
    policy_id: impl EntityId,
    name: &str,
    value: Option<&str>,
) -> Result<Request> {
    set_config_scanner_preference(
        "modify_policy_set_scanner_preference",
        "policy_id",
        policy_id,
        name,
        value,
    )
}

pub fn modify_policy_set_nvt_preference(
    policy_id: impl EntityId,
    name: &str,
    nvt_oid: &str,
    value: Option<&str>,
) -> Result<Request> {
    set_config_nvt_preference(
        "modify_policy_set_nvt_preference",
        "policy_id",
        policy_id,
        name,
        nvt_oid,
        value,
    )
}

pub fn modify_policy_set_nvt_selection(
    policy_id: impl EntityId,
    family: &str,
    nvt_oids: &[String],
) -> Result<Request> {
    set_config_nvt_selection(
        "modify_policy_set_nvt_selection",
        "policy_id",
        policy_id,
        family,
        nvt_oids,
    )
}

pub fn modify_policy_set_family_selection(
    policy_id: impl EntityId,
    families: &[FamilySelection],
    auto_add_new_families: bool,
) -> Result<Request> {
    set_config_family_selection(
        "modify_policy_set_family_selection",
        "policy_id",
        policy_id,
        families,
        auto_add_new_families,
    )
}
