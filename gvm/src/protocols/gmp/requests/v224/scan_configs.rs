use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{required, required_id, set_bool, EntityId};
use crate::sansio::Request;
use crate::xml::{to_base64, to_bool, XmlCommand};

/// One family of a family selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilySelection {
    pub name: String,
    /// Add NVTs of this family added by feed updates.
    pub growing: bool,
    /// Select every NVT of this family.
    pub all: bool,
}

/// `<create_config>` copying `base_id`. Shared with policies.
pub(super) fn create_config(
    function: &str,
    base_argument: &str,
    usage_type: &str,
    base_id: impl EntityId,
    name: &str,
    comment: Option<&str>,
) -> Result<Request> {
    let base_id = required_id(function, base_argument, base_id)?;
    required(function, "name", name)?;

    let mut cmd = XmlCommand::new("create_config");
    cmd.add_optional_element("comment", comment);
    cmd.add_text_element("copy", base_id);
    cmd.add_text_element("name", name);
    cmd.add_text_element("usage_type", usage_type);
    Ok(cmd.into())
}

pub(super) fn import_config(function: &str, argument: &str, config: &str) -> Result<Request> {
    required(function, argument, config)?;

    let mut cmd = XmlCommand::new("create_config");
    cmd.append_xml_str(config).map_err(|e| {
        Error::invalid_message(
            function,
            argument,
            format!("Invalid xml passed as {} to {} {}", argument, function, e),
        )
    })?;
    Ok(cmd.into())
}

pub(super) fn clone_config(function: &str, argument: &str, id: impl EntityId) -> Result<Request> {
    let id = required_id(function, argument, id)?;
    let mut cmd = XmlCommand::new("create_config");
    cmd.add_text_element("copy", id);
    Ok(cmd.into())
}

pub(super) fn delete_config(
    function: &str,
    argument: &str,
    id: impl EntityId,
    ultimate: bool,
) -> Result<Request> {
    let id = required_id(function, argument, id)?;
    let mut cmd = XmlCommand::new("delete_config");
    cmd.set_attribute("config_id", id)
        .set_attribute("ultimate", to_bool(ultimate));
    Ok(cmd.into())
}

/// `<modify_config config_id="ID"/>` to be filled by the caller.
pub(super) fn modify_config(
    function: &str,
    argument: &str,
    id: impl EntityId,
) -> Result<XmlCommand> {
    let id = required_id(function, argument, id)?;
    let mut cmd = XmlCommand::new("modify_config");
    cmd.set_attribute("config_id", id);
    Ok(cmd)
}

pub(super) fn set_config_comment(
    function: &str,
    argument: &str,
    id: impl EntityId,
    comment: &str,
) -> Result<Request> {
    let mut cmd = modify_config(function, argument, id)?;
    cmd.add_text_element("comment", comment);
    Ok(cmd.into())
}

pub(super) fn set_config_name(
    function: &str,
    argument: &str,
    id: impl EntityId,
    name: &str,
) -> Result<Request> {
    let mut cmd = modify_config(function, argument, id)?;
    required(function, "name", name)?;
    cmd.add_text_element("name", name);
    Ok(cmd.into())
}

pub(super) fn set_config_scanner_preference(
    function: &str,
    argument: &str,
    id: impl EntityId,
    name: &str,
    value: Option<&str>,
) -> Result<Request> {
    let mut cmd = modify_config(function, argument, id)?;
    required(function, "name", name)?;

    let preference = cmd.add_element("scanner_preference");
    preference.add_text_element("name", name);
    if let Some(value) = value {
        preference.add_text_element("value", to_base64(value));
    }
    Ok(cmd.into())
}

pub(super) fn set_config_nvt_preference(
    function: &str,
    argument: &str,
    id: impl EntityId,
    name: &str,
    nvt_oid: &str,
    value: Option<&str>,
) -> Result<Request> {
    let mut cmd = modify_config(function, argument, id)?;
    required(function, "nvt_oid", nvt_oid)?;
    required(function, "name", name)?;

    let preference = cmd.add_element("preference");
    preference.add_element("nvt").set_attribute("oid", nvt_oid);
    preference.add_text_element("name", name);
    if let Some(value) = value {
        preference.add_text_element("value", to_base64(value));
    }
    Ok(cmd.into())
}

pub(super) fn set_config_nvt_selection(
    function: &str,
    argument: &str,
    id: impl EntityId,
    family: &str,
    nvt_oids: &[String],
) -> Result<Request> {
    let mut cmd = modify_config(function, argument, id)?;
    required(function, "family", family)?;

    let selection = cmd.add_element("nvt_selection");
    selection.add_text_element("family", family);
    for nvt_oid in nvt_oids {
        selection.add_element("nvt").set_attribute("oid", nvt_oid.as_str());
    }
    Ok(cmd.into())
}

pub(super) fn set_config_family_selection(
    function: &str,
    argument: &str,
    id: impl EntityId,
    families: &[FamilySelection],
    auto_add_new_families: bool,
) -> Result<Request> {
    let mut cmd = modify_config(function, argument, id)?;

    let selection = cmd.add_element("family_selection");
    selection.add_text_element("growing", to_bool(auto_add_new_families));
    for family in families {
        required(function, "families", &family.name)?;
        let element = selection.add_element("family");
        element.add_text_element("name", family.name.as_str());
        element.add_text_element("all", to_bool(family.all));
        element.add_text_element("growing", to_bool(family.growing));
    }
    Ok(cmd.into())
}

/// Arguments of [`get_scan_configs`] and [`get_policies`](super::get_policies).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetScanConfigs {
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    pub trash: Option<bool>,
    pub details: Option<bool>,
    pub families: Option<bool>,
    pub preferences: Option<bool>,
    /// Include the tasks using a scan config or the audits using a policy.
    pub tasks: Option<bool>,
}

pub(super) fn get_configs(
    usage_type: &str,
    tasks_attribute: &str,
    args: &GetScanConfigs,
) -> Request {
    let mut cmd = XmlCommand::new("get_configs");
    cmd.set_attribute("usage_type", usage_type);
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());
    set_bool(&mut cmd, "trash", args.trash);
    set_bool(&mut cmd, "details", args.details);
    set_bool(&mut cmd, "families", args.families);
    set_bool(&mut cmd, "preferences", args.preferences);
    set_bool(&mut cmd, tasks_attribute, args.tasks);
    cmd.into()
}

pub(super) fn get_config(
    function: &str,
    argument: &str,
    usage_type: &str,
    tasks_attribute: &str,
    id: impl EntityId,
    tasks: Option<bool>,
) -> Result<Request> {
    let id = required_id(function, argument, id)?;

    let mut cmd = XmlCommand::new("get_configs");
    cmd.set_attribute("config_id", id)
        .set_attribute("usage_type", usage_type)
        .set_attribute("details", "1");
    set_bool(&mut cmd, tasks_attribute, tasks);
    Ok(cmd.into())
}

/// Create a scan config by copying `config_id`.
pub fn create_scan_config(
    config_id: impl EntityId,
    name: &str,
    comment: Option<&str>,
) -> Result<Request> {
    create_config("create_scan_config", "config_id", "scan", config_id, name, comment)
}

pub fn import_scan_config(config: &str) -> Result<Request> {
    import_config("import_scan_config", "config", config)
}

pub fn clone_scan_config(config_id: impl EntityId) -> Result<Request> {
    clone_config("clone_scan_config", "config_id", config_id)
}

pub fn delete_scan_config(config_id: impl EntityId, ultimate: bool) -> Result<Request> {
    delete_config("delete_scan_config", "config_id", config_id, ultimate)
}

pub fn get_scan_configs(args: &GetScanConfigs) -> Request {
    get_configs("scan", "tasks", args)
}

pub fn get_scan_config(config_id: impl EntityId, tasks: Option<bool>) -> Result<Request> {
    get_config("get_scan_config", "config_id", "scan", "tasks", config_id, tasks)
}

/// List the preferences of a scan config, optionally restricted to one NVT.
pub fn get_scan_config_preferences(nvt_oid: Option<&str>, config_id: Option<&str>) -> Request {
    let mut cmd = XmlCommand::new("get_preferences");
    cmd.set_optional_attribute("nvt_oid", nvt_oid);
    cmd.set_optional_attribute("config_id", config_id);
    cmd.into()
}

pub fn get_scan_config_preference(
    name: &str,
    nvt_oid: Option<&str>,
    config_id: Option<&str>,
) -> Result<Request> {
    required("get_scan_config_preference", "name", name)?;

    let mut cmd = XmlCommand::new("get_preferences");
    cmd.set_attribute("preference", name);
    cmd.set_optional_attribute("nvt_oid", nvt_oid);
    cmd.set_optional_attribute("config_id", config_id);
    Ok(cmd.into())
}

pub fn modify_scan_config_set_comment(config_id: impl EntityId, comment: &str) -> Result<Request> {
    set_config_comment("modify_scan_config_set_comment", "config_id", config_id, comment)
}

pub fn modify_scan_config_set_name(config_id: impl EntityId, name: &str) -> Result<Request> {
    set_config_name("modify_scan_config_set_name", "config_id", config_id, name)
}

/// Set a scanner preference. The value is sent base64 encoded.
pub fn modify_scan_config_set_scanner_preference(
    config_id: impl EntityId,
    name: &str,
    value: Option<&str>,
) -> Result<Request> {
    set_config_scanner_preference(
        "modify_scan_config_set_scanner_preference",
        "config_id",
        config_id,
        name,
        value,
    )
}

/// Set a preference of the NVT `nvt_oid`. The value is sent base64 encoded.
pub fn modify_scan_config_set_nvt_preference(
    config_id: impl EntityId,
    name: &str,
    nvt_oid: &str,
    value: Option<&str>,
) -> Result<Request> {
    set_config_nvt_preference(
        "modify_scan_config_set_nvt_preference",
        "config_id",
        config_id,
        name,
        nvt_oid,
        value,
    )
}

/// Replace the selected NVTs of `family`.
pub fn modify_scan_config_set_nvt_selection(
    config_id: impl EntityId,
    family: &str,
    nvt_oids: &[String],
) -> Result<Request> {
    set_config_nvt_selection(
        "modify_scan_config_set_nvt_selection",
        "config_id",
        config_id,
        family,
        nvt_oids,
    )
}

pub fn modify_scan_config_set_family_selection(
    config_id: impl EntityId,
    families: &[FamilySelection],
    auto_add_new_families: bool,
) -> Result<Request> {
    set_config_family_selection(
        "modify_scan_config_set_family_selection",
        "config_id",
        config_id,
        families,
        auto_add_new_families,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_scan_config_copies() {
        assert_eq!(
            create_scan_config("base", "mine", None).unwrap().to_string(),
            "<create_config><copy>base</copy><name>mine</name>\
             <usage_type>scan</usage_type></create_config>"
        );
    }

    #[test]
    fn preferences_are_base64() {
        let request =
            modify_scan_config_set_nvt_preference("c1", "Timeout", "1.2.3", Some("30")).unwrap();
        assert_eq!(
            request.to_string(),
            "<modify_config config_id=\"c1\"><preference><nvt oid=\"1.2.3\"/>\
             <name>Timeout</name><value>MzA=</value></preference></modify_config>"
        );

        let request = modify_scan_config_set_scanner_preference("c1", "max_hosts", None).unwrap();
        assert_eq!(
            request.to_string(),
            "<modify_config config_id=\"c1\"><scanner_preference><name>max_hosts</name>\
             </scanner_preference></modify_config>"
        );
    }

    #[test]
    fn empty_comment_is_allowed() {
        assert_eq!(
            modify_scan_config_set_comment("c1", "").unwrap().to_string(),
            "<modify_config config_id=\"c1\"><comment/></modify_config>"
        );
        assert!(modify_scan_config_set_name("c1", "").is_err());
    }

    #[test]
    fn family_selection() {
        let families = [FamilySelection {
            name: "Debian Local Security Checks".into(),
            growing: true,
            all: false,
        }];
        assert_eq!(
            modify_scan_config_set_family_selection("c1", &families, false)
                .unwrap()
                .to_string(),
            "<modify_config config_id=\"c1\"><family_selection><growing>0</growing>\
             <family><name>Debian Local Security Checks</name><all>0</all>\
             <growing>1</growing></family></family_selection></modify_config>"
        );
    }

    #[test]
    fn nvt_selection() {
        let oids = ["1.2.3".to_string(), "1.2.4".to_string()];
        assert_eq!(
            modify_scan_config_set_nvt_selection("c1", "Web", &oids).unwrap().to_string(),
            "<modify_config config_id=\"c1\"><nvt_selection><family>Web</family>\
             <nvt oid=\"1.2.3\"/><nvt oid=\"1.2.4\"/></nvt_selection></modify_config>"
        );
    }

    #[test]
    fn get_scan_config_details() {
        assert_eq!(
            get_scan_config("c1", Some(true)).unwrap().to_string(),
            r#"<get_configs config_id="c1" usage_type="scan" details="1" tasks="1"/>"#
        );
        assert_eq!(
            get_scan_config_preference("Timeout", None, Some("c1")).unwrap().to_string(),
            r#"<get_preferences preference="Timeout" config_id="c1"/>"#
        );
    }
}
