use crate::error::Result;
use crate::protocol::GvmProtocol;
use crate::protocols::gmp::requests::v224 as requests;
use crate::protocols::gmp::requests::EntityId;
use crate::sansio::{Request, Response};
use crate::transform::{ResponseTransform, StrTransform};
use crate::transport::Transport;

use self::requests::{
    Annotation, CreateAlert, CreateAudit, CreateCredential, CreateFilter, CreateGroup,
    CreatePermission, CreateScanner, CreateTag, CreateTarget, CreateTask, CreateUser, DeleteUser,
    EntityType, FamilySelection, FeedType, GetAggregates, GetAlerts, GetAudits, GetCredential,
    GetCredentials, GetFilters, GetInfoList, GetNotes, GetOverrides, GetPolicies, GetPortLists,
    GetReport, GetReportFormats, GetReports, GetResults, GetScanConfigNvts, GetScanConfigs,
    GetScanners, GetSchedules, GetSystemReports, GetTags, GetTargets, GetTasks,
    GetTlsCertificates, HelpFormat, InfoType, ModifyAlert, ModifyAudit, ModifyCredential,
    ModifyFilter, ModifyGroup, ModifyPermission, ModifyReportFormat, ModifyRole, ModifyScanner,
    ModifySchedule, ModifyTag, ModifyTarget, ModifyTask, ModifyTicket, ModifyTlsCertificate,
    ModifyUser, PortRangeType, TriggerAlert,
};

/// A GMP 22.4 session.
///
/// Each operation builds its request, sends it and passes the response through
/// the session transform. Argument validation happens before anything is
/// sent.
pub struct GmpV224<T: Transport, F: ResponseTransform = StrTransform> {
    protocol: GvmProtocol<T, F>,
    authenticated: bool,
}

impl<T: Transport> GmpV224<T, StrTransform> {
    pub fn new(transport: T) -> Self {
        Self::from_protocol(GvmProtocol::new(transport))
    }
}

impl<T: Transport, F: ResponseTransform> GmpV224<T, F> {
    pub fn with_transform(transport: T, transform: F) -> Self {
        Self::from_protocol(GvmProtocol::with_transform(transport, transform))
    }

    pub(crate) fn from_protocol(protocol: GvmProtocol<T, F>) -> Self {
        Self {
            protocol,
            authenticated: false,
        }
    }

    pub fn protocol_version(&self) -> (u32, u32) {
        (22, 4)
    }

    /// Whether an [`authenticate`](Self::authenticate) call succeeded.
    ///
    /// Operations are sent regardless; the server decides what an
    /// unauthenticated session may do.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn is_connected(&self) -> bool {
        self.protocol.is_connected()
    }

    pub fn connect(&mut self) -> Result<()> {
        self.protocol.connect()
    }

    pub fn disconnect(&mut self) -> Result<()> {
        self.protocol.disconnect()
    }

    pub fn send_request(&mut self, request: Request) -> Result<Response> {
        self.protocol.send_request(request)
    }

    pub fn send_request_and_transform(&mut self, request: Request) -> Result<F::Output> {
        self.protocol.send_request_and_transform(request)
    }

    /// Send a raw XML command.
    pub fn send_command(&mut self, xml: &str) -> Result<F::Output> {
        self.protocol.send_command(xml)
    }

    pub fn protocol(&self) -> &GvmProtocol<T, F> {
        &self.protocol
    }

    pub fn protocol_mut(&mut self) -> &mut GvmProtocol<T, F> {
        &mut self.protocol
    }

    /// Log in. A success status marks the session as authenticated.
    pub fn authenticate(&mut self, username: &str, password: &str) -> Result<F::Output> {
        let request = requests::authenticate(username, password)?;
        let response = self.protocol.send_request(request)?;
        if response.is_success() {
            self.authenticated = true;
        }
        self.protocol.transform(response)
    }

    /// Change the settings of an authentication method group, e.g. `method:ldap_connect`.
    pub fn modify_auth<I, K, V>(&mut self, group_name: &str, settings: I) -> Result<F::Output>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let request = requests::modify_auth(group_name, settings)?;
        self.send_request_and_transform(request)
    }

    operations! {
        requests;
        fn get_aggregates(args: &GetAggregates<EntityType>);
        fn create_alert(args: &CreateAlert);
        fn modify_alert(alert_id: impl EntityId, args: &ModifyAlert);
        fn clone_alert(alert_id: impl EntityId);
        fn delete_alert(alert_id: impl EntityId, ultimate: bool);
        fn test_alert(alert_id: impl EntityId);
        fn trigger_alert(alert_id: impl EntityId, report_id: impl EntityId, args: &TriggerAlert);
        fn get_alerts(args: &GetAlerts);
        fn get_alert(alert_id: impl EntityId, tasks: Option<bool>);
        fn create_audit(args: &CreateAudit);
        fn modify_audit(audit_id: impl EntityId, args: &ModifyAudit);
        fn clone_audit(audit_id: impl EntityId);
        fn delete_audit(audit_id: impl EntityId, ultimate: bool);
        fn get_audits(args: &GetAudits);
        fn get_audit(audit_id: impl EntityId);
        fn start_audit(audit_id: impl EntityId);
        fn stop_audit(audit_id: impl EntityId);
        fn resume_audit(audit_id: impl EntityId);
        fn describe_auth();
        fn create_credential(args: &CreateCredential);
        fn modify_credential(credential_id: impl EntityId, args: &ModifyCredential);
        fn clone_credential(credential_id: impl EntityId);
        fn delete_credential(credential_id: impl EntityId, ultimate: bool);
        fn get_credentials(args: &GetCredentials);
        fn get_credential(credential_id: impl EntityId, args: &GetCredential);
        fn get_feeds();
        fn get_feed(feed_type: FeedType);
        fn create_filter(args: &CreateFilter);
        fn modify_filter(filter_id: impl EntityId, args: &ModifyFilter);
        fn clone_filter(filter_id: impl EntityId);
        fn delete_filter(filter_id: impl EntityId, ultimate: bool);
        fn get_filters(args: &GetFilters);
        fn get_filter(filter_id: impl EntityId, alerts: Option<bool>);
        fn create_group(args: &CreateGroup);
        fn modify_group(group_id: impl EntityId, args: &ModifyGroup);
        fn clone_group(group_id: impl EntityId);
        fn delete_group(group_id: impl EntityId, ultimate: bool);
        fn get_groups(filter_string: Option<&str>, filter_id: Option<&str>, trash: Option<bool>);
        fn get_group(group_id: impl EntityId);
        fn help(help_format: Option<HelpFormat>, brief: Option<bool>);
        fn create_host(name: &str, comment: Option<&str>);
        fn modify_host(host_id: impl EntityId, comment: Option<&str>);
        fn delete_host(host_id: impl EntityId);
        fn get_hosts(filter_string: Option<&str>, filter_id: Option<&str>, details: Option<bool>);
        fn get_host(host_id: impl EntityId, details: Option<bool>);
        fn create_note(text: &str, nvt_oid: &str, args: &Annotation);
        fn modify_note(note_id: impl EntityId, text: &str, args: &Annotation);
        fn clone_note(note_id: impl EntityId);
        fn delete_note(note_id: impl EntityId, ultimate: bool);
        fn get_notes(args: &GetNotes);
        fn get_note(note_id: impl EntityId);
        fn modify_operating_system(operating_system_id: impl EntityId, comment: Option<&str>);
        fn delete_operating_system(operating_system_id: impl EntityId);
        fn get_operating_systems(
            filter_string: Option<&str>,
            filter_id: Option<&str>,
            details: Option<bool>,
        );
        fn get_operating_system(operating_system_id: impl EntityId, details: Option<bool>);
        fn create_override(text: &str, nvt_oid: &str, args: &Annotation, new_severity: Option<f64>);
        fn modify_override(
            override_id: impl EntityId,
            text: &str,
            args: &Annotation,
            new_severity: Option<f64>,
        );
        fn clone_override(override_id: impl EntityId);
        fn delete_override(override_id: impl EntityId, ultimate: bool);
        fn get_overrides(args: &GetOverrides);
        fn get_override(override_id: impl EntityId);
        fn create_permission(args: &CreatePermission<EntityType>);
        fn modify_permission(permission_id: impl EntityId, args: &ModifyPermission<EntityType>);
        fn clone_permission(permission_id: impl EntityId);
        fn delete_permission(permission_id: impl EntityId, ultimate: bool);
        fn get_permissions(
            filter_string: Option<&str>,
            filter_id: Option<&str>,
            trash: Option<bool>,
        );
        fn get_permission(permission_id: impl EntityId);
        fn create_policy(name: &str, policy_id: Option<&str>, comment: Option<&str>);
        fn import_policy(policy: &str);
        fn clone_policy(policy_id: impl EntityId);
        fn delete_policy(policy_id: impl EntityId, ultimate: bool);
        fn get_policies(args: &GetPolicies);
        fn get_policy(policy_id: impl EntityId, audits: Option<bool>);
        fn modify_policy_set_comment(policy_id: impl EntityId, comment: &str);
        fn modify_policy_set_name(policy_id: impl EntityId, name: &str);
        fn modify_policy_set_scanner_preference(
            policy_id: impl EntityId,
            name: &str,
            value: Option<&str>,
        );
        fn modify_policy_set_nvt_preference(
            policy_id: impl EntityId,
            name: &str,
            nvt_oid: &str,
            value: Option<&str>,
        );
        fn modify_policy_set_nvt_selection(
            policy_id: impl EntityId,
            family: &str,
            nvt_oids: &[String],
        );
        fn modify_policy_set_family_selection(
            policy_id: impl EntityId,
            families: &[FamilySelection],
            auto_add_new_families: bool,
        );
        fn create_port_list(name: &str, port_range: &str, comment: Option<&str>);
        fn create_port_range(
            port_list_id: impl EntityId,
            start: u16,
            end: u16,
            port_range_type: PortRangeType,
            comment: Option<&str>,
        );
        fn modify_port_list(port_list_id: impl EntityId, name: Option<&str>, comment: Option<&str>);
        fn clone_port_list(port_list_id: impl EntityId);
        fn delete_port_list(port_list_id: impl EntityId, ultimate: bool);
        fn delete_port_range(port_range_id: impl EntityId);
        fn get_port_lists(args: &GetPortLists);
        fn get_port_list(port_list_id: impl EntityId);
        fn import_port_list(port_list: &str);
        fn clone_report_format(report_format_id: impl EntityId);
        fn delete_report_format(report_format_id: impl EntityId, ultimate: bool);
        fn get_report_formats(args: &GetReportFormats);
        fn get_report_format(report_format_id: impl EntityId);
        fn import_report_format(report_format: &str);
        fn modify_report_format(report_format_id: impl EntityId, args: &ModifyReportFormat);
        fn verify_report_format(report_format_id: impl EntityId);
        fn delete_report(report_id: impl EntityId);
        fn get_report(report_id: impl EntityId, args: &GetReport);
        fn get_reports(args: &GetReports);
        fn import_report(report: &str, task_id: impl EntityId, in_assets: Option<bool>);
        fn get_results(args: &GetResults);
        fn get_result(result_id: impl EntityId);
        fn create_role(name: &str, comment: Option<&str>, users: &[String]);
        fn modify_role(role_id: impl EntityId, args: &ModifyRole);
        fn clone_role(role_id: impl EntityId);
        fn delete_role(role_id: impl EntityId, ultimate: bool);
        fn get_roles(filter_string: Option<&str>, filter_id: Option<&str>, trash: Option<bool>);
        fn get_role(role_id: impl EntityId);
        fn create_scan_config(config_id: impl EntityId, name: &str, comment: Option<&str>);
        fn import_scan_config(config: &str);
        fn clone_scan_config(config_id: impl EntityId);
        fn delete_scan_config(config_id: impl EntityId, ultimate: bool);
        fn get_scan_configs(args: &GetScanConfigs);
        fn get_scan_config(config_id: impl EntityId, tasks: Option<bool>);
        fn get_scan_config_preferences(nvt_oid: Option<&str>, config_id: Option<&str>);
        fn get_scan_config_preference(name: &str, nvt_oid: Option<&str>, config_id: Option<&str>);
        fn modify_scan_config_set_comment(config_id: impl EntityId, comment: &str);
        fn modify_scan_config_set_name(config_id: impl EntityId, name: &str);
        fn modify_scan_config_set_scanner_preference(
            config_id: impl EntityId,
            name: &str,
            value: Option<&str>,
        );
        fn modify_scan_config_set_nvt_preference(
            config_id: impl EntityId,
            name: &str,
            nvt_oid: &str,
            value: Option<&str>,
        );
        fn modify_scan_config_set_nvt_selection(
            config_id: impl EntityId,
            family: &str,
            nvt_oids: &[String],
        );
        fn modify_scan_config_set_family_selection(
            config_id: impl EntityId,
            families: &[FamilySelection],
            auto_add_new_families: bool,
        );
        fn create_scanner(args: &CreateScanner);
        fn modify_scanner(scanner_id: impl EntityId, args: &ModifyScanner);
        fn clone_scanner(scanner_id: impl EntityId);
        fn delete_scanner(scanner_id: impl EntityId, ultimate: bool);
        fn get_scanners(args: &GetScanners);
        fn get_scanner(scanner_id: impl EntityId);
        fn verify_scanner(scanner_id: impl EntityId);
        fn create_schedule(name: &str, icalendar: &str, timezone: &str, comment: Option<&str>);
        fn modify_schedule(schedule_id: impl EntityId, args: &ModifySchedule);
        fn clone_schedule(schedule_id: impl EntityId);
        fn delete_schedule(schedule_id: impl EntityId, ultimate: bool);
        fn get_schedules(args: &GetSchedules);
        fn get_schedule(schedule_id: impl EntityId, tasks: Option<bool>);
        fn get_info_list(info_type: InfoType, args: &GetInfoList);
        fn get_info(info_id: impl EntityId, info_type: InfoType);
        fn get_cves(args: &GetInfoList);
        fn get_cve(cve_id: impl EntityId);
        fn get_cpes(args: &GetInfoList);
        fn get_cpe(cpe_id: impl EntityId);
        fn get_cert_bund_advisories(args: &GetInfoList);
        fn get_cert_bund_advisory(cert_id: impl EntityId);
        fn get_dfn_cert_advisories(args: &GetInfoList);
        fn get_dfn_cert_advisory(cert_id: impl EntityId);
        fn get_nvts(args: &GetInfoList);
        fn get_nvt(nvt_id: impl EntityId);
        fn get_scan_config_nvts(args: &GetScanConfigNvts);
        fn get_scan_config_nvt(nvt_oid: &str);
        fn get_nvt_families(sort_order: Option<&str>);
        fn get_nvt_preferences(nvt_oid: Option<&str>);
        fn get_nvt_preference(name: &str, nvt_oid: Option<&str>);
        fn get_system_reports(args: &GetSystemReports);
        fn create_tag(args: &CreateTag<EntityType>);
        fn modify_tag(tag_id: impl EntityId, args: &ModifyTag<EntityType>);
        fn clone_tag(tag_id: impl EntityId);
        fn delete_tag(tag_id: impl EntityId, ultimate: bool);
        fn get_tags(args: &GetTags);
        fn get_tag(tag_id: impl EntityId);
        fn create_target(args: &CreateTarget);
        fn modify_target(target_id: impl EntityId, args: &ModifyTarget);
        fn clone_target(target_id: impl EntityId);
        fn delete_target(target_id: impl EntityId, ultimate: bool);
        fn get_targets(args: &GetTargets);
        fn get_target(target_id: impl EntityId, tasks: Option<bool>);
        fn create_task(args: &CreateTask);
        fn create_container_task(name: &str, comment: Option<&str>);
        fn modify_task(task_id: impl EntityId, args: &ModifyTask);
        fn clone_task(task_id: impl EntityId);
        fn delete_task(task_id: impl EntityId, ultimate: bool);
        fn get_tasks(args: &GetTasks);
        fn get_task(task_id: impl EntityId);
        fn start_task(task_id: impl EntityId);
        fn stop_task(task_id: impl EntityId);
        fn resume_task(task_id: impl EntityId);
        fn move_task(task_id: impl EntityId, slave_id: Option<&str>);
        fn create_ticket(
            result_id: impl EntityId,
            assigned_to_user_id: impl EntityId,
            note: &str,
            comment: Option<&str>,
        );
        fn modify_ticket(ticket_id: impl EntityId, args: &ModifyTicket);
        fn clone_ticket(ticket_id: impl EntityId);
        fn delete_ticket(ticket_id: impl EntityId, ultimate: bool);
        fn get_tickets(filter_string: Option<&str>, filter_id: Option<&str>, trash: Option<bool>);
        fn get_ticket(ticket_id: impl EntityId);
        fn create_tls_certificate(
            name: &str,
            certificate: &str,
            comment: Option<&str>,
            trust: Option<bool>,
        );
        fn modify_tls_certificate(tls_certificate_id: impl EntityId, args: &ModifyTlsCertificate);
        fn clone_tls_certificate(tls_certificate_id: impl EntityId);
        fn delete_tls_certificate(tls_certificate_id: impl EntityId);
        fn get_tls_certificates(args: &GetTlsCertificates);
        fn get_tls_certificate(tls_certificate_id: impl EntityId);
        fn empty_trashcan();
        fn restore_from_trashcan(entity_id: impl EntityId);
        fn get_user_settings(filter_string: Option<&str>);
        fn get_user_setting(setting_id: impl EntityId);
        fn modify_user_setting(setting_id: Option<&str>, name: Option<&str>, value: &str);
        fn create_user(args: &CreateUser);
        fn modify_user(user_id: impl EntityId, args: &ModifyUser);
        fn clone_user(user_id: impl EntityId);
        fn delete_user(args: &DeleteUser);
        fn get_users(filter_string: Option<&str>, filter_id: Option<&str>);
        fn get_user(user_id: impl EntityId);
        fn get_version();
        fn get_vulnerabilities(filter_string: Option<&str>, filter_id: Option<&str>);
        fn get_vulnerability(vulnerability_id: impl EntityId);
    }
}
