use crate::protocols::gmp::requests::v226 as requests;
use crate::protocols::gmp::requests::EntityId;
use crate::transform::ResponseTransform;
use crate::transport::Transport;

use self::requests::{
    CreateFilter, CreatePermission, CreateTag, GetAggregates, GetAuditReports, GetReport,
    GetReportConfigs, ModifyFilter, ModifyPermission, ModifyReportConfig, ModifyTag,
    ReportConfigParameter, ResourceType,
};
use super::GmpV225;

dialect! {
    /// A GMP 22.6 session.
    ///
    /// Adds report configs and audit reports. The entity, filter and resource
    /// types know about report configs, so the operations taking them are
    /// redefined here.
    GmpV226: GmpV225, (22, 6)
}

impl<T: Transport, F: ResponseTransform> GmpV226<T, F> {
    operations! {
        requests;
        fn get_report(report_id: impl EntityId, args: &GetReport);
        fn get_audit_reports(args: &GetAuditReports);
        fn get_audit_report(report_id: impl EntityId, args: &GetReport);
        fn delete_audit_report(report_id: impl EntityId);

        fn create_report_config(
            name: &str,
            report_format_id: impl EntityId,
            comment: Option<&str>,
            params: &[ReportConfigParameter],
        );
        fn modify_report_config(report_config_id: impl EntityId, args: &ModifyReportConfig);
        fn clone_report_config(report_config_id: impl EntityId);
        fn delete_report_config(report_config_id: impl EntityId, ultimate: bool);
        fn get_report_configs(args: &GetReportConfigs);
        fn get_report_config(report_config_id: impl EntityId);

        fn create_filter(args: &CreateFilter);
        fn modify_filter(filter_id: impl EntityId, args: &ModifyFilter);
        fn create_tag(args: &CreateTag);
        fn modify_tag(tag_id: impl EntityId, args: &ModifyTag);
        fn create_permission(args: &CreatePermission);
        fn modify_permission(permission_id: impl EntityId, args: &ModifyPermission);
        fn get_aggregates(args: &GetAggregates);
        fn get_resource_names(resource_type: ResourceType, filter_string: Option<&str>);
        fn get_resource_name(resource_id: impl EntityId, resource_type: ResourceType);
    }
}
