use crate::error::{Error, Result};
use crate::protocols::gmp::requests::{required, GvmEnum, WireEntityType};
use crate::sansio::Request;
use crate::xml::XmlCommand;

gvm_enum! {
    pub enum AggregateStatistic {
        Count = "count" => "count",
        CCount = "c_count" => "c_count",
        CSum = "c_sum" => "c_sum",
        Max = "max" => "max",
        Mean = "mean" => "mean",
        Min = "min" => "min",
        Sum = "sum" => "sum",
        Text = "text" => "text",
        Value = "value" => "value",
    }
}

gvm_enum! {
    pub enum SortOrder {
        Ascending = "ascending" => "ascending",
        Descending = "descending" => "descending",
    }
}

/// One `<sort>` element of an aggregates request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortCriterion {
    pub field: Option<String>,
    pub stat: Option<AggregateStatistic>,
    pub order: Option<SortOrder>,
}

/// Arguments of [`get_aggregates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAggregates<E> {
    pub resource_type: E,
    pub filter_string: Option<String>,
    pub filter_id: Option<String>,
    /// Emitted as `<sort>` elements in order.
    pub sort_criteria: Vec<SortCriterion>,
    pub data_columns: Vec<String>,
    pub group_column: Option<String>,
    /// Requires `group_column`.
    pub subgroup_column: Option<String>,
    pub text_columns: Vec<String>,
    pub first_group: Option<u32>,
    pub max_groups: Option<u32>,
    pub mode: Option<String>,
}

impl<E> GetAggregates<E> {
    pub fn new(resource_type: E) -> Self {
        Self {
            resource_type,
            filter_string: None,
            filter_id: None,
            sort_criteria: Vec::new(),
            data_columns: Vec::new(),
            group_column: None,
            subgroup_column: None,
            text_columns: Vec::new(),
            first_group: None,
            max_groups: None,
            mode: None,
        }
    }
}

/// Request aggregated information on a resource type.
pub fn get_aggregates<E: WireEntityType>(args: &GetAggregates<E>) -> Result<Request> {
    let mut cmd = XmlCommand::new("get_aggregates");
    if let Some(usage_type) = args.resource_type.usage_type() {
        cmd.set_attribute("usage_type", usage_type);
    }
    cmd.set_attribute("type", args.resource_type.wire_type());
    cmd.add_filter(args.filter_string.as_deref(), args.filter_id.as_deref());

    if let Some(first_group) = args.first_group {
        cmd.set_attribute("first_group", first_group.to_string());
    }
    if let Some(max_groups) = args.max_groups {
        cmd.set_attribute("max_groups", max_groups.to_string());
    }

    for criterion in &args.sort_criteria {
        let sort = cmd.add_element("sort");
        sort.set_optional_attribute("field", criterion.field.as_deref());
        if let Some(stat) = criterion.stat {
            sort.set_attribute("stat", stat.value());
        }
        if let Some(order) = criterion.order {
            sort.set_attribute("order", order.value());
        }
    }

    for column in &args.data_columns {
        cmd.add_text_element("data_column", column.as_str());
    }

    if let Some(group_column) = &args.group_column {
        cmd.set_attribute("group_column", group_column.as_str());
    }
    if let Some(subgroup_column) = args.subgroup_column.as_deref() {
        required("get_aggregates", "subgroup_column", subgroup_column)?;
        if args.group_column.is_none() {
            return Err(Error::invalid_message(
                "get_aggregates",
                "subgroup_column",
                format!("{} was given but group_column was None", subgroup_column),
            ));
        }
        cmd.set_attribute("subgroup_column", subgroup_column);
    }

    for column in &args.text_columns {
        cmd.add_text_element("text_column", column.as_str());
    }

    cmd.set_optional_attribute("mode", args.mode.as_deref());
    Ok(cmd.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocols::gmp::requests::v224::EntityType;

    #[test]
    fn audit_is_sent_as_task() {
        let request = get_aggregates(&GetAggregates::new(EntityType::Audit)).unwrap();
        assert_eq!(
            request.to_string(),
            r#"<get_aggregates usage_type="audit" type="task"/>"#
        );
    }

    #[test]
    fn policy_is_sent_as_config() {
        let request = get_aggregates(&GetAggregates::new(EntityType::Policy)).unwrap();
        assert_eq!(
            request.to_string(),
            r#"<get_aggregates usage_type="policy" type="config"/>"#
        );
    }

    #[test]
    fn sort_criteria_in_order() {
        let request = get_aggregates(&GetAggregates {
            sort_criteria: vec![
                SortCriterion {
                    field: Some("name".into()),
                    stat: Some(AggregateStatistic::Count),
                    order: Some(SortOrder::Descending),
                },
                SortCriterion {
                    field: Some("severity".into()),
                    stat: Some(AggregateStatistic::Max),
                    order: Some(SortOrder::Ascending),
                },
            ],
            data_columns: vec!["severity".into()],
            group_column: Some("family".into()),
            first_group: Some(1),
            max_groups: Some(10),
            ..GetAggregates::new(EntityType::Nvt)
        })
        .unwrap();
        assert_eq!(
            request.to_string(),
            "<get_aggregates type=\"nvt\" first_group=\"1\" max_groups=\"10\" group_column=\"family\">\
             <sort field=\"name\" stat=\"count\" order=\"descending\"/>\
             <sort field=\"severity\" stat=\"max\" order=\"ascending\"/>\
             <data_column>severity</data_column></get_aggregates>"
        );
    }

    #[test]
    fn subgroup_requires_group() {
        let err = get_aggregates(&GetAggregates {
            subgroup_column: Some("qod".into()),
            ..GetAggregates::new(EntityType::Nvt)
        })
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert_eq!(err.argument(), Some("subgroup_column"));
    }
}
