use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::AutoScalingGroup;

/// Parameters for listing auto-scaling groups. With no names given the
/// service returns every group in the account, paged by `next_token`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAutoScalingGroupsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_names: Option<Vec<String>>,
    /// Token returned by a previous call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size, up to the service maximum of 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

impl DescribeAutoScalingGroupsRequest {
    pub fn builder() -> DescribeAutoScalingGroupsRequestBuilder {
        DescribeAutoScalingGroupsRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DescribeAutoScalingGroupsRequestBuilder {
    request: DescribeAutoScalingGroupsRequest,
}

impl DescribeAutoScalingGroupsRequestBuilder {
    pub fn auto_scaling_group_names(mut self, value: impl Into<String>) -> Self {
        self.request
            .auto_scaling_group_names
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_auto_scaling_group_names(mut self, value: Option<Vec<String>>) -> Self {
        self.request.auto_scaling_group_names = value;
        self
    }

    pub fn next_token(mut self, value: impl Into<String>) -> Self {
        self.request.next_token = Some(value.into());
        self
    }

    pub fn max_records(mut self, value: i32) -> Self {
        self.request.max_records = Some(value);
        self
    }

    pub fn build(self) -> DescribeAutoScalingGroupsRequest {
        self.request
    }
}

impl fmt::Display for DescribeAutoScalingGroupsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.list("AutoScalingGroupNames", &self.auto_scaling_group_names);
        w.field("NextToken", &self.next_token);
        w.field("MaxRecords", &self.max_records);
        w.finish(f)
    }
}

/// One page of group snapshots. A present `next_token` means more pages
/// follow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeAutoScalingGroupsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_groups: Option<Vec<AutoScalingGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeAutoScalingGroupsResponse {
    pub fn builder() -> DescribeAutoScalingGroupsResponseBuilder {
        DescribeAutoScalingGroupsResponseBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DescribeAutoScalingGroupsResponseBuilder {
    response: DescribeAutoScalingGroupsResponse,
}

impl DescribeAutoScalingGroupsResponseBuilder {
    pub fn auto_scaling_groups(mut self, value: AutoScalingGroup) -> Self {
        self.response
            .auto_scaling_groups
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_auto_scaling_groups(mut self, value: Option<Vec<AutoScalingGroup>>) -> Self {
        self.response.auto_scaling_groups = value;
        self
    }

    pub fn next_token(mut self, value: impl Into<String>) -> Self {
        self.response.next_token = Some(value.into());
        self
    }

    pub fn build(self) -> DescribeAutoScalingGroupsResponse {
        self.response
    }
}

impl fmt::Display for DescribeAutoScalingGroupsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.list("AutoScalingGroups", &self.auto_scaling_groups);
        w.field("NextToken", &self.next_token);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_names_append_in_order() {
        let request = DescribeAutoScalingGroupsRequest::builder()
            .auto_scaling_group_names("web-asg")
            .auto_scaling_group_names("worker-asg")
            .max_records(50)
            .build();
        assert_eq!(
            request.auto_scaling_group_names.unwrap(),
            vec!["web-asg", "worker-asg"]
        );
    }

    #[test]
    fn response_deserializes_from_wire_payload() {
        let payload = r#"{
            "AutoScalingGroups": [
                {"AutoScalingGroupName": "web-asg", "MinSize": 1, "MaxSize": 5}
            ],
            "NextToken": "page-2"
        }"#;
        let response: DescribeAutoScalingGroupsResponse = serde_json::from_str(payload).unwrap();
        let groups = response.auto_scaling_groups.unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].auto_scaling_group_name.as_deref(), Some("web-asg"));
        assert_eq!(response.next_token.as_deref(), Some("page-2"));
    }

    #[test]
    fn unknown_wire_fields_are_tolerated() {
        let payload = r#"{"NextToken": "t", "Unmodeled": 1}"#;
        let response: DescribeAutoScalingGroupsResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(response.next_token.as_deref(), Some("t"));
    }
}
