use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::ScalingPolicy;

/// Parameters for listing the scaling policies of a group, optionally
/// filtered by name or policy type.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePoliciesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

impl DescribePoliciesRequest {
    pub fn builder() -> DescribePoliciesRequestBuilder {
        DescribePoliciesRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DescribePoliciesRequestBuilder {
    request: DescribePoliciesRequest,
}

impl DescribePoliciesRequestBuilder {
    pub fn auto_scaling_group_name(mut self, value: impl Into<String>) -> Self {
        self.request.auto_scaling_group_name = Some(value.into());
        self
    }

    pub fn policy_names(mut self, value: impl Into<String>) -> Self {
        self.request
            .policy_names
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_policy_names(mut self, value: Option<Vec<String>>) -> Self {
        self.request.policy_names = value;
        self
    }

    pub fn policy_types(mut self, value: impl Into<String>) -> Self {
        self.request
            .policy_types
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_policy_types(mut self, value: Option<Vec<String>>) -> Self {
        self.request.policy_types = value;
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

    pub fn build(self) -> DescribePoliciesRequest {
        self.request
    }
}

impl fmt::Display for DescribePoliciesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AutoScalingGroupName", &self.auto_scaling_group_name);
        w.list("PolicyNames", &self.policy_names);
        w.list("PolicyTypes", &self.policy_types);
        w.field("NextToken", &self.next_token);
        w.field("MaxRecords", &self.max_records);
        w.finish(f)
    }
}

/// One page of scaling policy snapshots.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribePoliciesResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_policies: Option<Vec<ScalingPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribePoliciesResponse {
    pub fn builder() -> DescribePoliciesResponseBuilder {
        DescribePoliciesResponseBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DescribePoliciesResponseBuilder {
    response: DescribePoliciesResponse,
}

impl DescribePoliciesResponseBuilder {
    pub fn scaling_policies(mut self, value: ScalingPolicy) -> Self {
        self.response
            .scaling_policies
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_scaling_policies(mut self, value: Option<Vec<ScalingPolicy>>) -> Self {
        self.response.scaling_policies = value;
        self
    }

    pub fn next_token(mut self, value: impl Into<String>) -> Self {
        self.response.next_token = Some(value.into());
        self
    }

    pub fn build(self) -> DescribePoliciesResponse {
        self.response
    }
}

impl fmt::Display for DescribePoliciesResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.list("ScalingPolicies", &self.scaling_policies);
        w.field("NextToken", &self.next_token);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_render_as_lists() {
        let request = DescribePoliciesRequest::builder()
            .auto_scaling_group_name("web-asg")
            .policy_types("StepScaling")
            .policy_types("TargetTrackingScaling")
            .build();
        assert_eq!(
            request.to_string(),
            "{AutoScalingGroupName: web-asg, \
             PolicyTypes: [StepScaling, TargetTrackingScaling]}"
        );
    }

    #[test]
    fn response_deserializes_policies() {
        let payload = r#"{
            "ScalingPolicies": [
                {"PolicyName": "step-up", "PolicyType": "StepScaling", "Cooldown": 300}
            ]
        }"#;
        let response: DescribePoliciesResponse = serde_json::from_str(payload).unwrap();
        let policies = response.scaling_policies.unwrap();
        assert_eq!(policies[0].policy_name.as_deref(), Some("step-up"));
        assert_eq!(policies[0].cooldown, Some(300));
    }
}
