use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;

/// Parameters for deleting a scaling policy. `policy_name` also accepts
/// the policy's ARN, in which case the group name may be omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeletePolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

impl DeletePolicyRequest {
    pub fn builder() -> DeletePolicyRequestBuilder {
        DeletePolicyRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DeletePolicyRequestBuilder {
    request: DeletePolicyRequest,
}

impl DeletePolicyRequestBuilder {
    pub fn auto_scaling_group_name(mut self, value: impl Into<String>) -> Self {
        self.request.auto_scaling_group_name = Some(value.into());
        self
    }

    pub fn policy_name(mut self, value: impl Into<String>) -> Self {
        self.request.policy_name = Some(value.into());
        self
    }

    pub fn build(self) -> DeletePolicyRequest {
        self.request
    }
}

impl fmt::Display for DeletePolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AutoScalingGroupName", &self.auto_scaling_group_name);
        w.field("PolicyName", &self.policy_name);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_matches_field_assignment() {
        let built = DeletePolicyRequest::builder()
            .auto_scaling_group_name("web-asg")
            .policy_name("step-up")
            .build();
        let mut assigned = DeletePolicyRequest::default();
        assigned.auto_scaling_group_name = Some("web-asg".to_string());
        assigned.policy_name = Some("step-up".to_string());
        assert_eq!(built, assigned);
    }
}
