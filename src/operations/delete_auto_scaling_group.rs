use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;

/// Parameters for deleting an auto-scaling group. Without `force_delete`
/// the service refuses to delete a group that still has instances or
/// scaling activities in flight.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteAutoScalingGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_delete: Option<bool>,
}

impl DeleteAutoScalingGroupRequest {
    pub fn builder() -> DeleteAutoScalingGroupRequestBuilder {
        DeleteAutoScalingGroupRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DeleteAutoScalingGroupRequestBuilder {
    request: DeleteAutoScalingGroupRequest,
}

impl DeleteAutoScalingGroupRequestBuilder {
    pub fn auto_scaling_group_name(mut self, value: impl Into<String>) -> Self {
        self.request.auto_scaling_group_name = Some(value.into());
        self
    }

    pub fn force_delete(mut self, value: bool) -> Self {
        self.request.force_delete = Some(value);
        self
    }

    pub fn build(self) -> DeleteAutoScalingGroupRequest {
        self.request
    }
}

impl fmt::Display for DeleteAutoScalingGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AutoScalingGroupName", &self.auto_scaling_group_name);
        w.field("ForceDelete", &self.force_delete);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_both_fields_when_present() {
        let request = DeleteAutoScalingGroupRequest::builder()
            .auto_scaling_group_name("web-asg")
            .force_delete(true)
            .build();
        assert_eq!(
            request.to_string(),
            "{AutoScalingGroupName: web-asg, ForceDelete: true}"
        );
    }
}
