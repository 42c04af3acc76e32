use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::{LaunchTemplateSpecification, MixedInstancesPolicy};

/// Parameters for updating an existing auto-scaling group. Only the fields
/// that are present are changed; the rest keep their current values.
///
/// As with creation, at most one of `launch_configuration_name`,
/// `launch_template` and `mixed_instances_policy` should be given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAutoScalingGroupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplateSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_instances_policy: Option<MixedInstancesPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cooldown: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<String>,
    /// Replaces the subnet list; the zones of the new subnets must cover
    /// `availability_zones` when both are given.
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    pub vpc_zone_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_policies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_instances_protected_from_scale_in: Option<bool>,
    #[serde(rename = "ServiceLinkedRoleARN", skip_serializing_if = "Option::is_none")]
    pub service_linked_role_arn: Option<String>,
}

impl UpdateAutoScalingGroupRequest {
    pub fn builder() -> UpdateAutoScalingGroupRequestBuilder {
        UpdateAutoScalingGroupRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct UpdateAutoScalingGroupRequestBuilder {
    request: UpdateAutoScalingGroupRequest,
}

impl UpdateAutoScalingGroupRequestBuilder {
    pub fn auto_scaling_group_name(mut self, value: impl Into<String>) -> Self {
        self.request.auto_scaling_group_name = Some(value.into());
        self
    }

    pub fn launch_configuration_name(mut self, value: impl Into<String>) -> Self {
        self.request.launch_configuration_name = Some(value.into());
        self
    }

    pub fn launch_template(mut self, value: LaunchTemplateSpecification) -> Self {
        self.request.launch_template = Some(value);
        self
    }

    pub fn mixed_instances_policy(mut self, value: MixedInstancesPolicy) -> Self {
        self.request.mixed_instances_policy = Some(value);
        self
    }

    pub fn min_size(mut self, value: i32) -> Self {
        self.request.min_size = Some(value);
        self
    }

    pub fn max_size(mut self, value: i32) -> Self {
        self.request.max_size = Some(value);
        self
    }

    pub fn desired_capacity(mut self, value: i32) -> Self {
        self.request.desired_capacity = Some(value);
        self
    }

    pub fn default_cooldown(mut self, value: i32) -> Self {
        self.request.default_cooldown = Some(value);
        self
    }

    pub fn availability_zones(mut self, value: impl Into<String>) -> Self {
        self.request
            .availability_zones
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_availability_zones(mut self, value: Option<Vec<String>>) -> Self {
        self.request.availability_zones = value;
        self
    }

    pub fn health_check_type(mut self, value: impl Into<String>) -> Self {
        self.request.health_check_type = Some(value.into());
        self
    }

    pub fn health_check_grace_period(mut self, value: i32) -> Self {
        self.request.health_check_grace_period = Some(value);
        self
    }

    pub fn placement_group(mut self, value: impl Into<String>) -> Self {
        self.request.placement_group = Some(value.into());
        self
    }

    pub fn vpc_zone_identifier(mut self, value: impl Into<String>) -> Self {
        self.request.vpc_zone_identifier = Some(value.into());
        self
    }

    pub fn termination_policies(mut self, value: impl Into<String>) -> Self {
        self.request
            .termination_policies
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_termination_policies(mut self, value: Option<Vec<String>>) -> Self {
        self.request.termination_policies = value;
        self
    }

    pub fn new_instances_protected_from_scale_in(mut self, value: bool) -> Self {
        self.request.new_instances_protected_from_scale_in = Some(value);
        self
    }

    pub fn service_linked_role_arn(mut self, value: impl Into<String>) -> Self {
        self.request.service_linked_role_arn = Some(value.into());
        self
    }

    pub fn build(self) -> UpdateAutoScalingGroupRequest {
        self.request
    }
}

impl fmt::Display for UpdateAutoScalingGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AutoScalingGroupName", &self.auto_scaling_group_name);
        w.field("LaunchConfigurationName", &self.launch_configuration_name);
        w.field("LaunchTemplate", &self.launch_template);
        w.field("MixedInstancesPolicy", &self.mixed_instances_policy);
        w.field("MinSize", &self.min_size);
        w.field("MaxSize", &self.max_size);
        w.field("DesiredCapacity", &self.desired_capacity);
        w.field("DefaultCooldown", &self.default_cooldown);
        w.list("AvailabilityZones", &self.availability_zones);
        w.field("HealthCheckType", &self.health_check_type);
        w.field("HealthCheckGracePeriod", &self.health_check_grace_period);
        w.field("PlacementGroup", &self.placement_group);
        w.field("VPCZoneIdentifier", &self.vpc_zone_identifier);
        w.list("TerminationPolicies", &self.termination_policies);
        w.field(
            "NewInstancesProtectedFromScaleIn",
            &self.new_instances_protected_from_scale_in,
        );
        w.field("ServiceLinkedRoleARN", &self.service_linked_role_arn);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_matches_field_assignment() {
        let built = UpdateAutoScalingGroupRequest::builder()
            .auto_scaling_group_name("web-asg")
            .max_size(10)
            .build();
        let mut assigned = UpdateAutoScalingGroupRequest::default();
        assigned.auto_scaling_group_name = Some("web-asg".to_string());
        assigned.max_size = Some(10);
        assert_eq!(built, assigned);
    }

    #[test]
    fn untouched_fields_are_not_serialized() {
        let request = UpdateAutoScalingGroupRequest::builder()
            .auto_scaling_group_name("web-asg")
            .desired_capacity(4)
            .build();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["DesiredCapacity"], 4);
        assert!(json.get("MinSize").is_none());
        assert!(json.get("AvailabilityZones").is_none());
    }
}
