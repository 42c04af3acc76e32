use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::{LaunchTemplateSpecification, MixedInstancesPolicy, Tag};

/// Parameters for creating an auto-scaling group.
///
/// Exactly one of `launch_configuration_name`, `launch_template`,
/// `mixed_instances_policy` or `instance_id` should be provided. The
/// service enforces this; the client does not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAutoScalingGroupRequest {
    /// Name of the group, unique per account and region. 1-255 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplateSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_instances_policy: Option<MixedInstancesPolicy>,
    /// Existing instance to derive launch parameters from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<i32>,
    /// Must be within `min_size`..=`max_size`; defaults to `min_size`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cooldown: Option<i32>,
    /// Optional if subnets are given through `vpc_zone_identifier`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_names: Option<Vec<String>>,
    #[serde(rename = "TargetGroupARNs", skip_serializing_if = "Option::is_none")]
    pub target_group_arns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<String>,
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    pub vpc_zone_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_policies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_instances_protected_from_scale_in: Option<bool>,
    #[serde(rename = "ServiceLinkedRoleARN", skip_serializing_if = "Option::is_none")]
    pub service_linked_role_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl CreateAutoScalingGroupRequest {
    pub fn builder() -> CreateAutoScalingGroupRequestBuilder {
        CreateAutoScalingGroupRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CreateAutoScalingGroupRequestBuilder {
    request: CreateAutoScalingGroupRequest,
}

impl CreateAutoScalingGroupRequestBuilder {
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

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.request.instance_id = Some(value.into());
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

    pub fn load_balancer_names(mut self, value: impl Into<String>) -> Self {
        self.request
            .load_balancer_names
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_load_balancer_names(mut self, value: Option<Vec<String>>) -> Self {
        self.request.load_balancer_names = value;
        self
    }

    pub fn target_group_arns(mut self, value: impl Into<String>) -> Self {
        self.request
            .target_group_arns
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_target_group_arns(mut self, value: Option<Vec<String>>) -> Self {
        self.request.target_group_arns = value;
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

    pub fn tags(mut self, value: Tag) -> Self {
        self.request.tags.get_or_insert_with(Vec::new).push(value);
        self
    }

    pub fn set_tags(mut self, value: Option<Vec<Tag>>) -> Self {
        self.request.tags = value;
        self
    }

    pub fn build(self) -> CreateAutoScalingGroupRequest {
        self.request
    }
}

impl fmt::Display for CreateAutoScalingGroupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AutoScalingGroupName", &self.auto_scaling_group_name);
        w.field("LaunchConfigurationName", &self.launch_configuration_name);
        w.field("LaunchTemplate", &self.launch_template);
        w.field("MixedInstancesPolicy", &self.mixed_instances_policy);
        w.field("InstanceId", &self.instance_id);
        w.field("MinSize", &self.min_size);
        w.field("MaxSize", &self.max_size);
        w.field("DesiredCapacity", &self.desired_capacity);
        w.field("DefaultCooldown", &self.default_cooldown);
        w.list("AvailabilityZones", &self.availability_zones);
        w.list("LoadBalancerNames", &self.load_balancer_names);
        w.list("TargetGroupARNs", &self.target_group_arns);
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
        w.list("Tags", &self.tags);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn web_request() -> CreateAutoScalingGroupRequest {
        CreateAutoScalingGroupRequest::builder()
            .auto_scaling_group_name("web-asg")
            .min_size(1)
            .max_size(5)
            .desired_capacity(2)
            .availability_zones("us-east-1a")
            .availability_zones("us-east-1b")
            .build()
    }

    #[test]
    fn builder_matches_field_assignment() {
        let mut assigned = CreateAutoScalingGroupRequest::default();
        assigned.auto_scaling_group_name = Some("web-asg".to_string());
        assigned.min_size = Some(1);
        assigned.max_size = Some(5);
        assigned.desired_capacity = Some(2);
        assigned.availability_zones =
            Some(vec!["us-east-1a".to_string(), "us-east-1b".to_string()]);
        assert_eq!(web_request(), assigned);
    }

    #[test]
    fn display_lists_only_present_fields() {
        let rendered = web_request().to_string();
        assert!(rendered.contains("AutoScalingGroupName: web-asg"));
        assert!(rendered.contains("AvailabilityZones: [us-east-1a, us-east-1b]"));
        assert!(!rendered.contains("PlacementGroup"));
        assert!(!rendered.contains("LaunchConfigurationName"));
    }

    #[test]
    fn list_methods_append_across_calls() {
        let request = CreateAutoScalingGroupRequest::builder()
            .availability_zones("us-east-1a")
            .availability_zones("us-east-1b")
            .availability_zones("us-east-1a")
            .availability_zones("us-east-1b")
            .build();
        assert_eq!(
            request.availability_zones.unwrap(),
            vec!["us-east-1a", "us-east-1b", "us-east-1a", "us-east-1b"]
        );
    }

    #[test]
    fn append_after_clearing_list_starts_fresh() {
        // Clearing the sequence and appending again allocates a new one;
        // there is no distinct "explicitly cleared" state to trip over.
        let request = CreateAutoScalingGroupRequest::builder()
            .availability_zones("us-east-1a")
            .set_availability_zones(None)
            .availability_zones("us-east-1b")
            .build();
        assert_eq!(request.availability_zones.unwrap(), vec!["us-east-1b"]);
    }

    #[test]
    fn fresh_requests_are_equal() {
        assert_eq!(
            CreateAutoScalingGroupRequest::default(),
            CreateAutoScalingGroupRequest::builder().build()
        );
    }

    #[test]
    fn serializes_with_wire_names() {
        let json = serde_json::to_value(&web_request()).unwrap();
        assert_eq!(json["AutoScalingGroupName"], "web-asg");
        assert_eq!(json["MinSize"], 1);
        assert_eq!(json["MaxSize"], 5);
        assert_eq!(json["DesiredCapacity"], 2);
        assert_eq!(json["AvailabilityZones"][0], "us-east-1a");
        assert!(json.get("SpotPrice").is_none());
        assert!(json.get("Tags").is_none());
    }
}
