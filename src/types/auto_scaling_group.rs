use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::{
    EnabledMetric, Instance, LaunchTemplateSpecification, MixedInstancesPolicy, SuspendedProcess,
    TagDescription,
};

/// Snapshot of an auto-scaling group's configuration and runtime state, as
/// returned by the describe operations.
///
/// Referenced resources are held by name or ARN, never as nested resource
/// objects: `launch_configuration_name` is a string, not a
/// [`LaunchConfiguration`](crate::types::LaunchConfiguration).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AutoScalingGroup {
    /// Name of the group, unique per account and region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(rename = "AutoScalingGroupARN", skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_arn: Option<String>,
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
    /// Seconds between scaling activities unless a policy overrides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_cooldown: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_balancer_names: Option<Vec<String>>,
    #[serde(rename = "TargetGroupARNs", skip_serializing_if = "Option::is_none")]
    pub target_group_arns: Option<Vec<String>>,
    /// `EC2` or `ELB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check_grace_period: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<Instance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended_processes: Option<Vec<SuspendedProcess>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_group: Option<String>,
    /// Comma-separated subnet ids the group launches into.
    #[serde(rename = "VPCZoneIdentifier", skip_serializing_if = "Option::is_none")]
    pub vpc_zone_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_metrics: Option<Vec<EnabledMetric>>,
    /// Only set while the group is being deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagDescription>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_policies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_instances_protected_from_scale_in: Option<bool>,
    #[serde(rename = "ServiceLinkedRoleARN", skip_serializing_if = "Option::is_none")]
    pub service_linked_role_arn: Option<String>,
}

impl AutoScalingGroup {
    pub fn builder() -> AutoScalingGroupBuilder {
        AutoScalingGroupBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AutoScalingGroupBuilder {
    group: AutoScalingGroup,
}

impl AutoScalingGroupBuilder {
    pub fn auto_scaling_group_name(mut self, value: impl Into<String>) -> Self {
        self.group.auto_scaling_group_name = Some(value.into());
        self
    }

    pub fn auto_scaling_group_arn(mut self, value: impl Into<String>) -> Self {
        self.group.auto_scaling_group_arn = Some(value.into());
        self
    }

    pub fn launch_configuration_name(mut self, value: impl Into<String>) -> Self {
        self.group.launch_configuration_name = Some(value.into());
        self
    }

    pub fn launch_template(mut self, value: LaunchTemplateSpecification) -> Self {
        self.group.launch_template = Some(value);
        self
    }

    pub fn mixed_instances_policy(mut self, value: MixedInstancesPolicy) -> Self {
        self.group.mixed_instances_policy = Some(value);
        self
    }

    pub fn min_size(mut self, value: i32) -> Self {
        self.group.min_size = Some(value);
        self
    }

    pub fn max_size(mut self, value: i32) -> Self {
        self.group.max_size = Some(value);
        self
    }

    pub fn desired_capacity(mut self, value: i32) -> Self {
        self.group.desired_capacity = Some(value);
        self
    }

    pub fn default_cooldown(mut self, value: i32) -> Self {
        self.group.default_cooldown = Some(value);
        self
    }

    pub fn availability_zones(mut self, value: impl Into<String>) -> Self {
        self.group
            .availability_zones
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_availability_zones(mut self, value: Option<Vec<String>>) -> Self {
        self.group.availability_zones = value;
        self
    }

    pub fn load_balancer_names(mut self, value: impl Into<String>) -> Self {
        self.group
            .load_balancer_names
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_load_balancer_names(mut self, value: Option<Vec<String>>) -> Self {
        self.group.load_balancer_names = value;
        self
    }

    pub fn target_group_arns(mut self, value: impl Into<String>) -> Self {
        self.group
            .target_group_arns
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_target_group_arns(mut self, value: Option<Vec<String>>) -> Self {
        self.group.target_group_arns = value;
        self
    }

    pub fn health_check_type(mut self, value: impl Into<String>) -> Self {
        self.group.health_check_type = Some(value.into());
        self
    }

    pub fn health_check_grace_period(mut self, value: i32) -> Self {
        self.group.health_check_grace_period = Some(value);
        self
    }

    pub fn instances(mut self, value: Instance) -> Self {
        self.group.instances.get_or_insert_with(Vec::new).push(value);
        self
    }

    pub fn set_instances(mut self, value: Option<Vec<Instance>>) -> Self {
        self.group.instances = value;
        self
    }

    pub fn created_time(mut self, value: DateTime<Utc>) -> Self {
        self.group.created_time = Some(value);
        self
    }

    pub fn suspended_processes(mut self, value: SuspendedProcess) -> Self {
        self.group
            .suspended_processes
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_suspended_processes(mut self, value: Option<Vec<SuspendedProcess>>) -> Self {
        self.group.suspended_processes = value;
        self
    }

    pub fn placement_group(mut self, value: impl Into<String>) -> Self {
        self.group.placement_group = Some(value.into());
        self
    }

    pub fn vpc_zone_identifier(mut self, value: impl Into<String>) -> Self {
        self.group.vpc_zone_identifier = Some(value.into());
        self
    }

    pub fn enabled_metrics(mut self, value: EnabledMetric) -> Self {
        self.group
            .enabled_metrics
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_enabled_metrics(mut self, value: Option<Vec<EnabledMetric>>) -> Self {
        self.group.enabled_metrics = value;
        self
    }

    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.group.status = Some(value.into());
        self
    }

    pub fn tags(mut self, value: TagDescription) -> Self {
        self.group.tags.get_or_insert_with(Vec::new).push(value);
        self
    }

    pub fn set_tags(mut self, value: Option<Vec<TagDescription>>) -> Self {
        self.group.tags = value;
        self
    }

    pub fn termination_policies(mut self, value: impl Into<String>) -> Self {
        self.group
            .termination_policies
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_termination_policies(mut self, value: Option<Vec<String>>) -> Self {
        self.group.termination_policies = value;
        self
    }

    pub fn new_instances_protected_from_scale_in(mut self, value: bool) -> Self {
        self.group.new_instances_protected_from_scale_in = Some(value);
        self
    }

    pub fn service_linked_role_arn(mut self, value: impl Into<String>) -> Self {
        self.group.service_linked_role_arn = Some(value.into());
        self
    }

    pub fn build(self) -> AutoScalingGroup {
        self.group
    }
}

impl fmt::Display for AutoScalingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AutoScalingGroupName", &self.auto_scaling_group_name);
        w.field("AutoScalingGroupARN", &self.auto_scaling_group_arn);
        w.field("LaunchConfigurationName", &self.launch_configuration_name);
        w.field("LaunchTemplate", &self.launch_template);
        w.field("MixedInstancesPolicy", &self.mixed_instances_policy);
        w.field("MinSize", &self.min_size);
        w.field("MaxSize", &self.max_size);
        w.field("DesiredCapacity", &self.desired_capacity);
        w.field("DefaultCooldown", &self.default_cooldown);
        w.list("AvailabilityZones", &self.availability_zones);
        w.list("LoadBalancerNames", &self.load_balancer_names);
        w.list("TargetGroupARNs", &self.target_group_arns);
        w.field("HealthCheckType", &self.health_check_type);
        w.field("HealthCheckGracePeriod", &self.health_check_grace_period);
        w.list("Instances", &self.instances);
        w.field("CreatedTime", &self.created_time);
        w.list("SuspendedProcesses", &self.suspended_processes);
        w.field("PlacementGroup", &self.placement_group);
        w.field("VPCZoneIdentifier", &self.vpc_zone_identifier);
        w.list("EnabledMetrics", &self.enabled_metrics);
        w.field("Status", &self.status);
        w.list("Tags", &self.tags);
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
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn web_group() -> AutoScalingGroup {
        AutoScalingGroup::builder()
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
        let mut assigned = AutoScalingGroup::default();
        assigned.auto_scaling_group_name = Some("web-asg".to_string());
        assigned.min_size = Some(1);
        assigned.max_size = Some(5);
        assigned.desired_capacity = Some(2);
        assigned.availability_zones =
            Some(vec!["us-east-1a".to_string(), "us-east-1b".to_string()]);
        assert_eq!(web_group(), assigned);
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = web_group();
        let b = web_group();
        assert_eq!(a, a);
        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn fresh_groups_are_equal() {
        assert_eq!(AutoScalingGroup::default(), AutoScalingGroup::builder().build());
    }

    #[test]
    fn equal_groups_hash_together() {
        let set: HashSet<AutoScalingGroup> = [web_group(), web_group()].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn describe_payload_round_trips() {
        let group = AutoScalingGroup::builder()
            .auto_scaling_group_name("web-asg")
            .auto_scaling_group_arn(
                "arn:aws:autoscaling:us-east-1:123456789012:autoScalingGroup/web-asg",
            )
            .created_time(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
            .instances(
                Instance::builder()
                    .instance_id("i-0abc")
                    .lifecycle_state("InService")
                    .health_status("Healthy")
                    .build(),
            )
            .tags(TagDescription::builder().key("Name").value("web").build())
            .build();
        let json = serde_json::to_string(&group).unwrap();
        let parsed: AutoScalingGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }

    #[test]
    fn arn_fields_keep_their_wire_spelling() {
        let group = AutoScalingGroup::builder()
            .auto_scaling_group_arn("arn:aws:autoscaling::1:autoScalingGroup/web")
            .target_group_arns("arn:aws:elasticloadbalancing::1:targetgroup/web")
            .vpc_zone_identifier("subnet-1,subnet-2")
            .build();
        let json = serde_json::to_value(&group).unwrap();
        assert!(json.get("AutoScalingGroupARN").is_some());
        assert!(json.get("TargetGroupARNs").is_some());
        assert!(json.get("VPCZoneIdentifier").is_some());
    }
}
