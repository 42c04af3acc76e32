//! Shared resource snapshots and the sub-structures embedded in requests
//! and responses.

mod auto_scaling_group;
mod block_device;
mod instance;
mod launch_configuration;
mod launch_template;
mod metric_statistic;
mod scaling_policy;
mod tag;
mod target_tracking;

pub use auto_scaling_group::{AutoScalingGroup, AutoScalingGroupBuilder};
pub use block_device::{
    BlockDeviceMapping, BlockDeviceMappingBuilder, Ebs, EbsBuilder, InstanceMonitoring,
    InstanceMonitoringBuilder,
};
pub use instance::{
    EnabledMetric, EnabledMetricBuilder, Instance, InstanceBuilder, SuspendedProcess,
    SuspendedProcessBuilder,
};
pub use launch_configuration::{LaunchConfiguration, LaunchConfigurationBuilder};
pub use launch_template::{
    InstancesDistribution, InstancesDistributionBuilder, LaunchTemplate, LaunchTemplateBuilder,
    LaunchTemplateOverrides, LaunchTemplateOverridesBuilder, LaunchTemplateSpecification,
    LaunchTemplateSpecificationBuilder, MixedInstancesPolicy, MixedInstancesPolicyBuilder,
};
pub use metric_statistic::MetricStatistic;
pub use scaling_policy::{
    Alarm, AlarmBuilder, ScalingPolicy, ScalingPolicyBuilder, StepAdjustment,
    StepAdjustmentBuilder,
};
pub use tag::{Tag, TagBuilder, TagDescription, TagDescriptionBuilder};
pub use target_tracking::{
    CustomizedMetricSpecification, CustomizedMetricSpecificationBuilder, MetricDimension,
    MetricDimensionBuilder, PredefinedMetricSpecification, PredefinedMetricSpecificationBuilder,
    TargetTrackingConfiguration, TargetTrackingConfigurationBuilder,
};
