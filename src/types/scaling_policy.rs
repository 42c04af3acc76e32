use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::TargetTrackingConfiguration;

/// Scaling policy attached to a group, as returned by the describe
/// operations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScalingPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    #[serde(rename = "PolicyARN", skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    /// `SimpleScaling`, `StepScaling` or `TargetTrackingScaling`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    /// How `scaling_adjustment` is interpreted: `ChangeInCapacity`,
    /// `ExactCapacity` or `PercentChangeInCapacity`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_adjustment_magnitude: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_adjustment: Option<i32>,
    /// Seconds to wait after this policy fires before allowing further
    /// scaling activity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_adjustments: Option<Vec<StepAdjustment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_aggregation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_instance_warmup: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Vec<Alarm>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_tracking_configuration: Option<TargetTrackingConfiguration>,
}

impl ScalingPolicy {
    pub fn builder() -> ScalingPolicyBuilder {
        ScalingPolicyBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScalingPolicyBuilder {
    policy: ScalingPolicy,
}

impl ScalingPolicyBuilder {
    pub fn auto_scaling_group_name(mut self, value: impl Into<String>) -> Self {
        self.policy.auto_scaling_group_name = Some(value.into());
        self
    }

    pub fn policy_name(mut self, value: impl Into<String>) -> Self {
        self.policy.policy_name = Some(value.into());
        self
    }

    pub fn policy_arn(mut self, value: impl Into<String>) -> Self {
        self.policy.policy_arn = Some(value.into());
        self
    }

    pub fn policy_type(mut self, value: impl Into<String>) -> Self {
        self.policy.policy_type = Some(value.into());
        self
    }

    pub fn adjustment_type(mut self, value: impl Into<String>) -> Self {
        self.policy.adjustment_type = Some(value.into());
        self
    }

    pub fn min_adjustment_magnitude(mut self, value: i32) -> Self {
        self.policy.min_adjustment_magnitude = Some(value);
        self
    }

    pub fn scaling_adjustment(mut self, value: i32) -> Self {
        self.policy.scaling_adjustment = Some(value);
        self
    }

    pub fn cooldown(mut self, value: i32) -> Self {
        self.policy.cooldown = Some(value);
        self
    }

    pub fn step_adjustments(mut self, value: StepAdjustment) -> Self {
        self.policy
            .step_adjustments
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_step_adjustments(mut self, value: Option<Vec<StepAdjustment>>) -> Self {
        self.policy.step_adjustments = value;
        self
    }

    pub fn metric_aggregation_type(mut self, value: impl Into<String>) -> Self {
        self.policy.metric_aggregation_type = Some(value.into());
        self
    }

    pub fn estimated_instance_warmup(mut self, value: i32) -> Self {
        self.policy.estimated_instance_warmup = Some(value);
        self
    }

    pub fn alarms(mut self, value: Alarm) -> Self {
        self.policy.alarms.get_or_insert_with(Vec::new).push(value);
        self
    }

    pub fn set_alarms(mut self, value: Option<Vec<Alarm>>) -> Self {
        self.policy.alarms = value;
        self
    }

    pub fn target_tracking_configuration(mut self, value: TargetTrackingConfiguration) -> Self {
        self.policy.target_tracking_configuration = Some(value);
        self
    }

    pub fn build(self) -> ScalingPolicy {
        self.policy
    }
}

impl fmt::Display for ScalingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AutoScalingGroupName", &self.auto_scaling_group_name);
        w.field("PolicyName", &self.policy_name);
        w.field("PolicyARN", &self.policy_arn);
        w.field("PolicyType", &self.policy_type);
        w.field("AdjustmentType", &self.adjustment_type);
        w.field("MinAdjustmentMagnitude", &self.min_adjustment_magnitude);
        w.field("ScalingAdjustment", &self.scaling_adjustment);
        w.field("Cooldown", &self.cooldown);
        w.list("StepAdjustments", &self.step_adjustments);
        w.field("MetricAggregationType", &self.metric_aggregation_type);
        w.field("EstimatedInstanceWarmup", &self.estimated_instance_warmup);
        w.list("Alarms", &self.alarms);
        w.field(
            "TargetTrackingConfiguration",
            &self.target_tracking_configuration,
        );
        w.finish(f)
    }
}

/// Capacity adjustment applied when the metric falls inside the bounds of
/// one step of a step scaling policy. Bounds are relative to the alarm
/// threshold; an absent upper bound means positive infinity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StepAdjustment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_interval_lower_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_interval_upper_bound: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_adjustment: Option<i32>,
}

impl StepAdjustment {
    pub fn builder() -> StepAdjustmentBuilder {
        StepAdjustmentBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct StepAdjustmentBuilder {
    step: StepAdjustment,
}

impl StepAdjustmentBuilder {
    pub fn metric_interval_lower_bound(mut self, value: f64) -> Self {
        self.step.metric_interval_lower_bound = Some(value);
        self
    }

    pub fn metric_interval_upper_bound(mut self, value: f64) -> Self {
        self.step.metric_interval_upper_bound = Some(value);
        self
    }

    pub fn scaling_adjustment(mut self, value: i32) -> Self {
        self.step.scaling_adjustment = Some(value);
        self
    }

    pub fn build(self) -> StepAdjustment {
        self.step
    }
}

impl fmt::Display for StepAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("MetricIntervalLowerBound", &self.metric_interval_lower_bound);
        w.field("MetricIntervalUpperBound", &self.metric_interval_upper_bound);
        w.field("ScalingAdjustment", &self.scaling_adjustment);
        w.finish(f)
    }
}

/// CloudWatch alarm associated with a scaling policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Alarm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarm_name: Option<String>,
    #[serde(rename = "AlarmARN", skip_serializing_if = "Option::is_none")]
    pub alarm_arn: Option<String>,
}

impl Alarm {
    pub fn builder() -> AlarmBuilder {
        AlarmBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct AlarmBuilder {
    alarm: Alarm,
}

impl AlarmBuilder {
    pub fn alarm_name(mut self, value: impl Into<String>) -> Self {
        self.alarm.alarm_name = Some(value.into());
        self
    }

    pub fn alarm_arn(mut self, value: impl Into<String>) -> Self {
        self.alarm.alarm_arn = Some(value.into());
        self
    }

    pub fn build(self) -> Alarm {
        self.alarm
    }
}

impl fmt::Display for Alarm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AlarmName", &self.alarm_name);
        w.field("AlarmARN", &self.alarm_arn);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_adjustments_keep_insertion_order() {
        let policy = ScalingPolicy::builder()
            .policy_name("step-up")
            .step_adjustments(
                StepAdjustment::builder()
                    .metric_interval_lower_bound(0.0)
                    .metric_interval_upper_bound(10.0)
                    .scaling_adjustment(1)
                    .build(),
            )
            .step_adjustments(
                StepAdjustment::builder()
                    .metric_interval_lower_bound(10.0)
                    .scaling_adjustment(3)
                    .build(),
            )
            .build();
        let steps = policy.step_adjustments.unwrap();
        assert_eq!(steps[0].scaling_adjustment, Some(1));
        assert_eq!(steps[1].scaling_adjustment, Some(3));
    }

    #[test]
    fn policy_arn_keeps_its_wire_spelling() {
        let policy = ScalingPolicy::builder()
            .policy_arn("arn:aws:autoscaling:us-east-1:123456789012:scalingPolicy/web")
            .build();
        let json = serde_json::to_value(&policy).unwrap();
        assert!(json.get("PolicyARN").is_some());
        assert!(json.get("PolicyArn").is_none());
    }

    #[test]
    fn equality_is_field_by_field() {
        let a = ScalingPolicy::builder().policy_name("p").cooldown(300).build();
        let b = ScalingPolicy::builder().policy_name("p").cooldown(300).build();
        let c = ScalingPolicy::builder().policy_name("p").cooldown(60).build();
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a, c);
    }
}
