use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::{Alarm, StepAdjustment, TargetTrackingConfiguration};

/// Parameters for creating or updating a scaling policy. Which fields
/// apply depends on `policy_type`: step policies use `step_adjustments`
/// and `metric_aggregation_type`, target tracking policies use
/// `target_tracking_configuration`, simple policies use
/// `scaling_adjustment` and `cooldown`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutScalingPolicyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_group_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
    /// `SimpleScaling` (the default), `StepScaling` or
    /// `TargetTrackingScaling`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_adjustment_magnitude: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_adjustment: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_aggregation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_adjustments: Option<Vec<StepAdjustment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_instance_warmup: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_tracking_configuration: Option<TargetTrackingConfiguration>,
}

impl PutScalingPolicyRequest {
    pub fn builder() -> PutScalingPolicyRequestBuilder {
        PutScalingPolicyRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PutScalingPolicyRequestBuilder {
    request: PutScalingPolicyRequest,
}

impl PutScalingPolicyRequestBuilder {
    pub fn auto_scaling_group_name(mut self, value: impl Into<String>) -> Self {
        self.request.auto_scaling_group_name = Some(value.into());
        self
    }

    pub fn policy_name(mut self, value: impl Into<String>) -> Self {
        self.request.policy_name = Some(value.into());
        self
    }

    pub fn policy_type(mut self, value: impl Into<String>) -> Self {
        self.request.policy_type = Some(value.into());
        self
    }

    pub fn adjustment_type(mut self, value: impl Into<String>) -> Self {
        self.request.adjustment_type = Some(value.into());
        self
    }

    pub fn min_adjustment_magnitude(mut self, value: i32) -> Self {
        self.request.min_adjustment_magnitude = Some(value);
        self
    }

    pub fn scaling_adjustment(mut self, value: i32) -> Self {
        self.request.scaling_adjustment = Some(value);
        self
    }

    pub fn cooldown(mut self, value: i32) -> Self {
        self.request.cooldown = Some(value);
        self
    }

    pub fn metric_aggregation_type(mut self, value: impl Into<String>) -> Self {
        self.request.metric_aggregation_type = Some(value.into());
        self
    }

    pub fn step_adjustments(mut self, value: StepAdjustment) -> Self {
        self.request
            .step_adjustments
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_step_adjustments(mut self, value: Option<Vec<StepAdjustment>>) -> Self {
        self.request.step_adjustments = value;
        self
    }

    pub fn estimated_instance_warmup(mut self, value: i32) -> Self {
        self.request.estimated_instance_warmup = Some(value);
        self
    }

    pub fn target_tracking_configuration(mut self, value: TargetTrackingConfiguration) -> Self {
        self.request.target_tracking_configuration = Some(value);
        self
    }

    pub fn build(self) -> PutScalingPolicyRequest {
        self.request
    }
}

impl fmt::Display for PutScalingPolicyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("AutoScalingGroupName", &self.auto_scaling_group_name);
        w.field("PolicyName", &self.policy_name);
        w.field("PolicyType", &self.policy_type);
        w.field("AdjustmentType", &self.adjustment_type);
        w.field("MinAdjustmentMagnitude", &self.min_adjustment_magnitude);
        w.field("ScalingAdjustment", &self.scaling_adjustment);
        w.field("Cooldown", &self.cooldown);
        w.field("MetricAggregationType", &self.metric_aggregation_type);
        w.list("StepAdjustments", &self.step_adjustments);
        w.field("EstimatedInstanceWarmup", &self.estimated_instance_warmup);
        w.field(
            "TargetTrackingConfiguration",
            &self.target_tracking_configuration,
        );
        w.finish(f)
    }
}

/// The service's answer to a put: the policy's ARN and the CloudWatch
/// alarms it created or updated for it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutScalingPolicyResponse {
    #[serde(rename = "PolicyARN", skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alarms: Option<Vec<Alarm>>,
}

impl PutScalingPolicyResponse {
    pub fn builder() -> PutScalingPolicyResponseBuilder {
        PutScalingPolicyResponseBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PutScalingPolicyResponseBuilder {
    response: PutScalingPolicyResponse,
}

impl PutScalingPolicyResponseBuilder {
    pub fn policy_arn(mut self, value: impl Into<String>) -> Self {
        self.response.policy_arn = Some(value.into());
        self
    }

    pub fn alarms(mut self, value: Alarm) -> Self {
        self.response.alarms.get_or_insert_with(Vec::new).push(value);
        self
    }

    pub fn set_alarms(mut self, value: Option<Vec<Alarm>>) -> Self {
        self.response.alarms = value;
        self
    }

    pub fn build(self) -> PutScalingPolicyResponse {
        self.response
    }
}

impl fmt::Display for PutScalingPolicyResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("PolicyARN", &self.policy_arn);
        w.list("Alarms", &self.alarms);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CustomizedMetricSpecification, MetricStatistic};

    #[test]
    fn target_tracking_request_serializes_nested_config() {
        let request = PutScalingPolicyRequest::builder()
            .auto_scaling_group_name("web-asg")
            .policy_name("keep-queue-short")
            .policy_type("TargetTrackingScaling")
            .target_tracking_configuration(
                TargetTrackingConfiguration::builder()
                    .customized_metric_specification(
                        CustomizedMetricSpecification::builder()
                            .metric_name("QueueDepth")
                            .namespace("app/metrics")
                            .statistic(MetricStatistic::Average)
                            .build(),
                    )
                    .target_value(10.0)
                    .build(),
            )
            .build();
        let json = serde_json::to_value(&request).unwrap();
        let config = &json["TargetTrackingConfiguration"];
        assert_eq!(config["TargetValue"], 10.0);
        assert_eq!(
            config["CustomizedMetricSpecification"]["Statistic"],
            "Average"
        );
    }

    #[test]
    fn step_request_displays_adjustments_in_order() {
        let request = PutScalingPolicyRequest::builder()
            .policy_name("step-up")
            .policy_type("StepScaling")
            .step_adjustments(
                StepAdjustment::builder()
                    .metric_interval_lower_bound(0.0)
                    .scaling_adjustment(2)
                    .build(),
            )
            .build();
        assert_eq!(
            request.to_string(),
            "{PolicyName: step-up, PolicyType: StepScaling, \
             StepAdjustments: [{MetricIntervalLowerBound: 0, ScalingAdjustment: 2}]}"
        );
    }

    #[test]
    fn response_round_trips() {
        let response = PutScalingPolicyResponse::builder()
            .policy_arn("arn:aws:autoscaling:us-east-1:123456789012:scalingPolicy/web")
            .alarms(Alarm::builder().alarm_name("TargetTracking-web-asg").build())
            .build();
        let json = serde_json::to_string(&response).unwrap();
        let parsed: PutScalingPolicyResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, response);
    }
}
