use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::MetricStatistic;

/// Target tracking configuration of a scaling policy: keep the chosen
/// metric at `target_value` by adjusting the group's desired capacity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TargetTrackingConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_metric_specification: Option<PredefinedMetricSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customized_metric_specification: Option<CustomizedMetricSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_value: Option<f64>,
    /// When true the policy only scales out; scale-in is left to other
    /// policies or manual intervention.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_scale_in: Option<bool>,
}

impl TargetTrackingConfiguration {
    pub fn builder() -> TargetTrackingConfigurationBuilder {
        TargetTrackingConfigurationBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct TargetTrackingConfigurationBuilder {
    config: TargetTrackingConfiguration,
}

impl TargetTrackingConfigurationBuilder {
    pub fn predefined_metric_specification(mut self, value: PredefinedMetricSpecification) -> Self {
        self.config.predefined_metric_specification = Some(value);
        self
    }

    pub fn customized_metric_specification(mut self, value: CustomizedMetricSpecification) -> Self {
        self.config.customized_metric_specification = Some(value);
        self
    }

    pub fn target_value(mut self, value: f64) -> Self {
        self.config.target_value = Some(value);
        self
    }

    pub fn disable_scale_in(mut self, value: bool) -> Self {
        self.config.disable_scale_in = Some(value);
        self
    }

    pub fn build(self) -> TargetTrackingConfiguration {
        self.config
    }
}

impl fmt::Display for TargetTrackingConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field(
            "PredefinedMetricSpecification",
            &self.predefined_metric_specification,
        );
        w.field(
            "CustomizedMetricSpecification",
            &self.customized_metric_specification,
        );
        w.field("TargetValue", &self.target_value);
        w.field("DisableScaleIn", &self.disable_scale_in);
        w.finish(f)
    }
}

/// One of the service-defined metrics usable for target tracking, e.g.
/// `ASGAverageCPUUtilization`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PredefinedMetricSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predefined_metric_type: Option<String>,
    /// Identifies the target group when the metric is request-count based.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_label: Option<String>,
}

impl PredefinedMetricSpecification {
    pub fn builder() -> PredefinedMetricSpecificationBuilder {
        PredefinedMetricSpecificationBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct PredefinedMetricSpecificationBuilder {
    spec: PredefinedMetricSpecification,
}

impl PredefinedMetricSpecificationBuilder {
    pub fn predefined_metric_type(mut self, value: impl Into<String>) -> Self {
        self.spec.predefined_metric_type = Some(value.into());
        self
    }

    pub fn resource_label(mut self, value: impl Into<String>) -> Self {
        self.spec.resource_label = Some(value.into());
        self
    }

    pub fn build(self) -> PredefinedMetricSpecification {
        self.spec
    }
}

impl fmt::Display for PredefinedMetricSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("PredefinedMetricType", &self.predefined_metric_type);
        w.field("ResourceLabel", &self.resource_label);
        w.finish(f)
    }
}

/// Custom CloudWatch-style metric for target tracking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomizedMetricSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Vec<MetricDimension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistic: Option<MetricStatistic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl CustomizedMetricSpecification {
    pub fn builder() -> CustomizedMetricSpecificationBuilder {
        CustomizedMetricSpecificationBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CustomizedMetricSpecificationBuilder {
    spec: CustomizedMetricSpecification,
}

impl CustomizedMetricSpecificationBuilder {
    pub fn metric_name(mut self, value: impl Into<String>) -> Self {
        self.spec.metric_name = Some(value.into());
        self
    }

    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.spec.namespace = Some(value.into());
        self
    }

    pub fn dimensions(mut self, value: MetricDimension) -> Self {
        self.spec.dimensions.get_or_insert_with(Vec::new).push(value);
        self
    }

    pub fn set_dimensions(mut self, value: Option<Vec<MetricDimension>>) -> Self {
        self.spec.dimensions = value;
        self
    }

    pub fn statistic(mut self, value: MetricStatistic) -> Self {
        self.spec.statistic = Some(value);
        self
    }

    pub fn unit(mut self, value: impl Into<String>) -> Self {
        self.spec.unit = Some(value.into());
        self
    }

    pub fn build(self) -> CustomizedMetricSpecification {
        self.spec
    }
}

impl fmt::Display for CustomizedMetricSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("MetricName", &self.metric_name);
        w.field("Namespace", &self.namespace);
        w.list("Dimensions", &self.dimensions);
        w.field("Statistic", &self.statistic);
        w.field("Unit", &self.unit);
        w.finish(f)
    }
}

/// Name/value pair qualifying a custom metric.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDimension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl MetricDimension {
    pub fn builder() -> MetricDimensionBuilder {
        MetricDimensionBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MetricDimensionBuilder {
    dimension: MetricDimension,
}

impl MetricDimensionBuilder {
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.dimension.name = Some(value.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.dimension.value = Some(value.into());
        self
    }

    pub fn build(self) -> MetricDimension {
        self.dimension
    }
}

impl fmt::Display for MetricDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("Name", &self.name);
        w.field("Value", &self.value);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistic_serializes_to_its_label() {
        let spec = CustomizedMetricSpecification::builder()
            .metric_name("QueueDepth")
            .namespace("app/metrics")
            .statistic(MetricStatistic::Sum)
            .build();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["Statistic"], "Sum");
    }

    #[test]
    fn dimensions_append_rather_than_replace() {
        let spec = CustomizedMetricSpecification::builder()
            .dimensions(MetricDimension::builder().name("Queue").value("jobs").build())
            .dimensions(MetricDimension::builder().name("Stage").value("prod").build())
            .build();
        assert_eq!(spec.dimensions.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn target_value_displays_without_padding() {
        let config = TargetTrackingConfiguration::builder()
            .target_value(42.5)
            .disable_scale_in(false)
            .build();
        assert_eq!(
            config.to_string(),
            "{TargetValue: 42.5, DisableScaleIn: false}"
        );
    }
}
