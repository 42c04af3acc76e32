use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::LaunchTemplateSpecification;

/// Instance belonging to an auto-scaling group, as reported by the
/// describe operations.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Instance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    /// One of the instance lifecycle states, e.g. `Pending`, `InService`,
    /// `Terminating`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<String>,
    /// `Healthy` or `Unhealthy` as last reported by the health check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplateSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protected_from_scale_in: Option<bool>,
}

impl Instance {
    pub fn builder() -> InstanceBuilder {
        InstanceBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct InstanceBuilder {
    instance: Instance,
}

impl InstanceBuilder {
    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance.instance_id = Some(value.into());
        self
    }

    pub fn availability_zone(mut self, value: impl Into<String>) -> Self {
        self.instance.availability_zone = Some(value.into());
        self
    }

    pub fn lifecycle_state(mut self, value: impl Into<String>) -> Self {
        self.instance.lifecycle_state = Some(value.into());
        self
    }

    pub fn health_status(mut self, value: impl Into<String>) -> Self {
        self.instance.health_status = Some(value.into());
        self
    }

    pub fn launch_configuration_name(mut self, value: impl Into<String>) -> Self {
        self.instance.launch_configuration_name = Some(value.into());
        self
    }

    pub fn launch_template(mut self, value: LaunchTemplateSpecification) -> Self {
        self.instance.launch_template = Some(value);
        self
    }

    pub fn protected_from_scale_in(mut self, value: bool) -> Self {
        self.instance.protected_from_scale_in = Some(value);
        self
    }

    pub fn build(self) -> Instance {
        self.instance
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("InstanceId", &self.instance_id);
        w.field("AvailabilityZone", &self.availability_zone);
        w.field("LifecycleState", &self.lifecycle_state);
        w.field("HealthStatus", &self.health_status);
        w.field("LaunchConfigurationName", &self.launch_configuration_name);
        w.field("LaunchTemplate", &self.launch_template);
        w.field("ProtectedFromScaleIn", &self.protected_from_scale_in);
        w.finish(f)
    }
}

/// Scaling process currently suspended on a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SuspendedProcess {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspension_reason: Option<String>,
}

impl SuspendedProcess {
    pub fn builder() -> SuspendedProcessBuilder {
        SuspendedProcessBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SuspendedProcessBuilder {
    process: SuspendedProcess,
}

impl SuspendedProcessBuilder {
    pub fn process_name(mut self, value: impl Into<String>) -> Self {
        self.process.process_name = Some(value.into());
        self
    }

    pub fn suspension_reason(mut self, value: impl Into<String>) -> Self {
        self.process.suspension_reason = Some(value.into());
        self
    }

    pub fn build(self) -> SuspendedProcess {
        self.process
    }
}

impl fmt::Display for SuspendedProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("ProcessName", &self.process_name);
        w.field("SuspensionReason", &self.suspension_reason);
        w.finish(f)
    }
}

/// Metric collection enabled on a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnabledMetric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<String>,
    /// The only supported granularity is `1Minute`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
}

impl EnabledMetric {
    pub fn builder() -> EnabledMetricBuilder {
        EnabledMetricBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct EnabledMetricBuilder {
    metric: EnabledMetric,
}

impl EnabledMetricBuilder {
    pub fn metric(mut self, value: impl Into<String>) -> Self {
        self.metric.metric = Some(value.into());
        self
    }

    pub fn granularity(mut self, value: impl Into<String>) -> Self {
        self.metric.granularity = Some(value.into());
        self
    }

    pub fn build(self) -> EnabledMetric {
        self.metric
    }
}

impl fmt::Display for EnabledMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("Metric", &self.metric);
        w.field("Granularity", &self.granularity);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_launch_template_renders_inline() {
        let instance = Instance::builder()
            .instance_id("i-0abc")
            .launch_template(
                LaunchTemplateSpecification::builder()
                    .launch_template_name("web-template")
                    .version("3")
                    .build(),
            )
            .build();
        assert_eq!(
            instance.to_string(),
            "{InstanceId: i-0abc, \
             LaunchTemplate: {LaunchTemplateName: web-template, Version: 3}}"
        );
    }

    #[test]
    fn fresh_instances_are_equal() {
        assert_eq!(Instance::default(), Instance::builder().build());
    }

    #[test]
    fn suspended_process_wire_names() {
        let process = SuspendedProcess::builder()
            .process_name("AZRebalance")
            .suspension_reason("suspended by user")
            .build();
        let json = serde_json::to_value(&process).unwrap();
        assert_eq!(json["ProcessName"], "AZRebalance");
        assert_eq!(json["SuspensionReason"], "suspended by user");
    }
}
