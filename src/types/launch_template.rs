use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;

/// Reference to a launch template by id or name, at a given version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template_name: Option<String>,
    /// Version number, `$Latest` or `$Default`. Defaults to `$Default`
    /// when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl LaunchTemplateSpecification {
    pub fn builder() -> LaunchTemplateSpecificationBuilder {
        LaunchTemplateSpecificationBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct LaunchTemplateSpecificationBuilder {
    spec: LaunchTemplateSpecification,
}

impl LaunchTemplateSpecificationBuilder {
    pub fn launch_template_id(mut self, value: impl Into<String>) -> Self {
        self.spec.launch_template_id = Some(value.into());
        self
    }

    pub fn launch_template_name(mut self, value: impl Into<String>) -> Self {
        self.spec.launch_template_name = Some(value.into());
        self
    }

    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.spec.version = Some(value.into());
        self
    }

    pub fn build(self) -> LaunchTemplateSpecification {
        self.spec
    }
}

impl fmt::Display for LaunchTemplateSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("LaunchTemplateId", &self.launch_template_id);
        w.field("LaunchTemplateName", &self.launch_template_name);
        w.field("Version", &self.version);
        w.finish(f)
    }
}

/// Launch template together with the instance-type overrides a mixed
/// instances policy applies to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template_specification: Option<LaunchTemplateSpecification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<LaunchTemplateOverrides>>,
}

impl LaunchTemplate {
    pub fn builder() -> LaunchTemplateBuilder {
        LaunchTemplateBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct LaunchTemplateBuilder {
    template: LaunchTemplate,
}

impl LaunchTemplateBuilder {
    pub fn launch_template_specification(mut self, value: LaunchTemplateSpecification) -> Self {
        self.template.launch_template_specification = Some(value);
        self
    }

    pub fn overrides(mut self, value: LaunchTemplateOverrides) -> Self {
        self.template
            .overrides
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_overrides(mut self, value: Option<Vec<LaunchTemplateOverrides>>) -> Self {
        self.template.overrides = value;
        self
    }

    pub fn build(self) -> LaunchTemplate {
        self.template
    }
}

impl fmt::Display for LaunchTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field(
            "LaunchTemplateSpecification",
            &self.launch_template_specification,
        );
        w.list("Overrides", &self.overrides);
        w.finish(f)
    }
}

/// Per-instance-type override within a mixed instances policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchTemplateOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    /// Number of capacity units this instance type counts for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weighted_capacity: Option<String>,
}

impl LaunchTemplateOverrides {
    pub fn builder() -> LaunchTemplateOverridesBuilder {
        LaunchTemplateOverridesBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct LaunchTemplateOverridesBuilder {
    overrides: LaunchTemplateOverrides,
}

impl LaunchTemplateOverridesBuilder {
    pub fn instance_type(mut self, value: impl Into<String>) -> Self {
        self.overrides.instance_type = Some(value.into());
        self
    }

    pub fn weighted_capacity(mut self, value: impl Into<String>) -> Self {
        self.overrides.weighted_capacity = Some(value.into());
        self
    }

    pub fn build(self) -> LaunchTemplateOverrides {
        self.overrides
    }
}

impl fmt::Display for LaunchTemplateOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("InstanceType", &self.instance_type);
        w.field("WeightedCapacity", &self.weighted_capacity);
        w.finish(f)
    }
}

/// How on-demand and spot capacity is distributed across the instance
/// types of a mixed instances policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstancesDistribution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_allocation_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_base_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_percentage_above_base_capacity: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_allocation_strategy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_instance_pools: Option<i32>,
    /// Maximum price per unit hour; an empty string means the on-demand
    /// price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_max_price: Option<String>,
}

impl InstancesDistribution {
    pub fn builder() -> InstancesDistributionBuilder {
        InstancesDistributionBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct InstancesDistributionBuilder {
    distribution: InstancesDistribution,
}

impl InstancesDistributionBuilder {
    pub fn on_demand_allocation_strategy(mut self, value: impl Into<String>) -> Self {
        self.distribution.on_demand_allocation_strategy = Some(value.into());
        self
    }

    pub fn on_demand_base_capacity(mut self, value: i32) -> Self {
        self.distribution.on_demand_base_capacity = Some(value);
        self
    }

    pub fn on_demand_percentage_above_base_capacity(mut self, value: i32) -> Self {
        self.distribution.on_demand_percentage_above_base_capacity = Some(value);
        self
    }

    pub fn spot_allocation_strategy(mut self, value: impl Into<String>) -> Self {
        self.distribution.spot_allocation_strategy = Some(value.into());
        self
    }

    pub fn spot_instance_pools(mut self, value: i32) -> Self {
        self.distribution.spot_instance_pools = Some(value);
        self
    }

    pub fn spot_max_price(mut self, value: impl Into<String>) -> Self {
        self.distribution.spot_max_price = Some(value.into());
        self
    }

    pub fn build(self) -> InstancesDistribution {
        self.distribution
    }
}

impl fmt::Display for InstancesDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field(
            "OnDemandAllocationStrategy",
            &self.on_demand_allocation_strategy,
        );
        w.field("OnDemandBaseCapacity", &self.on_demand_base_capacity);
        w.field(
            "OnDemandPercentageAboveBaseCapacity",
            &self.on_demand_percentage_above_base_capacity,
        );
        w.field("SpotAllocationStrategy", &self.spot_allocation_strategy);
        w.field("SpotInstancePools", &self.spot_instance_pools);
        w.field("SpotMaxPrice", &self.spot_max_price);
        w.finish(f)
    }
}

/// Policy letting a group launch across multiple instance types and
/// purchase options.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MixedInstancesPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_template: Option<LaunchTemplate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances_distribution: Option<InstancesDistribution>,
}

impl MixedInstancesPolicy {
    pub fn builder() -> MixedInstancesPolicyBuilder {
        MixedInstancesPolicyBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MixedInstancesPolicyBuilder {
    policy: MixedInstancesPolicy,
}

impl MixedInstancesPolicyBuilder {
    pub fn launch_template(mut self, value: LaunchTemplate) -> Self {
        self.policy.launch_template = Some(value);
        self
    }

    pub fn instances_distribution(mut self, value: InstancesDistribution) -> Self {
        self.policy.instances_distribution = Some(value);
        self
    }

    pub fn build(self) -> MixedInstancesPolicy {
        self.policy
    }
}

impl fmt::Display for MixedInstancesPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("LaunchTemplate", &self.launch_template);
        w.field("InstancesDistribution", &self.instances_distribution);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_append_in_order() {
        let template = LaunchTemplate::builder()
            .overrides(LaunchTemplateOverrides::builder().instance_type("m5.large").build())
            .overrides(LaunchTemplateOverrides::builder().instance_type("c5.large").build())
            .build();
        let overrides = template.overrides.unwrap();
        assert_eq!(overrides[0].instance_type.as_deref(), Some("m5.large"));
        assert_eq!(overrides[1].instance_type.as_deref(), Some("c5.large"));
    }

    #[test]
    fn set_overrides_replaces_the_sequence() {
        let template = LaunchTemplate::builder()
            .overrides(LaunchTemplateOverrides::builder().instance_type("m5.large").build())
            .set_overrides(Some(vec![LaunchTemplateOverrides::builder()
                .instance_type("r5.large")
                .build()]))
            .build();
        let overrides = template.overrides.unwrap();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[0].instance_type.as_deref(), Some("r5.large"));
    }

    #[test]
    fn policy_displays_nested_structures() {
        let policy = MixedInstancesPolicy::builder()
            .launch_template(
                LaunchTemplate::builder()
                    .launch_template_specification(
                        LaunchTemplateSpecification::builder()
                            .launch_template_name("web")
                            .build(),
                    )
                    .build(),
            )
            .build();
        assert_eq!(
            policy.to_string(),
            "{LaunchTemplate: {LaunchTemplateSpecification: {LaunchTemplateName: web}}}"
        );
    }
}
