use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::{BlockDeviceMapping, InstanceMonitoring};

/// Snapshot of a launch configuration: the template describing how new
/// instances of a group are booted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LaunchConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
    #[serde(
        rename = "LaunchConfigurationARN",
        skip_serializing_if = "Option::is_none"
    )]
    pub launch_configuration_arn: Option<String>,
    /// Id of the machine image instances boot from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_groups: Option<Vec<String>>,
    #[serde(rename = "ClassicLinkVPCId", skip_serializing_if = "Option::is_none")]
    pub classic_link_vpc_id: Option<String>,
    #[serde(
        rename = "ClassicLinkVPCSecurityGroups",
        skip_serializing_if = "Option::is_none"
    )]
    pub classic_link_vpc_security_groups: Option<Vec<String>>,
    /// Base64-encoded data made available to the instances at boot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kernel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramdisk_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_monitoring: Option<InstanceMonitoring>,
    /// Maximum hourly price when requesting spot instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,
    /// `default` or `dedicated`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_tenancy: Option<String>,
}

impl LaunchConfiguration {
    pub fn builder() -> LaunchConfigurationBuilder {
        LaunchConfigurationBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct LaunchConfigurationBuilder {
    config: LaunchConfiguration,
}

impl LaunchConfigurationBuilder {
    pub fn launch_configuration_name(mut self, value: impl Into<String>) -> Self {
        self.config.launch_configuration_name = Some(value.into());
        self
    }

    pub fn launch_configuration_arn(mut self, value: impl Into<String>) -> Self {
        self.config.launch_configuration_arn = Some(value.into());
        self
    }

    pub fn image_id(mut self, value: impl Into<String>) -> Self {
        self.config.image_id = Some(value.into());
        self
    }

    pub fn key_name(mut self, value: impl Into<String>) -> Self {
        self.config.key_name = Some(value.into());
        self
    }

    pub fn security_groups(mut self, value: impl Into<String>) -> Self {
        self.config
            .security_groups
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_security_groups(mut self, value: Option<Vec<String>>) -> Self {
        self.config.security_groups = value;
        self
    }

    pub fn classic_link_vpc_id(mut self, value: impl Into<String>) -> Self {
        self.config.classic_link_vpc_id = Some(value.into());
        self
    }

    pub fn classic_link_vpc_security_groups(mut self, value: impl Into<String>) -> Self {
        self.config
            .classic_link_vpc_security_groups
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_classic_link_vpc_security_groups(mut self, value: Option<Vec<String>>) -> Self {
        self.config.classic_link_vpc_security_groups = value;
        self
    }

    pub fn user_data(mut self, value: impl Into<String>) -> Self {
        self.config.user_data = Some(value.into());
        self
    }

    pub fn instance_type(mut self, value: impl Into<String>) -> Self {
        self.config.instance_type = Some(value.into());
        self
    }

    pub fn kernel_id(mut self, value: impl Into<String>) -> Self {
        self.config.kernel_id = Some(value.into());
        self
    }

    pub fn ramdisk_id(mut self, value: impl Into<String>) -> Self {
        self.config.ramdisk_id = Some(value.into());
        self
    }

    pub fn block_device_mappings(mut self, value: BlockDeviceMapping) -> Self {
        self.config
            .block_device_mappings
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_block_device_mappings(mut self, value: Option<Vec<BlockDeviceMapping>>) -> Self {
        self.config.block_device_mappings = value;
        self
    }

    pub fn instance_monitoring(mut self, value: InstanceMonitoring) -> Self {
        self.config.instance_monitoring = Some(value);
        self
    }

    pub fn spot_price(mut self, value: impl Into<String>) -> Self {
        self.config.spot_price = Some(value.into());
        self
    }

    pub fn iam_instance_profile(mut self, value: impl Into<String>) -> Self {
        self.config.iam_instance_profile = Some(value.into());
        self
    }

    pub fn created_time(mut self, value: DateTime<Utc>) -> Self {
        self.config.created_time = Some(value);
        self
    }

    pub fn ebs_optimized(mut self, value: bool) -> Self {
        self.config.ebs_optimized = Some(value);
        self
    }

    pub fn associate_public_ip_address(mut self, value: bool) -> Self {
        self.config.associate_public_ip_address = Some(value);
        self
    }

    pub fn placement_tenancy(mut self, value: impl Into<String>) -> Self {
        self.config.placement_tenancy = Some(value.into());
        self
    }

    pub fn build(self) -> LaunchConfiguration {
        self.config
    }
}

impl fmt::Display for LaunchConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("LaunchConfigurationName", &self.launch_configuration_name);
        w.field("LaunchConfigurationARN", &self.launch_configuration_arn);
        w.field("ImageId", &self.image_id);
        w.field("KeyName", &self.key_name);
        w.list("SecurityGroups", &self.security_groups);
        w.field("ClassicLinkVPCId", &self.classic_link_vpc_id);
        w.list(
            "ClassicLinkVPCSecurityGroups",
            &self.classic_link_vpc_security_groups,
        );
        w.field("UserData", &self.user_data);
        w.field("InstanceType", &self.instance_type);
        w.field("KernelId", &self.kernel_id);
        w.field("RamdiskId", &self.ramdisk_id);
        w.list("BlockDeviceMappings", &self.block_device_mappings);
        w.field("InstanceMonitoring", &self.instance_monitoring);
        w.field("SpotPrice", &self.spot_price);
        w.field("IamInstanceProfile", &self.iam_instance_profile);
        w.field("CreatedTime", &self.created_time);
        w.field("EbsOptimized", &self.ebs_optimized);
        w.field("AssociatePublicIpAddress", &self.associate_public_ip_address);
        w.field("PlacementTenancy", &self.placement_tenancy);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_matches_field_assignment() {
        let built = LaunchConfiguration::builder()
            .launch_configuration_name("web-lc")
            .image_id("ami-12345678")
            .instance_type("m5.large")
            .security_groups("sg-1")
            .security_groups("sg-2")
            .build();
        let mut assigned = LaunchConfiguration::default();
        assigned.launch_configuration_name = Some("web-lc".to_string());
        assigned.image_id = Some("ami-12345678".to_string());
        assigned.instance_type = Some("m5.large".to_string());
        assigned.security_groups = Some(vec!["sg-1".to_string(), "sg-2".to_string()]);
        assert_eq!(built, assigned);
    }

    #[test]
    fn display_omits_spot_price_when_unset() {
        let config = LaunchConfiguration::builder()
            .launch_configuration_name("web-lc")
            .build();
        let rendered = config.to_string();
        assert!(rendered.contains("LaunchConfigurationName: web-lc"));
        assert!(!rendered.contains("SpotPrice"));
    }

    #[test]
    fn classic_link_fields_keep_their_wire_spelling() {
        let config = LaunchConfiguration::builder()
            .classic_link_vpc_id("vpc-1")
            .classic_link_vpc_security_groups("sg-1")
            .build();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("ClassicLinkVPCId").is_some());
        assert!(json.get("ClassicLinkVPCSecurityGroups").is_some());
    }
}
