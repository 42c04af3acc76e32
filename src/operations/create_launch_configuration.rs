use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::{BlockDeviceMapping, InstanceMonitoring};

/// Parameters for creating a launch configuration. `instance_id` can stand
/// in for most fields by copying the launch parameters of an existing
/// instance; anything given explicitly overrides the copied value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLaunchConfigurationRequest {
    /// Name of the configuration, unique per account and region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_optimized: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associate_public_ip_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_tenancy: Option<String>,
}

impl CreateLaunchConfigurationRequest {
    pub fn builder() -> CreateLaunchConfigurationRequestBuilder {
        CreateLaunchConfigurationRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CreateLaunchConfigurationRequestBuilder {
    request: CreateLaunchConfigurationRequest,
}

impl CreateLaunchConfigurationRequestBuilder {
    pub fn launch_configuration_name(mut self, value: impl Into<String>) -> Self {
        self.request.launch_configuration_name = Some(value.into());
        self
    }

    pub fn image_id(mut self, value: impl Into<String>) -> Self {
        self.request.image_id = Some(value.into());
        self
    }

    pub fn key_name(mut self, value: impl Into<String>) -> Self {
        self.request.key_name = Some(value.into());
        self
    }

    pub fn security_groups(mut self, value: impl Into<String>) -> Self {
        self.request
            .security_groups
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_security_groups(mut self, value: Option<Vec<String>>) -> Self {
        self.request.security_groups = value;
        self
    }

    pub fn classic_link_vpc_id(mut self, value: impl Into<String>) -> Self {
        self.request.classic_link_vpc_id = Some(value.into());
        self
    }

    pub fn classic_link_vpc_security_groups(mut self, value: impl Into<String>) -> Self {
        self.request
            .classic_link_vpc_security_groups
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_classic_link_vpc_security_groups(mut self, value: Option<Vec<String>>) -> Self {
        self.request.classic_link_vpc_security_groups = value;
        self
    }

    pub fn user_data(mut self, value: impl Into<String>) -> Self {
        self.request.user_data = Some(value.into());
        self
    }

    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.request.instance_id = Some(value.into());
        self
    }

    pub fn instance_type(mut self, value: impl Into<String>) -> Self {
        self.request.instance_type = Some(value.into());
        self
    }

    pub fn kernel_id(mut self, value: impl Into<String>) -> Self {
        self.request.kernel_id = Some(value.into());
        self
    }

    pub fn ramdisk_id(mut self, value: impl Into<String>) -> Self {
        self.request.ramdisk_id = Some(value.into());
        self
    }

    pub fn block_device_mappings(mut self, value: BlockDeviceMapping) -> Self {
        self.request
            .block_device_mappings
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_block_device_mappings(mut self, value: Option<Vec<BlockDeviceMapping>>) -> Self {
        self.request.block_device_mappings = value;
        self
    }

    pub fn instance_monitoring(mut self, value: InstanceMonitoring) -> Self {
        self.request.instance_monitoring = Some(value);
        self
    }

    pub fn spot_price(mut self, value: impl Into<String>) -> Self {
        self.request.spot_price = Some(value.into());
        self
    }

    pub fn iam_instance_profile(mut self, value: impl Into<String>) -> Self {
        self.request.iam_instance_profile = Some(value.into());
        self
    }

    pub fn ebs_optimized(mut self, value: bool) -> Self {
        self.request.ebs_optimized = Some(value);
        self
    }

    pub fn associate_public_ip_address(mut self, value: bool) -> Self {
        self.request.associate_public_ip_address = Some(value);
        self
    }

    pub fn placement_tenancy(mut self, value: impl Into<String>) -> Self {
        self.request.placement_tenancy = Some(value.into());
        self
    }

    pub fn build(self) -> CreateLaunchConfigurationRequest {
        self.request
    }
}

impl fmt::Display for CreateLaunchConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("LaunchConfigurationName", &self.launch_configuration_name);
        w.field("ImageId", &self.image_id);
        w.field("KeyName", &self.key_name);
        w.list("SecurityGroups", &self.security_groups);
        w.field("ClassicLinkVPCId", &self.classic_link_vpc_id);
        w.list(
            "ClassicLinkVPCSecurityGroups",
            &self.classic_link_vpc_security_groups,
        );
        w.field("UserData", &self.user_data);
        w.field("InstanceId", &self.instance_id);
        w.field("InstanceType", &self.instance_type);
        w.field("KernelId", &self.kernel_id);
        w.field("RamdiskId", &self.ramdisk_id);
        w.list("BlockDeviceMappings", &self.block_device_mappings);
        w.field("InstanceMonitoring", &self.instance_monitoring);
        w.field("SpotPrice", &self.spot_price);
        w.field("IamInstanceProfile", &self.iam_instance_profile);
        w.field("EbsOptimized", &self.ebs_optimized);
        w.field("AssociatePublicIpAddress", &self.associate_public_ip_address);
        w.field("PlacementTenancy", &self.placement_tenancy);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ebs;

    #[test]
    fn builder_matches_field_assignment() {
        let built = CreateLaunchConfigurationRequest::builder()
            .launch_configuration_name("web-lc")
            .image_id("ami-12345678")
            .instance_type("m5.large")
            .spot_price("0.045")
            .build();
        let mut assigned = CreateLaunchConfigurationRequest::default();
        assigned.launch_configuration_name = Some("web-lc".to_string());
        assigned.image_id = Some("ami-12345678".to_string());
        assigned.instance_type = Some("m5.large".to_string());
        assigned.spot_price = Some("0.045".to_string());
        assert_eq!(built, assigned);
    }

    #[test]
    fn block_device_mappings_append_in_order() {
        let request = CreateLaunchConfigurationRequest::builder()
            .block_device_mappings(
                BlockDeviceMapping::builder()
                    .device_name("/dev/sda1")
                    .ebs(Ebs::builder().volume_size(30).build())
                    .build(),
            )
            .block_device_mappings(
                BlockDeviceMapping::builder().virtual_name("ephemeral0").build(),
            )
            .build();
        let mappings = request.block_device_mappings.unwrap();
        assert_eq!(mappings[0].device_name.as_deref(), Some("/dev/sda1"));
        assert_eq!(mappings[1].virtual_name.as_deref(), Some("ephemeral0"));
    }

    #[test]
    fn request_round_trips_through_wire_format() {
        let request = CreateLaunchConfigurationRequest::builder()
            .launch_configuration_name("web-lc")
            .security_groups("sg-1")
            .instance_monitoring(InstanceMonitoring::builder().enabled(true).build())
            .ebs_optimized(false)
            .build();
        let json = serde_json::to_string(&request).unwrap();
        let parsed: CreateLaunchConfigurationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
