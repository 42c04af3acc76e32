use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;

/// Mapping of a device name to either an EBS volume or an instance-store
/// virtual device.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BlockDeviceMapping {
    /// Instance-store virtual device name, e.g. `ephemeral0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_name: Option<String>,
    /// Device name exposed to the instance, e.g. `/dev/sdh`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs: Option<Ebs>,
    /// Suppresses the device mapping inherited from the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_device: Option<bool>,
}

impl BlockDeviceMapping {
    pub fn builder() -> BlockDeviceMappingBuilder {
        BlockDeviceMappingBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct BlockDeviceMappingBuilder {
    mapping: BlockDeviceMapping,
}

impl BlockDeviceMappingBuilder {
    pub fn virtual_name(mut self, value: impl Into<String>) -> Self {
        self.mapping.virtual_name = Some(value.into());
        self
    }

    pub fn device_name(mut self, value: impl Into<String>) -> Self {
        self.mapping.device_name = Some(value.into());
        self
    }

    pub fn ebs(mut self, value: Ebs) -> Self {
        self.mapping.ebs = Some(value);
        self
    }

    pub fn no_device(mut self, value: bool) -> Self {
        self.mapping.no_device = Some(value);
        self
    }

    pub fn build(self) -> BlockDeviceMapping {
        self.mapping
    }
}

impl fmt::Display for BlockDeviceMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("VirtualName", &self.virtual_name);
        w.field("DeviceName", &self.device_name);
        w.field("Ebs", &self.ebs);
        w.field("NoDevice", &self.no_device);
        w.finish(f)
    }
}

/// EBS volume description within a block device mapping.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ebs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
    /// Volume size in GiB.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_size: Option<i32>,
    /// `standard`, `io1`, `gp2`, `st1` or `sc1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_on_termination: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iops: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encrypted: Option<bool>,
}

impl Ebs {
    pub fn builder() -> EbsBuilder {
        EbsBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct EbsBuilder {
    ebs: Ebs,
}

impl EbsBuilder {
    pub fn snapshot_id(mut self, value: impl Into<String>) -> Self {
        self.ebs.snapshot_id = Some(value.into());
        self
    }

    pub fn volume_size(mut self, value: i32) -> Self {
        self.ebs.volume_size = Some(value);
        self
    }

    pub fn volume_type(mut self, value: impl Into<String>) -> Self {
        self.ebs.volume_type = Some(value.into());
        self
    }

    pub fn delete_on_termination(mut self, value: bool) -> Self {
        self.ebs.delete_on_termination = Some(value);
        self
    }

    pub fn iops(mut self, value: i32) -> Self {
        self.ebs.iops = Some(value);
        self
    }

    pub fn encrypted(mut self, value: bool) -> Self {
        self.ebs.encrypted = Some(value);
        self
    }

    pub fn build(self) -> Ebs {
        self.ebs
    }
}

impl fmt::Display for Ebs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("SnapshotId", &self.snapshot_id);
        w.field("VolumeSize", &self.volume_size);
        w.field("VolumeType", &self.volume_type);
        w.field("DeleteOnTermination", &self.delete_on_termination);
        w.field("Iops", &self.iops);
        w.field("Encrypted", &self.encrypted);
        w.finish(f)
    }
}

/// Whether detailed monitoring is enabled for launched instances.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceMonitoring {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl InstanceMonitoring {
    pub fn builder() -> InstanceMonitoringBuilder {
        InstanceMonitoringBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct InstanceMonitoringBuilder {
    monitoring: InstanceMonitoring,
}

impl InstanceMonitoringBuilder {
    pub fn enabled(mut self, value: bool) -> Self {
        self.monitoring.enabled = Some(value);
        self
    }

    pub fn build(self) -> InstanceMonitoring {
        self.monitoring
    }
}

impl fmt::Display for InstanceMonitoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("Enabled", &self.enabled);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_matches_field_assignment() {
        let built = BlockDeviceMapping::builder()
            .device_name("/dev/sdh")
            .ebs(Ebs::builder().volume_size(100).volume_type("gp2").build())
            .build();
        let mut assigned = BlockDeviceMapping::default();
        assigned.device_name = Some("/dev/sdh".to_string());
        let mut ebs = Ebs::default();
        ebs.volume_size = Some(100);
        ebs.volume_type = Some("gp2".to_string());
        assigned.ebs = Some(ebs);
        assert_eq!(built, assigned);
    }

    #[test]
    fn display_nests_ebs() {
        let mapping = BlockDeviceMapping::builder()
            .device_name("/dev/sdh")
            .ebs(Ebs::builder().volume_size(100).build())
            .build();
        assert_eq!(
            mapping.to_string(),
            "{DeviceName: /dev/sdh, Ebs: {VolumeSize: 100}}"
        );
    }

    #[test]
    fn absent_ebs_is_not_serialized() {
        let mapping = BlockDeviceMapping::builder().device_name("/dev/sdh").build();
        let json = serde_json::to_value(&mapping).unwrap();
        assert!(json.get("Ebs").is_none());
    }
}
