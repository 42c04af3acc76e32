use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;
use crate::types::LaunchConfiguration;

/// Parameters for listing launch configurations, paged like the group
/// describe operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchConfigurationsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
}

impl DescribeLaunchConfigurationsRequest {
    pub fn builder() -> DescribeLaunchConfigurationsRequestBuilder {
        DescribeLaunchConfigurationsRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DescribeLaunchConfigurationsRequestBuilder {
    request: DescribeLaunchConfigurationsRequest,
}

impl DescribeLaunchConfigurationsRequestBuilder {
    pub fn launch_configuration_names(mut self, value: impl Into<String>) -> Self {
        self.request
            .launch_configuration_names
            .get_or_insert_with(Vec::new)
            .push(value.into());
        self
    }

    pub fn set_launch_configuration_names(mut self, value: Option<Vec<String>>) -> Self {
        self.request.launch_configuration_names = value;
        self
    }

    pub fn next_token(mut self, value: impl Into<String>) -> Self {
        self.request.next_token = Some(value.into());
        self
    }

    pub fn max_records(mut self, value: i32) -> Self {
        self.request.max_records = Some(value);
        self
    }

    pub fn build(self) -> DescribeLaunchConfigurationsRequest {
        self.request
    }
}

impl fmt::Display for DescribeLaunchConfigurationsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.list("LaunchConfigurationNames", &self.launch_configuration_names);
        w.field("NextToken", &self.next_token);
        w.field("MaxRecords", &self.max_records);
        w.finish(f)
    }
}

/// One page of launch configuration snapshots.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLaunchConfigurationsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configurations: Option<Vec<LaunchConfiguration>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

impl DescribeLaunchConfigurationsResponse {
    pub fn builder() -> DescribeLaunchConfigurationsResponseBuilder {
        DescribeLaunchConfigurationsResponseBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DescribeLaunchConfigurationsResponseBuilder {
    response: DescribeLaunchConfigurationsResponse,
}

impl DescribeLaunchConfigurationsResponseBuilder {
    pub fn launch_configurations(mut self, value: LaunchConfiguration) -> Self {
        self.response
            .launch_configurations
            .get_or_insert_with(Vec::new)
            .push(value);
        self
    }

    pub fn set_launch_configurations(mut self, value: Option<Vec<LaunchConfiguration>>) -> Self {
        self.response.launch_configurations = value;
        self
    }

    pub fn next_token(mut self, value: impl Into<String>) -> Self {
        self.response.next_token = Some(value.into());
        self
    }

    pub fn build(self) -> DescribeLaunchConfigurationsResponse {
        self.response
    }
}

impl fmt::Display for DescribeLaunchConfigurationsResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.list("LaunchConfigurations", &self.launch_configurations);
        w.field("NextToken", &self.next_token);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_deserializes_from_wire_payload() {
        let payload = r#"{
            "LaunchConfigurations": [
                {"LaunchConfigurationName": "web-lc", "ImageId": "ami-12345678"}
            ]
        }"#;
        let response: DescribeLaunchConfigurationsResponse =
            serde_json::from_str(payload).unwrap();
        let configs = response.launch_configurations.unwrap();
        assert_eq!(
            configs[0].launch_configuration_name.as_deref(),
            Some("web-lc")
        );
        assert!(response.next_token.is_none());
    }

    #[test]
    fn absent_next_token_means_last_page() {
        let response = DescribeLaunchConfigurationsResponse::builder().build();
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("NextToken").is_none());
    }
}
