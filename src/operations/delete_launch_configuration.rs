use std::fmt;

use serde::{Deserialize, Serialize};

use crate::render::FieldWriter;

/// Parameters for deleting a launch configuration. The configuration must
/// not be attached to any group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLaunchConfigurationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_configuration_name: Option<String>,
}

impl DeleteLaunchConfigurationRequest {
    pub fn builder() -> DeleteLaunchConfigurationRequestBuilder {
        DeleteLaunchConfigurationRequestBuilder::default()
    }
}

#[derive(Clone, Debug, Default)]
pub struct DeleteLaunchConfigurationRequestBuilder {
    request: DeleteLaunchConfigurationRequest,
}

impl DeleteLaunchConfigurationRequestBuilder {
    pub fn launch_configuration_name(mut self, value: impl Into<String>) -> Self {
        self.request.launch_configuration_name = Some(value.into());
        self
    }

    pub fn build(self) -> DeleteLaunchConfigurationRequest {
        self.request
    }
}

impl fmt::Display for DeleteLaunchConfigurationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new();
        w.field("LaunchConfigurationName", &self.launch_configuration_name);
        w.finish(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_request_renders_as_empty_braces() {
        assert_eq!(DeleteLaunchConfigurationRequest::builder().build().to_string(), "{}");
    }
}
