//! Request and response parameter bags, one module per API operation.
//! Create, update and delete calls have empty service responses and define
//! no response type.

mod create_auto_scaling_group;
mod create_launch_configuration;
mod delete_auto_scaling_group;
mod delete_launch_configuration;
mod delete_policy;
mod describe_auto_scaling_groups;
mod describe_launch_configurations;
mod describe_policies;
mod put_scaling_policy;
mod update_auto_scaling_group;

pub use create_auto_scaling_group::{
    CreateAutoScalingGroupRequest, CreateAutoScalingGroupRequestBuilder,
};
pub use create_launch_configuration::{
    CreateLaunchConfigurationRequest, CreateLaunchConfigurationRequestBuilder,
};
pub use delete_auto_scaling_group::{
    DeleteAutoScalingGroupRequest, DeleteAutoScalingGroupRequestBuilder,
};
pub use delete_launch_configuration::{
    DeleteLaunchConfigurationRequest, DeleteLaunchConfigurationRequestBuilder,
};
pub use delete_policy::{DeletePolicyRequest, DeletePolicyRequestBuilder};
pub use describe_auto_scaling_groups::{
    DescribeAutoScalingGroupsRequest, DescribeAutoScalingGroupsRequestBuilder,
    DescribeAutoScalingGroupsResponse, DescribeAutoScalingGroupsResponseBuilder,
};
pub use describe_launch_configurations::{
    DescribeLaunchConfigurationsRequest, DescribeLaunchConfigurationsRequestBuilder,
    DescribeLaunchConfigurationsResponse, DescribeLaunchConfigurationsResponseBuilder,
};
pub use describe_policies::{
    DescribePoliciesRequest, DescribePoliciesRequestBuilder, DescribePoliciesResponse,
    DescribePoliciesResponseBuilder,
};
pub use put_scaling_policy::{
    PutScalingPolicyRequest, PutScalingPolicyRequestBuilder, PutScalingPolicyResponse,
    PutScalingPolicyResponseBuilder,
};
pub use update_auto_scaling_group::{
    UpdateAutoScalingGroupRequest, UpdateAutoScalingGroupRequestBuilder,
};
