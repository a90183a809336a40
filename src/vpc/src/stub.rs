// Copyright 2025 Alibaba Cloud
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::model;
use aliyun_sdk_core::Result;

/// Defines the trait used to implement [crate::client::Vpc].
///
/// Application developers may need to implement this trait to mock
/// `client::Vpc`. In other use-cases, application developers only use
/// `client::Vpc` and need not be concerned with this trait or its
/// implementations.
#[async_trait::async_trait]
pub trait Vpc: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Vpc::create_vpc].
    async fn create_vpc(&self, req: model::CreateVpcRequest)
    -> Result<model::CreateVpcResponse>;

    /// Implements [crate::client::Vpc::describe_vpc_attribute].
    async fn describe_vpc_attribute(
        &self,
        req: model::DescribeVpcAttributeRequest,
    ) -> Result<model::DescribeVpcAttributeResponse>;

    /// Implements [crate::client::Vpc::delete_vpc].
    async fn delete_vpc(&self, req: model::DeleteVpcRequest)
    -> Result<model::DeleteVpcResponse>;

    /// Implements [crate::client::Vpc::create_vswitch].
    async fn create_vswitch(
        &self,
        req: model::CreateVSwitchRequest,
    ) -> Result<model::CreateVSwitchResponse>;

    /// Implements [crate::client::Vpc::describe_vswitch_attributes].
    async fn describe_vswitch_attributes(
        &self,
        req: model::DescribeVSwitchAttributesRequest,
    ) -> Result<model::DescribeVSwitchAttributesResponse>;

    /// Implements [crate::client::Vpc::delete_vswitch].
    async fn delete_vswitch(
        &self,
        req: model::DeleteVSwitchRequest,
    ) -> Result<model::DeleteVSwitchResponse>;
}
