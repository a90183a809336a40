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
use crate::stub;
use aliyun_sdk_core::Result;
use std::sync::Arc;

/// The request builder for [Vpc::create_vpc][crate::client::Vpc::create_vpc] calls.
#[derive(Clone, Debug)]
pub struct CreateVpc {
    stub: Arc<dyn stub::Vpc>,
    request: model::CreateVpcRequest,
}

impl CreateVpc {
    pub(crate) fn new(stub: Arc<dyn stub::Vpc>) -> Self {
        Self {
            stub,
            request: model::CreateVpcRequest::new(),
        }
    }

    /// Sets the value of [cidr_block][model::CreateVpcRequest::cidr_block].
    pub fn set_cidr_block<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_cidr_block(v);
        self
    }

    /// Sets the value of [vpc_name][model::CreateVpcRequest::vpc_name].
    pub fn set_vpc_name<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_vpc_name(v);
        self
    }

    /// Sets the value of [description][model::CreateVpcRequest::description].
    pub fn set_description<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_description(v);
        self
    }

    /// Sets the value of [client_token][model::CreateVpcRequest::client_token].
    pub fn set_client_token<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_client_token(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::CreateVpcResponse> {
        self.stub.create_vpc(self.request).await
    }
}

/// The request builder for [Vpc::describe_vpc_attribute][crate::client::Vpc::describe_vpc_attribute] calls.
#[derive(Clone, Debug)]
pub struct DescribeVpcAttribute {
    stub: Arc<dyn stub::Vpc>,
    request: model::DescribeVpcAttributeRequest,
}

impl DescribeVpcAttribute {
    pub(crate) fn new(stub: Arc<dyn stub::Vpc>) -> Self {
        Self {
            stub,
            request: model::DescribeVpcAttributeRequest::new(),
        }
    }

    /// Sets the value of [vpc_id][model::DescribeVpcAttributeRequest::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_vpc_id(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::DescribeVpcAttributeResponse> {
        self.stub.describe_vpc_attribute(self.request).await
    }
}

/// The request builder for [Vpc::delete_vpc][crate::client::Vpc::delete_vpc] calls.
#[derive(Clone, Debug)]
pub struct DeleteVpc {
    stub: Arc<dyn stub::Vpc>,
    request: model::DeleteVpcRequest,
}

impl DeleteVpc {
    pub(crate) fn new(stub: Arc<dyn stub::Vpc>) -> Self {
        Self {
            stub,
            request: model::DeleteVpcRequest::new(),
        }
    }

    /// Sets the value of [vpc_id][model::DeleteVpcRequest::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_vpc_id(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::DeleteVpcResponse> {
        self.stub.delete_vpc(self.request).await
    }
}

/// The request builder for [Vpc::create_vswitch][crate::client::Vpc::create_vswitch] calls.
#[derive(Clone, Debug)]
pub struct CreateVSwitch {
    stub: Arc<dyn stub::Vpc>,
    request: model::CreateVSwitchRequest,
}

impl CreateVSwitch {
    pub(crate) fn new(stub: Arc<dyn stub::Vpc>) -> Self {
        Self {
            stub,
            request: model::CreateVSwitchRequest::new(),
        }
    }

    /// Sets the value of [zone_id][model::CreateVSwitchRequest::zone_id].
    pub fn set_zone_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_zone_id(v);
        self
    }

    /// Sets the value of [vpc_id][model::CreateVSwitchRequest::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_vpc_id(v);
        self
    }

    /// Sets the value of [cidr_block][model::CreateVSwitchRequest::cidr_block].
    pub fn set_cidr_block<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_cidr_block(v);
        self
    }

    /// Sets the value of [vswitch_name][model::CreateVSwitchRequest::vswitch_name].
    pub fn set_vswitch_name<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_vswitch_name(v);
        self
    }

    /// Sets the value of [description][model::CreateVSwitchRequest::description].
    pub fn set_description<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_description(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::CreateVSwitchResponse> {
        self.stub.create_vswitch(self.request).await
    }
}

/// The request builder for [Vpc::describe_vswitch_attributes][crate::client::Vpc::describe_vswitch_attributes] calls.
#[derive(Clone, Debug)]
pub struct DescribeVSwitchAttributes {
    stub: Arc<dyn stub::Vpc>,
    request: model::DescribeVSwitchAttributesRequest,
}

impl DescribeVSwitchAttributes {
    pub(crate) fn new(stub: Arc<dyn stub::Vpc>) -> Self {
        Self {
            stub,
            request: model::DescribeVSwitchAttributesRequest::new(),
        }
    }

    /// Sets the value of [vswitch_id][model::DescribeVSwitchAttributesRequest::vswitch_id].
    pub fn set_vswitch_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_vswitch_id(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::DescribeVSwitchAttributesResponse> {
        self.stub.describe_vswitch_attributes(self.request).await
    }
}

/// The request builder for [Vpc::delete_vswitch][crate::client::Vpc::delete_vswitch] calls.
#[derive(Clone, Debug)]
pub struct DeleteVSwitch {
    stub: Arc<dyn stub::Vpc>,
    request: model::DeleteVSwitchRequest,
}

impl DeleteVSwitch {
    pub(crate) fn new(stub: Arc<dyn stub::Vpc>) -> Self {
        Self {
            stub,
            request: model::DeleteVSwitchRequest::new(),
        }
    }

    /// Sets the value of [vswitch_id][model::DeleteVSwitchRequest::vswitch_id].
    pub fn set_vswitch_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request = self.request.set_vswitch_id(v);
        self
    }

    /// Sends the request.
    pub async fn send(self) -> Result<model::DeleteVSwitchResponse> {
        self.stub.delete_vswitch(self.request).await
    }
}
