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

//! The messages exchanged with the Virtual Private Cloud API.
//!
//! Parameter and field names follow the wire protocol (`VpcId`,
//! `VSwitchId`, ...). Statuses are provider-defined strings and are not
//! enumerated here; the values seen in practice include `Pending` and
//! `Available`.

/// The request message for creating a VPC.
///
/// All parameters are optional; the service picks the default address range
/// (`172.16.0.0/12`) when no `CidrBlock` is given.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateVpcRequest {
    pub cidr_block: Option<String>,
    pub vpc_name: Option<String>,
    pub description: Option<String>,
    pub client_token: Option<String>,
}

impl CreateVpcRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cidr_block][CreateVpcRequest::cidr_block].
    pub fn set_cidr_block<V: Into<String>>(mut self, v: V) -> Self {
        self.cidr_block = Some(v.into());
        self
    }

    /// Sets the value of [vpc_name][CreateVpcRequest::vpc_name].
    pub fn set_vpc_name<V: Into<String>>(mut self, v: V) -> Self {
        self.vpc_name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateVpcRequest::description].
    pub fn set_description<V: Into<String>>(mut self, v: V) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [client_token][CreateVpcRequest::client_token].
    pub fn set_client_token<V: Into<String>>(mut self, v: V) -> Self {
        self.client_token = Some(v.into());
        self
    }
}

/// The response message for creating a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateVpcResponse {
    pub request_id: String,

    /// The id of the new VPC; the key for status queries and deletion.
    pub vpc_id: String,

    /// The router the service creates alongside the VPC.
    pub v_router_id: String,

    /// The route table attached to that router.
    pub route_table_id: String,
}

impl CreateVpcResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [request_id][CreateVpcResponse::request_id].
    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = v.into();
        self
    }

    /// Sets the value of [vpc_id][CreateVpcResponse::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vpc_id = v.into();
        self
    }

    /// Sets the value of [v_router_id][CreateVpcResponse::v_router_id].
    pub fn set_v_router_id<V: Into<String>>(mut self, v: V) -> Self {
        self.v_router_id = v.into();
        self
    }

    /// Sets the value of [route_table_id][CreateVpcResponse::route_table_id].
    pub fn set_route_table_id<V: Into<String>>(mut self, v: V) -> Self {
        self.route_table_id = v.into();
        self
    }
}

/// The request message for reading the attributes of a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeVpcAttributeRequest {
    pub vpc_id: String,
}

impl DescribeVpcAttributeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [vpc_id][DescribeVpcAttributeRequest::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vpc_id = v.into();
        self
    }
}

/// The response message for reading the attributes of a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeVpcAttributeResponse {
    pub request_id: String,
    pub vpc_id: String,
    pub region_id: String,

    /// The lifecycle status of the VPC, e.g. `Pending` or `Available`.
    pub status: String,

    pub cidr_block: String,
    pub vpc_name: String,
    pub description: String,
    pub creation_time: String,
    pub is_default: bool,
}

impl DescribeVpcAttributeResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [request_id][DescribeVpcAttributeResponse::request_id].
    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = v.into();
        self
    }

    /// Sets the value of [vpc_id][DescribeVpcAttributeResponse::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vpc_id = v.into();
        self
    }

    /// Sets the value of [region_id][DescribeVpcAttributeResponse::region_id].
    pub fn set_region_id<V: Into<String>>(mut self, v: V) -> Self {
        self.region_id = v.into();
        self
    }

    /// Sets the value of [status][DescribeVpcAttributeResponse::status].
    pub fn set_status<V: Into<String>>(mut self, v: V) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [cidr_block][DescribeVpcAttributeResponse::cidr_block].
    pub fn set_cidr_block<V: Into<String>>(mut self, v: V) -> Self {
        self.cidr_block = v.into();
        self
    }

    /// Sets the value of [vpc_name][DescribeVpcAttributeResponse::vpc_name].
    pub fn set_vpc_name<V: Into<String>>(mut self, v: V) -> Self {
        self.vpc_name = v.into();
        self
    }

    /// Sets the value of [description][DescribeVpcAttributeResponse::description].
    pub fn set_description<V: Into<String>>(mut self, v: V) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [creation_time][DescribeVpcAttributeResponse::creation_time].
    pub fn set_creation_time<V: Into<String>>(mut self, v: V) -> Self {
        self.creation_time = v.into();
        self
    }

    /// Sets the value of [is_default][DescribeVpcAttributeResponse::is_default].
    pub fn set_is_default(mut self, v: bool) -> Self {
        self.is_default = v;
        self
    }
}

/// The request message for deleting a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteVpcRequest {
    pub vpc_id: String,
}

impl DeleteVpcRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [vpc_id][DeleteVpcRequest::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vpc_id = v.into();
        self
    }
}

/// The response message for deleting a VPC.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteVpcResponse {
    pub request_id: String,
}

impl DeleteVpcResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [request_id][DeleteVpcResponse::request_id].
    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = v.into();
        self
    }
}

/// The request message for creating a vswitch.
///
/// `ZoneId`, `VpcId`, and `CidrBlock` are required; the vswitch address
/// range must fall inside its VPC's range.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateVSwitchRequest {
    pub zone_id: String,
    pub vpc_id: String,
    pub cidr_block: String,
    #[serde(rename = "VSwitchName")]
    pub vswitch_name: Option<String>,
    pub description: Option<String>,
}

impl CreateVSwitchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [zone_id][CreateVSwitchRequest::zone_id].
    pub fn set_zone_id<V: Into<String>>(mut self, v: V) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [vpc_id][CreateVSwitchRequest::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vpc_id = v.into();
        self
    }

    /// Sets the value of [cidr_block][CreateVSwitchRequest::cidr_block].
    pub fn set_cidr_block<V: Into<String>>(mut self, v: V) -> Self {
        self.cidr_block = v.into();
        self
    }

    /// Sets the value of [vswitch_name][CreateVSwitchRequest::vswitch_name].
    pub fn set_vswitch_name<V: Into<String>>(mut self, v: V) -> Self {
        self.vswitch_name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateVSwitchRequest::description].
    pub fn set_description<V: Into<String>>(mut self, v: V) -> Self {
        self.description = Some(v.into());
        self
    }
}

/// The response message for creating a vswitch.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct CreateVSwitchResponse {
    pub request_id: String,

    /// The id of the new vswitch.
    #[serde(rename = "VSwitchId")]
    pub vswitch_id: String,
}

impl CreateVSwitchResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [request_id][CreateVSwitchResponse::request_id].
    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = v.into();
        self
    }

    /// Sets the value of [vswitch_id][CreateVSwitchResponse::vswitch_id].
    pub fn set_vswitch_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vswitch_id = v.into();
        self
    }
}

/// The request message for reading the attributes of a vswitch.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeVSwitchAttributesRequest {
    #[serde(rename = "VSwitchId")]
    pub vswitch_id: String,
}

impl DescribeVSwitchAttributesRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [vswitch_id][DescribeVSwitchAttributesRequest::vswitch_id].
    pub fn set_vswitch_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vswitch_id = v.into();
        self
    }
}

/// The response message for reading the attributes of a vswitch.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DescribeVSwitchAttributesResponse {
    pub request_id: String,

    #[serde(rename = "VSwitchId")]
    pub vswitch_id: String,

    pub vpc_id: String,
    pub zone_id: String,

    /// The lifecycle status of the vswitch, e.g. `Pending` or `Available`.
    pub status: String,

    pub cidr_block: String,

    #[serde(rename = "VSwitchName")]
    pub vswitch_name: String,

    pub description: String,
    pub creation_time: String,
    pub available_ip_address_count: i64,
}

impl DescribeVSwitchAttributesResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [request_id][DescribeVSwitchAttributesResponse::request_id].
    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = v.into();
        self
    }

    /// Sets the value of [vswitch_id][DescribeVSwitchAttributesResponse::vswitch_id].
    pub fn set_vswitch_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vswitch_id = v.into();
        self
    }

    /// Sets the value of [vpc_id][DescribeVSwitchAttributesResponse::vpc_id].
    pub fn set_vpc_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vpc_id = v.into();
        self
    }

    /// Sets the value of [zone_id][DescribeVSwitchAttributesResponse::zone_id].
    pub fn set_zone_id<V: Into<String>>(mut self, v: V) -> Self {
        self.zone_id = v.into();
        self
    }

    /// Sets the value of [status][DescribeVSwitchAttributesResponse::status].
    pub fn set_status<V: Into<String>>(mut self, v: V) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [cidr_block][DescribeVSwitchAttributesResponse::cidr_block].
    pub fn set_cidr_block<V: Into<String>>(mut self, v: V) -> Self {
        self.cidr_block = v.into();
        self
    }

    /// Sets the value of [vswitch_name][DescribeVSwitchAttributesResponse::vswitch_name].
    pub fn set_vswitch_name<V: Into<String>>(mut self, v: V) -> Self {
        self.vswitch_name = v.into();
        self
    }

    /// Sets the value of [description][DescribeVSwitchAttributesResponse::description].
    pub fn set_description<V: Into<String>>(mut self, v: V) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [creation_time][DescribeVSwitchAttributesResponse::creation_time].
    pub fn set_creation_time<V: Into<String>>(mut self, v: V) -> Self {
        self.creation_time = v.into();
        self
    }

    /// Sets the value of [available_ip_address_count][DescribeVSwitchAttributesResponse::available_ip_address_count].
    pub fn set_available_ip_address_count(mut self, v: i64) -> Self {
        self.available_ip_address_count = v;
        self
    }
}

/// The request message for deleting a vswitch.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteVSwitchRequest {
    #[serde(rename = "VSwitchId")]
    pub vswitch_id: String,
}

impl DeleteVSwitchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [vswitch_id][DeleteVSwitchRequest::vswitch_id].
    pub fn set_vswitch_id<V: Into<String>>(mut self, v: V) -> Self {
        self.vswitch_id = v.into();
        self
    }
}

/// The response message for deleting a vswitch.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct DeleteVSwitchResponse {
    pub request_id: String,
}

impl DeleteVSwitchResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [request_id][DeleteVSwitchResponse::request_id].
    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = v.into();
        self
    }
}
