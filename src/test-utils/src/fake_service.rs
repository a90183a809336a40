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

use aliyun_sdk_core::Result;
use aliyun_sdk_core::error::{ApiError, Error};
use aliyun_sdk_core::request::ApiRequest;
use aliyun_sdk_core::transport::Transport;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

const API_VERSION: &str = "2016-04-28";
const REGION_ID: &str = "cn-hangzhou";

/// An in-memory rendition of the Virtual Private Cloud service.
///
/// The fake implements the [Transport] capability, so any client built over
/// a transport can run against it. It reproduces the part of the service
/// behavior the client libraries depend on:
///
/// * new resources answer `Pending` for a few describe calls before
///   settling into `Available`;
/// * deleted resources answer `Deleting` for a few describe calls, then
///   disappear and answer with a `*.NotFound` error document;
/// * a VPC with live vswitches refuses deletion;
/// * specific calls can be made to fail with an injected error document.
///
/// The number of transitional describe calls is configurable through
/// [with_settle_after][FakeVpcService::with_settle_after].
#[derive(Debug)]
pub struct FakeVpcService {
    settle_after: u32,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    serial: u64,
    vpcs: HashMap<String, VpcEntry>,
    vswitches: HashMap<String, VSwitchEntry>,
    faults: HashMap<String, VecDeque<ApiError>>,
}

#[derive(Debug)]
struct VpcEntry {
    cidr_block: String,
    vpc_name: String,
    description: String,
    v_router_id: String,
    route_table_id: String,
    lifecycle: Lifecycle,
}

#[derive(Debug)]
struct VSwitchEntry {
    vpc_id: String,
    zone_id: String,
    cidr_block: String,
    vswitch_name: String,
    description: String,
    lifecycle: Lifecycle,
}

#[derive(Debug, Default)]
struct Lifecycle {
    deleting: bool,
    describes: u32,
}

impl Default for FakeVpcService {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeVpcService {
    pub fn new() -> Self {
        Self {
            settle_after: 2,
            state: Mutex::new(State::default()),
        }
    }

    /// Changes how many describe calls a transition stays in flight.
    ///
    /// With `settle_after == 0` resources settle immediately, which makes
    /// wait loops succeed on their first read.
    pub fn with_settle_after(mut self, v: u32) -> Self {
        self.settle_after = v;
        self
    }

    /// Makes the next `action` call fail with the given error document.
    ///
    /// Injected faults are consumed in order, one per call, before the fake
    /// looks at the request.
    pub fn inject_fault(&self, action: &str, fault: ApiError) {
        let mut state = self.lock();
        state
            .faults
            .entry(action.to_string())
            .or_default()
            .push_back(fault);
    }

    /// True when no VPC or vswitch remains, deleted or otherwise.
    pub fn is_empty(&self) -> bool {
        let state = self.lock();
        state.vpcs.is_empty() && state.vswitches.is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("fake service state lock is poisoned")
    }
}

impl State {
    fn next_serial(&mut self) -> u64 {
        self.serial += 1;
        self.serial
    }

    fn request_id(&mut self) -> String {
        format!("req-{:04}", self.next_serial())
    }
}

fn service_error(code: &str, message: &str, http_status_code: u16) -> Error {
    Error::service(
        ApiError::new()
            .set_request_id("req-fake")
            .set_host_id("vpc.aliyuncs.com")
            .set_code(code)
            .set_message(message)
            .set_http_status_code(http_status_code),
    )
}

fn missing_parameter(name: &str) -> Error {
    service_error(
        "MissingParameter",
        &format!("The parameter {name} is mandatory for this action."),
        400,
    )
}

fn body(value: serde_json::Value) -> bytes::Bytes {
    bytes::Bytes::from(value.to_string())
}

#[async_trait::async_trait]
impl Transport for FakeVpcService {
    async fn execute(&self, req: ApiRequest) -> Result<bytes::Bytes> {
        let mut state = self.lock();
        if let Some(fault) = state
            .faults
            .get_mut(req.action())
            .and_then(VecDeque::pop_front)
        {
            return Err(Error::service(fault));
        }
        if req.version() != API_VERSION {
            return Err(service_error(
                "NoSuchVersion",
                &format!("The version {} is not supported.", req.version()),
                400,
            ));
        }
        match req.action() {
            "CreateVpc" => self.create_vpc(&mut state, &req),
            "DescribeVpcAttribute" => self.describe_vpc(&mut state, &req),
            "DeleteVpc" => self.delete_vpc(&mut state, &req),
            "CreateVSwitch" => self.create_vswitch(&mut state, &req),
            "DescribeVSwitchAttributes" => self.describe_vswitch(&mut state, &req),
            "DeleteVSwitch" => self.delete_vswitch(&mut state, &req),
            action => Err(service_error(
                "UnsupportedOperation",
                &format!("The action {action} is not supported."),
                400,
            )),
        }
    }
}

impl FakeVpcService {
    fn create_vpc(&self, state: &mut State, req: &ApiRequest) -> Result<bytes::Bytes> {
        let serial = state.next_serial();
        let vpc_id = format!("vpc-fake-{serial:04}");
        let entry = VpcEntry {
            cidr_block: req
                .str_param("CidrBlock")
                .unwrap_or("172.16.0.0/12")
                .to_string(),
            vpc_name: req.str_param("VpcName").unwrap_or_default().to_string(),
            description: req.str_param("Description").unwrap_or_default().to_string(),
            v_router_id: format!("vrt-fake-{serial:04}"),
            route_table_id: format!("vtb-fake-{serial:04}"),
            lifecycle: Lifecycle::default(),
        };
        let response = serde_json::json!({
            "RequestId": state.request_id(),
            "VpcId": vpc_id.clone(),
            "VRouterId": entry.v_router_id.clone(),
            "RouteTableId": entry.route_table_id.clone(),
        });
        state.vpcs.insert(vpc_id, entry);
        Ok(body(response))
    }

    fn describe_vpc(&self, state: &mut State, req: &ApiRequest) -> Result<bytes::Bytes> {
        let vpc_id = req
            .str_param("VpcId")
            .ok_or_else(|| missing_parameter("VpcId"))?
            .to_string();
        let request_id = state.request_id();
        let settle_after = self.settle_after;
        let Some(entry) = state.vpcs.get_mut(&vpc_id) else {
            return Err(vpc_not_found(&vpc_id));
        };
        let Some(status) = entry.lifecycle.observe(settle_after) else {
            state.vpcs.remove(&vpc_id);
            return Err(vpc_not_found(&vpc_id));
        };
        Ok(body(serde_json::json!({
            "RequestId": request_id,
            "VpcId": vpc_id,
            "RegionId": REGION_ID,
            "Status": status,
            "CidrBlock": entry.cidr_block.clone(),
            "VpcName": entry.vpc_name.clone(),
            "Description": entry.description.clone(),
            "CreationTime": "2025-06-01T08:00:00Z",
            "IsDefault": false,
        })))
    }

    fn delete_vpc(&self, state: &mut State, req: &ApiRequest) -> Result<bytes::Bytes> {
        let vpc_id = req
            .str_param("VpcId")
            .ok_or_else(|| missing_parameter("VpcId"))?
            .to_string();
        if !state.vpcs.contains_key(&vpc_id) {
            return Err(vpc_not_found(&vpc_id));
        }
        if state.vswitches.values().any(|v| v.vpc_id == vpc_id) {
            return Err(service_error(
                "DependencyViolation.VSwitch",
                "The VPC still contains vswitches.",
                400,
            ));
        }
        let request_id = state.request_id();
        let entry = state.vpcs.get_mut(&vpc_id).expect("checked above");
        entry.lifecycle.start_deletion();
        Ok(body(serde_json::json!({"RequestId": request_id})))
    }

    fn create_vswitch(&self, state: &mut State, req: &ApiRequest) -> Result<bytes::Bytes> {
        let zone_id = req
            .str_param("ZoneId")
            .ok_or_else(|| missing_parameter("ZoneId"))?
            .to_string();
        let vpc_id = req
            .str_param("VpcId")
            .ok_or_else(|| missing_parameter("VpcId"))?
            .to_string();
        let cidr_block = req
            .str_param("CidrBlock")
            .ok_or_else(|| missing_parameter("CidrBlock"))?
            .to_string();
        match state.vpcs.get(&vpc_id) {
            None => return Err(vpc_not_found(&vpc_id)),
            Some(entry) if entry.lifecycle.deleting => return Err(vpc_not_found(&vpc_id)),
            Some(_) => {}
        }
        let serial = state.next_serial();
        let vswitch_id = format!("vsw-fake-{serial:04}");
        let entry = VSwitchEntry {
            vpc_id,
            zone_id,
            cidr_block,
            vswitch_name: req
                .str_param("VSwitchName")
                .unwrap_or_default()
                .to_string(),
            description: req.str_param("Description").unwrap_or_default().to_string(),
            lifecycle: Lifecycle::default(),
        };
        let response = serde_json::json!({
            "RequestId": state.request_id(),
            "VSwitchId": vswitch_id.clone(),
        });
        state.vswitches.insert(vswitch_id, entry);
        Ok(body(response))
    }

    fn describe_vswitch(&self, state: &mut State, req: &ApiRequest) -> Result<bytes::Bytes> {
        let vswitch_id = req
            .str_param("VSwitchId")
            .ok_or_else(|| missing_parameter("VSwitchId"))?
            .to_string();
        let request_id = state.request_id();
        let settle_after = self.settle_after;
        let Some(entry) = state.vswitches.get_mut(&vswitch_id) else {
            return Err(vswitch_not_found(&vswitch_id));
        };
        let Some(status) = entry.lifecycle.observe(settle_after) else {
            state.vswitches.remove(&vswitch_id);
            return Err(vswitch_not_found(&vswitch_id));
        };
        Ok(body(serde_json::json!({
            "RequestId": request_id,
            "VSwitchId": vswitch_id,
            "VpcId": entry.vpc_id.clone(),
            "ZoneId": entry.zone_id.clone(),
            "Status": status,
            "CidrBlock": entry.cidr_block.clone(),
            "VSwitchName": entry.vswitch_name.clone(),
            "Description": entry.description.clone(),
            "CreationTime": "2025-06-01T08:00:00Z",
            "AvailableIpAddressCount": 252,
        })))
    }

    fn delete_vswitch(&self, state: &mut State, req: &ApiRequest) -> Result<bytes::Bytes> {
        let vswitch_id = req
            .str_param("VSwitchId")
            .ok_or_else(|| missing_parameter("VSwitchId"))?
            .to_string();
        let request_id = state.request_id();
        let Some(entry) = state.vswitches.get_mut(&vswitch_id) else {
            return Err(vswitch_not_found(&vswitch_id));
        };
        entry.lifecycle.start_deletion();
        Ok(body(serde_json::json!({"RequestId": request_id})))
    }
}

impl Lifecycle {
    /// The status for one describe call, or `None` once a deleted resource
    /// has settled and should disappear.
    fn observe(&mut self, settle_after: u32) -> Option<&'static str> {
        let n = self.describes;
        self.describes += 1;
        match (self.deleting, n < settle_after) {
            (false, true) => Some("Pending"),
            (false, false) => Some("Available"),
            (true, true) => Some("Deleting"),
            (true, false) => None,
        }
    }

    fn start_deletion(&mut self) {
        self.deleting = true;
        self.describes = 0;
    }
}

fn vpc_not_found(vpc_id: &str) -> Error {
    service_error(
        "InvalidVpcId.NotFound",
        &format!("Specified value of VpcId {vpc_id} is not found in our record."),
        404,
    )
}

fn vswitch_not_found(vswitch_id: &str) -> Error {
    service_error(
        "InvalidVSwitchId.NotFound",
        &format!("Specified value of VSwitchId {vswitch_id} is not found in our record."),
        404,
    )
}
