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

//! Alibaba Cloud Client Libraries for Rust - Virtual Private Cloud.
//!
//! A Virtual Private Cloud (VPC) is an isolated virtual network; vswitches
//! subdivide its address space into zone-bound subnets. This crate wraps the
//! VPC management API: creating and deleting VPCs and vswitches, reading
//! their attributes, and waiting for the status transitions that follow a
//! create or delete call.
//!
//! The entry point is [client::Vpc]. Clients are built over a
//! [Transport][aliyun_sdk_core::transport::Transport], the capability that
//! owns signing and HTTP delivery.

/// Request builders for each API call.
pub mod builder;

/// The client for the Virtual Private Cloud API.
pub mod client;

/// The request and response messages of the API.
pub mod model;

/// The trait used to implement [client::Vpc], and the mocking seam.
pub mod stub;

mod transport;

/// The API version this crate speaks.
pub(crate) const API_VERSION: &str = "2016-04-28";
