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

//! Cross-crate tests for the Alibaba Cloud client libraries.
//!
//! The tests drive the VPC client through a full resource lifecycle against
//! the in-process fake service; nothing here talks to production.

use aliyun_sdk_test_utils::FakeVpcService;
use aliyun_sdk_vpc::client::Vpc;
use std::sync::Arc;

pub type Result<T> = anyhow::Result<T>;

/// A client over a shared fake service, plus a handle to inspect the fake.
pub fn new_fake_client(service: FakeVpcService) -> (Vpc, Arc<FakeVpcService>) {
    let service = Arc::new(service);
    (Vpc::new(service.clone()), service)
}
