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

use aliyun_sdk_test_utils::FakeVpcService;
use aliyun_sdk_vpc::client::Vpc;
use vpc_guide_samples::{fault_logging, vpc_quick_start};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // The quick start runs against an in-process rendition of the service,
    // so it works without credentials. To run it against the real API,
    // build the client over a transport that signs and sends requests.
    let client = Vpc::new(FakeVpcService::new());

    let result = vpc_quick_start::run(&client, "cn-hangzhou-d", "172.16.1.0/24").await;
    if let Err(e) = &result {
        match e.downcast_ref::<aliyun_sdk_core::error::Error>() {
            Some(error) => fault_logging::log("vpc_quick_start", error),
            None => tracing::error!("vpc_quick_start: {e}"),
        }
    }
    result
}
