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

//! The VPC quick start: create a VPC and a vswitch, then tear both down.
//!
//! Every create and delete call returns before the resource settles, so the
//! quick start waits for the corresponding status transition after each
//! step. The teardown runs in reverse order: a VPC cannot be deleted while
//! it still contains vswitches.

use aliyun_sdk_core::wait::PollingOptions;
use aliyun_sdk_vpc::client::Vpc;
use std::time::Duration;

const AVAILABLE: &str = "Available";

/// Runs the whole lifecycle in `zone_id`, e.g. `cn-hangzhou-d`.
///
/// `cidr_block` is the address range for the vswitch and must fall inside
/// the VPC's default range (`172.16.0.0/12`).
pub async fn run(client: &Vpc, zone_id: &str, cidr_block: &str) -> anyhow::Result<()> {
    let options = PollingOptions::new();

    let vpc = client
        .create_vpc()
        .set_vpc_name("quick-start")
        .set_description("created by the VPC quick start")
        .send()
        .await?;
    tracing::info!(response = ?vpc, "create_vpc");
    client
        .wait_for_vpc(&vpc.vpc_id, AVAILABLE, options)
        .await?;

    let vswitch = client
        .create_vswitch()
        .set_zone_id(zone_id)
        .set_vpc_id(&vpc.vpc_id)
        .set_cidr_block(cidr_block)
        .send()
        .await?;
    tracing::info!(response = ?vswitch, "create_vswitch");
    client
        .wait_for_vswitch(&vswitch.vswitch_id, AVAILABLE, options)
        .await?;

    let deleted = client
        .delete_vswitch()
        .set_vswitch_id(&vswitch.vswitch_id)
        .send()
        .await?;
    tracing::info!(response = ?deleted, "delete_vswitch");
    // Deletion settles more slowly than creation; poll less often. The
    // empty target status means "wait until the vswitch no longer exists".
    client
        .wait_for_vswitch(
            &vswitch.vswitch_id,
            "",
            options.with_interval(Duration::from_secs(5)),
        )
        .await?;

    let deleted = client.delete_vpc().set_vpc_id(&vpc.vpc_id).send().await?;
    tracing::info!(response = ?deleted, "delete_vpc");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use aliyun_sdk_test_utils::FakeVpcService;

    #[tokio::test(start_paused = true)]
    async fn quick_start_lifecycle() -> anyhow::Result<()> {
        let client = Vpc::new(FakeVpcService::new());
        run(&client, "cn-hangzhou-d", "172.16.1.0/24").await
    }
}
