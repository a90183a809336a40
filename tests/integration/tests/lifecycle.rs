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

use aliyun_sdk_core::wait::PollingOptions;
use aliyun_sdk_test_utils::FakeVpcService;
use integration_tests::{Result, new_fake_client};
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn vpc_and_vswitch_lifecycle() -> Result<()> {
    let (client, service) = new_fake_client(FakeVpcService::new());
    let options = PollingOptions::new();

    let vpc = client
        .create_vpc()
        .set_vpc_name("lifecycle-test")
        .send()
        .await?;
    assert!(vpc.vpc_id.starts_with("vpc-"), "{vpc:?}");
    assert!(!vpc.request_id.is_empty(), "{vpc:?}");
    client.wait_for_vpc(&vpc.vpc_id, "Available", options).await?;

    let attributes = client
        .describe_vpc_attribute()
        .set_vpc_id(&vpc.vpc_id)
        .send()
        .await?;
    assert_eq!(attributes.status, "Available", "{attributes:?}");
    assert_eq!(attributes.vpc_name, "lifecycle-test", "{attributes:?}");

    let vswitch = client
        .create_vswitch()
        .set_zone_id("cn-hangzhou-d")
        .set_vpc_id(&vpc.vpc_id)
        .set_cidr_block("172.16.1.0/24")
        .send()
        .await?;
    assert!(vswitch.vswitch_id.starts_with("vsw-"), "{vswitch:?}");
    client
        .wait_for_vswitch(&vswitch.vswitch_id, "Available", options)
        .await?;

    let attributes = client
        .describe_vswitch_attributes()
        .set_vswitch_id(&vswitch.vswitch_id)
        .send()
        .await?;
    assert_eq!(attributes.vpc_id, vpc.vpc_id, "{attributes:?}");
    assert_eq!(attributes.cidr_block, "172.16.1.0/24", "{attributes:?}");

    client
        .delete_vswitch()
        .set_vswitch_id(&vswitch.vswitch_id)
        .send()
        .await?;
    client
        .wait_for_vswitch(
            &vswitch.vswitch_id,
            "",
            options.with_interval(Duration::from_secs(5)),
        )
        .await?;

    client.delete_vpc().set_vpc_id(&vpc.vpc_id).send().await?;
    client.wait_for_vpc(&vpc.vpc_id, "", options).await?;

    assert!(service.is_empty());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn vpc_settles_through_pending() -> Result<()> {
    let (client, _service) = new_fake_client(FakeVpcService::new().with_settle_after(3));

    let vpc = client.create_vpc().send().await?;
    let first = client.vpc_status(&vpc.vpc_id).await?;
    assert_eq!(first, "Pending");

    client
        .wait_for_vpc(&vpc.vpc_id, "Available", PollingOptions::new())
        .await?;
    let settled = client.vpc_status(&vpc.vpc_id).await?;
    assert_eq!(settled, "Available");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn wait_gives_up_on_a_stuck_resource() -> Result<()> {
    // A resource that needs more describe calls than the timeout allows.
    let (client, _service) = new_fake_client(FakeVpcService::new().with_settle_after(u32::MAX));

    let vpc = client.create_vpc().send().await?;
    let err = client
        .wait_for_vpc(
            &vpc.vpc_id,
            "Available",
            PollingOptions::new()
                .with_timeout(Duration::from_secs(10))
                .with_interval(Duration::from_secs(5)),
        )
        .await
        .unwrap_err();
    assert!(err.is_exhausted(), "{err:?}");
    Ok(())
}
