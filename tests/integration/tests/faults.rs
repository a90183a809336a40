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

use aliyun_sdk_core::error::{ApiError, Fault};
use aliyun_sdk_core::wait::PollingOptions;
use aliyun_sdk_test_utils::FakeVpcService;
use integration_tests::{Result, new_fake_client};

#[tokio::test]
async fn missing_vpc_is_a_server_fault() -> Result<()> {
    let (client, _service) = new_fake_client(FakeVpcService::new());

    let err = client
        .create_vswitch()
        .set_zone_id("cn-hangzhou-d")
        .set_vpc_id("vpc-does-not-exist")
        .set_cidr_block("172.16.1.0/24")
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.fault(), Fault::Server);
    assert!(
        matches!(err.api_error(), Some(e) if e.is_not_found()),
        "{err:?}"
    );
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn vpc_with_vswitches_cannot_be_deleted() -> Result<()> {
    let (client, _service) = new_fake_client(FakeVpcService::new().with_settle_after(0));
    let options = PollingOptions::new();

    let vpc = client.create_vpc().send().await?;
    client.wait_for_vpc(&vpc.vpc_id, "Available", options).await?;
    client
        .create_vswitch()
        .set_zone_id("cn-hangzhou-d")
        .set_vpc_id(&vpc.vpc_id)
        .set_cidr_block("172.16.1.0/24")
        .send()
        .await?;

    let err = client
        .delete_vpc()
        .set_vpc_id(&vpc.vpc_id)
        .send()
        .await
        .unwrap_err();
    assert!(
        matches!(err.api_error(), Some(e) if e.code == "DependencyViolation.VSwitch"),
        "{err:?}"
    );
    Ok(())
}

#[tokio::test]
async fn injected_faults_reach_the_caller_classified() -> Result<()> {
    let (client, service) = new_fake_client(FakeVpcService::new());
    service.inject_fault(
        "CreateVpc",
        ApiError::new()
            .set_request_id("req-fault")
            .set_code("QuotaExceeded.Vpc")
            .set_message("VPC quota exceeded.")
            .set_http_status_code(400_u16),
    );

    let err = client.create_vpc().send().await.unwrap_err();
    assert_eq!(err.fault(), Fault::Server);
    let details = err.api_error().expect("service errors carry a document");
    assert_eq!(details.code, "QuotaExceeded.Vpc");
    assert_eq!(details.request_id, "req-fault");

    // The fault was consumed; the next create succeeds.
    let vpc = client.create_vpc().send().await?;
    assert!(vpc.vpc_id.starts_with("vpc-"), "{vpc:?}");
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn wait_propagates_errors_without_retrying() -> Result<()> {
    let (client, service) = new_fake_client(FakeVpcService::new().with_settle_after(0));

    let vpc = client.create_vpc().send().await?;
    service.inject_fault(
        "DescribeVpcAttribute",
        ApiError::new().set_code("UnauthorizedOperation"),
    );

    // The wait loop aborts on the first describe error; a single failure is
    // not retried.
    let err = client
        .wait_for_vpc(&vpc.vpc_id, "Available", PollingOptions::new())
        .await
        .unwrap_err();
    assert_eq!(err.fault(), Fault::Server);
    assert!(
        matches!(err.api_error(), Some(e) if e.code == "UnauthorizedOperation"),
        "{err:?}"
    );
    Ok(())
}
