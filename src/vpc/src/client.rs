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

use crate::builder;
use crate::stub;
use aliyun_sdk_core::Result;
use aliyun_sdk_core::error::{ApiError, Error};
use aliyun_sdk_core::transport::Transport;
use aliyun_sdk_core::wait::{self, PollingOptions};
use std::sync::Arc;

/// Implements a client for the Virtual Private Cloud API.
///
/// # Configuration
///
/// The client does not own credentials or an HTTP stack; it is built over a
/// [Transport], the capability that signs and delivers requests. Pass the
/// transport for the region and account the client should operate on.
///
/// # Pooling and Cloning
///
/// `Vpc` holds a connection pool internally (through its transport), it is
/// advised to create one and then reuse it. Cloning the client is cheap: it
/// copies an `Arc`, not the underlying resources.
#[derive(Clone, Debug)]
pub struct Vpc {
    stub: Arc<dyn stub::Vpc>,
}

impl Vpc {
    /// Creates a client over the given transport.
    pub fn new<T>(transport: T) -> Self
    where
        T: Transport + 'static,
    {
        Self {
            stub: Arc::new(crate::transport::Vpc::new(Arc::new(transport))),
        }
    }

    /// Creates a client from a [stub::Vpc] implementation.
    ///
    /// This is most useful for mocking the client in tests.
    pub fn from_stub<S>(stub: S) -> Self
    where
        S: stub::Vpc + 'static,
    {
        Self {
            stub: Arc::new(stub),
        }
    }

    /// Creates a VPC.
    ///
    /// The call returns as soon as the service accepts the request; the new
    /// VPC then stays in the `Pending` status until the service finishes
    /// provisioning it. Use [wait_for_vpc][Vpc::wait_for_vpc] to block until
    /// it becomes `Available`.
    pub fn create_vpc(&self) -> builder::CreateVpc {
        builder::CreateVpc::new(self.stub.clone())
    }

    /// Reads the attributes of a VPC, including its status.
    pub fn describe_vpc_attribute(&self) -> builder::DescribeVpcAttribute {
        builder::DescribeVpcAttribute::new(self.stub.clone())
    }

    /// Deletes a VPC.
    ///
    /// All vswitches in the VPC must be deleted first.
    pub fn delete_vpc(&self) -> builder::DeleteVpc {
        builder::DeleteVpc::new(self.stub.clone())
    }

    /// Creates a vswitch in an existing VPC.
    ///
    /// As with [create_vpc][Vpc::create_vpc], the new vswitch settles
    /// asynchronously; use [wait_for_vswitch][Vpc::wait_for_vswitch] to
    /// block until it becomes `Available`.
    pub fn create_vswitch(&self) -> builder::CreateVSwitch {
        builder::CreateVSwitch::new(self.stub.clone())
    }

    /// Reads the attributes of a vswitch, including its status.
    pub fn describe_vswitch_attributes(&self) -> builder::DescribeVSwitchAttributes {
        builder::DescribeVSwitchAttributes::new(self.stub.clone())
    }

    /// Deletes a vswitch.
    pub fn delete_vswitch(&self) -> builder::DeleteVSwitch {
        builder::DeleteVSwitch::new(self.stub.clone())
    }

    /// Reads the status of a VPC, reporting a deleted VPC as the empty
    /// status.
    ///
    /// This is the status function used by [wait_for_vpc][Vpc::wait_for_vpc]:
    /// a `*.NotFound` error from the service becomes `Ok("")` so a deletion
    /// wait can treat "gone" as a status value. All other errors propagate.
    pub async fn vpc_status(&self, vpc_id: &str) -> Result<String> {
        let result = self
            .describe_vpc_attribute()
            .set_vpc_id(vpc_id)
            .send()
            .await;
        match result {
            Ok(r) => Ok(r.status),
            Err(e) if e.api_error().is_some_and(ApiError::is_not_found) => Ok(String::new()),
            Err(e) => Err(e),
        }
    }

    /// Reads the status of a vswitch, reporting a deleted vswitch as the
    /// empty status.
    pub async fn vswitch_status(&self, vswitch_id: &str) -> Result<String> {
        let result = self
            .describe_vswitch_attributes()
            .set_vswitch_id(vswitch_id)
            .send()
            .await;
        match result {
            Ok(r) => Ok(r.status),
            Err(e) if e.api_error().is_some_and(ApiError::is_not_found) => Ok(String::new()),
            Err(e) => Err(e),
        }
    }

    /// Blocks until a VPC reaches the `target` status.
    ///
    /// Pass the empty string as `target` to wait until the VPC no longer
    /// exists. The loop re-reads the status once per
    /// [interval][PollingOptions::interval], so expect up to
    /// `timeout / interval` describe calls in the worst case.
    ///
    /// An expired timeout is an error
    /// ([Exhausted][aliyun_sdk_core::error::Error::is_exhausted]): callers
    /// that proceed after a wait must know the resource really reached the
    /// status they asked for.
    pub async fn wait_for_vpc(
        &self,
        vpc_id: &str,
        target: &str,
        options: PollingOptions,
    ) -> Result<()> {
        let matched = wait::until_status(
            async || self.vpc_status(vpc_id).await,
            async |d| tokio::time::sleep(d).await,
            target,
            options,
        )
        .await?;
        if matched {
            return Ok(());
        }
        Err(Error::exhausted(format!(
            "vpc {vpc_id} did not reach status {target:?} within {:?}",
            options.timeout()
        )))
    }

    /// Blocks until a vswitch reaches the `target` status.
    ///
    /// The contract matches [wait_for_vpc][Vpc::wait_for_vpc], including the
    /// empty-string target for deletion waits.
    pub async fn wait_for_vswitch(
        &self,
        vswitch_id: &str,
        target: &str,
        options: PollingOptions,
    ) -> Result<()> {
        let matched = wait::until_status(
            async || self.vswitch_status(vswitch_id).await,
            async |d| tokio::time::sleep(d).await,
            target,
            options,
        )
        .await?;
        if matched {
            return Ok(());
        }
        Err(Error::exhausted(format!(
            "vswitch {vswitch_id} did not reach status {target:?} within {:?}",
            options.timeout()
        )))
    }
}
