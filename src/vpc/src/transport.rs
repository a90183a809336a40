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
use aliyun_sdk_core::error::Error;
use aliyun_sdk_core::request::ApiRequest;
use aliyun_sdk_core::transport::Transport;
use std::sync::Arc;

/// Implements [stub::Vpc] over a raw request transport.
#[derive(Clone, Debug)]
pub(crate) struct Vpc {
    inner: Arc<dyn Transport>,
}

impl Vpc {
    pub(crate) fn new(inner: Arc<dyn Transport>) -> Self {
        Self { inner }
    }

    async fn execute<Req, Resp>(&self, action: &'static str, req: &Req) -> Result<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let request = ApiRequest::from_message(action, crate::API_VERSION, req)?;
        tracing::debug!(action, "sending request");
        let payload = self.inner.execute(request).await?;
        serde_json::from_slice::<Resp>(&payload).map_err(Error::deser)
    }
}

#[async_trait::async_trait]
impl stub::Vpc for Vpc {
    async fn create_vpc(
        &self,
        req: model::CreateVpcRequest,
    ) -> Result<model::CreateVpcResponse> {
        self.execute("CreateVpc", &req).await
    }

    async fn describe_vpc_attribute(
        &self,
        req: model::DescribeVpcAttributeRequest,
    ) -> Result<model::DescribeVpcAttributeResponse> {
        self.execute("DescribeVpcAttribute", &req).await
    }

    async fn delete_vpc(
        &self,
        req: model::DeleteVpcRequest,
    ) -> Result<model::DeleteVpcResponse> {
        self.execute("DeleteVpc", &req).await
    }

    async fn create_vswitch(
        &self,
        req: model::CreateVSwitchRequest,
    ) -> Result<model::CreateVSwitchResponse> {
        self.execute("CreateVSwitch", &req).await
    }

    async fn describe_vswitch_attributes(
        &self,
        req: model::DescribeVSwitchAttributesRequest,
    ) -> Result<model::DescribeVSwitchAttributesResponse> {
        self.execute("DescribeVSwitchAttributes", &req).await
    }

    async fn delete_vswitch(
        &self,
        req: model::DeleteVSwitchRequest,
    ) -> Result<model::DeleteVSwitchResponse> {
        self.execute("DeleteVSwitch", &req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::Vpc as _;
    use aliyun_sdk_core::error::ApiError;

    mockall::mock! {
        #[derive(Debug)]
        Transport {}
        #[async_trait::async_trait]
        impl Transport for Transport {
            async fn execute(&self, req: ApiRequest) -> Result<bytes::Bytes>;
        }
    }

    fn response_body(value: serde_json::Value) -> bytes::Bytes {
        bytes::Bytes::from(value.to_string())
    }

    #[tokio::test]
    async fn create_vpc_builds_the_expected_call() -> Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|req| {
                req.action() == "CreateVpc"
                    && req.version() == crate::API_VERSION
                    && req.str_param("CidrBlock") == Some("172.16.0.0/12")
            })
            .once()
            .returning(|_| {
                Ok(response_body(serde_json::json!({
                    "RequestId": "req-0001",
                    "VpcId": "vpc-123",
                    "VRouterId": "vrt-123",
                    "RouteTableId": "vtb-123"
                })))
            });
        let transport = Vpc::new(Arc::new(mock));
        let response = transport
            .create_vpc(model::CreateVpcRequest::new().set_cidr_block("172.16.0.0/12"))
            .await?;
        assert_eq!(response.vpc_id, "vpc-123");
        assert_eq!(response.route_table_id, "vtb-123");
        Ok(())
    }

    #[tokio::test]
    async fn describe_vswitch_uses_the_wire_name() -> Result<()> {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .withf(|req| {
                req.action() == "DescribeVSwitchAttributes"
                    && req.str_param("VSwitchId") == Some("vsw-123")
            })
            .once()
            .returning(|_| {
                Ok(response_body(serde_json::json!({
                    "RequestId": "req-0002",
                    "VSwitchId": "vsw-123",
                    "Status": "Pending"
                })))
            });
        let transport = Vpc::new(Arc::new(mock));
        let response = transport
            .describe_vswitch_attributes(
                model::DescribeVSwitchAttributesRequest::new().set_vswitch_id("vsw-123"),
            )
            .await?;
        assert_eq!(response.status, "Pending");
        Ok(())
    }

    #[tokio::test]
    async fn service_errors_pass_through() {
        let mut mock = MockTransport::new();
        mock.expect_execute().once().returning(|_| {
            Err(Error::service(
                ApiError::new()
                    .set_code("InvalidVpcId.NotFound")
                    .set_http_status_code(404_u16),
            ))
        });
        let transport = Vpc::new(Arc::new(mock));
        let err = transport
            .describe_vpc_attribute(
                model::DescribeVpcAttributeRequest::new().set_vpc_id("vpc-gone"),
            )
            .await
            .unwrap_err();
        assert!(
            matches!(err.api_error(), Some(e) if e.is_not_found()),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn malformed_payloads_become_deserialization_errors() {
        let mut mock = MockTransport::new();
        mock.expect_execute()
            .once()
            .returning(|_| Ok(bytes::Bytes::from_static(b"<html>oops</html>")));
        let transport = Vpc::new(Arc::new(mock));
        let err = transport
            .delete_vpc(model::DeleteVpcRequest::new().set_vpc_id("vpc-123"))
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }
}
