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

/// The error document returned by Alibaba Cloud services.
///
/// When a request reaches the service and fails, the response body is a JSON
/// document with a request id, an error code, and a human-readable message.
/// The transport decodes that document into this type and wraps it in
/// [Error::service][crate::error::Error::service].
///
/// # Example
/// ```
/// use aliyun_sdk_core::error::ApiError;
/// let e = ApiError::new()
///     .set_code("InvalidVpcId.NotFound")
///     .set_message("The specified VPC does not exist.")
///     .set_http_status_code(404_u16);
/// assert!(e.is_not_found());
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct ApiError {
    /// The unique id assigned to the failed request.
    pub request_id: String,

    /// The endpoint that served the failed request.
    pub host_id: String,

    /// The provider-defined error code, e.g. `InvalidVSwitchId.NotFound`.
    pub code: String,

    /// A human-readable description of the problem.
    pub message: String,

    /// The HTTP status code of the response, when the transport captured one.
    #[serde(skip)]
    pub http_status_code: Option<u16>,
}

impl ApiError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [request_id][ApiError::request_id].
    pub fn set_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_id = v.into();
        self
    }

    /// Sets the value of [host_id][ApiError::host_id].
    pub fn set_host_id<V: Into<String>>(mut self, v: V) -> Self {
        self.host_id = v.into();
        self
    }

    /// Sets the value of [code][ApiError::code].
    pub fn set_code<V: Into<String>>(mut self, v: V) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ApiError::message].
    pub fn set_message<V: Into<String>>(mut self, v: V) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [http_status_code][ApiError::http_status_code].
    pub fn set_http_status_code<V: Into<u16>>(mut self, v: V) -> Self {
        self.http_status_code = Some(v.into());
        self
    }

    /// If true, the error reports that the target resource does not exist.
    ///
    /// The VPC service uses per-resource codes (`InvalidVpcId.NotFound`,
    /// `InvalidVSwitchId.NotFound`, ...) rather than a single code, so this
    /// matches on the shared suffix. Deletion confirmation relies on this
    /// predicate to translate "the resource is gone" into an empty status.
    pub fn is_not_found(&self) -> bool {
        self.code.ends_with(".NotFound")
            || self.http_status_code == Some(http::StatusCode::NOT_FOUND.as_u16())
    }
}
