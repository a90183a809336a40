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

use crate::Result;
use crate::request::ApiRequest;

/// The capability used by service crates to submit API calls.
///
/// A transport owns everything below the request descriptor: endpoint
/// resolution, request signing, the HTTP client, and credential refresh.
/// Service clients receive a transport at construction time instead of
/// reading a process-wide client, so tests and samples can substitute an
/// in-process implementation.
///
/// On success the transport returns the raw response body; the service crate
/// decodes it into a typed response. On failure the transport returns:
///
/// * [Error::service][crate::error::Error::service] when the service
///   answered with an error document,
/// * [Error::http][crate::error::Error::http] when an HTTP error arrived
///   without an error document, or
/// * [Error::io][crate::error::Error::io] when no response arrived at all.
#[async_trait::async_trait]
pub trait Transport: std::fmt::Debug + Send + Sync {
    /// Submits one API call and returns the raw response body.
    async fn execute(&self, req: ApiRequest) -> Result<bytes::Bytes>;
}

// Lets callers share a transport with a client, e.g. to keep a handle on an
// in-process fake while a client owns it.
#[async_trait::async_trait]
impl<T> Transport for std::sync::Arc<T>
where
    T: Transport + ?Sized,
{
    async fn execute(&self, req: ApiRequest) -> Result<bytes::Bytes> {
        (**self).execute(req).await
    }
}
