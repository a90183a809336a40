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

//! Examples showing how to classify request errors for logging.

use aliyun_sdk_core::error::{Error, Fault};

/// Renders an error as one log line, server faults first-class.
///
/// Server faults carry the request id and the error code; support tickets
/// need both. Client faults never reached the service, so there is nothing
/// to quote beyond the error itself.
pub fn describe(e: &Error) -> String {
    match (e.fault(), e.api_error()) {
        (Fault::Server, Some(d)) => format!(
            "server fault: code {} (request id {}): {}",
            d.code, d.request_id, d.message
        ),
        (Fault::Server, None) => format!("server fault: {e}"),
        (Fault::Client, _) => format!("client fault: {e}"),
    }
}

/// Logs an error with its fault classification.
pub fn log(context: &str, e: &Error) {
    tracing::error!("{context}: {}", describe(e));
}
