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

//! Errors and error details returned by the Alibaba Cloud client libraries.
//!
//! The client libraries distinguish between errors reported by the service
//! (an error document with a request id and an error code) and errors
//! generated locally, before or after the request travels over the wire. The
//! [Error] type represents both; [Fault] collapses them into the
//! server-fault vs. client-fault split that applications typically branch on
//! when deciding what to log or whether a human needs to look at the
//! problem.

mod core_error;
mod service_error;
pub use core_error::*;
pub use service_error::*;
