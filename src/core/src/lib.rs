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

//! Alibaba Cloud API helpers.
//!
//! This crate contains the types and functions shared by the Alibaba Cloud
//! client libraries for Rust: the common error type, the request descriptor
//! handed to transports, the transport capability trait, and the status wait
//! loop used to confirm resource lifecycle transitions.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping API calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the client libraries.
pub mod error;

/// The request descriptor submitted to a [Transport][crate::transport::Transport].
pub mod request;

/// Defines the capability trait implemented by request transports.
pub mod transport;

/// A bounded, fixed-interval wait loop for resource status transitions.
pub mod wait;
