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
use crate::error::Error;

/// A single API call, ready for submission to a transport.
///
/// Alibaba Cloud APIs are RPC-style: every call names an action
/// (`CreateVpc`), an API version (`2016-04-28`), and a flat set of named
/// parameters. Service crates build this descriptor from their typed request
/// messages; transports turn it into a signed HTTP request, which is outside
/// the scope of these crates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiRequest {
    action: String,
    version: String,
    params: serde_json::Map<String, serde_json::Value>,
}

impl ApiRequest {
    /// Creates a descriptor with no parameters.
    pub fn new<A, V>(action: A, version: V) -> Self
    where
        A: Into<String>,
        V: Into<String>,
    {
        Self {
            action: action.into(),
            version: version.into(),
            params: serde_json::Map::new(),
        }
    }

    /// Creates a descriptor with the parameters taken from a request message.
    ///
    /// The message must serialize to a JSON object; its top-level members
    /// become the call parameters. Fields the message skips (unset optional
    /// values) produce no parameter at all, matching the wire protocol where
    /// absent and empty are different things.
    pub fn from_message<A, V, T>(action: A, version: V, message: &T) -> Result<Self>
    where
        A: Into<String>,
        V: Into<String>,
        T: serde::Serialize,
    {
        let value = serde_json::to_value(message).map_err(Error::ser)?;
        let params = match value {
            serde_json::Value::Object(map) => map,
            v => {
                return Err(Error::ser(format!(
                    "request messages must serialize to a JSON object, got {v}"
                )));
            }
        };
        Ok(Self {
            action: action.into(),
            version: version.into(),
            params,
        })
    }

    /// The action name, e.g. `DescribeVpcAttribute`.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// The API version the action belongs to, e.g. `2016-04-28`.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All parameters of the call.
    pub fn params(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.params
    }

    /// A single parameter by its wire name, if present.
    pub fn param(&self, name: &str) -> Option<&serde_json::Value> {
        self.params.get(name)
    }

    /// A single string parameter by its wire name, if present.
    pub fn str_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).and_then(|v| v.as_str())
    }
}
