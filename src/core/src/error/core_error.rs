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

use super::ApiError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by all client libraries.
///
/// Errors come from multiple sources: the service may reject the request
/// with an error document, the transport may fail to deliver the request or
/// the response, the library may be unable to format the request, or a wait
/// loop may give up before the resource reaches the expected status.
///
/// Most applications just return or log the error. Applications that need to
/// branch on the cause can use the predicates on this type, or the coarser
/// [fault][Error::fault] classification.
///
/// # Example
/// ```
/// use aliyun_sdk_core::error::{ApiError, Error, Fault};
/// match example_call() {
///     Err(e) if matches!(e.fault(), Fault::Server) => {
///         println!("the service rejected the request: {e}");
///     }
///     Err(e) => println!("local problem, the request may not have been sent: {e}"),
///     Ok(_) => println!("success"),
/// }
///
/// fn example_call() -> Result<(), Error> {
///     # Err(Error::service(ApiError::new().set_code("Throttling")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

/// The coarse classification of an [Error].
///
/// This mirrors the split the service documentation uses: a server fault is
/// backed by an error document produced by the service, everything else was
/// generated on the client side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// The service received the request and rejected it.
    Server,
    /// The error was generated locally. The request may not have been sent.
    Client,
}

impl Error {
    /// Creates an error from the error document returned by the service.
    ///
    /// # Example
    /// ```
    /// use aliyun_sdk_core::error::{ApiError, Error};
    /// let details = ApiError::new().set_code("QuotaExceeded.Vpc");
    /// let error = Error::service(details.clone());
    /// assert_eq!(error.api_error(), Some(&details));
    /// ```
    pub fn service(details: ApiError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The [ApiError] payload associated with this error, if any.
    ///
    /// Only errors created by [service][Error::service] carry a payload;
    /// locally generated errors return `None`.
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d.as_ref()),
            _ => None,
        }
    }

    /// Creates an error representing a request that ran out of time.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use aliyun_sdk_core::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. The request may or may
    /// not have started, and it may or may not complete in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted wait loop.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use aliyun_sdk_core::error::Error;
    /// let error = Error::exhausted("vpc-123 never became Available");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// A wait loop gave up before the resource reached the expected status.
    ///
    /// The resource may still reach that status later; the library simply
    /// stopped watching. Extend the polling timeout if the application can
    /// tolerate longer waits.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This error is never transient: the same input data will fail on
    /// future attempts too.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error for a full HTTP response without a service error
    /// document.
    ///
    /// Proxies and load balancers can produce errors before the request
    /// reaches the service; such responses have a status code but not the
    /// JSON error document.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error for a transport problem without a full HTTP response.
    ///
    /// Examples include connection resets and requests that never left the
    /// host.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem reported by the transport layer.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.http_status_code,
            _ => None,
        }
    }

    /// The HTTP headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// An unclassified problem making a request.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// Classifies this error as a server fault or a client fault.
    ///
    /// Errors backed by a service error document are server faults. All
    /// locally generated errors, including transport failures where no
    /// response arrived, are client faults.
    pub fn fault(&self) -> Fault {
        match &self.kind {
            ErrorKind::Service(_) => Fault::Server,
            _ => Fault::Client,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {} (request id {})",
                    d.code, d.message, d.request_id
                )
            }
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Serialization,
    Deserialization,
    Timeout,
    Exhausted,
    Transport(Box<TransportDetails>),
    Service(Box<ApiError>),
    /// An uncategorized error.
    Other,
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => write!(f, "the transport reports an error: {source}"),
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service() {
        let details = ApiError::new()
            .set_request_id("6ABB2106")
            .set_code("InvalidCidrBlock.Malformed")
            .set_message("The CidrBlock is malformed.")
            .set_http_status_code(400_u16);
        let error = Error::service(details.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.api_error(), Some(&details));
        assert_eq!(error.http_status_code(), Some(400));
        assert_eq!(error.fault(), Fault::Server);
        let display = error.to_string();
        assert!(display.contains("InvalidCidrBlock.Malformed"), "{display}");
        assert!(display.contains("6ABB2106"), "{display}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("simulated");
        assert!(error.is_timeout(), "{error:?}");
        assert!(!error.is_exhausted(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert_eq!(error.fault(), Fault::Client);
        assert!(error.api_error().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted("vpc-123 never became Available");
        assert!(error.is_exhausted(), "{error:?}");
        assert!(!error.is_timeout(), "{error:?}");
        assert_eq!(error.fault(), Fault::Client);
        assert!(error.to_string().contains("vpc-123"), "{error}");
    }

    #[test]
    fn serialization() {
        let source = serde_json::from_str::<String>("{").unwrap_err();
        let error = Error::ser(source);
        assert!(error.is_serialization(), "{error:?}");
        assert_eq!(error.fault(), Fault::Client);
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test]
    fn deserialization() {
        let source = serde_json::from_str::<String>("{").unwrap_err();
        let error = Error::deser(source);
        assert!(error.is_deserialization(), "{error:?}");
        assert_eq!(error.fault(), Fault::Client);
        assert!(error.source().is_some(), "{error:?}");
    }

    #[test]
    fn http() {
        let headers = {
            let mut headers = HeaderMap::new();
            headers.insert("content-type", http::HeaderValue::from_static("text/html"));
            headers
        };
        let payload = bytes::Bytes::from_static(b"Bad Gateway");
        let error = Error::http(502, headers.clone(), payload);
        assert!(error.is_transport(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.fault(), Fault::Client);
        assert!(error.to_string().contains("Bad Gateway"), "{error}");
        assert!(error.to_string().contains("502"), "{error}");
    }

    #[test]
    fn io() {
        let source = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset");
        let error = Error::io(source);
        assert!(error.is_transport(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert_eq!(error.fault(), Fault::Client);
        assert!(error.to_string().contains("reset"), "{error}");
    }

    #[test]
    fn other() {
        let error = Error::other("surprise");
        assert_eq!(error.fault(), Fault::Client);
        assert!(error.to_string().contains("surprise"), "{error}");
    }
}
