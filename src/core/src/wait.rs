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

//! A bounded, fixed-interval wait loop for resource status transitions.
//!
//! Creating or deleting a VPC resource returns before the resource settles;
//! the resource then reports a transitional status (`Pending`, `Deleting`)
//! until the service catches up. [until_status] confirms such transitions by
//! re-reading the status at a fixed interval until it matches a target value
//! or a deadline passes.
//!
//! # Example
//! ```
//! # use aliyun_sdk_core::wait::{until_status, PollingOptions};
//! use std::time::Duration;
//! # tokio_test::block_on(async {
//! let matched = until_status(
//!     async || Ok("Available".to_string()),
//!     async |d| tokio::time::sleep(d).await,
//!     "Available",
//!     PollingOptions::new().with_timeout(Duration::from_secs(60)),
//! )
//! .await
//! .expect("the status reader never fails");
//! assert!(matched);
//! # });
//! ```

use crate::Result;
use crate::error::Error;
use std::time::Duration;

/// The error type for invalid polling options.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("the poll interval ({0:?}) should be greater than zero")]
    InvalidInterval(Duration),
    #[error("the wait timeout ({0:?}) should be greater than zero")]
    InvalidTimeout(Duration),
}

/// Controls for a status wait loop.
///
/// The defaults match the VPC quick start: give a resource up to two minutes
/// to settle, checking once per second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollingOptions {
    timeout: Duration,
    interval: Duration,
}

impl PollingOptions {
    /// Creates options with the default timeout and interval.
    ///
    /// # Example
    /// ```
    /// # use aliyun_sdk_core::wait::PollingOptions;
    /// use std::time::Duration;
    /// let options = PollingOptions::new()
    ///     .with_timeout(Duration::from_secs(60))
    ///     .with_interval(Duration::from_secs(5));
    /// assert_eq!(options.interval(), Duration::from_secs(5));
    /// ```
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(120),
            interval: Duration::from_secs(1),
        }
    }

    /// Changes the total time budget for the wait loop.
    pub fn with_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.timeout = v.into();
        self
    }

    /// Changes the fixed delay between status reads.
    pub fn with_interval<V: Into<Duration>>(mut self, v: V) -> Self {
        self.interval = v.into();
        self
    }

    /// The total time budget for the wait loop.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The fixed delay between status reads.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    fn validate(&self) -> std::result::Result<(), OptionsError> {
        if self.interval.is_zero() {
            return Err(OptionsError::InvalidInterval(self.interval));
        }
        if self.timeout.is_zero() {
            return Err(OptionsError::InvalidTimeout(self.timeout));
        }
        Ok(())
    }
}

impl Default for PollingOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-reads a resource status until it matches `target` or a deadline passes.
///
/// The loop reads the status immediately, then at most once per
/// [interval][PollingOptions::interval] until
/// [timeout][PollingOptions::timeout] has elapsed. Statuses are compared to
/// `target` with exact string equality; the empty string is a valid target
/// and means "the resource no longer exists" (the status function must
/// report a deleted resource as the empty status rather than as an error).
///
/// Returns `Ok(true)` on the first match and `Ok(false)` when the deadline
/// passes without one; the caller decides whether an expired deadline is
/// fatal. Errors from `fetch` are not retried and abort the loop
/// immediately.
///
/// Every read is a billable network call: with a timeout of `T` and an
/// interval of `I` the loop makes up to `T / I` reads, so size the options
/// with the service's rate limits in mind.
///
/// The caller provides the `sleep` function. Production code passes
/// [tokio::time::sleep]; tests can count or skip the delays.
pub async fn until_status<F, B>(
    fetch: F,
    sleep: B,
    target: &str,
    options: PollingOptions,
) -> Result<bool>
where
    F: AsyncFn() -> Result<String> + Send,
    B: AsyncFn(Duration) -> () + Send,
{
    options.validate().map_err(Error::other)?;
    let loop_start = tokio::time::Instant::now();
    while loop_start.elapsed() < options.timeout() {
        let status = fetch().await?;
        if status == target {
            return Ok(true);
        }
        sleep(options.interval()).await;
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn test_options() -> PollingOptions {
        PollingOptions::new()
            .with_timeout(Duration::from_secs(60))
            .with_interval(Duration::from_secs(5))
    }

    #[tokio::test]
    async fn immediate_match_skips_sleeping() -> Result<()> {
        // The mock proves the first match returns before any delay.
        let sleep = MockSleep::new();
        let matched = until_status(
            async || Ok("Available".to_string()),
            async |d| sleep.sleep(d).await,
            "Available",
            test_options(),
        )
        .await?;
        assert!(matched);
        Ok(())
    }

    #[tokio::test]
    async fn fetch_errors_abort_the_loop() {
        let sleep = MockSleep::new();
        let calls = AtomicUsize::new(0);
        let err = until_status(
            async || {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(Error::service(
                    ApiError::new().set_code("UnauthorizedOperation"),
                ))
            },
            async |d| sleep.sleep(d).await,
            "Available",
            test_options(),
        )
        .await
        .unwrap_err();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(
            matches!(err.api_error(), Some(e) if e.code == "UnauthorizedOperation"),
            "{err:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn match_within_budget() -> Result<()> {
        // "Pending" three times, then "Available": the fourth read matches,
        // about fifteen seconds after the loop starts.
        let calls = AtomicUsize::new(0);
        let loop_start = tokio::time::Instant::now();
        let matched = until_status(
            async || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                Ok(if n < 3 { "Pending" } else { "Available" }.to_string())
            },
            async |d| tokio::time::sleep(d).await,
            "Available",
            test_options(),
        )
        .await?;
        assert!(matched);
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        let elapsed = loop_start.elapsed();
        assert!(
            elapsed >= Duration::from_secs(15) && elapsed < Duration::from_secs(20),
            "{elapsed:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_without_match() -> Result<()> {
        let calls = AtomicUsize::new(0);
        let loop_start = tokio::time::Instant::now();
        let matched = until_status(
            async || {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("Pending".to_string())
            },
            async |d| tokio::time::sleep(d).await,
            "Available",
            PollingOptions::new()
                .with_timeout(Duration::from_secs(10))
                .with_interval(Duration::from_secs(5)),
        )
        .await?;
        assert!(!matched);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        let elapsed = loop_start.elapsed();
        assert!(
            elapsed >= Duration::from_secs(10) && elapsed < Duration::from_secs(15),
            "{elapsed:?}"
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn empty_target_matches_deleted_resource() -> Result<()> {
        // Deletion waits use the empty string as the target status.
        let calls = AtomicUsize::new(0);
        let matched = until_status(
            async || {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                Ok(if n < 2 { "Deleting" } else { "" }.to_string())
            },
            async |d| tokio::time::sleep(d).await,
            "",
            test_options(),
        )
        .await?;
        assert!(matched);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        Ok(())
    }

    #[test_case::test_case(PollingOptions::new().with_interval(Duration::ZERO); "zero interval")]
    #[test_case::test_case(PollingOptions::new().with_timeout(Duration::ZERO); "zero timeout")]
    #[tokio::test]
    async fn rejects_invalid_options(options: PollingOptions) {
        let sleep = MockSleep::new();
        let err = until_status(
            async || Ok("Available".to_string()),
            async |d| sleep.sleep(d).await,
            "Available",
            options,
        )
        .await
        .unwrap_err();
        assert!(
            err.to_string().contains("should be greater than zero"),
            "{err}"
        );
    }

    trait Sleep {
        fn sleep(&self, d: Duration) -> impl Future<Output = ()>;
    }

    mockall::mock! {
        Sleep {}
        impl Sleep for Sleep {
            fn sleep(&self, d: Duration) -> impl Future<Output = ()> + Send;
        }
    }
}
