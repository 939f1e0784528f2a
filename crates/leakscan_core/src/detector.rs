//! The detector trait driven by the host scanning pipeline.

use std::pin::Pin;

use crate::detection::{Detection, DetectorType};
use crate::error::ScanError;

/// A pinned, boxed, `Send` future used as the return type for async scans.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A detector for one family of service credentials.
///
/// The host pipeline feeds each detector raw byte chunks and collects the
/// resulting [`Detection`]s. A scan is synchronous from the caller's
/// perspective: candidates are processed one at a time and results come
/// back in discovery order. The only operation that may suspend is the
/// live verification round trip, performed at most once per candidate
/// when `verify` is set.
///
/// The HTTP `client` is a shared, pre-configured dependency owned by the
/// caller; detectors never mutate it. Cancellation is governed by the
/// client's timeout configuration and by dropping the returned future; a
/// cancelled verification counts as a transport failure.
pub trait Detector: Send + Sync {
    /// Returns the constant tag identifying this credential family.
    fn detector_type(&self) -> DetectorType;

    /// Keywords the host pipeline uses to pre-filter chunks before
    /// invoking this detector. Identifiers from the secret shape are
    /// preferred, falling back to the provider name.
    fn keywords(&self) -> &'static [&'static str];

    /// Returns a human-readable description of the credential family.
    fn description(&self) -> &'static str;

    /// Scans `data` for credentials, optionally verifying each survivor
    /// with a single live API call.
    ///
    /// The returned `Result` is always `Ok` in current behavior; the error
    /// arm is reserved for catastrophic failure.
    fn scan<'a>(
        &'a self,
        client: &'a reqwest::Client,
        data: &'a [u8],
        verify: bool,
    ) -> BoxFuture<'a, Result<Vec<Detection>, ScanError>>;
}
