//! Credential detectors with live verification for leakscan.
//!
//! Each detector module implements [`leakscan_core::Detector`] for one
//! credential family: lexical extraction, false-positive suppression, and
//! optional live verification against the issuing service's API. The
//! [`DetectorRegistry`] holds the builtin detectors together with the
//! shared HTTP client used for verification.

/// Opsgenie API key detection and verification.
pub mod opsgenie;
mod registry;

pub use opsgenie::OpsgenieDetector;
pub use registry::DetectorRegistry;

/// HTTP `User-Agent` header sent during credential verification requests.
pub(crate) const USER_AGENT: &str = concat!("leakscan/", env!("CARGO_PKG_VERSION"));
