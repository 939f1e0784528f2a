//! Detector abstraction and result model for the leakscan secret scanner.
//!
//! A leakscan detector inspects an arbitrary byte buffer for one family of
//! service credentials and optionally confirms each candidate with a single
//! live API call. This crate defines the seam between detectors and the
//! host pipeline that drives them:
//!
//! - [`Detector`] - the trait every credential detector implements
//! - [`Detection`] - one reported credential occurrence
//! - [`DetectorType`] - the constant tag identifying a credential family
//! - [`ScanError`] - structured errors, built with [`thiserror`]
//!
//! Concrete detectors live in the `leakscan_detectors` crate. The HTTP
//! client used for verification is constructed by the caller and injected
//! by reference; this crate never builds or mutates one.

/// One reported credential occurrence and its verification outcome.
pub mod detection;
/// The trait implemented by every credential detector.
pub mod detector;
/// Error types for detector scanning and client construction.
pub mod error;
/// Regex fragment helpers shared by detector patterns.
pub mod pattern;

pub use detection::{ANALYSIS_KEY, Detection, DetectorType};
pub use detector::{BoxFuture, Detector};
pub use error::ScanError;
