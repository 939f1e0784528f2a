use thiserror::Error;

/// Errors that can occur when setting up or running a detector scan.
///
/// Scans themselves never fail in current behavior: extraction
/// malformations and verification transport failures are handled locally
/// by dropping the affected candidate. The scan-level error arm exists so
/// the [`crate::Detector`] contract has somewhere to grow.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The shared HTTP client could not be initialised.
    #[error("failed to initialize HTTP client: {0}")]
    ClientInit(String),
}
