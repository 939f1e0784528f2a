//! Detector registry and the shared verification client.

use std::time::Duration;

use leakscan_core::{Detection, Detector, ScanError};

use crate::USER_AGENT;
use crate::opsgenie::OpsgenieDetector;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

static OPSGENIE: OpsgenieDetector = OpsgenieDetector::new();

/// Central registry of builtin credential detectors.
///
/// Owns the shared HTTP client used for live verification. The client is
/// constructed once, carries the timeout and `User-Agent` configuration,
/// and is handed to each detector by reference; detectors never mutate it.
pub struct DetectorRegistry {
    detectors: Vec<&'static dyn Detector>,
    client: reqwest::Client,
}

impl DetectorRegistry {
    /// Creates a registry with all builtin detectors and a default
    /// verification client.
    pub fn new() -> Result<Self, ScanError> {
        let client = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScanError::ClientInit(e.to_string()))?;

        Ok(Self::with_client(client))
    }

    /// Creates a registry using a caller-configured HTTP client.
    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            detectors: builtin_detectors(),
            client,
        }
    }

    /// Returns the registered detectors.
    #[must_use]
    pub fn detectors(&self) -> &[&'static dyn Detector] {
        &self.detectors
    }

    /// Returns the shared verification client.
    #[must_use]
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Scans `data` with every registered detector in registration order,
    /// concatenating each detector's results.
    pub async fn scan_all(&self, data: &[u8], verify: bool) -> Result<Vec<Detection>, ScanError> {
        let mut results = Vec::new();

        for detector in &self.detectors {
            results.extend(detector.scan(&self.client, data, verify).await?);
        }

        Ok(results)
    }
}

fn builtin_detectors() -> Vec<&'static dyn Detector> {
    vec![&OPSGENIE]
}

impl std::fmt::Debug for DetectorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetectorRegistry")
            .field("detector_count", &self.detectors.len())
            .finish_non_exhaustive()
    }
}
