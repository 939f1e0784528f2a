//! Opsgenie API key detection and verification.
//!
//! Opsgenie keys are UUID-shaped (8-4-4-4-12 lowercase hex), so detection
//! requires the provider keyword within prefix distance of the token. The
//! same shape appears as alert identifiers in Opsgenie dashboard URLs;
//! candidates found inside an alert-detail URL are suppressed.
//!
//! Verification performs a single authenticated `GET /v2/alerts` using the
//! `GenieKey` authorization scheme. A 200 response whose JSON body carries
//! a top-level `data` attribute confirms a live key.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use leakscan_core::detection::{ANALYSIS_KEY, Detection, DetectorType};
use leakscan_core::detector::{BoxFuture, Detector};
use leakscan_core::error::ScanError;
use leakscan_core::pattern::{UUID_TOKEN, keyword_prefix};
use regex::bytes::Regex;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
#[cfg(feature = "tracing")]
use tracing::{debug, trace};

const OPSGENIE_API_URL: &str = "https://api.opsgenie.com";
const ALERTS_PATH: &str = "/v2/alerts";

const KEYWORDS: &[&str] = &["opsgenie"];

/// Alert-detail dashboard URLs expose alert identifiers with the same UUID
/// shape as API keys; a candidate whose match context contains this marker
/// is not a credential.
const ALERT_DETAIL_URL: &[u8] = b"opsgenie.com/alert/detail/";

const DESCRIPTION: &str = "Opsgenie is an alerting and incident management platform. \
    Opsgenie API keys can be used to interact with the Opsgenie API to manage alerts and incidents.";

// Compiled once and shared read-only across all scans.
static KEY_PATTERN: LazyLock<Regex> = LazyLock::new(compile_key_pattern);

#[expect(
    clippy::expect_used,
    reason = "the pattern is assembled from static fragments known to compile"
)]
fn compile_key_pattern() -> Regex {
    Regex::new(&format!("{}{UUID_TOKEN}", keyword_prefix(KEYWORDS))).expect("static pattern compiles")
}

/// A raw extracted occurrence of an Opsgenie-shaped key, prior to
/// false-positive filtering and verification.
///
/// Borrows from the scanned buffer and lives only within one scan
/// invocation.
pub struct Candidate<'d> {
    /// The full matched span, including the keyword prefix context.
    full: &'d [u8],
    /// The captured key, trimmed of surrounding whitespace.
    raw: &'d str,
}

impl<'d> Candidate<'d> {
    /// Returns the captured key value.
    #[must_use]
    pub const fn raw(&self) -> &'d str {
        self.raw
    }

    /// Returns `true` if the surrounding match context places this token
    /// inside an alert-detail dashboard URL.
    ///
    /// This is a fixed substring check, not a URL parser; URL variants
    /// that slip through are accepted.
    fn in_alert_detail_url(&self) -> bool {
        self.full
            .windows(ALERT_DETAIL_URL.len())
            .any(|window| window == ALERT_DETAIL_URL)
    }
}

impl fmt::Debug for Candidate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("span_len", &self.full.len())
            .finish_non_exhaustive()
    }
}

/// Outcome of one verification attempt that received an HTTP response.
struct Verdict {
    verified: bool,
    error: Option<Box<str>>,
    analysis: HashMap<Box<str>, Box<str>>,
}

/// Detector for Opsgenie API keys with live verification support.
#[derive(Debug, Clone)]
pub struct OpsgenieDetector {
    api_base: Cow<'static, str>,
}

impl OpsgenieDetector {
    /// Creates a detector pointed at the production Opsgenie API.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            api_base: Cow::Borrowed(OPSGENIE_API_URL),
        }
    }

    /// Creates a detector that verifies against a different API base URL.
    ///
    /// Intended for tests; the detection logic is unaffected.
    #[must_use]
    pub fn with_api_base(api_base: impl Into<String>) -> Self {
        Self {
            api_base: Cow::Owned(api_base.into()),
        }
    }

    /// Extracts candidate keys from `data` as a lazy, non-restartable
    /// sequence, in leftmost non-overlapping match order.
    ///
    /// A match whose key capture is absent or not valid UTF-8 is silently
    /// skipped.
    pub fn candidates<'d>(&self, data: &'d [u8]) -> impl Iterator<Item = Candidate<'d>> {
        KEY_PATTERN.captures_iter(data).filter_map(|caps| {
            let full = caps.get(0)?.as_bytes();
            let token = caps.get(1)?.as_bytes();
            let raw = std::str::from_utf8(token).ok()?.trim();
            Some(Candidate { full, raw })
        })
    }

    /// Performs the single live verification call for `key`.
    ///
    /// Returns `None` when no HTTP response was received (request
    /// construction or transport failure); such candidates are dropped
    /// from the output entirely, indistinguishable from a non-match.
    async fn verify_key(&self, client: &reqwest::Client, key: &str) -> Option<Verdict> {
        let url = format!("{}{ALERTS_PATH}", self.api_base);
        let response = match client
            .get(&url)
            .header(AUTHORIZATION, format!("GenieKey {key}"))
            .send()
            .await
        {
            Ok(response) => response,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                debug!(error = %_err, "verification request failed, dropping candidate");
                return None;
            }
        };

        // A response was received: attach the key for the downstream
        // capability-enumeration step, whatever the verdict turns out to be.
        let mut verdict = Verdict {
            verified: false,
            error: None,
            analysis: HashMap::from([(ANALYSIS_KEY.into(), key.into())]),
        };

        if response.status() == StatusCode::OK {
            match response
                .json::<serde_json::Map<String, serde_json::Value>>()
                .await
            {
                // A 200 whose body carries a top-level "data" attribute is
                // a live key; a 200 of any other shape is not an error.
                Ok(body) => verdict.verified = body.contains_key("data"),
                Err(err) => {
                    verdict.error =
                        Some(format!("unreadable verification response: {err} (key: {key})").into());
                }
            }
        }

        Some(verdict)
    }
}

impl Default for OpsgenieDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl Detector for OpsgenieDetector {
    fn detector_type(&self) -> DetectorType {
        DetectorType::Opsgenie
    }

    fn keywords(&self) -> &'static [&'static str] {
        KEYWORDS
    }

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    fn scan<'a>(
        &'a self,
        client: &'a reqwest::Client,
        data: &'a [u8],
        verify: bool,
    ) -> BoxFuture<'a, Result<Vec<Detection>, ScanError>> {
        Box::pin(async move {
            // Extraction completes before the first verification round trip
            // so no matcher state is held across an await.
            let survivors: Vec<&str> = self
                .candidates(data)
                .filter(|candidate| {
                    if candidate.in_alert_detail_url() {
                        #[cfg(feature = "tracing")]
                        trace!("dropping candidate found inside alert-detail URL");
                        return false;
                    }
                    true
                })
                .map(|candidate| candidate.raw())
                .collect();

            let mut results = Vec::new();

            for raw in survivors {
                let mut detection = Detection::new(DetectorType::Opsgenie, raw);

                if verify {
                    let Some(verdict) = self.verify_key(client, &detection.raw).await else {
                        continue;
                    };
                    detection.verified = verdict.verified;
                    detection.verification_error = verdict.error;
                    detection.analysis = Some(verdict.analysis);
                }

                results.push(detection);
            }

            Ok(results)
        })
    }
}
