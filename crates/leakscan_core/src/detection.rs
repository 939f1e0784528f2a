//! Types representing detected credentials.
//!
//! The central type is [`Detection`], which carries everything the host
//! pipeline needs to report one credential occurrence: the detector tag,
//! the raw value, and the verification outcome when a live check ran.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Key under which the raw credential is attached to analysis metadata,
/// consumed by the downstream capability-enumeration step.
pub const ANALYSIS_KEY: &str = "key";

/// Credentials shorter than this are fully masked in debug output.
const FULL_MASK_THRESHOLD: usize = 12;

/// Mask shown in place of the hidden middle of a credential.
const MASK_DOTS: &str = "••••••••";

/// Identifies the credential family a detection belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorType {
    /// Opsgenie alerting and incident management API keys.
    Opsgenie,
}

impl DetectorType {
    /// Returns the lowercase string identifier used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Opsgenie => "opsgenie",
        }
    }
}

impl fmt::Display for DetectorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single detected credential occurrence.
///
/// Exactly one `Detection` is produced per candidate that survives
/// false-positive filtering; output order matches discovery order in the
/// scanned buffer. The verification fields are only meaningful when the
/// caller requested verification and a verification attempt reached the
/// point of receiving an HTTP response.
#[derive(Clone, Serialize)]
pub struct Detection {
    /// The credential family this detection belongs to.
    pub detector: DetectorType,
    /// The raw credential value, trimmed of surrounding whitespace.
    pub raw: Box<str>,
    /// Whether a live verification call confirmed the credential. Always
    /// `false` when verification was skipped.
    pub verified: bool,
    /// Populated only when a 200 response body could not be decoded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_error: Option<Box<str>>,
    /// Populated whenever a verification attempt received an HTTP response,
    /// regardless of the verdict. Carries the raw value under
    /// [`ANALYSIS_KEY`] for downstream capability enumeration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<HashMap<Box<str>, Box<str>>>,
}

impl Detection {
    /// Creates an unverified detection for a raw credential value.
    ///
    /// The value is trimmed of surrounding whitespace before storage.
    #[must_use]
    pub fn new(detector: DetectorType, raw: &str) -> Self {
        Self {
            detector,
            raw: raw.trim().into(),
            verified: false,
            verification_error: None,
            analysis: None,
        }
    }

    /// Returns the raw value with its middle masked, safe for logging.
    #[must_use]
    pub fn masked(&self) -> String {
        mask_raw(&self.raw)
    }
}

// Debug must never expose the raw credential; findings routinely end up in
// operator logs.
impl fmt::Debug for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Detection")
            .field("detector", &self.detector)
            .field("raw", &self.masked())
            .field("verified", &self.verified)
            .field("verification_error", &self.verification_error)
            .finish_non_exhaustive()
    }
}

fn mask_raw(raw: &str) -> String {
    let chars: Vec<char> = raw.chars().collect();
    let char_count = chars.len();

    if char_count < FULL_MASK_THRESHOLD {
        MASK_DOTS.to_string()
    } else {
        let prefix: String = chars[..4].iter().collect();
        let suffix: String = chars[char_count - 4..].iter().collect();
        format!("{prefix}{MASK_DOTS}{suffix}")
    }
}
