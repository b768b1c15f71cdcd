//! Proof-of-action verification client
//!
//! Submits a user-provided image to the remote validation backend and
//! interprets its verdict. The verdict is purely advisory: it has no binding
//! effect on the contract and must never be conflated with on-chain state.

use crate::error::{Result, SessionError};
use serde::Deserialize;

/// Validity verdict from the remote verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The image was accepted as evidence
    Valid,
    /// The image was rejected (reason in the message)
    Invalid,
}

/// Outcome of one verification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// Verdict from the backend
    pub verdict: Verdict,
    /// Human-readable message accompanying the verdict
    pub message: String,
}

impl VerificationResult {
    /// Whether the backend accepted the image
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }
}

/// An image submitted as evidence of a claimed action
#[derive(Debug, Clone)]
pub struct ImageArtifact {
    /// File name reported to the backend
    pub file_name: String,
    /// Raw image bytes
    pub bytes: Vec<u8>,
}

impl ImageArtifact {
    /// Create an artifact from in-memory bytes
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Load an artifact from disk
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| SessionError::InvalidInput(format!("cannot read image {path:?}: {e}")))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        Ok(Self { file_name, bytes })
    }
}

// The deployed backend historically used `success` as the flag name;
// `valid` is the documented field.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(alias = "success")]
    valid: bool,
    #[serde(default)]
    message: String,
}

/// Client for the remote proof-of-action verification backend.
///
/// One multipart POST per verification; this client never touches the
/// contract.
pub struct ProofVerificationClient {
    base_url: String,
    client: reqwest::Client,
}

impl ProofVerificationClient {
    /// Create a client for the backend at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .user_agent("GreenCoinRustSDK/0.1.0")
                .timeout(std::time::Duration::from_secs(30))
                .connect_timeout(std::time::Duration::from_secs(10))
                .use_rustls_tls()
                .build()
                .unwrap(),
        }
    }

    /// Submit an image for validation.
    ///
    /// Fails with `TransportFailed` if the endpoint is unreachable, returns a
    /// non-success status, or its body is malformed. A failure here is a
    /// transport outcome, not an Invalid verdict.
    pub async fn verify(&self, artifact: ImageArtifact) -> Result<VerificationResult> {
        let part = reqwest::multipart::Part::bytes(artifact.bytes).file_name(artifact.file_name);
        let form = reqwest::multipart::Form::new().part("image", part);

        let response = self
            .client
            .post(format!("{}/check-image", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| SessionError::TransportFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SessionError::TransportFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(SessionError::TransportFailed(format!(
                "verifier returned {status}: {}",
                snippet(&body)
            )));
        }

        let result = parse_verdict(&body)?;
        tracing::debug!(verdict = ?result.verdict, "verification completed");
        Ok(result)
    }
}

/// First 200 bytes of a response body, cut back to a char boundary so
/// multibyte backend messages never split mid-character
fn snippet(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

/// Interpret the backend's JSON body
fn parse_verdict(body: &str) -> Result<VerificationResult> {
    let response: VerifyResponse = serde_json::from_str(body).map_err(|e| {
        SessionError::TransportFailed(format!(
            "malformed verifier response: {e}: {}",
            snippet(body)
        ))
    })?;

    let verdict = if response.valid {
        Verdict::Valid
    } else {
        Verdict::Invalid
    };

    Ok(VerificationResult {
        verdict,
        message: response.message,
    })
}
