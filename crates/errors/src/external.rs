//! External-failure context: captured output from a command or API call that
//! executed but failed.

use std::fmt;

/// Maximum number of characters of stdout/stderr retained in an
/// [`ExternalFailure`]. Longer captures are cut and marked, bounding error
/// size against runaway command output.
pub const MAX_CAPTURE_LEN: usize = 500;

/// Truncate captured command output to [`MAX_CAPTURE_LEN`] characters.
///
/// Appends a truncation marker when anything was cut. The bound is counted in
/// characters, not bytes, so the cut never lands inside a UTF-8 sequence.
#[must_use]
pub fn truncate_output(output: &str) -> String {
    match output.char_indices().nth(MAX_CAPTURE_LEN) {
        Some((byte_pos, _)) => format!("{}... (truncated)", &output[..byte_pos]),
        None => output.to_string(),
    }
}

/// Context captured when an underlying command or API call ran and failed.
///
/// `stdout` and `stderr` are already truncated by the time they are stored
/// here; `payload` carries a decoded API error body when one exists. The
/// low-level cause is kept as its rendered message so the type stays `Clone`
/// across crate boundaries.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExternalFailure {
    pub operation: String,
    pub backend: String,
    pub stdout: String,
    pub stderr: String,
    pub payload: Option<serde_json::Value>,
    pub source: Option<String>,
}

impl ExternalFailure {
    /// Create a failure context for an operation on a backend.
    pub fn new(operation: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            backend: backend.into(),
            stdout: String::new(),
            stderr: String::new(),
            payload: None,
            source: None,
        }
    }

    /// Attach captured stdout/stderr, truncating both to the capture bound.
    #[must_use]
    pub fn with_output(mut self, stdout: &str, stderr: &str) -> Self {
        self.stdout = truncate_output(stdout);
        self.stderr = truncate_output(stderr);
        self
    }

    /// Attach a structured payload decoded from an API error body.
    #[must_use]
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attach the rendered message of the underlying low-level error.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for ExternalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "external failure: {} operation on {}",
            self.operation, self.backend
        )?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        if !self.stderr.is_empty() {
            write!(f, " (stderr: {})", self.stderr)?;
        }
        Ok(())
    }
}
