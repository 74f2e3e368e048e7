//! Capability declarations and lookup helpers

use serde::{Deserialize, Serialize};

use crate::Operation;

/// Declares whether a backend supports a named [`Operation`].
///
/// Capability lists must agree with behavior: if an entry claims
/// unsupported, invoking the corresponding operation yields `NotSupported`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capability {
    pub operation: Operation,
    pub supported: bool,
    /// Optional context: integration method, constraints, or why the
    /// operation is unsupported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Capability {
    /// Declare a supported operation.
    #[must_use]
    pub fn supported(operation: Operation) -> Self {
        Self {
            operation,
            supported: true,
            notes: None,
        }
    }

    /// Declare an unsupported operation.
    #[must_use]
    pub fn unsupported(operation: Operation) -> Self {
        Self {
            operation,
            supported: false,
            notes: None,
        }
    }

    /// Attach a note: integration method, constraints, or why the
    /// operation is unsupported.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// True iff some entry matches `operation` and is marked supported.
/// A missing entry counts as unsupported, not as an error.
#[must_use]
pub fn supports(capabilities: &[Capability], operation: Operation) -> bool {
    capabilities
        .iter()
        .any(|capability| capability.operation == operation && capability.supported)
}

/// The matching entry for `operation`, or `None` when the backend declares
/// nothing about it. Callers use this to surface why something is
/// unsupported, not just whether.
#[must_use]
pub fn capability_for(capabilities: &[Capability], operation: Operation) -> Option<&Capability> {
    capabilities
        .iter()
        .find(|capability| capability.operation == operation)
}
