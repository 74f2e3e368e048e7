//! The closed set of backend operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A package-manager operation type.
///
/// `UpdateMetadata` refreshes metadata/indexes without touching installed
/// packages; `UpgradePackages` may change them. The distinction carries
/// through to the result types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    UpdateMetadata,
    UpgradePackages,
    Install,
    Uninstall,
    Search,
    ListInstalled,
    ListAvailable,
}

impl Operation {
    /// Stable name used in error messages and capability notes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UpdateMetadata => "UpdateMetadata",
            Self::UpgradePackages => "UpgradePackages",
            Self::Install => "Install",
            Self::Uninstall => "Uninstall",
            Self::Search => "Search",
            Self::ListInstalled => "ListInstalled",
            Self::ListAvailable => "ListAvailable",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Operation> for String {
    fn from(operation: Operation) -> Self {
        operation.as_str().to_string()
    }
}
