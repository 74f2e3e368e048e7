//! Backend-agnostic package identification

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a package in a backend-agnostic way.
///
/// Only `name` is required. The optional fields map onto backend concepts
/// that not every manager has: a flatpak remote or snap publisher
/// (`namespace`), a snap channel (`channel`), a brew cask vs. formula or
/// flatpak app vs. runtime (`kind`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl PackageRef {
    /// Create a reference by name alone.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            channel: None,
            kind: None,
        }
    }

    /// Scope the reference to a namespace (remote, publisher).
    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Pin the reference to a channel (e.g. snap `stable`, `edge`).
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Mark the package kind (e.g. brew `cask`, flatpak `runtime`).
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace) = &self.namespace {
            write!(f, "{namespace}/")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(channel) = &self.channel {
            write!(f, ":{channel}")?;
        }
        Ok(())
    }
}

/// A package currently installed on the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledPackage {
    pub reference: PackageRef,
    /// Installed version, as the backend reports it.
    pub version: String,
    /// Installation status (e.g. "installed", "held", "disabled").
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_scope_and_channel() {
        let plain = PackageRef::new("jq");
        assert_eq!(plain.to_string(), "jq");

        let scoped = PackageRef::new("firefox")
            .with_namespace("flathub")
            .with_channel("stable");
        assert_eq!(scoped.to_string(), "flathub/firefox:stable");
    }

    #[test]
    fn optional_fields_are_omitted_from_json() {
        let json = serde_json::to_value(PackageRef::new("curl")).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "curl" }));
    }
}
