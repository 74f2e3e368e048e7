#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! The pkgbridge backend contract
//!
//! A backend adapts one OS package manager (Homebrew, Flatpak, Snap, ...) to
//! the [`PackageBackend`] trait. Every operation except availability and
//! capability introspection has a default body returning `NotSupported`, so
//! a backend implements exactly the operations its tool can honor and the
//! rest stay consistent with its capability declarations by construction.
//!
//! Operations are plain async methods: cancellation is dropping the future,
//! and deadlines are the caller's `tokio::time::timeout` (plus the runner's
//! own deadline at the process boundary). Warning/error progress messages
//! never fail an operation; failure travels only through the returned
//! `Result`.
//!
//! This crate is also the library facade: the error taxonomy, progress
//! system, shared types, and runner are re-exported here so consumers can
//! depend on one crate.

pub use pkgbridge_errors::{
    is_external_failure, is_not_available, is_not_supported, truncate_output, Error, ErrorKind,
    ExternalFailure, Result, MAX_CAPTURE_LEN,
};
pub use pkgbridge_progress::{
    Action, Message, MutexReporter, NoopReporter, ProgressHelper, ProgressReporter, Severity,
    SharedReporter, Step, Task, TracingReporter,
};
pub use pkgbridge_runner::{
    run_for_operation, CommandOutput, CommandRunner, RunnerConfig, SystemRunner,
};
pub use pkgbridge_types::{
    capability_for, supports, Capability, InstallOptions, InstallResult, InstalledPackage,
    ListOptions, Operation, PackageRef, SearchOptions, UninstallOptions, UninstallResult,
    UpdateOptions, UpdateResult, UpgradeOptions, UpgradeResult,
};

use async_trait::async_trait;

/// Contract implemented by every package-manager backend.
///
/// `Send + Sync` because one backend instance may serve multiple concurrent
/// operations; per-operation state (progress helpers, command buffers)
/// belongs to the invocation, not the backend.
#[async_trait]
pub trait PackageBackend: Send + Sync {
    /// Stable backend name used in errors and capability notes
    /// (e.g. "brew", "flatpak", "snap").
    fn name(&self) -> &str;

    /// The reporter bound at construction time, if any. Per-call overrides
    /// in the options take precedence over it.
    fn default_reporter(&self) -> Option<&SharedReporter> {
        None
    }

    /// Progress helper for one operation invocation, resolving the
    /// default/override reporter precedence.
    fn progress_helper(&self, override_reporter: Option<&SharedReporter>) -> ProgressHelper {
        ProgressHelper::new(self.default_reporter().cloned(), override_reporter.cloned())
    }

    /// Whether the backend's underlying tool or service is reachable.
    ///
    /// # Errors
    ///
    /// Returns `NotAvailable` describing what is missing when the backend
    /// cannot be reached; availability problems are never reported as plain
    /// I/O errors.
    async fn available(&self) -> Result<bool>;

    /// The operations this backend supports. Produced fresh on each call
    /// and consistent with method behavior: an operation declared
    /// unsupported here returns `NotSupported` when invoked.
    async fn capabilities(&self) -> Result<Vec<Capability>>;

    /// Refresh package metadata/indexes. Never modifies installed packages;
    /// the result type has no changed-packages list to report them with.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` unless the backend overrides this operation.
    async fn update(&self, options: UpdateOptions) -> Result<UpdateResult> {
        let _ = options;
        Err(Error::not_supported(Operation::UpdateMetadata, self.name()))
    }

    /// Upgrade installed packages to newer versions.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` unless the backend overrides this operation.
    async fn upgrade(&self, options: UpgradeOptions) -> Result<UpgradeResult> {
        let _ = options;
        Err(Error::not_supported(
            Operation::UpgradePackages,
            self.name(),
        ))
    }

    /// Install the given packages.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` unless the backend overrides this operation.
    async fn install(
        &self,
        packages: &[PackageRef],
        options: InstallOptions,
    ) -> Result<InstallResult> {
        let _ = (packages, options);
        Err(Error::not_supported(Operation::Install, self.name()))
    }

    /// Uninstall the given packages.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` unless the backend overrides this operation.
    async fn uninstall(
        &self,
        packages: &[PackageRef],
        options: UninstallOptions,
    ) -> Result<UninstallResult> {
        let _ = (packages, options);
        Err(Error::not_supported(Operation::Uninstall, self.name()))
    }

    /// Search for available packages matching a query.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` unless the backend overrides this operation.
    async fn search(&self, query: &str, options: SearchOptions) -> Result<Vec<PackageRef>> {
        let _ = (query, options);
        Err(Error::not_supported(Operation::Search, self.name()))
    }

    /// List packages currently installed on the system.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` unless the backend overrides this operation.
    async fn list_installed(&self, options: ListOptions) -> Result<Vec<InstalledPackage>> {
        let _ = options;
        Err(Error::not_supported(Operation::ListInstalled, self.name()))
    }

    /// List packages available from the backend's catalog.
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` unless the backend overrides this operation.
    async fn list_available(&self, options: ListOptions) -> Result<Vec<PackageRef>> {
        let _ = options;
        Err(Error::not_supported(Operation::ListAvailable, self.name()))
    }
}
