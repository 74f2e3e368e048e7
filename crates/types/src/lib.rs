#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Shared type definitions for the pkgbridge backend contract
//!
//! Operations, package references, capability declarations, and the
//! per-operation options/result shapes that every backend speaks. The
//! Update-vs-Upgrade distinction is enforced here at the type level:
//! [`UpdateResult`] structurally has no changed-packages list, so an Update
//! can never claim to have modified installed software.

mod capability;
mod operation;
mod options;
mod package;
mod results;

pub use capability::{capability_for, supports, Capability};
pub use operation::Operation;
pub use options::{
    InstallOptions, ListOptions, SearchOptions, UninstallOptions, UpdateOptions, UpgradeOptions,
};
pub use package::{InstalledPackage, PackageRef};
pub use results::{InstallResult, UninstallResult, UpdateResult, UpgradeResult};
