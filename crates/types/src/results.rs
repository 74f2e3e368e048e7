//! Operation result types
//!
//! Each result pairs a `changed` flag with an operation-specific list of
//! changed items, and constructors keep the two in agreement: `changed` is
//! true exactly when the list is non-empty. [`UpdateResult`] has no list at
//! all, which is what makes "Update never modifies packages" impossible to
//! violate rather than merely discouraged.

use serde::{Deserialize, Serialize};

use crate::PackageRef;
use pkgbridge_progress::Message;

/// Result of an Update (metadata refresh) operation.
///
/// Structurally unable to report changed packages: `changed` speaks only
/// about metadata/indexes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateResult {
    /// Whether metadata was refreshed. False when already current.
    pub changed: bool,
    /// Summary messages from the operation.
    pub messages: Vec<Message>,
}

impl UpdateResult {
    /// Metadata was refreshed.
    #[must_use]
    pub fn refreshed(messages: Vec<Message>) -> Self {
        Self {
            changed: true,
            messages,
        }
    }

    /// Metadata was already current.
    #[must_use]
    pub fn current(messages: Vec<Message>) -> Self {
        Self {
            changed: false,
            messages,
        }
    }
}

macro_rules! changed_list_result {
    ($(#[$doc:meta])* $name:ident, $list:ident, $(#[$list_doc:meta])*) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, Serialize, Deserialize)]
        pub struct $name {
            /// Whether any packages were changed. Agrees with the list:
            /// true iff the list is non-empty.
            pub changed: bool,
            $(#[$list_doc])*
            pub $list: Vec<PackageRef>,
            /// Summary messages from the operation.
            pub messages: Vec<Message>,
        }

        impl $name {
            /// Nothing changed.
            #[must_use]
            pub fn unchanged(messages: Vec<Message>) -> Self {
                Self {
                    changed: false,
                    $list: Vec::new(),
                    messages,
                }
            }

            /// Record the changed packages; `changed` is derived from the
            /// list so the two can never disagree.
            #[must_use]
            pub fn with_changes(packages: Vec<PackageRef>, messages: Vec<Message>) -> Self {
                Self {
                    changed: !packages.is_empty(),
                    $list: packages,
                    messages,
                }
            }

            /// Whether the flag agrees with the list. Constructed values
            /// always do; this guards results assembled field-by-field.
            #[must_use]
            pub fn is_consistent(&self) -> bool {
                self.changed == !self.$list.is_empty()
            }
        }
    };
}

changed_list_result! {
    /// Result of an Upgrade operation, which may change installed packages.
    UpgradeResult,
    packages_changed,
    /// Packages that were upgraded. Empty when `changed` is false.
}

changed_list_result! {
    /// Result of an Install operation.
    InstallResult,
    packages_installed,
    /// Packages that were installed. Empty when `changed` is false.
}

changed_list_result! {
    /// Result of an Uninstall operation.
    UninstallResult,
    packages_removed,
    /// Packages that were removed. Empty when `changed` is false.
}
