//! Per-operation options
//!
//! Every options struct carries an optional reporter override. Precedence is
//! resolved by the progress helper: the override wins over the backend's
//! default reporter; with neither, progress is silent.

use std::fmt;

use pkgbridge_progress::SharedReporter;

macro_rules! operation_options {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Default)]
        pub struct $name {
            /// Per-call progress reporter override.
            pub progress: Option<SharedReporter>,
        }

        impl $name {
            /// Options routing progress to the given reporter.
            #[must_use]
            pub fn with_progress(progress: SharedReporter) -> Self {
                Self {
                    progress: Some(progress),
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("progress", &self.progress.as_ref().map(|_| "<reporter>"))
                    .finish()
            }
        }
    };
}

operation_options! {
    /// Options for Update operations (metadata refresh only).
    UpdateOptions
}

operation_options! {
    /// Options for Upgrade operations (may change installed packages).
    UpgradeOptions
}

operation_options! {
    /// Options for Install operations.
    InstallOptions
}

operation_options! {
    /// Options for Uninstall operations.
    UninstallOptions
}

operation_options! {
    /// Options for Search operations.
    SearchOptions
}

operation_options! {
    /// Options for ListInstalled / ListAvailable operations.
    ListOptions
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use pkgbridge_progress::NoopReporter;

    #[test]
    fn default_options_carry_no_reporter() {
        assert!(UpdateOptions::default().progress.is_none());
        assert!(SearchOptions::default().progress.is_none());
    }

    #[test]
    fn with_progress_sets_the_override() {
        let options = InstallOptions::with_progress(Arc::new(NoopReporter));
        assert!(options.progress.is_some());
        assert_eq!(
            format!("{options:?}"),
            "InstallOptions { progress: Some(\"<reporter>\") }"
        );
    }
}
