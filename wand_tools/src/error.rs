// Copyright 2025 the UniCAVE Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.
//!
//! Event dispatch never fails; only building a [`ToolManager`](crate::manager::ToolManager)
//! or an [`AnalogDrive`](crate::drive::AnalogDrive) can.

/// Result type for fallible constructors in this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported when building a manager or a drive tool.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The tool registry has no entries, so no tool could ever be current.
    #[error("tool registry is empty")]
    EmptyRegistry,

    /// Drive tuning parameters were rejected.
    #[error("invalid drive config: {reason}")]
    InvalidDriveConfig {
        /// Which parameter was rejected and why.
        reason: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(Error::EmptyRegistry.to_string(), "tool registry is empty");
        assert_eq!(
            Error::InvalidDriveConfig {
                reason: "dead zone must be finite and non-negative"
            }
            .to_string(),
            "invalid drive config: dead zone must be finite and non-negative"
        );
    }
}
