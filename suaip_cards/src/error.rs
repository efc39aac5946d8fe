// Copyright 2025 the Suaip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use crate::role::CardRole;

/// Error returned when a card group is created without a required card.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConfigError {
    /// The first required role with no card.
    pub missing: CardRole,
}

impl ConfigError {
    pub(crate) const fn missing(role: CardRole) -> Self {
        Self { missing: role }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid config: missing {} card",
            self.missing.class_name()
        )
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_the_role() {
        let err = ConfigError::missing(CardRole::After);
        assert_eq!(err.to_string(), "Invalid config: missing after card");
    }
}
