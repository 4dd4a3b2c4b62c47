//! Editing capabilities a role may be granted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A named editing permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Lock a block against editing
    Lock,
    /// Hide a block from other roles
    Invisible,
}

impl Capability {
    /// Get the wire identifier of this capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::Lock => "lock",
            Capability::Invisible => "invisible",
        }
    }

    /// Get every known capability.
    pub fn all() -> &'static [Capability] {
        &[Capability::Lock, Capability::Invisible]
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown capability '{0}'")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::all()
            .iter()
            .copied()
            .find(|cap| cap.as_str() == s)
            .ok_or_else(|| UnknownCapability(s.to_string()))
    }
}

/// Whether `role` holds the capability named `capability_id`.
///
/// Unknown identifiers are never granted.
pub fn has_authority(role: &Role, capability_id: &str) -> bool {
    capability_id
        .parse::<Capability>()
        .map(|cap| role.query(cap))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_ids() {
        assert_eq!("lock".parse::<Capability>(), Ok(Capability::Lock));
        assert_eq!("invisible".parse::<Capability>(), Ok(Capability::Invisible));
        assert!("Lock".parse::<Capability>().is_err());
        for cap in Capability::all() {
            assert_eq!(cap.as_str().parse::<Capability>(), Ok(*cap));
        }
    }

    #[test]
    fn test_has_authority() {
        let teacher = Role::new("teacher");
        assert!(has_authority(&teacher, "lock"));
        assert!(has_authority(&teacher, "invisible"));
        assert!(!has_authority(&teacher, "delete"));

        let student = Role::new("student");
        assert!(!has_authority(&student, "lock"));
        assert!(!has_authority(&student, "invisible"));
    }
}
