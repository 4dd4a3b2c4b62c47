//! Editing roles and the capabilities granted to them.

use std::collections::BTreeSet;

use crate::authority::Capability;

/// Role id used when none is given.
pub const STUDENT: &str = "student";

/// Role id that is granted every capability by default.
pub const TEACHER: &str = "teacher";

/// An editing role. The grant set is fixed at construction; build a new
/// `Role` to change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: String,
    granted: BTreeSet<Capability>,
}

impl Role {
    /// Create a role with its default grants. Only [`TEACHER`] starts with
    /// capabilities; every other id, recognized or not, gets none.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let granted = if id == TEACHER {
            Capability::all().iter().copied().collect()
        } else {
            BTreeSet::new()
        };
        Self { id, granted }
    }

    /// Create a role with an explicit grant set, overriding the defaults.
    pub fn with_capabilities(
        id: impl Into<String>,
        capabilities: impl IntoIterator<Item = Capability>,
    ) -> Self {
        Self {
            id: id.into(),
            granted: capabilities.into_iter().collect(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether this role holds `capability`.
    pub fn query(&self, capability: Capability) -> bool {
        self.granted.contains(&capability)
    }

    /// Granted capabilities in a stable order.
    pub fn capabilities(&self) -> impl Iterator<Item = Capability> + '_ {
        self.granted.iter().copied()
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::new(STUDENT)
    }
}
