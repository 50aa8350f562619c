//! # Role and Cardinality Constraints
//!
//! Derives the constraint record for an enterprise kind: which roles may
//! appear, how many managers are allowed, whether an executive is
//! mandatory, and the forced role/share of a sole proprietorship.

use std::collections::BTreeSet;

use imali_core::{CompanyFlags, EnterpriseKind, Role};

/// How many managers the registry may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerLimit {
    /// Exactly this many managers are required.
    Exactly(u32),
    /// Any number of managers, but at least one.
    Unbounded,
}

/// How many participants the registry may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantLimit {
    /// At most this many participants.
    Max(u32),
    /// No upper bound.
    Unbounded,
}

/// The constraint record for one enterprise kind.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleRuleSet {
    /// Roles a participant may hold in this registration.
    pub allowed_roles: BTreeSet<Role>,
    /// Manager cardinality. Not applicable when the manager role itself
    /// is not allowed (sole proprietorships).
    pub manager_limit: ManagerLimit,
    /// Whether at least one executive must be present.
    pub require_executive: bool,
    /// Participant cardinality.
    pub participant_limit: ParticipantLimit,
    /// Role every participant is forced into, if any.
    pub forced_role: Option<Role>,
    /// Share percentage forced onto the forced role, if any.
    pub forced_share: Option<f64>,
}

impl RoleRuleSet {
    /// Derive the constraints for an enterprise kind and the filer's
    /// company-level flags.
    pub fn for_enterprise(kind: EnterpriseKind, flags: &CompanyFlags) -> Self {
        match kind {
            EnterpriseKind::Individual => Self {
                allowed_roles: [Role::Executive].into_iter().collect(),
                manager_limit: ManagerLimit::Exactly(0),
                require_executive: true,
                participant_limit: ParticipantLimit::Max(1),
                forced_role: Some(Role::Executive),
                forced_share: Some(100.0),
            },
            EnterpriseKind::Company => Self {
                allowed_roles: Role::all().into_iter().collect(),
                manager_limit: if flags.allows_multiple_managers {
                    ManagerLimit::Unbounded
                } else {
                    ManagerLimit::Exactly(1)
                },
                require_executive: true,
                participant_limit: ParticipantLimit::Unbounded,
                forced_role: None,
                forced_share: None,
            },
        }
    }

    /// Whether the given role may appear under these constraints.
    pub fn allows(&self, role: Role) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Whether a registry of `count` participants fits the cardinality
    /// constraint.
    pub fn fits_participant_count(&self, count: usize) -> bool {
        match self.participant_limit {
            ParticipantLimit::Max(max) => count <= max as usize,
            ParticipantLimit::Unbounded => true,
        }
    }

    /// Whether `count` managers satisfy the manager cardinality.
    pub fn fits_manager_count(&self, count: usize) -> bool {
        match self.manager_limit {
            ManagerLimit::Exactly(n) => count == n as usize,
            ManagerLimit::Unbounded => count >= 1,
        }
    }
}
