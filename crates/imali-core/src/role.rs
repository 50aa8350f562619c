//! # Participant Roles
//!
//! The three roles a participant can hold in a company being registered.
//! Wire names keep the registry's French vocabulary so payloads stay
//! compatible with the backend (`GERANT`, `DIRIGEANT`, `ASSOCIE`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Role of a participant in the company under registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Statutory manager of the company (GERANT). Carries the full
    /// leadership document obligations.
    #[serde(rename = "GERANT")]
    Manager,
    /// Executive officer (DIRIGEANT). Manager-grade when the enterprise
    /// is a sole proprietorship.
    #[serde(rename = "DIRIGEANT")]
    Executive,
    /// Plain shareholder (ASSOCIE). Identity document only.
    #[serde(rename = "ASSOCIE")]
    Associate,
}

impl Role {
    /// All roles, in declaration order.
    pub fn all() -> [Role; 3] {
        [Role::Manager, Role::Executive, Role::Associate]
    }

    /// Whether this role participates in the 100% equity sum.
    ///
    /// All three roles bear shares today; the predicate exists so the
    /// allocation and validation code reads as intent rather than as an
    /// accident of the current role set.
    pub fn is_share_bearing(&self) -> bool {
        matches!(self, Role::Manager | Role::Executive | Role::Associate)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Manager => "GERANT",
            Self::Executive => "DIRIGEANT",
            Self::Associate => "ASSOCIE",
        };
        f.write_str(s)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GERANT" => Ok(Self::Manager),
            "DIRIGEANT" => Ok(Self::Executive),
            "ASSOCIE" => Ok(Self::Associate),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Error returned when parsing an unrecognized role string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown participant role: {0:?}")]
pub struct UnknownRole(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for role in Role::all() {
            let parsed: Role = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_serde_uses_registry_vocabulary() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"GERANT\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"DIRIGEANT\"").unwrap(),
            Role::Executive
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        assert!("PRESIDENT".parse::<Role>().is_err());
    }

    #[test]
    fn test_every_role_bears_shares() {
        for role in Role::all() {
            assert!(role.is_share_bearing());
        }
    }
}
