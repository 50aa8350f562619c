//! # Registration Draft Document
//!
//! Serde shape for a whole draft: enterprise kind, the filer's
//! company-level disclosures, and the participant list. This is the
//! JSON the CLI loads and the UI persists between sessions.

use serde::{Deserialize, Serialize};

use imali_core::{CompanyFlags, EnterpriseKind};

use crate::participant::Participant;
use crate::registry::ParticipantRegistry;

/// A business-registration draft as serialized to JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub enterprise_kind: EnterpriseKind,
    #[serde(default)]
    pub flags: CompanyFlags,
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl RegistrationDraft {
    /// Build a keyed registry from the draft's participant list,
    /// preserving order.
    pub fn into_registry(self) -> (EnterpriseKind, CompanyFlags, ParticipantRegistry) {
        let mut registry = ParticipantRegistry::new();
        for participant in self.participants {
            registry.add(participant);
        }
        (self.enterprise_kind, self.flags, registry)
    }

    /// Snapshot a registry back into a serializable draft.
    pub fn from_registry(
        enterprise_kind: EnterpriseKind,
        flags: CompanyFlags,
        registry: &ParticipantRegistry,
    ) -> Self {
        Self {
            enterprise_kind,
            flags,
            participants: registry.participants().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_participant;
    use imali_core::Role;

    #[test]
    fn test_draft_round_trip() {
        let mut registry = ParticipantRegistry::new();
        registry.add(sample_participant(Role::Manager, 40.0));
        registry.add(sample_participant(Role::Associate, 60.0));

        let draft = RegistrationDraft::from_registry(
            EnterpriseKind::Company,
            CompanyFlags::default(),
            &registry,
        );
        let json = serde_json::to_string_pretty(&draft).unwrap();
        let parsed: RegistrationDraft = serde_json::from_str(&json).unwrap();
        let (kind, _, rebuilt) = parsed.into_registry();

        assert_eq!(kind, EnterpriseKind::Company);
        assert_eq!(rebuilt.len(), 2);
        let roles: Vec<Role> = rebuilt.participants().map(|p| p.role).collect();
        assert_eq!(roles, vec![Role::Manager, Role::Associate]);
    }

    #[test]
    fn test_minimal_draft_parses() {
        let json = r#"{"enterprise_kind": "INDIVIDUAL"}"#;
        let draft: RegistrationDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.enterprise_kind, EnterpriseKind::Individual);
        assert!(draft.participants.is_empty());
    }
}
