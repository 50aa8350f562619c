//! # Participant Registry
//!
//! Ordered collection of participants for one registration draft,
//! addressed by stable [`ParticipantKey`]s. Insertion order is preserved
//! so validation messages and the persistence saga walk the list the way
//! the filer built it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use imali_core::{ParticipantKey, PersonId, Role};

use crate::participant::Participant;

/// Errors from mechanical registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The key does not refer to any participant in this draft.
    #[error("no participant with key {0}")]
    UnknownKey(ParticipantKey),
}

/// One keyed row of the registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Stable local key, generated at insertion.
    pub key: ParticipantKey,
    /// The participant record.
    pub participant: Participant,
}

/// The ordered participant collection for one registration draft.
///
/// Lives only as long as the draft; discarded once the application is
/// submitted. Enforces no legal rules — see the validator crate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticipantRegistry {
    entries: Vec<RegistryEntry>,
}

impl ParticipantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of participants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no participants.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a participant, returning its generated key.
    pub fn add(&mut self, participant: Participant) -> ParticipantKey {
        let key = ParticipantKey::new();
        self.entries.push(RegistryEntry { key, participant });
        key
    }

    /// Look up a participant by key.
    pub fn get(&self, key: ParticipantKey) -> Option<&Participant> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| &e.participant)
    }

    /// Edit a participant in place.
    pub fn update<F>(&mut self, key: ParticipantKey, edit: F) -> Result<(), RegistryError>
    where
        F: FnOnce(&mut Participant),
    {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.key == key)
            .ok_or(RegistryError::UnknownKey(key))?;
        edit(&mut entry.participant);
        Ok(())
    }

    /// Replace a participant wholesale, keeping its key and position.
    pub fn replace(
        &mut self,
        key: ParticipantKey,
        participant: Participant,
    ) -> Result<(), RegistryError> {
        self.update(key, |p| *p = participant)
    }

    /// Remove a participant, returning the removed record.
    pub fn remove(&mut self, key: ParticipantKey) -> Result<Participant, RegistryError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.key == key)
            .ok_or(RegistryError::UnknownKey(key))?;
        Ok(self.entries.remove(position).participant)
    }

    /// Record the person identifier assigned by the backend.
    pub fn mark_persisted(
        &mut self,
        key: ParticipantKey,
        person_id: PersonId,
    ) -> Result<(), RegistryError> {
        self.update(key, |p| p.person_id = Some(person_id))
    }

    /// Iterate over `(key, participant)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ParticipantKey, &Participant)> {
        self.entries.iter().map(|e| (e.key, &e.participant))
    }

    /// Iterate over participants in insertion order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.entries.iter().map(|e| &e.participant)
    }

    /// Mutable iteration, used by the allocation engine.
    pub(crate) fn participants_mut(&mut self) -> impl Iterator<Item = &mut Participant> {
        self.entries.iter_mut().map(|e| &mut e.participant)
    }

    /// Count participants holding the given role.
    pub fn count_role(&self, role: Role) -> usize {
        self.participants().filter(|p| p.role == role).count()
    }

    /// Sum of share percentages over share-bearing roles.
    pub fn share_sum(&self) -> f64 {
        self.participants()
            .filter(|p| p.role.is_share_bearing())
            .map(|p| p.share_percentage)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_participant;

    #[test]
    fn test_add_assigns_distinct_keys_in_order() {
        let mut reg = ParticipantRegistry::new();
        let a = reg.add(sample_participant(Role::Manager, 50.0));
        let b = reg.add(sample_participant(Role::Associate, 50.0));
        assert_ne!(a, b);
        let keys: Vec<_> = reg.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![a, b]);
    }

    #[test]
    fn test_update_edits_in_place() {
        let mut reg = ParticipantRegistry::new();
        let key = reg.add(sample_participant(Role::Associate, 10.0));
        reg.update(key, |p| p.share_percentage = 25.0).unwrap();
        assert_eq!(reg.get(key).unwrap().share_percentage, 25.0);
    }

    #[test]
    fn test_keys_survive_removal_of_earlier_entries() {
        // The index-shift bug the stable keys exist to prevent: removing
        // the first entry must not retarget a key held for the second.
        let mut reg = ParticipantRegistry::new();
        let first = reg.add(sample_participant(Role::Manager, 40.0));
        let second = reg.add(sample_participant(Role::Executive, 60.0));

        reg.remove(first).unwrap();
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get(second).unwrap().role, Role::Executive);
        assert!(reg.get(first).is_none());
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let mut reg = ParticipantRegistry::new();
        let key = reg.add(sample_participant(Role::Associate, 0.0));
        reg.remove(key).unwrap();
        assert!(matches!(
            reg.remove(key),
            Err(RegistryError::UnknownKey(_))
        ));
        assert!(matches!(
            reg.update(key, |_| {}),
            Err(RegistryError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_mark_persisted_sets_person_id() {
        let mut reg = ParticipantRegistry::new();
        let key = reg.add(sample_participant(Role::Associate, 0.0));
        assert!(!reg.get(key).unwrap().is_persisted());
        reg.mark_persisted(key, PersonId("p-77".into())).unwrap();
        assert_eq!(
            reg.get(key).unwrap().person_id,
            Some(PersonId("p-77".into()))
        );
    }

    #[test]
    fn test_role_count_and_share_sum() {
        let mut reg = ParticipantRegistry::new();
        reg.add(sample_participant(Role::Manager, 10.0));
        reg.add(sample_participant(Role::Executive, 60.0));
        reg.add(sample_participant(Role::Associate, 30.0));
        assert_eq!(reg.count_role(Role::Manager), 1);
        assert_eq!(reg.count_role(Role::Associate), 1);
        assert!((reg.share_sum() - 100.0).abs() < f64::EPSILON);
    }
}
