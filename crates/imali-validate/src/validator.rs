//! # Eligibility Validator
//!
//! Runs the full rule set over a registry and returns the ordered list
//! of violations. Check order is fixed so the surfaced block list (and
//! test assertions against it) are deterministic:
//!
//! 1. registry non-empty
//! 2. per-participant age gate
//! 3. enterprise-kind cardinality and forced role/share
//! 4. manager cardinality
//! 5. executive presence
//! 6. equity sum within ±1 of 100
//! 7. identity triplet completeness
//! 8. conditional document completeness

use chrono::NaiveDate;

use imali_core::{CompanyFlags, DocKind, EnterpriseKind, Role};
use imali_registry::ParticipantRegistry;
use imali_rules::{required_documents, ManagerLimit, ParticipantLimit, RoleRuleSet};

use crate::violation::{Violation, ViolationCode};

/// Tolerance on the equity sum, absorbing floating-point rounding from
/// repeated two-decimal top-ups.
const SHARE_SUM_TOLERANCE: f64 = 1.0;

/// Tolerance when comparing an individual share against a forced value.
const SHARE_EQ_TOLERANCE: f64 = 0.01;

/// Validate a registry against the composition rules.
///
/// Never fails; an empty list means the draft may proceed to the next
/// registration step. `today` anchors the age computation so callers
/// (and tests) control the clock.
pub fn validate(
    registry: &ParticipantRegistry,
    kind: EnterpriseKind,
    flags: &CompanyFlags,
    today: NaiveDate,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    // 1. A draft with nobody in it cannot go anywhere; the remaining
    //    checks are meaningless on an empty registry.
    if registry.is_empty() {
        violations.push(Violation::new(
            ViolationCode::EmptyRegistry,
            "at least one participant is required before the draft can proceed",
        ));
        return violations;
    }

    let rules = RoleRuleSet::for_enterprise(kind, flags);

    // 2. Age gate, calendar-correct to the day.
    for participant in registry.participants() {
        if !participant.is_adult_on(today) {
            violations.push(Violation::new(
                ViolationCode::Underage,
                format!(
                    "participant {} must be at least 18 years old on the validation date",
                    participant.name
                ),
            ));
        }
    }

    // 3. Enterprise-kind cardinality and forced role/share.
    if !rules.fits_participant_count(registry.len()) {
        let limit = match rules.participant_limit {
            ParticipantLimit::Max(n) => n,
            // Unbounded never fails the fit check.
            ParticipantLimit::Unbounded => u32::MAX,
        };
        violations.push(Violation::new(
            ViolationCode::TooManyParticipants,
            format!(
                "a {kind} registration allows at most {limit} participant(s), found {}",
                registry.len()
            ),
        ));
    }
    for participant in registry.participants() {
        if !rules.allows(participant.role) {
            violations.push(Violation::new(
                ViolationCode::RoleNotAllowed,
                format!(
                    "role {} is not available for a {kind} registration (participant {})",
                    participant.role, participant.name
                ),
            ));
        }
        if let Some(forced) = rules.forced_role {
            if participant.role != forced {
                violations.push(Violation::new(
                    ViolationCode::ForcedRoleMismatch,
                    format!(
                        "participant {} must hold the {forced} role for a {kind} registration",
                        participant.name
                    ),
                ));
            }
        }
        if let Some(forced_share) = rules.forced_share {
            if (participant.share_percentage - forced_share).abs() > SHARE_EQ_TOLERANCE {
                violations.push(Violation::new(
                    ViolationCode::ForcedShareMismatch,
                    format!(
                        "participant {} must hold {forced_share}% of the shares, found {}%",
                        participant.name, participant.share_percentage
                    ),
                ));
            }
        }
    }

    // 4. Manager cardinality, only where the manager role exists at all.
    if rules.allows(Role::Manager) {
        let managers = registry.count_role(Role::Manager);
        if !rules.fits_manager_count(managers) {
            let message = match rules.manager_limit {
                ManagerLimit::Exactly(n) => format!(
                    "exactly {n} manager(s) (GERANT) required, found {managers}"
                ),
                ManagerLimit::Unbounded => format!(
                    "at least one manager (GERANT) is required, found {managers}"
                ),
            };
            violations.push(Violation::new(ViolationCode::ManagerCardinality, message));
        }
    }

    // 5. Executive presence.
    if rules.require_executive && registry.count_role(Role::Executive) == 0 {
        violations.push(Violation::new(
            ViolationCode::MissingExecutive,
            "at least one executive (DIRIGEANT) is required",
        ));
    }

    // 6. Equity sum.
    let sum = registry.share_sum();
    if (sum - 100.0).abs() > SHARE_SUM_TOLERANCE {
        violations.push(Violation::new(
            ViolationCode::ShareSum,
            format!("share percentages sum to {sum}%, expected 100%"),
        ));
    }

    // 7. Identity triplet completeness.
    for participant in registry.participants() {
        if !participant.identity.is_complete() {
            violations.push(Violation::new(
                ViolationCode::IncompleteIdentity,
                format!(
                    "participant {} is missing the identity document (type, number and scan are all required)",
                    participant.name
                ),
            ));
        }
    }

    // 8. Conditional documents, evaluated against the filer's
    //    company-level disclosures. Identity is already covered by 7.
    for participant in registry.participants() {
        let required = required_documents(participant.role, kind, flags);
        for doc in required {
            if doc == DocKind::Identity {
                continue;
            }
            if !participant.has_document(doc) {
                violations.push(Violation::new(
                    ViolationCode::MissingDocument,
                    format!("participant {} is missing the {doc}", participant.name),
                ));
            }
        }
    }

    if !violations.is_empty() {
        tracing::debug!(
            count = violations.len(),
            %kind,
            participants = registry.len(),
            "registry failed eligibility validation"
        );
    }

    violations
}
