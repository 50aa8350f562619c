//! # Equity Auto-Distribution
//!
//! Tops up unassigned share percentage equally across share-bearing
//! participants. This is an additive top-up, not a renormalization:
//! existing unequal allocations keep their absolute values and only the
//! residual is split evenly.

use crate::registry::ParticipantRegistry;

/// Residual below which the registry counts as balanced and the
/// distribution is a no-op. Absorbs the rounding noise of repeated
/// two-decimal top-ups.
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Outcome of one auto-distribution pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AllocationOutcome {
    /// `|100 − sum|` was already below [`BALANCE_TOLERANCE`]; shares
    /// untouched.
    AlreadyBalanced,
    /// No share-bearing participants to distribute to; shares untouched.
    NoShareBearers,
    /// The residual was split across `recipients` participants,
    /// `per_participant` points each (before per-share rounding).
    Distributed {
        per_participant: f64,
        recipients: usize,
    },
}

/// Round to two decimal places, the precision the share fields carry.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Distribute the unassigned share percentage equally across all
/// share-bearing participants.
///
/// Computes `remaining = 100 − sum(current shares)`. Within
/// [`BALANCE_TOLERANCE`] the call is a no-op; otherwise every
/// share-bearing participant's share is topped up by
/// `remaining / count`, each result rounded to two decimals. Repeated
/// calls converge: once the residual is within tolerance, shares no
/// longer change.
pub fn auto_distribute(registry: &mut ParticipantRegistry) -> AllocationOutcome {
    let recipients = registry
        .participants()
        .filter(|p| p.role.is_share_bearing())
        .count();
    if recipients == 0 {
        return AllocationOutcome::NoShareBearers;
    }

    let remaining = 100.0 - registry.share_sum();
    if remaining.abs() < BALANCE_TOLERANCE {
        return AllocationOutcome::AlreadyBalanced;
    }

    let per_participant = remaining / recipients as f64;
    for participant in registry.participants_mut() {
        if participant.role.is_share_bearing() {
            participant.share_percentage = round2(participant.share_percentage + per_participant);
        }
    }

    tracing::debug!(
        remaining,
        recipients,
        per_participant,
        "distributed residual equity across participants"
    );

    AllocationOutcome::Distributed {
        per_participant,
        recipients,
    }
}
