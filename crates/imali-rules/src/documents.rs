//! # Conditional Document Requirements
//!
//! The rule table deciding which supporting documents a participant owes.
//! Requirements depend on the participant's role, the enterprise kind,
//! and the **filer's** company-level disclosures — criminal record and
//! marital status are declared once by the filer and inherited by every
//! manager-grade participant, not stored per person. That coupling is an
//! explicit parameter here so it can never be silently defaulted.

use std::collections::BTreeSet;

use imali_core::{CompanyFlags, DocKind, EnterpriseKind, MaritalStatus, Role};

/// Whether a role carries the leadership document obligations.
///
/// Managers always do. Executives do only when the enterprise is a sole
/// proprietorship, where the single executive is the legal face of the
/// business.
pub fn manager_grade(role: Role, kind: EnterpriseKind) -> bool {
    match role {
        Role::Manager => true,
        Role::Executive => kind == EnterpriseKind::Individual,
        Role::Associate => false,
    }
}

/// The marital status a manager-grade participant carries, derived from
/// the filer's disclosure rather than chosen on the form. Non-manager-
/// grade participants keep whatever was selected for them.
pub fn derived_marital_status(
    role: Role,
    kind: EnterpriseKind,
    flags: &CompanyFlags,
    selected: Option<MaritalStatus>,
) -> Option<MaritalStatus> {
    if manager_grade(role, kind) {
        Some(if flags.is_married {
            MaritalStatus::Married
        } else {
            MaritalStatus::Single
        })
    } else {
        selected
    }
}

/// The full document set a participant owes.
///
/// | Condition | Required |
/// |---|---|
/// | always | identity document |
/// | manager-grade | birth certificate |
/// | manager-grade, record disclosed | criminal record extract |
/// | manager-grade, no record | honor declaration + signature capture |
/// | manager-grade, married | marriage certificate |
///
/// Plain associates in a company owe only the identity document.
pub fn required_documents(
    role: Role,
    kind: EnterpriseKind,
    flags: &CompanyFlags,
) -> BTreeSet<DocKind> {
    let mut required = BTreeSet::new();
    required.insert(DocKind::Identity);

    if !manager_grade(role, kind) {
        return required;
    }

    required.insert(DocKind::BirthCertificate);
    if flags.has_criminal_record {
        required.insert(DocKind::CriminalRecord);
    } else {
        required.insert(DocKind::HonorDeclaration);
        required.insert(DocKind::HonorSignature);
    }
    if flags.is_married {
        required.insert(DocKind::MarriageCertificate);
    }

    required
}
