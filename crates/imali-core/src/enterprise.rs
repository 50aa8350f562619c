//! # Enterprise Kind and Company-Level Disclosures
//!
//! The two legal shapes a registration can take, and the filer-level
//! disclosure flags that drive document requirements for every
//! manager-grade participant.

use serde::{Deserialize, Serialize};

/// The legal shape of the enterprise being registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnterpriseKind {
    /// Sole proprietorship: exactly one participant, forced to the
    /// executive role with 100% of the shares.
    #[serde(rename = "INDIVIDUAL")]
    Individual,
    /// Multi-participant legal entity.
    #[serde(rename = "COMPANY")]
    Company,
}

impl std::fmt::Display for EnterpriseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Individual => "INDIVIDUAL",
            Self::Company => "COMPANY",
        };
        f.write_str(s)
    }
}

/// Company-level disclosure flags declared by the filer.
///
/// `is_married` and `has_criminal_record` are properties of the filer,
/// inherited by every manager-grade participant the filer inserts. They
/// are deliberately an explicit input everywhere they matter — never a
/// silent default — so the filer's declaration and the company record
/// cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyFlags {
    /// Filer declared being married. Manager-grade participants must then
    /// supply a marriage certificate.
    #[serde(default)]
    pub is_married: bool,
    /// Filer disclosed a criminal record. Manager-grade participants must
    /// then supply the criminal-record extract; otherwise an honor
    /// declaration with a signature capture substitutes for it.
    #[serde(default)]
    pub has_criminal_record: bool,
    /// Statutes allow more than one manager.
    #[serde(default)]
    pub allows_multiple_managers: bool,
}
