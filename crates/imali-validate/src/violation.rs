//! # Violations
//!
//! One violation per broken rule, carrying a machine-readable code and
//! the human-readable message the portal surfaces as a block list.

use serde::{Deserialize, Serialize};

/// Machine-readable classification of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationCode {
    /// The registry holds no participants at all.
    #[serde(rename = "EMPTY_REGISTRY")]
    EmptyRegistry,
    /// A participant is under 18 on the validation date.
    #[serde(rename = "UNDERAGE")]
    Underage,
    /// A participant holds a role the enterprise kind does not allow.
    #[serde(rename = "ROLE_NOT_ALLOWED")]
    RoleNotAllowed,
    /// The registry exceeds the participant cardinality.
    #[serde(rename = "TOO_MANY_PARTICIPANTS")]
    TooManyParticipants,
    /// A participant escaped the role forced by the enterprise kind.
    #[serde(rename = "FORCED_ROLE_MISMATCH")]
    ForcedRoleMismatch,
    /// The forced share value is not honored.
    #[serde(rename = "FORCED_SHARE_MISMATCH")]
    ForcedShareMismatch,
    /// Manager count is outside the allowed cardinality.
    #[serde(rename = "MANAGER_CARDINALITY")]
    ManagerCardinality,
    /// No executive is present where one is required.
    #[serde(rename = "MISSING_EXECUTIVE")]
    MissingExecutive,
    /// Share percentages do not sum to 100 within tolerance.
    #[serde(rename = "SHARE_SUM")]
    ShareSum,
    /// The identity document triplet is incomplete.
    #[serde(rename = "INCOMPLETE_IDENTITY")]
    IncompleteIdentity,
    /// A conditionally required document is missing.
    #[serde(rename = "MISSING_DOCUMENT")]
    MissingDocument,
}

/// One broken rule, ready to surface to the filer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Classification for programmatic handling.
    pub code: ViolationCode,
    /// The message shown in the block list.
    pub message: String,
}

impl Violation {
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_message() {
        let v = Violation::new(ViolationCode::ShareSum, "shares sum to 90%, expected 100%");
        assert_eq!(v.to_string(), "shares sum to 90%, expected 100%");
    }

    #[test]
    fn test_code_wire_names() {
        assert_eq!(
            serde_json::to_string(&ViolationCode::ManagerCardinality).unwrap(),
            "\"MANAGER_CARDINALITY\""
        );
    }
}
