//! # Approval Policy
//!
//! Decides at submission time whether a request is applied immediately.

use shared_types::Address;

/// Outcome of the approval policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApprovalDecision {
    /// Apply the effect now and store the request as approved.
    AutoApprove,
    /// Store the request as pending until the coordinator settles it.
    Pending,
}

impl ApprovalDecision {
    pub fn is_auto_approved(&self) -> bool {
        matches!(self, Self::AutoApprove)
    }
}

/// Auto-approve iff the creator is the launch coordinator's address,
/// resolved at submission time.
pub fn approval_decision(creator: &Address, coordinator_address: &Address) -> ApprovalDecision {
    if creator == coordinator_address {
        ApprovalDecision::AutoApprove
    } else {
        ApprovalDecision::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinator_is_auto_approved() {
        let coordinator = Address::new([1u8; 20]);
        assert_eq!(
            approval_decision(&coordinator, &coordinator),
            ApprovalDecision::AutoApprove
        );
    }

    #[test]
    fn test_other_creator_is_pending() {
        let coordinator = Address::new([1u8; 20]);
        let other = Address::new([2u8; 20]);
        let decision = approval_decision(&other, &coordinator);
        assert_eq!(decision, ApprovalDecision::Pending);
        assert!(!decision.is_auto_approved());
    }
}
