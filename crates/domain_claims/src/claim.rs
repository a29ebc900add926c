//! Claim aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, Currency, Money, UserId};

use crate::error::ClaimError;
use crate::work_entry::WorkSummary;

/// Claim status
///
/// A closed set: status names arriving from callers are resolved to this
/// enum once at the boundary and never compared as strings inside the
/// domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Submitted, awaiting a decision
    Pending,
    /// Approved for payment
    Approved,
    /// Rejected by a reviewer
    Rejected,
}

impl ClaimStatus {
    /// Returns the catalog name of this status
    pub fn name(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Approved => "Approved",
            ClaimStatus::Rejected => "Rejected",
        }
    }

    /// Resolves a catalog name, case-sensitively
    pub fn resolve(name: &str) -> Option<Self> {
        match name {
            "Pending" => Some(ClaimStatus::Pending),
            "Approved" => Some(ClaimStatus::Approved),
            "Rejected" => Some(ClaimStatus::Rejected),
            _ => None,
        }
    }

    /// Approved and Rejected are terminal; no transition leads out of them
    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Rejected)
    }
}

/// A monthly claim for contracted hourly work
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,
    /// The lecturer who submitted the claim
    pub claimant_id: UserId,
    /// Status
    pub status: ClaimStatus,
    /// Free-text category (e.g. "Tutoring", "Marking")
    pub claim_type: String,
    /// Claimed amount; equals hours worked at the hourly rate when submitted
    pub amount: Money,
    /// Total hours worked over the claim period
    pub hours_worked: Decimal,
    /// Contracted hourly rate
    pub hourly_rate: Decimal,
    /// When the claim was submitted
    pub submission_date: DateTime<Utc>,
    /// When the claim was resolved; None while pending
    pub approval_date: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Claim {
    /// Creates a new Pending claim from aggregated work entries
    pub fn submitted(
        claimant_id: UserId,
        claim_type: impl Into<String>,
        hourly_rate: Decimal,
        summary: &WorkSummary,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: ClaimId::new_v7(),
            claimant_id,
            status: ClaimStatus::Pending,
            claim_type: claim_type.into(),
            amount: summary.amount,
            hours_worked: summary.total_hours,
            hourly_rate,
            submission_date: now,
            approval_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Recomputes the claim amount from hours and rate
    ///
    /// The stored amount is never trusted for decisions; callers compare
    /// against or use this value instead.
    pub fn computed_amount(&self) -> Money {
        Money::new(self.hourly_rate, self.currency()).multiply(self.hours_worked)
    }

    /// Returns the currency the claim is denominated in
    pub fn currency(&self) -> Currency {
        self.amount.currency()
    }

    /// Updates the status
    ///
    /// Resolving a claim stamps the approval date. Terminal statuses
    /// cannot transition further.
    pub fn update_status(&mut self, status: ClaimStatus) -> Result<(), ClaimError> {
        if !self.can_transition_to(status) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.name().to_string(),
                to: status.name().to_string(),
            });
        }
        self.status = status;
        let now = Utc::now();
        if status.is_terminal() {
            self.approval_date = Some(now);
        }
        self.updated_at = now;
        Ok(())
    }

    /// Checks if transition is valid
    fn can_transition_to(&self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        matches!(
            (self.status, target),
            (Pending, Approved) | (Pending, Rejected)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn summary() -> WorkSummary {
        WorkSummary {
            total_hours: dec!(10),
            amount: Money::new(dec!(2000), Currency::ZAR),
        }
    }

    #[test]
    fn test_submitted_claim_is_pending() {
        let claim = Claim::submitted(UserId::new(), "Tutoring", dec!(200), &summary());
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert!(claim.approval_date.is_none());
        assert_eq!(claim.hours_worked, dec!(10));
    }

    #[test]
    fn test_resolving_stamps_approval_date() {
        let mut claim = Claim::submitted(UserId::new(), "Tutoring", dec!(200), &summary());
        claim.update_status(ClaimStatus::Approved).unwrap();
        assert!(claim.approval_date.is_some());
    }

    #[test]
    fn test_terminal_claim_cannot_transition() {
        let mut claim = Claim::submitted(UserId::new(), "Tutoring", dec!(200), &summary());
        claim.update_status(ClaimStatus::Rejected).unwrap();
        let result = claim.update_status(ClaimStatus::Approved);
        assert!(matches!(
            result,
            Err(ClaimError::InvalidStatusTransition { .. })
        ));
    }

    #[test]
    fn test_status_resolve_is_case_sensitive() {
        assert_eq!(ClaimStatus::resolve("Approved"), Some(ClaimStatus::Approved));
        assert_eq!(ClaimStatus::resolve("approved"), None);
        assert_eq!(ClaimStatus::resolve("APPROVED"), None);
    }

    #[test]
    fn test_computed_amount_uses_hours_and_rate() {
        let claim = Claim::submitted(UserId::new(), "Marking", dec!(200), &summary());
        assert_eq!(claim.computed_amount().amount(), dec!(2000));
    }
}
