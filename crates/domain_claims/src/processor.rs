//! Claim processing and the auto-approval decision engine
//!
//! A pending claim is processed in stages: field validation, the
//! supporting-document gate, then three independent risk predicates.
//! Only a claim passing all three is approved automatically; anything
//! else stays Pending for a reviewer.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::sync::Arc;

use core_kernel::{ClaimId, UserId};

use crate::claim::{Claim, ClaimStatus};
use crate::error::ClaimError;
use crate::ports::ClaimStore;
use crate::validation::ClaimValidator;

/// Lower bound of the standard-rate band eligible for auto-approval
pub const STANDARD_RATE_MIN: Decimal = dec!(150);
/// Upper bound of the standard-rate band; tighter than the validator's
/// contract ceiling on purpose
pub const STANDARD_RATE_MAX: Decimal = dec!(250);
/// Hours above this need a human decision
pub const ROUTINE_HOURS_LIMIT: Decimal = dec!(20);
/// Amounts above this need a human decision
pub const LOW_RISK_AMOUNT_LIMIT: Decimal = dec!(5000);

/// Result of processing a claim
///
/// `success` means "processed without error" - a claim held for manual
/// review still processes successfully.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    pub success: bool,
    pub message: String,
    pub auto_approved: bool,
}

/// The three independent auto-approval predicates
#[derive(Debug, Clone, Copy)]
struct AutoApprovalCheck {
    standard_rate: bool,
    routine_hours: bool,
    low_risk_amount: bool,
}

impl AutoApprovalCheck {
    /// Evaluates the predicates against an already-validated claim
    ///
    /// The amount predicate uses the recomputed amount, not the stored
    /// field.
    fn evaluate(claim: &Claim) -> Self {
        Self {
            standard_rate: claim.hourly_rate >= STANDARD_RATE_MIN
                && claim.hourly_rate <= STANDARD_RATE_MAX,
            routine_hours: claim.hours_worked <= ROUTINE_HOURS_LIMIT,
            low_risk_amount: claim.computed_amount().amount() <= LOW_RISK_AMOUNT_LIMIT,
        }
    }

    fn all_pass(&self) -> bool {
        self.standard_rate && self.routine_hours && self.low_risk_amount
    }

    /// Names the failed predicates, in fixed order: rate, hours, amount
    fn review_reasons(&self) -> Vec<&'static str> {
        let mut reasons = Vec::new();
        if !self.standard_rate {
            reasons.push("Non-standard rate");
        }
        if !self.routine_hours {
            reasons.push("Extended hours");
        }
        if !self.low_risk_amount {
            reasons.push("High claim amount");
        }
        reasons
    }
}

/// Orchestrates validation, the document gate, and the auto-approval
/// decision for pending claims
pub struct ClaimProcessor {
    store: Arc<dyn ClaimStore>,
}

impl ClaimProcessor {
    /// Creates a new processor over the given store
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Processes a pending claim
    ///
    /// Writes only on the auto-approval path; every other branch leaves
    /// the claim untouched. Claims that are no longer Pending are
    /// refused rather than silently reprocessed.
    ///
    /// # Errors
    ///
    /// `ClaimNotFound` if the id does not resolve, `AlreadyResolved` for
    /// terminal claims, `Store` for persistence failures.
    pub async fn process_claim(
        &self,
        claim_id: ClaimId,
        actor_id: UserId,
    ) -> Result<ProcessOutcome, ClaimError> {
        let mut claim = self
            .store
            .find_claim(claim_id)
            .await
            .map_err(|e| ClaimError::from_lookup(claim_id, e))?;

        if claim.status != ClaimStatus::Pending {
            return Err(ClaimError::AlreadyResolved(claim_id.to_string()));
        }

        let validation = ClaimValidator::validate(&claim);
        if !validation.is_valid {
            return Ok(ProcessOutcome {
                success: false,
                message: validation.errors.join(", "),
                auto_approved: false,
            });
        }

        let documents = self.store.count_documents(claim_id).await?;
        if documents == 0 {
            return Ok(ProcessOutcome {
                success: false,
                message: "Supporting documents are required for claim processing".to_string(),
                auto_approved: false,
            });
        }

        let check = AutoApprovalCheck::evaluate(&claim);
        if check.all_pass() {
            claim.update_status(ClaimStatus::Approved)?;
            self.store.save_claim(&claim).await?;

            tracing::info!(claim = %claim_id, actor = %actor_id, "claim auto-approved");
            return Ok(ProcessOutcome {
                success: true,
                message: "Claim automatically approved - Standard rates".to_string(),
                auto_approved: true,
            });
        }

        let reasons = check.review_reasons().join(", ");
        tracing::info!(
            claim = %claim_id,
            actor = %actor_id,
            reasons = %reasons,
            "claim held for manual review"
        );
        Ok(ProcessOutcome {
            success: true,
            message: format!("Claim requires manual review: {reasons}"),
            auto_approved: false,
        })
    }
}
