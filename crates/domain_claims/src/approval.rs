//! Manual approval workflow
//!
//! Reviewers resolve the claims the auto-approval engine held back. The
//! requested status name is resolved against the closed catalog once,
//! here at the boundary; the rest of the flow works on the enum.
//!
//! A manual decision re-runs field validation, and a manual approval
//! re-checks document presence, so a claim that would fail processing
//! cannot be waved through by hand.

use serde::Serialize;
use std::sync::Arc;

use core_kernel::{ClaimId, UserId};

use crate::claim::ClaimStatus;
use crate::error::ClaimError;
use crate::ports::ClaimStore;
use crate::validation::ClaimValidator;

/// Result of a manual decision
#[derive(Debug, Clone, Serialize)]
pub struct DecisionOutcome {
    pub success: bool,
    pub message: String,
}

/// Applies reviewer decisions to pending claims
pub struct ApprovalService {
    store: Arc<dyn ClaimStore>,
}

impl ApprovalService {
    /// Creates a new approval service over the given store
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Applies a manual Approve/Reject decision to a claim
    ///
    /// `status_name` must name a terminal status, matched case-sensitively
    /// ("Approved" or "Rejected").
    ///
    /// # Errors
    ///
    /// `UnknownStatus` for names outside the catalog (or "Pending"),
    /// `ClaimNotFound` if the id does not resolve, `AlreadyResolved` for
    /// claims no longer Pending, `ValidationFailed` / `MissingDocuments`
    /// when the re-checks fail, `Store` for persistence failures.
    pub async fn decide(
        &self,
        claim_id: ClaimId,
        status_name: &str,
        actor_id: UserId,
    ) -> Result<DecisionOutcome, ClaimError> {
        let decision = ClaimStatus::resolve(status_name)
            .filter(ClaimStatus::is_terminal)
            .ok_or_else(|| ClaimError::UnknownStatus(status_name.to_string()))?;

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
            return Err(ClaimError::ValidationFailed(validation.errors));
        }

        if decision == ClaimStatus::Approved && self.store.count_documents(claim_id).await? == 0 {
            return Err(ClaimError::MissingDocuments);
        }

        claim.update_status(decision)?;
        self.store.save_claim(&claim).await?;

        tracing::info!(
            claim = %claim_id,
            actor = %actor_id,
            decision = decision.name(),
            "manual decision applied"
        );

        Ok(DecisionOutcome {
            success: true,
            message: format!(
                "Claim {} has been manually {}.",
                claim_id,
                decision.name().to_lowercase()
            ),
        })
    }
}
