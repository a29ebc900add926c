//! Claim submission
//!
//! Turns a claimant's work entries and attachments into a persisted
//! Pending claim. The claim row and its documents are written in one
//! transaction by the store adapter; nothing is visible if any part
//! fails.

use rust_decimal::Decimal;
use std::sync::Arc;

use core_kernel::{Currency, UserId};

use crate::claim::Claim;
use crate::document::SupportingDocument;
use crate::error::ClaimError;
use crate::ports::ClaimStore;
use crate::validation::ClaimValidator;
use crate::work_entry::{summarize_entries, WorkEntry};

/// An attachment uploaded with a submission
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub file_name: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// A claimant's submission request
#[derive(Debug, Clone)]
pub struct NewClaimRequest {
    pub claim_type: String,
    pub hourly_rate: Decimal,
    pub entries: Vec<WorkEntry>,
    pub documents: Vec<NewDocument>,
}

/// Builds and persists new claims
pub struct SubmissionService {
    store: Arc<dyn ClaimStore>,
}

impl SubmissionService {
    /// Creates a new submission service over the given store
    pub fn new(store: Arc<dyn ClaimStore>) -> Self {
        Self { store }
    }

    /// Submits a claim on behalf of the given claimant
    ///
    /// Work entries are validated and aggregated, the resulting claim is
    /// validated, and claim plus documents are persisted atomically.
    ///
    /// # Errors
    ///
    /// `InvalidWorkEntry` on the first violating entry,
    /// `ValidationFailed` if the assembled claim breaks a field rule,
    /// `Store` for persistence failures.
    pub async fn submit(
        &self,
        claimant_id: UserId,
        request: NewClaimRequest,
    ) -> Result<Claim, ClaimError> {
        let summary = summarize_entries(
            &request.entries,
            chrono::Utc::now().date_naive(),
            request.hourly_rate,
            Currency::ZAR,
        )?;

        let claim = Claim::submitted(
            claimant_id,
            request.claim_type,
            request.hourly_rate,
            &summary,
        );

        let validation = ClaimValidator::validate(&claim);
        if !validation.is_valid {
            return Err(ClaimError::ValidationFailed(validation.errors));
        }

        let documents: Vec<SupportingDocument> = request
            .documents
            .into_iter()
            .map(|d| SupportingDocument::new(claim.id, d.file_name, d.content_type, d.content))
            .collect();

        self.store.create_claim(&claim, &documents).await?;

        tracing::info!(
            claim = %claim.id,
            claimant = %claimant_id,
            hours = %claim.hours_worked,
            amount = %claim.amount,
            "claim submitted"
        );

        Ok(claim)
    }
}
