//! Claims handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;

use core_kernel::{ClaimId, Currency};
use domain_claims::error::ClaimError;
use domain_claims::processor::ClaimProcessor;
use domain_claims::approval::ApprovalService;
use domain_claims::submission::SubmissionService;
use domain_claims::work_entry::{summarize_entries, WorkEntry};
use rust_decimal::Decimal;

use crate::dto::claims::*;
use crate::error::ApiError;
use crate::middleware::ActorId;
use crate::AppState;

/// Submits a new claim with its work entries and documents
pub async fn submit_claim(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorId>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<Json<SubmitClaimResponse>, ApiError> {
    let service = SubmissionService::new(state.claims.clone());
    let claim = service.submit(actor.0, request.into_domain()).await?;

    Ok(Json(SubmitClaimResponse {
        success: true,
        message: "Claim submitted successfully".to_string(),
        claim_id: claim.id.into(),
    }))
}

/// Lists claims, most recently submitted first
pub async fn list_claims(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = state
        .claims
        .list_claims()
        .await
        .map_err(ClaimError::Store)?;

    Ok(Json(
        claims
            .iter()
            .map(|claim| ClaimResponse::from_claim(claim, Vec::new()))
            .collect(),
    ))
}

/// Gets a claim by ID with its document names
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClaimResponse>, ApiError> {
    let claim_id = ClaimId::from_uuid(id);
    let claim = state
        .claims
        .find_claim(claim_id)
        .await
        .map_err(|e| ClaimError::from_lookup(claim_id, e))?;
    let documents = state
        .claims
        .list_document_names(claim_id)
        .await
        .map_err(ClaimError::Store)?;

    Ok(Json(ClaimResponse::from_claim(&claim, documents)))
}

/// Runs the auto-approval decision engine on a pending claim
pub async fn process_claim(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorId>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProcessClaimResponse>, ApiError> {
    let processor = ClaimProcessor::new(state.claims.clone());
    let outcome = processor
        .process_claim(ClaimId::from_uuid(id), actor.0)
        .await?;

    Ok(Json(ProcessClaimResponse {
        success: outcome.success,
        message: outcome.message,
        auto_approved: outcome.auto_approved,
    }))
}

/// Applies a manual Approve/Reject decision to a claim
pub async fn decide_claim(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorId>,
    Path(id): Path<Uuid>,
    Json(request): Json<DecisionRequest>,
) -> Result<Json<DecisionResponse>, ApiError> {
    let service = ApprovalService::new(state.claims.clone());
    let outcome = service
        .decide(ClaimId::from_uuid(id), &request.status, actor.0)
        .await?;

    Ok(Json(DecisionResponse {
        success: outcome.success,
        message: outcome.message,
    }))
}

/// Validates work entries and returns the would-be claim aggregate
///
/// Violations come back as a 200 with `valid = false` so the submission
/// form can surface them inline.
pub async fn validate_entries(
    State(_state): State<AppState>,
    Json(request): Json<ValidateEntriesRequest>,
) -> Result<Json<ValidateEntriesResponse>, ApiError> {
    let entries: Vec<WorkEntry> = request.entries.into_iter().map(WorkEntry::from).collect();

    match summarize_entries(
        &entries,
        request.submission_date,
        request.hourly_rate,
        Currency::ZAR,
    ) {
        Ok(summary) => Ok(Json(ValidateEntriesResponse {
            valid: true,
            total_hours: summary.total_hours,
            amount: summary.amount.amount(),
            errors: Vec::new(),
        })),
        Err(error @ ClaimError::InvalidWorkEntry { .. }) => Ok(Json(ValidateEntriesResponse {
            valid: false,
            total_hours: Decimal::ZERO,
            amount: Decimal::ZERO,
            errors: vec![error.to_string()],
        })),
        Err(error) => Err(error.into()),
    }
}
