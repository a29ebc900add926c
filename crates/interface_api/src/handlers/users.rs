//! User handlers

use axum::{extract::State, Json};

use domain_users::duplicate::DuplicateGuard;
use domain_users::onboarding::OnboardingService;
use domain_users::user::Role;

use crate::dto::users::*;
use crate::error::ApiError;
use crate::AppState;

/// Registers a new claimant, guarded against duplicates
pub async fn register_user(
    State(state): State<AppState>,
    Json(request): Json<CandidateRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let role = match request.role.as_deref() {
        None => Role::Lecturer,
        Some(name) => Role::resolve(name)
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown role: {name}")))?,
    };

    let service = OnboardingService::new(state.users.clone());
    let account = service.register(request.into_candidate(), role).await?;

    Ok(Json(UserResponse::from(&account)))
}

/// Checks a candidate against existing users without persisting anything
pub async fn check_duplicate(
    State(state): State<AppState>,
    Json(request): Json<CandidateRequest>,
) -> Result<Json<CheckDuplicateResponse>, ApiError> {
    let guard = DuplicateGuard::new(state.users.clone());
    let field = guard.check(&request.into_candidate()).await?;

    Ok(Json(CheckDuplicateResponse {
        is_duplicate: field.is_some(),
        field: field.map(|f| f.as_str().to_string()),
    }))
}
