//! Claimant onboarding
//!
//! Validates a candidate record, runs the duplicate guard, and persists
//! the admitted account.

use std::sync::Arc;
use validator::Validate;

use crate::duplicate::DuplicateGuard;
use crate::error::UserError;
use crate::ports::UserStore;
use crate::user::{Role, UserAccount, UserCandidate};

/// Registers new claimants
pub struct OnboardingService {
    store: Arc<dyn UserStore>,
    guard: DuplicateGuard,
}

impl OnboardingService {
    /// Creates a new onboarding service over the given store
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        let guard = DuplicateGuard::new(store.clone());
        Self { store, guard }
    }

    /// Registers a candidate with the given role
    ///
    /// # Errors
    ///
    /// `InvalidData` when candidate fields fail validation,
    /// `DuplicateUser` naming the first colliding field, `Store` for
    /// persistence failures.
    pub async fn register(
        &self,
        candidate: UserCandidate,
        role: Role,
    ) -> Result<UserAccount, UserError> {
        candidate
            .validate()
            .map_err(|e| UserError::InvalidData(e.to_string()))?;

        if let Some(field) = self.guard.check(&candidate).await? {
            return Err(UserError::DuplicateUser(field));
        }

        let account = UserAccount::from_candidate(candidate, role);
        self.store.create_user(&account).await?;

        tracing::info!(user = %account.id, role = role.name(), "user registered");
        Ok(account)
    }
}
